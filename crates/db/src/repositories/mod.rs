//! Repository layer.
//!
//! Each repository implements [`TutorialRepository`](tutorials_core::repository::TutorialRepository)
//! so the API can pick Postgres or in-memory storage at startup.

pub mod memory_tutorial_repo;
pub mod tutorial_repo;

pub use memory_tutorial_repo::MemoryTutorialRepo;
pub use tutorial_repo::PgTutorialRepo;

/// Escape `LIKE` metacharacters so a keyword matches literally.
pub(crate) fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
