//! Storage seam for tutorials.
//!
//! The dispatcher only talks to storage through [`TutorialRepository`], so a
//! Postgres-backed repository, the in-memory one, or a test double can be
//! injected interchangeably.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::tutorial::Tutorial;
use crate::types::DbId;

/// Persistence operations over [`Tutorial`] entities.
///
/// Errors from the underlying store surface as [`CoreError::Persistence`].
#[async_trait]
pub trait TutorialRepository: Send + Sync {
    /// All tutorials, ordered by id.
    async fn find_all(&self) -> Result<Vec<Tutorial>, CoreError>;

    /// Tutorials whose title contains `keyword`, compared case-insensitively.
    async fn find_by_title_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> Result<Vec<Tutorial>, CoreError>;

    /// Look up a tutorial by id. `None` if the id is unknown.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Tutorial>, CoreError>;

    /// Insert (when `id` is `None`) or fully overwrite (when `Some`) a tutorial.
    ///
    /// Returns the stored entity, carrying its id. Overwriting an unknown id
    /// is [`CoreError::NotFound`].
    async fn save(&self, tutorial: &Tutorial) -> Result<Tutorial, CoreError>;

    /// Delete by id. Returns `false` if no row matched.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError>;

    /// Set the `published` flag only. Returns `false` if no row matched.
    async fn update_published_status(&self, id: DbId, published: bool)
        -> Result<bool, CoreError>;

    /// Cheap liveness probe for the health endpoint.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
