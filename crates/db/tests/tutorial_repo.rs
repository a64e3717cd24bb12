//! Integration tests for `PgTutorialRepo` against a real database.
//!
//! Each test gets a fresh database from `#[sqlx::test]`, created on the
//! server named by `DATABASE_URL` and migrated from `./migrations`.

use assert_matches::assert_matches;
use sqlx::PgPool;
use tutorials_core::error::CoreError;
use tutorials_core::repository::TutorialRepository;
use tutorials_core::tutorial::Tutorial;
use tutorials_db::repositories::PgTutorialRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_tutorial(title: &str) -> Tutorial {
    Tutorial::new(title, "Test Description", 3, true)
}

async fn seed(repo: &PgTutorialRepo, titles: &[&str]) -> Vec<Tutorial> {
    let mut saved = Vec::new();
    for title in titles {
        saved.push(repo.save(&new_tutorial(title)).await.unwrap());
    }
    saved
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_bootstrap_health_check(pool: PgPool) {
    tutorials_db::health_check(&pool).await.unwrap();

    let repo = PgTutorialRepo::new(pool);
    repo.health_check().await.unwrap();
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_inserts_and_assigns_id(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);

    let saved = repo.save(&new_tutorial("Spring Boot")).await.unwrap();

    let id = saved.id.expect("persisted tutorial has an id");
    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(found, saved);
    assert!(found.published);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_with_id_overwrites_all_fields(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);
    let saved = seed(&repo, &["Original"]).await.remove(0);

    let mut edited = saved.clone();
    edited.title = "Edited".into();
    edited.description = "New description".into();
    edited.level = 7;
    edited.published = false;
    let updated = repo.save(&edited).await.unwrap();

    assert_eq!(updated, edited);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_save_with_unknown_id_is_not_found(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);

    let result = repo.save(&new_tutorial("Ghost").with_id(999_999)).await;

    assert_matches!(result, Err(CoreError::NotFound { id: 999_999, .. }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_find_all_ordered_by_id(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);
    seed(&repo, &["B", "A", "C"]).await;

    let titles: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();

    assert_eq!(titles, vec!["B", "A", "C"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_keyword_search_ignores_case(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);
    seed(&repo, &["Spring Boot Thymeleaf", "Rust", "spring data"]).await;

    let found = repo
        .find_by_title_containing_ignore_case("SPRING")
        .await
        .unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|t| t.title.to_lowercase().contains("spring")));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_keyword_wildcards_match_literally(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);
    seed(&repo, &["100% Rust", "1000 Rust", "snake_case"]).await;

    let percent = repo.find_by_title_containing_ignore_case("0%").await.unwrap();
    let underscore = repo.find_by_title_containing_ignore_case("e_c").await.unwrap();
    let nothing = repo.find_by_title_containing_ignore_case("_x_").await.unwrap();

    assert_eq!(percent.len(), 1);
    assert_eq!(percent[0].title, "100% Rust");
    assert_eq!(underscore.len(), 1);
    assert!(nothing.is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_reports_affected_row(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);
    let id = seed(&repo, &["Delete me"]).await[0].id.unwrap();

    assert!(repo.delete_by_id(id).await.unwrap());
    assert!(!repo.delete_by_id(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_published_status_only_touches_flag(pool: PgPool) {
    let repo = PgTutorialRepo::new(pool);
    let saved = seed(&repo, &["Publish me"]).await.remove(0);
    let id = saved.id.unwrap();

    assert!(repo.update_published_status(id, false).await.unwrap());
    assert!(!repo.update_published_status(id + 1, false).await.unwrap());

    let found = repo.find_by_id(id).await.unwrap().unwrap();
    assert!(!found.published);
    assert_eq!(found.title, saved.title);
    assert_eq!(found.level, saved.level);
}
