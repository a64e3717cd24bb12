//! Repository for the `tutorials` table.

use async_trait::async_trait;
use sqlx::PgPool;
use tutorials_core::error::CoreError;
use tutorials_core::repository::TutorialRepository;
use tutorials_core::tutorial::Tutorial;
use tutorials_core::types::DbId;

use crate::models::tutorial::TutorialRow;
use crate::repositories::escape_like;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, level, published";

/// Postgres-backed tutorial storage.
#[derive(Debug, Clone)]
pub struct PgTutorialRepo {
    pool: PgPool,
}

impl PgTutorialRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(&self, tutorial: &Tutorial) -> Result<Tutorial, sqlx::Error> {
        let query = format!(
            "INSERT INTO tutorials (title, description, level, published)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TutorialRow>(&query)
            .bind(&tutorial.title)
            .bind(&tutorial.description)
            .bind(tutorial.level)
            .bind(tutorial.published)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn overwrite(&self, id: DbId, tutorial: &Tutorial) -> Result<Option<Tutorial>, sqlx::Error> {
        let query = format!(
            "UPDATE tutorials SET
                title = $2,
                description = $3,
                level = $4,
                published = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TutorialRow>(&query)
            .bind(id)
            .bind(&tutorial.title)
            .bind(&tutorial.description)
            .bind(tutorial.level)
            .bind(tutorial.published)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Tutorial::from))
    }
}

#[async_trait]
impl TutorialRepository for PgTutorialRepo {
    async fn find_all(&self) -> Result<Vec<Tutorial>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM tutorials ORDER BY id");
        let rows = sqlx::query_as::<_, TutorialRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(CoreError::persistence)?;
        Ok(rows.into_iter().map(Tutorial::from).collect())
    }

    async fn find_by_title_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> Result<Vec<Tutorial>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM tutorials
             WHERE title ILIKE '%' || $1 || '%' ESCAPE '\\'
             ORDER BY id"
        );
        let rows = sqlx::query_as::<_, TutorialRow>(&query)
            .bind(escape_like(keyword))
            .fetch_all(&self.pool)
            .await
            .map_err(CoreError::persistence)?;
        Ok(rows.into_iter().map(Tutorial::from).collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Tutorial>, CoreError> {
        let query = format!("SELECT {COLUMNS} FROM tutorials WHERE id = $1");
        let row = sqlx::query_as::<_, TutorialRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(CoreError::persistence)?;
        Ok(row.map(Tutorial::from))
    }

    async fn save(&self, tutorial: &Tutorial) -> Result<Tutorial, CoreError> {
        match tutorial.id {
            None => self.insert(tutorial).await.map_err(CoreError::persistence),
            Some(id) => self
                .overwrite(id, tutorial)
                .await
                .map_err(CoreError::persistence)?
                .ok_or(CoreError::NotFound {
                    entity: "Tutorial",
                    id,
                }),
        }
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        let result = sqlx::query("DELETE FROM tutorials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(CoreError::persistence)?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_published_status(
        &self,
        id: DbId,
        published: bool,
    ) -> Result<bool, CoreError> {
        let result = sqlx::query("UPDATE tutorials SET published = $2 WHERE id = $1")
            .bind(id)
            .bind(published)
            .execute(&self.pool)
            .await
            .map_err(CoreError::persistence)?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(CoreError::persistence)
    }
}
