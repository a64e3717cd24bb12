//! Row mapping for the `tutorials` table.

use sqlx::FromRow;
use tutorials_core::tutorial::Tutorial;
use tutorials_core::types::DbId;

/// A row from the `tutorials` table.
///
/// `description` and `level` are nullable columns; the domain entity reads
/// them as empty / zero.
#[derive(Debug, Clone, FromRow)]
pub struct TutorialRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub level: Option<i32>,
    pub published: bool,
}

impl From<TutorialRow> for Tutorial {
    fn from(row: TutorialRow) -> Self {
        Tutorial {
            id: Some(row.id),
            title: row.title,
            description: row.description.unwrap_or_default(),
            level: row.level.unwrap_or_default(),
            published: row.published,
        }
    }
}
