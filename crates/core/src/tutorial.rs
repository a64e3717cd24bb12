//! The `Tutorial` entity and its field constraints.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum title length in characters (matches `VARCHAR(128)`).
pub const MAX_TITLE_LENGTH: usize = 128;

/// Maximum description length in characters (matches `VARCHAR(256)`).
pub const MAX_DESCRIPTION_LENGTH: usize = 256;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A tutorial in the catalogue.
///
/// `id` is `None` until the repository persists the entity; after that it is
/// assigned by storage and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: Option<DbId>,
    pub title: String,
    pub description: String,
    pub level: i32,
    pub published: bool,
}

impl Tutorial {
    /// Build an unsaved tutorial.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        level: i32,
        published: bool,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            description: description.into(),
            level,
            published,
        }
    }

    /// Blank tutorial backing the "create" form. Published by default.
    pub fn draft() -> Self {
        Self::new("", "", 0, true)
    }

    /// Return a copy carrying the given storage id.
    pub fn with_id(mut self, id: DbId) -> Self {
        self.id = Some(id);
        self
    }

    /// Whether this entity has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Check the field constraints before the entity reaches storage.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.title.trim().is_empty() {
            return Err(CoreError::Validation("title must not be blank".to_string()));
        }

        let title_len = self.title.chars().count();
        if title_len > MAX_TITLE_LENGTH {
            return Err(CoreError::Validation(format!(
                "title must be at most {MAX_TITLE_LENGTH} characters, got {title_len}"
            )));
        }

        let description_len = self.description.chars().count();
        if description_len > MAX_DESCRIPTION_LENGTH {
            return Err(CoreError::Validation(format!(
                "description must be at most {MAX_DESCRIPTION_LENGTH} characters, got {description_len}"
            )));
        }

        Ok(())
    }
}
