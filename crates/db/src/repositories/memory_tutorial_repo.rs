//! In-memory tutorial storage.
//!
//! Used when no `DATABASE_URL` is configured and by the API integration
//! tests. Nothing survives a restart.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use tutorials_core::error::CoreError;
use tutorials_core::repository::TutorialRepository;
use tutorials_core::tutorial::Tutorial;
use tutorials_core::types::DbId;

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<DbId, Tutorial>,
    last_id: DbId,
}

/// Thread-safe tutorial store backed by a `BTreeMap`, so listings come out
/// ordered by id like the Postgres repository.
#[derive(Debug, Default)]
pub struct MemoryTutorialRepo {
    inner: RwLock<Inner>,
}

fn poison_err<T>(_: PoisonError<T>) -> CoreError {
    CoreError::persistence("tutorial store lock poisoned")
}

impl MemoryTutorialRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `tutorials`, assigning ids in order.
    pub fn seeded(tutorials: impl IntoIterator<Item = Tutorial>) -> Self {
        let mut inner = Inner::default();
        for tutorial in tutorials {
            inner.last_id += 1;
            let id = inner.last_id;
            inner.rows.insert(id, tutorial.with_id(id));
        }
        Self {
            inner: RwLock::new(inner),
        }
    }

    /// Number of stored tutorials.
    pub fn len(&self) -> Result<usize, CoreError> {
        Ok(self.inner.read().map_err(poison_err)?.rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, CoreError> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl TutorialRepository for MemoryTutorialRepo {
    async fn find_all(&self) -> Result<Vec<Tutorial>, CoreError> {
        let inner = self.inner.read().map_err(poison_err)?;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_title_containing_ignore_case(
        &self,
        keyword: &str,
    ) -> Result<Vec<Tutorial>, CoreError> {
        let needle = keyword.to_lowercase();
        let inner = self.inner.read().map_err(poison_err)?;
        Ok(inner
            .rows
            .values()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Tutorial>, CoreError> {
        let inner = self.inner.read().map_err(poison_err)?;
        Ok(inner.rows.get(&id).cloned())
    }

    async fn save(&self, tutorial: &Tutorial) -> Result<Tutorial, CoreError> {
        let mut inner = self.inner.write().map_err(poison_err)?;

        let id = match tutorial.id {
            Some(id) if inner.rows.contains_key(&id) => id,
            Some(id) => {
                return Err(CoreError::NotFound {
                    entity: "Tutorial",
                    id,
                })
            }
            None => {
                inner.last_id += 1;
                inner.last_id
            }
        };

        let saved = tutorial.clone().with_id(id);
        inner.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, CoreError> {
        let mut inner = self.inner.write().map_err(poison_err)?;
        Ok(inner.rows.remove(&id).is_some())
    }

    async fn update_published_status(
        &self,
        id: DbId,
        published: bool,
    ) -> Result<bool, CoreError> {
        let mut inner = self.inner.write().map_err(poison_err)?;
        match inner.rows.get_mut(&id) {
            Some(tutorial) => {
                tutorial.published = published;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
