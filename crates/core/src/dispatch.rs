//! Request-to-view dispatch for the tutorial catalogue.
//!
//! [`TutorialDispatcher`] is a thin layer over a [`TutorialRepository`]: each
//! operation performs the matching repository call, then picks the next
//! [`View`], fills its [`Model`], and sets a flash message where the user
//! should see confirmation after a redirect.

use std::sync::Arc;

use crate::error::CoreError;
use crate::repository::TutorialRepository;
use crate::tutorial::Tutorial;
use crate::types::DbId;
use crate::view::{
    Dispatch, Model, View, ATTR_KEYWORD, ATTR_PAGE_TITLE, ATTR_TUTORIAL, ATTR_TUTORIALS,
    TUTORIALS_PATH,
};

pub const CREATE_PAGE_TITLE: &str = "Create new Tutorial";
pub const SAVED_MESSAGE: &str = "The Tutorial has been saved successfully!";
pub const NOT_FOUND_MESSAGE: &str = "Tutorial not found";

pub fn edit_page_title(id: DbId) -> String {
    format!("Edit Tutorial (ID: {id})")
}

pub fn deleted_message(id: DbId) -> String {
    format!("The Tutorial with id={id} has been deleted successfully!")
}

pub fn published_message(id: DbId, published: bool) -> String {
    let status = if published { "published" } else { "unpublished" };
    format!("The Tutorial id={id} has been {status}")
}

/// Maps tutorial request intents onto repository calls and views.
///
/// Holds no per-request state; cloning shares the repository.
pub struct TutorialDispatcher<R: TutorialRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: TutorialRepository + ?Sized> Clone for TutorialDispatcher<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R: TutorialRepository + ?Sized> TutorialDispatcher<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repo
    }

    /// List tutorials, filtered by title when a non-empty keyword is given.
    pub async fn list_tutorials(&self, keyword: Option<&str>) -> Result<Dispatch, CoreError> {
        let mut model = Model::new();

        let tutorials = match keyword.filter(|k| !k.is_empty()) {
            Some(keyword) => {
                let found = self.repo.find_by_title_containing_ignore_case(keyword).await?;
                model.insert(ATTR_KEYWORD, keyword);
                found
            }
            None => self.repo.find_all().await?,
        };

        tracing::debug!(count = tutorials.len(), ?keyword, "Listed tutorials");
        model.insert(ATTR_TUTORIALS, tutorials);

        Ok(Dispatch::page(View::Tutorials, model))
    }

    /// Blank form for a new tutorial.
    pub fn new_tutorial_form(&self) -> Dispatch {
        let mut model = Model::new();
        model.insert(ATTR_TUTORIAL, Tutorial::draft());
        model.insert(ATTR_PAGE_TITLE, CREATE_PAGE_TITLE);

        Dispatch::page(View::TutorialForm, model)
    }

    /// Persist a tutorial (create or overwrite) and return to the list.
    ///
    /// Field validation belongs to form binding; this always calls `save`.
    pub async fn save_tutorial(&self, tutorial: Tutorial) -> Result<Dispatch, CoreError> {
        let saved = self.repo.save(&tutorial).await?;
        tracing::info!(
            tutorial_id = ?saved.id,
            created = !tutorial.is_persisted(),
            "Tutorial saved"
        );

        Ok(Dispatch::redirect(TUTORIALS_PATH, SAVED_MESSAGE))
    }

    /// Edit form for an existing tutorial, or back to the list if it is gone.
    pub async fn edit_tutorial_form(&self, id: DbId) -> Result<Dispatch, CoreError> {
        let Some(tutorial) = self.repo.find_by_id(id).await? else {
            tracing::debug!(tutorial_id = id, "Tutorial to edit not found");
            return Ok(Dispatch::redirect(TUTORIALS_PATH, NOT_FOUND_MESSAGE));
        };

        let mut model = Model::new();
        model.insert(ATTR_TUTORIAL, tutorial);
        model.insert(ATTR_PAGE_TITLE, edit_page_title(id));

        Ok(Dispatch::page(View::TutorialForm, model))
    }

    /// Delete a tutorial. Unknown ids are a no-op.
    pub async fn delete_tutorial(&self, id: DbId) -> Result<Dispatch, CoreError> {
        if self.repo.delete_by_id(id).await? {
            tracing::info!(tutorial_id = id, "Tutorial deleted");
        } else {
            tracing::warn!(tutorial_id = id, "Delete matched no tutorial");
        }

        Ok(Dispatch::redirect(TUTORIALS_PATH, deleted_message(id)))
    }

    /// Flip the published flag. Unknown ids are a no-op.
    pub async fn set_published_status(
        &self,
        id: DbId,
        published: bool,
    ) -> Result<Dispatch, CoreError> {
        if self.repo.update_published_status(id, published).await? {
            tracing::info!(tutorial_id = id, published, "Tutorial published status updated");
        } else {
            tracing::warn!(tutorial_id = id, published, "Published status update matched no tutorial");
        }

        Ok(Dispatch::redirect(
            TUTORIALS_PATH,
            published_message(id, published),
        ))
    }
}
