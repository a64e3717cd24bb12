//! Presentation types produced by the dispatcher.
//!
//! A [`Dispatch`] names the next view, the attributes it renders with, and an
//! optional one-shot [`FlashMessage`] for the page shown after a redirect.

use serde::Serialize;

use crate::tutorial::Tutorial;

// ---------------------------------------------------------------------------
// Attribute keys
// ---------------------------------------------------------------------------

pub const ATTR_TUTORIALS: &str = "tutorials";
pub const ATTR_TUTORIAL: &str = "tutorial";
pub const ATTR_KEYWORD: &str = "keyword";
pub const ATTR_PAGE_TITLE: &str = "pageTitle";
pub const ATTR_MESSAGE: &str = "message";

/// Path of the tutorial list page, the target of every redirect.
pub const TUTORIALS_PATH: &str = "/tutorials";

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// The next thing to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The tutorial list page.
    Tutorials,
    /// The create/edit form.
    TutorialForm,
    /// Redirect the client to another path.
    Redirect(&'static str),
}

impl View {
    /// Symbolic identifier: template name, or the target path for redirects.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Tutorials => "tutorials",
            Self::TutorialForm => "tutorial_form",
            Self::Redirect(target) => *target,
        }
    }
}

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// A single model attribute value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ModelValue {
    Tutorials(Vec<Tutorial>),
    Tutorial(Tutorial),
    Text(String),
}

impl From<Vec<Tutorial>> for ModelValue {
    fn from(value: Vec<Tutorial>) -> Self {
        Self::Tutorials(value)
    }
}

impl From<Tutorial> for ModelValue {
    fn from(value: Tutorial) -> Self {
        Self::Tutorial(value)
    }
}

impl From<String> for ModelValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ModelValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Named attributes handed to a view, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    attributes: Vec<(&'static str, ModelValue)>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any previous value under the same key.
    pub fn insert(&mut self, key: &'static str, value: impl Into<ModelValue>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&ModelValue> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ModelValue)> {
        self.attributes.iter().map(|(k, v)| (*k, v))
    }

    // --- Typed accessors ---

    pub fn tutorials(&self) -> Option<&[Tutorial]> {
        match self.get(ATTR_TUTORIALS) {
            Some(ModelValue::Tutorials(list)) => Some(list.as_slice()),
            _ => None,
        }
    }

    pub fn tutorial(&self) -> Option<&Tutorial> {
        match self.get(ATTR_TUTORIAL) {
            Some(ModelValue::Tutorial(t)) => Some(t),
            _ => None,
        }
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(ModelValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn keyword(&self) -> Option<&str> {
        self.text(ATTR_KEYWORD)
    }

    pub fn page_title(&self) -> Option<&str> {
        self.text(ATTR_PAGE_TITLE)
    }
}

// Serializes as a JSON object, not a list of pairs.
impl Serialize for Model {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

// ---------------------------------------------------------------------------
// Flash message
// ---------------------------------------------------------------------------

/// One-shot message surfaced on the next rendered page, then discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FlashMessage(String);

impl FlashMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for FlashMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Outcome of one dispatcher operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub view: View,
    pub model: Model,
    pub flash: Option<FlashMessage>,
}

impl Dispatch {
    /// Render `view` with `model`, no flash.
    pub fn page(view: View, model: Model) -> Self {
        Self {
            view,
            model,
            flash: None,
        }
    }

    /// Redirect to `target` carrying a flash message.
    pub fn redirect(target: &'static str, flash: impl Into<String>) -> Self {
        Self {
            view: View::Redirect(target),
            model: Model::new(),
            flash: Some(FlashMessage::new(flash)),
        }
    }
}
