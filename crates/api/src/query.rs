//! Query and form parameter types for the tutorial handlers.
//!
//! The form mirrors what an HTML `<form>` posts: every field arrives as a
//! string, hidden inputs may be empty, and an unchecked checkbox is absent.

use serde::{Deserialize, Deserializer};
use tutorials_core::error::CoreError;
use tutorials_core::tutorial::Tutorial;
use tutorials_core::types::DbId;

/// `?keyword=` on the list page.
#[derive(Debug, Default, Deserialize)]
pub struct KeywordParams {
    pub keyword: Option<String>,
}

/// Form body posted to `/tutorials/save`.
#[derive(Debug, Deserialize)]
pub struct TutorialForm {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub id: Option<DbId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub level: i32,
    #[serde(default, deserialize_with = "checkbox")]
    pub published: bool,
}

/// Binding a posted form checks the field constraints; the dispatcher
/// only ever sees tutorials that passed them.
impl TryFrom<TutorialForm> for Tutorial {
    type Error = CoreError;

    fn try_from(form: TutorialForm) -> Result<Self, Self::Error> {
        let tutorial = Tutorial {
            id: form.id,
            title: form.title,
            description: form.description,
            level: form.level,
            published: form.published,
        };
        tutorial.validate()?;
        Ok(tutorial)
    }
}

/// `""` → `None`, otherwise parse.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

/// `""` → `T::default()`, otherwise parse.
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    Ok(empty_as_none(deserializer)?.unwrap_or_default())
}

/// Accept the values browsers and clients send for a checked box.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "" | "off" | "false" | "0" | "no" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid boolean '{other}'"
        ))),
    }
}
