//! One-shot flash messages carried across a redirect.
//!
//! A redirect stores its [`FlashMessage`] under a fresh UUID and hands the id
//! to the browser in the [`FLASH_COOKIE`] cookie. The next page render takes
//! the message out of the store (so it is shown once) and expires the cookie.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::http::header::COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use tutorials_core::view::FlashMessage;
use uuid::Uuid;

/// Cookie holding the pending flash id.
pub const FLASH_COOKIE: &str = "tutorials_flash";

/// How long an unclaimed message is kept.
pub const FLASH_TTL: Duration = Duration::from_secs(300);

/// In-process store of pending flash messages keyed by cookie id.
#[derive(Debug, Default)]
pub struct FlashStore {
    pending: Mutex<HashMap<Uuid, (FlashMessage, Instant)>>,
}

impl FlashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park `message` and return the id to hand to the client.
    ///
    /// Also drops any messages older than [`FLASH_TTL`].
    pub fn push(&self, message: FlashMessage) -> Uuid {
        let id = Uuid::new_v4();
        let now = Instant::now();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.retain(|_, (_, stored_at)| now.duration_since(*stored_at) < FLASH_TTL);
        pending.insert(id, (message, now));
        id
    }

    /// Remove and return the message stored under `id`, if still pending.
    pub fn take(&self, id: Uuid) -> Option<FlashMessage> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        let (message, stored_at) = pending.remove(&id)?;
        (stored_at.elapsed() < FLASH_TTL).then_some(message)
    }

    pub fn len(&self) -> usize {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the flash id from the request's `Cookie` headers.
pub fn flash_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == FLASH_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value handing `id` to the client.
pub fn set_flash_cookie(id: Uuid) -> HeaderValue {
    let value = format!(
        "{FLASH_COOKIE}={id}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        FLASH_TTL.as_secs()
    );
    // A hyphenated UUID and fixed attributes are always valid header bytes.
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// `Set-Cookie` value expiring the flash cookie.
pub fn clear_flash_cookie() -> HeaderValue {
    HeaderValue::from_static("tutorials_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax")
}
