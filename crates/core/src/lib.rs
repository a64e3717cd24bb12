//! Domain layer for the tutorials service.
//!
//! Holds the `Tutorial` entity, the repository seam, and the dispatcher
//! that turns request intents into views. Nothing in here performs I/O.

pub mod dispatch;
pub mod error;
pub mod repository;
pub mod tutorial;
pub mod types;
pub mod view;
