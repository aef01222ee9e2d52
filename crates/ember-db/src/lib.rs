//! Ember DB - Durable storage on SQLite
//!
//! Provides persistent storage for:
//! - The item catalog (`itemRegistry`), seeded once with the built-in weapons
//! - The single save record (`savedData`) holding player hp and weapon type
//!
//! Every operation opens its own connection and closes it before returning.

mod catalog;
mod error;
mod save;
mod store;

pub use catalog::BUILTIN_ITEMS;
pub use error::{Error, Result};
pub use store::Store;
