//! Ember Script - Lua bridge for game scripts
//!
//! Embeds a single Lua runtime and exposes to it:
//! - The `engine` module (`require("engine")` or the `engine` global)
//! - The host-owned `Player`, plus `Enemy` and `Chest` constructors
//! - Catalog and save operations backed by `ember-db`
//!
//! Scripts are loaded from a directory; the host then calls a named entry
//! point with no arguments.

mod bridge;
mod error;
mod host;
mod loader;
mod module;

pub use bridge::Shared;
pub use error::{Error, Result};
pub use host::ScriptHost;
pub use loader::ScriptLoader;
