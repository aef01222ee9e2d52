//! Error types for ember-script

use std::path::PathBuf;
use thiserror::Error;

/// Script bridge error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lua error: {0}")]
    Lua(#[from] mlua::Error),

    #[error("Script not found: {0:?}")]
    ScriptNotFound(PathBuf),

    #[error("Entry point not found: {0}")]
    EntryPointNotFound(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
