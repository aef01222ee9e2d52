//! Lua script loader

use crate::error::{Error, Result};
use log::debug;
use mlua::{Lua, Table, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolves and runs script modules from a scripts directory
#[derive(Debug, Clone)]
pub struct ScriptLoader {
    root: PathBuf,
}

impl ScriptLoader {
    /// Create a loader rooted at a scripts directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The scripts directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a module name; dots separate directories as in `require`
    pub fn module_path(&self, module: &str) -> PathBuf {
        let mut path = self.root.clone();
        for part in module.split('.') {
            path.push(part);
        }
        path.set_extension("lua");
        path
    }

    /// Let `require` find modules in the scripts directory
    pub fn install_search_path(&self, lua: &Lua) -> Result<()> {
        let package: Table = lua.globals().get("package")?;
        let current: String = package.get("path")?;
        let root = self.root.to_string_lossy();
        package.set(
            "path",
            format!("{root}/?.lua;{root}/?/init.lua;{current}"),
        )?;
        Ok(())
    }

    /// Run a module file and return whatever its chunk returns
    pub fn load_module<'lua>(&self, lua: &'lua Lua, module: &str) -> Result<Value<'lua>> {
        let path = self.module_path(module);
        if !path.is_file() {
            return Err(Error::ScriptNotFound(path));
        }

        let source = fs::read_to_string(&path)?;
        debug!("Loading script module {} from {:?}", module, path);
        let value = lua
            .load(source.as_str())
            .set_name(format!("@{}", path.display()))
            .eval::<Value>()?;

        // Mirror `require` so later requires of the same module reuse it.
        if !matches!(value, Value::Nil) {
            let package: Table = lua.globals().get("package")?;
            let loaded: Table = package.get("loaded")?;
            loaded.set(module, value.clone())?;
        }
        Ok(value)
    }
}
