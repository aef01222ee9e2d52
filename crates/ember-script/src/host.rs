//! The embedded Lua runtime and its entry protocol

use crate::bridge::Shared;
use crate::error::{Error, Result};
use crate::loader::ScriptLoader;
use crate::module;
use ember_core::Player;
use ember_db::Store;
use log::info;
use mlua::{Function, Lua, Value};

/// The process's single script runtime.
///
/// Owns the Lua state and the session's `Player`. It is deliberately not
/// `Clone`; the entry point constructs one and lends it to whoever needs to
/// run script code.
pub struct ScriptHost {
    lua: Lua,
    player: Shared<Player>,
    store: Store,
    loader: ScriptLoader,
}

impl ScriptHost {
    /// Start the runtime on an opened store and publish the `engine` module
    pub fn new(store: Store, loader: ScriptLoader) -> Result<Self> {
        let lua = Lua::new();
        let player = Shared::new(Player::new());

        lua.set_app_data(store.clone());
        module::install(&lua, &player)?;
        loader.install_search_path(&lua)?;

        info!("Script runtime started (scripts in {:?})", loader.root());
        Ok(Self {
            lua,
            player,
            store,
            loader,
        })
    }

    /// The session's player, aliased with `engine.player`
    pub fn player(&self) -> &Shared<Player> {
        &self.player
    }

    /// The store backing catalog and save operations
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Run a chunk of Lua source in the runtime
    pub fn exec(&self, source: &str) -> Result<()> {
        self.lua.load(source).set_name("=exec").exec()?;
        Ok(())
    }

    /// Load `module` and call its `entry_point` with no arguments.
    ///
    /// The entry point is looked up in the table the module returns, then in
    /// globals. Errors raised by the script come back as `Err`.
    pub fn run_entry(&self, module: &str, entry_point: &str) -> Result<()> {
        let exported = self.loader.load_module(&self.lua, module)?;
        let entry = self.find_entry(&exported, entry_point)?;

        info!("Calling {}.{}", module, entry_point);
        entry.call::<_, ()>(())?;
        Ok(())
    }

    fn find_entry<'lua>(&'lua self, exported: &Value<'lua>, name: &str) -> Result<Function<'lua>> {
        if let Value::Table(table) = exported {
            if let Value::Function(entry) = table.get::<_, Value>(name)? {
                return Ok(entry);
            }
        }
        match self.lua.globals().get::<_, Value>(name)? {
            Value::Function(entry) => Ok(entry),
            _ => Err(Error::EntryPointNotFound(name.to_string())),
        }
    }
}
