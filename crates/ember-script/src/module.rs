//! The `engine` module seen by scripts

use crate::bridge::{installed_store, Shared};
use ember_core::{Chest, Enemy, ItemId, Player};
use log::{info, warn};
use mlua::{AnyUserData, Error as LuaError, Lua, Result as LuaResult, Table};

/// Build the `engine` table and publish it as a global and as `package.loaded.engine`.
pub(crate) fn install(lua: &Lua, player: &Shared<Player>) -> LuaResult<()> {
    let engine = lua.create_table()?;

    engine.set("player", player.clone())?;

    engine.set(
        "Enemy",
        lua.create_function(
            |_, (x, y, hp, damage, type_id): (i64, i64, i64, i64, i64)| {
                Ok(Shared::new(Enemy::new(x, y, hp, damage, type_id)))
            },
        )?,
    )?;
    engine.set(
        "Chest",
        lua.create_function(|_, (x, y): (i64, i64)| Ok(Shared::new(Chest::new(x, y))))?,
    )?;

    let save = lua.create_function(|lua, target: AnyUserData| {
        let player = target.borrow::<Shared<Player>>()?;
        installed_store(lua)?
            .save(&player.borrow())
            .map_err(LuaError::external)?;
        info!("Game saved.");
        Ok(true)
    })?;
    engine.set("save", save.clone())?;
    engine.set("save_game", save)?;

    let load = lua.create_function(|lua, target: AnyUserData| {
        let player = target.borrow::<Shared<Player>>()?;
        let loaded = installed_store(lua)?
            .load(&mut player.borrow_mut())
            .map_err(LuaError::external)?;
        if loaded {
            info!("Game loaded.");
        } else {
            warn!("No saved game to load.");
        }
        Ok(loaded)
    })?;
    engine.set("load", load.clone())?;
    engine.set("load_game", load)?;

    let all_ids = lua.create_function(|lua, ()| {
        installed_store(lua)?
            .all_ids()
            .map_err(LuaError::external)
    })?;
    engine.set("allIds", all_ids.clone())?;
    engine.set("getAllItemIDs", all_ids)?;

    engine.set(
        "itemName",
        lua.create_function(|lua, id: ItemId| {
            installed_store(lua)?
                .name_of(id)
                .map_err(LuaError::external)
        })?,
    )?;
    engine.set(
        "itemPower",
        lua.create_function(|lua, id: ItemId| {
            let item = installed_store(lua)?
                .item(id)
                .map_err(LuaError::external)?;
            Ok(item.map(|item| item.power))
        })?,
    )?;

    engine.set(
        "log",
        lua.create_function(|_, message: String| {
            info!(target: "ember::script", "{}", message);
            Ok(())
        })?,
    )?;

    let globals = lua.globals();
    globals.set("engine", engine.clone())?;
    let package: Table = globals.get("package")?;
    let loaded: Table = package.get("loaded")?;
    loaded.set("engine", engine)?;
    Ok(())
}
