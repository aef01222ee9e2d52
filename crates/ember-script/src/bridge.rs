//! Native state exposed to Lua as userdata

use ember_core::{AddItemOutcome, Chest, Enemy, ItemId, Player};
use ember_db::Store;
use log::{info, warn};
use mlua::{
    Error as LuaError, Lua, MetaMethod, Result as LuaResult, UserData, UserDataFields,
    UserDataMethods,
};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Shared handle to a native value.
///
/// Cloning aliases the same value, so a field written from Lua is visible to
/// every other holder, native or script.
#[derive(Debug)]
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    /// Wrap a value in a new shared handle
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    /// Borrow the value
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    /// Borrow the value mutably
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether two handles alias the same value
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// The store installed by the host as Lua app data
pub(crate) fn installed_store(lua: &Lua) -> LuaResult<Store> {
    lua.app_data_ref::<Store>()
        .map(|store| (*store).clone())
        .ok_or_else(|| LuaError::RuntimeError("engine store is not installed".to_string()))
}

impl UserData for Shared<Player> {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("hp", |_, this| Ok(this.borrow().hp));
        fields.add_field_method_set("hp", |_, this, value: i64| {
            this.borrow_mut().hp = value;
            Ok(())
        });
        fields.add_field_method_get("weaponType", |_, this| Ok(this.borrow().weapon_type));
        fields.add_field_method_set("weaponType", |_, this, value: i64| {
            this.borrow_mut().weapon_type = value;
            Ok(())
        });
        fields.add_field_method_get("current_weapon_id", |_, this| {
            Ok(this.borrow().current_weapon_id.clone())
        });
        fields.add_field_method_set("current_weapon_id", |_, this, value: String| {
            this.borrow_mut().current_weapon_id = value;
            Ok(())
        });
        fields.add_field_method_get("x", |_, this| Ok(this.borrow().x));
        fields.add_field_method_set("x", |_, this, value: i64| {
            this.borrow_mut().x = value;
            Ok(())
        });
        fields.add_field_method_get("y", |_, this| Ok(this.borrow().y));
        fields.add_field_method_set("y", |_, this, value: i64| {
            this.borrow_mut().y = value;
            Ok(())
        });
        // Read-only copy; scripts change the inventory through addItem.
        fields.add_field_method_get("inventory", |_, this| Ok(this.borrow().inventory().to_vec()));
    }

    fn add_methods<'lua, M: UserDataMethods<'lua, Self>>(methods: &mut M) {
        methods.add_method("addItem", |lua, this, id: ItemId| {
            let store = installed_store(lua)?;
            let outcome = this
                .borrow_mut()
                .add_item(id, &store)
                .map_err(LuaError::external)?;
            let message = outcome.message(id);
            match outcome {
                AddItemOutcome::Added { name } => {
                    info!("{}", message);
                    Ok((true, name))
                }
                _ => {
                    warn!("{}", message);
                    Ok((false, message))
                }
            }
        });

        methods.add_method("inspectItem", |lua, this, id: ItemId| {
            let store = installed_store(lua)?;
            this.borrow()
                .inspect_item(id, &store)
                .map_err(LuaError::external)
        });

        methods.add_method("listInventory", |lua, this, ()| {
            let store = installed_store(lua)?;
            let entries = this
                .borrow()
                .list_inventory(&store)
                .map_err(LuaError::external)?;
            let list = lua.create_table()?;
            for (index, (id, name)) in entries.into_iter().enumerate() {
                let entry = lua.create_table()?;
                entry.set("id", id)?;
                entry.set("name", name)?;
                list.raw_set(index + 1, entry)?;
            }
            Ok(list)
        });

        methods.add_method("printInventory", |lua, this, ()| {
            let store = installed_store(lua)?;
            let entries = this
                .borrow()
                .list_inventory(&store)
                .map_err(LuaError::external)?;
            println!("--- INVENTORY ---");
            if entries.is_empty() {
                println!("(Empty)");
            }
            for (id, name) in entries {
                println!("- {} (ID: {})", name, id);
            }
            Ok(())
        });

        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let player = this.borrow();
            Ok(format!(
                "Player(hp={}, x={}, y={}, items={})",
                player.hp,
                player.x,
                player.y,
                player.inventory().len()
            ))
        });
    }
}

impl UserData for Shared<Enemy> {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("x", |_, this| Ok(this.borrow().x));
        fields.add_field_method_set("x", |_, this, value: i64| {
            this.borrow_mut().x = value;
            Ok(())
        });
        fields.add_field_method_get("y", |_, this| Ok(this.borrow().y));
        fields.add_field_method_set("y", |_, this, value: i64| {
            this.borrow_mut().y = value;
            Ok(())
        });
        fields.add_field_method_get("hp", |_, this| Ok(this.borrow().hp));
        fields.add_field_method_set("hp", |_, this, value: i64| {
            this.borrow_mut().hp = value;
            Ok(())
        });
        fields.add_field_method_get("damage", |_, this| Ok(this.borrow().damage));
        fields.add_field_method_set("damage", |_, this, value: i64| {
            this.borrow_mut().damage = value;
            Ok(())
        });
        fields.add_field_method_get("typeID", |_, this| Ok(this.borrow().type_id));
        fields.add_field_method_set("typeID", |_, this, value: i64| {
            this.borrow_mut().type_id = value;
            Ok(())
        });
    }

    fn add_methods<'lua, M: UserDataMethods<'lua, Self>>(methods: &mut M) {
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let enemy = this.borrow();
            Ok(format!(
                "Enemy(type={}, hp={}, x={}, y={})",
                enemy.type_id, enemy.hp, enemy.x, enemy.y
            ))
        });
    }
}

impl UserData for Shared<Chest> {
    fn add_fields<'lua, F: UserDataFields<'lua, Self>>(fields: &mut F) {
        fields.add_field_method_get("x", |_, this| Ok(this.borrow().x));
        fields.add_field_method_set("x", |_, this, value: i64| {
            this.borrow_mut().x = value;
            Ok(())
        });
        fields.add_field_method_get("y", |_, this| Ok(this.borrow().y));
        fields.add_field_method_set("y", |_, this, value: i64| {
            this.borrow_mut().y = value;
            Ok(())
        });
        fields.add_field_method_get("isEmpty", |_, this| Ok(this.borrow().is_empty));
        fields.add_field_method_set("isEmpty", |_, this, value: bool| {
            this.borrow_mut().is_empty = value;
            Ok(())
        });
    }

    fn add_methods<'lua, M: UserDataMethods<'lua, Self>>(methods: &mut M) {
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let chest = this.borrow();
            Ok(format!(
                "Chest(x={}, y={}, empty={})",
                chest.x, chest.y, chest.is_empty
            ))
        });
    }
}
