//! `rl.core`: window, drawing modes, timing, input, files and miscellaneous functions.

use mlua::{IntoLuaMulti, Lua, MultiValue, Result, Table};

use crate::math::Vector2;

mod files;
mod input;
mod misc;
mod window;

/// Converts a 1-based Lua index (monitor, gamepad, touch point) to raylib's 0-based one.
#[inline]
pub(crate) fn native_index(index: i32) -> i32 {
    index - 1
}

/// Returns `v` as a `Vector2`, or as two numbers when `flag` is `'n'`.
pub(crate) fn vector2_or_numbers(lua: &Lua, v: Vector2, flag: Option<u8>) -> Result<MultiValue> {
    match flag {
        Some(b'n') => (v.x, v.y).into_lua_multi(lua),
        _ => v.into_lua_multi(lua),
    }
}

pub(crate) fn create(lua: &Lua) -> Result<Table> {
    let core = lua.create_table()?;
    window::register(lua, &core)?;
    misc::register(lua, &core)?;
    files::register(lua, &core)?;
    input::register(lua, &core)?;
    Ok(core)
}
