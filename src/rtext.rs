//! `rl.text`: text drawing with raylib's default font.

use mlua::{Lua, Result, Table};

use crate::args::c_string;
use crate::color::Color;
use crate::native;

pub(crate) fn create(lua: &Lua) -> Result<Table> {
    let text = lua.create_table()?;

    forward!(lua, text, {
        DrawFPS(x: i32, y: i32);
    });
    text.set(
        "DrawText",
        lua.create_function(|lua, (text, x, y, size, color): (String, i32, i32, i32, Color)| {
            let text = c_string(&text, 1)?;
            native::with(lua, |rl| unsafe { rl.DrawText(text.as_ptr(), x, y, size, color.into()) })
        })?,
    )?;
    text.set(
        "MeasureText",
        lua.create_function(|lua, (text, size): (String, i32)| {
            let text = c_string(&text, 1)?;
            native::with(lua, |rl| unsafe { rl.MeasureText(text.as_ptr(), size) })
        })?,
    )?;

    Ok(text)
}
