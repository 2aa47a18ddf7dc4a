use mlua::{Error, Function, Lua, MultiValue, Result, Table, Value, Variadic};

use crate::args::{c_string, Args};
use crate::classes::color::{hsv, normalized, parse_hsv, parse_normalized};
use crate::color::Color;
use crate::enums;
use crate::native;
use crate::storage;
use crate::trace;

fn log_level(value: &Value, pos: usize) -> Result<i32> {
    enums::log_levels()
        .resolve(value, pos)?
        .ok_or_else(|| Error::runtime(format!("bad argument #{pos}: unknown log level")))
}

pub(super) fn register(lua: &Lua, core: &Table) -> Result<()> {
    // Color, computed without raylib
    core.set("ColorToInt", lua.create_function(|_, c: Color| Ok(c.to_int() as i32))?)?;
    core.set(
        "ColorNormalize",
        lua.create_function(|lua, (c, flag): (Color, MultiValue)| {
            normalized(lua, c, Args::new(flag).opt_flag())
        })?,
    )?;
    core.set(
        "ColorFromNormalized",
        lua.create_function(|_, args: MultiValue| parse_normalized(&mut Args::new(args)))?,
    )?;
    core.set(
        "ColorToHSV",
        lua.create_function(|lua, (c, flag): (Color, MultiValue)| {
            hsv(lua, c, Args::new(flag).opt_flag())
        })?,
    )?;
    core.set(
        "ColorFromHSV",
        lua.create_function(|_, args: MultiValue| parse_hsv(&mut Args::new(args)))?,
    )?;
    core.set("GetColor", lua.create_function(|_, hex: i64| Ok(Color::from_int(hex as u32)))?)?;
    core.set("Fade", lua.create_function(|_, (c, alpha): (Color, f32)| Ok(c.fade(alpha)))?)?;

    // Misc
    core.set(
        "SetConfigFlags",
        lua.create_function(|lua, flags: Variadic<Value>| {
            let flags = enums::flags(enums::config_flags(), &flags, 1)?;
            native::with(lua, |rl| unsafe { rl.SetConfigFlags(flags) })
        })?,
    )?;
    core.set(
        "SetTraceLogLevel",
        lua.create_function(|lua, level: Value| {
            let level = log_level(&level, 1)?;
            native::with(lua, |rl| unsafe { rl.SetTraceLogLevel(level) })
        })?,
    )?;
    core.set(
        "SetTraceLogCallback",
        lua.create_function(|_, callback: Option<Function>| {
            trace::set_callback(callback);
            Ok(())
        })?,
    )?;
    core.set(
        "TraceLog",
        lua.create_function(|lua, (level, text): (Value, String)| {
            let level = log_level(&level, 1)?;
            let text = c_string(&text, 2)?;
            native::with(lua, |rl| unsafe { rl.TraceLog(level, &text) })
        })?,
    )?;
    core.set(
        "TakeScreenshot",
        lua.create_function(|lua, path: String| {
            let path = c_string(&path, 1)?;
            native::with(lua, |rl| unsafe { rl.TakeScreenshot(path.as_ptr()) })
        })?,
    )?;
    core.set(
        "GetRandomValue",
        lua.create_function(|lua, (first, second): (i32, Option<i32>)| {
            let (min, max) = match second {
                Some(max) => (first, max),
                None => (1, first),
            };
            native::with(lua, |rl| unsafe { rl.GetRandomValue(min, max) })
        })?,
    )?;
    core.set(
        "OpenURL",
        lua.create_function(|lua, url: String| {
            let url = c_string(&url, 1)?;
            native::with(lua, |rl| unsafe { rl.OpenURL(url.as_ptr()) })
        })?,
    )?;

    // Storage
    core.set(
        "StorageSaveValue",
        lua.create_function(|lua, (position, value): (u32, i32)| {
            let path = native::options(lua).storage_path;
            match storage::save(&path, position, value) {
                Ok(()) => Ok(true),
                Err(err) => {
                    log::warn!("cannot save storage value to {}: {err}", path.display());
                    Ok(false)
                }
            }
        })?,
    )?;
    core.set(
        "StorageLoadValue",
        lua.create_function(|lua, position: u32| {
            let path = native::options(lua).storage_path;
            Ok(storage::load(&path, position).unwrap_or_else(|err| {
                log::warn!("cannot load storage value from {}: {err}", path.display());
                0
            }))
        })?,
    )?;

    Ok(())
}
