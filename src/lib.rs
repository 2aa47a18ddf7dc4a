//! # Lua bindings to raylib
//!
//! `raylua` exposes the [raylib] game library to Lua through [`mlua`]. The module table holds
//! four function tables named after raylib's modules (`core`, `shapes`, `textures`, `text`),
//! constructors for the binding classes and the enum translation tables:
//!
//! ```lua
//! local rl = require "raylua"
//!
//! rl.core.InitWindow(800, 450, "raylua")
//! while not rl.core.WindowShouldClose() do
//!     rl.core.BeginDrawing()
//!     rl.core.ClearBackground(rl.Color("raywhite"))
//!     rl.text.DrawText("Hello!", 190, 200, 20, rl.Color("lightgray"))
//!     rl.core.EndDrawing()
//! end
//! rl.core.CloseWindow()
//! ```
//!
//! # Loading raylib
//!
//! raylib is a shared library opened at runtime on the first call that needs it, see
//! [`Options::library`]. The math classes (`Vector2`, `Matrix`, `Color`, ...) and other pure
//! functions work without it; any other call raises `raylib is not available: <reason>`.
//!
//! # Embedding
//!
//! [`register`] builds the module table inside an existing [`mlua::Lua`] state. With the `module`
//! feature the crate also builds as a loadable Lua module exporting `luaopen_raylua`.
//!
//! [raylib]: https://www.raylib.com/

#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod macros;

mod args;
mod classes;
mod color;
mod config;
mod enums;
mod native;
mod rcore;
mod rshapes;
mod rtext;
mod rtextures;
mod storage;
mod trace;

pub mod math;

use mlua::{Lua, Result, Table};

pub use crate::classes::{class_of, Camera2D, Camera3D, Class, Image, Ray, RenderTexture, Texture};
pub use crate::color::Color;
pub use crate::config::{Options, LIBRARY_ENV, STORAGE_ENV};
pub use crate::enums::{bits_per_pixel, pixel_data_size, EnumTable};

/// Builds the `raylua` module table for `lua`.
///
/// raylib itself is loaded lazily with `options` on the first native call.
pub fn register(lua: &Lua, options: &Options) -> Result<Table> {
    native::init(lua, options);

    let module = lua.create_table()?;
    module.set("core", rcore::create(lua)?)?;
    module.set("shapes", rshapes::create(lua)?)?;
    module.set("textures", rtextures::create(lua)?)?;
    module.set("text", rtext::create(lua)?)?;
    classes::register(lua, &module)?;
    enums::register(lua, &module)?;
    Ok(module)
}

/// Whether raylib could be loaded for `lua`.
pub fn is_available(lua: &Lua) -> bool {
    native::is_available(lua)
}

#[cfg(feature = "module")]
#[mlua::lua_module(name = "raylua")]
fn raylua(lua: &Lua) -> Result<Table> {
    register(lua, &Options::from_env())
}
