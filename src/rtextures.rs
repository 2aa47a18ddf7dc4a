//! `rl.textures`: image and texture loading and drawing.

use mlua::{AnyUserData, Lua, Result, Table, UserDataRef, Value};

use crate::args::c_string;
use crate::classes::{Image, RenderTexture, Texture};
use crate::color::Color;
use crate::enums;
use crate::math::{Rectangle, Vector2};
use crate::native;

/// Texture drawn by a `Texture` or the color buffer of a `RenderTexture`.
fn texture_of(ud: &AnyUserData) -> Result<ffi::Texture> {
    if let Ok(texture) = ud.borrow::<Texture>() {
        return Ok(texture.raw());
    }
    Ok(ud.borrow::<RenderTexture>()?.raw().texture)
}

pub(crate) fn create(lua: &Lua) -> Result<Table> {
    let textures = lua.create_table()?;

    textures.set("LoadImage", lua.create_function(|lua, path: String| Image::load(lua, &path))?)?;
    textures.set(
        "GenImageColor",
        lua.create_function(|lua, (width, height, color): (i32, i32, Color)| {
            Image::generate(lua, width, height, color)
        })?,
    )?;
    textures.set(
        "ExportImage",
        lua.create_function(|lua, (image, path): (UserDataRef<Image>, String)| {
            let raw = image.raw()?;
            let path = c_string(&path, 2)?;
            native::with(lua, |rl| unsafe { rl.ExportImage(raw, path.as_ptr()) })
        })?,
    )?;
    textures.set("LoadTexture", lua.create_function(|lua, path: String| Texture::load(lua, &path))?)?;
    textures.set(
        "LoadTextureFromImage",
        lua.create_function(|_, image: UserDataRef<Image>| image.to_texture())?,
    )?;
    textures.set(
        "LoadRenderTexture",
        lua.create_function(|lua, (width, height): (i32, i32)| RenderTexture::load(lua, width, height))?,
    )?;

    textures.set(
        "DrawTexture",
        lua.create_function(|lua, (texture, x, y, tint): (AnyUserData, i32, i32, Option<Color>)| {
            let texture = texture_of(&texture)?;
            let tint = tint.unwrap_or(Color::WHITE);
            native::with(lua, |rl| unsafe { rl.DrawTexture(texture, x, y, tint.into()) })
        })?,
    )?;
    textures.set(
        "DrawTextureV",
        lua.create_function(|lua, (texture, position, tint): (AnyUserData, Vector2, Option<Color>)| {
            let texture = texture_of(&texture)?;
            let tint = tint.unwrap_or(Color::WHITE);
            native::with(lua, |rl| unsafe { rl.DrawTextureV(texture, position.into(), tint.into()) })
        })?,
    )?;
    textures.set(
        "DrawTextureEx",
        lua.create_function(
            |lua, (texture, position, rotation, scale, tint): (AnyUserData, Vector2, f32, f32, Option<Color>)| {
                let texture = texture_of(&texture)?;
                let tint = tint.unwrap_or(Color::WHITE);
                native::with(lua, |rl| unsafe {
                    rl.DrawTextureEx(texture, position.into(), rotation, scale, tint.into())
                })
            },
        )?,
    )?;
    textures.set(
        "DrawTextureRec",
        lua.create_function(
            |lua, (texture, source, position, tint): (AnyUserData, Rectangle, Vector2, Option<Color>)| {
                let texture = texture_of(&texture)?;
                let tint = tint.unwrap_or(Color::WHITE);
                native::with(lua, |rl| unsafe {
                    rl.DrawTextureRec(texture, source.into(), position.into(), tint.into())
                })
            },
        )?,
    )?;

    textures.set(
        "GetPixelDataSize",
        lua.create_function(|_, (width, height, format): (i32, i32, Value)| {
            Ok(enums::pixel_data_size(width, height, enums::texture_format(&format, 3)?))
        })?,
    )?;

    Ok(textures)
}
