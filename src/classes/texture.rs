use std::sync::Arc;

use mlua::{ExternalResult, Lua, MetaMethod, MultiValue, Result, UserData, UserDataFields, UserDataMethods};

use super::{add_class_field, impl_resource_class};
use crate::args::Args;
use crate::color::Color;
use crate::enums;
use crate::math::{Rectangle, Vector2};
use crate::native;
use ffi::Raylib;

/// Texture in GPU memory.
///
/// A texture created by a loader owns its GPU data and releases it on drop. The texture of
/// a `RenderTexture` is a view and never releases anything.
#[derive(Debug)]
pub struct Texture {
    raw: ffi::Texture,
    owner: Option<Arc<Raylib>>,
}

impl_resource_class!(Texture, "Texture");

impl Texture {
    pub(crate) fn owned(raylib: Arc<Raylib>, raw: ffi::Texture) -> Self {
        Texture {
            raw,
            owner: Some(raylib),
        }
    }

    pub(crate) fn view(raw: ffi::Texture) -> Self {
        Texture { raw, owner: None }
    }

    /// Loads a texture from an image file.
    pub fn load(lua: &Lua, path: &str) -> Result<Texture> {
        let raylib = native::library(lua)?;
        let path_c = crate::args::c_string(path, 1)?;
        let raw = unsafe { raylib.LoadTexture(path_c.as_ptr()) }.into_lua_err()?;
        if raw.id == 0 {
            return Err(mlua::Error::runtime(format!("cannot load texture '{path}'")));
        }
        Ok(Texture::owned(raylib, raw))
    }

    pub(crate) fn raw(&self) -> ffi::Texture {
        self.raw
    }

    /// Whether this texture still owns GPU data. Views never do.
    pub fn is_loaded(&self) -> bool {
        self.owner.is_some()
    }

    pub fn unload(&mut self) {
        if let Some(raylib) = self.owner.take() {
            if let Err(err) = unsafe { raylib.UnloadTexture(self.raw) } {
                log::warn!("{err}");
            }
            self.raw = ffi::Texture::default();
        }
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        self.unload();
    }
}

/// Draws `texture` as `(x, y [, tint])`, `(Vector2 [, tint])`, `(Vector2, rotation, scale [, tint])`
/// or `(Rectangle source, Vector2 [, tint])`.
pub(crate) fn draw(lua: &Lua, texture: ffi::Texture, args: MultiValue) -> Result<()> {
    let mut args = Args::new(args);
    if let Some(source) = args.opt_class::<Rectangle>() {
        let position = args.class::<Vector2>()?;
        let tint = args.opt_class::<Color>().unwrap_or(Color::WHITE);
        return native::with(lua, |rl| unsafe {
            rl.DrawTextureRec(texture, source.into(), position.into(), tint.into())
        });
    }
    if let Some(position) = args.opt_class::<Vector2>() {
        if args.is_number() {
            let rotation = args.number()?;
            let scale = args.opt_number(1.0);
            let tint = args.opt_class::<Color>().unwrap_or(Color::WHITE);
            return native::with(lua, |rl| unsafe {
                rl.DrawTextureEx(texture, position.into(), rotation, scale, tint.into())
            });
        }
        let tint = args.opt_class::<Color>().unwrap_or(Color::WHITE);
        return native::with(lua, |rl| unsafe { rl.DrawTextureV(texture, position.into(), tint.into()) });
    }
    let x = args.integer()?;
    let y = args.integer()?;
    let tint = args.opt_class::<Color>().unwrap_or(Color::WHITE);
    native::with(lua, |rl| unsafe { rl.DrawTexture(texture, x, y, tint.into()) })
}

impl UserData for Texture {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        fields.add_field_method_get("id", |_, this| Ok(this.raw.id));
        fields.add_field_method_get("width", |_, this| Ok(this.raw.width));
        fields.add_field_method_get("height", |_, this| Ok(this.raw.height));
        fields.add_field_method_get("mipmaps", |_, this| Ok(this.raw.mipmaps));
        fields.add_field_method_get("format", |_, this| {
            Ok(enums::texture_format_name(this.raw.format))
        });
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method_mut("unload", |_, this, ()| {
            this.unload();
            Ok(())
        });
        methods.add_method("draw", |lua, this, args: MultiValue| draw(lua, this.raw, args));
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            Ok(format!("Texture[{}: {}x{}]", this.raw.id, this.raw.width, this.raw.height))
        });
    }
}

/// Off-screen render target.
#[derive(Debug)]
pub struct RenderTexture {
    raw: ffi::RenderTexture,
    owner: Option<Arc<Raylib>>,
}

impl_resource_class!(RenderTexture, "RenderTexture");

impl RenderTexture {
    pub fn load(lua: &Lua, width: i32, height: i32) -> Result<RenderTexture> {
        let raylib = native::library(lua)?;
        let raw = unsafe { raylib.LoadRenderTexture(width, height) }.into_lua_err()?;
        Ok(RenderTexture {
            raw,
            owner: Some(raylib),
        })
    }

    pub(crate) fn raw(&self) -> ffi::RenderTexture {
        self.raw
    }

    pub fn is_loaded(&self) -> bool {
        self.owner.is_some()
    }

    pub fn unload(&mut self) {
        if let Some(raylib) = self.owner.take() {
            if let Err(err) = unsafe { raylib.UnloadRenderTexture(self.raw) } {
                log::warn!("{err}");
            }
            self.raw = ffi::RenderTexture::default();
        }
    }
}

impl Drop for RenderTexture {
    fn drop(&mut self) {
        self.unload();
    }
}

impl UserData for RenderTexture {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        fields.add_field_method_get("id", |_, this| Ok(this.raw.id));
        fields.add_field_method_get("width", |_, this| Ok(this.raw.texture.width));
        fields.add_field_method_get("height", |_, this| Ok(this.raw.texture.height));
        fields.add_field_method_get("texture", |_, this| Ok(Texture::view(this.raw.texture)));
        fields.add_field_method_get("depth", |_, this| Ok(Texture::view(this.raw.depth)));
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method_mut("unload", |_, this, ()| {
            this.unload();
            Ok(())
        });
        methods.add_method("draw", |lua, this, args: MultiValue| draw(lua, this.raw.texture, args));
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            Ok(format!(
                "RenderTexture[{}: {}x{}]",
                this.raw.id, this.raw.texture.width, this.raw.texture.height
            ))
        });
    }
}

/// `RenderTexture(width, height)`.
pub(super) fn construct_render_texture(lua: &Lua, (width, height): (i32, i32)) -> Result<RenderTexture> {
    RenderTexture::load(lua, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ffi::Texture {
        ffi::Texture {
            id: 3,
            width: 64,
            height: 32,
            mipmaps: 1,
            format: ffi::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8,
        }
    }

    #[test]
    fn test_view_never_releases() {
        let mut view = Texture::view(sample());
        assert!(!view.is_loaded());
        view.unload();
        // Still usable, the render texture owns the data
        assert_eq!(view.raw(), sample());
    }

    #[test]
    fn test_render_texture_unload_twice() {
        let raw = ffi::RenderTexture {
            id: 1,
            texture: sample(),
            depth: ffi::Texture::default(),
        };
        let mut target = RenderTexture { raw, owner: None };
        assert!(!target.is_loaded());
        target.unload();
        target.unload();
        assert_eq!(target.raw(), raw);
    }
}
