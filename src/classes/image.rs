use std::sync::Arc;

use mlua::{ExternalResult, Lua, MetaMethod, MultiValue, Result, UserData, UserDataFields, UserDataMethods};

use super::texture::Texture;
use super::{add_chain_method, add_class_field, impl_resource_class};
use crate::args::{c_string, Args};
use crate::color::Color;
use crate::enums;
use crate::math::Rectangle;
use crate::native;
use ffi::Raylib;

/// Pixel data in CPU memory, released when the object is collected or unloaded.
#[derive(Debug)]
pub struct Image {
    raw: ffi::Image,
    owner: Option<Arc<Raylib>>,
}

impl_resource_class!(Image, "Image");

impl Image {
    pub(crate) fn from_raw(raylib: Arc<Raylib>, raw: ffi::Image) -> Self {
        Image {
            raw,
            owner: Some(raylib),
        }
    }

    /// Loads an image file.
    pub fn load(lua: &Lua, path: &str) -> Result<Image> {
        let raylib = native::library(lua)?;
        let path_c = c_string(path, 1)?;
        let raw = unsafe { raylib.LoadImage(path_c.as_ptr()) }.into_lua_err()?;
        if raw.data.is_null() {
            return Err(mlua::Error::runtime(format!("cannot load image '{path}'")));
        }
        Ok(Image::from_raw(raylib, raw))
    }

    /// Generates an image filled with `color`.
    pub fn generate(lua: &Lua, width: i32, height: i32, color: Color) -> Result<Image> {
        let raylib = native::library(lua)?;
        let raw = unsafe { raylib.GenImageColor(width, height, color.into()) }.into_lua_err()?;
        Ok(Image::from_raw(raylib, raw))
    }

    pub fn is_loaded(&self) -> bool {
        self.owner.is_some()
    }

    pub fn width(&self) -> i32 {
        self.raw.width
    }

    pub fn height(&self) -> i32 {
        self.raw.height
    }

    pub fn format(&self) -> i32 {
        self.raw.format
    }

    /// The library and pixel data, or an error once the image has been unloaded.
    fn loaded(&mut self) -> Result<(&Raylib, &mut ffi::Image)> {
        match self.owner.as_deref() {
            Some(raylib) => Ok((raylib, &mut self.raw)),
            None => Err(mlua::Error::runtime("Image is unloaded")),
        }
    }

    /// Native struct to pass by value to raylib.
    pub(crate) fn raw(&self) -> Result<ffi::Image> {
        match self.owner {
            Some(_) => Ok(self.raw),
            None => Err(mlua::Error::runtime("Image is unloaded")),
        }
    }

    /// Releases the pixel data; later calls are no-ops.
    pub fn unload(&mut self) {
        if let Some(raylib) = self.owner.take() {
            if let Err(err) = unsafe { raylib.UnloadImage(self.raw) } {
                log::warn!("{err}");
            }
            self.raw = ffi::Image::default();
        }
    }

    fn copy(&self) -> Result<Image> {
        let raylib = match &self.owner {
            Some(raylib) => Arc::clone(raylib),
            None => return Err(mlua::Error::runtime("Image is unloaded")),
        };
        let raw = unsafe { raylib.ImageCopy(self.raw) }.into_lua_err()?;
        Ok(Image::from_raw(raylib, raw))
    }

    pub(crate) fn to_texture(&self) -> Result<Texture> {
        let raylib = match &self.owner {
            Some(raylib) => Arc::clone(raylib),
            None => return Err(mlua::Error::runtime("Image is unloaded")),
        };
        let raw = unsafe { raylib.LoadTextureFromImage(self.raw) }.into_lua_err()?;
        Ok(Texture::owned(raylib, raw))
    }
}

impl Drop for Image {
    fn drop(&mut self) {
        self.unload();
    }
}

impl UserData for Image {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
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
        methods.add_method("isLoaded", |_, this, ()| Ok(this.is_loaded()));
        methods.add_method("clone", |_, this, ()| this.copy());

        add_chain_method(methods, "resize", |_, this: &mut Image, (width, height): (i32, i32)| {
            let (rl, raw) = this.loaded()?;
            unsafe { rl.ImageResize(raw, width, height) }.into_lua_err()
        });
        add_chain_method(methods, "crop", |_, this: &mut Image, crop: Rectangle| {
            let (rl, raw) = this.loaded()?;
            unsafe { rl.ImageCrop(raw, crop.into()) }.into_lua_err()
        });
        add_chain_method(methods, "flipVertical", |_, this: &mut Image, ()| {
            let (rl, raw) = this.loaded()?;
            unsafe { rl.ImageFlipVertical(raw) }.into_lua_err()
        });
        add_chain_method(methods, "flipHorizontal", |_, this: &mut Image, ()| {
            let (rl, raw) = this.loaded()?;
            unsafe { rl.ImageFlipHorizontal(raw) }.into_lua_err()
        });
        add_chain_method(methods, "setFormat", |_, this: &mut Image, args: MultiValue| {
            let mut args = Args::new(args);
            let format = enums::texture_format(&args.next(), 1)?;
            let (rl, raw) = this.loaded()?;
            unsafe { rl.ImageFormat(raw, format) }.into_lua_err()
        });

        methods.add_method("export", |_, this, path: String| {
            let raw = this.raw()?;
            let path = c_string(&path, 1)?;
            match &this.owner {
                Some(rl) => unsafe { rl.ExportImage(raw, path.as_ptr()) }.into_lua_err(),
                None => Ok(false),
            }
        });
        methods.add_method("getPixelDataSize", |_, this, ()| {
            Ok(enums::pixel_data_size(this.raw.width, this.raw.height, this.raw.format))
        });
        methods.add_method("toTexture", |_, this, ()| this.to_texture());

        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            Ok(format!(
                "Image[{}x{}, {}]",
                this.raw.width,
                this.raw.height,
                enums::texture_format_name(this.raw.format)
            ))
        });
    }
}

/// `Image(path)` or `Image(width, height [, color = WHITE])`.
pub(super) fn construct(lua: &Lua, args: MultiValue) -> Result<Image> {
    let mut args = Args::new(args);
    if args.is_string() {
        let path = args.string()?;
        return Image::load(lua, &path);
    }
    let width = args.integer()?;
    let height = args.integer()?;
    let color = args.opt_class::<Color>().unwrap_or(Color::WHITE);
    Image::generate(lua, width, height, color)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unloaded() -> Image {
        Image {
            raw: ffi::Image::default(),
            owner: None,
        }
    }

    fn assert_unloaded<T>(result: Result<T>) {
        match result {
            Ok(_) => panic!("unloaded image is still usable"),
            Err(err) => assert!(err.to_string().contains("Image is unloaded"), "{err}"),
        }
    }

    #[test]
    fn test_unload_is_idempotent() {
        let mut image = unloaded();
        assert!(!image.is_loaded());
        image.unload();
        image.unload();
        assert!(!image.is_loaded());
        assert!(image.raw.data.is_null());
    }

    #[test]
    fn test_unloaded_image_is_inert() {
        let mut image = unloaded();
        assert_unloaded(image.raw());
        assert_unloaded(image.copy());
        assert_unloaded(image.to_texture());
        assert_unloaded(image.loaded());
    }
}
