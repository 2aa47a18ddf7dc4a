//! Script classes backed by userdata.
//!
//! Methods are dispatched through the userdata metatable, plain fields (`x`, `width`, ...)
//! through `__index`/`__newindex` accessors. Constructors are exported as functions named after
//! the class.

use mlua::{AnyUserData, FromLuaMulti, Lua, MultiValue, Result, Table, UserData, UserDataMethods, Value};

pub use camera::{Camera2D, Camera3D, Ray};
pub use image::Image;
pub use texture::{RenderTexture, Texture};

mod camera;
pub(crate) mod color;
mod image;
mod matrix;
mod rectangle;
mod texture;
mod vector;
mod vector2;
mod vector3;
mod vector4;

/// A userdata type exposed as a named class.
pub trait Class: UserData + 'static {
    const NAME: &'static str;

    /// Copies the object out of `value` when it is an instance of this class.
    fn peek(value: &Value) -> Option<Self>
    where
        Self: Clone,
    {
        match value {
            Value::UserData(ud) => ud.borrow::<Self>().ok().map(|obj| Self::clone(&obj)),
            _ => None,
        }
    }
}

macro_rules! impl_class {
    ($ty:ty, $name:literal) => {
        impl $crate::classes::Class for $ty {
            const NAME: &'static str = $name;
        }

        impl mlua::FromLua for $ty {
            fn from_lua(value: mlua::Value, _: &mlua::Lua) -> mlua::Result<Self> {
                <$ty as $crate::classes::Class>::peek(&value).ok_or_else(|| {
                    mlua::Error::FromLuaConversionError {
                        from: value.type_name(),
                        to: $name.to_string(),
                        message: Some(format!("{} expected", $name)),
                    }
                })
            }
        }
    };
}

/// Names a class whose objects own native resources and are only ever borrowed.
macro_rules! impl_resource_class {
    ($ty:ty, $name:literal) => {
        impl $crate::classes::Class for $ty {
            const NAME: &'static str = $name;
        }
    };
}

pub(crate) use impl_class;
pub(crate) use impl_resource_class;

/// Registers a method that mutates the receiver in place and returns it for chaining.
pub(crate) fn add_chain_method<T, M, A, F>(methods: &mut M, name: &str, method: F)
where
    T: Class,
    M: UserDataMethods<T>,
    A: FromLuaMulti,
    F: Fn(&Lua, &mut T, A) -> Result<()> + Send + 'static,
{
    methods.add_function(name, move |lua, (ud, args): (AnyUserData, A)| {
        method(lua, &mut *ud.borrow_mut::<T>()?, args)?;
        Ok(ud)
    });
}

/// Adds the `class` field reporting the class name.
pub(crate) fn add_class_field<T: Class, F: mlua::UserDataFields<T>>(fields: &mut F) {
    fields.add_field_method_get("class", |_, _| Ok(T::NAME));
}

/// Name of the class `value` belongs to, if it is a binding object.
pub fn class_of(value: &Value) -> Option<&'static str> {
    let Value::UserData(ud) = value else {
        return None;
    };
    macro_rules! check {
        ($($ty:ty),*) => {
            $(
                if ud.is::<$ty>() {
                    return Some(<$ty as Class>::NAME);
                }
            )*
        };
    }
    check!(
        crate::math::Vector2,
        crate::math::Vector3,
        crate::math::Vector4,
        crate::math::Matrix,
        crate::math::Rectangle,
        crate::color::Color,
        Image,
        Texture,
        RenderTexture,
        Camera2D,
        Camera3D,
        Ray
    );
    None
}

pub(crate) fn register(lua: &Lua, module: &Table) -> Result<()> {
    module.set("Vector2", lua.create_function(|_, args: MultiValue| vector2::construct(args))?)?;
    module.set("Vector3", lua.create_function(|_, args: MultiValue| vector3::construct(args))?)?;
    module.set("Vector4", lua.create_function(|_, args: MultiValue| vector4::construct(args))?)?;
    module.set("Matrix", lua.create_function(|_, args: MultiValue| matrix::construct(args))?)?;
    module.set("Color", lua.create_function(|_, args: MultiValue| color::construct(args))?)?;
    module.set(
        "Rectangle",
        lua.create_function(|_, args: MultiValue| rectangle::construct(args))?,
    )?;
    module.set("Image", lua.create_function(image::construct)?)?;
    module.set("RenderTexture", lua.create_function(texture::construct_render_texture)?)?;
    module.set("Camera2D", lua.create_function(|_, args: MultiValue| camera::construct_2d(args))?)?;
    module.set("Camera3D", lua.create_function(|_, args: MultiValue| camera::construct_3d(args))?)?;
    module.set("Ray", lua.create_function(|_, args: MultiValue| camera::construct_ray(args))?)?;
    module.set(
        "classof",
        lua.create_function(|_, value: Value| Ok(class_of(&value)))?,
    )?;
    Ok(())
}
