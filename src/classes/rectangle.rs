use mlua::{
    Error, IntoLuaMulti, MetaMethod, MultiValue, Result, UserData, UserDataFields, UserDataMethods,
    Value,
};

use super::vector::get_components;
use super::{add_chain_method, add_class_field, class_of, impl_class, Class};
use crate::args::{table_number, Args};
use crate::color::Color;
use crate::math::{Rectangle, Vector2};
use crate::native;

impl_class!(Rectangle, "Rectangle");

fn type_name(value: Option<&Value>) -> &'static str {
    match value {
        Some(value) => class_of(value).unwrap_or(value.type_name()),
        None => "no value",
    }
}

/// Reads `(x, y)`, a `Vector2` or a `{x, y}` table, keeping `current` for omitted values.
fn pair(args: MultiValue, current: Vector2) -> Result<Vector2> {
    let mut args = Args::new(args);
    if let Some(v) = args.opt_class::<Vector2>() {
        return Ok(v);
    }
    if args.is_table() {
        let t = args.table()?;
        return Ok(Vector2::new(
            table_number(&t, 1, current.x)?,
            table_number(&t, 2, current.y)?,
        ));
    }
    Ok(Vector2::new(args.opt_number(current.x), args.opt_number(current.y)))
}

/// Returns a pair as a `Vector2` (`'v'`), a table (`'t'`) or two numbers.
fn get_pair(lua: &mlua::Lua, v: Vector2, flag: MultiValue) -> Result<MultiValue> {
    match Args::new(flag).opt_flag() {
        Some(b'v') => v.into_lua_multi(lua),
        flag => get_components(lua, v.components(), flag),
    }
}

impl UserData for Rectangle {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        fields.add_field_method_get("x", |_, this| Ok(this.x));
        fields.add_field_method_set("x", |_, this, v: f32| {
            this.x = v;
            Ok(())
        });
        fields.add_field_method_get("y", |_, this| Ok(this.y));
        fields.add_field_method_set("y", |_, this, v: f32| {
            this.y = v;
            Ok(())
        });
        fields.add_field_method_get("width", |_, this| Ok(this.width));
        fields.add_field_method_set("width", |_, this, v: f32| {
            this.width = v;
            Ok(())
        });
        fields.add_field_method_get("height", |_, this| Ok(this.height));
        fields.add_field_method_set("height", |_, this, v: f32| {
            this.height = v;
            Ok(())
        });
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("clone", |_, this, ()| Ok(*this));
        methods.add_method("get", |lua, this, flag: MultiValue| {
            let c = vec![this.x, this.y, this.width, this.height];
            get_components(lua, c, Args::new(flag).opt_flag())
        });
        add_chain_method(methods, "set", |_, this: &mut Rectangle, args: MultiValue| {
            let mut args = Args::new(args);
            this.x = args.opt_number(this.x);
            this.y = args.opt_number(this.y);
            this.width = args.opt_number(this.width);
            this.height = args.opt_number(this.height);
            Ok(())
        });
        add_chain_method(methods, "move", |_, this: &mut Rectangle, args: MultiValue| {
            let delta = pair(args, Vector2::ZERO)?;
            this.x += delta.x;
            this.y += delta.y;
            Ok(())
        });

        methods.add_method("getPosition", |lua, this, flag: MultiValue| {
            get_pair(lua, this.position(), flag)
        });
        add_chain_method(methods, "setPosition", |_, this: &mut Rectangle, args: MultiValue| {
            let v = pair(args, this.position())?;
            this.x = v.x;
            this.y = v.y;
            Ok(())
        });
        methods.add_method("getDimensions", |lua, this, flag: MultiValue| {
            get_pair(lua, this.size(), flag)
        });
        add_chain_method(methods, "setDimensions", |_, this: &mut Rectangle, args: MultiValue| {
            let v = pair(args, this.size())?;
            this.width = v.x;
            this.height = v.y;
            Ok(())
        });

        add_chain_method(methods, "draw", |lua, this: &mut Rectangle, args: MultiValue| {
            let mut args = Args::new(args);
            let rect = ffi::Rectangle::from(*this);
            if let Some(color) = args.opt_class::<Color>() {
                return native::with(lua, |rl| unsafe { rl.DrawRectangleRec(rect, color.into()) });
            }
            if let Some(origin) = args.opt_class::<Vector2>() {
                let rotation = args.opt_number(0.0);
                let color = args.class::<Color>()?;
                return native::with(lua, |rl| unsafe {
                    rl.DrawRectanglePro(rect, origin.into(), rotation, color.into())
                });
            }
            Err(Error::runtime(format!(
                "Arg#1 Color or Vector2 expected, got {}",
                type_name(args.peek())
            )))
        });

        methods.add_method("checkCollision", |_, this, other: Rectangle| {
            Ok(this.check_collision(&other))
        });
        methods.add_method("containsPoint", |_, this, point: Vector2| Ok(this.contains_point(point)));
        methods.add_method("getCollision", |_, this, other: Rectangle| Ok(this.collision(&other)));

        methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
            Ok(matches!((Rectangle::peek(&a), Rectangle::peek(&b)), (Some(a), Some(b)) if a == b))
        });
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            Ok(format!(
                "Rectangle[{:.6}, {:.6}, {:.6}, {:.6}]",
                this.x, this.y, this.width, this.height
            ))
        });
    }
}

/// `Rectangle(x [, y = x, w [, h = w]])`, `Rectangle{x, y, w, h}` or a copy of another rectangle.
pub(super) fn construct(args: MultiValue) -> Result<Rectangle> {
    let mut args = Args::new(args);
    if let Some(r) = args.opt_class::<Rectangle>() {
        return Ok(r);
    }
    if args.is_number() {
        let x = args.number()?;
        let y = args.opt_number(x);
        let width = args.opt_number(0.0);
        let height = args.opt_number(width);
        return Ok(Rectangle::new(x, y, width, height));
    }
    if args.is_table() {
        let t = args.table()?;
        let x = table_number(&t, 1, 0.0)?;
        let y = table_number(&t, 2, x)?;
        let width = table_number(&t, 3, 0.0)?;
        let height = table_number(&t, 4, width)?;
        return Ok(Rectangle::new(x, y, width, height));
    }
    Err(Error::runtime(format!(
        "Arg#1 number or table expected, got {}.",
        type_name(args.peek())
    )))
}
