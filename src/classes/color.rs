use mlua::{
    Error, IntoLuaMulti, Lua, MetaMethod, MultiValue, Result, Table, UserData, UserDataFields,
    UserDataMethods, Value,
};

use super::vector::get_components;
use super::{add_chain_method, add_class_field, impl_class, Class};
use crate::args::{table_number, Args};
use crate::color::Color;
use crate::math::{Vector3, Vector4};

impl_class!(Color, "Color");

#[inline]
fn channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

fn from_table(t: &Table) -> Result<Color> {
    Ok(Color::new(
        channel(table_number(t, 1, 0.0)?),
        channel(table_number(t, 2, 0.0)?),
        channel(table_number(t, 3, 0.0)?),
        channel(table_number(t, 4, 255.0)?),
    ))
}

fn from_normalized_table(t: &Table) -> Result<Color> {
    Ok(Color::from_normalized(Vector4::new(
        table_number(t, 1, 0.0)?,
        table_number(t, 2, 0.0)?,
        table_number(t, 3, 0.0)?,
        table_number(t, 4, 1.0)?,
    )))
}

/// Normalized components as numbers (`'n'`), a table (`'t'`) or a `Vector4`.
pub(crate) fn normalized(lua: &Lua, color: Color, flag: Option<u8>) -> Result<MultiValue> {
    let v = color.normalize();
    match flag {
        Some(b'n') | Some(b't') => get_components(lua, v.components(), flag.filter(|f| *f == b't')),
        _ => v.into_lua_multi(lua),
    }
}

/// HSV as a `Vector3`, numbers (`'n'`) or a table (`'t'`).
pub(crate) fn hsv(lua: &Lua, color: Color, flag: Option<u8>) -> Result<MultiValue> {
    let v = color.to_hsv();
    match flag {
        Some(b'n') | Some(b't') => get_components(lua, v.components(), flag.filter(|f| *f == b't')),
        _ => v.into_lua_multi(lua),
    }
}

/// Parses `(r, g, b [, a])`, `({r, g, b [, a]})` or a `Vector4`, all normalized to `[0, 1]`.
pub(crate) fn parse_normalized(args: &mut Args) -> Result<Color> {
    if args.is_table() {
        return from_normalized_table(&args.table()?);
    }
    if let Some(v) = args.opt_class::<Vector4>() {
        return Ok(Color::from_normalized(v));
    }
    if !args.is_number() {
        return Err(args.error("number, table or Vector4"));
    }
    let r = args.number()?;
    let g = args.opt_number(0.0);
    let b = args.opt_number(0.0);
    let a = args.opt_number(1.0);
    Ok(Color::from_normalized(Vector4::new(r, g, b, a)))
}

/// Parses `(Vector3)` or `(hue, saturation, value)`.
pub(crate) fn parse_hsv(args: &mut Args) -> Result<Color> {
    if let Some(v) = args.opt_class::<Vector3>() {
        return Ok(Color::from_hsv(v.x, v.y, v.z));
    }
    Ok(Color::from_hsv(args.number()?, args.number()?, args.number()?))
}

impl UserData for Color {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        fields.add_field_method_get("r", |_, this| Ok(this.r));
        fields.add_field_method_set("r", |_, this, v: f32| {
            this.r = channel(v);
            Ok(())
        });
        fields.add_field_method_get("g", |_, this| Ok(this.g));
        fields.add_field_method_set("g", |_, this, v: f32| {
            this.g = channel(v);
            Ok(())
        });
        fields.add_field_method_get("b", |_, this| Ok(this.b));
        fields.add_field_method_set("b", |_, this, v: f32| {
            this.b = channel(v);
            Ok(())
        });
        fields.add_field_method_get("a", |_, this| Ok(this.a));
        fields.add_field_method_set("a", |_, this, v: f32| {
            this.a = channel(v);
            Ok(())
        });
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("clone", |_, this, ()| Ok(*this));
        methods.add_method("get", |lua, this, flag: MultiValue| match Args::new(flag).opt_flag() {
            Some(b't') => lua.create_sequence_from(this.normalize().components())?.into_lua_multi(lua),
            _ => (this.r, this.g, this.b, this.a).into_lua_multi(lua),
        });
        add_chain_method(methods, "set", |_, this: &mut Color, args: MultiValue| {
            let mut args = Args::new(args);
            this.r = channel(args.opt_number(this.r as f32));
            this.g = channel(args.opt_number(this.g as f32));
            this.b = channel(args.opt_number(this.b as f32));
            this.a = channel(args.opt_number(this.a as f32));
            Ok(())
        });

        methods.add_method("toInt", |_, this, ()| Ok(this.to_int() as i32));
        add_chain_method(methods, "fromInt", |_, this: &mut Color, hex: i64| {
            *this = Color::from_int(hex as u32);
            Ok(())
        });
        methods.add_method("toHex", |_, this, ()| Ok(format!("{:08x}", this.to_int())));

        methods.add_method("normalize", |lua, this, flag: MultiValue| {
            normalized(lua, *this, Args::new(flag).opt_flag())
        });
        add_chain_method(methods, "fromNormalized", |_, this: &mut Color, args: MultiValue| {
            *this = parse_normalized(&mut Args::new(args))?;
            Ok(())
        });
        methods.add_method("toHSV", |_, this, ()| Ok(this.to_hsv()));
        add_chain_method(methods, "fromHSV", |_, this: &mut Color, args: MultiValue| {
            *this = parse_hsv(&mut Args::new(args))?;
            Ok(())
        });
        add_chain_method(methods, "fade", |_, this: &mut Color, alpha: f32| {
            *this = this.fade(alpha);
            Ok(())
        });

        methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
            Ok(matches!((Color::peek(&a), Color::peek(&b)), (Some(a), Some(b)) if a == b))
        });
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            Ok(format!("Color[#{:08x}]", this.to_int()))
        });
    }
}

/// `Color(r, g, b [, a])`, `Color{r, g, b [, a]}`, `Color('name')` or a copy of another color.
pub(super) fn construct(args: MultiValue) -> Result<Color> {
    let mut args = Args::new(args);
    if args.is_table() {
        return from_table(&args.table()?);
    }
    if args.is_string() {
        let name = args.string()?;
        return Color::named(&name).ok_or_else(|| Error::runtime(format!("unknown color '{name}'")));
    }
    if let Some(c) = args.opt_class::<Color>() {
        return Ok(c);
    }
    Ok(Color::new(
        channel(args.opt_number(0.0)),
        channel(args.opt_number(0.0)),
        channel(args.opt_number(0.0)),
        channel(args.opt_number(255.0)),
    ))
}
