//! Methods shared by `Vector2`, `Vector3` and `Vector4`.

use std::ops::{Add, Div, Mul, Neg, Sub};

use mlua::{FromLua, IntoLuaMulti, Lua, MetaMethod, MultiValue, Result, UserDataMethods, Value};

use super::{add_chain_method, Class};
use crate::args::{as_number, bad_argument, table_number, Args};
use crate::math::{Vector2, Vector3, Vector4};

pub(crate) trait VectorClass:
    Class
    + FromLua
    + Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Mul<f32, Output = Self>
    + Div<Output = Self>
    + Div<f32, Output = Self>
    + Neg<Output = Self>
{
    const SIZE: usize;

    fn splat(v: f32) -> Self;
    fn from_components(c: &[f32]) -> Self;
    fn components(self) -> Vec<f32>;
    fn length(self) -> f32;
    fn dot(self, rhs: Self) -> f32;
    fn powf(self, exp: Self) -> Self;
    fn normalize(self) -> Self;
    fn lerp(self, target: Self, amount: f32) -> Self;
}

macro_rules! impl_vector_class {
    ($ty:ident, $size:literal { $($field:ident),+ }) => {
        impl VectorClass for $ty {
            const SIZE: usize = $size;

            fn splat(v: f32) -> Self {
                $ty::splat(v)
            }

            fn from_components(c: &[f32]) -> Self {
                let mut c = c.iter().copied();
                $ty { $($field: c.next().unwrap_or(0.0)),+ }
            }

            fn components(self) -> Vec<f32> {
                $ty::components(self)
            }

            fn length(self) -> f32 {
                $ty::length(self)
            }

            fn dot(self, rhs: Self) -> f32 {
                $ty::dot(self, rhs)
            }

            fn powf(self, exp: Self) -> Self {
                $ty::powf(self, exp)
            }

            fn normalize(self) -> Self {
                $ty::normalize(self)
            }

            fn lerp(self, target: Self, amount: f32) -> Self {
                $ty::lerp(self, target, amount)
            }
        }
    };
}

impl_vector_class!(Vector2, 2 { x, y });
impl_vector_class!(Vector3, 3 { x, y, z });
impl_vector_class!(Vector4, 4 { x, y, z, w });

/// Operand of an arithmetic metamethod.
enum Operand<T> {
    Number(f32),
    Object(T),
}

impl<T: VectorClass> Operand<T> {
    fn from_value(value: &Value, pos: usize) -> Result<Self> {
        if let Some(n) = as_number(value) {
            return Ok(Operand::Number(n as f32));
        }
        T::peek(value)
            .map(Operand::Object)
            .ok_or_else(|| bad_argument(pos, &format!("number or {}", T::NAME), Some(value)))
    }

    fn into_vector(self) -> T {
        match self {
            Operand::Number(n) => T::splat(n),
            Operand::Object(v) => v,
        }
    }
}

/// Number or vector argument, a number applies to every component.
fn scalar_or_vector<T: VectorClass>(value: &Value) -> Result<T> {
    Operand::<T>::from_value(value, 2).map(Operand::into_vector)
}

/// Parses `(x [, y = x, ...])`, `({x, y, ...})`, a vector to copy, or nothing (zero).
pub(crate) fn construct<T: VectorClass>(args: MultiValue) -> Result<T> {
    let mut args = Args::new(args);
    if args.is_number() {
        let x = args.number()?;
        let mut c = vec![x; T::SIZE];
        for c in c.iter_mut().skip(1) {
            *c = args.opt_number(x);
        }
        return Ok(T::from_components(&c));
    }
    if args.is_table() {
        let t = args.table()?;
        let c = (1..=T::SIZE as i64)
            .map(|i| table_number(&t, i, 0.0))
            .collect::<Result<Vec<_>>>()?;
        return Ok(T::from_components(&c));
    }
    if let Some(v) = args.opt_class::<T>() {
        return Ok(v);
    }
    Ok(T::splat(0.0))
}

/// Components as multiple values, or as a sequence table with `'t'`.
pub(crate) fn get_components(lua: &Lua, c: Vec<f32>, flag: Option<u8>) -> Result<MultiValue> {
    match flag {
        Some(b't') => lua.create_sequence_from(c)?.into_lua_multi(lua),
        _ => Ok(c.into_iter().map(|v| Value::Number(v as f64)).collect()),
    }
}

pub(crate) fn format<T: VectorClass>(v: T) -> String {
    let c = v
        .components()
        .iter()
        .map(|c| format!("{c:.6}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}[{c}]", T::NAME)
}

/// Registers the methods and metamethods every vector class has.
pub(crate) fn add_vector_methods<T: VectorClass, M: UserDataMethods<T>>(methods: &mut M) {
    methods.add_method("clone", |_, this, ()| Ok(*this));
    methods.add_method("get", |lua, this, flag: MultiValue| {
        get_components(lua, this.components(), Args::new(flag).opt_flag())
    });
    add_chain_method(methods, "set", |_, this: &mut T, args: MultiValue| {
        let mut args = Args::new(args);
        let c = this
            .components()
            .into_iter()
            .map(|c| args.opt_number(c))
            .collect::<Vec<_>>();
        *this = T::from_components(&c);
        Ok(())
    });

    add_chain_method(methods, "add", |_, this: &mut T, v: T| {
        *this = *this + v;
        Ok(())
    });
    add_chain_method(methods, "subtract", |_, this: &mut T, v: T| {
        *this = *this - v;
        Ok(())
    });
    add_chain_method(methods, "scale", |_, this: &mut T, s: f32| {
        *this = *this * s;
        Ok(())
    });
    add_chain_method(methods, "multiplyV", |_, this: &mut T, v: T| {
        *this = *this * v;
        Ok(())
    });
    add_chain_method(methods, "multiply", |_, this: &mut T, v: Value| {
        *this = *this * scalar_or_vector::<T>(&v)?;
        Ok(())
    });
    add_chain_method(methods, "divideV", |_, this: &mut T, v: T| {
        *this = *this / v;
        Ok(())
    });
    add_chain_method(methods, "divide", |_, this: &mut T, v: Value| {
        *this = *this / scalar_or_vector::<T>(&v)?;
        Ok(())
    });
    add_chain_method(methods, "negate", |_, this: &mut T, ()| {
        *this = -*this;
        Ok(())
    });
    add_chain_method(methods, "normalize", |_, this: &mut T, ()| {
        *this = this.normalize();
        Ok(())
    });
    add_chain_method(methods, "lerp", |_, this: &mut T, (v, amount): (T, f32)| {
        *this = this.lerp(v, amount);
        Ok(())
    });

    methods.add_method("length", |_, this, ()| Ok(this.length()));
    methods.add_method("dotProduct", |_, this, v: T| Ok(this.dot(v)));
    methods.add_method("distance", |_, this, v: T| Ok((v - *this).length()));

    methods.add_meta_function(MetaMethod::Add, |_, (a, b): (T, T)| Ok(a + b));
    methods.add_meta_function(MetaMethod::Sub, |_, (a, b): (T, T)| Ok(a - b));
    methods.add_meta_function(MetaMethod::Mul, |_, (a, b): (Value, Value)| {
        let a = Operand::<T>::from_value(&a, 1)?;
        let b = Operand::<T>::from_value(&b, 2)?;
        Ok(match (a, b) {
            (Operand::Object(v), Operand::Number(n)) | (Operand::Number(n), Operand::Object(v)) => v * n,
            (a, b) => a.into_vector() * b.into_vector(),
        })
    });
    methods.add_meta_function(MetaMethod::Div, |_, (a, b): (Value, Value)| {
        let a = Operand::<T>::from_value(&a, 1)?.into_vector();
        let b = Operand::<T>::from_value(&b, 2)?.into_vector();
        Ok(a / b)
    });
    methods.add_meta_function(MetaMethod::Pow, |_, (a, b): (Value, Value)| {
        let a = Operand::<T>::from_value(&a, 1)?.into_vector();
        let b = Operand::<T>::from_value(&b, 2)?.into_vector();
        Ok(a.powf(b))
    });
    methods.add_meta_method(MetaMethod::Unm, |_, this, ()| Ok(-*this));
    methods.add_meta_method(MetaMethod::Len, |_, this, ()| Ok(this.length()));
    methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
        Ok(matches!((T::peek(&a), T::peek(&b)), (Some(a), Some(b)) if a == b))
    });
    methods.add_meta_method(MetaMethod::ToString, |_, this, ()| Ok(format(*this)));
}
