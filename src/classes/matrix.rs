use mlua::{MetaMethod, MultiValue, Result, UserData, UserDataFields, UserDataMethods, Value};

use super::vector::get_components;
use super::{add_chain_method, add_class_field, impl_class, Class};
use crate::args::{table_number, Args};
use crate::math::{Matrix, Vector3};

impl_class!(Matrix, "Matrix");

/// Reads `(x, y, z)`, a `Vector3` or a `{x, y, z}` table.
fn xyz(args: MultiValue, default: f32) -> Result<Vector3> {
    let mut args = Args::new(args);
    if let Some(v) = args.opt_class::<Vector3>() {
        return Ok(v);
    }
    if args.is_table() {
        let t = args.table()?;
        return Ok(Vector3::new(
            table_number(&t, 1, default)?,
            table_number(&t, 2, default)?,
            table_number(&t, 3, default)?,
        ));
    }
    if !args.is_number() {
        return Err(args.error("number, Vector3 or table"));
    }
    Ok(Vector3::new(
        args.opt_number(default),
        args.opt_number(default),
        args.opt_number(default),
    ))
}

impl UserData for Matrix {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("clone", |_, this, ()| Ok(*this));
        methods.add_method("get", |lua, this, flag: MultiValue| {
            get_components(lua, this.0.to_vec(), Args::new(flag).opt_flag())
        });
        methods.add_method("toFloatV", |lua, this, ()| lua.create_sequence_from(this.0));
        add_chain_method(methods, "set", |_, this: &mut Matrix, args: MultiValue| {
            let mut args = Args::new(args);
            for m in this.0.iter_mut() {
                *m = args.opt_number(*m);
            }
            Ok(())
        });

        methods.add_method("determinant", |_, this, ()| Ok(this.determinant()));
        methods.add_method("trace", |_, this, ()| Ok(this.trace()));

        add_chain_method(methods, "transpose", |_, this: &mut Matrix, ()| {
            *this = this.transpose();
            Ok(())
        });
        add_chain_method(methods, "invert", |_, this: &mut Matrix, ()| {
            *this = this.invert();
            Ok(())
        });
        add_chain_method(methods, "normalize", |_, this: &mut Matrix, ()| {
            *this = this.normalize();
            Ok(())
        });
        add_chain_method(methods, "identity", |_, this: &mut Matrix, ()| {
            *this = Matrix::identity();
            Ok(())
        });
        add_chain_method(methods, "add", |_, this: &mut Matrix, m: Matrix| {
            *this = *this + m;
            Ok(())
        });
        add_chain_method(methods, "subtract", |_, this: &mut Matrix, m: Matrix| {
            *this = *this - m;
            Ok(())
        });
        add_chain_method(methods, "multiply", |_, this: &mut Matrix, m: Matrix| {
            *this = *this * m;
            Ok(())
        });

        add_chain_method(methods, "translate", |_, this: &mut Matrix, args: MultiValue| {
            let v = xyz(args, 0.0)?;
            *this = Matrix::translate(v.x, v.y, v.z);
            Ok(())
        });
        add_chain_method(methods, "rotate", |_, this: &mut Matrix, (axis, angle): (Vector3, f32)| {
            *this = Matrix::rotate(axis, angle);
            Ok(())
        });
        add_chain_method(methods, "rotateXYZ", |_, this: &mut Matrix, angle: Vector3| {
            *this = Matrix::rotate_xyz(angle);
            Ok(())
        });
        add_chain_method(methods, "rotateX", |_, this: &mut Matrix, angle: f32| {
            *this = Matrix::rotate_x(angle);
            Ok(())
        });
        add_chain_method(methods, "rotateY", |_, this: &mut Matrix, angle: f32| {
            *this = Matrix::rotate_y(angle);
            Ok(())
        });
        add_chain_method(methods, "rotateZ", |_, this: &mut Matrix, angle: f32| {
            *this = Matrix::rotate_z(angle);
            Ok(())
        });
        add_chain_method(methods, "scale", |_, this: &mut Matrix, args: MultiValue| {
            let v = xyz(args, 1.0)?;
            *this = Matrix::scale(v.x, v.y, v.z);
            Ok(())
        });
        add_chain_method(
            methods,
            "frustum",
            |_, this: &mut Matrix, (l, r, b, t, n, f): (f32, f32, f32, f32, f32, f32)| {
                *this = Matrix::frustum(l, r, b, t, n, f);
                Ok(())
            },
        );
        add_chain_method(
            methods,
            "perspective",
            |_, this: &mut Matrix, (fovy, aspect, n, f): (f32, f32, f32, f32)| {
                *this = Matrix::perspective(fovy, aspect, n, f);
                Ok(())
            },
        );
        add_chain_method(
            methods,
            "ortho",
            |_, this: &mut Matrix, (l, r, b, t, n, f): (f32, f32, f32, f32, f32, f32)| {
                *this = Matrix::ortho(l, r, b, t, n, f);
                Ok(())
            },
        );
        add_chain_method(
            methods,
            "lookAt",
            |_, this: &mut Matrix, (eye, target, up): (Vector3, Vector3, Vector3)| {
                *this = Matrix::look_at(eye, target, up);
                Ok(())
            },
        );

        methods.add_meta_function(MetaMethod::Add, |_, (a, b): (Matrix, Matrix)| Ok(a + b));
        methods.add_meta_function(MetaMethod::Sub, |_, (a, b): (Matrix, Matrix)| Ok(a - b));
        methods.add_meta_function(MetaMethod::Mul, |_, (a, b): (Matrix, Matrix)| Ok(a * b));
        methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
            Ok(matches!((Matrix::peek(&a), Matrix::peek(&b)), (Some(a), Some(b)) if a == b))
        });
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let m = this.0.iter().map(|m| format!("{m:.6}")).collect::<Vec<_>>();
            Ok(format!("Matrix[{}]", m.join(", ")))
        });
    }
}

/// `Matrix(m0, ..., m15)`, `Matrix{m0, ..., m15}` or a copy of another matrix; missing values are 0.
pub(super) fn construct(args: MultiValue) -> Result<Matrix> {
    let mut args = Args::new(args);
    if let Some(m) = args.opt_class::<Matrix>() {
        return Ok(m);
    }
    let mut m = Matrix::ZERO;
    if args.is_table() {
        let t = args.table()?;
        for (i, v) in m.0.iter_mut().enumerate() {
            *v = table_number(&t, i as i64 + 1, 0.0)?;
        }
        return Ok(m);
    }
    for v in m.0.iter_mut() {
        *v = args.opt_number(0.0);
    }
    Ok(m)
}
