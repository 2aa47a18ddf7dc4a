use mlua::{MultiValue, Result, UserData, UserDataFields, UserDataMethods};

use super::vector::{self, add_vector_methods};
use super::{add_chain_method, add_class_field, impl_class};
use crate::args::Args;
use crate::math::{Matrix, Vector3, Vector4, RAD2DEG};

impl_class!(Vector4, "Vector4");

impl UserData for Vector4 {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        fields.add_field_method_get("x", |_, this| Ok(this.x));
        fields.add_field_method_set("x", |_, this, x: f32| {
            this.x = x;
            Ok(())
        });
        fields.add_field_method_get("y", |_, this| Ok(this.y));
        fields.add_field_method_set("y", |_, this, y: f32| {
            this.y = y;
            Ok(())
        });
        fields.add_field_method_get("z", |_, this| Ok(this.z));
        fields.add_field_method_set("z", |_, this, z: f32| {
            this.z = z;
            Ok(())
        });
        fields.add_field_method_get("w", |_, this| Ok(this.w));
        fields.add_field_method_set("w", |_, this, w: f32| {
            this.w = w;
            Ok(())
        });
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        add_vector_methods(methods);

        add_chain_method(methods, "identity", |_, this: &mut Vector4, args: MultiValue| {
            if args.is_empty() {
                *this = Vector4::IDENTITY;
                return Ok(());
            }
            let mut args = Args::new(args);
            *this = Vector4::new(args.number()?, args.number()?, args.number()?, args.number()?);
            Ok(())
        });

        add_chain_method(methods, "qInvert", |_, this: &mut Vector4, ()| {
            *this = this.invert();
            Ok(())
        });
        add_chain_method(methods, "qMultiply", |_, this: &mut Vector4, q: Vector4| {
            *this = this.quat_mul(q);
            Ok(())
        });
        add_chain_method(methods, "qLerp", |_, this: &mut Vector4, (q, amount): (Vector4, f32)| {
            *this = this.lerp(q, amount);
            Ok(())
        });
        add_chain_method(methods, "qNlerp", |_, this: &mut Vector4, (q, amount): (Vector4, f32)| {
            *this = this.nlerp(q, amount);
            Ok(())
        });
        add_chain_method(methods, "qSlerp", |_, this: &mut Vector4, (q, amount): (Vector4, f32)| {
            *this = this.slerp(q, amount);
            Ok(())
        });
        add_chain_method(
            methods,
            "qFromVector3ToVector3",
            |_, this: &mut Vector4, (from, to): (Vector3, Vector3)| {
                *this = Vector4::from_vector3_to_vector3(from, to);
                Ok(())
            },
        );
        add_chain_method(methods, "qFromMatrix", |_, this: &mut Vector4, m: Matrix| {
            *this = Vector4::from_matrix(&m);
            Ok(())
        });
        methods.add_method("qToMatrix", |_, this, ()| Ok(this.to_matrix()));
        add_chain_method(
            methods,
            "qFromAxisAngle",
            |_, this: &mut Vector4, (axis, angle): (Vector3, f32)| {
                *this = Vector4::from_axis_angle(axis, angle);
                Ok(())
            },
        );
        methods.add_method("qToAxisAngle", |_, this, ()| Ok(this.to_axis_angle()));
        // Angles in radians, roll around x first
        add_chain_method(
            methods,
            "qFromEuler",
            |_, this: &mut Vector4, (roll, pitch, yaw): (f32, f32, f32)| {
                *this = Vector4::from_euler(roll, pitch, yaw);
                Ok(())
            },
        );
        methods.add_method("qToEuler", |_, this, ()| {
            let euler = this.to_euler() * RAD2DEG;
            Ok((euler.x, euler.y, euler.z))
        });
        add_chain_method(methods, "qTransform", |_, this: &mut Vector4, m: Matrix| {
            *this = this.transform(&m);
            Ok(())
        });
    }
}

pub(super) fn construct(args: MultiValue) -> Result<Vector4> {
    vector::construct(args)
}
