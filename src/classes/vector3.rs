use mlua::{AnyUserData, MultiValue, Result, UserData, UserDataFields, UserDataMethods};

use super::vector::{self, add_vector_methods};
use super::{add_chain_method, add_class_field, impl_class};
use crate::math::{Matrix, Vector3, Vector4};

impl_class!(Vector3, "Vector3");

impl UserData for Vector3 {
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
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        add_vector_methods(methods);

        methods.add_method("crossProduct", |_, this, v: Vector3| Ok(this.cross(v)));
        methods.add_method("perpendicular", |_, this, ()| Ok(this.perpendicular()));
        methods.add_function(
            "orthoNormalize",
            |_, (ud1, ud2): (AnyUserData, AnyUserData)| {
                let v1 = *ud1.borrow::<Vector3>()?;
                let v2 = *ud2.borrow::<Vector3>()?;
                let (n1, n2) = Vector3::ortho_normalize(v1, v2);
                *ud1.borrow_mut::<Vector3>()? = n1;
                *ud2.borrow_mut::<Vector3>()? = n2;
                Ok((ud1, ud2))
            },
        );
        add_chain_method(methods, "transform", |_, this: &mut Vector3, m: Matrix| {
            *this = this.transform(&m);
            Ok(())
        });
        add_chain_method(methods, "rotateByQuaternion", |_, this: &mut Vector3, q: Vector4| {
            *this = this.rotate_by_quaternion(q);
            Ok(())
        });
        add_chain_method(methods, "reflect", |_, this: &mut Vector3, normal: Vector3| {
            *this = this.reflect(normal);
            Ok(())
        });
        add_chain_method(methods, "min", |_, this: &mut Vector3, v: Vector3| {
            *this = this.min(v);
            Ok(())
        });
        add_chain_method(methods, "max", |_, this: &mut Vector3, v: Vector3| {
            *this = this.max(v);
            Ok(())
        });
        methods.add_method("barycenter", |_, this, (a, b, c): (Vector3, Vector3, Vector3)| {
            Ok(Vector3::barycenter(*this, a, b, c))
        });
    }
}

pub(super) fn construct(args: MultiValue) -> Result<Vector3> {
    vector::construct(args)
}
