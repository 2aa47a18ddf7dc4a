use mlua::{MultiValue, Result, UserData, UserDataFields, UserDataMethods};

use super::vector::{self, add_vector_methods};
use super::{add_class_field, impl_class};
use crate::math::{Vector2, RAD2DEG};

impl_class!(Vector2, "Vector2");

impl UserData for Vector2 {
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
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        add_vector_methods(methods);

        // Both angles point from the receiver towards `v`
        methods.add_method("angle", |_, this, v: Vector2| Ok(this.angle_to(v) * RAD2DEG));
        methods.add_method("angleRad", |_, this, v: Vector2| Ok(this.angle_to(v)));
    }
}

pub(super) fn construct(args: MultiValue) -> Result<Vector2> {
    vector::construct(args)
}
