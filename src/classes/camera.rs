use mlua::{MetaMethod, MultiValue, Result, Table, UserData, UserDataFields, UserDataMethods, Value};

use super::{add_class_field, impl_class, Class};
use crate::args::{table_class, Args};
use crate::enums;
use crate::math::{Vector2, Vector3};

/// 2D camera: `offset` is the screen point the `target` is drawn at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera2D {
    pub offset: Vector2,
    pub target: Vector2,
    pub rotation: f32,
    pub zoom: f32,
}

impl Default for Camera2D {
    fn default() -> Self {
        Camera2D {
            offset: Vector2::ZERO,
            target: Vector2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

impl From<Camera2D> for ffi::Camera2D {
    fn from(c: Camera2D) -> Self {
        ffi::Camera2D {
            offset: c.offset.into(),
            target: c.target.into(),
            rotation: c.rotation,
            zoom: c.zoom,
        }
    }
}

/// 3D camera. `mode` is the camera mode applied by `UpdateCamera`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: f32,
    pub projection: i32,
    pub mode: i32,
}

impl Default for Camera3D {
    fn default() -> Self {
        Camera3D {
            position: Vector3::ZERO,
            target: Vector3::ZERO,
            up: Vector3::new(0.0, 1.0, 0.0),
            fovy: 45.0,
            projection: ffi::CAMERA_PERSPECTIVE,
            mode: ffi::CAMERA_CUSTOM,
        }
    }
}

impl Camera3D {
    /// Copies the state raylib updated back into the camera.
    pub(crate) fn update_from(&mut self, raw: &ffi::Camera3D) {
        self.position = raw.position.into();
        self.target = raw.target.into();
        self.up = raw.up.into();
        self.fovy = raw.fovy;
        self.projection = raw.projection;
    }
}

impl From<Camera3D> for ffi::Camera3D {
    fn from(c: Camera3D) -> Self {
        ffi::Camera3D {
            position: c.position.into(),
            target: c.target.into(),
            up: c.up.into(),
            fovy: c.fovy,
            projection: c.projection,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

impl From<ffi::Ray> for Ray {
    fn from(r: ffi::Ray) -> Self {
        Ray {
            position: r.position.into(),
            direction: r.direction.into(),
        }
    }
}

impl_class!(Camera2D, "Camera2D");
impl_class!(Camera3D, "Camera3D");
impl_class!(Ray, "Ray");

fn number_field(t: &Table, key: &str, default: f32) -> Result<f32> {
    let value: Value = t.raw_get(key)?;
    Ok(crate::args::as_number(&value).map_or(default, |n| n as f32))
}

fn enum_field(table: &enums::EnumTable, value: &Value, current: i32) -> Result<i32> {
    Ok(table.resolve(value, 1)?.unwrap_or(current))
}

macro_rules! add_field {
    ($fields:ident, $name:literal, $field:ident: $ty:ty) => {
        $fields.add_field_method_get($name, |_, this| Ok(this.$field));
        $fields.add_field_method_set($name, |_, this, v: $ty| {
            this.$field = v;
            Ok(())
        });
    };
}

impl UserData for Camera2D {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        add_field!(fields, "offset", offset: Vector2);
        add_field!(fields, "target", target: Vector2);
        add_field!(fields, "rotation", rotation: f32);
        add_field!(fields, "zoom", zoom: f32);
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("clone", |_, this, ()| Ok(*this));
        methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
            Ok(matches!((Camera2D::peek(&a), Camera2D::peek(&b)), (Some(a), Some(b)) if a == b))
        });
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            Ok(format!(
                "Camera2D[({:.6}, {:.6}), ({:.6}, {:.6}), {:.6}, {:.6}]",
                this.offset.x, this.offset.y, this.target.x, this.target.y, this.rotation, this.zoom
            ))
        });
    }
}

impl UserData for Camera3D {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        add_field!(fields, "position", position: Vector3);
        add_field!(fields, "target", target: Vector3);
        add_field!(fields, "up", up: Vector3);
        add_field!(fields, "fovy", fovy: f32);
        fields.add_field_method_get("projection", |_, this| {
            Ok(enums::projections().name_of(this.projection))
        });
        fields.add_field_method_set("projection", |_, this, v: Value| {
            this.projection = enum_field(enums::projections(), &v, this.projection)?;
            Ok(())
        });
        fields.add_field_method_get("mode", |_, this| Ok(enums::camera_modes().name_of(this.mode)));
        fields.add_field_method_set("mode", |_, this, v: Value| {
            this.mode = enum_field(enums::camera_modes(), &v, this.mode)?;
            Ok(())
        });
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("clone", |_, this, ()| Ok(*this));
        methods.add_meta_function(MetaMethod::Eq, |_, (a, b): (Value, Value)| {
            Ok(matches!((Camera3D::peek(&a), Camera3D::peek(&b)), (Some(a), Some(b)) if a == b))
        });
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let (p, t) = (this.position, this.target);
            Ok(format!(
                "Camera3D[({:.6}, {:.6}, {:.6}), ({:.6}, {:.6}, {:.6}), {:.6}]",
                p.x, p.y, p.z, t.x, t.y, t.z, this.fovy
            ))
        });
    }
}

impl UserData for Ray {
    fn add_fields<F: UserDataFields<Self>>(fields: &mut F) {
        add_class_field(fields);
        add_field!(fields, "position", position: Vector3);
        add_field!(fields, "direction", direction: Vector3);
    }

    fn add_methods<M: UserDataMethods<Self>>(methods: &mut M) {
        methods.add_method("clone", |_, this, ()| Ok(*this));
        methods.add_method("get", |_, this, ()| Ok((this.position, this.direction)));
        methods.add_meta_method(MetaMethod::ToString, |_, this, ()| {
            let (p, d) = (this.position, this.direction);
            Ok(format!(
                "Ray[({:.6}, {:.6}, {:.6}), ({:.6}, {:.6}, {:.6})]",
                p.x, p.y, p.z, d.x, d.y, d.z
            ))
        });
    }
}

/// `Camera2D([offset, target, rotation, zoom])` or `Camera2D{offset = .., target = .., ..}`.
pub(super) fn construct_2d(args: MultiValue) -> Result<Camera2D> {
    let mut args = Args::new(args);
    if let Some(camera) = args.opt_class::<Camera2D>() {
        return Ok(camera);
    }
    let mut camera = Camera2D::default();
    if args.is_table() {
        let t = args.table()?;
        camera.offset = table_class(&t, "offset")?.unwrap_or(camera.offset);
        camera.target = table_class(&t, "target")?.unwrap_or(camera.target);
        camera.rotation = number_field(&t, "rotation", camera.rotation)?;
        camera.zoom = number_field(&t, "zoom", camera.zoom)?;
        return Ok(camera);
    }
    camera.offset = args.opt_class().unwrap_or(camera.offset);
    camera.target = args.opt_class().unwrap_or(camera.target);
    camera.rotation = args.opt_number(camera.rotation);
    camera.zoom = args.opt_number(camera.zoom);
    Ok(camera)
}

/// `Camera3D([position, target, up, fovy, projection])` or the same keys in a table.
pub(super) fn construct_3d(args: MultiValue) -> Result<Camera3D> {
    let mut args = Args::new(args);
    if let Some(camera) = args.opt_class::<Camera3D>() {
        return Ok(camera);
    }
    let mut camera = Camera3D::default();
    if args.is_table() {
        let t = args.table()?;
        camera.position = table_class(&t, "position")?.unwrap_or(camera.position);
        camera.target = table_class(&t, "target")?.unwrap_or(camera.target);
        camera.up = table_class(&t, "up")?.unwrap_or(camera.up);
        camera.fovy = number_field(&t, "fovy", camera.fovy)?;
        let projection: Value = t.raw_get("projection")?;
        if !projection.is_nil() {
            camera.projection = enum_field(enums::projections(), &projection, camera.projection)?;
        }
        return Ok(camera);
    }
    camera.position = args.opt_class().unwrap_or(camera.position);
    camera.target = args.opt_class().unwrap_or(camera.target);
    camera.up = args.opt_class().unwrap_or(camera.up);
    camera.fovy = args.opt_number(camera.fovy);
    let projection = args.next();
    if !projection.is_nil() {
        camera.projection = enum_field(enums::projections(), &projection, camera.projection)?;
    }
    Ok(camera)
}

/// `Ray(position, direction)` or `Ray{position = .., direction = ..}`.
pub(super) fn construct_ray(args: MultiValue) -> Result<Ray> {
    let mut args = Args::new(args);
    if let Some(ray) = args.opt_class::<Ray>() {
        return Ok(ray);
    }
    if args.is_table() {
        let t = args.table()?;
        return Ok(Ray {
            position: table_class(&t, "position")?.unwrap_or_default(),
            direction: table_class(&t, "direction")?.unwrap_or_default(),
        });
    }
    Ok(Ray {
        position: args.opt_class().unwrap_or_default(),
        direction: args.opt_class().unwrap_or_default(),
    })
}
