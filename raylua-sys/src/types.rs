//! Mirrors of raylib's public structs (raylib 5.0 layout).

use std::os::raw::{c_char, c_int, c_uint, c_void};
use std::ptr;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

pub type Quaternion = Vector4;

/// 4x4 matrix, OpenGL column-major storage in raylib's field order.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix {
    pub m0: f32,
    pub m4: f32,
    pub m8: f32,
    pub m12: f32,
    pub m1: f32,
    pub m5: f32,
    pub m9: f32,
    pub m13: f32,
    pub m2: f32,
    pub m6: f32,
    pub m10: f32,
    pub m14: f32,
    pub m3: f32,
    pub m7: f32,
    pub m11: f32,
    pub m15: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Image pixel data stored in CPU memory (RAM).
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct Image {
    pub data: *mut c_void,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

impl Default for Image {
    fn default() -> Self {
        Image {
            data: ptr::null_mut(),
            width: 0,
            height: 0,
            mipmaps: 0,
            format: 0,
        }
    }
}

/// Texture data stored in GPU memory (VRAM).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Texture {
    pub id: c_uint,
    pub width: c_int,
    pub height: c_int,
    pub mipmaps: c_int,
    pub format: c_int,
}

pub type Texture2D = Texture;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderTexture {
    pub id: c_uint,
    pub texture: Texture,
    pub depth: Texture,
}

pub type RenderTexture2D = RenderTexture;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera2D {
    pub offset: Vector2,
    pub target: Vector2,
    pub rotation: f32,
    pub zoom: f32,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera3D {
    pub position: Vector3,
    pub target: Vector3,
    pub up: Vector3,
    pub fovy: f32,
    pub projection: c_int,
}

pub type Camera = Camera3D;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ray {
    pub position: Vector3,
    pub direction: Vector3,
}

/// List of paths returned by `LoadDirectoryFiles` and `LoadDroppedFiles`.
#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct FilePathList {
    pub capacity: c_uint,
    pub count: c_uint,
    pub paths: *mut *mut c_char,
}
