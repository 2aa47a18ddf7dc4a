use std::mem::{align_of, size_of};
use std::path::PathBuf;

use raylua_sys::*;
use static_assertions::{assert_eq_align, assert_eq_size, const_assert_eq};

assert_eq_size!(Vector2, [f32; 2]);
assert_eq_size!(Vector3, [f32; 3]);
assert_eq_size!(Vector4, [f32; 4]);
assert_eq_size!(Matrix, [f32; 16]);
assert_eq_size!(Color, u32);
assert_eq_size!(Rectangle, [f32; 4]);
assert_eq_size!(Camera2D, [f32; 6]);
assert_eq_size!(Camera3D, [f32; 11]);
assert_eq_size!(Ray, [f32; 6]);
assert_eq_size!(Texture, [u32; 5]);
assert_eq_size!(RenderTexture, [u32; 11]);
assert_eq_align!(Matrix, f32);
const_assert_eq!(align_of::<Color>(), 1);

#[test]
fn test_image_layout() {
    let ptr = size_of::<*mut std::ffi::c_void>();
    assert_eq!(size_of::<Image>(), ptr + 4 * size_of::<i32>());
    assert!(Image::default().data.is_null());
}

#[test]
fn test_matrix_field_order() {
    let m = Matrix {
        m0: 0.0,
        m4: 4.0,
        m8: 8.0,
        m12: 12.0,
        m1: 1.0,
        m5: 5.0,
        m9: 9.0,
        m13: 13.0,
        m2: 2.0,
        m6: 6.0,
        m10: 10.0,
        m14: 14.0,
        m3: 3.0,
        m7: 7.0,
        m11: 11.0,
        m15: 15.0,
    };
    let raw: [f32; 16] = unsafe { std::mem::transmute(m) };
    assert_eq!(
        raw,
        [0., 4., 8., 12., 1., 5., 9., 13., 2., 6., 10., 14., 3., 7., 11., 15.]
    );
}

#[test]
fn test_open_missing_library() {
    let path = PathBuf::from("/nonexistent/raylua/libraylib.so");
    match Raylib::open(&path) {
        Err(Error::Load { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected load error, got {other:?}"),
    }

    let paths = vec![path.clone(), PathBuf::from("/nonexistent/raylua/raylib.dll")];
    match Raylib::open_first(&paths) {
        Err(err @ Error::NotFound(_)) => {
            let message = err.to_string();
            assert!(message.contains("libraylib.so"), "{message}");
            assert!(message.contains("raylib.dll"), "{message}");
        }
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn test_missing_symbol_message() {
    let err = Error::MissingSymbol("UpdateCamera");
    assert_eq!(err.to_string(), "raylib function 'UpdateCamera' is not available");
}

#[test]
fn test_default_search_paths() {
    let paths = default_search_paths();
    assert!(!paths.is_empty());
    assert!(paths
        .iter()
        .any(|p| p.to_string_lossy().contains("raylib")));
}
