//! String and integer translation tables for raylib enums.
//!
//! Each table is exported to Lua in both directions (`t[name] = value`, `t[value] = name`)
//! and looked up on the Rust side when a function receives an enum argument.

use std::sync::OnceLock;

use mlua::{Error, Lua, Result, Table, Value};
use rustc_hash::FxHashMap;

use crate::args::as_number;

/// Bidirectional name/value table of one raylib enum.
#[derive(Debug)]
pub struct EnumTable {
    name: &'static str,
    entries: &'static [(&'static str, i32)],
    by_name: FxHashMap<&'static str, i32>,
    by_value: FxHashMap<i32, &'static str>,
}

impl EnumTable {
    fn new(name: &'static str, entries: &'static [(&'static str, i32)]) -> Self {
        let mut by_name = FxHashMap::default();
        let mut by_value = FxHashMap::default();
        for &(key, value) in entries {
            by_name.insert(key, value);
            // Aliases share a value, the first name is the canonical one
            by_value.entry(value).or_insert(key);
        }
        EnumTable {
            name,
            entries,
            by_name,
            by_value,
        }
    }

    /// Name of the table in the module (`ekey`, `etexture`, ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self, name: &str) -> Option<i32> {
        self.by_name.get(name).copied()
    }

    pub fn name_of(&self, value: i32) -> Option<&'static str> {
        self.by_value.get(&value).copied()
    }

    /// Resolves a name or a known value; `Ok(None)` when it is not part of the enum.
    ///
    /// Any other argument type is an error mentioning argument `pos`.
    pub fn resolve(&self, value: &Value, pos: usize) -> Result<Option<i32>> {
        match value {
            Value::String(s) => Ok(s.to_str().ok().and_then(|s| self.value(&s))),
            _ => match as_number(value) {
                Some(n) => {
                    let n = n as i32;
                    Ok(self.by_value.contains_key(&n).then_some(n))
                }
                None => Err(Error::runtime(format!(
                    "bad argument #{pos}: enum expected, got {}",
                    value.type_name()
                ))),
            },
        }
    }

    /// Builds the Lua side of the table.
    pub fn create_table(&self, lua: &Lua) -> Result<Table> {
        let t = lua.create_table_with_capacity(self.by_value.len(), self.by_name.len())?;
        for &(key, value) in self.entries {
            t.raw_set(key, value)?;
        }
        for (&value, &key) in &self.by_value {
            t.raw_set(value, key)?;
        }
        Ok(t)
    }
}

macro_rules! enum_table {
    ($(#[$meta:meta])* $fn:ident, $name:literal, [$($key:literal => $value:expr),* $(,)?]) => {
        $(#[$meta])*
        pub fn $fn() -> &'static EnumTable {
            static TABLE: OnceLock<EnumTable> = OnceLock::new();
            TABLE.get_or_init(|| EnumTable::new($name, &[$(($key, $value)),*]))
        }
    };
}

enum_table!(
    /// Keyboard keys, US layout.
    keys, "ekey", [
    "unknown" => -1,
    "'" => 39, "," => 44, "-" => 45, "." => 46, "/" => 47,
    "0" => 48, "1" => 49, "2" => 50, "3" => 51, "4" => 52,
    "5" => 53, "6" => 54, "7" => 55, "8" => 56, "9" => 57,
    ";" => 59, "=" => 61,
    "a" => 65, "b" => 66, "c" => 67, "d" => 68, "e" => 69, "f" => 70, "g" => 71,
    "h" => 72, "i" => 73, "j" => 74, "k" => 75, "l" => 76, "m" => 77, "n" => 78,
    "o" => 79, "p" => 80, "q" => 81, "r" => 82, "s" => 83, "t" => 84, "u" => 85,
    "v" => 86, "w" => 87, "x" => 88, "y" => 89, "z" => 90,
    "[" => 91, "\\" => 92, "]" => 93, "`" => 96,
    "space" => 32, "escape" => 256, "enter" => 257, "return" => 257, "tab" => 258,
    "backspace" => 259, "insert" => 260, "delete" => 261,
    "right" => 262, "left" => 263, "down" => 264, "up" => 265,
    "pageup" => 266, "pagedown" => 267, "home" => 268, "end" => 269,
    "capslock" => 280, "scrolllock" => 281, "numlock" => 282, "prtscr" => 283, "pause" => 284,
    "f1" => 290, "f2" => 291, "f3" => 292, "f4" => 293, "f5" => 294, "f6" => 295,
    "f7" => 296, "f8" => 297, "f9" => 298, "f10" => 299, "f11" => 300, "f12" => 301,
    "lshift" => 340, "lctrl" => 341, "lalt" => 342, "lsuper" => 343,
    "rshift" => 344, "rctrl" => 345, "ralt" => 346, "rsuper" => 347, "menu" => 348,
    "kp0" => 320, "kp1" => 321, "kp2" => 322, "kp3" => 323, "kp4" => 324,
    "kp5" => 325, "kp6" => 326, "kp7" => 327, "kp8" => 328, "kp9" => 329,
    "kp." => 330, "kp/" => 331, "kp*" => 332, "kp-" => 333, "kp+" => 334,
    "kpenter" => 335, "kp=" => 336,
]);

enum_table!(
    /// Pixel formats.
    texture_formats, "etexture", [
    "grayscale" => ffi::PIXELFORMAT_UNCOMPRESSED_GRAYSCALE,
    "grayalpha" => ffi::PIXELFORMAT_UNCOMPRESSED_GRAY_ALPHA,
    "r5g6b5" => ffi::PIXELFORMAT_UNCOMPRESSED_R5G6B5,
    "r8g8b8" => ffi::PIXELFORMAT_UNCOMPRESSED_R8G8B8,
    "r5g5b5a1" => ffi::PIXELFORMAT_UNCOMPRESSED_R5G5B5A1,
    "r4g4b4a4" => ffi::PIXELFORMAT_UNCOMPRESSED_R4G4B4A4,
    "r8g8b8a8" => ffi::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8,
    "r32" => ffi::PIXELFORMAT_UNCOMPRESSED_R32,
    "r32g32b32" => ffi::PIXELFORMAT_UNCOMPRESSED_R32G32B32,
    "r32g32b32a32" => ffi::PIXELFORMAT_UNCOMPRESSED_R32G32B32A32,
    "r16" => ffi::PIXELFORMAT_UNCOMPRESSED_R16,
    "r16g16b16" => ffi::PIXELFORMAT_UNCOMPRESSED_R16G16B16,
    "r16g16b16a16" => ffi::PIXELFORMAT_UNCOMPRESSED_R16G16B16A16,
    "dxt1_rgb" => ffi::PIXELFORMAT_COMPRESSED_DXT1_RGB,
    "dxt1_rgba" => ffi::PIXELFORMAT_COMPRESSED_DXT1_RGBA,
    "dxt3_rgba" => ffi::PIXELFORMAT_COMPRESSED_DXT3_RGBA,
    "dxt5_rgba" => ffi::PIXELFORMAT_COMPRESSED_DXT5_RGBA,
    "etc1_rgb" => ffi::PIXELFORMAT_COMPRESSED_ETC1_RGB,
    "etc2_rgb" => ffi::PIXELFORMAT_COMPRESSED_ETC2_RGB,
    "etc2_eac_rgba" => ffi::PIXELFORMAT_COMPRESSED_ETC2_EAC_RGBA,
    "pvrt_rgb" => ffi::PIXELFORMAT_COMPRESSED_PVRT_RGB,
    "pvrt_rgba" => ffi::PIXELFORMAT_COMPRESSED_PVRT_RGBA,
    "astc_4x4_rgba" => ffi::PIXELFORMAT_COMPRESSED_ASTC_4x4_RGBA,
    "astc_8x8_rgba" => ffi::PIXELFORMAT_COMPRESSED_ASTC_8x8_RGBA,
]);

enum_table!(config_flags, "eflag", [
    "VSYNC_HINT" => ffi::FLAG_VSYNC_HINT as i32,
    "FULLSCREEN_MODE" => ffi::FLAG_FULLSCREEN_MODE as i32,
    "WINDOW_RESIZABLE" => ffi::FLAG_WINDOW_RESIZABLE as i32,
    "WINDOW_UNDECORATED" => ffi::FLAG_WINDOW_UNDECORATED as i32,
    "WINDOW_HIDDEN" => ffi::FLAG_WINDOW_HIDDEN as i32,
    "WINDOW_MINIMIZED" => ffi::FLAG_WINDOW_MINIMIZED as i32,
    "WINDOW_MAXIMIZED" => ffi::FLAG_WINDOW_MAXIMIZED as i32,
    "WINDOW_UNFOCUSED" => ffi::FLAG_WINDOW_UNFOCUSED as i32,
    "WINDOW_TOPMOST" => ffi::FLAG_WINDOW_TOPMOST as i32,
    "WINDOW_ALWAYS_RUN" => ffi::FLAG_WINDOW_ALWAYS_RUN as i32,
    "WINDOW_TRANSPARENT" => ffi::FLAG_WINDOW_TRANSPARENT as i32,
    "WINDOW_HIGHDPI" => ffi::FLAG_WINDOW_HIGHDPI as i32,
    "WINDOW_MOUSE_PASSTHROUGH" => ffi::FLAG_WINDOW_MOUSE_PASSTHROUGH as i32,
    "BORDERLESS_WINDOWED_MODE" => ffi::FLAG_BORDERLESS_WINDOWED_MODE as i32,
    "MSAA_4X_HINT" => ffi::FLAG_MSAA_4X_HINT as i32,
    "INTERLACED_HINT" => ffi::FLAG_INTERLACED_HINT as i32,
]);

enum_table!(log_levels, "elog", [
    "ALL" => ffi::LOG_ALL,
    "TRACE" => ffi::LOG_TRACE,
    "DEBUG" => ffi::LOG_DEBUG,
    "INFO" => ffi::LOG_INFO,
    "WARNING" => ffi::LOG_WARNING,
    "ERROR" => ffi::LOG_ERROR,
    "FATAL" => ffi::LOG_FATAL,
    "NONE" => ffi::LOG_NONE,
]);

enum_table!(gestures, "egesture", [
    "NONE" => ffi::GESTURE_NONE,
    "TAP" => ffi::GESTURE_TAP,
    "DOUBLETAP" => ffi::GESTURE_DOUBLETAP,
    "HOLD" => ffi::GESTURE_HOLD,
    "DRAG" => ffi::GESTURE_DRAG,
    "SWIPE_RIGHT" => ffi::GESTURE_SWIPE_RIGHT,
    "SWIPE_LEFT" => ffi::GESTURE_SWIPE_LEFT,
    "SWIPE_UP" => ffi::GESTURE_SWIPE_UP,
    "SWIPE_DOWN" => ffi::GESTURE_SWIPE_DOWN,
    "PINCH_IN" => ffi::GESTURE_PINCH_IN,
    "PINCH_OUT" => ffi::GESTURE_PINCH_OUT,
]);

enum_table!(camera_modes, "ecamera", [
    "CUSTOM" => ffi::CAMERA_CUSTOM,
    "FREE" => ffi::CAMERA_FREE,
    "ORBITAL" => ffi::CAMERA_ORBITAL,
    "FIRST_PERSON" => ffi::CAMERA_FIRST_PERSON,
    "THIRD_PERSON" => ffi::CAMERA_THIRD_PERSON,
]);

enum_table!(projections, "eprojection", [
    "PERSPECTIVE" => ffi::CAMERA_PERSPECTIVE,
    "ORTHOGRAPHIC" => ffi::CAMERA_ORTHOGRAPHIC,
]);

enum_table!(mouse_buttons, "emouse", [
    "LEFT" => ffi::MOUSE_BUTTON_LEFT,
    "RIGHT" => ffi::MOUSE_BUTTON_RIGHT,
    "MIDDLE" => ffi::MOUSE_BUTTON_MIDDLE,
    "SIDE" => ffi::MOUSE_BUTTON_SIDE,
    "EXTRA" => ffi::MOUSE_BUTTON_EXTRA,
    "FORWARD" => ffi::MOUSE_BUTTON_FORWARD,
    "BACK" => ffi::MOUSE_BUTTON_BACK,
]);

fn all() -> [&'static EnumTable; 8] {
    [
        keys(),
        texture_formats(),
        config_flags(),
        log_levels(),
        gestures(),
        camera_modes(),
        projections(),
        mouse_buttons(),
    ]
}

/// Key code of argument `pos`, `-1` when unknown.
pub(crate) fn key(value: &Value, pos: usize) -> Result<i32> {
    Ok(keys().resolve(value, pos)?.unwrap_or(-1))
}

/// Pixel format of argument `pos`, `grayscale` when unknown.
pub(crate) fn texture_format(value: &Value, pos: usize) -> Result<i32> {
    Ok(texture_formats()
        .resolve(value, pos)?
        .unwrap_or(ffi::PIXELFORMAT_UNCOMPRESSED_GRAYSCALE))
}

/// Name of a pixel format, `unknown` outside the table.
pub(crate) fn texture_format_name(format: i32) -> &'static str {
    texture_formats().name_of(format).unwrap_or("unknown")
}

/// Bitwise union of the flag names in `values`; unknown names are ignored.
pub(crate) fn flags(table: &EnumTable, values: &[Value], first_pos: usize) -> Result<u32> {
    let mut flags = 0;
    for (i, value) in values.iter().enumerate() {
        if let Some(flag) = table.resolve(value, first_pos + i)? {
            flags |= flag as u32;
        }
    }
    Ok(flags)
}

/// Bits per pixel of a pixel format, 0 when unknown.
pub fn bits_per_pixel(format: i32) -> i32 {
    match format {
        ffi::PIXELFORMAT_UNCOMPRESSED_GRAYSCALE => 8,
        ffi::PIXELFORMAT_UNCOMPRESSED_GRAY_ALPHA
        | ffi::PIXELFORMAT_UNCOMPRESSED_R5G6B5
        | ffi::PIXELFORMAT_UNCOMPRESSED_R5G5B5A1
        | ffi::PIXELFORMAT_UNCOMPRESSED_R4G4B4A4
        | ffi::PIXELFORMAT_UNCOMPRESSED_R16 => 16,
        ffi::PIXELFORMAT_UNCOMPRESSED_R8G8B8 => 24,
        ffi::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8 | ffi::PIXELFORMAT_UNCOMPRESSED_R32 => 32,
        ffi::PIXELFORMAT_UNCOMPRESSED_R16G16B16 => 16 * 3,
        ffi::PIXELFORMAT_UNCOMPRESSED_R16G16B16A16 => 16 * 4,
        ffi::PIXELFORMAT_UNCOMPRESSED_R32G32B32 => 32 * 3,
        ffi::PIXELFORMAT_UNCOMPRESSED_R32G32B32A32 => 32 * 4,
        ffi::PIXELFORMAT_COMPRESSED_DXT1_RGB
        | ffi::PIXELFORMAT_COMPRESSED_DXT1_RGBA
        | ffi::PIXELFORMAT_COMPRESSED_ETC1_RGB
        | ffi::PIXELFORMAT_COMPRESSED_ETC2_RGB
        | ffi::PIXELFORMAT_COMPRESSED_PVRT_RGB
        | ffi::PIXELFORMAT_COMPRESSED_PVRT_RGBA => 4,
        ffi::PIXELFORMAT_COMPRESSED_DXT3_RGBA
        | ffi::PIXELFORMAT_COMPRESSED_DXT5_RGBA
        | ffi::PIXELFORMAT_COMPRESSED_ETC2_EAC_RGBA
        | ffi::PIXELFORMAT_COMPRESSED_ASTC_4x4_RGBA => 8,
        ffi::PIXELFORMAT_COMPRESSED_ASTC_8x8_RGBA => 2,
        _ => 0,
    }
}

/// Size in bytes of a `width` x `height` pixel block in `format`.
pub fn pixel_data_size(width: i32, height: i32, format: i32) -> i64 {
    let mut size = i64::from(width) * i64::from(height) * i64::from(bits_per_pixel(format)) / 8;

    // Compressed formats store 4x4 blocks at least
    if width < 4 && height < 4 {
        if (ffi::PIXELFORMAT_COMPRESSED_DXT1_RGB..ffi::PIXELFORMAT_COMPRESSED_DXT3_RGBA).contains(&format) {
            size = 8;
        } else if (ffi::PIXELFORMAT_COMPRESSED_DXT3_RGBA..ffi::PIXELFORMAT_COMPRESSED_ASTC_8x8_RGBA)
            .contains(&format)
        {
            size = 16;
        }
    }
    size
}

pub(crate) fn register(lua: &Lua, module: &Table) -> Result<()> {
    for table in all() {
        module.set(table.name(), table.create_table(lua)?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_keep_first_name() {
        assert_eq!(keys().value("return"), Some(257));
        assert_eq!(keys().name_of(257), Some("enter"));
    }

    #[test]
    fn test_pixel_data_size() {
        assert_eq!(pixel_data_size(16, 16, ffi::PIXELFORMAT_UNCOMPRESSED_R8G8B8A8), 1024);
        assert_eq!(pixel_data_size(2, 2, ffi::PIXELFORMAT_COMPRESSED_DXT1_RGB), 8);
        assert_eq!(pixel_data_size(2, 2, ffi::PIXELFORMAT_COMPRESSED_DXT5_RGBA), 16);
        assert_eq!(pixel_data_size(2, 2, 99), 0);
        assert_eq!(
            pixel_data_size(100_000, 100_000, ffi::PIXELFORMAT_UNCOMPRESSED_R32G32B32A32),
            160_000_000_000
        );
    }

    #[test]
    fn test_unknown_enum_arguments() -> Result<()> {
        let lua = Lua::new();
        let name = |s: &str| lua.create_string(s).map(Value::String);

        assert_eq!(key(&name("a")?, 1)?, 65);
        assert_eq!(key(&name("nope")?, 1)?, -1);
        assert_eq!(key(&Value::Integer(999), 1)?, -1);
        assert_eq!(key(&Value::Integer(257), 1)?, 257);

        assert_eq!(texture_format(&Value::Integer(99), 1)?, ffi::PIXELFORMAT_UNCOMPRESSED_GRAYSCALE);
        assert_eq!(texture_format(&name("dxt5_rgba")?, 1)?, ffi::PIXELFORMAT_COMPRESSED_DXT5_RGBA);
        Ok(())
    }
}
