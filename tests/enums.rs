use std::collections::HashMap;

use maplit::hashmap;
use mlua::{Lua, Result, Table};
use raylua::{bits_per_pixel, pixel_data_size, Options};

fn setup() -> Result<Lua> {
    let lua = Lua::new();
    let rl = raylua::register(&lua, &Options::new().library("/nonexistent/libraylib.so"))?;
    lua.globals().set("rl", rl)?;
    Ok(lua)
}

#[test]
fn test_key_table() -> Result<()> {
    let lua = setup()?;
    let keys: Table = lua.load("rl.ekey").eval()?;

    let expected: HashMap<&str, i32> = hashmap! {
        "unknown" => -1,
        "space" => 32,
        "a" => 65,
        "z" => 90,
        "escape" => 256,
        "enter" => 257,
        "return" => 257,
        "f12" => 301,
        "kpenter" => 335,
        "rsuper" => 347,
    };
    for (name, value) in expected {
        assert_eq!(keys.get::<i32>(name)?, value, "{name}");
    }

    // Aliases translate back to the first name
    assert_eq!(keys.get::<String>(257)?, "enter");
    assert_eq!(keys.get::<String>(65)?, "a");

    Ok(())
}

#[test]
fn test_texture_format_table() -> Result<()> {
    let lua = setup()?;
    let formats: Table = lua.load("rl.etexture").eval()?;

    let expected: HashMap<&str, i32> = hashmap! {
        "grayscale" => 1,
        "r8g8b8a8" => 7,
        "r32g32b32a32" => 10,
        "dxt1_rgb" => 14,
        "astc_8x8_rgba" => 24,
    };
    for (name, value) in expected {
        assert_eq!(formats.get::<i32>(name)?, value, "{name}");
        assert_eq!(formats.get::<String>(value)?, name);
    }

    Ok(())
}

#[test]
fn test_supplementary_tables() -> Result<()> {
    let lua = setup()?;

    lua.load(
        r#"
        assert(rl.eflag.MSAA_4X_HINT == 0x20)
        assert(rl.elog.ALL == 0 and rl.elog.NONE == 7 and rl.elog[4] == "WARNING")
        assert(rl.egesture.TAP == 1 and rl.egesture[512] == "PINCH_OUT")
        assert(rl.ecamera.ORBITAL == 2 and rl.ecamera[3] == "FIRST_PERSON")
        assert(rl.eprojection.PERSPECTIVE == 0 and rl.eprojection.ORTHOGRAPHIC == 1)
        assert(rl.emouse.LEFT == 0 and rl.emouse.BACK == 6)
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_enum_arguments() -> Result<()> {
    let lua = setup()?;

    let size: i32 = lua.load("rl.textures.GetPixelDataSize(4, 4, 'r8g8b8a8')").eval()?;
    assert_eq!(size, 64);

    // Unknown formats fall back to grayscale
    let size: i32 = lua.load("rl.textures.GetPixelDataSize(4, 4, 'nope')").eval()?;
    assert_eq!(size, 16);
    let size: i32 = lua.load("rl.textures.GetPixelDataSize(2, 2, rl.etexture.dxt1_rgb)").eval()?;
    assert_eq!(size, 8);

    let size: i64 = lua
        .load("rl.textures.GetPixelDataSize(100000, 100000, 'r32g32b32a32')")
        .eval()?;
    assert_eq!(size, 160_000_000_000);

    let err = lua.load("rl.textures.GetPixelDataSize(4, 4, {})").exec().unwrap_err();
    assert!(err.to_string().contains("bad argument #3: enum expected, got table"));

    Ok(())
}

#[test]
fn test_pixel_math() {
    assert_eq!(bits_per_pixel(7), 32);
    assert_eq!(bits_per_pixel(100), 0);
    assert_eq!(pixel_data_size(10, 10, 4), 300);
    assert_eq!(pixel_data_size(1, 1, 17), 16);
    assert_eq!(pixel_data_size(70_000, 70_000, 7), 19_600_000_000);
}
