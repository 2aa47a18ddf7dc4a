use std::path::Path;

use mlua::{Lua, Result};
use raylua::Options;

fn setup_with(options: &Options) -> Result<Lua> {
    let lua = Lua::new();
    let rl = raylua::register(&lua, options)?;
    lua.globals().set("rl", rl)?;
    Ok(lua)
}

fn missing_library() -> Options {
    Options::new().library("/nonexistent/libraylib.so")
}

#[test]
fn test_unavailable_library() -> Result<()> {
    let lua = setup_with(&missing_library())?;
    assert!(!raylua::is_available(&lua));

    for chunk in [
        "rl.core.InitWindow(800, 450, 'test')",
        "rl.core.GetScreenWidth()",
        "rl.shapes.DrawPixel(1, 1, rl.Color('red'))",
        "rl.text.MeasureText('abc', 10)",
        "rl.textures.LoadImage('missing.png')",
        "rl.Image(2, 2)",
        "rl.Rectangle(0, 0, 10, 10):draw(rl.Color('red'))",
    ] {
        let err = lua.load(chunk).exec().unwrap_err();
        assert!(
            err.to_string().contains("raylib is not available"),
            "{chunk}: unexpected error {err}"
        );
    }

    Ok(())
}

#[test]
fn test_pure_functions_without_library() -> Result<()> {
    let lua = setup_with(&missing_library())?;

    lua.load(
        r#"
        local red = rl.Color('red')
        assert(rl.core.ColorToInt(red) == -433506305)
        assert(rl.core.GetColor(0xe62937ff) == red)
        assert(rl.core.Fade(red, 0.5).a == 127)

        local r, g, b, a = rl.core.ColorNormalize(rl.Color(255, 0, 0), 'n')
        assert(r == 1 and g == 0 and b == 0 and a == 1)
        assert(rl.core.ColorFromNormalized(1, 0, 0, 1) == rl.Color(255, 0, 0))
        assert(rl.core.ColorFromHSV(0, 1, 1) == rl.Color(255, 0, 0))
        local h = rl.core.ColorToHSV(rl.Color(0, 0, 255), 't')
        assert(h[1] == 240 and h[2] == 1 and h[3] == 1)

        local rect = rl.Rectangle(0, 0, 10, 10)
        assert(rl.shapes.CheckCollisionRecs(rect, rl.Rectangle(5, 5, 10, 10)))
        assert(not rl.shapes.CheckCollisionRecs(rect, rl.Rectangle(20, 20, 1, 1)))
        assert(rl.shapes.CheckCollisionCircles(rl.Vector2(0, 0), 1, rl.Vector2(1.5, 0), 1))
        assert(rl.shapes.CheckCollisionCircleRec(rl.Vector2(12, 5), 2.5, rect))
        assert(rl.shapes.CheckCollisionPointRec(rl.Vector2(5, 5), rect))
        assert(rl.shapes.CheckCollisionPointCircle(rl.Vector2(1, 1), rl.Vector2(0, 0), 2))
        assert(rl.shapes.CheckCollisionPointTriangle(
            rl.Vector2(1, 1), rl.Vector2(0, 0), rl.Vector2(4, 0), rl.Vector2(0, 4)))
        assert(rl.shapes.GetCollisionRec(rect, rl.Rectangle(5, 5, 10, 10)) == rl.Rectangle(5, 5, 5, 5))
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_storage() -> Result<()> {
    let dir = tempfile::tempdir().map_err(mlua::Error::external)?;
    let path = dir.path().join("storage.data");
    let lua = setup_with(&missing_library().storage_path(&path))?;

    lua.load(
        r#"
        assert(rl.core.StorageLoadValue(0) == 0)
        assert(rl.core.StorageSaveValue(2, 1234))
        assert(rl.core.StorageSaveValue(0, -5))
        assert(rl.core.StorageLoadValue(2) == 1234)
        assert(rl.core.StorageLoadValue(0) == -5)
        assert(rl.core.StorageLoadValue(1) == 0)
        assert(rl.core.StorageLoadValue(100) == 0)
    "#,
    )
    .exec()?;

    assert_eq!(file_len(&path), 12);
    Ok(())
}

fn file_len(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[test]
fn test_trace_log_callback_without_library() -> Result<()> {
    let lua = setup_with(&missing_library())?;

    lua.load(
        r#"
        rl.core.SetTraceLogCallback(function(level, text) end)
        rl.core.SetTraceLogCallback(nil)
    "#,
    )
    .exec()?;

    let err = lua.load("rl.core.TraceLog('BOGUS', 'text')").exec().unwrap_err();
    assert!(err.to_string().contains("unknown log level"));

    Ok(())
}

#[test]
fn test_resources_require_library() -> Result<()> {
    let lua = setup_with(&missing_library())?;

    let err = lua.load("rl.RenderTexture(64, 64)").exec().unwrap_err();
    assert!(err.to_string().contains("raylib is not available"));

    let err = lua.load("rl.core.BeginTextureMode(rl.Vector2())").exec().unwrap_err();
    assert!(!err.to_string().contains("raylib is not available"));

    Ok(())
}
