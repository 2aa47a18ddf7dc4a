use mlua::{IntoLuaMulti, LightUserData, Lua, MultiValue, Result, Table, UserDataRef};

use super::native_index;
use crate::args::{c_string, from_c_str, Args};
use crate::classes::{Camera2D, Camera3D, Image, Ray, RenderTexture};
use crate::color::Color;
use crate::math::{Matrix, Vector2, Vector3};
use crate::native;

/// Size and name of monitor `index` (0-based).
fn monitor_info(lua: &Lua, index: i32) -> Result<Table> {
    native::with(lua, |rl| unsafe {
        Ok((
            rl.GetMonitorWidth(index)?,
            rl.GetMonitorHeight(index)?,
            rl.GetMonitorPhysicalWidth(index)?,
            rl.GetMonitorPhysicalHeight(index)?,
            from_c_str(rl.GetMonitorName(index)?),
        ))
    })
    .and_then(|(width, height, pwidth, pheight, name)| {
        let t = lua.create_table_with_capacity(0, 5)?;
        t.set("width", width)?;
        t.set("height", height)?;
        t.set("pwidth", pwidth)?;
        t.set("pheight", pheight)?;
        t.set("name", name)?;
        Ok(t)
    })
}

pub(super) fn register(lua: &Lua, core: &Table) -> Result<()> {
    // Window
    core.set(
        "InitWindow",
        lua.create_function(|lua, (width, height, title): (i32, i32, String)| {
            let title = c_string(&title, 3)?;
            native::with(lua, |rl| unsafe { rl.InitWindow(width, height, title.as_ptr()) })
        })?,
    )?;
    forward!(lua, core, {
        WindowShouldClose();
        CloseWindow();
        IsWindowReady();
        IsWindowMinimized();
        IsWindowResized();
        IsWindowHidden();
        ToggleFullscreen();
        SetWindowPosition(x: i32, y: i32);
        SetWindowMinSize(width: i32, height: i32);
        SetWindowSize(width: i32, height: i32);
    });
    core.set(
        "UnhideWindow",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { rl.ClearWindowState(ffi::FLAG_WINDOW_HIDDEN) })
        })?,
    )?;
    core.set(
        "HideWindow",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { rl.SetWindowState(ffi::FLAG_WINDOW_HIDDEN) })
        })?,
    )?;
    core.set(
        "SetWindowIcon",
        lua.create_function(|lua, image: UserDataRef<Image>| {
            let raw = image.raw()?;
            native::with(lua, |rl| unsafe { rl.SetWindowIcon(raw) })
        })?,
    )?;
    core.set(
        "SetWindowTitle",
        lua.create_function(|lua, title: String| {
            let title = c_string(&title, 1)?;
            native::with(lua, |rl| unsafe { rl.SetWindowTitle(title.as_ptr()) })
        })?,
    )?;
    core.set(
        "SetWindowMonitor",
        lua.create_function(|lua, monitor: i32| {
            native::with(lua, |rl| unsafe { rl.SetWindowMonitor(native_index(monitor)) })
        })?,
    )?;
    core.set(
        "GetWindowHandle",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { rl.GetWindowHandle() }).map(LightUserData)
        })?,
    )?;

    // Screen and monitors
    forward!(lua, core, {
        GetScreenWidth();
        GetScreenHeight();
        GetMonitorCount();
    });
    core.set(
        "GetScreenDimensions",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { Ok((rl.GetScreenWidth()?, rl.GetScreenHeight()?)) })
        })?,
    )?;
    core.set(
        "GetMonitorWidth",
        lua.create_function(|lua, monitor: i32| {
            native::with(lua, |rl| unsafe { rl.GetMonitorWidth(native_index(monitor)) })
        })?,
    )?;
    core.set(
        "GetMonitorHeight",
        lua.create_function(|lua, monitor: i32| {
            native::with(lua, |rl| unsafe { rl.GetMonitorHeight(native_index(monitor)) })
        })?,
    )?;
    core.set(
        "GetMonitorDimensions",
        lua.create_function(|lua, monitor: i32| {
            let index = native_index(monitor);
            native::with(lua, |rl| unsafe {
                Ok((rl.GetMonitorWidth(index)?, rl.GetMonitorHeight(index)?))
            })
        })?,
    )?;
    core.set(
        "GetMonitorPhysicalWidth",
        lua.create_function(|lua, monitor: i32| {
            native::with(lua, |rl| unsafe { rl.GetMonitorPhysicalWidth(native_index(monitor)) })
        })?,
    )?;
    core.set(
        "GetMonitorPhysicalHeight",
        lua.create_function(|lua, monitor: i32| {
            native::with(lua, |rl| unsafe { rl.GetMonitorPhysicalHeight(native_index(monitor)) })
        })?,
    )?;
    core.set(
        "GetMonitorPhysicalDimensions",
        lua.create_function(|lua, monitor: i32| {
            let index = native_index(monitor);
            native::with(lua, |rl| unsafe {
                Ok((rl.GetMonitorPhysicalWidth(index)?, rl.GetMonitorPhysicalHeight(index)?))
            })
        })?,
    )?;
    core.set(
        "GetMonitorName",
        lua.create_function(|lua, monitor: i32| {
            native::with(lua, |rl| unsafe { Ok(from_c_str(rl.GetMonitorName(native_index(monitor))?)) })
        })?,
    )?;
    core.set(
        "GetMonitors",
        lua.create_function(|lua, ()| {
            let count = native::with(lua, |rl| unsafe { rl.GetMonitorCount() })?;
            let monitors = (0..count).map(|i| monitor_info(lua, i)).collect::<Result<Vec<_>>>()?;
            lua.create_sequence_from(monitors)
        })?,
    )?;
    core.set(
        "GetWindowPosition",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { rl.GetWindowPosition() }).map(Vector2::from)
        })?,
    )?;

    // Clipboard and cursor
    core.set(
        "GetClipboardText",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { Ok(from_c_str(rl.GetClipboardText()?)) })
        })?,
    )?;
    core.set(
        "SetClipboardText",
        lua.create_function(|lua, text: String| {
            let text = c_string(&text, 1)?;
            native::with(lua, |rl| unsafe { rl.SetClipboardText(text.as_ptr()) })
        })?,
    )?;
    forward!(lua, core, {
        ShowCursor();
        HideCursor();
        IsCursorHidden();
        EnableCursor();
        DisableCursor();
    });

    // Drawing modes
    forward!(lua, core, {
        ClearBackground(color: Color);
        BeginDrawing();
        EndDrawing();
        BeginMode2D(camera: Camera2D);
        EndMode2D();
        BeginMode3D(camera: Camera3D);
        EndMode3D();
        EndTextureMode();
        BeginScissorMode(x: i32, y: i32, width: i32, height: i32);
        EndScissorMode();
    });
    core.set(
        "BeginTextureMode",
        lua.create_function(|lua, target: UserDataRef<RenderTexture>| {
            let raw = target.raw();
            native::with(lua, |rl| unsafe { rl.BeginTextureMode(raw) })
        })?,
    )?;

    // Screen space
    core.set(
        "GetMouseRay",
        lua.create_function(|lua, (position, camera, flag): (Vector2, Camera3D, MultiValue)| {
            let ray = native::with(lua, |rl| unsafe { rl.GetMouseRay(position.into(), camera.into()) })?;
            let ray = Ray::from(ray);
            match Args::new(flag).opt_flag() {
                Some(b'v') => (ray.position, ray.direction).into_lua_multi(lua),
                _ => ray.into_lua_multi(lua),
            }
        })?,
    )?;
    core.set(
        "GetCameraMatrix",
        lua.create_function(|lua, camera: Camera3D| {
            native::with(lua, |rl| unsafe { rl.GetCameraMatrix(camera.into()) }).map(Matrix::from)
        })?,
    )?;
    core.set(
        "GetCameraMatrix2D",
        lua.create_function(|lua, camera: Camera2D| {
            native::with(lua, |rl| unsafe { rl.GetCameraMatrix2D(camera.into()) }).map(Matrix::from)
        })?,
    )?;
    core.set(
        "GetWorldToScreen",
        lua.create_function(|lua, (position, camera): (Vector3, Camera3D)| {
            native::with(lua, |rl| unsafe { rl.GetWorldToScreen(position.into(), camera.into()) })
                .map(Vector2::from)
        })?,
    )?;
    core.set(
        "GetWorldToScreenEx",
        lua.create_function(
            |lua, (position, camera, width, height): (Vector3, Camera3D, i32, i32)| {
                native::with(lua, |rl| unsafe {
                    rl.GetWorldToScreenEx(position.into(), camera.into(), width, height)
                })
                .map(Vector2::from)
            },
        )?,
    )?;
    core.set(
        "GetWorldToScreen2D",
        lua.create_function(|lua, (position, camera): (Vector2, Camera2D)| {
            native::with(lua, |rl| unsafe { rl.GetWorldToScreen2D(position.into(), camera.into()) })
                .map(Vector2::from)
        })?,
    )?;
    core.set(
        "GetScreenToWorld2D",
        lua.create_function(|lua, (position, camera): (Vector2, Camera2D)| {
            native::with(lua, |rl| unsafe { rl.GetScreenToWorld2D(position.into(), camera.into()) })
                .map(Vector2::from)
        })?,
    )?;

    // Timing
    forward!(lua, core, {
        SetTargetFPS(fps: i32);
        GetFPS();
        GetFrameTime();
        GetTime();
    });
    Ok(())
}
