use mlua::{AnyUserData, Error, IntoLuaMulti, Lua, MultiValue, Result, Table, Value, Variadic};

use super::{native_index, vector2_or_numbers};
use crate::args::{from_c_str, Args};
use crate::classes::Camera3D;
use crate::enums;
use crate::math::Vector2;
use crate::native;

fn mouse_button(value: &Value) -> Result<i32> {
    enums::mouse_buttons()
        .resolve(value, 1)?
        .ok_or_else(|| Error::runtime("bad argument #1: unknown mouse button"))
}

fn gesture(value: &Value) -> Result<u32> {
    match enums::gestures().resolve(value, 1)? {
        Some(flag) => Ok(flag as u32),
        None => Err(Error::runtime("bad argument #1: unknown gesture")),
    }
}

/// Reads `(Vector2)` or `(x, y)`.
fn point(args: MultiValue) -> Result<Vector2> {
    let mut args = Args::new(args);
    if let Some(v) = args.opt_class::<Vector2>() {
        return Ok(v);
    }
    Ok(Vector2::new(args.number()?, args.number()?))
}

macro_rules! key_functions {
    ($lua:expr, $table:expr, [$($name:ident),*]) => {
        $(
            $table.set(
                stringify!($name),
                $lua.create_function(|lua, key: Value| {
                    let key = enums::key(&key, 1)?;
                    native::with(lua, |rl| unsafe { rl.$name(key) })
                })?,
            )?;
        )*
    };
}

macro_rules! mouse_button_functions {
    ($lua:expr, $table:expr, [$($name:ident),*]) => {
        $(
            $table.set(
                stringify!($name),
                $lua.create_function(|lua, button: Value| {
                    let button = mouse_button(&button)?;
                    native::with(lua, |rl| unsafe { rl.$name(button) })
                })?,
            )?;
        )*
    };
}

macro_rules! gamepad_button_functions {
    ($lua:expr, $table:expr, [$($name:ident),*]) => {
        $(
            $table.set(
                stringify!($name),
                $lua.create_function(|lua, (gamepad, button): (i32, i32)| {
                    native::with(lua, |rl| unsafe { rl.$name(native_index(gamepad), button) })
                })?,
            )?;
        )*
    };
}

pub(super) fn register(lua: &Lua, core: &Table) -> Result<()> {
    // Keyboard
    key_functions!(lua, core, [IsKeyPressed, IsKeyDown, IsKeyReleased, IsKeyUp, SetExitKey]);
    core.set(
        "GetKeyPressed",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe {
                let mut keys = Variadic::new();
                loop {
                    match rl.GetKeyPressed()? {
                        0 => break,
                        key => keys.push(key),
                    }
                }
                Ok(keys)
            })
        })?,
    )?;

    // Gamepads
    core.set(
        "IsGamepadAvailable",
        lua.create_function(|lua, gamepad: i32| {
            native::with(lua, |rl| unsafe { rl.IsGamepadAvailable(native_index(gamepad)) })
        })?,
    )?;
    core.set(
        "GetGamepadName",
        lua.create_function(|lua, gamepad: i32| {
            native::with(lua, |rl| unsafe { Ok(from_c_str(rl.GetGamepadName(native_index(gamepad))?)) })
        })?,
    )?;
    core.set(
        "IsGamepadName",
        lua.create_function(|lua, (gamepad, name): (i32, String)| {
            let actual =
                native::with(lua, |rl| unsafe { Ok(from_c_str(rl.GetGamepadName(native_index(gamepad))?)) })?;
            Ok(actual.as_deref() == Some(name.as_str()))
        })?,
    )?;
    gamepad_button_functions!(lua, core, [
        IsGamepadButtonPressed,
        IsGamepadButtonDown,
        IsGamepadButtonReleased,
        IsGamepadButtonUp
    ]);
    forward!(lua, core, {
        GetGamepadButtonPressed();
    });
    core.set(
        "GetGamepadAxisCount",
        lua.create_function(|lua, gamepad: i32| {
            native::with(lua, |rl| unsafe { rl.GetGamepadAxisCount(native_index(gamepad)) })
        })?,
    )?;
    core.set(
        "GetGamepadAxisMovement",
        lua.create_function(|lua, (gamepad, axis): (i32, i32)| {
            native::with(lua, |rl| unsafe { rl.GetGamepadAxisMovement(native_index(gamepad), axis) })
        })?,
    )?;

    // Mouse
    mouse_button_functions!(lua, core, [
        IsMouseButtonPressed,
        IsMouseButtonDown,
        IsMouseButtonReleased,
        IsMouseButtonUp
    ]);
    forward!(lua, core, {
        GetMouseX();
        GetMouseY();
        GetMouseWheelMove();
    });
    core.set(
        "GetMousePosition",
        lua.create_function(|lua, flag: MultiValue| {
            let v = native::with(lua, |rl| unsafe { rl.GetMousePosition() })?;
            vector2_or_numbers(lua, v.into(), Args::new(flag).opt_flag())
        })?,
    )?;
    core.set(
        "SetMousePosition",
        lua.create_function(|lua, args: MultiValue| {
            let v = point(args)?;
            native::with(lua, |rl| unsafe { rl.SetMousePosition(v.x as i32, v.y as i32) })
        })?,
    )?;
    core.set(
        "SetMouseOffset",
        lua.create_function(|lua, args: MultiValue| {
            let v = point(args)?;
            native::with(lua, |rl| unsafe { rl.SetMouseOffset(v.x as i32, v.y as i32) })
        })?,
    )?;
    core.set(
        "SetMouseScale",
        lua.create_function(|lua, args: MultiValue| {
            let v = point(args)?;
            native::with(lua, |rl| unsafe { rl.SetMouseScale(v.x, v.y) })
        })?,
    )?;

    // Touch
    forward!(lua, core, {
        GetTouchX();
        GetTouchY();
    });
    core.set(
        "GetTouch",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { Ok((rl.GetTouchX()?, rl.GetTouchY()?)) })
        })?,
    )?;
    core.set(
        "GetTouchPosition",
        lua.create_function(|lua, (index, flag): (i32, MultiValue)| {
            let v = native::with(lua, |rl| unsafe { rl.GetTouchPosition(native_index(index)) })?;
            vector2_or_numbers(lua, v.into(), Args::new(flag).opt_flag())
        })?,
    )?;
    core.set(
        "GetTouches",
        lua.create_function(|lua, flag: MultiValue| {
            let points = native::with(lua, |rl| unsafe {
                let count = rl.GetTouchPointCount()?;
                (0..count)
                    .map(|i| rl.GetTouchPosition(i).map(Vector2::from))
                    .collect::<ffi::Result<Vec<_>>>()
            })?;
            let touches = lua.create_table_with_capacity(points.len(), 0)?;
            let as_numbers = Args::new(flag).opt_flag() == Some(b'n');
            for v in points {
                if as_numbers {
                    touches.raw_push(lua.create_sequence_from([v.x, v.y])?)?;
                } else {
                    touches.raw_push(v)?;
                }
            }
            Ok(touches)
        })?,
    )?;
    core.set(
        "GetTouchPointsCount",
        lua.create_function(|lua, ()| native::with(lua, |rl| unsafe { rl.GetTouchPointCount() }))?,
    )?;

    // Gestures
    core.set(
        "SetGesturesEnabled",
        lua.create_function(|lua, names: Variadic<Value>| {
            let flags = enums::flags(enums::gestures(), &names, 1)?;
            native::with(lua, |rl| unsafe { rl.SetGesturesEnabled(flags) })
        })?,
    )?;
    core.set(
        "IsGestureDetected",
        lua.create_function(|lua, name: Value| {
            let gesture = gesture(&name)?;
            native::with(lua, |rl| unsafe { rl.IsGestureDetected(gesture) })
        })?,
    )?;
    core.set(
        "GetGestureDetected",
        lua.create_function(|lua, flag: MultiValue| {
            let as_numbers = Args::new(flag).opt_flag() == Some(b'n');
            let detected = native::with(lua, |rl| unsafe { rl.GetGestureDetected() })?;
            let name = enums::gestures().name_of(detected).unwrap_or("NONE");

            let (vector, angle) = match detected {
                ffi::GESTURE_HOLD => {
                    let duration = native::with(lua, |rl| unsafe { rl.GetGestureHoldDuration() })?;
                    return (name, duration).into_lua_multi(lua);
                }
                ffi::GESTURE_DRAG => native::with(lua, |rl| unsafe {
                    Ok((rl.GetGestureDragVector()?, rl.GetGestureDragAngle()?))
                })?,
                ffi::GESTURE_PINCH_IN | ffi::GESTURE_PINCH_OUT => native::with(lua, |rl| unsafe {
                    Ok((rl.GetGesturePinchVector()?, rl.GetGesturePinchAngle()?))
                })?,
                _ => return name.into_lua_multi(lua),
            };
            if as_numbers {
                (name, vector.x, vector.y, angle).into_lua_multi(lua)
            } else {
                (name, Vector2::from(vector), angle).into_lua_multi(lua)
            }
        })?,
    )?;
    forward!(lua, core, {
        GetGestureHoldDuration();
        GetGestureDragAngle();
        GetGesturePinchAngle();
    });
    core.set(
        "GetGestureDragVector",
        lua.create_function(|lua, flag: MultiValue| {
            let v = native::with(lua, |rl| unsafe { rl.GetGestureDragVector() })?;
            vector2_or_numbers(lua, v.into(), Args::new(flag).opt_flag())
        })?,
    )?;
    core.set(
        "GetGesturePinchVector",
        lua.create_function(|lua, flag: MultiValue| {
            let v = native::with(lua, |rl| unsafe { rl.GetGesturePinchVector() })?;
            vector2_or_numbers(lua, v.into(), Args::new(flag).opt_flag())
        })?,
    )?;

    // Camera
    core.set(
        "SetCameraMode",
        lua.create_function(|_, (camera, mode): (AnyUserData, Value)| {
            let mode = enums::camera_modes()
                .resolve(&mode, 2)?
                .ok_or_else(|| Error::runtime("bad argument #2: unknown camera mode"))?;
            camera.borrow_mut::<Camera3D>()?.mode = mode;
            Ok(())
        })?,
    )?;
    core.set(
        "UpdateCamera",
        lua.create_function(|lua, camera: AnyUserData| {
            let mut camera = camera.borrow_mut::<Camera3D>()?;
            let mut raw = ffi::Camera3D::from(*camera);
            let mode = camera.mode;
            native::with(lua, |rl| unsafe { rl.UpdateCamera(&mut raw, mode) })?;
            camera.update_from(&raw);
            Ok(())
        })?,
    )?;

    Ok(())
}
