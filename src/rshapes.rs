//! `rl.shapes`: basic shape drawing and collision checks.
//!
//! Collision checks are computed in Rust and work without raylib.

use mlua::{Lua, Result, Table};

use crate::color::Color;
use crate::math::{check_collision_circles, check_collision_point_triangle, Rectangle, Vector2};

pub(crate) fn create(lua: &Lua) -> Result<Table> {
    let shapes = lua.create_table()?;

    forward!(lua, shapes, {
        DrawPixel(x: i32, y: i32, color: Color);
        DrawPixelV(position: Vector2, color: Color);
        DrawLine(start_x: i32, start_y: i32, end_x: i32, end_y: i32, color: Color);
        DrawLineV(start: Vector2, end: Vector2, color: Color);
        DrawLineEx(start: Vector2, end: Vector2, thick: f32, color: Color);
        DrawCircle(center_x: i32, center_y: i32, radius: f32, color: Color);
        DrawCircleV(center: Vector2, radius: f32, color: Color);
        DrawCircleLines(center_x: i32, center_y: i32, radius: f32, color: Color);
        DrawRectangle(x: i32, y: i32, width: i32, height: i32, color: Color);
        DrawRectangleV(position: Vector2, size: Vector2, color: Color);
        DrawRectangleRec(rec: Rectangle, color: Color);
        DrawRectanglePro(rec: Rectangle, origin: Vector2, rotation: f32, color: Color);
        DrawRectangleLines(x: i32, y: i32, width: i32, height: i32, color: Color);
        DrawRectangleLinesEx(rec: Rectangle, line_thick: f32, color: Color);
        DrawTriangle(v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
        DrawTriangleLines(v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
        DrawPoly(center: Vector2, sides: i32, radius: f32, rotation: f32, color: Color);
    });

    shapes.set(
        "CheckCollisionRecs",
        lua.create_function(|_, (r1, r2): (Rectangle, Rectangle)| Ok(r1.check_collision(&r2)))?,
    )?;
    shapes.set(
        "CheckCollisionCircles",
        lua.create_function(|_, (c1, r1, c2, r2): (Vector2, f32, Vector2, f32)| {
            Ok(check_collision_circles(c1, r1, c2, r2))
        })?,
    )?;
    shapes.set(
        "CheckCollisionCircleRec",
        lua.create_function(|_, (center, radius, rec): (Vector2, f32, Rectangle)| {
            Ok(rec.check_collision_circle(center, radius))
        })?,
    )?;
    shapes.set(
        "CheckCollisionPointRec",
        lua.create_function(|_, (point, rec): (Vector2, Rectangle)| Ok(rec.contains_point(point)))?,
    )?;
    shapes.set(
        "CheckCollisionPointCircle",
        lua.create_function(|_, (point, center, radius): (Vector2, Vector2, f32)| {
            Ok(check_collision_circles(point, 0.0, center, radius))
        })?,
    )?;
    shapes.set(
        "CheckCollisionPointTriangle",
        lua.create_function(|_, (point, p1, p2, p3): (Vector2, Vector2, Vector2, Vector2)| {
            Ok(check_collision_point_triangle(point, p1, p2, p3))
        })?,
    )?;
    shapes.set(
        "GetCollisionRec",
        lua.create_function(|_, (r1, r2): (Rectangle, Rectangle)| Ok(r1.collision(&r2)))?,
    )?;

    Ok(shapes)
}
