use mlua::{Lua, Result, Value};
use raylua::math::{Matrix, Vector2, Vector3};
use raylua::{Color, Options};

fn setup() -> Result<Lua> {
    let lua = Lua::new();
    let rl = raylua::register(&lua, &Options::new().library("/nonexistent/libraylib.so"))?;
    lua.globals().set("rl", rl)?;
    Ok(lua)
}

#[test]
fn test_vector2() -> Result<()> {
    let lua = setup()?;

    let v: Vector2 = lua.load("rl.Vector2(3)").eval()?;
    assert_eq!(v, Vector2::new(3.0, 3.0));

    let (x, y): (f32, f32) = lua.load("return rl.Vector2{1, 2}:get()").eval()?;
    assert_eq!((x, y), (1.0, 2.0));

    lua.load(
        r#"
        local v = rl.Vector2(3, 4)
        assert(v.class == "Vector2")
        assert(#v == 5 and v:length() == 5)
        assert(v:clone():normalize():length() > 0.999)

        local w = v:add(rl.Vector2(1)):scale(2)
        assert(rawequal(v, w), "in-place methods return the receiver")
        assert(v.x == 8 and v.y == 10)

        local sum = v + rl.Vector2(1, 1)
        assert(sum.x == 9 and not rawequal(sum, v))
        assert((v * 2).x == 16 and (2 * v).y == 20)
        assert((v / rl.Vector2(2, 5)).y == 2)
        assert((rl.Vector2(2, 3) ^ 2).y == 9)
        assert((-v).x == -8)
        assert(rl.Vector2(1, 2) == rl.Vector2(1, 2))

        v.x = 0
        assert(v.x == 0)
        v:set(nil, 1)
        assert(v.x == 0 and v.y == 1)

        local t = rl.Vector2(5, 6):get('t')
        assert(type(t) == "table" and t[1] == 5 and t[2] == 6)
        assert(tostring(rl.Vector2(1, 2)) == "Vector2[1.000000, 2.000000]")
    "#,
    )
    .exec()?;

    let angle: f32 = lua.load("return rl.Vector2(0, 0):angle(rl.Vector2(0, 1))").eval()?;
    assert!((angle - 90.0).abs() < 1e-4);
    let angle: f32 = lua.load("return rl.Vector2(0, 0):angle(rl.Vector2(0, -1))").eval()?;
    assert!((angle - 270.0).abs() < 1e-4);

    Ok(())
}

#[test]
fn test_vector3() -> Result<()> {
    let lua = setup()?;

    let cross: Vector3 = lua
        .load("return rl.Vector3(1, 0, 0):crossProduct(rl.Vector3(0, 1, 0))")
        .eval()?;
    assert_eq!(cross, Vector3::new(0.0, 0.0, 1.0));

    lua.load(
        r#"
        local zero = rl.Vector3()
        assert(zero:normalize() == rl.Vector3(0))

        local a, b = rl.Vector3(1, 1, 0), rl.Vector3(0, 2, 0)
        local ra, rb = a:orthoNormalize(b)
        assert(rawequal(ra, a) and rawequal(rb, b))
        assert(math.abs(a:length() - 1) < 1e-5 and math.abs(b:length() - 1) < 1e-5)
        assert(math.abs(a:dotProduct(b)) < 1e-5)

        local m = rl.Vector3(1, 5, 3):min(rl.Vector3(2, 4, 3))
        assert(m.x == 1 and m.y == 4 and m.z == 3)

        local moved = rl.Vector3(1, 2, 3):transform(rl.Matrix():translate(1, 1, 1))
        assert(moved == rl.Vector3(2, 3, 4))
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_shared_vector_methods() -> Result<()> {
    let lua = setup()?;

    lua.load(
        r#"
        for _, new in ipairs({rl.Vector2, rl.Vector3, rl.Vector4}) do
            local v = new(2)
            assert(v:subtract(new(1)) == new(1))
            assert(v:multiplyV(new(3)):divideV(new(3)) == new(1))
            assert(v:lerp(new(3), 0.5) == new(2))
            assert(new(1):dotProduct(new(2)) == 2 * new(1):dotProduct(new(1)))
            assert(new(0):distance(new(0)) == 0)
            assert(new(1) - new(1) == new(0))
        end
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_quaternion() -> Result<()> {
    let lua = setup()?;

    lua.load(
        r#"
        local q = rl.Vector4(1, 2, 3, 4):identity()
        assert(q.x == 0 and q.y == 0 and q.z == 0 and q.w == 1)

        local r = rl.Vector4():qFromAxisAngle(rl.Vector3(0, 0, 1), math.pi / 2)
        local axis, angle = r:qToAxisAngle()
        assert(math.abs(axis.z - 1) < 1e-5 and math.abs(angle - math.pi / 2) < 1e-5)

        local roll, pitch, yaw = rl.Vector4():qFromEuler(0, 0, math.pi / 2):qToEuler()
        assert(math.abs(yaw - 90) < 1e-3 and math.abs(roll) < 1e-3 and math.abs(pitch) < 1e-3)

        local half = rl.Vector4():identity():qSlerp(r, 0.5)
        assert(math.abs(half:length() - 1) < 1e-5)
        assert(rl.classof(r:qToMatrix()) == "Matrix")
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_matrix_invert_round_trip() -> Result<()> {
    let lua = setup()?;

    let (m, twice): (Matrix, Matrix) = lua
        .load(
            r#"
            local m = rl.Matrix():rotateXYZ(rl.Vector3(0.3, 0.2, 0.1))
            local t = rl.Matrix():translate(1, 2, 3)
            m = m * t
            return m:clone(), m:clone():invert():invert()
        "#,
        )
        .eval()?;

    for (a, b) in m.0.iter().zip(twice.0.iter()) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    lua.load(
        r#"
        local m = rl.Matrix(1, 2, 3)
        local c = {m:get()}
        assert(#c == 16 and c[1] == 1 and c[3] == 3 and c[16] == 0)
        assert(rl.Matrix():identity():determinant() == 1)
        assert(rl.Matrix():identity():trace() == 4)
        assert(#rl.Matrix():toFloatV() == 16)
        assert(rl.Matrix():identity() == rl.Matrix():identity():transpose())
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_color() -> Result<()> {
    let lua = setup()?;

    let red: Color = lua.load("rl.Color('red')").eval()?;
    assert_eq!(red, Color::new(230, 41, 55, 255));

    let (r, g, b, a): (u8, u8, u8, u8) = lua.load("return rl.Color(1, 2, 3):get()").eval()?;
    assert_eq!((r, g, b, a), (1, 2, 3, 255));

    lua.load(
        r#"
        local c = rl.Color('red')
        assert(c:toHex() == "e62937ff")
        assert(tostring(c) == "Color[#e62937ff]")
        assert(rl.Color():fromInt(0xff0000ff) == rl.Color(255, 0, 0, 255))
        assert(c.class == "Color")

        local n = rl.Color(255, 0, 0):normalize()
        assert(rl.classof(n) == "Vector4" and n.x == 1 and n.w == 1)
        local t = rl.Color(255, 0, 0):normalize('t')
        assert(t[1] == 1 and t[2] == 0)

        local back = rl.Color():fromHSV(rl.Color(0, 255, 0):toHSV())
        assert(back == rl.Color(0, 255, 0))
        assert(rl.Color('white'):fade(0.5).a == 127)
    "#,
    )
    .exec()?;

    let err = lua.load("rl.Color('nope')").exec().unwrap_err();
    assert!(err.to_string().contains("unknown color 'nope'"));

    Ok(())
}

#[test]
fn test_rectangle() -> Result<()> {
    let lua = setup()?;

    lua.load(
        r#"
        local r = rl.Rectangle(1, 2, 10)
        assert(r.x == 1 and r.y == 2 and r.width == 10 and r.height == 10)

        r:move(rl.Vector2(1, 1)):setDimensions(4, 6)
        local x, y = r:getPosition()
        assert(x == 2 and y == 3)
        local size = r:getDimensions('v')
        assert(size.x == 4 and size.y == 6)

        assert(r:containsPoint(rl.Vector2(3, 4)))
        assert(r:checkCollision(rl.Rectangle{0, 0, 3, 4}))
        local c = r:getCollision(rl.Rectangle{0, 0, 3, 4})
        assert(c == rl.Rectangle(2, 3, 1, 1))
    "#,
    )
    .exec()?;

    let err = lua.load("rl.Rectangle('x')").exec().unwrap_err();
    assert!(err.to_string().contains("Arg#1 number or table expected, got string."));

    let err = lua.load("rl.Rectangle(0):draw('red')").exec().unwrap_err();
    assert!(err.to_string().contains("Arg#1 Color or Vector2 expected, got string"));

    Ok(())
}

#[test]
fn test_cameras() -> Result<()> {
    let lua = setup()?;

    lua.load(
        r#"
        local c2 = rl.Camera2D(rl.Vector2(400, 225))
        assert(c2.zoom == 1 and c2.offset.x == 400)
        c2.rotation = 45
        assert(c2.rotation == 45)

        local c3 = rl.Camera3D{position = rl.Vector3(0, 10, 10), fovy = 60}
        assert(c3.position.y == 10 and c3.fovy == 60)
        assert(c3.up == rl.Vector3(0, 1, 0))
        assert(c3.projection == "PERSPECTIVE" and c3.mode == "CUSTOM")
        c3.projection = "ORTHOGRAPHIC"
        assert(c3.projection == rl.eprojection[rl.eprojection.ORTHOGRAPHIC])

        rl.core.SetCameraMode(c3, "ORBITAL")
        assert(c3.mode == "ORBITAL")

        local ray = rl.Ray(rl.Vector3(1), rl.Vector3(0, 0, -1))
        local p, d = ray:get()
        assert(p.x == 1 and d.z == -1)
    "#,
    )
    .exec()?;

    Ok(())
}

#[test]
fn test_classof() -> Result<()> {
    let lua = setup()?;

    let names: Vec<Option<String>> = lua
        .load(
            r#"
            return {
                rl.classof(rl.Vector2()), rl.classof(rl.Vector3()), rl.classof(rl.Vector4()),
                rl.classof(rl.Matrix()), rl.classof(rl.Color()), rl.classof(rl.Rectangle(0)),
                rl.classof(rl.Camera2D()), rl.classof(rl.Camera3D()), rl.classof(rl.Ray()),
            }
        "#,
        )
        .eval()?;
    let expected = [
        "Vector2", "Vector3", "Vector4", "Matrix", "Color", "Rectangle", "Camera2D", "Camera3D", "Ray",
    ];
    assert_eq!(names, expected.map(|n| Some(n.to_string())));

    let none: Value = lua.load("return rl.classof({})").eval()?;
    assert!(none.is_nil());

    Ok(())
}
