use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use mlua::prelude::*;
use raylua::math::{Matrix, Vector3, Vector4};
use raylua::Options;

fn collect_gc_twice(lua: &Lua) {
    lua.gc_collect().unwrap();
    lua.gc_collect().unwrap();
}

fn setup() -> Lua {
    let lua = Lua::new();
    let rl = raylua::register(&lua, &Options::new().library("/nonexistent/libraylib.so")).unwrap();
    lua.globals().set("rl", rl).unwrap();
    lua
}

fn matrix_invert(c: &mut Criterion) {
    let m = Matrix::rotate_xyz(Vector3::new(0.3, 0.2, 0.1)) * Matrix::translate(1.0, 2.0, 3.0);

    c.bench_function("matrix [invert]", |b| {
        b.iter(|| black_box(black_box(m).invert()));
    });
}

fn matrix_multiply(c: &mut Criterion) {
    let a = Matrix::rotate(Vector3::new(0.0, 1.0, 0.0), 0.5);
    let b = Matrix::look_at(
        Vector3::new(0.0, 10.0, 10.0),
        Vector3::ZERO,
        Vector3::new(0.0, 1.0, 0.0),
    );

    c.bench_function("matrix [multiply]", |bencher| {
        bencher.iter(|| black_box(black_box(a) * black_box(b)));
    });
}

fn quaternion_slerp(c: &mut Criterion) {
    let from = Vector4::IDENTITY;
    let to = Vector4::from_axis_angle(Vector3::new(0.0, 0.0, 1.0), 1.5);

    c.bench_function("quaternion [slerp]", |b| {
        b.iter(|| black_box(black_box(from).slerp(black_box(to), 0.5)));
    });
}

fn vector2_create(c: &mut Criterion) {
    let lua = setup();
    let f = lua.load("function() return rl.Vector2(1, 2) end").eval::<LuaFunction>().unwrap();

    c.bench_function("Vector2 [create]", |b| {
        b.iter_batched(
            || collect_gc_twice(&lua),
            |_| {
                f.call::<()>(()).unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

fn vector2_arithmetic(c: &mut Criterion) {
    let lua = setup();
    let f = lua
        .load(
            r#"
            function()
                local v = rl.Vector2(3, 4)
                for _ = 1, 10 do
                    v:add(rl.Vector2(1)):scale(0.5)
                end
                return v:length()
            end
        "#,
        )
        .eval::<LuaFunction>()
        .unwrap();

    c.bench_function("Vector2 [in-place arithmetic]", |b| {
        b.iter_batched(
            || collect_gc_twice(&lua),
            |_| {
                f.call::<f32>(()).unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

fn color_parse(c: &mut Criterion) {
    let lua = setup();
    let f = lua
        .load("function() return rl.Color('raywhite'), rl.Color('skyblue'), rl.Color(1, 2, 3) end")
        .eval::<LuaFunction>()
        .unwrap();

    c.bench_function("Color [parse]", |b| {
        b.iter_batched(
            || collect_gc_twice(&lua),
            |_| {
                f.call::<LuaMultiValue>(()).unwrap();
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(300)
        .measurement_time(Duration::from_secs(5))
        .noise_threshold(0.02);
    targets =
        matrix_invert,
        matrix_multiply,
        quaternion_slerp,

        vector2_create,
        vector2_arithmetic,
        color_parse,
}

criterion_main!(benches);
