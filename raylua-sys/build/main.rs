use std::env;

// raylib is opened at runtime, so nothing is linked here. A library directory reported by
// pkg-config is only remembered as an extra search location.
fn main() {
    println!("cargo:rerun-if-env-changed=RAYLIB_LIB");
    println!("cargo:rerun-if-env-changed=RAYLUA_NO_PKG_CONFIG");

    if env::var_os("RAYLUA_NO_PKG_CONFIG").is_some() {
        return;
    }

    let raylib = pkg_config::Config::new()
        .cargo_metadata(false)
        .env_metadata(false)
        .probe("raylib");

    if let Ok(raylib) = raylib {
        if let Some(dir) = raylib.link_paths.first() {
            println!("cargo:rustc-env=RAYLUA_PKG_LIBDIR={}", dir.display());
        }
    }
}
