//! Access to the loaded raylib library from Lua callbacks.

use std::cell::OnceCell;
use std::path::PathBuf;
use std::result::Result as StdResult;
use std::sync::{Arc, OnceLock};

use mlua::{Error, ExternalResult, Lua, Result};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::config::Options;
use crate::trace;
use ffi::Raylib;

/// Per Lua state binding state, stored as app data.
pub(crate) struct Native {
    options: Options,
    library: OnceCell<StdResult<Arc<Raylib>, String>>,
}

impl Native {
    fn new(options: Options) -> Self {
        Native {
            options,
            library: OnceCell::new(),
        }
    }
}

/// Libraries loaded by any Lua state, keyed by the requested path (empty for the default search).
static LIBRARIES: OnceLock<Mutex<FxHashMap<PathBuf, Arc<Raylib>>>> = OnceLock::new();

fn load_shared(options: &Options) -> ffi::Result<Arc<Raylib>> {
    let key = options.library.clone().unwrap_or_default();
    let mut libraries = LIBRARIES.get_or_init(Default::default).lock();
    if let Some(raylib) = libraries.get(&key) {
        return Ok(Arc::clone(raylib));
    }

    let raylib = match &options.library {
        Some(path) => {
            log::debug!("loading raylib from {}", path.display());
            Raylib::open(path)?
        }
        None => {
            let paths = ffi::default_search_paths();
            log::debug!("searching raylib in {paths:?}");
            Raylib::open_first(&paths)?
        }
    };
    log::info!("loaded raylib from {}", raylib.path().display());
    let missing = raylib.missing_functions();
    if !missing.is_empty() {
        log::debug!("raylib does not export {}", missing.join(", "));
    }

    let raylib = Arc::new(raylib);
    libraries.insert(key, Arc::clone(&raylib));
    Ok(raylib)
}

fn load(options: &Options) -> StdResult<Arc<Raylib>, String> {
    let raylib = load_shared(options).map_err(|err| {
        log::warn!("raylib is not available: {err}");
        err.to_string()
    })?;
    unsafe {
        if let Err(err) = raylib.SetConfigFlags(options.config_flags) {
            log::debug!("{err}");
        }
    }
    trace::install(&raylib);
    Ok(raylib)
}

/// Configures the binding for `lua`. The library itself is loaded on first use.
pub(crate) fn init(lua: &Lua, options: &Options) {
    lua.set_app_data(Native::new(options.clone()));
}

fn ensure_init(lua: &Lua) {
    if lua.app_data_ref::<Native>().is_none() {
        init(lua, &Options::from_env());
    }
}

/// The raylib library used by `lua`, loading it if needed.
pub(crate) fn library(lua: &Lua) -> Result<Arc<Raylib>> {
    ensure_init(lua);
    let native = lua
        .app_data_ref::<Native>()
        .ok_or_else(|| Error::runtime("raylib is not available: binding is not initialized"))?;
    match native.library.get_or_init(|| load(&native.options)) {
        Ok(raylib) => Ok(Arc::clone(raylib)),
        Err(reason) => Err(Error::runtime(format!("raylib is not available: {reason}"))),
    }
}

/// Whether raylib could be loaded for `lua`.
pub(crate) fn is_available(lua: &Lua) -> bool {
    library(lua).is_ok()
}

/// Runs `f` with the loaded library.
pub(crate) fn with<R>(lua: &Lua, f: impl FnOnce(&Raylib) -> ffi::Result<R>) -> Result<R> {
    let raylib = library(lua)?;
    f(&raylib).into_lua_err()
}

/// Options the binding was registered with.
pub(crate) fn options(lua: &Lua) -> Options {
    ensure_init(lua);
    lua.app_data_ref::<Native>()
        .map(|native| native.options.clone())
        .unwrap_or_default()
}
