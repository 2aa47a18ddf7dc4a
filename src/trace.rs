//! Forwarding of raylib's trace log output.
//!
//! raylib reports through a single process-wide C callback. The binding installs
//! [`forward`] once the library is loaded; messages go to the Lua function set with
//! `SetTraceLogCallback` on the current thread, or to the `log` facade otherwise.

use std::cell::RefCell;
use std::os::raw::{c_char, c_int};
use std::panic::{self, AssertUnwindSafe};

use mlua::Function;

use ffi::{Raylib, VaList};

thread_local! {
    static CALLBACK: RefCell<Option<Function>> = const { RefCell::new(None) };
}

/// Name of a raylib log level as exposed in `rl.elog`.
pub(crate) fn level_name(level: c_int) -> &'static str {
    match level {
        ffi::LOG_ALL => "ALL",
        ffi::LOG_TRACE => "TRACE",
        ffi::LOG_DEBUG => "DEBUG",
        ffi::LOG_INFO => "INFO",
        ffi::LOG_WARNING => "WARNING",
        ffi::LOG_ERROR => "ERROR",
        ffi::LOG_FATAL => "FATAL",
        _ => "NONE",
    }
}

fn log_level(level: c_int) -> log::Level {
    match level {
        ffi::LOG_TRACE | ffi::LOG_ALL => log::Level::Trace,
        ffi::LOG_DEBUG => log::Level::Debug,
        ffi::LOG_INFO => log::Level::Info,
        ffi::LOG_WARNING => log::Level::Warn,
        _ => log::Level::Error,
    }
}

/// Replaces the Lua trace log callback of the current thread; `None` restores `log` output.
pub(crate) fn set_callback(callback: Option<Function>) {
    CALLBACK.with(|cell| *cell.borrow_mut() = callback);
}

#[cfg(test)]
fn has_callback() -> bool {
    CALLBACK.with(|cell| cell.borrow().is_some())
}

/// Routes one formatted message.
pub(crate) fn dispatch(level: c_int, message: &str) {
    // Cloned out so the callback may replace itself
    let callback = CALLBACK
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten();

    match callback {
        Some(func) => {
            if let Err(err) = func.call::<()>((level_name(level), message)) {
                log::warn!("trace log callback failed: {err}");
            }
        }
        None => log::log!(target: "raylua::trace", log_level(level), "{message}"),
    }
}

unsafe extern "C" fn forward(level: c_int, format: *const c_char, args: VaList) {
    let message = ffi::format_message(format, args);
    // Unwinding into raylib is undefined behavior
    let _ = panic::catch_unwind(AssertUnwindSafe(|| dispatch(level, &message)));
}

/// Points raylib's trace output at [`forward`].
pub(crate) fn install(raylib: &Raylib) {
    if let Err(err) = unsafe { raylib.SetTraceLogCallback(Some(forward)) } {
        log::debug!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use mlua::{Lua, Result};

    use super::*;

    #[test]
    fn test_dispatch_to_lua() -> Result<()> {
        let lua = Lua::new();
        lua.globals().set("messages", lua.create_table()?)?;
        let func = lua
            .load("return function(level, text) table.insert(messages, level .. ':' .. text) end")
            .eval::<Function>()?;

        set_callback(Some(func));
        assert!(has_callback());
        dispatch(ffi::LOG_WARNING, "low memory");
        set_callback(None);
        dispatch(ffi::LOG_INFO, "not recorded");

        let messages = lua.globals().get::<mlua::Table>("messages")?;
        assert_eq!(messages.raw_len(), 1);
        assert_eq!(messages.get::<String>(1)?, "WARNING:low memory");
        Ok(())
    }

    #[test]
    fn test_callback_error_is_swallowed() -> Result<()> {
        let lua = Lua::new();
        let func = lua.load("return function() error('boom') end").eval::<Function>()?;
        set_callback(Some(func));
        dispatch(ffi::LOG_ERROR, "ignored");
        set_callback(None);
        Ok(())
    }
}
