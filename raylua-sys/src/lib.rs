//! Low level bindings to raylib 5.x.
//!
//! Nothing is linked at build time. [`Raylib::open`] loads the shared library and resolves
//! every exported function it knows about; functions missing from the loaded version are
//! reported by [`Error::MissingSymbol`] when called.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]
#![allow(clippy::missing_safety_doc, clippy::too_many_arguments)]

pub use consts::*;
pub use error::{Error, Result};
pub use raylib::{default_search_paths, format_message, Raylib, TraceLogCallback, VaList};
pub use types::*;

pub mod consts;
mod error;
mod raylib;
mod types;
