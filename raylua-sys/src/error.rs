use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;
use std::result::Result as StdResult;

/// Error type returned when raylib cannot be loaded or called.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    /// The shared library at `path` exists but could not be opened.
    Load {
        /// Path passed to the dynamic loader.
        path: PathBuf,
        /// Message reported by the dynamic loader.
        message: String,
    },
    /// None of the candidate locations contained a loadable raylib.
    NotFound(Vec<PathBuf>),
    /// The loaded raylib does not export this function.
    MissingSymbol(&'static str),
}

/// A specialized `Result` type used by `raylua-sys`.
pub type Result<T> = StdResult<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Load { path, message } => {
                write!(fmt, "cannot load '{}': {message}", path.display())
            }
            Error::NotFound(paths) => {
                write!(fmt, "raylib shared library not found (tried ")?;
                for (i, path) in paths.iter().enumerate() {
                    if i > 0 {
                        write!(fmt, ", ")?;
                    }
                    write!(fmt, "'{}'", path.display())?;
                }
                write!(fmt, ")")
            }
            Error::MissingSymbol(name) => {
                write!(fmt, "raylib function '{name}' is not available")
            }
        }
    }
}

impl StdError for Error {}
