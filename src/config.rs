use std::env;
use std::path::PathBuf;

/// Environment variable naming the raylib shared library to load.
pub const LIBRARY_ENV: &str = "RAYLIB_LIB";

/// Environment variable naming the storage file used by `StorageSaveValue`/`StorageLoadValue`.
pub const STORAGE_ENV: &str = "RAYLUA_STORAGE";

/// Controls how the binding finds raylib and where it keeps its state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct Options {
    /// Explicit path of the raylib shared library.
    ///
    /// When unset, the library is searched in the directory reported by `pkg-config` at
    /// build time and then under the platform's default names.
    ///
    /// Default: **None**
    pub library: Option<PathBuf>,

    /// File backing `StorageSaveValue` and `StorageLoadValue`.
    ///
    /// Default: **storage.data**
    pub storage_path: PathBuf,

    /// Config flags passed to `SetConfigFlags` once the library is loaded.
    ///
    /// Default: **FLAG_MSAA_4X_HINT**
    pub config_flags: u32,
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}

impl Options {
    /// Returns a new instance of `Options` with default parameters.
    pub fn new() -> Self {
        Options {
            library: None,
            storage_path: PathBuf::from("storage.data"),
            config_flags: ffi::FLAG_MSAA_4X_HINT,
        }
    }

    /// Default options overridden by the `RAYLIB_LIB` and `RAYLUA_STORAGE` environment variables.
    pub fn from_env() -> Self {
        let mut options = Options::new();
        if let Some(path) = env::var_os(LIBRARY_ENV).filter(|p| !p.is_empty()) {
            options.library = Some(PathBuf::from(path));
        }
        if let Some(path) = env::var_os(STORAGE_ENV).filter(|p| !p.is_empty()) {
            options.storage_path = PathBuf::from(path);
        }
        options
    }

    /// Sets [`library`] option.
    ///
    /// [`library`]: #structfield.library
    #[must_use]
    pub fn library(mut self, path: impl Into<PathBuf>) -> Self {
        self.library = Some(path.into());
        self
    }

    /// Sets [`storage_path`] option.
    ///
    /// [`storage_path`]: #structfield.storage_path
    #[must_use]
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Sets [`config_flags`] option.
    ///
    /// [`config_flags`]: #structfield.config_flags
    #[must_use]
    pub const fn config_flags(mut self, flags: u32) -> Self {
        self.config_flags = flags;
        self
    }
}
