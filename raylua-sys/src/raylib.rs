use std::ffi::CStr;
use std::fmt;
use std::os::raw::{c_char, c_int, c_long, c_uchar, c_uint, c_void};
use std::path::{Path, PathBuf};

use libloading::Library;

use crate::error::{Error, Result};
use crate::types::*;

/// Platform `va_list` as received by a trace log callback.
///
/// On every supported target a `va_list` argument reaches the callee as a pointer.
pub type VaList = *mut c_void;

pub type TraceLogCallback = unsafe extern "C" fn(log_level: c_int, text: *const c_char, args: VaList);

macro_rules! raylib_functions {
    (@ret) => { () };
    (@ret $ret:ty) => { $ret };
    ($(
        fn $name:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
    )*) => {
        struct Functions {
            $( $name: Option<unsafe extern "C" fn($($ty),*) $(-> $ret)?>, )*
        }

        impl Functions {
            unsafe fn resolve(lib: &Library) -> Self {
                Functions {
                    $( $name: symbol(lib, concat!(stringify!($name), "\0")), )*
                }
            }

            fn missing(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$name.is_none() {
                        missing.push(stringify!($name));
                    }
                )*
                missing
            }
        }

        impl Raylib {
            $(
                #[inline]
                pub unsafe fn $name(&self, $($arg: $ty),*) -> Result<raylib_functions!(@ret $($ret)?)> {
                    match self.functions.$name {
                        Some(func) => Ok(func($($arg),*)),
                        None => Err(Error::MissingSymbol(stringify!($name))),
                    }
                }
            )*
        }
    };
}

unsafe fn symbol<T: Copy>(lib: &Library, name: &str) -> Option<T> {
    lib.get::<T>(name.as_bytes()).ok().map(|sym| *sym)
}

raylib_functions! {
    // Window
    fn InitWindow(width: c_int, height: c_int, title: *const c_char);
    fn WindowShouldClose() -> bool;
    fn CloseWindow();
    fn IsWindowReady() -> bool;
    fn IsWindowMinimized() -> bool;
    fn IsWindowResized() -> bool;
    fn IsWindowHidden() -> bool;
    fn SetWindowState(flags: c_uint);
    fn ClearWindowState(flags: c_uint);
    fn ToggleFullscreen();
    fn SetWindowIcon(image: Image);
    fn SetWindowTitle(title: *const c_char);
    fn SetWindowPosition(x: c_int, y: c_int);
    fn SetWindowMonitor(monitor: c_int);
    fn SetWindowMinSize(width: c_int, height: c_int);
    fn SetWindowSize(width: c_int, height: c_int);
    fn GetWindowHandle() -> *mut c_void;
    fn GetScreenWidth() -> c_int;
    fn GetScreenHeight() -> c_int;
    fn GetMonitorCount() -> c_int;
    fn GetMonitorWidth(monitor: c_int) -> c_int;
    fn GetMonitorHeight(monitor: c_int) -> c_int;
    fn GetMonitorPhysicalWidth(monitor: c_int) -> c_int;
    fn GetMonitorPhysicalHeight(monitor: c_int) -> c_int;
    fn GetWindowPosition() -> Vector2;
    fn GetMonitorName(monitor: c_int) -> *const c_char;
    fn SetClipboardText(text: *const c_char);
    fn GetClipboardText() -> *const c_char;

    // Cursor
    fn ShowCursor();
    fn HideCursor();
    fn IsCursorHidden() -> bool;
    fn EnableCursor();
    fn DisableCursor();

    // Drawing
    fn ClearBackground(color: Color);
    fn BeginDrawing();
    fn EndDrawing();
    fn BeginMode2D(camera: Camera2D);
    fn EndMode2D();
    fn BeginMode3D(camera: Camera3D);
    fn EndMode3D();
    fn BeginTextureMode(target: RenderTexture);
    fn EndTextureMode();
    fn BeginScissorMode(x: c_int, y: c_int, width: c_int, height: c_int);
    fn EndScissorMode();

    // Screen-space
    fn GetMouseRay(mouse_position: Vector2, camera: Camera3D) -> Ray;
    fn GetCameraMatrix(camera: Camera3D) -> Matrix;
    fn GetCameraMatrix2D(camera: Camera2D) -> Matrix;
    fn GetWorldToScreen(position: Vector3, camera: Camera3D) -> Vector2;
    fn GetWorldToScreenEx(position: Vector3, camera: Camera3D, width: c_int, height: c_int) -> Vector2;
    fn GetWorldToScreen2D(position: Vector2, camera: Camera2D) -> Vector2;
    fn GetScreenToWorld2D(position: Vector2, camera: Camera2D) -> Vector2;

    // Timing
    fn SetTargetFPS(fps: c_int);
    fn GetFPS() -> c_int;
    fn GetFrameTime() -> f32;
    fn GetTime() -> f64;

    // Misc
    fn SetConfigFlags(flags: c_uint);
    fn SetTraceLogLevel(log_level: c_int);
    fn SetTraceLogCallback(callback: Option<TraceLogCallback>);
    fn TakeScreenshot(file_name: *const c_char);
    fn GetRandomValue(min: c_int, max: c_int) -> c_int;
    fn OpenURL(url: *const c_char);
    fn MemFree(ptr: *mut c_void);

    // Files
    fn FileExists(file_name: *const c_char) -> bool;
    fn DirectoryExists(dir_path: *const c_char) -> bool;
    fn IsFileExtension(file_name: *const c_char, ext: *const c_char) -> bool;
    fn GetFileExtension(file_name: *const c_char) -> *const c_char;
    fn GetFileName(file_path: *const c_char) -> *const c_char;
    fn GetFileNameWithoutExt(file_path: *const c_char) -> *const c_char;
    fn GetDirectoryPath(file_path: *const c_char) -> *const c_char;
    fn GetPrevDirectoryPath(dir_path: *const c_char) -> *const c_char;
    fn GetWorkingDirectory() -> *const c_char;
    fn ChangeDirectory(dir: *const c_char) -> bool;
    fn LoadDirectoryFiles(dir_path: *const c_char) -> FilePathList;
    fn UnloadDirectoryFiles(files: FilePathList);
    fn IsFileDropped() -> bool;
    fn LoadDroppedFiles() -> FilePathList;
    fn UnloadDroppedFiles(files: FilePathList);
    fn GetFileModTime(file_name: *const c_char) -> c_long;
    fn CompressData(data: *const c_uchar, data_size: c_int, comp_data_size: *mut c_int) -> *mut c_uchar;
    fn DecompressData(comp_data: *const c_uchar, comp_data_size: c_int, data_size: *mut c_int) -> *mut c_uchar;

    // Keyboard
    fn IsKeyPressed(key: c_int) -> bool;
    fn IsKeyDown(key: c_int) -> bool;
    fn IsKeyReleased(key: c_int) -> bool;
    fn IsKeyUp(key: c_int) -> bool;
    fn GetKeyPressed() -> c_int;
    fn SetExitKey(key: c_int);

    // Gamepad
    fn IsGamepadAvailable(gamepad: c_int) -> bool;
    fn GetGamepadName(gamepad: c_int) -> *const c_char;
    fn IsGamepadButtonPressed(gamepad: c_int, button: c_int) -> bool;
    fn IsGamepadButtonDown(gamepad: c_int, button: c_int) -> bool;
    fn IsGamepadButtonReleased(gamepad: c_int, button: c_int) -> bool;
    fn IsGamepadButtonUp(gamepad: c_int, button: c_int) -> bool;
    fn GetGamepadButtonPressed() -> c_int;
    fn GetGamepadAxisCount(gamepad: c_int) -> c_int;
    fn GetGamepadAxisMovement(gamepad: c_int, axis: c_int) -> f32;

    // Mouse
    fn IsMouseButtonPressed(button: c_int) -> bool;
    fn IsMouseButtonDown(button: c_int) -> bool;
    fn IsMouseButtonReleased(button: c_int) -> bool;
    fn IsMouseButtonUp(button: c_int) -> bool;
    fn GetMouseX() -> c_int;
    fn GetMouseY() -> c_int;
    fn GetMousePosition() -> Vector2;
    fn SetMousePosition(x: c_int, y: c_int);
    fn SetMouseOffset(offset_x: c_int, offset_y: c_int);
    fn SetMouseScale(scale_x: f32, scale_y: f32);
    fn GetMouseWheelMove() -> f32;

    // Touch and gestures
    fn GetTouchX() -> c_int;
    fn GetTouchY() -> c_int;
    fn GetTouchPosition(index: c_int) -> Vector2;
    fn GetTouchPointCount() -> c_int;
    fn SetGesturesEnabled(flags: c_uint);
    fn IsGestureDetected(gesture: c_uint) -> bool;
    fn GetGestureDetected() -> c_int;
    fn GetGestureHoldDuration() -> f32;
    fn GetGestureDragVector() -> Vector2;
    fn GetGestureDragAngle() -> f32;
    fn GetGesturePinchVector() -> Vector2;
    fn GetGesturePinchAngle() -> f32;

    // Camera
    fn UpdateCamera(camera: *mut Camera3D, mode: c_int);

    // Shapes
    fn DrawPixel(x: c_int, y: c_int, color: Color);
    fn DrawPixelV(position: Vector2, color: Color);
    fn DrawLine(start_x: c_int, start_y: c_int, end_x: c_int, end_y: c_int, color: Color);
    fn DrawLineV(start: Vector2, end: Vector2, color: Color);
    fn DrawLineEx(start: Vector2, end: Vector2, thick: f32, color: Color);
    fn DrawCircle(center_x: c_int, center_y: c_int, radius: f32, color: Color);
    fn DrawCircleV(center: Vector2, radius: f32, color: Color);
    fn DrawCircleLines(center_x: c_int, center_y: c_int, radius: f32, color: Color);
    fn DrawRectangle(x: c_int, y: c_int, width: c_int, height: c_int, color: Color);
    fn DrawRectangleV(position: Vector2, size: Vector2, color: Color);
    fn DrawRectangleRec(rec: Rectangle, color: Color);
    fn DrawRectanglePro(rec: Rectangle, origin: Vector2, rotation: f32, color: Color);
    fn DrawRectangleLines(x: c_int, y: c_int, width: c_int, height: c_int, color: Color);
    fn DrawRectangleLinesEx(rec: Rectangle, line_thick: f32, color: Color);
    fn DrawTriangle(v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
    fn DrawTriangleLines(v1: Vector2, v2: Vector2, v3: Vector2, color: Color);
    fn DrawPoly(center: Vector2, sides: c_int, radius: f32, rotation: f32, color: Color);

    // Images
    fn LoadImage(file_name: *const c_char) -> Image;
    fn GenImageColor(width: c_int, height: c_int, color: Color) -> Image;
    fn ImageCopy(image: Image) -> Image;
    fn UnloadImage(image: Image);
    fn ExportImage(image: Image, file_name: *const c_char) -> bool;
    fn ImageFormat(image: *mut Image, new_format: c_int);
    fn ImageResize(image: *mut Image, new_width: c_int, new_height: c_int);
    fn ImageCrop(image: *mut Image, crop: Rectangle);
    fn ImageFlipVertical(image: *mut Image);
    fn ImageFlipHorizontal(image: *mut Image);

    // Textures
    fn LoadTexture(file_name: *const c_char) -> Texture;
    fn LoadTextureFromImage(image: Image) -> Texture;
    fn UnloadTexture(texture: Texture);
    fn LoadRenderTexture(width: c_int, height: c_int) -> RenderTexture;
    fn UnloadRenderTexture(target: RenderTexture);
    fn DrawTexture(texture: Texture, pos_x: c_int, pos_y: c_int, tint: Color);
    fn DrawTextureV(texture: Texture, position: Vector2, tint: Color);
    fn DrawTextureEx(texture: Texture, position: Vector2, rotation: f32, scale: f32, tint: Color);
    fn DrawTextureRec(texture: Texture, source: Rectangle, position: Vector2, tint: Color);

    // Text
    fn DrawFPS(pos_x: c_int, pos_y: c_int);
    fn DrawText(text: *const c_char, pos_x: c_int, pos_y: c_int, font_size: c_int, color: Color);
    fn MeasureText(text: *const c_char, font_size: c_int) -> c_int;
}

/// A loaded raylib shared library with its resolved function table.
pub struct Raylib {
    functions: Functions,
    trace_log: Option<unsafe extern "C" fn(log_level: c_int, format: *const c_char, ...)>,
    path: PathBuf,
    _library: Library,
}

impl fmt::Debug for Raylib {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Raylib").field("path", &self.path).finish()
    }
}

impl Raylib {
    /// Opens the raylib shared library at `path`.
    ///
    /// A bare file name is looked up by the platform dynamic loader.
    pub fn open(path: impl AsRef<Path>) -> Result<Raylib> {
        let path = path.as_ref();
        let library = unsafe { Library::new(path) }.map_err(|err| Error::Load {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        unsafe {
            let functions = Functions::resolve(&library);
            let trace_log = symbol(&library, "TraceLog\0");
            Ok(Raylib {
                functions,
                trace_log,
                path: path.to_path_buf(),
                _library: library,
            })
        }
    }

    /// Opens the first loadable library from `paths`.
    pub fn open_first(paths: &[PathBuf]) -> Result<Raylib> {
        let mut last_error = None;
        for path in paths {
            match Raylib::open(path) {
                Ok(raylib) => return Ok(raylib),
                Err(err) => last_error = Some(err),
            }
        }
        match last_error {
            Some(err) if paths.len() == 1 => Err(err),
            _ => Err(Error::NotFound(paths.to_vec())),
        }
    }

    /// Path the library was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Names of the known functions the loaded library does not export.
    pub fn missing_functions(&self) -> Vec<&'static str> {
        let mut missing = self.functions.missing();
        if self.trace_log.is_none() {
            missing.push("TraceLog");
        }
        missing
    }

    /// Emits `text` through raylib's logging at `log_level`.
    pub unsafe fn TraceLog(&self, log_level: c_int, text: &CStr) -> Result<()> {
        match self.trace_log {
            Some(func) => {
                func(log_level, c"%s".as_ptr(), text.as_ptr());
                Ok(())
            }
            None => Err(Error::MissingSymbol("TraceLog")),
        }
    }
}

/// Candidate library locations, most specific first.
pub fn default_search_paths() -> Vec<PathBuf> {
    let names: &[&str] = if cfg!(windows) {
        &["raylib.dll", "libraylib.dll"]
    } else if cfg!(target_os = "macos") {
        &["libraylib.dylib", "libraylib.500.dylib"]
    } else {
        &["libraylib.so", "libraylib.so.500", "libraylib.so.5.0.0"]
    };

    let mut paths = Vec::new();
    if let Some(dir) = option_env!("RAYLUA_PKG_LIBDIR") {
        paths.extend(names.iter().map(|name| Path::new(dir).join(name)));
    }
    paths.extend(names.iter().map(PathBuf::from));
    paths
}

#[cfg(unix)]
extern "C" {
    fn vsnprintf(s: *mut c_char, n: usize, format: *const c_char, args: VaList) -> c_int;
}

/// Renders a trace log message received by a [`TraceLogCallback`].
///
/// Where `vsnprintf` is not available the unformatted text is returned.
pub unsafe fn format_message(format: *const c_char, args: VaList) -> String {
    if format.is_null() {
        return String::new();
    }

    #[cfg(unix)]
    {
        let mut buf = [0 as c_char; 1024];
        if vsnprintf(buf.as_mut_ptr(), buf.len(), format, args) >= 0 {
            return CStr::from_ptr(buf.as_ptr()).to_string_lossy().into_owned();
        }
    }
    #[cfg(not(unix))]
    let _ = args;

    CStr::from_ptr(format).to_string_lossy().into_owned()
}
