use std::os::raw::{c_char, c_int, c_uchar, c_void};
use std::slice;

use mlua::{Error, Lua, Result, String as LuaString, Table};

use crate::args::{c_string, from_c_str};
use crate::native;
use ffi::{FilePathList, Raylib};

/// Copies the entries of a native path list.
unsafe fn paths_of(list: &FilePathList) -> Vec<String> {
    if list.paths.is_null() {
        return Vec::new();
    }
    (0..list.count as usize)
        .filter_map(|i| from_c_str(*list.paths.add(i)))
        .collect()
}

/// Calls a raylib function returning a string for `path`.
fn path_query(
    lua: &Lua,
    path: &str,
    query: unsafe fn(&Raylib, *const c_char) -> ffi::Result<*const c_char>,
) -> Result<Option<String>> {
    let path = c_string(path, 1)?;
    native::with(lua, |rl| unsafe { Ok(from_c_str(query(rl, path.as_ptr())?)) })
}

type Codec = unsafe fn(&Raylib, *const c_uchar, c_int, *mut c_int) -> ffi::Result<*mut c_uchar>;

/// Runs `CompressData` or `DecompressData` over `data` and copies the result into a Lua string.
fn transcode(lua: &Lua, name: &str, data: LuaString, codec: Codec) -> Result<LuaString> {
    let data = data.as_bytes();
    let len = c_int::try_from(data.len()).map_err(|_| Error::runtime(format!("{name}: data is too large")))?;
    let output = native::with(lua, |rl| unsafe {
        let mut output_len: c_int = 0;
        let ptr = codec(rl, data.as_ptr(), len, &mut output_len)?;
        if ptr.is_null() {
            return Ok(None);
        }
        let output = slice::from_raw_parts(ptr, output_len.max(0) as usize).to_vec();
        rl.MemFree(ptr as *mut c_void)?;
        Ok(Some(output))
    })?;
    match output {
        Some(output) => lua.create_string(output),
        None => Err(Error::runtime(format!("{name} failed"))),
    }
}

pub(super) fn register(lua: &Lua, core: &Table) -> Result<()> {
    core.set(
        "FileExists",
        lua.create_function(|lua, path: String| {
            let path = c_string(&path, 1)?;
            native::with(lua, |rl| unsafe { rl.FileExists(path.as_ptr()) })
        })?,
    )?;
    core.set(
        "DirectoryExists",
        lua.create_function(|lua, path: String| {
            let path = c_string(&path, 1)?;
            native::with(lua, |rl| unsafe { rl.DirectoryExists(path.as_ptr()) })
        })?,
    )?;
    core.set(
        "IsFileExtension",
        lua.create_function(|lua, (path, ext): (String, String)| {
            let path = c_string(&path, 1)?;
            let ext = c_string(&ext, 2)?;
            native::with(lua, |rl| unsafe { rl.IsFileExtension(path.as_ptr(), ext.as_ptr()) })
        })?,
    )?;
    core.set(
        "GetExtension",
        lua.create_function(|lua, path: String| path_query(lua, &path, Raylib::GetFileExtension))?,
    )?;
    core.set(
        "GetFileName",
        lua.create_function(|lua, path: String| path_query(lua, &path, Raylib::GetFileName))?,
    )?;
    core.set(
        "GetFileNameWithoutExt",
        lua.create_function(|lua, path: String| path_query(lua, &path, Raylib::GetFileNameWithoutExt))?,
    )?;
    core.set(
        "GetDirectoryPath",
        lua.create_function(|lua, path: String| path_query(lua, &path, Raylib::GetDirectoryPath))?,
    )?;
    core.set(
        "GetPrevDirectoryPath",
        lua.create_function(|lua, path: String| path_query(lua, &path, Raylib::GetPrevDirectoryPath))?,
    )?;
    core.set(
        "GetWorkingDirectory",
        lua.create_function(|lua, ()| {
            native::with(lua, |rl| unsafe { Ok(from_c_str(rl.GetWorkingDirectory()?)) })
        })?,
    )?;
    core.set(
        "GetDirectoryFiles",
        lua.create_function(|lua, dir: String| {
            let dir = c_string(&dir, 1)?;
            let paths = native::with(lua, |rl| unsafe {
                let list = rl.LoadDirectoryFiles(dir.as_ptr())?;
                let paths = paths_of(&list);
                rl.UnloadDirectoryFiles(list)?;
                Ok(paths)
            })?;
            lua.create_sequence_from(paths)
        })?,
    )?;
    core.set(
        "ChangeDirectory",
        lua.create_function(|lua, dir: String| {
            let dir = c_string(&dir, 1)?;
            native::with(lua, |rl| unsafe { rl.ChangeDirectory(dir.as_ptr()) })
        })?,
    )?;
    forward!(lua, core, {
        IsFileDropped();
    });
    core.set(
        "GetDroppedFiles",
        lua.create_function(|lua, ()| {
            let paths = native::with(lua, |rl| unsafe {
                let list = rl.LoadDroppedFiles()?;
                let paths = paths_of(&list);
                rl.UnloadDroppedFiles(list)?;
                Ok(paths)
            })?;
            lua.create_sequence_from(paths)
        })?,
    )?;
    core.set(
        "GetFileModTime",
        lua.create_function(|lua, path: String| {
            let path = c_string(&path, 1)?;
            native::with(lua, |rl| unsafe { rl.GetFileModTime(path.as_ptr()) }).map(i64::from)
        })?,
    )?;
    core.set(
        "GetFileInfo",
        lua.create_function(|lua, path: String| {
            let path = c_string(&path, 1)?;
            let (fullname, name, ext, directory, modtime) = native::with(lua, |rl| unsafe {
                Ok((
                    from_c_str(rl.GetFileName(path.as_ptr())?),
                    from_c_str(rl.GetFileNameWithoutExt(path.as_ptr())?),
                    from_c_str(rl.GetFileExtension(path.as_ptr())?),
                    from_c_str(rl.GetDirectoryPath(path.as_ptr())?),
                    i64::from(rl.GetFileModTime(path.as_ptr())?),
                ))
            })?;
            let info = lua.create_table_with_capacity(0, 5)?;
            info.set("fullname", fullname)?;
            info.set("name", name)?;
            info.set("ext", ext)?;
            info.set("directory", directory)?;
            info.set("modtime", modtime)?;
            Ok(info)
        })?,
    )?;
    core.set(
        "CompressData",
        lua.create_function(|lua, data: LuaString| transcode(lua, "CompressData", data, Raylib::CompressData))?,
    )?;
    core.set(
        "DecompressData",
        lua.create_function(|lua, data: LuaString| {
            transcode(lua, "DecompressData", data, Raylib::DecompressData)
        })?,
    )?;

    Ok(())
}
