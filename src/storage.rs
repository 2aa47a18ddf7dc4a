//! Persistent integer slots backing `StorageSaveValue` / `StorageLoadValue`.
//!
//! The storage file is a flat array of native-endian `i32` values; slot `n` lives at byte
//! offset `n * 4`.

use std::fs::OpenOptions;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

const SLOT_SIZE: u64 = 4;

/// Writes `value` into slot `position`, extending the file with zeros when needed.
pub fn save(path: &Path, position: u32, value: i32) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)?;
    let offset = u64::from(position) * SLOT_SIZE;
    if file.metadata()?.len() < offset {
        file.set_len(offset)?;
    }
    file.seek(SeekFrom::Start(offset))?;
    file.write_all(&value.to_ne_bytes())?;
    file.flush()
}

/// Reads slot `position`; a missing file or a slot past the end reads as 0.
pub fn load(path: &Path, position: u32) -> io::Result<i32> {
    let mut file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(err) => return Err(err),
    };
    let offset = u64::from(position) * SLOT_SIZE;
    if file.metadata()?.len() < offset + SLOT_SIZE {
        return Ok(0);
    }
    file.seek(SeekFrom::Start(offset))?;
    let mut buf = [0; SLOT_SIZE as usize];
    file.read_exact(&mut buf)?;
    Ok(i32::from_ne_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() -> io::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.data");

        assert_eq!(load(&path, 0)?, 0);
        save(&path, 3, -42)?;
        assert_eq!(std::fs::metadata(&path)?.len(), 16);
        assert_eq!(load(&path, 3)?, -42);
        assert_eq!(load(&path, 1)?, 0);
        assert_eq!(load(&path, 10)?, 0);

        save(&path, 0, 7)?;
        assert_eq!(load(&path, 0)?, 7);
        assert_eq!(load(&path, 3)?, -42);
        Ok(())
    }
}
