// guard-core/src/infrastructure/fs.rs

use serde::de::DeserializeOwned;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

/// Writes `content` through a temporary file in the same directory, then
/// renames it over `path`. Readers see either the old file or the new one.
/// Missing parent directories are created.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    // Same directory, so the rename never crosses filesystems
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_ref())?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}

/// Reads and deserializes a JSON document.
pub fn read_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}
