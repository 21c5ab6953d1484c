use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub const RESULT_FILE_PREFIX: &str = "results-";
pub const RESULT_FILE_SUFFIX: &str = ".txt";

/// Lists result files directly inside `dir`, in directory listing order.
///
/// A directory that doesn't exist is treated as an empty one.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(vec![]),
        Err(e) => return Err((format!("couldn't list '{}'", dir.display()), e).into()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| (format!("couldn't list '{}'", dir.display()), e))?;
        if is_result_file(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }

    Ok(files)
}

#[inline]
pub fn is_result_file(name: &str) -> bool {
    name.starts_with(RESULT_FILE_PREFIX) && name.ends_with(RESULT_FILE_SUFFIX)
}
