//! File system helpers for reading inputs and writing exports.

use chrono::NaiveDate;
use std::{
    fs,
    io::{Read, Write},
    path::{Path, PathBuf},
};

use super::export::export_filename;

/// Read a whole file into a String.
pub fn read_to_string(path: &Path) -> std::io::Result<String> {
    let mut f = fs::File::open(path)?;
    let mut s = String::new();

    f.read_to_string(&mut s)?;

    Ok(s)
}

/// Try to read a file into a String, returning `None` if it is missing or unreadable.
pub fn try_read_to_string(path: &Path) -> Option<String> {
    read_to_string(path).ok()
}

/// Write a string to file, creating parent directories as needed.
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Directory exports land in when no output is given: the user's downloads
/// folder, else the current directory.
pub fn default_export_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve where an export made on `date` should be written.
///
/// `output` may name a file or an existing directory; a directory (or no
/// output at all) gets the date-stamped file name.
pub fn resolve_export_path(output: Option<&Path>, date: NaiveDate) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(export_filename(date)),
        Some(path) => path.to_path_buf(),
        None => default_export_dir().join(export_filename(date)),
    }
}
