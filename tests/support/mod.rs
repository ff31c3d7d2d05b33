#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use basin::domain::OrderedList;

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

/// Collect a list's values front to back.
pub fn values<T: Clone>(list: &OrderedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}
