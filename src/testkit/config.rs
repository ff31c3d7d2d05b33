//! Canonical test configurations.

use std::path::Path;

use crate::application::SessionOptions;
use crate::infrastructure::config::settings::Config;

/// Default configuration with storage rooted at `dir`.
pub fn with_data_dir(dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.data_dir = Some(dir.to_path_buf());
    config
}

/// Session options with a small quantity cap.
pub fn session_options(max_quantity: u32) -> SessionOptions {
    SessionOptions {
        max_quantity,
        ..SessionOptions::default()
    }
}
