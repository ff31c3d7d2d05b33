//! Handler for `basin check config`.

use std::path::Path;

use serde_json::json;

use super::output::{self, Line};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// Load and validate the configuration file at `path`.
///
/// Unlike the other commands, a missing file is an error here.
///
/// # Errors
///
/// Returns an error if the file is missing, malformed or invalid.
pub fn config(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let data_dir = config.storage.resolve_data_dir()?;

    if output::is_json() {
        output::result(
            "check_config",
            json!({
                "path": path.display().to_string(),
                "valid": true,
                "data_dir": data_dir.display().to_string(),
                "max_quantity": config.cart.max_quantity,
                "currency": config.cart.currency,
                "log_level": config.logging.level,
                "log_format": config.logging.format,
            }),
        );
        return Ok(());
    }

    let logging = format!(
        "{} ({})",
        config.logging.level,
        output::dim(&config.logging.format)
    );
    for line in [
        Line::Section("Configuration"),
        Line::Field("Path", path.display().to_string()),
        Line::Field("Data dir", data_dir.display().to_string()),
        Line::Field("Max quantity", config.cart.max_quantity.to_string()),
        Line::Field("Currency", config.cart.currency.to_uppercase()),
        Line::Field("Logging", logging),
        Line::Success("Configuration is valid"),
    ] {
        output::print(line);
    }
    Ok(())
}
