// Configuration validation module

use std::path::PathBuf;
use tracing::warn;

use crate::config::{convert_tabs_config, default_config_path, load_config, AppConfig};
use crate::core::error::Result;

/// Load the configuration and check that its options convert.
///
/// Failures are logged with the offending path before being returned.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);

    let config = load_config(Some(path.clone())).map_err(|e| {
        warn!(path = %path.display(), error = %e, "failed to load configuration");
        e
    })?;

    if let Err(e) = convert_tabs_config(&config.tabs) {
        warn!(path = %path.display(), error = %e, "invalid tabs options");
        return Err(e);
    }
    if config.tabs.children.is_empty() {
        warn!(path = %path.display(), "no children configured; the bar will be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = load_and_validate_config(None).unwrap();
        assert!(!config.tabs.children.is_empty());
    }
}
