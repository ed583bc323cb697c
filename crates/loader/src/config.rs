use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding the separator used for unique camera names
pub const NAME_SEPARATOR_ENV: &str = "TDE4_CAMERA_NAME_SEPARATOR";

/// Configuration for sequence import onto cameras
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Let the host derive the camera frame range from the sequence attributes
    pub frame_range_calculation: bool,

    /// Separator between entity name and counter (`sh010__01`)
    pub name_separator: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            frame_range_calculation: true,
            name_separator: "__".to_string(),
        }
    }
}

impl LoaderConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(separator) = env::var(NAME_SEPARATOR_ENV) {
            if !separator.is_empty() {
                config.name_separator = separator;
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::{LoaderConfig, NAME_SEPARATOR_ENV};

    #[test]
    fn separator_override_from_env() {
        std::env::set_var(NAME_SEPARATOR_ENV, "_alt");
        let config = LoaderConfig::from_env();
        std::env::remove_var(NAME_SEPARATOR_ENV);

        assert_eq!(config.name_separator, "_alt");
        assert!(config.frame_range_calculation);
    }
}
