use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable that switches frame-name validation to lenient mode
pub const LENIENT_ENV: &str = "TDE4_SEQUENCE_LENIENT";

/// Configuration for sequence resolution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Fail when a matched file carries anything but digits at the frame
    /// position. When disabled such files are skipped with a warning.
    pub strict_frame_names: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            strict_frame_names: true,
        }
    }
}

impl ResolverConfig {
    /// Lenient config: foreign files next to the sequence are skipped
    pub fn lenient() -> Self {
        Self {
            strict_frame_names: false,
        }
    }

    pub fn from_env() -> Self {
        if env_truthy(LENIENT_ENV) {
            Self::lenient()
        } else {
            Self::default()
        }
    }
}

fn env_truthy(var: &str) -> bool {
    env::var(var)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
