//! Demo configuration loaded via OrthoConfig.

use std::ffi::OsString;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::DemoError;

const DEFAULT_COUNT: usize = 20;
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration values controlling the demo run.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENT_GROUPS")]
pub struct DemoSettings {
    /// Skip the HTTP name source and use the fallback lists.
    #[ortho_config(default = false)]
    pub offline: bool,
    /// Print groups as JSON instead of text.
    #[ortho_config(default = false)]
    pub json: bool,
    /// Number of students drawn from the generator.
    pub count: Option<usize>,
    /// Seed for a reproducible run.
    pub seed: Option<u64>,
    /// HTTP timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Override for the male name list URL.
    pub male_names_url: Option<String>,
    /// Override for the female name list URL.
    pub female_names_url: Option<String>,
}

impl DemoSettings {
    /// Load settings from command-line arguments, environment variables and
    /// configuration files.
    ///
    /// # Errors
    ///
    /// Returns [`DemoError::Config`] when a layer cannot be parsed.
    pub fn from_args<I>(args: I) -> Result<Self, DemoError>
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::load_from_iter(args).map_err(|error| DemoError::Config {
            message: error.to_string(),
        })
    }

    /// Return the configured student count, falling back to the default.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_COUNT)
    }

    /// Return the configured HTTP timeout, falling back to the default.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
