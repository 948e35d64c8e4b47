/// Console configuration
use crate::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub directory: DirectorySettings,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DirectorySettings {
    /// Base URL of the user-directory service. No default: the console
    /// refuses to start without one.
    pub url: Option<String>,
}

impl ConsoleConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        let mut settings = config::Config::builder();

        // Load from config file if it exists
        let config_path = std::path::PathBuf::from("roster.toml");
        if config_path.exists() {
            settings = settings.add_source(config::File::from(config_path));
        }

        // Override with environment variables (prefixed with ROSTER_)
        settings = settings.add_source(
            config::Environment::with_prefix("ROSTER")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ConsoleError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConsoleError::Config(e.to_string()))
    }

    /// The configured directory URL, or a visible error naming the
    /// variable to set.
    pub fn directory_url(&self) -> Result<&str> {
        self.directory
            .url
            .as_deref()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                ConsoleError::Config(
                    "Directory URL is required (set ROSTER_DIRECTORY_URL)".to_string(),
                )
            })
    }
}
