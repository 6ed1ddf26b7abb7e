//! Configuration for busloop
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a busloop session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Persistence Configuration
    // -------------------------------------------------------------------------
    /// Route file used when a save/load prompt is left empty
    pub route_file: PathBuf,

    // -------------------------------------------------------------------------
    // Startup Configuration
    // -------------------------------------------------------------------------
    /// Populate the built-in sample route before the first prompt
    pub sample_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            route_file: PathBuf::from("route.csv"),
            sample_on_start: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the route file used for empty save/load prompts
    pub fn route_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.route_file = path.into();
        self
    }

    /// Set whether the sample route is populated at startup
    pub fn sample_on_start(mut self, yes: bool) -> Self {
        self.config.sample_on_start = yes;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
