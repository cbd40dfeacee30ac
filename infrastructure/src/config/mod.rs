//! Configuration file loading for e-camara
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `CAMARA_` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./camara.toml` or `./.camara.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/e-camara/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileChamberConfig, FileCommitteeConfig, FileConfig, FileLogConfig,
    FileOutputConfig, FileOutputFormat, FilePersonConfig, FileRosterConfig,
};
pub use loader::ConfigLoader;
