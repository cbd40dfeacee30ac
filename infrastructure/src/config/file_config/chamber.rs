//! Chamber configuration from TOML (`[chamber]` section)

use super::ConfigValidationError;
use camara_application::ChamberConfig;
use camara_application::config::chamber::DEFAULT_MIN_YEAR;
use camara_domain::INITIAL_COMMITTEE;
use serde::{Deserialize, Serialize};

/// Raw chamber configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileChamberConfig {
    /// Committee where every proposal starts
    pub initial_committee: String,
    /// Earliest accepted proposal year
    pub min_year: i32,
    /// Fixed house size for the plenary quorum (defaults to the number of
    /// deputies in the roster)
    pub house_size: Option<usize>,
}

impl Default for FileChamberConfig {
    fn default() -> Self {
        Self {
            initial_committee: INITIAL_COMMITTEE.to_string(),
            min_year: DEFAULT_MIN_YEAR,
            house_size: None,
        }
    }
}

impl FileChamberConfig {
    /// Convert to application config
    pub fn to_chamber_config(&self) -> Result<ChamberConfig, ConfigValidationError> {
        if self.house_size == Some(0) {
            return Err(ConfigValidationError::EmptyHouse);
        }

        let config = ChamberConfig::new(&self.initial_committee, self.min_year, self.house_size)
            .map_err(|e| ConfigValidationError::InvalidInitialCommittee(e.to_string()))?;

        let bounds = config.year_bounds();
        if bounds.min > bounds.max {
            return Err(ConfigValidationError::MinYearInFuture(self.min_year));
        }
        Ok(config)
    }
}
