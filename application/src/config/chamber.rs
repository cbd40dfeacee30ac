//! Chamber configuration
//!
//! Parameters that control how the engine registers and votes proposals.

use camara_domain::{CommitteeName, DomainError, YearBounds};
use chrono::Datelike;

/// Earliest year a proposal may carry (promulgation of the constitution)
pub const DEFAULT_MIN_YEAR: i32 = 1988;

/// Chamber-wide engine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChamberConfig {
    /// Committee where every proposal starts
    pub initial_committee: CommitteeName,
    /// Earliest accepted proposal year
    pub min_year: i32,
    /// Fixed house size for the quorum gate; `None` asks the person directory
    pub house_size: Option<usize>,
}

impl Default for ChamberConfig {
    fn default() -> Self {
        Self {
            initial_committee: CommitteeName::initial(),
            min_year: DEFAULT_MIN_YEAR,
            house_size: None,
        }
    }
}

impl ChamberConfig {
    /// Build from raw values, validating the committee name.
    pub fn new(
        initial_committee: &str,
        min_year: i32,
        house_size: Option<usize>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            initial_committee: CommitteeName::new(initial_committee)?,
            min_year,
            house_size,
        })
    }

    pub fn with_house_size(mut self, house_size: usize) -> Self {
        self.house_size = Some(house_size);
        self
    }

    /// Accepted years: `min_year` through the current calendar year.
    pub fn year_bounds(&self) -> YearBounds {
        YearBounds {
            min: self.min_year,
            max: chrono::Local::now().year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChamberConfig::default();
        assert_eq!(config.initial_committee.as_str(), "CCJC");
        assert_eq!(config.min_year, 1988);
        assert!(config.house_size.is_none());
    }

    #[test]
    fn test_year_bounds_end_at_current_year() {
        let bounds = ChamberConfig::default().year_bounds();
        assert_eq!(bounds.min, 1988);
        assert_eq!(bounds.max, chrono::Local::now().year());
    }

    #[test]
    fn test_invalid_initial_committee() {
        assert!(ChamberConfig::new("", 1988, None).is_err());
        assert!(ChamberConfig::new("CCJC", 1988, Some(513)).is_ok());
    }
}
