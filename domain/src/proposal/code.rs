//! Proposal code value object

use super::kind::ProposalKind;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Identifier of a proposal, formatted as `"<kind> <ordinal>/<year>"`
///
/// The ordinal counts proposals of the same kind registered in the same
/// year, starting at 1. Codes are assigned once by the registry and never
/// recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProposalCode {
    kind: ProposalKind,
    ordinal: u32,
    year: i32,
}

impl ProposalCode {
    pub fn new(kind: ProposalKind, ordinal: u32, year: i32) -> Self {
        Self {
            kind,
            ordinal,
            year,
        }
    }

    pub fn kind(&self) -> ProposalKind {
        self.kind
    }

    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl std::fmt::Display for ProposalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}/{}", self.kind, self.ordinal, self.year)
    }
}

impl std::str::FromStr for ProposalCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DomainError::invalid_argument(format!("malformed proposal code: {s}"));

        let (kind, rest) = s.trim().split_once(' ').ok_or_else(malformed)?;
        let (ordinal, year) = rest.trim().split_once('/').ok_or_else(malformed)?;

        let kind: ProposalKind = kind.parse()?;
        let ordinal: u32 = ordinal.parse().map_err(|_| malformed())?;
        let year: i32 = year.parse().map_err(|_| malformed())?;

        if ordinal == 0 {
            return Err(malformed());
        }

        Ok(Self::new(kind, ordinal, year))
    }
}

impl TryFrom<String> for ProposalCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProposalCode> for String {
    fn from(code: ProposalCode) -> Self {
        code.to_string()
    }
}
