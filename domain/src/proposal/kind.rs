//! Proposal kind value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Kind of legislative proposal
///
/// - `Pl`: ordinary bill (Projeto de Lei)
/// - `Plp`: complementary bill (Projeto de Lei Complementar)
/// - `Pec`: constitutional amendment (Proposta de Emenda a Constituicao)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProposalKind {
    Pl,
    Plp,
    Pec,
}

impl ProposalKind {
    pub const ALL: [ProposalKind; 3] = [ProposalKind::Pl, ProposalKind::Plp, ProposalKind::Pec];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalKind::Pl => "PL",
            ProposalKind::Plp => "PLP",
            ProposalKind::Pec => "PEC",
        }
    }

    /// Number of plenary rounds this kind goes through
    pub fn plenary_rounds(&self) -> u8 {
        match self {
            ProposalKind::Pec => 2,
            ProposalKind::Pl | ProposalKind::Plp => 1,
        }
    }
}

impl std::fmt::Display for ProposalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProposalKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PL" => Ok(ProposalKind::Pl),
            "PLP" => Ok(ProposalKind::Plp),
            "PEC" => Ok(ProposalKind::Pec),
            other => Err(DomainError::invalid_argument(format!(
                "unknown proposal kind: {other}. Valid: PL, PLP, PEC"
            ))),
        }
    }
}
