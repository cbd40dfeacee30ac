//! Kind-specific proposal payload

use super::kind::ProposalKind;
use crate::core::error::DomainError;
use crate::core::string::split_list;
use serde::{Deserialize, Serialize};

/// Data that only some kinds of proposal carry
///
/// The variant determines the proposal kind, so a PL can never hold
/// article references and a PEC can never be flagged conclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "UPPERCASE")]
pub enum ProposalPayload {
    /// Ordinary bill; `conclusive` bills may be closed by a committee
    Pl { conclusive: bool },
    /// Complementary bill amending the listed articles
    Plp { articles: Vec<String> },
    /// Constitutional amendment touching the listed articles
    Pec { articles: Vec<String> },
}

impl ProposalPayload {
    pub fn pl(conclusive: bool) -> Self {
        ProposalPayload::Pl { conclusive }
    }

    pub fn plp(articles: &str) -> Result<Self, DomainError> {
        Ok(ProposalPayload::Plp {
            articles: Self::parse_articles(articles)?,
        })
    }

    pub fn pec(articles: &str) -> Result<Self, DomainError> {
        Ok(ProposalPayload::Pec {
            articles: Self::parse_articles(articles)?,
        })
    }

    fn parse_articles(articles: &str) -> Result<Vec<String>, DomainError> {
        let articles = split_list(articles);
        if articles.is_empty() {
            return Err(DomainError::invalid_argument("articles cannot be empty"));
        }
        Ok(articles)
    }

    pub fn kind(&self) -> ProposalKind {
        match self {
            ProposalPayload::Pl { .. } => ProposalKind::Pl,
            ProposalPayload::Plp { .. } => ProposalKind::Plp,
            ProposalPayload::Pec { .. } => ProposalKind::Pec,
        }
    }

    pub fn is_conclusive(&self) -> bool {
        matches!(self, ProposalPayload::Pl { conclusive: true })
    }

    /// Article references; empty for PL
    pub fn articles(&self) -> &[String] {
        match self {
            ProposalPayload::Pl { .. } => &[],
            ProposalPayload::Plp { articles } | ProposalPayload::Pec { articles } => {
                articles.as_slice()
            }
        }
    }
}
