//! Author identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// National identity document (DNI) of a proposal's author
///
/// Format: nine digits, a dash and a check digit (`NNNNNNNNN-N`).
/// The person record itself lives in an external directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorId(String);

impl AuthorId {
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid_argument("author cannot be empty"));
        }
        if !Self::is_well_formed(value) {
            return Err(DomainError::invalid_argument(format!(
                "invalid author DNI: {value}"
            )));
        }
        Ok(Self(value.to_string()))
    }

    fn is_well_formed(value: &str) -> bool {
        let Some((number, check)) = value.split_once('-') else {
            return false;
        };
        number.len() == 9
            && check.len() == 1
            && number.chars().all(|c| c.is_ascii_digit())
            && check.chars().all(|c| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AuthorId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AuthorId> for String {
    fn from(id: AuthorId) -> Self {
        id.0
    }
}
