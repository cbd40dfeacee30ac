//! Roster configuration from TOML (`[roster]` section)
//!
//! People, committees and the governing coalition used to seed the
//! in-memory directories.
//!
//! ```toml
//! [roster]
//! coalition = ["PT", "PMDB"]
//!
//! [[roster.people]]
//! dni = "061222222-0"
//! name = "Jessoares"
//! party = "PT"
//! interests = ["saude"]
//!
//! [[roster.committees]]
//! name = "CCJC"
//! members = ["061222222-0"]
//! ```

use super::ConfigValidationError;
use camara_domain::{AuthorId, CommitteeName};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One person of the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonConfig {
    /// National identity document, `NNNNNNNNN-N`
    pub dni: String,
    pub name: String,
    /// Party acronym; people without one are never government-aligned
    pub party: Option<String>,
    /// Interest tags
    pub interests: Vec<String>,
    /// Whether the person holds a deputy seat
    pub deputy: bool,
}

impl Default for FilePersonConfig {
    fn default() -> Self {
        Self {
            dni: String::new(),
            name: String::new(),
            party: None,
            interests: Vec::new(),
            deputy: true,
        }
    }
}

/// One standing committee of the roster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommitteeConfig {
    pub name: String,
    /// DNIs of the members
    pub members: Vec<String>,
}

/// Raw roster configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRosterConfig {
    /// Parties of the governing coalition
    pub coalition: Vec<String>,
    pub people: Vec<FilePersonConfig>,
    pub committees: Vec<FileCommitteeConfig>,
}

impl FileRosterConfig {
    /// Check ids, names and membership references
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let mut known = HashSet::new();
        for person in &self.people {
            let id = AuthorId::parse(&person.dni)
                .map_err(|e| ConfigValidationError::InvalidPersonId(e.to_string()))?;
            if !known.insert(id) {
                return Err(ConfigValidationError::DuplicatePerson(person.dni.clone()));
            }
        }

        let mut names = HashSet::new();
        for committee in &self.committees {
            let name = CommitteeName::new(&committee.name)
                .map_err(|e| ConfigValidationError::InvalidCommitteeName(e.to_string()))?;
            if !names.insert(name) {
                return Err(ConfigValidationError::DuplicateCommittee(
                    committee.name.clone(),
                ));
            }
            for member in &committee.members {
                let known_member = AuthorId::parse(member)
                    .map(|id| known.contains(&id))
                    .unwrap_or(false);
                if !known_member {
                    return Err(ConfigValidationError::UnknownMember {
                        committee: committee.name.clone(),
                        member: member.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Whether a party belongs to the governing coalition (case-insensitive)
    pub fn in_coalition(&self, party: &str) -> bool {
        self.coalition
            .iter()
            .any(|p| p.trim().eq_ignore_ascii_case(party.trim()))
    }
}
