//! Voting history of a proposal
//!
//! The history is an append-only log of `(location, status)` entries, one
//! per stage the proposal has occupied. Only the last entry may change.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Committee every proposal enters first, unless configured otherwise
pub const INITIAL_COMMITTEE: &str = "CCJC";

/// Name of a committee, such as `CCJC` or `CTF`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitteeName(String);

impl CommitteeName {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::invalid_argument("committee name cannot be empty"));
        }
        if PlenaryRound::from_token(name).is_some() || Self::is_reserved(name) {
            return Err(DomainError::invalid_argument(format!(
                "{name} is reserved for the plenary or for closing"
            )));
        }
        Ok(Self(name.to_string()))
    }

    /// Tokens a next-location argument reads as the plenary or as closing
    fn is_reserved(name: &str) -> bool {
        name == "-"
            || name.eq_ignore_ascii_case("plenario")
            || name.eq_ignore_ascii_case("plenary")
    }

    /// The constitution and justice committee (`CCJC`)
    pub fn initial() -> Self {
        Self(INITIAL_COMMITTEE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CommitteeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CommitteeName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<CommitteeName> for String {
    fn from(name: CommitteeName) -> Self {
        name.0
    }
}

/// Plenary voting round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlenaryRound {
    First,
    Second,
}

impl PlenaryRound {
    pub fn token(&self) -> &'static str {
        match self {
            PlenaryRound::First => "plenary-round-1",
            PlenaryRound::Second => "plenary-round-2",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "plenary-round-1" => Some(PlenaryRound::First),
            "plenary-round-2" => Some(PlenaryRound::Second),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            PlenaryRound::First => 1,
            PlenaryRound::Second => 2,
        }
    }
}

/// Where a proposal sits during one stage of its tramitation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Location {
    Committee(CommitteeName),
    Plenary(PlenaryRound),
}

impl Location {
    pub fn committee(name: &str) -> Result<Self, DomainError> {
        Ok(Location::Committee(CommitteeName::new(name)?))
    }

    pub fn token(&self) -> &str {
        match self {
            Location::Committee(name) => name.as_str(),
            Location::Plenary(round) => round.token(),
        }
    }

    pub fn is_plenary(&self) -> bool {
        matches!(self, Location::Plenary(_))
    }

    pub fn as_committee(&self) -> Option<&CommitteeName> {
        match self {
            Location::Committee(name) => Some(name),
            Location::Plenary(_) => None,
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl std::str::FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match PlenaryRound::from_token(s.trim()) {
            Some(round) => Ok(Location::Plenary(round)),
            None => Location::committee(s),
        }
    }
}

impl TryFrom<String> for Location {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.token().to_string()
    }
}

/// Status of one stage in the voting history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteStatus {
    InProgress,
    Approved,
    Rejected,
    Archived,
}

impl VoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteStatus::InProgress => "IN_PROGRESS",
            VoteStatus::Approved => "APPROVED",
            VoteStatus::Rejected => "REJECTED",
            VoteStatus::Archived => "ARCHIVED",
        }
    }

    /// Whether the stage has been resolved
    pub fn is_resolved(&self) -> bool {
        !matches!(self, VoteStatus::InProgress)
    }
}

impl std::fmt::Display for VoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One `(location, status)` pair of the trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailEntry {
    pub location: Location,
    pub status: VoteStatus,
}

impl TrailEntry {
    pub fn in_progress(location: Location) -> Self {
        Self {
            location,
            status: VoteStatus::InProgress,
        }
    }
}

/// Append-only sequence of trail entries
///
/// Never empty: it starts with the initial committee in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VotingHistory {
    entries: Vec<TrailEntry>,
}

impl VotingHistory {
    pub fn new(initial_committee: CommitteeName) -> Self {
        Self {
            entries: vec![TrailEntry::in_progress(Location::Committee(
                initial_committee,
            ))],
        }
    }

    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> &TrailEntry {
        // invariant: at least one entry
        &self.entries[self.entries.len() - 1]
    }

    /// Enter a new stage; the current stage must have been approved
    pub fn enter(&mut self, location: Location) -> Result<(), DomainError> {
        let last = self.last();
        if last.status != VoteStatus::Approved {
            return Err(DomainError::invalid_transition(format!(
                "cannot leave {} while it is {}",
                last.location, last.status
            )));
        }
        self.entries.push(TrailEntry::in_progress(location));
        Ok(())
    }

    /// Resolve the current stage with a final status
    pub fn resolve(&mut self, status: VoteStatus) -> Result<(), DomainError> {
        if !status.is_resolved() {
            return Err(DomainError::invalid_transition(
                "a stage can only be resolved to a final status",
            ));
        }
        let last = self
            .entries
            .last_mut()
            .ok_or_else(|| DomainError::invalid_transition("empty voting history"))?;
        if last.status.is_resolved() {
            return Err(DomainError::invalid_transition(format!(
                "{} is already {}",
                last.location, last.status
            )));
        }
        last.status = status;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ccjc() -> CommitteeName {
        CommitteeName::new("CCJC").unwrap()
    }

    #[test]
    fn test_new_history_starts_in_initial_committee() {
        let history = VotingHistory::new(ccjc());
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().location.token(), "CCJC");
        assert_eq!(history.last().status, VoteStatus::InProgress);
    }

    #[test]
    fn test_resolve_then_enter() {
        let mut history = VotingHistory::new(ccjc());
        history.resolve(VoteStatus::Approved).unwrap();
        history.enter(Location::Plenary(PlenaryRound::First)).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].status, VoteStatus::Approved);
        assert_eq!(history.last().location.token(), "plenary-round-1");
        assert_eq!(history.last().status, VoteStatus::InProgress);
    }

    #[test]
    fn test_cannot_enter_without_approval() {
        let mut history = VotingHistory::new(ccjc());
        assert!(history.enter(Location::committee("CTF").unwrap()).is_err());

        history.resolve(VoteStatus::Rejected).unwrap();
        assert!(history.enter(Location::committee("CTF").unwrap()).is_err());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_cannot_resolve_twice() {
        let mut history = VotingHistory::new(ccjc());
        history.resolve(VoteStatus::Rejected).unwrap();
        let err = history.resolve(VoteStatus::Approved).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition(_)));
        assert_eq!(history.last().status, VoteStatus::Rejected);
    }

    #[test]
    fn test_cannot_resolve_to_in_progress() {
        let mut history = VotingHistory::new(ccjc());
        assert!(history.resolve(VoteStatus::InProgress).is_err());
    }

    #[test]
    fn test_committee_name_rejects_plenary_tokens() {
        assert!(CommitteeName::new("plenary-round-1").is_err());
        assert!(CommitteeName::new("  ").is_err());
    }

    #[test]
    fn test_committee_name_rejects_routing_tokens() {
        for name in ["-", "Plenario", "PLENARIO", "plenary", " Plenary "] {
            assert!(CommitteeName::new(name).is_err(), "{name} must be rejected");
        }
        assert!(CommitteeName::new("Plenarios").is_ok());
    }

    #[test]
    fn test_location_parse() {
        assert_eq!(
            "plenary-round-2".parse::<Location>().unwrap(),
            Location::Plenary(PlenaryRound::Second)
        );
        assert!("CTF".parse::<Location>().unwrap().as_committee().is_some());
    }

    #[test]
    fn test_trail_entry_json() {
        let entry = TrailEntry {
            location: Location::Plenary(PlenaryRound::First),
            status: VoteStatus::InProgress,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"location":"plenary-round-1","status":"IN_PROGRESS"}"#);
    }
}
