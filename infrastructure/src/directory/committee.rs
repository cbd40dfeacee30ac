//! In-memory committee directory
//!
//! Committees store member ids only. Interests and coalition membership are
//! resolved through the person directory at vote time, so a change to a
//! person's record applies to the next vote.

use super::DirectorySeedError;
use super::person::InMemoryPersonDirectory;
use crate::config::FileRosterConfig;
use async_trait::async_trait;
use camara_application::{CommitteeDirectory, DirectoryError};
use camara_domain::{AuthorId, CommitteeMember, CommitteeName};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

pub struct InMemoryCommitteeDirectory {
    committees: RwLock<HashMap<CommitteeName, Vec<AuthorId>>>,
    persons: Arc<InMemoryPersonDirectory>,
    /// Upper-cased party acronyms of the governing coalition
    coalition: HashSet<String>,
}

impl InMemoryCommitteeDirectory {
    pub fn new(persons: Arc<InMemoryPersonDirectory>, coalition: &[String]) -> Self {
        Self {
            committees: RwLock::new(HashMap::new()),
            persons,
            coalition: coalition
                .iter()
                .map(|party| party.trim().to_uppercase())
                .collect(),
        }
    }

    pub fn from_roster(
        roster: &FileRosterConfig,
        persons: Arc<InMemoryPersonDirectory>,
    ) -> Result<Self, DirectorySeedError> {
        let known: HashSet<AuthorId> = roster
            .people
            .iter()
            .filter_map(|p| AuthorId::parse(&p.dni).ok())
            .collect();

        let mut committees = HashMap::new();
        for committee in &roster.committees {
            let name = CommitteeName::new(&committee.name)?;
            let mut members = Vec::with_capacity(committee.members.len());
            for member in &committee.members {
                let id = AuthorId::parse(member)?;
                if !known.contains(&id) {
                    return Err(DirectorySeedError::UnknownMember {
                        committee: committee.name.clone(),
                        member: member.clone(),
                    });
                }
                members.push(id);
            }
            if committees.insert(name, members).is_some() {
                return Err(DirectorySeedError::DuplicateCommittee(committee.name.clone()));
            }
        }

        debug!("Seeded committee directory with {} committees", committees.len());
        let directory = Self::new(persons, &roster.coalition);
        Ok(Self {
            committees: RwLock::new(committees),
            ..directory
        })
    }

    /// Create or replace a committee
    pub async fn insert(&self, name: CommitteeName, members: Vec<AuthorId>) {
        self.committees.write().await.insert(name, members);
    }

    pub async fn names(&self) -> Vec<CommitteeName> {
        let mut names: Vec<_> = self.committees.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    fn is_government(&self, party: Option<&str>) -> bool {
        party.is_some_and(|p| self.coalition.contains(&p.trim().to_uppercase()))
    }
}

#[async_trait]
impl CommitteeDirectory for InMemoryCommitteeDirectory {
    async fn exists(&self, name: &CommitteeName) -> Result<bool, DirectoryError> {
        Ok(self.committees.read().await.contains_key(name))
    }

    async fn members_of(
        &self,
        name: &CommitteeName,
    ) -> Result<Vec<CommitteeMember>, DirectoryError> {
        let ids = self
            .committees
            .read()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default();

        let mut members = Vec::with_capacity(ids.len());
        for id in &ids {
            let record = self
                .persons
                .record(id)
                .await
                .ok_or_else(|| DirectoryError::PersonNotFound(id.to_string()))?;
            members.push(CommitteeMember::new(
                record.interests,
                self.is_government(record.party.as_deref()),
            ));
        }
        Ok(members)
    }
}
