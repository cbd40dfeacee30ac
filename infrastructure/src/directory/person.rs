//! In-memory person directory

use super::DirectorySeedError;
use crate::config::FileRosterConfig;
use async_trait::async_trait;
use camara_application::{DirectoryError, PersonDirectory, Role};
use camara_domain::AuthorId;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Person record held by the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub party: Option<String>,
    pub interests: Vec<String>,
    pub deputy: bool,
    /// Approved laws authored
    pub laws: usize,
}

impl PersonRecord {
    pub fn deputy(name: impl Into<String>, party: Option<&str>, interests: &[&str]) -> Self {
        Self {
            name: name.into(),
            party: party.map(str::to_string),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            deputy: true,
            laws: 0,
        }
    }
}

/// Person directory kept in memory, seeded from the roster
#[derive(Default)]
pub struct InMemoryPersonDirectory {
    people: RwLock<HashMap<AuthorId, PersonRecord>>,
}

impl InMemoryPersonDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_roster(roster: &FileRosterConfig) -> Result<Self, DirectorySeedError> {
        let mut people = HashMap::new();
        for person in &roster.people {
            let id = AuthorId::parse(&person.dni)?;
            let record = PersonRecord {
                name: person.name.trim().to_string(),
                party: person.party.as_ref().map(|p| p.trim().to_string()),
                interests: person
                    .interests
                    .iter()
                    .map(|tag| tag.trim().to_string())
                    .filter(|tag| !tag.is_empty())
                    .collect(),
                deputy: person.deputy,
                laws: 0,
            };
            if people.insert(id, record).is_some() {
                return Err(DirectorySeedError::DuplicatePerson(person.dni.clone()));
            }
        }
        debug!("Seeded person directory with {} people", people.len());
        Ok(Self {
            people: RwLock::new(people),
        })
    }

    pub async fn insert(&self, id: AuthorId, record: PersonRecord) {
        self.people.write().await.insert(id, record);
    }

    pub async fn record(&self, id: &AuthorId) -> Option<PersonRecord> {
        self.people.read().await.get(id).cloned()
    }

    pub async fn law_count(&self, id: &AuthorId) -> Option<usize> {
        self.people.read().await.get(id).map(|p| p.laws)
    }
}

#[async_trait]
impl PersonDirectory for InMemoryPersonDirectory {
    async fn is_registered(&self, id: &AuthorId) -> Result<bool, DirectoryError> {
        Ok(self.people.read().await.contains_key(id))
    }

    async fn has_role(&self, id: &AuthorId, role: Role) -> Result<bool, DirectoryError> {
        let people = self.people.read().await;
        Ok(match role {
            Role::Deputy => people.get(id).is_some_and(|p| p.deputy),
        })
    }

    async fn increment_law_count(&self, id: &AuthorId) -> Result<(), DirectoryError> {
        let mut people = self.people.write().await;
        let person = people
            .get_mut(id)
            .ok_or_else(|| DirectoryError::PersonNotFound(id.to_string()))?;
        person.laws += 1;
        debug!("{} now has {} approved laws", id, person.laws);
        Ok(())
    }

    async fn deputy_count(&self) -> Result<usize, DirectoryError> {
        Ok(self.people.read().await.values().filter(|p| p.deputy).count())
    }
}
