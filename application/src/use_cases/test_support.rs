//! In-memory collaborators shared by the use case tests

use crate::ports::committee_directory::CommitteeDirectory;
use crate::ports::person_directory::{DirectoryError, PersonDirectory, Role};
use crate::ports::tramitation_logger::{TramitationEvent, TramitationLogger};
use crate::registry::ProposalRegistry;
use crate::use_cases::register_proposal::{PayloadInput, RegisterProposalInput};
use crate::use_cases::vote_committee::{VoteCommitteeInput, VoteCommitteeUseCase};
use async_trait::async_trait;
use camara_domain::{
    AlignmentMode, AuthorId, CommitteeMember, CommitteeName, NextLocation, ProposalCode,
    ProposalDraft, ProposalKind, ProposalPayload,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const AUTHOR: &str = "061222222-0";

#[derive(Default)]
struct PersonState {
    /// id -> is deputy
    people: HashMap<String, bool>,
    laws: HashMap<String, usize>,
    deputy_count: usize,
    fail_law_count: bool,
}

#[derive(Default)]
pub struct FakePersons {
    state: Mutex<PersonState>,
}

impl FakePersons {
    fn with_person(id: &str, deputy: bool) -> Self {
        let persons = Self::default();
        {
            let mut state = persons.state.lock().unwrap();
            state.people.insert(id.to_string(), deputy);
            state.deputy_count = 513;
        }
        persons
    }

    pub fn with_deputy(id: &str) -> Self {
        Self::with_person(id, true)
    }

    pub fn with_civilian(id: &str) -> Self {
        Self::with_person(id, false)
    }

    pub fn law_count(&self, id: &str) -> usize {
        self.state.lock().unwrap().laws.get(id).copied().unwrap_or(0)
    }

    pub fn fail_law_count(&self) {
        self.state.lock().unwrap().fail_law_count = true;
    }

    pub fn set_deputy_count(&self, count: usize) {
        self.state.lock().unwrap().deputy_count = count;
    }
}

#[async_trait]
impl PersonDirectory for FakePersons {
    async fn is_registered(&self, id: &AuthorId) -> Result<bool, DirectoryError> {
        Ok(self.state.lock().unwrap().people.contains_key(id.as_str()))
    }

    async fn has_role(&self, id: &AuthorId, role: Role) -> Result<bool, DirectoryError> {
        let state = self.state.lock().unwrap();
        Ok(match role {
            Role::Deputy => state.people.get(id.as_str()).copied().unwrap_or(false),
        })
    }

    async fn increment_law_count(&self, id: &AuthorId) -> Result<(), DirectoryError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_law_count {
            return Err(DirectoryError::Unavailable("law counter offline".to_string()));
        }
        *state.laws.entry(id.as_str().to_string()).or_default() += 1;
        Ok(())
    }

    async fn deputy_count(&self) -> Result<usize, DirectoryError> {
        Ok(self.state.lock().unwrap().deputy_count)
    }
}

#[derive(Default)]
pub struct FakeCommittees {
    committees: Mutex<HashMap<String, Vec<CommitteeMember>>>,
}

impl FakeCommittees {
    pub fn insert(&self, name: &str, members: Vec<CommitteeMember>) {
        self.committees
            .lock()
            .unwrap()
            .insert(name.to_string(), members);
    }
}

#[async_trait]
impl CommitteeDirectory for FakeCommittees {
    async fn exists(&self, name: &CommitteeName) -> Result<bool, DirectoryError> {
        Ok(self.committees.lock().unwrap().contains_key(name.as_str()))
    }

    async fn members_of(
        &self,
        name: &CommitteeName,
    ) -> Result<Vec<CommitteeMember>, DirectoryError> {
        Ok(self
            .committees
            .lock()
            .unwrap()
            .get(name.as_str())
            .cloned()
            .unwrap_or_default())
    }
}

#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<TramitationEvent>>,
}

impl RecordingLogger {
    pub fn events(&self) -> Vec<TramitationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl TramitationLogger for RecordingLogger {
    fn log(&self, event: TramitationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

pub fn member(interests: &[&str], government_aligned: bool) -> CommitteeMember {
    CommitteeMember::new(
        interests.iter().map(|s| s.to_string()).collect(),
        government_aligned,
    )
}

/// Registry plus directories with AUTHOR as deputy and two small committees
///
/// CCJC and CTF each have 3 members: 2 interested in "saude", 1 government.
pub fn setup() -> (Arc<ProposalRegistry>, Arc<FakePersons>, Arc<FakeCommittees>) {
    let committees = FakeCommittees::default();
    for name in ["CCJC", "CTF"] {
        committees.insert(
            name,
            vec![
                member(&["saude"], true),
                member(&["saude", "educacao"], false),
                member(&["educacao"], false),
            ],
        );
    }
    (
        Arc::new(ProposalRegistry::new()),
        Arc::new(FakePersons::with_deputy(AUTHOR)),
        Arc::new(committees),
    )
}

fn payload(kind: ProposalKind) -> ProposalPayload {
    match kind {
        ProposalKind::Pl => ProposalPayload::pl(true),
        ProposalKind::Plp => ProposalPayload::plp("1, 2").unwrap(),
        ProposalKind::Pec => ProposalPayload::pec("7").unwrap(),
    }
}

/// Register a proposal of the given kind (PL is conclusive) interested in "saude"
pub async fn register(
    registry: &ProposalRegistry,
    _persons: &FakePersons,
    kind: ProposalKind,
) -> ProposalCode {
    let draft = ProposalDraft::parse(
        AUTHOR,
        2016,
        "Ementa de teste",
        "saude",
        "http://example.com/proposta",
        payload(kind),
    )
    .unwrap();
    registry.register(draft, CommitteeName::initial()).await
}

/// Pass the proposal through CCJC straight to plenary
pub async fn send_to_plenary(
    registry: &Arc<ProposalRegistry>,
    persons: &Arc<FakePersons>,
    committees: &Arc<FakeCommittees>,
    code: &ProposalCode,
) {
    let result = VoteCommitteeUseCase::new(
        Arc::clone(registry),
        Arc::clone(persons),
        Arc::clone(committees),
        Arc::new(RecordingLogger::default()),
    )
    .execute(VoteCommitteeInput::new(
        code.clone(),
        AlignmentMode::Free,
        NextLocation::Plenary,
    ))
    .await
    .unwrap();
    assert!(result.passed());
}

pub fn pl_input(year: i32) -> RegisterProposalInput {
    RegisterProposalInput::new(
        AUTHOR,
        year,
        "Dispoe sobre o SUS",
        "saude, educacao",
        "http://example.com/pl",
        PayloadInput::Pl { conclusive: true },
    )
}
