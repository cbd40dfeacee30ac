//! Proposal registry
//!
//! In-memory store of every registered proposal, keyed by code. The
//! registry is owned by whoever builds the engine and passed around as an
//! `Arc`; there is no process-wide instance.
//!
//! Locking:
//! - the index sits behind one `RwLock`; its write half serializes
//!   registrations so code ordinals stay unique and gap-free;
//! - each proposal sits behind its own `Mutex`, so votes on the same code
//!   are serialized while votes on different codes run in parallel.

use crate::error::TramitationError;
use camara_domain::{CommitteeName, Proposal, ProposalCode, ProposalDraft, ProposalKind};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// Shared handle to a stored proposal
pub type ProposalHandle = Arc<Mutex<Proposal>>;

#[derive(Default)]
struct RegistryIndex {
    proposals: HashMap<ProposalCode, ProposalHandle>,
    /// Codes in registration order
    order: Vec<ProposalCode>,
    counts: HashMap<(ProposalKind, i32), u32>,
}

impl RegistryIndex {
    fn count_by_kind_and_year(&self, kind: ProposalKind, year: i32) -> u32 {
        self.counts.get(&(kind, year)).copied().unwrap_or(0)
    }
}

/// Store of all proposals
#[derive(Default)]
pub struct ProposalRegistry {
    index: RwLock<RegistryIndex>,
}

impl ProposalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new proposal and return its code
    ///
    /// The ordinal is the number of proposals of the same kind and year
    /// already stored, plus one.
    pub async fn register(
        &self,
        draft: ProposalDraft,
        initial_committee: CommitteeName,
    ) -> ProposalCode {
        let mut index = self.index.write().await;

        let ordinal = index.count_by_kind_and_year(draft.kind(), draft.year) + 1;
        let code = ProposalCode::new(draft.kind(), ordinal, draft.year);
        let proposal = Proposal::new(code.clone(), draft, initial_committee);

        index
            .proposals
            .insert(code.clone(), Arc::new(Mutex::new(proposal)));
        index.order.push(code.clone());
        index.counts.insert((code.kind(), code.year()), ordinal);

        debug!("Stored proposal {}", code);
        code
    }

    /// Look up a proposal by code
    pub async fn get(&self, code: &ProposalCode) -> Result<ProposalHandle, TramitationError> {
        self.index
            .read()
            .await
            .proposals
            .get(code)
            .cloned()
            .ok_or_else(|| TramitationError::ProposalNotFound(code.to_string()))
    }

    /// Copy of a proposal as it is now
    pub async fn snapshot(&self, code: &ProposalCode) -> Result<Proposal, TramitationError> {
        let handle = self.get(code).await?;
        let proposal = handle.lock().await;
        Ok(proposal.clone())
    }

    /// Number of proposals of a kind registered for a year
    pub async fn count_by_kind_and_year(&self, kind: ProposalKind, year: i32) -> u32 {
        self.index.read().await.count_by_kind_and_year(kind, year)
    }

    /// All codes in registration order
    pub async fn codes(&self) -> Vec<ProposalCode> {
        self.index.read().await.order.clone()
    }

    pub async fn len(&self) -> usize {
        self.index.read().await.order.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camara_domain::ProposalPayload;

    fn draft(payload: ProposalPayload, year: i32) -> ProposalDraft {
        ProposalDraft::parse(
            "061222222-0",
            year,
            "Ementa",
            "saude",
            "http://example.com",
            payload,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_codes_are_sequential_per_kind_and_year() {
        let registry = ProposalRegistry::new();
        let ccjc = CommitteeName::initial();

        let a = registry
            .register(draft(ProposalPayload::pl(false), 2016), ccjc.clone())
            .await;
        let b = registry
            .register(draft(ProposalPayload::pec("7").unwrap(), 2016), ccjc.clone())
            .await;
        let c = registry
            .register(draft(ProposalPayload::pl(true), 2017), ccjc.clone())
            .await;
        let d = registry
            .register(draft(ProposalPayload::pl(false), 2016), ccjc.clone())
            .await;

        assert_eq!(a.to_string(), "PL 1/2016");
        assert_eq!(b.to_string(), "PEC 1/2016");
        assert_eq!(c.to_string(), "PL 1/2017");
        assert_eq!(d.to_string(), "PL 2/2016");
        assert_eq!(registry.count_by_kind_and_year(ProposalKind::Pl, 2016).await, 2);
        assert_eq!(registry.codes().await, vec![a, b, c, d]);
    }

    #[tokio::test]
    async fn test_get_unknown_code() {
        let registry = ProposalRegistry::new();
        let code = ProposalCode::new(ProposalKind::Pl, 1, 2016);
        let err = registry.get(&code).await.unwrap_err();
        assert_eq!(err, TramitationError::ProposalNotFound("PL 1/2016".to_string()));
        assert!(registry.is_empty().await);
    }

    #[tokio::test]
    async fn test_snapshot_starts_in_initial_committee() {
        let registry = ProposalRegistry::new();
        let code = registry
            .register(draft(ProposalPayload::pl(false), 2016), CommitteeName::initial())
            .await;

        let proposal = registry.snapshot(&code).await.unwrap();
        assert_eq!(proposal.code(), &code);
        assert_eq!(proposal.current_location().token(), "CCJC");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_get_unique_codes() {
        let registry = Arc::new(ProposalRegistry::new());
        let mut handles = Vec::new();

        for _ in 0..50 {
            let registry = Arc::clone(&registry);
            handles.push(tokio::spawn(async move {
                registry
                    .register(draft(ProposalPayload::pl(false), 2016), CommitteeName::initial())
                    .await
            }));
        }

        let mut ordinals = Vec::new();
        for handle in handles {
            ordinals.push(handle.await.unwrap().ordinal());
        }
        ordinals.sort_unstable();

        assert_eq!(ordinals, (1..=50).collect::<Vec<u32>>());
    }
}
