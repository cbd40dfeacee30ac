//! Quorum and majority rules
//!
//! Pure decision functions for committee and plenary votes.
//!
//! # Committee votes
//!
//! The outcome follows from the committee's composition and the alignment
//! mode; see [`CommitteeTally::passes`].
//!
//! # Plenary votes
//!
//! ```text
//! present >= house/2 + 1 ?   ── no ──> quorum not met (nothing recorded)
//!         │ yes
//!         ▼
//! favorable >= threshold(kind, present) ?   PL, PLP: present/2 + 1
//!         │                                 PEC:     ceil(3 * present / 5)
//!         ▼
//! result = raw majority XOR (mode == OPPOSITION)
//! ```

pub mod alignment;
pub mod committee;
pub mod plenary;
pub mod rule;

pub use alignment::AlignmentMode;
pub use committee::{CommitteeMember, CommitteeTally};
pub use plenary::{PlenaryTally, QuorumGate};
pub use rule::MajorityRule;
