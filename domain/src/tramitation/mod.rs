//! Tramitation state machine
//!
//! ```text
//! IN_COMMITTEE(CCJC) ──pass──> IN_COMMITTEE(next) ──pass──> IN_PLENARY_ROUND_1
//!        │                           │                         │        │
//!      fail                        fail                      pass     fail
//!        ▼                           ▼                         │        ▼
//!    ARCHIVED                    ARCHIVED          PL/PLP: APPROVED  REJECTED
//!                                                  PEC: IN_PLENARY_ROUND_2
//!                                                        │pass   │fail
//!                                                     APPROVED  REJECTED
//! ```
//!
//! A conclusive PL may also close in committee (next location `-`).

pub mod route;
pub mod state;
pub mod transition;

pub use route::NextLocation;
pub use state::TramitationState;
pub use transition::{CommitteeOutcome, PlenaryOutcome, apply_committee_vote, apply_plenary_vote};
