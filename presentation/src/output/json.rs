//! JSON output formatter
//!
//! One compact JSON document per command, suitable for piping into other
//! tools. Domain types serialize with their own tokens (`IN_PROGRESS`,
//! `plenary-round-1`), not the Portuguese display labels.

use crate::output::formatter::OutputFormatter;
use camara_application::{CommitteeVoteResult, PlenaryVoteResult, TramitationError};
use camara_domain::{Proposal, ProposalCode, TrailEntry};
use serde_json::{Value, json};

pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: Value) -> String {
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }

    fn proposal_value(proposal: &Proposal) -> Value {
        json!({
            "proposal": proposal,
            "state": proposal.state(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn registered(&self, code: &ProposalCode) -> String {
        Self::render(json!({ "ok": true, "code": code }))
    }

    fn committee_vote(&self, result: &CommitteeVoteResult) -> String {
        Self::render(json!({
            "ok": true,
            "code": result.code,
            "committee": result.committee,
            "tally": result.tally,
            "passed": result.passed(),
            "result": result.outcome,
        }))
    }

    fn plenary_vote(&self, result: &PlenaryVoteResult) -> String {
        Self::render(json!({
            "ok": true,
            "code": result.code,
            "round": result.round.number(),
            "tally": result.tally,
            "rule": result.rule,
            "passed": result.passed(),
            "result": result.outcome,
        }))
    }

    fn trail(&self, code: &ProposalCode, trail: &[TrailEntry]) -> String {
        Self::render(json!({ "ok": true, "code": code, "trail": trail }))
    }

    fn proposal(&self, proposal: &Proposal) -> String {
        let mut value = Self::proposal_value(proposal);
        value["ok"] = Value::Bool(true);
        Self::render(value)
    }

    fn list(&self, proposals: &[Proposal]) -> String {
        let items: Vec<Value> = proposals.iter().map(Self::proposal_value).collect();
        Self::render(json!({ "ok": true, "proposals": items }))
    }

    fn error(&self, error: &TramitationError) -> String {
        Self::render(json!({
            "ok": false,
            "error": error.kind(),
            "message": error.to_string(),
        }))
    }

    fn usage_error(&self, message: &str) -> String {
        Self::render(json!({
            "ok": false,
            "error": "usage",
            "message": message,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camara_domain::{Location, ProposalKind, VoteStatus};

    fn parse(output: String) -> Value {
        serde_json::from_str(&output).unwrap()
    }

    #[test]
    fn test_trail_uses_domain_tokens() {
        let code = ProposalCode::new(ProposalKind::Pl, 1, 2016);
        let trail = vec![TrailEntry {
            location: Location::committee("CCJC").unwrap(),
            status: VoteStatus::InProgress,
        }];

        let value = parse(JsonFormatter.trail(&code, &trail));
        assert_eq!(value["code"], "PL 1/2016");
        assert_eq!(value["trail"][0]["location"], "CCJC");
        assert_eq!(value["trail"][0]["status"], "IN_PROGRESS");
    }

    #[test]
    fn test_error_carries_kind() {
        let error = TramitationError::AlreadyResolved(ProposalCode::new(ProposalKind::Pec, 1, 2016));
        let value = parse(JsonFormatter.error(&error));
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"], "already_resolved");
        assert_eq!(value["message"], "PEC 1/2016 is already resolved");
    }
}
