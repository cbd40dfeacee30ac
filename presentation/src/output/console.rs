//! Console output formatter with Portuguese display labels

use crate::output::formatter::OutputFormatter;
use camara_application::{CommitteeVoteResult, PlenaryVoteResult, TramitationError};
use camara_domain::{
    CommitteeOutcome, Location, PlenaryOutcome, PlenaryRound, Proposal, ProposalCode,
    ProposalKind, TrailEntry, VoteStatus,
};
use colored::Colorize;

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Display label of a vote status
    pub fn status_label(status: VoteStatus) -> &'static str {
        match status {
            VoteStatus::InProgress => "EM VOTACAO",
            VoteStatus::Approved => "APROVADO",
            VoteStatus::Rejected => "REJEITADO",
            VoteStatus::Archived => "ARQUIVADO",
        }
    }

    /// Display label of a location
    pub fn location_label(location: &Location) -> String {
        match location {
            Location::Committee(name) => name.to_string(),
            Location::Plenary(PlenaryRound::First) => "Plenario - 1o turno".to_string(),
            Location::Plenary(PlenaryRound::Second) => "Plenario - 2o turno".to_string(),
        }
    }

    fn kind_label(kind: ProposalKind) -> &'static str {
        match kind {
            ProposalKind::Pl => "Projeto de Lei",
            ProposalKind::Plp => "Projeto de Lei Complementar",
            ProposalKind::Pec => "Projeto de Emenda Constitucional",
        }
    }

    /// Current situation: final status, or `EM VOTACAO (<location>)`
    fn situation(proposal: &Proposal) -> String {
        match proposal.current_status() {
            VoteStatus::InProgress => format!(
                "{} ({})",
                Self::status_label(VoteStatus::InProgress),
                Self::location_label(proposal.current_location())
            ),
            // a committee rejection ends the tramitation as archived
            VoteStatus::Rejected if !proposal.current_location().is_plenary() => {
                Self::status_label(VoteStatus::Archived).to_string()
            }
            status => Self::status_label(status).to_string(),
        }
    }

    /// One-line proposal summary
    ///
    /// `Projeto de Lei - PL 1/2016 - 061222222-0 - Ementa - Conclusiva - EM VOTACAO (CCJC)`
    pub fn summary(proposal: &Proposal) -> String {
        let mut parts = vec![
            Self::kind_label(proposal.kind()).to_string(),
            proposal.code().to_string(),
            proposal.author().to_string(),
            proposal.summary().to_string(),
        ];
        match proposal.kind() {
            ProposalKind::Pl if proposal.is_conclusive() => parts.push("Conclusiva".to_string()),
            ProposalKind::Pl => {}
            ProposalKind::Plp | ProposalKind::Pec => {
                parts.push(proposal.payload().articles().join(", "))
            }
        }
        parts.push(Self::situation(proposal));
        parts.join(" - ")
    }

    /// Trail as `<Location> (<STATUS>)` segments, oldest first
    pub fn trail_line(trail: &[TrailEntry]) -> String {
        trail
            .iter()
            .map(|entry| {
                format!(
                    "{} ({})",
                    Self::location_label(&entry.location),
                    Self::status_label(entry.status)
                )
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn verdict(passed: bool) -> String {
        if passed {
            "APROVADO".green().bold().to_string()
        } else {
            "REJEITADO".red().bold().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn registered(&self, code: &ProposalCode) -> String {
        format!("{} {}", "Registrado".green(), code.to_string().bold())
    }

    fn committee_vote(&self, result: &CommitteeVoteResult) -> String {
        let tally = &result.tally;
        let next = match &result.outcome {
            CommitteeOutcome::Advanced(location) => {
                format!(" -> {}", Self::location_label(location))
            }
            CommitteeOutcome::Approved => " -> lei aprovada".to_string(),
            CommitteeOutcome::Archived => " -> arquivado".to_string(),
        };
        format!(
            "{} em {}: {}{} {}",
            result.code.to_string().bold(),
            result.committee,
            Self::verdict(result.passed()),
            next,
            format!(
                "[{} membros, {} interessados, {} governistas, minimo {}]",
                tally.total,
                tally.interested,
                tally.government,
                tally.threshold()
            )
            .dimmed()
        )
    }

    fn plenary_vote(&self, result: &PlenaryVoteResult) -> String {
        let next = match result.outcome {
            PlenaryOutcome::NextRound(round) => {
                format!(" -> {}", Self::location_label(&Location::Plenary(round)))
            }
            PlenaryOutcome::Approved => " -> lei aprovada".to_string(),
            PlenaryOutcome::Rejected => String::new(),
        };
        format!(
            "{} em {}: {}{} {}",
            result.code.to_string().bold(),
            Self::location_label(&Location::Plenary(result.round)),
            Self::verdict(result.passed()),
            next,
            format!(
                "[{} de {} presentes, {}]",
                result.tally.favorable,
                result.tally.present,
                result.rule.description()
            )
            .dimmed()
        )
    }

    fn trail(&self, _code: &ProposalCode, trail: &[TrailEntry]) -> String {
        Self::trail_line(trail)
    }

    fn proposal(&self, proposal: &Proposal) -> String {
        Self::summary(proposal)
    }

    fn list(&self, proposals: &[Proposal]) -> String {
        if proposals.is_empty() {
            return "Nenhuma proposta registrada".dimmed().to_string();
        }
        proposals
            .iter()
            .map(Self::summary)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn error(&self, error: &TramitationError) -> String {
        format!("{} {}", format!("Error [{}]:", error.kind()).red().bold(), error)
    }

    fn usage_error(&self, message: &str) -> String {
        format!("{} {}", "Error [usage]:".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camara_domain::{CommitteeName, ProposalDraft, ProposalPayload};

    fn proposal(payload: ProposalPayload) -> Proposal {
        let kind = payload.kind();
        let draft = ProposalDraft::parse(
            "061222222-0",
            2016,
            "Dispoe sobre o SUS",
            "saude",
            "http://example.com",
            payload,
        )
        .unwrap();
        Proposal::new(ProposalCode::new(kind, 1, 2016), draft, CommitteeName::initial())
    }

    #[test]
    fn test_summary_of_new_pl() {
        let pl = proposal(ProposalPayload::pl(true));
        assert_eq!(
            ConsoleFormatter::summary(&pl),
            "Projeto de Lei - PL 1/2016 - 061222222-0 - Dispoe sobre o SUS - Conclusiva - EM VOTACAO (CCJC)"
        );
    }

    #[test]
    fn test_summary_lists_articles() {
        let pec = proposal(ProposalPayload::pec("7, 8").unwrap());
        assert_eq!(
            ConsoleFormatter::summary(&pec),
            "Projeto de Emenda Constitucional - PEC 1/2016 - 061222222-0 - Dispoe sobre o SUS - 7, 8 - EM VOTACAO (CCJC)"
        );
    }

    #[test]
    fn test_trail_line() {
        let mut pec = proposal(ProposalPayload::pec("7").unwrap());
        pec.resolve_stage(VoteStatus::Approved).unwrap();
        pec.enter_stage(Location::Plenary(PlenaryRound::First)).unwrap();
        pec.resolve_stage(VoteStatus::Approved).unwrap();
        pec.enter_stage(Location::Plenary(PlenaryRound::Second)).unwrap();

        assert_eq!(
            ConsoleFormatter::trail_line(pec.trail()),
            "CCJC (APROVADO), Plenario - 1o turno (APROVADO), Plenario - 2o turno (EM VOTACAO)"
        );
        assert!(ConsoleFormatter::summary(&pec).ends_with("EM VOTACAO (Plenario - 2o turno)"));
    }

    #[test]
    fn test_registration_and_empty_list_labels() {
        colored::control::set_override(false);
        let code = ProposalCode::new(ProposalKind::Pl, 1, 2016);
        assert_eq!(ConsoleFormatter.registered(&code), "Registrado PL 1/2016");
        assert_eq!(ConsoleFormatter.list(&[]), "Nenhuma proposta registrada");
    }

    #[test]
    fn test_committee_rejection_reads_archived() {
        let mut pl = proposal(ProposalPayload::pl(false));
        pl.resolve_stage(VoteStatus::Rejected).unwrap();
        assert!(ConsoleFormatter::summary(&pl).ends_with(" - ARQUIVADO"));
        assert_eq!(ConsoleFormatter::trail_line(pl.trail()), "CCJC (REJEITADO)");
    }
}
