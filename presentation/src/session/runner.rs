//! Executes session commands against the engine

use super::command::{HELP, SessionCommand};
use crate::output::formatter::OutputFormatter;
use camara_application::{
    CommitteeDirectory, PersonDirectory, TramitationEngine, VoteCommitteeInput, VotePlenaryInput,
};
use tracing::debug;

/// What a line produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Blank line or comment
    Nothing,
    Output(String),
    /// The command failed; the session goes on
    Failure(String),
    Quit,
}

pub struct SessionRunner<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> {
    engine: TramitationEngine<P, C>,
    formatter: Box<dyn OutputFormatter>,
}

impl<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> SessionRunner<P, C> {
    pub fn new(engine: TramitationEngine<P, C>, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { engine, formatter }
    }

    pub fn engine(&self) -> &TramitationEngine<P, C> {
        &self.engine
    }

    /// Parse and run one line
    pub async fn run_line(&self, line: &str) -> Reply {
        match SessionCommand::parse_line(line) {
            Ok(Some(command)) => self.run(command).await,
            Ok(None) => Reply::Nothing,
            Err(message) => Reply::Failure(self.formatter.usage_error(&message)),
        }
    }

    pub async fn run(&self, command: SessionCommand) -> Reply {
        debug!("Running {:?}", command);
        let f = &self.formatter;

        let result = match command {
            SessionCommand::Register { kind } => self
                .engine
                .register(kind.into_input())
                .await
                .map(|code| f.registered(&code)),
            SessionCommand::VoteCommittee { code, mode, next } => self
                .engine
                .vote_committee(VoteCommitteeInput::new(code, mode, next))
                .await
                .map(|result| f.committee_vote(&result)),
            SessionCommand::VotePlenary {
                code,
                favorable,
                present,
                mode,
            } => self
                .engine
                .vote_plenary(VotePlenaryInput::new(code, favorable, present, mode))
                .await
                .map(|result| f.plenary_vote(&result)),
            SessionCommand::Trail { code } => self
                .engine
                .trail(&code)
                .await
                .map(|trail| f.trail(&code, &trail)),
            SessionCommand::Show { code } => self
                .engine
                .show(&code)
                .await
                .map(|proposal| f.proposal(&proposal)),
            SessionCommand::List => Ok(f.list(&self.engine.list().await)),
            SessionCommand::Help => Ok(HELP.to_string()),
            SessionCommand::Quit => return Reply::Quit,
        };

        match result {
            Ok(output) => Reply::Output(output),
            Err(e) => Reply::Failure(f.error(&e)),
        }
    }
}
