//! Session command grammar
//!
//! One command per line. Arguments are whitespace-separated; quote them
//! (`"PL 1/2016"`, `'Dispoe sobre o SUS'`) to keep spaces.

use camara_application::{PayloadInput, RegisterProposalInput};
use camara_domain::{AlignmentMode, NextLocation, ProposalCode};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "session", no_binary_name = true, disable_help_subcommand = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// A command typed at the prompt or read from a script
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Register a new proposal
    Register {
        #[command(subcommand)]
        kind: RegisterKind,
    },

    /// Vote a proposal in its current committee
    #[command(name = "vote-committee", alias = "votar-comissao")]
    VoteCommittee {
        code: ProposalCode,
        /// FREE, GOVERNMENT-ALIGNED or OPPOSITION
        mode: AlignmentMode,
        /// Next committee, `plenario`, or `-` to close a conclusive PL
        next: NextLocation,
    },

    /// Vote a proposal on the plenary floor
    #[command(name = "vote-plenary", alias = "votar-plenario")]
    VotePlenary {
        code: ProposalCode,
        favorable: usize,
        present: usize,
        mode: AlignmentMode,
    },

    /// Show the tramitation trail of a proposal
    #[command(alias = "tramitacao")]
    Trail { code: ProposalCode },

    /// Show a proposal summary
    #[command(alias = "exibir")]
    Show { code: ProposalCode },

    /// List every proposal
    List,

    /// Show the command list
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Fields shared by every kind of proposal
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ProposalArgs {
    /// Author DNI (`NNNNNNNNN-N`)
    pub author: String,
    pub year: i32,
    pub summary: String,
    /// Comma-separated interest tags
    pub interests: String,
    pub url: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RegisterKind {
    /// Ordinary bill
    Pl {
        #[command(flatten)]
        proposal: ProposalArgs,
        /// May be closed by a committee
        #[arg(long)]
        conclusive: bool,
    },
    /// Complementary bill
    Plp {
        #[command(flatten)]
        proposal: ProposalArgs,
        /// Comma-separated articles
        articles: String,
    },
    /// Constitutional amendment
    Pec {
        #[command(flatten)]
        proposal: ProposalArgs,
        /// Comma-separated articles
        articles: String,
    },
}

impl RegisterKind {
    pub fn into_input(self) -> RegisterProposalInput {
        let (proposal, payload) = match self {
            RegisterKind::Pl {
                proposal,
                conclusive,
            } => (proposal, PayloadInput::Pl { conclusive }),
            RegisterKind::Plp { proposal, articles } => (proposal, PayloadInput::Plp { articles }),
            RegisterKind::Pec { proposal, articles } => (proposal, PayloadInput::Pec { articles }),
        };
        RegisterProposalInput::new(
            proposal.author,
            proposal.year,
            proposal.summary,
            proposal.interests,
            proposal.url,
            payload,
        )
    }
}

impl SessionCommand {
    /// Parse one line; `Ok(None)` for blank lines and `#` comments
    pub fn parse_line(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let tokens = split_line(line)?;
        SessionLine::try_parse_from(tokens)
            .map(|parsed| Some(parsed.command))
            .map_err(|e| e.render().to_string().trim_end().to_string())
    }
}

/// Split a line on whitespace, keeping quoted segments together
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Command reference printed by `help`
pub const HELP: &str = r#"Commands:
  register pl  <author> <year> <summary> <interests> <url> [--conclusive]
  register plp <author> <year> <summary> <interests> <url> <articles>
  register pec <author> <year> <summary> <interests> <url> <articles>
  vote-committee <code> <mode> <next>      next: committee, plenario or -
  vote-plenary <code> <favorable> <present> <mode>
  trail <code>
  show <code>
  list
  help
  quit

Modes: FREE, GOVERNMENT-ALIGNED, OPPOSITION
Quote arguments with spaces: vote-committee "PL 1/2016" free plenario"#;
