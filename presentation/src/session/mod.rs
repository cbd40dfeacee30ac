//! Session commands, their execution, and the two front ends (REPL and script)

pub mod command;
pub mod repl;
pub mod runner;
pub mod script;

pub use command::{RegisterKind, SessionCommand};
pub use repl::SessionRepl;
pub use runner::{Reply, SessionRunner};
pub use script::{ScriptSummary, run_script};
