//! Runs a file of session commands

use super::runner::{Reply, SessionRunner};
use camara_application::{CommitteeDirectory, PersonDirectory};
use std::path::Path;
use tracing::{info, warn};

/// Counts of a finished script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed (blank lines and comments excluded)
    pub commands: usize,
    pub failures: usize,
    /// Stopped early on a failure with `fail_fast`
    pub aborted: bool,
}

/// Run every line of `script`, writing replies through `emit`
///
/// Failures are reported and the run continues unless `fail_fast` is set.
/// A `quit` line ends the run.
pub async fn run_lines<P, C>(
    runner: &SessionRunner<P, C>,
    script: &str,
    fail_fast: bool,
    mut emit: impl FnMut(&Reply),
) -> ScriptSummary
where
    P: PersonDirectory + 'static,
    C: CommitteeDirectory + 'static,
{
    let mut summary = ScriptSummary::default();

    for (number, line) in script.lines().enumerate() {
        let reply = runner.run_line(line).await;
        match &reply {
            Reply::Nothing => continue,
            Reply::Quit => break,
            Reply::Output(_) => summary.commands += 1,
            Reply::Failure(_) => {
                summary.commands += 1;
                summary.failures += 1;
                warn!("Line {} failed: {}", number + 1, line.trim());
            }
        }
        emit(&reply);
        if fail_fast && matches!(reply, Reply::Failure(_)) {
            summary.aborted = true;
            break;
        }
    }

    info!(
        "Script finished: {} commands, {} failures",
        summary.commands, summary.failures
    );
    summary
}

/// Run a script file, printing outputs to stdout and failures to stderr
pub async fn run_script<P, C>(
    runner: &SessionRunner<P, C>,
    path: &Path,
    fail_fast: bool,
) -> std::io::Result<ScriptSummary>
where
    P: PersonDirectory + 'static,
    C: CommitteeDirectory + 'static,
{
    let script = tokio::fs::read_to_string(path).await?;
    Ok(run_lines(runner, &script, fail_fast, |reply| match reply {
        Reply::Output(text) => println!("{}", text),
        Reply::Failure(text) => eprintln!("{}", text),
        Reply::Nothing | Reply::Quit => {}
    })
    .await)
}
