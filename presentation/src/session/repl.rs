//! REPL (Read-Eval-Print Loop) for the interactive session

use super::runner::{Reply, SessionRunner};
use camara_application::{CommitteeDirectory, PersonDirectory};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Interactive session REPL
pub struct SessionRepl<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> {
    runner: SessionRunner<P, C>,
    show_banner: bool,
}

impl<P: PersonDirectory + 'static, C: CommitteeDirectory + 'static> SessionRepl<P, C> {
    pub fn new(runner: SessionRunner<P, C>) -> Self {
        Self {
            runner,
            show_banner: true,
        }
    }

    /// Set whether to print the welcome banner
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("e-camara").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if self.show_banner {
            self.print_welcome();
        }

        loop {
            match rl.readline("camara> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);

                    match self.runner.run_line(line).await {
                        Reply::Nothing => {}
                        Reply::Output(text) => println!("{}", text),
                        Reply::Failure(text) => eprintln!("{}", text),
                        Reply::Quit => {
                            println!("Ate logo!");
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Ate logo!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        let config = self.runner.engine().config();
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        e-camara - Sessao de Tramitacao      │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Initial committee: {}", config.initial_committee);
        match config.house_size {
            Some(size) => println!("House size: {}", size),
            None => println!("House size: from roster"),
        }
        println!();
        println!("Type `help` for the command list, `quit` to leave.");
        println!();
    }
}
