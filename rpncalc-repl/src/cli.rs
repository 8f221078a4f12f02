use std::fs;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::warn;

use rpncalc_core::errors::*;
use rpncalc_core::{Engine, Frontend, Outcome};

use crate::display::{format_stack, help_text};

const PROMPT: &str = "Operation/number: ";

/// Terminal front end with line editing and history
pub struct Cli {
    editor: DefaultEditor,
    help_file: Option<PathBuf>,
}

impl Cli {
    pub fn new(help_file: Option<PathBuf>) -> Result<Self> {
        let editor = DefaultEditor::new().chain_err(|| "cannot open terminal")?;
        Ok(Cli { editor, help_file })
    }

    pub fn banner(&self) {
        println!("REVERSE POLISH NOTATION (RPN) CALCULATOR");
        println!("At any time, enter \"help\" or \"h\" for help.\n");
    }

    fn load_help(&self) -> String {
        match &self.help_file {
            None => help_text(),
            Some(path) => fs::read_to_string(path).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "cannot read help file");
                help_text()
            }),
        }
    }
}

impl Frontend for Cli {
    fn read_input(&mut self) -> Result<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor
                        .add_history_entry(line.as_str())
                        .chain_err(|| "cannot record history")?;
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e).chain_err(|| "cannot read input"),
        }
    }

    fn show_stack(&mut self, engine: &Engine) -> Result<()> {
        println!("{}", format_stack(engine));
        Ok(())
    }

    fn show_error(&mut self, error: &Error) -> Result<()> {
        println!("ERROR: {}\n", error);
        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        println!("\n{}", self.load_help());
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::Quit => println!("\nApplication terminated.\n"),
            Outcome::Shutdown => println!("Invalid input limit exceeded. Shutting down.\n"),
            Outcome::InputClosed => println!(),
        }
        Ok(())
    }
}
