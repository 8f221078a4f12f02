use std::collections::VecDeque;

use crate::engine::Engine;
use crate::errors::*;
use crate::frontend::{Frontend, Outcome};

impl Engine {
    pub fn assert_stack(&self, expected: &[i64]) {
        assert_eq!(self.stack(), expected)
    }
}

#[derive(Debug, PartialEq)]
pub enum Shown {
    Stack(Vec<String>),
    Error(String),
    Help,
    Finished(Outcome),
}

/// Feeds canned input lines and records everything it was asked to show
pub struct ScriptedFrontend {
    input: VecDeque<String>,
    pub shown: Vec<Shown>,
}

impl ScriptedFrontend {
    pub fn new(input: &[&str]) -> Self {
        ScriptedFrontend {
            input: input.iter().map(|s| s.to_string()).collect(),
            shown: vec![],
        }
    }

    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    pub fn errors(&self) -> usize {
        self.shown
            .iter()
            .filter(|s| matches!(s, Shown::Error(_)))
            .count()
    }
}

impl Frontend for ScriptedFrontend {
    fn read_input(&mut self) -> Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn show_stack(&mut self, engine: &Engine) -> Result<()> {
        let lines = engine
            .labelled()
            .map(|(label, n)| format!("{}: {}", label, n))
            .collect();
        self.shown.push(Shown::Stack(lines));
        Ok(())
    }

    fn show_error(&mut self, error: &Error) -> Result<()> {
        self.shown.push(Shown::Error(error.to_string()));
        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        self.shown.push(Shown::Help);
        Ok(())
    }

    fn finish(&mut self, outcome: Outcome) -> Result<()> {
        self.shown.push(Shown::Finished(outcome));
        Ok(())
    }
}
