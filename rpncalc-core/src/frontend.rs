use tracing::info;

use crate::engine::{Engine, Step};
use crate::errors::*;

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user asked to quit.
    Quit,
    /// Too many consecutive invalid inputs.
    Shutdown,
    /// The input source ran dry.
    InputClosed,
}

/// Input acquisition and rendering for one kind of user interface
///
/// Implementors only talk to the user; `run` drives the engine:
/// read -> classify -> validate -> process -> display, until the user quits, the input ends
/// or the invalid input limit is reached.
pub trait Frontend {
    /// Next line of input, or `None` once there is no more.
    fn read_input(&mut self) -> Result<Option<String>>;

    fn show_stack(&mut self, engine: &Engine) -> Result<()>;

    fn show_error(&mut self, error: &Error) -> Result<()>;

    fn show_help(&mut self) -> Result<()>;

    fn finish(&mut self, _outcome: Outcome) -> Result<()> {
        Ok(())
    }

    fn run(&mut self, engine: &mut Engine) -> Result<Outcome> {
        let outcome = loop {
            let line = match self.read_input()? {
                Some(line) => line,
                None => break Outcome::InputClosed,
            };

            match engine.step(line.trim()) {
                Step::Applied => self.show_stack(engine)?,
                Step::Help => self.show_help()?,
                Step::Quit => break Outcome::Quit,
                Step::Rejected(e) => {
                    self.show_error(&e)?;
                    if engine.limit_reached() {
                        break Outcome::Shutdown;
                    }
                }
            }
        };

        info!(?outcome, "session finished");
        self.finish(outcome)?;
        Ok(outcome)
    }
}
