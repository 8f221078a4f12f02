use tracing::{debug, info};

use crate::config::Config;
use crate::errors::*;
use crate::number::Number;
use crate::operation::Operation;
use crate::parsing::{classify, Token};

/// A token that passed validation and may be applied to the stack without further checks
///
/// Only [`Engine::validate`] hands these out:
///
/// ```compile_fail
/// use rpncalc_core::{Instruction, Number};
/// let forged = Instruction::Push(Number::Int(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instruction(Action);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Action {
    Push(Number),
    Apply(Operation),
}

impl Instruction {
    /// The operation to apply, or `None` for a push.
    pub fn operation(&self) -> Option<Operation> {
        match self.0 {
            Action::Push(_) => None,
            Action::Apply(op) => Some(op),
        }
    }
}

/// What happened to one line of input
#[derive(Debug)]
pub enum Step {
    /// The stack changed.
    Applied,
    Help,
    Quit,
    Rejected(Error),
}

/// Position of an element relative to the top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    X,
    Y,
    Depth(usize),
}

impl Label {
    /// `depth` counts from 1 at the top of the stack.
    pub fn from_depth(depth: usize) -> Self {
        match depth {
            1 => Label::X,
            2 => Label::Y,
            d => Label::Depth(d),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Label::X => f.pad("x"),
            Label::Y => f.pad("y"),
            Label::Depth(d) => f.pad(&d.to_string()),
        }
    }
}

/// The RPN calculator: a bounded operand stack plus the count of consecutive invalid inputs
#[derive(Debug, Default)]
pub struct Engine {
    stack: Vec<Number>,
    config: Config,
    invalid_inputs: usize,
}

/// API
impl Engine {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Engine {
            stack: Vec::with_capacity(config.stack_limit),
            config,
            invalid_inputs: 0,
        }
    }

    /// Bottom first, top last.
    pub fn stack(&self) -> &[Number] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn invalid_inputs(&self) -> usize {
        self.invalid_inputs
    }

    pub fn limit_reached(&self) -> bool {
        self.invalid_inputs >= self.config.invalid_input_limit
    }

    /// Stack elements from bottom to top, each with its display label.
    pub fn labelled(&self) -> impl Iterator<Item = (Label, &Number)> {
        let len = self.stack.len();
        self.stack
            .iter()
            .enumerate()
            .map(move |(i, n)| (Label::from_depth(len - i), n))
    }

    /// Classify, validate and apply one trimmed line of input.
    pub fn step(&mut self, raw: &str) -> Step {
        let token = classify(raw);
        match self.validate(&token) {
            Ok(instruction) if instruction.operation() == Some(Operation::Help) => Step::Help,
            Ok(instruction) if instruction.operation() == Some(Operation::Quit) => Step::Quit,
            Ok(instruction) => {
                self.process(instruction);
                Step::Applied
            }
            Err(e) => {
                debug!(raw, error = %e, count = self.invalid_inputs, "rejected input");
                if self.limit_reached() {
                    info!(limit = self.config.invalid_input_limit, "invalid input limit reached");
                }
                Step::Rejected(e)
            }
        }
    }

    /// Check a token against the current stack.
    ///
    /// Every call counts as an invalid input until the token turns out to be valid, in which case
    /// the count starts over from zero.
    pub fn validate(&mut self, token: &Token) -> Result<Instruction> {
        self.invalid_inputs = (self.invalid_inputs + 1).min(self.config.invalid_input_limit);
        let verdict = self.check(token);
        if verdict.is_ok() {
            self.invalid_inputs = 0;
        }
        verdict
    }

    /// Apply a validated instruction.
    pub fn process(&mut self, instruction: Instruction) {
        match instruction.0 {
            Action::Push(n) => self.stack.push(n),
            Action::Apply(op) => self.apply(op),
        }
    }
}

/// Internals
impl Engine {
    fn check(&self, token: &Token) -> Result<Instruction> {
        let depth = self.stack.len();

        let op = match token {
            Token::Number(n) => {
                if depth >= self.config.stack_limit {
                    bail!(ErrorKind::StackFull(self.config.stack_limit));
                }
                return Ok(Instruction(Action::Push(*n)));
            }
            Token::Operation(name) => Operation::lookup(name)
                .ok_or_else(|| ErrorKind::UnsupportedOperation(name.clone()))?,
        };

        if depth == 0 && !op.is_command() {
            bail!(ErrorKind::EmptyStack);
        }
        if depth < op.arity() {
            bail!(ErrorKind::InsufficientOperands(op.name().to_string()));
        }
        if op == Operation::Divide && self.stack.last().map_or(false, Number::is_zero) {
            bail!(ErrorKind::DivisionByZero);
        }

        Ok(Instruction(Action::Apply(op)))
    }

    fn apply(&mut self, op: Operation) {
        use Operation::*;
        debug_assert!(self.stack.len() >= op.arity());
        debug!(%op, depth = self.stack.len(), "apply");

        match op {
            Add => self.binary(|y, x| y + x),
            Subtract => self.binary(|y, x| y - x),
            Multiply => self.binary(|y, x| y * x),
            Divide => self.binary(|y, x| y / x),
            Clear => self.stack.clear(),
            Drop => {
                self.stack.pop();
            }
            Roll => {
                if let Some(x) = self.stack.pop() {
                    self.stack.insert(0, x);
                }
            }
            Swap => {
                if let [.., y, x] = self.stack.as_mut_slice() {
                    std::mem::swap(y, x);
                }
            }
            // intercepted by the front end
            Help | Quit => {}
        }
    }

    /// Replace `y x` with `f(y, x)`; `x` is the top of the stack.
    fn binary(&mut self, f: impl Fn(Number, Number) -> Number) {
        if let [.., y, x] = *self.stack {
            let n = self.stack.len();
            self.stack.truncate(n - 2);
            self.stack.push(f(y, x));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(engine: &mut Engine, inputs: &[&str]) {
        for input in inputs {
            match engine.step(input) {
                Step::Rejected(e) => panic!("{:?} rejected: {}", input, e),
                _ => {}
            }
        }
    }

    fn rejection(engine: &mut Engine, input: &str) -> ErrorKind {
        match engine.step(input) {
            Step::Rejected(Error(kind, _)) => kind,
            other => panic!("{:?} was accepted: {:?}", input, other),
        }
    }

    #[test]
    fn addition() {
        let mut engine = Engine::new();
        run(&mut engine, &["3", "4", "+"]);
        engine.assert_stack(&[7]);
    }

    #[test]
    fn operand_order() {
        let mut engine = Engine::new();
        run(&mut engine, &["10", "4", "-"]);
        engine.assert_stack(&[6]);
        run(&mut engine, &["3", "/"]);
        engine.assert_stack(&[2]);
        assert!(matches!(engine.stack()[0], Number::Float(_)));
        run(&mut engine, &["5", "*"]);
        engine.assert_stack(&[10]);
    }

    #[test]
    fn swap() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "3", "swap"]);
        engine.assert_stack(&[1, 3, 2]);
        run(&mut engine, &["S"]);
        engine.assert_stack(&[1, 2, 3]);
    }

    #[test]
    fn roll() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "3", "roll"]);
        engine.assert_stack(&[3, 1, 2]);
        run(&mut engine, &["r"]);
        engine.assert_stack(&[2, 3, 1]);
    }

    #[test]
    fn drop_and_clear() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "3", "drop"]);
        engine.assert_stack(&[1, 2]);
        run(&mut engine, &["c"]);
        assert!(engine.is_empty());
        run(&mut engine, &["5", "d"]);
        assert!(engine.is_empty());
    }

    #[test]
    fn drop_on_empty_stack() {
        let mut engine = Engine::new();
        assert!(matches!(rejection(&mut engine, "drop"), ErrorKind::EmptyStack));
        assert!(engine.is_empty());
        assert!(matches!(rejection(&mut engine, "+"), ErrorKind::EmptyStack));
    }

    #[test]
    fn unsupported_operation_wins_over_empty_stack() {
        let mut engine = Engine::new();
        match rejection(&mut engine, "Sqrt") {
            ErrorKind::UnsupportedOperation(name) => assert_eq!(name, "sqrt"),
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(rejection(&mut engine, ""), ErrorKind::UnsupportedOperation(_)));
    }

    #[test]
    fn single_operand() {
        let mut engine = Engine::new();
        run(&mut engine, &["5"]);
        for op in &["+", "-", "*", "/", "swap", "roll"] {
            assert!(matches!(
                rejection(&mut engine, op),
                ErrorKind::InsufficientOperands(_)
            ));
        }
        engine.assert_stack(&[5]);
    }

    #[test]
    fn stack_full() {
        let mut engine = Engine::with_config(Config::new(4, 3).unwrap());
        run(&mut engine, &["1", "2", "3", "4"]);
        assert!(matches!(rejection(&mut engine, "5"), ErrorKind::StackFull(4)));
        engine.assert_stack(&[1, 2, 3, 4]);
        run(&mut engine, &["+"]);
        engine.assert_stack(&[1, 2, 7]);
    }

    #[test]
    fn default_capacity() {
        let mut engine = Engine::new();
        for i in 0..100 {
            let input = i.to_string();
            run(&mut engine, &[input.as_str()]);
        }
        assert_eq!(engine.len(), 100);
        assert!(matches!(rejection(&mut engine, "1"), ErrorKind::StackFull(100)));
    }

    #[test]
    fn division_by_zero() {
        let mut engine = Engine::new();
        run(&mut engine, &["5", "0"]);
        assert!(matches!(rejection(&mut engine, "/"), ErrorKind::DivisionByZero));
        engine.assert_stack(&[5, 0]);

        let mut engine = Engine::new();
        run(&mut engine, &["5", "0.0"]);
        assert!(matches!(rejection(&mut engine, "/"), ErrorKind::DivisionByZero));

        let mut engine = Engine::new();
        run(&mut engine, &["0", "5", "/"]);
        engine.assert_stack(&[0]);
    }

    #[test]
    fn commands_are_valid_on_empty_stack() {
        let mut engine = Engine::new();
        assert!(matches!(engine.step("help"), Step::Help));
        assert!(matches!(engine.step("Q"), Step::Quit));
        assert!(engine.is_empty());
    }

    #[test]
    fn invalid_input_counter() {
        let mut engine = Engine::with_config(Config::new(10, 3).unwrap());
        rejection(&mut engine, "foo");
        rejection(&mut engine, "+");
        assert_eq!(engine.invalid_inputs(), 2);
        assert!(!engine.limit_reached());

        run(&mut engine, &["1"]);
        assert_eq!(engine.invalid_inputs(), 0);

        rejection(&mut engine, "bar");
        rejection(&mut engine, "+");
        rejection(&mut engine, "baz");
        assert!(engine.limit_reached());
        rejection(&mut engine, "baz");
        assert_eq!(engine.invalid_inputs(), 3);
    }

    #[test]
    fn help_resets_counter() {
        let mut engine = Engine::new();
        rejection(&mut engine, "nope");
        engine.step("h");
        assert_eq!(engine.invalid_inputs(), 0);
    }

    #[test]
    fn validate_does_not_mutate_stack() {
        let mut engine = Engine::new();
        let instruction = engine.validate(&classify("7")).unwrap();
        assert!(engine.is_empty());
        assert_eq!(instruction.operation(), None);
        engine.process(instruction);
        engine.assert_stack(&[7]);
    }

    #[test]
    fn instructions_only_come_from_validation() {
        let mut engine = Engine::with_config(Config::new(2, 3).unwrap());
        let mut accepted = vec![];
        for raw in &["1", "2", "3", "swap", "4"] {
            if let Ok(instruction) = engine.validate(&classify(raw)) {
                engine.process(instruction);
                accepted.push(*raw);
            }
            assert!(engine.len() <= 2);
        }
        assert_eq!(accepted, vec!["1", "2", "swap"]);
        engine.assert_stack(&[2, 1]);

        let mut empty = Engine::new();
        assert!(empty.validate(&classify("swap")).is_err());
        assert!(empty.is_empty());
    }

    #[test]
    fn validated_operations_carry_their_operation() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2"]);
        let instruction = engine.validate(&classify("/")).unwrap();
        assert_eq!(instruction.operation(), Some(Operation::Divide));
        engine.process(instruction);
        assert_eq!(engine.stack(), &[Number::Float(0.5)]);
    }

    #[test]
    fn labels() {
        let mut engine = Engine::new();
        run(&mut engine, &["1", "2", "3", "4"]);
        let labels: Vec<_> = engine.labelled().map(|(l, _)| l.to_string()).collect();
        assert_eq!(labels, vec!["4", "3", "y", "x"]);
    }
}
