use crate::errors::*;

pub const DEFAULT_STACK_LIMIT: usize = 100;
pub const DEFAULT_INVALID_INPUT_LIMIT: usize = 5;

/// Engine limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of elements on the stack; at least 2 so every operation is reachable.
    pub stack_limit: usize,
    /// Consecutive invalid inputs that shut the calculator down.
    pub invalid_input_limit: usize,
}

impl Config {
    pub fn new(stack_limit: usize, invalid_input_limit: usize) -> Result<Self> {
        if stack_limit < 2 {
            bail!(ErrorKind::InvalidConfig(format!(
                "stack limit must be at least 2, got {}",
                stack_limit
            )));
        }
        if invalid_input_limit == 0 {
            bail!(ErrorKind::InvalidConfig(
                "invalid input limit must be at least 1".to_string()
            ));
        }
        Ok(Config {
            stack_limit,
            invalid_input_limit,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stack_limit: DEFAULT_STACK_LIMIT,
            invalid_input_limit: DEFAULT_INVALID_INPUT_LIMIT,
        }
    }
}
