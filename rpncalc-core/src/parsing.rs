use tracing::debug;

use crate::number::Number;

/// One classified unit of user input
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(Number),
    /// Lowercased; may name an operation the calculator does not support.
    Operation(String),
}

/// Classify a trimmed input string as a number or an operation name.
pub fn classify(raw: &str) -> Token {
    let token = if let Ok(i) = raw.parse::<i128>() {
        Token::Number(Number::Int(i))
    } else if let Ok(f) = raw.parse::<f64>() {
        Token::Number(Number::normalized(f))
    } else {
        Token::Operation(raw.to_lowercase())
    };
    debug!(raw, ?token, "classified input");
    token
}
