/// Everything the calculator knows how to do besides pushing numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Clear,
    Drop,
    Roll,
    Swap,
    Help,
    Quit,
}

/// Dictionary entry: canonical name, aliases, operation
pub struct Entry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub op: Operation,
    pub summary: &'static str,
}

const DICTIONARY: &[Entry] = &[
    Entry { name: "+", aliases: &[], op: Operation::Add, summary: "y + x" },
    Entry { name: "-", aliases: &[], op: Operation::Subtract, summary: "y - x" },
    Entry { name: "*", aliases: &[], op: Operation::Multiply, summary: "y * x" },
    Entry { name: "/", aliases: &[], op: Operation::Divide, summary: "y / x" },
    Entry { name: "clear", aliases: &["c"], op: Operation::Clear, summary: "empty the stack" },
    Entry { name: "drop", aliases: &["d"], op: Operation::Drop, summary: "remove x" },
    Entry { name: "roll", aliases: &["r"], op: Operation::Roll, summary: "move x to the bottom" },
    Entry { name: "swap", aliases: &["s"], op: Operation::Swap, summary: "exchange x and y" },
    Entry { name: "help", aliases: &["h"], op: Operation::Help, summary: "show help" },
    Entry { name: "quit", aliases: &["q"], op: Operation::Quit, summary: "leave the calculator" },
];

impl Operation {
    /// Find the operation for a lowercase name or alias.
    pub fn lookup(name: &str) -> Option<Operation> {
        DICTIONARY
            .iter()
            .find(|e| e.name == name || e.aliases.iter().any(|a| *a == name))
            .map(|e| e.op)
    }

    pub fn names() -> &'static [Entry] {
        DICTIONARY
    }

    /// Minimum number of stack elements the operation needs.
    pub fn arity(self) -> usize {
        use Operation::*;
        match self {
            Help | Quit => 0,
            Clear | Drop => 1,
            Add | Subtract | Multiply | Divide | Roll | Swap => 2,
        }
    }

    /// Commands are handled by the front end and never touch the stack.
    pub fn is_command(self) -> bool {
        self.arity() == 0
    }

    pub fn name(self) -> &'static str {
        DICTIONARY
            .iter()
            .find(|e| e.op == self)
            .map(|e| e.name)
            .unwrap_or("?")
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
