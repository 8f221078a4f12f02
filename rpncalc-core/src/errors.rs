error_chain! {
    errors {
        // input errors
        EmptyStack {
            description("empty stack")
            display("Stack is empty. Cannot perform operation.")
        }
        UnsupportedOperation(op: String) {
            description("unsupported operation")
            display("Entered operation not supported.")
        }
        InsufficientOperands(op: String) {
            description("insufficient operands")
            display("Cannot perform entered operation with only one element in stack.")
        }
        StackFull(limit: usize) {
            description("stack full")
            display("Stack is already at max capacity.")
        }
        DivisionByZero {
            description("division by zero")
            display("Cannot divide by zero.")
        }

        // setup errors
        InvalidConfig(t: String) {
            description("invalid configuration")
            display("Invalid Configuration: {}", t)
        }
    }
}
