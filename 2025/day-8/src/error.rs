use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
pub enum CircuitError {
    #[error("Parse failed: {0}")]
    #[diagnostic(
        code(circuits::parse),
        help("every line must be three comma separated integers, e.g. `162,817,812`")
    )]
    Parse(String),

    /// Fewer than two junction boxes means there is no pair to connect.
    #[error("At least 2 junction boxes are required, got {count}")]
    #[diagnostic(code(circuits::invalid_input))]
    InvalidInput { count: usize },

    /// Every pair was tried and the boxes still form more than one circuit.
    #[error("Pairs exhausted with {remaining} circuits left unconnected")]
    #[diagnostic(code(circuits::non_convergence))]
    NonConvergence { remaining: usize },

    #[error("Connection budget must not be negative, got {budget}")]
    #[diagnostic(
        code(circuits::malformed_budget),
        help("pass 0 or a positive number of connections")
    )]
    MalformedBudget { budget: i64 },

    #[error("Junction box {index} has a coordinate beyond ±{max}")]
    #[diagnostic(code(circuits::out_of_range))]
    OutOfRange { index: usize, max: i64 },
}
