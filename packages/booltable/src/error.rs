use derive_more::{Display, From};

use crate::types::PropositionalVariable;

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
#[display("failed to parse formula, unconsumed input: \"{remainder}\"")]
pub struct ParseError {
    /// The first suffix of the whitespace-free input that could not be consumed.
    pub remainder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum EvaluationError {
    #[display("no truth value bound to variable {variable}")]
    UnboundVariable { variable: PropositionalVariable },
}

#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error, From)]
pub enum Error {
    #[display("{_0}")]
    Parse(ParseError),
    #[display("{_0}")]
    Evaluation(EvaluationError),
    #[from(ignore)]
    #[display("formula has {count} variables, at most {limit} are allowed")]
    TooManyVariables { count: usize, limit: usize },
}
