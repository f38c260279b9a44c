pub mod analysis;
pub mod combinator;
pub mod error;
pub mod evaluate;
pub mod log;
pub mod parser;
pub mod render;
pub mod table;
pub mod types;

pub use error::{Error, EvaluationError, ParseError};
pub use parser::parse;
pub use table::{build_table, build_table_with_limit, TruthTable};
