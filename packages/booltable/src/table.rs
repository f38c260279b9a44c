use std::fmt::Display;

use serde::Serialize;

use crate::{
    analysis::arrange,
    error::{Error, EvaluationError},
    evaluate::{Environment, Evaluate},
    log::targets::TABLE,
    parser::parse,
    render,
    types::{Formula, VariableList},
};

/// One truth value per variable, positionally matching a [`VariableList`].
pub type Assignment = Vec<bool>;

/// All `2^n` assignments of `n` variables in binary counting order.
///
/// The first value is the most significant bit, so the first variable changes
/// slowest: `000, 001, 010, ..., 111`. `n` must be smaller than `usize::BITS`.
pub fn enumerate(n: usize) -> impl Iterator<Item = Assignment> {
    (0..1usize << n).map(move |i| {
        (0..n)
            .map(|bit| (i >> (n - 1 - bit)) & 1 == 1)
            .collect::<Assignment>()
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropositionAttributes {
    pub valid: bool,
    pub satisfiable: bool,
}

impl Display for PropositionAttributes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let yes_no = |value: bool| if value { "yes" } else { "no" };

        write!(
            f,
            "valid: {}, satisfiable: {}",
            yes_no(self.valid),
            yes_no(self.satisfiable)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    pub variables: VariableList,
    pub columns: Vec<Formula>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<bool>>,
}

impl TruthTable {
    pub fn new(formula: &Formula) -> Result<Self, EvaluationError> {
        let variables = formula.variables();
        let columns = arrange(&formula.nodes(), &variables);
        let header = columns.iter().map(|p| p.to_string()).collect::<Vec<_>>();

        log::debug!(target: TABLE, "Variables: {variables}");
        log::debug!(target: TABLE, "Columns: {}", header.join(" "));

        let rows = enumerate(variables.len())
            .map(|assignment| {
                let environment = Environment::new(&variables, &assignment);
                log::trace!(target: TABLE, "Evaluating under {environment}");

                columns
                    .iter()
                    .map(|p| p.evaluate(&environment))
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TruthTable {
            variables,
            columns,
            header,
            rows,
        })
    }

    /// Validity and satisfiability of the whole formula, read off its column.
    pub fn get_attributes(&self) -> PropositionAttributes {
        let mut valid = true;
        let mut satisfiable = false;

        for value in self.rows.iter().filter_map(|row| row.last()) {
            valid &= value;
            satisfiable |= value;
        }

        PropositionAttributes { valid, satisfiable }
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render::markdown(self))
    }
}

/// Rejects formulas whose table would have more than `2^limit` rows.
pub fn check_variable_limit(formula: &Formula, limit: usize) -> Result<(), Error> {
    let count = formula.variables().len();

    if count > limit {
        return Err(Error::TooManyVariables { count, limit });
    }

    Ok(())
}

/// Parses `source` and builds its truth table.
pub fn build_table(source: &str) -> Result<TruthTable, Error> {
    let formula = parse(source)?;

    Ok(TruthTable::new(&formula)?)
}

/// Like [`build_table`], refusing formulas with more than `limit` variables.
pub fn build_table_with_limit(source: &str, limit: usize) -> Result<TruthTable, Error> {
    let formula = parse(source)?;
    check_variable_limit(&formula, limit)?;

    Ok(TruthTable::new(&formula)?)
}
