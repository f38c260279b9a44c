use std::fmt::Display;

use indexmap::IndexMap;
use itertools::Itertools;

use crate::{
    error::EvaluationError,
    types::{BinaryConnective, Formula, PropositionalVariable, VariableList},
};

/// Truth values of the variables for a single evaluation.
///
/// Built once per assignment and read-only afterwards.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Environment(IndexMap<PropositionalVariable, bool>);

impl Environment {
    /// Pairs every variable with the value at the same position of `assignment`.
    pub fn new(variables: &VariableList, assignment: &[bool]) -> Self {
        variables
            .iter()
            .copied()
            .zip(assignment.iter().copied())
            .collect()
    }

    pub fn get(&self, variable: &PropositionalVariable) -> Option<bool> {
        self.0.get(variable).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<IndexMap<PropositionalVariable, bool>> for Environment {
    fn from(mapping: IndexMap<PropositionalVariable, bool>) -> Self {
        Environment(mapping)
    }
}

impl FromIterator<(PropositionalVariable, bool)> for Environment {
    fn from_iter<T: IntoIterator<Item = (PropositionalVariable, bool)>>(iter: T) -> Self {
        Environment(iter.into_iter().collect())
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bindings = self
            .0
            .iter()
            .map(|(variable, value)| format!("{variable}={}", u8::from(*value)))
            .join(", ");

        write!(f, "{{{bindings}}}")
    }
}

pub trait Evaluate {
    fn evaluate(&self, environment: &Environment) -> Result<bool, EvaluationError>;
}

impl Evaluate for PropositionalVariable {
    fn evaluate(&self, environment: &Environment) -> Result<bool, EvaluationError> {
        environment
            .get(self)
            .ok_or(EvaluationError::UnboundVariable { variable: *self })
    }
}

impl Evaluate for Formula {
    /// The right operand of a binary connective is only evaluated when the left
    /// one does not already decide the result.
    fn evaluate(&self, environment: &Environment) -> Result<bool, EvaluationError> {
        match self {
            Formula::Constant(value) => Ok(*value),
            Formula::Variable(p) => p.evaluate(environment),
            Formula::Negation(p) => Ok(!p.evaluate(environment)?),
            Formula::Binary {
                connective,
                left,
                right,
            } => {
                let left = left.evaluate(environment)?;

                match (connective, left) {
                    (BinaryConnective::Disjunction, true) => Ok(true),
                    (BinaryConnective::Conjunction, false) => Ok(false),
                    // a => b is -a + b
                    (BinaryConnective::Implication, false) => Ok(true),
                    _ => right.evaluate(environment),
                }
            }
        }
    }
}
