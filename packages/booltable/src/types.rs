use std::fmt::Display;

use itertools::Itertools;
use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};
use termtree::Tree;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Serialize)]
pub struct PropositionalVariable(pub char);

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, EnumIter, IntoStaticStr, Serialize)]
pub enum BinaryConnective {
    #[strum(serialize = "*")]
    Conjunction,
    #[strum(serialize = "+")]
    Disjunction,
    #[strum(serialize = "=>")]
    Implication,
}

impl BinaryConnective {
    pub fn symbol(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Formula {
    Constant(bool),
    Variable(PropositionalVariable),
    Negation(Box<Formula>),
    Binary {
        connective: BinaryConnective,
        left: Box<Formula>,
        right: Box<Formula>,
    },
}

impl From<PropositionalVariable> for Formula {
    fn from(p: PropositionalVariable) -> Self {
        Formula::Variable(p)
    }
}

/// Sorted, duplicate-free variables of a formula.
///
/// The position of a variable in this list is also its position in every
/// assignment produced by [`crate::table::enumerate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariableList(pub Vec<PropositionalVariable>);

impl VariableList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropositionalVariable> {
        self.0.iter()
    }
}

impl Display for VariableList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

impl Formula {
    pub fn binary(connective: BinaryConnective, left: Formula, right: Formula) -> Self {
        Formula::Binary {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn symbol(&self) -> String {
        match self {
            Formula::Constant(value) => u8::from(*value).to_string(),
            Formula::Variable(p) => p.to_string(),
            Formula::Negation(_) => "-".to_owned(),
            Formula::Binary { connective, .. } => connective.symbol().to_owned(),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Formula::Variable(_))
    }

    pub fn get_tree(&self) -> Tree<String> {
        let symbol = self.symbol();

        match self {
            Formula::Constant(_) | Formula::Variable(_) => Tree::new(symbol),
            Formula::Negation(p) => Tree::new(symbol).with_leaves(vec![p.get_tree()]),
            Formula::Binary { left, right, .. } => {
                Tree::new(symbol).with_leaves(vec![left.get_tree(), right.get_tree()])
            }
        }
    }
}

impl Display for PropositionalVariable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for BinaryConnective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Canonical form: fully parenthesized binary connectives, bare negation.
impl Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Formula::Constant(value) => write!(f, "{}", u8::from(*value)),
            Formula::Variable(p) => write!(f, "{p}"),
            Formula::Negation(p) => write!(f, "-{p}"),
            Formula::Binary {
                connective,
                left,
                right,
            } => write!(f, "({left}{connective}{right})"),
        }
    }
}
