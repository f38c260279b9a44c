use std::collections::BTreeSet;

use crate::types::{Formula, PropositionalVariable, VariableList};

impl Formula {
    /// Every variable mentioned in the formula, in ascending order, each once.
    pub fn variables(&self) -> VariableList {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);

        VariableList(variables.into_iter().collect())
    }

    fn collect_variables(&self, variables: &mut BTreeSet<PropositionalVariable>) {
        match self {
            Formula::Constant(_) => {}
            Formula::Variable(p) => {
                variables.insert(*p);
            }
            Formula::Negation(p) => p.collect_variables(variables),
            Formula::Binary { left, right, .. } => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }

    /// All sub-formulas in pre-order: the node, then its left operand's nodes,
    /// then its right operand's nodes.
    ///
    /// A sub-formula written twice shows up twice.
    pub fn nodes(&self) -> Vec<&Formula> {
        let mut nodes = vec![];
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            nodes.push(node);

            match node {
                Formula::Constant(_) | Formula::Variable(_) => {}
                Formula::Negation(p) => stack.push(&**p),
                Formula::Binary { left, right, .. } => stack.extend([&**right, &**left]),
            }
        }

        nodes
    }
}

/// Orders the columns of a truth table.
///
/// The variables come first. They are followed by the remaining nodes with
/// bare variables dropped, in reverse pre-order, so that the innermost
/// sub-formulas precede the formulas containing them and the whole formula
/// comes last.
pub fn arrange(nodes: &[&Formula], variables: &VariableList) -> Vec<Formula> {
    variables
        .iter()
        .map(|&p| Formula::from(p))
        .chain(
            nodes
                .iter()
                .filter(|node| !node.is_variable())
                .rev()
                .map(|&node| node.clone()),
        )
        .collect()
}
