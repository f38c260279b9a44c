use std::str::FromStr;

use winnow::{
    error::{ContextError, ErrMode},
    ModalResult, Parser, Stateful,
};

use crate::{
    combinator::{char_match, literal_match, many, or_else, sequence},
    error::ParseError,
    log::targets::PARSER,
    types::{BinaryConnective, Formula, PropositionalVariable},
};

/// Deepest allowed stack of open parentheses and negations.
pub const MAX_NESTING: usize = 128;

#[derive(Debug, Clone, Default)]
struct Nesting {
    depth: usize,
    /// Length of the input left when `MAX_NESTING` was hit.
    exceeded_at: Option<usize>,
}

type Input<'a> = Stateful<&'a str, Nesting>;

/// Parses a whole formula.
///
/// Whitespace anywhere in `source` is ignored. Binary connectives have no
/// precedence and associate to the left, so `1+a*b` reads as `(1+a)*b`.
/// Formulas nested deeper than [`MAX_NESTING`] are rejected, the remainder
/// starting right after the parenthesis or negation sign that went too deep.
pub fn parse(source: &str) -> Result<Formula, ParseError> {
    let stripped = source
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    log::debug!(target: PARSER, "Parsing \"{stripped}\"");

    let mut input = Input {
        input: stripped.as_str(),
        state: Nesting::default(),
    };

    let result = match expression.parse_next(&mut input) {
        Ok(formula) if input.input.is_empty() => Ok(formula),
        Ok(_) => Err(ParseError {
            remainder: input.input.to_owned(),
        }),
        Err(_) => {
            let remainder = match input.state.exceeded_at {
                Some(left) => &stripped[stripped.len() - left..],
                None => stripped.as_str(),
            };

            Err(ParseError {
                remainder: remainder.to_owned(),
            })
        }
    };

    match &result {
        Ok(formula) => log::debug!(target: PARSER, "Parsed {formula}"),
        Err(e) => log::debug!(target: PARSER, "{e}"),
    }

    result
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn expression(input: &mut Input) -> ModalResult<Formula> {
    sequence(primary, many(sequence(connective, primary)))
        .map(|(first, rest)| fold_left(first, rest))
        .parse_next(input)
}

fn fold_left(first: Formula, rest: Vec<(BinaryConnective, Formula)>) -> Formula {
    rest.into_iter().fold(first, |left, (connective, right)| {
        Formula::binary(connective, left, right)
    })
}

fn primary(input: &mut Input) -> ModalResult<Formula> {
    or_else(
        parenthesized_expression,
        or_else(negation, or_else(constant, variable)),
    )
    .parse_next(input)
}

fn parenthesized_expression(input: &mut Input) -> ModalResult<Formula> {
    sequence(
        literal_match("("),
        nested(sequence(expression, literal_match(")"))),
    )
    .map(|(_, (formula, _))| formula)
    .parse_next(input)
}

// Binds to the next primary only: `-a+b` is `(-a)+b`.
fn negation(input: &mut Input) -> ModalResult<Formula> {
    sequence(literal_match("-"), nested(primary))
        .map(|(_, p)| Formula::Negation(Box::new(p)))
        .parse_next(input)
}

fn constant(input: &mut Input) -> ModalResult<Formula> {
    or_else(
        literal_match("0").value(Formula::Constant(false)),
        literal_match("1").value(Formula::Constant(true)),
    )
    .parse_next(input)
}

fn variable(input: &mut Input) -> ModalResult<Formula> {
    char_match(|c| c.is_ascii_alphabetic())
        .map(|name| Formula::from(PropositionalVariable(name)))
        .parse_next(input)
}

fn connective(input: &mut Input) -> ModalResult<BinaryConnective> {
    or_else(
        literal_match("*").value(BinaryConnective::Conjunction),
        or_else(
            literal_match("+").value(BinaryConnective::Disjunction),
            literal_match("=>").value(BinaryConnective::Implication),
        ),
    )
    .parse_next(input)
}

/// Counts one level of nesting around the operand of an opening parenthesis or
/// negation sign, cutting the whole parse once the depth would exceed
/// [`MAX_NESTING`].
fn nested<'a, T>(
    mut parser: impl Parser<Input<'a>, T, ContextError>,
) -> impl FnMut(&mut Input<'a>) -> ModalResult<T> {
    move |input| {
        if input.state.depth == MAX_NESTING {
            input.state.exceeded_at = Some(input.input.len());
            return Err(ErrMode::Cut(ContextError::new()));
        }

        input.state.depth += 1;
        let result = parser.parse_next(input);
        input.state.depth -= 1;

        result
    }
}
