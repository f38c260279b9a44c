//! Grammar-agnostic parsing primitives.
//!
//! Every combinator here is a [`winnow`] parser over any character stream
//! (a plain `&str`, or a [`winnow::Stateful`] one carrying parser state). A
//! failed parse is an ordinary backtracking error value; none of these ever
//! produce a cut error, so they can be freely nested inside alternatives.

use winnow::{
    combinator::{alt, repeat},
    error::ContextError,
    stream::{Compare, Stream, StreamIsPartial},
    token::{literal, one_of},
    ModalResult, Parser,
};

/// Consumes exactly `token` from the front of the input.
pub fn literal_match<I>(token: &'static str) -> impl Parser<I, <I as Stream>::Slice, ContextError>
where
    I: Stream + StreamIsPartial + Compare<&'static str>,
{
    literal(token)
}

/// Consumes a single character accepted by `predicate`.
pub fn char_match<I>(predicate: fn(char) -> bool) -> impl Parser<I, char, ContextError>
where
    I: Stream<Token = char> + StreamIsPartial,
{
    one_of(predicate)
}

/// Tries `first`, and `second` from the same starting point if `first` fails.
pub fn or_else<I, O>(
    first: impl Parser<I, O, ContextError>,
    second: impl Parser<I, O, ContextError>,
) -> impl Parser<I, O, ContextError>
where
    I: Stream,
{
    alt((first, second))
}

/// Runs `first` then `second` on what `first` left over.
///
/// If either fails the input is put back where it was before `first` ran.
pub fn sequence<I, O1, O2>(
    mut first: impl Parser<I, O1, ContextError>,
    mut second: impl Parser<I, O2, ContextError>,
) -> impl Parser<I, (O1, O2), ContextError>
where
    I: Stream,
{
    move |input: &mut I| -> ModalResult<(O1, O2)> {
        let start = input.checkpoint();
        let result = (first.by_ref(), second.by_ref()).parse_next(input);

        if result.is_err() {
            input.reset(&start);
        }

        result
    }
}

/// Applies `parser` until it fails. Only fails itself if `parser` cuts.
pub fn many<I, O>(
    parser: impl Parser<I, O, ContextError>,
) -> impl Parser<I, Vec<O>, ContextError>
where
    I: Stream,
{
    repeat(0.., parser)
}
