use booltable::combinator::{char_match, literal_match, many, or_else, sequence};
use winnow::Parser;

fn letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

#[test]
fn literal_match_consumes_token() {
    let mut input = "=>b";
    assert_eq!(literal_match("=>").parse_next(&mut input).ok(), Some("=>"));
    assert_eq!(input, "b");

    let mut input = "=b";
    assert!(literal_match("=>").parse_next(&mut input).is_err());
    assert_eq!(input, "=b");
}

#[test]
fn char_match_consumes_one_character() {
    let mut input = "a!";
    assert_eq!(char_match(letter).parse_next(&mut input).ok(), Some('a'));
    assert_eq!(input, "!");

    let mut input = "1!";
    assert!(char_match(letter).parse_next(&mut input).is_err());
    assert_eq!(input, "1!");
}

#[test]
fn or_else_tries_second_on_original_input() {
    let mut parser = or_else(literal_match("0"), literal_match("1"));

    let mut input = "1!";
    assert_eq!(parser.parse_next(&mut input).ok(), Some("1"));
    assert_eq!(input, "!");

    let mut input = "a!";
    assert!(parser.parse_next(&mut input).is_err());
    assert_eq!(input, "a!");
}

#[test]
fn sequence_leaves_input_untouched_on_failure() {
    let mut parser = sequence(literal_match("("), char_match(letter));

    let mut input = "(a)";
    assert_eq!(parser.parse_next(&mut input).ok(), Some(("(", 'a')));
    assert_eq!(input, ")");

    let mut input = "(1)";
    assert!(parser.parse_next(&mut input).is_err());
    assert_eq!(input, "(1)");
}

#[test]
fn many_collects_until_failure() {
    let mut parser = many(char_match(letter));

    let mut input = "abc!";
    assert_eq!(parser.parse_next(&mut input).ok(), Some(vec!['a', 'b', 'c']));
    assert_eq!(input, "!");

    let mut input = "1";
    assert_eq!(parser.parse_next(&mut input).ok(), Some(vec![]));
    assert_eq!(input, "1");
}

#[test]
fn many_stops_before_incomplete_sequence() {
    let mut parser = many(sequence(literal_match("+"), char_match(letter)));

    let mut input = "+a+b+";
    assert_eq!(
        parser.parse_next(&mut input).ok(),
        Some(vec![("+", 'a'), ("+", 'b')])
    );
    assert_eq!(input, "+");
}
