use crate::either::Either;
use crate::error::{ErrorItem, StackTrace};
use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};
use std::borrow::Cow;

/// Parser that matches an exact string character by character
///
/// A mismatch is reported at the first differing character. If some leading
/// characters did match, the failure is committed: the input clearly went
/// down this path, so an enclosing `or` will not try its other branch.
#[derive(Debug, Clone)]
pub struct StringParser {
    expected: Cow<'static, str>,
}

impl StringParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// The scope reported on failure, the expected text in single quotes
    pub fn scope(&self) -> String {
        format!("'{}'", self.expected)
    }
}

/// Byte index in `expected` of the first character `input` does not match
fn first_mismatch(expected: &str, input: &str) -> Option<usize> {
    let mut actual = input.chars();
    expected
        .char_indices()
        .find(|&(_, ch)| actual.next() != Some(ch))
        .map(|(index, _)| index)
}

impl<'code> Parser<'code> for StringParser {
    type Output = &'code str;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let remaining = state.remaining();
        match first_mismatch(&self.expected, remaining) {
            None => {
                let len = self.expected.len();
                Either::Right(Success::new(&remaining[..len], len))
            }
            Some(index) => Either::Left(StackTrace::new(
                state.advance_by(index),
                ErrorItem::expected(self.scope()),
                index != 0,
            )),
        }
    }
}

/// Convenience function to create a StringParser
pub fn string(expected: impl Into<Cow<'static, str>>) -> StringParser {
    StringParser::new(expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::run;

    fn stack_of(trace: &StackTrace<'_>) -> Vec<(usize, String)> {
        trace
            .stack()
            .into_iter()
            .map(|segment| (segment.offset(), segment.label))
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let success = run(&string("aa"), "aa").into_result().unwrap();
        assert_eq!(success.value, "aa");
        assert_eq!(success.consumed, 2);
    }

    #[test]
    fn test_partial_match_with_remaining() {
        let success = run(&string("aa"), "aaa").into_result().unwrap();
        assert_eq!(success.value, "aa");
        assert_eq!(success.consumed, 2);
    }

    #[test]
    fn test_empty_string() {
        let success = run(&string(""), "aaa").into_result().unwrap();
        assert_eq!(success.value, "");
        assert_eq!(success.consumed, 0);
    }

    #[test]
    fn test_mismatch_first_char_is_uncommitted() {
        let trace = run(&string("ab"), "bbb").into_result().unwrap_err();
        assert!(!trace.is_committed());
        assert_eq!(
            stack_of(&trace),
            vec![(0, "expected".to_string()), (0, "'ab'".to_string())]
        );
    }

    #[test]
    fn test_mismatch_middle_char_is_committed() {
        let trace = run(&string("ab"), "aaa").into_result().unwrap_err();
        assert!(trace.is_committed());
        assert_eq!(
            stack_of(&trace),
            vec![(1, "expected".to_string()), (1, "'ab'".to_string())]
        );

        let trace = run(&string("aaa"), "aab").into_result().unwrap_err();
        assert!(trace.is_committed());
        assert_eq!(trace.offset(), 2);
        assert_eq!(trace.error().scope, "'aaa'");
    }

    #[test]
    fn test_insufficient_input() {
        let trace = run(&string("aaa"), "aa").into_result().unwrap_err();
        assert!(trace.is_committed());
        assert_eq!(
            stack_of(&trace),
            vec![(2, "expected".to_string()), (2, "'aaa'".to_string())]
        );
    }

    #[test]
    fn test_empty_input() {
        let trace = run(&string("hello"), "").into_result().unwrap_err();
        assert!(!trace.is_committed());
        assert_eq!(trace.offset(), 0);
    }

    #[test]
    fn test_unicode_string() {
        let success = run(&string("こんにちは"), "こんにちは世界").into_result().unwrap();
        assert_eq!(success.value, "こんにちは");
        assert_eq!(success.consumed, "こんにちは".len());

        // the failure offset lands on the differing character's byte index
        let trace = run(&string("こんにちは"), "こんばんは").into_result().unwrap_err();
        assert_eq!(trace.offset(), "こん".len());
        assert!(trace.is_committed());
    }

    #[test]
    fn test_matches_at_later_offset() {
        let parser = string("from");
        let state = State::at("select * from t", 9);
        let success = parser.parse(state).into_result().unwrap();
        assert_eq!(success.value, "from");
        assert_eq!(success.consumed, 4);
    }
}
