use crate::either::Either;
use crate::error::{ErrorItem, GrammarError, StackTrace};
use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};
use regex::Regex;

/// Parser that matches a regular expression against the start of the remaining input
///
/// Failures are reported at the current offset and are never committed.
#[derive(Debug, Clone)]
pub struct PatternParser {
    /// `pattern` anchored to the start of the haystack
    anchored: Regex,
    pattern: String,
}

impl PatternParser {
    pub fn new(pattern: impl Into<String>) -> Result<Self, GrammarError> {
        let pattern = pattern.into();
        let invalid = |source| GrammarError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        };
        // validate on its own first so a pattern like `a)(b` cannot
        // reshape the anchoring group
        Regex::new(&pattern).map_err(invalid)?;
        let anchored = Regex::new(&format!(r"\A(?:{})", pattern)).map_err(invalid)?;
        Ok(PatternParser { anchored, pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn scope(&self) -> String {
        format!("expression matching regex {}", self.pattern)
    }
}

impl<'code> Parser<'code> for PatternParser {
    type Output = &'code str;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match self.anchored.find(state.remaining()) {
            Some(found) => Either::Right(Success::new(found.as_str(), found.end())),
            None => Either::Left(StackTrace::new(
                state,
                ErrorItem::expected(self.scope()),
                false,
            )),
        }
    }
}

/// Create a parser for a regular expression
///
/// # Errors
///
/// Returns [`GrammarError::InvalidPattern`] if `pattern` does not compile.
pub fn regex(pattern: impl Into<String>) -> Result<PatternParser, GrammarError> {
    PatternParser::new(pattern)
}

/// Parser for the shortest prefix of the line that ends with `terminator`
///
/// # Errors
///
/// Returns [`GrammarError::InvalidPattern`] only if the escaped terminator
/// exceeds the regex size limits.
pub fn thru(terminator: &str) -> Result<PatternParser, GrammarError> {
    PatternParser::new(format!(".*?{}", regex::escape(terminator)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::run;

    #[test]
    fn test_prefix_match() {
        let parser = regex(r"\d+").unwrap();

        let success = run(&parser, "11aa").into_result().unwrap();
        assert_eq!(success, Success::new("11", 2));

        let success = run(&parser, "11").into_result().unwrap();
        assert_eq!(success, Success::new("11", 2));
    }

    #[test]
    fn test_no_match_at_offset_is_uncommitted() {
        let parser = regex(r"\d+").unwrap();
        let trace = run(&parser, "aa11").into_result().unwrap_err();

        assert!(!trace.is_committed());
        assert_eq!(trace.offset(), 0);
        assert_eq!(trace.error().scope, r"expression matching regex \d+");
        assert_eq!(trace.stack()[0].label, "expected");
    }

    #[test]
    fn test_match_must_start_at_offset() {
        let parser = regex("[a-z]+").unwrap();
        let state = State::at("12 ab", 2);
        let trace = parser.parse(state).into_result().unwrap_err();
        assert_eq!(trace.offset(), 2);

        let success = parser.parse(state.advance_by(1)).into_result().unwrap();
        assert_eq!(success.value, "ab");
    }

    #[test]
    fn test_empty_match_succeeds_without_consuming() {
        let parser = regex("a*").unwrap();
        let success = run(&parser, "bbb").into_result().unwrap();
        assert_eq!(success, Success::new("", 0));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = regex("(unclosed").unwrap_err();
        assert!(matches!(err, GrammarError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
        assert!(err.to_string().contains("(unclosed"));

        assert!(regex("a)(b").is_err());
    }

    #[test]
    fn test_thru_stops_at_first_terminator() {
        let parser = thru(";").unwrap();
        let success = run(&parser, "select 1; select 2;").into_result().unwrap();
        assert_eq!(success.value, "select 1;");
        assert_eq!(success.consumed, 9);
    }

    #[test]
    fn test_thru_escapes_terminator() {
        let parser = thru("*/").unwrap();
        let success = run(&parser, "comment */ rest").into_result().unwrap();
        assert_eq!(success.value, "comment */");
    }

    #[test]
    fn test_thru_missing_terminator() {
        let parser = thru("*/").unwrap();
        let trace = run(&parser, "never closed").into_result().unwrap_err();
        assert!(!trace.is_committed());
        assert_eq!(trace.offset(), 0);
    }
}
