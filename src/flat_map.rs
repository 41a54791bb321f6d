use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};

/// Continue a sequence after `first` succeeded at `state`
///
/// `next` runs where `first` stopped. Its failure becomes committed if
/// `first` consumed anything, and its success is credited with the bytes
/// `first` consumed. Every sequencing combinator goes through here.
pub(crate) fn continue_after<'code, A, B, F>(
    state: State<'code>,
    first: Success<A>,
    next: F,
) -> ParseResult<'code, B>
where
    F: FnOnce(A, State<'code>) -> ParseResult<'code, B>,
{
    let consumed = first.consumed;
    next(first.value, state.advance_by(consumed))
        .map_left(|trace| trace.append_committed(consumed != 0))
        .map(|success| success.advance_consumed(consumed))
}

/// Parser combinator that chooses the next parser based on the previous result
///
/// This is the context-sensitive form of sequencing: `binder` receives the
/// first parser's value and returns the parser to run next.
#[derive(Clone)]
pub struct FlatMap<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> FlatMap<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        FlatMap { parser, binder }
    }
}

impl<'code, P, F, P2> Parser<'code> for FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state).flat_map(|first| {
            continue_after(state, first, |value, next_state| {
                (self.binder)(value).parse(next_state)
            })
        })
    }
}

/// Convenience function to create a FlatMap parser
pub fn flat_map<'code, P, F, P2>(parser: P, binder: F) -> FlatMap<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> P2,
    P2: Parser<'code>,
{
    FlatMap::new(parser, binder)
}

/// Extension trait to add .flat_map() method support for parsers
pub trait FlatMapExt<'code>: Parser<'code> + Sized {
    fn flat_map<F, P2>(self, binder: F) -> FlatMap<Self, F>
    where
        F: Fn(Self::Output) -> P2,
        P2: Parser<'code>,
    {
        FlatMap::new(self, binder)
    }
}

/// Implement FlatMapExt for all parsers
impl<'code, P> FlatMapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::run;
    use crate::string::{StringParser, string};
    use crate::succeed::succeed;

    /// Expects the letter after the first character of `prev`
    fn alphabetically_next(prev: &str) -> StringParser {
        let next = prev.chars().next().and_then(|c| char::from_u32(c as u32 + 1));
        string(next.map(String::from).unwrap_or_default())
    }

    #[test]
    fn test_context_dependent_success() {
        let parser = flat_map(string("a"), alphabetically_next);
        let success = run(&parser, "abc").into_result().unwrap();
        assert_eq!(success.value, "b");
        assert_eq!(success.consumed, 2);
    }

    #[test]
    fn test_second_failure_after_consumption_is_committed() {
        let parser = flat_map(string("a"), alphabetically_next);
        let trace = run(&parser, "acb").into_result().unwrap_err();

        assert!(trace.is_committed());
        assert_eq!(trace.offset(), 1);
        assert_eq!(trace.error().scope, "'b'");
    }

    #[test]
    fn test_first_failure_is_returned_unchanged() {
        let parser = flat_map(string("b"), alphabetically_next);
        let trace = run(&parser, "acb").into_result().unwrap_err();

        assert!(!trace.is_committed());
        assert_eq!(trace.offset(), 0);
        assert_eq!(trace.error().scope, "'b'");
    }

    #[test]
    fn test_zero_width_first_does_not_commit() {
        let parser = succeed(()).flat_map(|_| string("x"));
        let trace = run(&parser, "y").into_result().unwrap_err();
        assert!(!trace.is_committed());
    }

    #[test]
    fn test_consumed_counts_accumulate() {
        let parser = string("select")
            .flat_map(|_| string(" "))
            .flat_map(|_| string("*"));
        let success = run(&parser, "select * from").into_result().unwrap();
        assert_eq!(success.value, "*");
        assert_eq!(success.consumed, 8);
    }
}
