use crate::either::Either;
use crate::lazy::Lazy;
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// The second parser is only tried when the first one failed *uncommitted*.
/// A committed failure means the input already went down the first branch,
/// so that failure is the result. When both branches fail uncommitted, the
/// second branch's trace is returned with the first branch's expectations
/// merged into it, so the message reads `expected 'b' or 'a'`.
#[derive(Clone)]
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    type Output = O;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser1.parse(state).flat_map_left(|first| {
            if first.is_committed() {
                return Either::Left(first);
            }
            tracing::trace!(offset = state.offset(), "trying alternative");
            self.parser2.parse(state).map_left(|second| {
                if second.is_committed() {
                    second
                } else {
                    second.append_failed_scopes(first.failed_scopes())
                }
            })
        })
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, other)
    }

    /// Like [`OrExt::or`], but the alternative is only built if it is needed
    fn or_else<F, P>(self, other: F) -> Or<Self, Lazy<F>>
    where
        F: Fn() -> P,
        P: Parser<'code, Output = Self::Output>,
    {
        Or::new(self, Lazy::new(other))
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, parser2)
}

/// Convenience function to create an Or parser with a lazily built alternative
pub fn or_else<'code, P1, F, P2, O>(parser1: P1, parser2: F) -> Or<P1, Lazy<F>>
where
    P1: Parser<'code, Output = O>,
    F: Fn() -> P2,
    P2: Parser<'code, Output = O>,
{
    Or::new(parser1, Lazy::new(parser2))
}
