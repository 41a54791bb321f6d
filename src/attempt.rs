use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that makes every failure of the inner parser backtrackable
///
/// However much input the inner parser consumed before failing, the failure
/// is reported uncommitted, so an enclosing `or` will try its alternative.
#[derive(Clone)]
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<'code, P> Parser<'code> for Attempt<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state).map_left(|trace| trace.uncommit())
    }
}

/// Convenience function to create an Attempt parser
pub fn attempt<'code, P>(parser: P) -> Attempt<P>
where
    P: Parser<'code>,
{
    Attempt::new(parser)
}

/// Extension trait to add .attempt() method support for parsers
pub trait AttemptExt<'code>: Parser<'code> + Sized {
    fn attempt(self) -> Attempt<Self> {
        Attempt::new(self)
    }
}

/// Implement AttemptExt for all parsers
impl<'code, P> AttemptExt<'code> for P where P: Parser<'code> {}
