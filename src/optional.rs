use crate::either::Either;
use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};

/// Parser combinator that always succeeds, yielding `Some` if the inner parser matched
///
/// Equivalent to `attempt(parser).map(Some).or(succeed(None))`: any failure,
/// committed or not, rolls back to where the optional started.
#[derive(Clone)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Output = Option<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        match self.parser.parse(state) {
            Either::Right(success) => Either::Right(success.map(Some)),
            Either::Left(_) => Either::Right(Success::new(None, 0)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}
