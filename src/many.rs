use crate::either::Either;
use crate::flat_map::continue_after;
use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};

/// Keep applying `parser` from `consumed` bytes past `state`
///
/// An uncommitted failure ends the loop successfully. A committed one means
/// an element partially matched, and is returned as is.
fn collect_rest<'code, P>(
    parser: &P,
    state: State<'code>,
    mut values: Vec<P::Output>,
    mut consumed: usize,
) -> ParseResult<'code, Vec<P::Output>>
where
    P: Parser<'code>,
{
    loop {
        match parser.parse(state.advance_by(consumed)) {
            Either::Right(success) => {
                consumed += success.consumed;
                values.push(success.value);
            }
            Either::Left(trace) if trace.is_committed() => return Either::Left(trace),
            Either::Left(_) => return Either::Right(Success::new(values, consumed)),
        }
    }
}

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Greedy and left to right. A parser that succeeds without consuming
/// anything makes this loop forever.
#[derive(Clone)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        collect_rest(&self.parser, state, Vec::new(), 0)
    }
}

/// Parser combinator that matches one or more occurrences of the given parser
#[derive(Clone)]
pub struct Many1<P> {
    parser: P,
}

impl<P> Many1<P> {
    pub fn new(parser: P) -> Self {
        Many1 { parser }
    }
}

impl<'code, P> Parser<'code> for Many1<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state).flat_map(|first| {
            continue_after(state, first, |value, next| {
                collect_rest(&self.parser, next, vec![value], 0)
            })
        })
    }
}

/// Parser combinator that matches exactly `times` occurrences of the given parser
#[derive(Clone)]
pub struct Repeat<P> {
    parser: P,
    times: usize,
}

impl<P> Repeat<P> {
    pub fn new(parser: P, times: usize) -> Self {
        Repeat { parser, times }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let mut values = Vec::new();
        let mut consumed = 0;
        for _ in 0..self.times {
            match self.parser.parse(state.advance_by(consumed)) {
                Either::Right(success) => {
                    consumed += success.consumed;
                    values.push(success.value);
                }
                Either::Left(trace) => return Either::Left(trace.append_committed(consumed != 0)),
            }
        }
        Either::Right(Success::new(values, consumed))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}

/// Convenience function to create a Many1 parser
pub fn many1<'code, P>(parser: P) -> Many1<P>
where
    P: Parser<'code>,
{
    Many1::new(parser)
}

/// Convenience function to create a Repeat parser
pub fn repeat<'code, P>(parser: P, times: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, times)
}

/// Extension trait to add .many(), .many1() and .repeat() method support for parsers
pub trait ManyExt<'code>: Parser<'code> + Sized {
    fn many(self) -> Many<Self> {
        Many::new(self)
    }

    fn many1(self) -> Many1<Self> {
        Many1::new(self)
    }

    fn repeat(self, times: usize) -> Repeat<Self> {
        Repeat::new(self, times)
    }
}

/// Implement ManyExt for all parsers
impl<'code, P> ManyExt<'code> for P where P: Parser<'code> {}
