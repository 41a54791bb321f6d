use crate::flat_map::continue_after;
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`.
///
/// Once the first parser has consumed input, a failure of the second one is
/// committed.
///
/// Example:
/// ```
/// use sql_parsec::{AndExt, run, string};
///
/// let parser = string("hello, ").and(string("world"));
/// let success = run(&parser, "hello, world").into_result().unwrap();
/// assert_eq!(success.value, ("hello, ", "world"));
/// assert_eq!(success.consumed, 12);
/// ```
#[derive(Clone)]
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser1.parse(state).flat_map(|first| {
            continue_after(state, first, |a, next| {
                self.parser2.parse(next).map(|second| second.map(|b| (a, b)))
            })
        })
    }
}

/// Sequences two parsers and combines their results with a function
#[derive(Clone)]
pub struct Map2<P1, P2, F> {
    parser1: P1,
    parser2: P2,
    combine: F,
}

impl<P1, P2, F> Map2<P1, P2, F> {
    pub fn new(parser1: P1, parser2: P2, combine: F) -> Self {
        Map2 {
            parser1,
            parser2,
            combine,
        }
    }
}

impl<'code, P1, P2, F, C> Parser<'code> for Map2<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    F: Fn(P1::Output, P2::Output) -> C,
{
    type Output = C;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser1.parse(state).flat_map(|first| {
            continue_after(state, first, |a, next| {
                self.parser2
                    .parse(next)
                    .map(|second| second.map(|b| (self.combine)(a, b)))
            })
        })
    }
}

/// Runs both parsers and keeps only the second result
#[derive(Clone)]
pub struct SkipLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SkipLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SkipLeft { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for SkipLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P2::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser1.parse(state).flat_map(|first| {
            continue_after(state, first, |_, next| self.parser2.parse(next))
        })
    }
}

/// Runs both parsers and keeps only the first result
#[derive(Clone)]
pub struct SkipRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SkipRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SkipRight { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for SkipRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    type Output = P1::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser1.parse(state).flat_map(|first| {
            continue_after(state, first, |a, next| {
                self.parser2.parse(next).map(|second| second.map(|_| a))
            })
        })
    }
}

/// Convenience function to create an And parser
pub fn and<'code, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    And::new(parser1, parser2)
}

/// Convenience function to create a Map2 parser
pub fn map2<'code, P1, P2, F, C>(parser1: P1, parser2: P2, combine: F) -> Map2<P1, P2, F>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    F: Fn(P1::Output, P2::Output) -> C,
{
    Map2::new(parser1, parser2, combine)
}

/// Convenience function to create a SkipLeft parser
pub fn skip_left<'code, P1, P2>(parser1: P1, parser2: P2) -> SkipLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SkipLeft::new(parser1, parser2)
}

/// Convenience function to create a SkipRight parser
pub fn skip_right<'code, P1, P2>(parser1: P1, parser2: P2) -> SkipRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    SkipRight::new(parser1, parser2)
}

/// Extension trait to add .and(), .skip_left() and .skip_right() method support for parsers
pub trait AndExt<'code>: Parser<'code> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'code>,
    {
        And::new(self, other)
    }

    fn map2<P, F, C>(self, other: P, combine: F) -> Map2<Self, P, F>
    where
        P: Parser<'code>,
        F: Fn(Self::Output, P::Output) -> C,
    {
        Map2::new(self, other, combine)
    }

    fn skip_left<P>(self, other: P) -> SkipLeft<Self, P>
    where
        P: Parser<'code>,
    {
        SkipLeft::new(self, other)
    }

    fn skip_right<P>(self, other: P) -> SkipRight<Self, P>
    where
        P: Parser<'code>,
    {
        SkipRight::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'code, P> AndExt<'code> for P where P: Parser<'code> {}
