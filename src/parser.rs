use crate::and::And;
use crate::either::Either;
use crate::error::{ParseFailure, StackTrace};
use crate::or::Or;
use crate::state::{State, Success};
use std::marker::PhantomData;
use std::ops::{Add, BitOr};
use std::sync::Arc;

/// What every parser returns: a failure trace or a value with the bytes it consumed
pub type ParseResult<'code, T> = Either<StackTrace<'code>, Success<T>>;

/// Core parser trait for parser combinators
pub trait Parser<'code> {
    type Output;

    /// Attempt to parse at the given state
    ///
    /// Parsers never mutate anything: the same parser can be run any number
    /// of times, and the state it was given is left untouched. On success the
    /// [`Success::consumed`] count tells the caller how far to advance. It
    /// must not run past the end of the input; a count that does is clamped
    /// to the end when the next state is built.
    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output>;
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(state)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(state)
    }
}

impl<'code, P> Parser<'code> for Arc<P>
where
    P: Parser<'code> + ?Sized,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        (**self).parse(state)
    }
}

/// A parser backed by a plain function or closure
pub struct FnParser<F, T> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<F: Clone, T> Clone for FnParser<F, T> {
    fn clone(&self) -> Self {
        FnParser {
            f: self.f.clone(),
            _output: PhantomData,
        }
    }
}

impl<'code, F, T> Parser<'code> for FnParser<F, T>
where
    F: Fn(State<'code>) -> ParseResult<'code, T>,
{
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        (self.f)(state)
    }
}

/// Wrap a closure as a parser
pub fn from_fn<'code, F, T>(f: F) -> FnParser<F, T>
where
    F: Fn(State<'code>) -> ParseResult<'code, T>,
{
    FnParser {
        f,
        _output: PhantomData,
    }
}

/// A type-erased, shareable parser
///
/// Use it to give recursive grammar rules a nameable return type, or to
/// keep parsers with different concrete types in one collection. Cloning is
/// a reference count bump, and the parser can be shared between threads.
pub struct BoxedParser<'code, T> {
    parser: Arc<dyn Parser<'code, Output = T> + Send + Sync + 'code>,
}

impl<T> Clone for BoxedParser<'_, T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Arc::clone(&self.parser),
        }
    }
}

impl<'code, T> BoxedParser<'code, T> {
    pub fn new<P>(parser: P) -> Self
    where
        P: Parser<'code, Output = T> + Send + Sync + 'code,
    {
        BoxedParser {
            parser: Arc::new(parser),
        }
    }
}

impl<'code, T> Parser<'code> for BoxedParser<'code, T> {
    type Output = T;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed(self) -> BoxedParser<'code, Self::Output>
    where
        Self: Send + Sync + 'code,
    {
        BoxedParser::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}

/// `a + b` sequences two boxed parsers into a pair
impl<'code, A: 'code, B: 'code> Add<BoxedParser<'code, B>> for BoxedParser<'code, A> {
    type Output = BoxedParser<'code, (A, B)>;

    fn add(self, rhs: BoxedParser<'code, B>) -> Self::Output {
        BoxedParser::new(And::new(self, rhs))
    }
}

/// `a | b` tries `b` when `a` fails without consuming input
impl<'code, T: 'code> BitOr<BoxedParser<'code, T>> for BoxedParser<'code, T> {
    type Output = BoxedParser<'code, T>;

    fn bitor(self, rhs: BoxedParser<'code, T>) -> Self::Output {
        BoxedParser::new(Or::new(self, rhs))
    }
}

/// Run `parser` against `input` from offset zero
///
/// Trailing input the parser did not consume is not an error.
pub fn run<'code, P>(parser: &P, input: &'code str) -> ParseResult<'code, P::Output>
where
    P: Parser<'code> + ?Sized,
{
    let _span = tracing::debug_span!("run", input_len = input.len()).entered();
    let result = parser.parse(State::new(input));
    match &result {
        Either::Right(success) => {
            tracing::debug!(consumed = success.consumed, "parse succeeded");
        }
        Either::Left(trace) => {
            tracing::debug!(
                offset = trace.offset(),
                committed = trace.is_committed(),
                "parse failed"
            );
        }
    }
    result
}

/// Run `parser` and keep only its value, detaching any failure from `input`
pub fn parse_value<'code, P>(parser: &P, input: &'code str) -> Result<P::Output, ParseFailure>
where
    P: Parser<'code> + ?Sized,
{
    match run(parser, input) {
        Either::Right(success) => Ok(success.value),
        Either::Left(trace) => Err(trace.to_failure()),
    }
}
