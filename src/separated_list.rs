use crate::either::Either;
use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};

/// Parser combinator that matches a list of items separated by a parser
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!["a", "b", "c"]`
/// - `"a,b,"` with separator `,` → committed failure at the end of the input:
///   a separator that consumed input must be followed by an element
///
/// # Note
/// - `sep_by1` requires at least one element, `sep_by` yields `[]` instead
/// - Behaves exactly like `map2(parser, many(separator.skip_left(parser)))`,
///   with `.or(succeed(vec![]))` added for `sep_by`
/// - An element or separator that partially matches and then fails is a
///   committed error, not the end of the list
/// - Does not handle whitespace automatically
#[derive(Clone)]
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
    allow_empty: bool,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS, allow_empty: bool) -> Self {
        SeparatedList {
            parser,
            separator,
            allow_empty,
        }
    }
}

impl<'code, P, PS> Parser<'code> for SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        let first = match self.parser.parse(state) {
            Either::Right(first) => first,
            Either::Left(trace) if self.allow_empty && !trace.is_committed() => {
                return Either::Right(Success::new(Vec::new(), 0));
            }
            Either::Left(trace) => return Either::Left(trace),
        };

        let mut consumed = first.consumed;
        let mut values = vec![first.value];
        loop {
            let at = state.advance_by(consumed);
            let separator = match self.separator.parse(at) {
                Either::Right(separator) => separator.consumed,
                Either::Left(trace) if trace.is_committed() => {
                    return Either::Left(trace.append_committed(consumed != 0));
                }
                Either::Left(_) => break,
            };

            match self.parser.parse(at.advance_by(separator)) {
                Either::Right(item) => {
                    consumed += separator + item.consumed;
                    values.push(item.value);
                }
                Either::Left(trace) => {
                    let trace = trace.append_committed(separator != 0);
                    if !trace.is_committed() {
                        break;
                    }
                    return Either::Left(trace.append_committed(consumed != 0));
                }
            }
        }

        Either::Right(Success::new(values, consumed))
    }
}

/// Zero or more `parser` separated by `separator`
pub fn sep_by<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator, true)
}

/// One or more `parser` separated by `separator`
pub fn sep_by1<'code, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<'code>,
    PS: Parser<'code>,
{
    SeparatedList::new(parser, separator, false)
}

/// Extension trait to add .sep_by() and .sep_by1() method support for parsers
pub trait SeparatedListExt<'code>: Parser<'code> + Sized {
    fn sep_by<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<'code>,
    {
        sep_by(self, separator)
    }

    fn sep_by1<PS>(self, separator: PS) -> SeparatedList<Self, PS>
    where
        PS: Parser<'code>,
    {
        sep_by1(self, separator)
    }
}

/// Implement SeparatedListExt for all parsers
impl<'code, P> SeparatedListExt<'code> for P where P: Parser<'code> {}
