use crate::and::{SkipLeft, SkipRight};
use crate::parser::Parser;

/// Parser that matches content between opening and closing delimiters
///
/// This is `start.skip_left(parser).skip_right(stop)`: it returns just the
/// content value with the delimiters discarded. Pass a [`lazy`](crate::lazy::lazy)
/// parser as content for recursive rules.
pub fn surround<'code, PS, PE, P>(start: PS, stop: PE, parser: P) -> SkipRight<SkipLeft<PS, P>, PE>
where
    PS: Parser<'code>,
    PE: Parser<'code>,
    P: Parser<'code>,
{
    SkipRight::new(SkipLeft::new(start, parser), stop)
}
