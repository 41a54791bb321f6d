use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that transforms the output of a parser using a mapping function
///
/// Behaves like `flat_map(parser, |a| succeed(mapper(a)))`: the consumed
/// count and any failure pass through untouched.
#[derive(Clone)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, T, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser
            .parse(state)
            .map(|success| success.map(&self.mapper))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flat_map::FlatMapExt;
    use crate::or::OrExt;
    use crate::parser::run;
    use crate::pattern::regex;
    use crate::state::Success;
    use crate::string::string;
    use crate::succeed::succeed;

    #[derive(Debug, Clone, PartialEq)]
    enum Token {
        Keyword(String),
        Number(u64),
    }

    #[test]
    fn test_map_to_enum() {
        let parser = string("select").map(|kw| Token::Keyword(kw.to_uppercase()));
        let success = run(&parser, "select").into_result().unwrap();
        assert_eq!(success, Success::new(Token::Keyword("SELECT".to_string()), 6));
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let keyword = string("select").map(|kw| Token::Keyword(kw.to_string()));
        let number = regex("[0-9]+")
            .unwrap()
            .map(|digits| Token::Number(u64::from_str_radix(digits, 10).unwrap_or(0)));
        let parser = keyword.or(number);

        let success = run(&parser, "42").into_result().unwrap();
        assert_eq!(success, Success::new(Token::Number(42), 2));
    }

    #[test]
    fn test_map_chaining() {
        let parser = string("5")
            .map(|s| s.len())
            .map(|len| len * 10)
            .map(|n| format!("n={}", n));
        let success = run(&parser, "5").into_result().unwrap();
        assert_eq!(success.value, "n=10");
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = string("ab").map(|s| s.len());
        let trace = run(&parser, "ax").into_result().unwrap_err();
        assert!(trace.is_committed());
        assert_eq!(trace.offset(), 1);
    }

    #[test]
    fn test_map_agrees_with_flat_map_succeed() {
        let via_map = string("ab").map(str::len);
        let via_flat_map = string("ab").flat_map(|s| succeed(s.len()));
        for input in ["ab", "abc", "ax", "x", ""] {
            assert_eq!(run(&via_map, input), run(&via_flat_map, input));
        }
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(string("9"), |s| s.chars().count());
        assert_eq!(run(&parser, "9").into_result().unwrap(), Success::new(1, 1));
    }
}
