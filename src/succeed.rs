use crate::either::Either;
use crate::parser::{ParseResult, Parser};
use crate::state::{State, Success};

/// Parser that always succeeds without consuming input and returns a clone of its value
#[derive(Debug, Clone)]
pub struct Succeed<T> {
    value: T,
}

impl<T> Succeed<T> {
    pub fn new(value: T) -> Self {
        Succeed { value }
    }
}

impl<'code, T> Parser<'code> for Succeed<T>
where
    T: Clone,
{
    type Output = T;

    fn parse(&self, _state: State<'code>) -> ParseResult<'code, Self::Output> {
        Either::Right(Success::new(self.value.clone(), 0))
    }
}

/// Convenience function to create a Succeed parser
pub fn succeed<T: Clone>(value: T) -> Succeed<T> {
    Succeed::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::run;

    #[test]
    fn test_succeed_on_empty_input() {
        let success = run(&succeed(2), "").into_result().unwrap();
        assert_eq!(success, Success::new(2, 0));
    }

    #[test]
    fn test_succeed_consumes_nothing() {
        let success = run(&succeed("1235"), "aasdasdff").into_result().unwrap();
        assert_eq!(success, Success::new("1235", 0));
    }

    #[test]
    fn test_succeed_is_reusable() {
        let parser = succeed(vec![1, 2]);
        for input in ["", "x", "select"] {
            assert_eq!(run(&parser, input).into_result().unwrap().value, vec![1, 2]);
        }
    }
}
