use crate::error::ErrorItem;
use crate::parser::{ParseResult, Parser};
use crate::state::State;

/// Parser combinator that names a grammar rule in failure traces
///
/// On failure a segment for the rule, anchored where the rule started, is
/// put in front of the inner trace. Successes, consumed counts and the
/// commit flag are passed through unchanged.
#[derive(Debug, Clone)]
pub struct Scoped<P> {
    parser: P,
    scope: String,
    message: String,
}

impl<P> Scoped<P> {
    pub fn new(parser: P, scope: impl Into<String>, message: impl Into<String>) -> Self {
        Scoped {
            parser,
            scope: scope.into(),
            message: message.into(),
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }
}

impl<'code, P> Parser<'code> for Scoped<P>
where
    P: Parser<'code>,
{
    type Output = P::Output;

    fn parse(&self, state: State<'code>) -> ParseResult<'code, Self::Output> {
        self.parser.parse(state).map_left(|trace| {
            tracing::trace!(
                scope = %self.scope,
                offset = state.offset(),
                failed_at = trace.offset(),
                "rule failed"
            );
            trace.add_segment(state, self.scope.as_str(), self.message.as_str())
        })
    }
}

/// Name a rule; failures read `invalid <scope> syntax: ...`
pub fn scoped<'code, P>(scope: impl Into<String>, parser: P) -> Scoped<P>
where
    P: Parser<'code>,
{
    let item = ErrorItem::invalid(scope);
    Scoped::new(parser, item.scope, item.message)
}

/// Name a rule with a custom failure message
pub fn scoped_with_message<'code, P>(
    scope: impl Into<String>,
    message: impl Into<String>,
    parser: P,
) -> Scoped<P>
where
    P: Parser<'code>,
{
    Scoped::new(parser, scope, message)
}

/// Label a parser; failures read `expected <name>: ...`
pub fn tag<'code, P>(name: impl Into<String>, parser: P) -> Scoped<P>
where
    P: Parser<'code>,
{
    let item = ErrorItem::expected(name);
    Scoped::new(parser, item.scope, item.message)
}

/// Extension trait to add .scoped() and .tag() method support for parsers
pub trait ScopedExt<'code>: Parser<'code> + Sized {
    fn scoped(self, scope: impl Into<String>) -> Scoped<Self> {
        scoped(scope, self)
    }

    fn scoped_with_message(self, scope: impl Into<String>, message: impl Into<String>) -> Scoped<Self> {
        Scoped::new(self, scope, message)
    }

    fn tag(self, name: impl Into<String>) -> Scoped<Self> {
        tag(name, self)
    }
}

/// Implement ScopedExt for all parsers
impl<'code, P> ScopedExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::and::AndExt;
    use crate::parser::run;
    use crate::state::Success;
    use crate::string::string;

    fn stack_of<'a, P: Parser<'a>>(parser: &P, input: &'a str) -> Vec<(usize, String)> {
        run(parser, input)
            .into_result()
            .err()
            .unwrap()
            .stack()
            .into_iter()
            .map(|segment| (segment.offset(), segment.label))
            .collect()
    }

    #[test]
    fn test_scoped_success_is_untouched() {
        let parser = scoped("greeting", string("hello, ").and(string("world")));
        let success = run(&parser, "hello, world").into_result().unwrap();
        assert_eq!(success, Success::new(("hello, ", "world"), 12));
    }

    #[test]
    fn test_scoped_adds_leading_segment() {
        let parser = scoped("greeting", string("hello, ").and(string("world")));
        assert_eq!(
            stack_of(&parser, "hello, w0rld"),
            vec![
                (0, "greeting".to_string()),
                (8, "expected".to_string()),
                (8, "'world'".to_string()),
            ]
        );
    }

    #[test]
    fn test_scoped_keeps_commit_flag() {
        let uncommitted = run(&string("x").scoped("rule"), "y").into_result().unwrap_err();
        assert!(!uncommitted.is_committed());

        let committed = run(&string("xy").scoped("rule"), "xz").into_result().unwrap_err();
        assert!(committed.is_committed());
    }

    #[test]
    fn test_nested_scopes_read_outermost_first() {
        let column_list = string("a").and(string(",")).and(string("b")).scoped("column-list");
        let select = string("select ").and(column_list).scoped("select-clause");

        assert_eq!(
            stack_of(&select, "select a;b"),
            vec![
                (0, "select-clause".to_string()),
                (7, "column-list".to_string()),
                (8, "expected".to_string()),
                (8, "','".to_string()),
            ]
        );

        let trace = run(&select, "select a;b").into_result().unwrap_err();
        assert_eq!(
            trace.to_string(),
            "invalid select-clause syntax: invalid column-list syntax: expected ',' at line 1, column 8"
        );
    }

    #[test]
    fn test_tag_and_custom_message() {
        let trace = run(&tag("identifier", string("id")), "x").into_result().unwrap_err();
        assert_eq!(trace.error().message, "expected identifier");
        assert_eq!(trace.error().scope, "identifier");

        let parser = string("id").scoped_with_message("name", "a name must start with 'id'");
        let trace = run(&parser, "x").into_result().unwrap_err();
        assert_eq!(trace.error().message, "a name must start with 'id'");
        assert_eq!(trace.stack()[0].label, "name");
    }
}
