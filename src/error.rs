use crate::state::State;
use std::fmt;
use thiserror::Error;

/// Generic label every primitive failure starts its trace with
pub const EXPECTED: &str = "expected";

/// Lines of source shown before and after the failing line by [`StackTrace::render`]
const CONTEXT_LINES: usize = 2;

/// What a parser expected, and the sentence describing it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ErrorItem {
    /// Human readable description of the expected input, e.g. `'ab'`
    pub scope: String,
    pub message: String,
}

impl ErrorItem {
    pub fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        ErrorItem {
            scope: scope.into(),
            message: message.into(),
        }
    }

    /// `expected <scope>`, used by primitive parsers
    pub fn expected(scope: impl Into<String>) -> Self {
        let scope = scope.into();
        let message = format!("{} {}", EXPECTED, scope);
        ErrorItem { scope, message }
    }

    /// `invalid <scope> syntax`, used by grammar rules
    pub fn invalid(scope: impl Into<String>) -> Self {
        let scope = scope.into();
        let message = format!("invalid {} syntax", scope);
        ErrorItem { scope, message }
    }

    /// The labels this item contributes to a trace: the generic label, then the scope
    pub fn failed_scopes(&self) -> [&str; 2] {
        [EXPECTED, &self.scope]
    }
}

/// One `(location, label)` entry of a rendered trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'code> {
    pub state: State<'code>,
    pub label: String,
}

impl<'code> Segment<'code> {
    pub fn new(state: State<'code>, label: impl Into<String>) -> Self {
        Segment {
            state,
            label: label.into(),
        }
    }

    pub fn offset(&self) -> usize {
        self.state.offset()
    }
}

/// A parse failure and the chain of grammar rules it happened in
///
/// The outermost frame is the value you hold; [`StackTrace::cause`] leads to
/// more specific frames until the innermost one, which is the primitive
/// failure. The outermost frame's commit flag is the one combinators act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackTrace<'code> {
    state: State<'code>,
    error: ErrorItem,
    is_committed: bool,
    cause: Option<Box<StackTrace<'code>>>,
    /// Segments merged in from alternatives that failed at the same point
    alternatives: Vec<Segment<'code>>,
}

impl<'code> StackTrace<'code> {
    pub fn new(state: State<'code>, error: ErrorItem, is_committed: bool) -> Self {
        StackTrace {
            state,
            error,
            is_committed,
            cause: None,
            alternatives: Vec::new(),
        }
    }

    pub fn state(&self) -> State<'code> {
        self.state
    }

    pub fn error(&self) -> &ErrorItem {
        &self.error
    }

    pub fn is_committed(&self) -> bool {
        self.is_committed
    }

    pub fn cause(&self) -> Option<&StackTrace<'code>> {
        self.cause.as_deref()
    }

    /// Wrap this trace in a new outer frame labelled `scope`
    pub fn add_segment(
        self,
        state: State<'code>,
        scope: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        StackTrace {
            state,
            error: ErrorItem::new(scope, message),
            is_committed: self.is_committed,
            cause: Some(Box::new(self)),
            alternatives: Vec::new(),
        }
    }

    /// Merge the expectations of a sibling alternative into the innermost frame
    pub fn append_failed_scopes(mut self, segments: Vec<Segment<'code>>) -> Self {
        match self.cause.take() {
            Some(cause) => self.cause = Some(Box::new(cause.append_failed_scopes(segments))),
            None => self.alternatives.extend(segments),
        }
        self
    }

    /// Raise the commit flag if `committed` is set; never lowers it
    pub fn append_committed(mut self, committed: bool) -> Self {
        self.is_committed |= committed;
        self
    }

    pub fn uncommit(mut self) -> Self {
        self.is_committed = false;
        self
    }

    /// The deepest frame, i.e. the primitive failure
    pub fn innermost(&self) -> &StackTrace<'code> {
        let mut frame = self;
        while let Some(cause) = &frame.cause {
            frame = cause;
        }
        frame
    }

    /// Where the primitive failure happened
    pub fn location(&self) -> State<'code> {
        self.innermost().state
    }

    pub fn offset(&self) -> usize {
        self.location().offset()
    }

    /// Outermost-first list of `(location, label)` segments
    ///
    /// One segment per enclosing rule, ending with the `expected` and scope
    /// pair of the primitive failure. Never empty.
    pub fn stack(&self) -> Vec<Segment<'code>> {
        let mut segments = Vec::new();
        let mut frame = self;
        while let Some(cause) = &frame.cause {
            segments.push(Segment::new(frame.state, frame.error.scope.as_str()));
            frame = cause;
        }
        segments.extend(
            frame
                .error
                .failed_scopes()
                .into_iter()
                .map(|label| Segment::new(frame.state, label)),
        );
        segments
    }

    /// The primitive failure's segments followed by those merged in from alternatives
    pub fn failed_scopes(&self) -> Vec<Segment<'code>> {
        let innermost = self.innermost();
        innermost
            .error
            .failed_scopes()
            .into_iter()
            .map(|label| Segment::new(innermost.state, label))
            .chain(innermost.alternatives.iter().cloned())
            .collect()
    }

    /// Distinct scope literals of every alternative that failed here, in merge order
    pub fn expected(&self) -> Vec<String> {
        let mut scopes: Vec<String> = Vec::new();
        for segment in self.failed_scopes() {
            if segment.label != EXPECTED && !scopes.contains(&segment.label) {
                scopes.push(segment.label);
            }
        }
        scopes
    }

    /// Alternatives that failed somewhere other than the innermost frame
    /// carry their own position
    fn describe_innermost(&self) -> String {
        let innermost = self.innermost();
        if innermost.alternatives.is_empty() {
            return innermost.error.message.clone();
        }
        let mut described: Vec<String> = Vec::new();
        for segment in self.failed_scopes() {
            if segment.label == EXPECTED {
                continue;
            }
            let text = if segment.state == innermost.state {
                segment.label
            } else {
                let position = segment.state.line_column();
                format!(
                    "{} (at line {}, column {})",
                    segment.label, position.line, position.column
                )
            };
            if !described.contains(&text) {
                described.push(text);
            }
        }
        format!("{} {}", EXPECTED, described.join(" or "))
    }

    /// The one-line message followed by the surrounding source lines
    pub fn render(&self) -> String {
        let mut out = self.to_string();
        out.push_str("\n\n");
        for line in context_lines(self.location()) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Detach the failure from the input so it can outlive it
    pub fn to_failure(&self) -> ParseFailure {
        let position = self.location().line_column();
        ParseFailure {
            offset: self.offset(),
            line: position.line,
            column: position.column,
            expected: self.expected(),
            message: self.to_string(),
        }
    }
}

impl fmt::Display for StackTrace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut frame = self;
        while let Some(cause) = &frame.cause {
            write!(f, "{}: ", frame.error.message)?;
            frame = cause;
        }
        let position = frame.state.line_column();
        write!(
            f,
            "{} at line {}, column {}",
            self.describe_innermost(),
            position.line,
            position.column
        )
    }
}

impl std::error::Error for StackTrace<'_> {}

/// Source lines around `state`, with a pointer under the failing column
fn context_lines(state: State<'_>) -> Vec<String> {
    let position = state.line_column();
    let first = position.line.saturating_sub(CONTEXT_LINES);
    let last = position.line + CONTEXT_LINES;
    let mut lines = Vec::new();

    let mut source_lines: Vec<&str> = state.input().split('\n').collect();
    if source_lines.len() > 1 && source_lines.last() == Some(&"") && position.line < source_lines.len() {
        source_lines.pop();
    }

    for (index, content) in source_lines.iter().enumerate() {
        let number = index + 1;
        if number < first || number > last {
            continue;
        }
        let prefix = if number == position.line {
            format!("  > {} | ", number)
        } else {
            format!("    {} | ", number)
        };
        lines.push(format!("{}{}", prefix, content));
        if number == position.line {
            let pointer_offset = prefix.len() + position.column;
            lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
        }
    }
    lines
}

/// An owned parse failure, detached from the input text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseFailure {
    /// Byte offset of the primitive failure
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    /// Scopes of every alternative that failed at `offset`
    pub expected: Vec<String>,
    pub message: String,
}

/// Errors raised while building a grammar, before any input is parsed
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
