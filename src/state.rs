/// A position in the input text
///
/// `State` is a cheap `Copy` value threaded through every parser call. It
/// never changes in place; [`State::advance_by`] returns a new one.
///
/// Offsets are byte offsets into `input` and always sit on a `char` boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct State<'code> {
    input: &'code str,
    offset: usize,
}

/// Line and in-line byte offset of a [`State`], for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    /// 1-based line number
    pub line: usize,
    /// Byte offset from the start of the line
    pub column: usize,
}

impl<'code> State<'code> {
    /// Create a state at the start of `input`
    pub fn new(input: &'code str) -> Self {
        State { input, offset: 0 }
    }

    /// Create a state at `offset`, clamped to the end of `input`
    pub fn at(input: &'code str, offset: usize) -> Self {
        State {
            input,
            offset: offset.min(input.len()),
        }
    }

    pub fn input(&self) -> &'code str {
        self.input
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// A new state `n` bytes further along, clamped to the end of the input
    pub fn advance_by(self, n: usize) -> Self {
        State::at(self.input, self.offset.saturating_add(n))
    }

    /// The unconsumed part of the input
    pub fn remaining(&self) -> &'code str {
        &self.input[self.offset..]
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    pub fn line_column(&self) -> LineColumn {
        let before = &self.input[..self.offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        LineColumn {
            line,
            column: self.offset - line_start,
        }
    }
}

/// The outcome of a successful parse
///
/// `consumed` is exactly how many bytes the parser advanced past the
/// [`State`] it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Success<T> {
    pub value: T,
    pub consumed: usize,
}

impl<T> Success<T> {
    pub fn new(value: T, consumed: usize) -> Self {
        Success { value, consumed }
    }

    /// Account for `extra` bytes consumed before this result
    pub fn advance_consumed(self, extra: usize) -> Self {
        Success {
            value: self.value,
            consumed: self.consumed + extra,
        }
    }

    pub fn map<U, F>(self, f: F) -> Success<U>
    where
        F: FnOnce(T) -> U,
    {
        Success {
            value: f(self.value),
            consumed: self.consumed,
        }
    }
}
