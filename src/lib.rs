//! # sql-parsec - Backtracking-aware Text Parser Combinators
//!
//! Composable building blocks for recursive-descent parsers over text,
//! written for SQL grammars but not tied to any grammar.
//!
//! - **Values, not exceptions**: every parser returns an [`Either`] of a
//!   [`StackTrace`] or a [`Success`], and never panics
//! - **Commit control**: a failure after input was consumed is *committed*,
//!   so [`or`] stops trying alternatives; [`attempt`] opts back into backtracking
//! - **Readable traces**: [`scoped`] rules nest into messages like
//!   `invalid select-clause syntax: expected ',' at line 1, column 8`
//! - **Zero-copy**: matched text is returned as slices of the input
//!
//! ```
//! use sql_parsec::{AndExt, ScopedExt, SeparatedListExt, regex, run, string};
//!
//! let column = regex("[a-z_]+").unwrap();
//! let select = string("select ")
//!     .skip_left(column.sep_by1(string(", ")))
//!     .scoped("select-clause");
//!
//! let success = run(&select, "select id, name").into_result().unwrap();
//! assert_eq!(success.value, vec!["id", "name"]);
//!
//! let trace = run(&select, "select id,name").into_result().unwrap_err();
//! assert_eq!(
//!     trace.to_string(),
//!     "invalid select-clause syntax: expected ', ' at line 1, column 10"
//! );
//! ```

pub mod and;
pub mod attempt;
pub mod either;
pub mod error;
pub mod flat_map;
pub mod lazy;
pub mod many;
pub mod map;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod scoped;
pub mod separated_list;
pub mod state;
pub mod string;
pub mod succeed;
pub mod surround;


pub use and::{And, AndExt, Map2, SkipLeft, SkipRight, and, map2, skip_left, skip_right};
pub use attempt::{Attempt, AttemptExt, attempt};
pub use either::Either;
pub use error::{ErrorItem, GrammarError, ParseFailure, Segment, StackTrace};
pub use flat_map::{FlatMap, FlatMapExt, flat_map};
pub use lazy::{Lazy, defer, lazy};
pub use many::{Many, Many1, ManyExt, Repeat, many, many1, repeat};
pub use map::{Map, MapExt, map};
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Or, OrExt, or, or_else};
pub use parser::{BoxedExt, BoxedParser, FnParser, ParseResult, Parser, from_fn, parse_value, run};
pub use pattern::{PatternParser, regex, thru};
pub use scoped::{Scoped, ScopedExt, scoped, scoped_with_message, tag};
pub use separated_list::{SeparatedList, SeparatedListExt, sep_by, sep_by1};
pub use state::{LineColumn, State, Success};
pub use string::{StringParser, string};
pub use succeed::{Succeed, succeed};
pub use surround::surround;
