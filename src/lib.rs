//! # textcomb - Text Parser Combinators
//!
//! Grammars are built by composing small parser values (literals, regexes,
//! sequences, alternations, repetitions) into larger ones and running them
//! against a [`Cursor`]. Every run produces a [`ParseResult`]: a value with the
//! rest of the input, or a [`Failure`] saying where and why matching stopped.
//!
//! - **Whitespace skipping**: every parser skips its cursor's skip pattern
//!   (by default `\s+`) before it runs. Pass a cursor without a pattern to see
//!   every character.
//! - **Ordered choice with backtracking**: [`or`](or::OrExt::or) retries the
//!   alternative from the original position.
//! - **Recursive grammars**: rules refer to each other through [`lazy`], and
//!   return [`BoxedParser`] so their types can be named.
//!
//! ```
//! use textcomb::prelude::*;
//! use textcomb::text::{decimal, literal};
//!
//! let list = decimal().rep1_sep(literal(","));
//! let result = list.parse_str("1, 2, 3");
//! assert_eq!(result.unwrap(), vec![1.0, 2.0, 3.0]);
//! ```

#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

pub mod always;
pub mod and_then;
pub mod between;
pub mod boxed;
pub mod cursor;
pub mod error;
pub mod from_fn;
pub mod guard;
pub mod lazy;
pub mod map;
pub mod named;
pub mod not;
pub mod opt;
pub mod or;
pub mod parser;
pub mod rep;
pub mod rep1;
pub mod rep1_sep;
pub mod result;
pub mod save;
pub mod sequence;
pub mod spanned;
pub mod text;
pub mod then;
pub mod try_map;

pub use always::{failure, success};
pub use between::between;
pub use boxed::BoxedParser;
pub use cursor::{Cursor, SkipPattern};
pub use error::{Location, PatternError};
pub use from_fn::from_fn;
pub use lazy::lazy;
pub use parser::Parser;
pub use result::{Failure, ParseResult};
pub use sequence::sequence;
pub use spanned::Span;

/// Parser trait and every combinator extension trait
pub mod prelude {
    pub use crate::and_then::AndThenExt;
    pub use crate::boxed::BoxedExt;
    pub use crate::guard::GuardExt;
    pub use crate::map::MapExt;
    pub use crate::named::NamedExt;
    pub use crate::not::NotExt;
    pub use crate::opt::OptExt;
    pub use crate::or::OrExt;
    pub use crate::parser::Parser;
    pub use crate::rep::RepExt;
    pub use crate::rep1::Rep1Ext;
    pub use crate::rep1_sep::Rep1SepExt;
    pub use crate::save::SaveExt;
    pub use crate::spanned::SpannedExt;
    pub use crate::then::ThenExt;
    pub use crate::try_map::TryMapExt;
}
