//! Leaf parsers over text

pub mod email;
pub mod end;
pub mod literal;
pub mod number;
pub mod pattern;

pub use email::email;
pub use end::{End, end};
pub use literal::{Literal, literal};
pub use number::{Number, decimal, integer};
pub use pattern::{RegexParser, regex};
