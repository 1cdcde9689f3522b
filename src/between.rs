use crate::parser::Parser;
use crate::save::{SaveLeft, SaveRight};

/// Parser that matches `content` wrapped in `open` and `close`, keeping only the content
pub type Between<P1, P2, P3> = SaveLeft<SaveRight<P1, P2>, P3>;

/// Parse `open`, then `content`, then `close`, and keep the content value
///
/// ```
/// use textcomb::between;
/// use textcomb::text::{integer, literal};
/// use textcomb::Parser;
///
/// let parser = between(literal("["), integer(), literal("]"));
/// assert_eq!(parser.parse_str("[ 42 ]").unwrap(), 42);
/// ```
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    SaveLeft::new(SaveRight::new(open, content), close)
}
