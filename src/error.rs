use thiserror::Error;

/// A regular expression that could not be compiled while building a grammar
#[derive(Debug, Error)]
#[error("invalid pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A byte offset into a source text, rendered for humans
#[derive(Debug, Copy, Clone)]
pub struct Location<'code> {
    source: &'code str,
    offset: usize,
}

impl<'code> Location<'code> {
    pub fn new(source: &'code str, offset: usize) -> Self {
        Self { source, offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offset is used instead of a column because columns depend on
    /// tab width and on how wide characters render.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.source[..self.offset.min(self.source.len())];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);

        ReadablePosition {
            line,
            byte_offset: before.len() - line_start,
        }
    }

    /// Up to 2 lines of context either side of the error line, with a pointer
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        for (index, content) in self.source.split('\n').enumerate() {
            let number = index + 1;
            if number < first || number > last {
                continue;
            }

            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readable_position_first_line() {
        let loc = Location::new("hello world", 6);
        assert_eq!(
            loc.readable_position(),
            ReadablePosition {
                line: 1,
                byte_offset: 6
            }
        );
    }

    #[test]
    fn test_readable_position_eos() {
        let loc = Location::new("line1\nline2", 11);
        let pos = loc.readable_position();

        // Line 2, past "line2"
        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 5);
    }

    #[test]
    fn test_readable_position_after_trailing_newline() {
        let loc = Location::new("hello\n", 6);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.byte_offset, 0);
    }

    #[test]
    fn test_context_lines_pointer() {
        let loc = Location::new("a = 1\nb = ?\nc = 3", 10);
        let context = loc.context_lines();

        assert_eq!(
            context,
            vec![
                "    1 | a = 1".to_string(),
                "  > 2 | b = ?".to_string(),
                "            ^--- here".to_string(),
                "    3 | c = 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_context_lines_window() {
        let source = "1\n2\n3\n4\n5\n6\n7";
        let loc = Location::new(source, source.find('7').unwrap());
        let context = loc.context_lines().join("\n");

        assert!(!context.contains("| 4"));
        assert!(context.contains("| 5"));
        assert!(context.contains("> 7 | 7"));
    }

    #[test]
    fn test_context_lines_empty_source() {
        let loc = Location::new("", 0);
        let context = loc.context_lines();

        assert_eq!(context.len(), 2);
        assert!(context[1].ends_with("^--- here"));
    }

    #[test]
    fn test_pattern_error_display() {
        let source = regex::Regex::new("[").unwrap_err();
        let err = PatternError {
            pattern: "[".to_string(),
            source,
        };

        assert!(err.to_string().starts_with("invalid pattern `[`"));
    }
}
