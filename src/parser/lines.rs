//! Line slicing and line-level tests used by the scanner.

/// The fixed token opening and closing a front matter region.
pub const MARKER: &str = "---";

/// One line of the document, with byte offsets into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line text without its terminator (`\n` or `\r\n`)
    pub text: &'a str,
    /// 1-indexed line number
    pub number: usize,
    /// Byte offset of the first character
    pub start: usize,
    /// Byte offset just past the terminator
    pub end: usize,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Number of leading whitespace characters.
    pub fn indentation(&self) -> usize {
        indentation(self.text)
    }

    /// Whether the trimmed line equals `token`.
    pub fn is(&self, token: &str) -> bool {
        self.text.trim() == token
    }

    pub fn is_marker(&self) -> bool {
        self.is(MARKER)
    }
}

/// Split `source` into lines, tracking offsets.
///
/// An empty source has no lines; a trailing newline yields a final
/// empty line.
pub fn lines(source: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    let mut number = 0;
    let mut done = source.is_empty();

    std::iter::from_fn(move || {
        if done {
            return None;
        }
        let rest = &source[offset..];
        let start = offset;
        number += 1;

        let (raw, end) = match rest.find('\n') {
            Some(i) => (&rest[..i], offset + i + 1),
            None => {
                done = true;
                (rest, source.len())
            }
        };
        offset = end;

        Some(Line {
            text: raw.strip_suffix('\r').unwrap_or(raw),
            number,
            start,
            end,
        })
    })
}

pub fn indentation(text: &str) -> usize {
    text.chars().take_while(|c| c.is_whitespace()).count()
}

/// Strip a line comment token (and any whitespace before it).
///
/// Returns `None` when the line does not start with the token.
pub fn strip_comment<'a>(text: &'a str, token: &str) -> Option<&'a str> {
    text.trim_start().strip_prefix(token)
}

/// Join lines with `\n`, removing the indentation they all share.
pub fn dedent(lines: &[&str]) -> String {
    let common = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indentation(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| skip_chars(line, common))
        .collect::<Vec<_>>()
        .join("\n")
}

fn skip_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((i, _)) => &text[i..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lines_offsets() {
        let source = "ab\r\ncd\n";
        let all: Vec<Line> = lines(source).collect();

        assert_eq!(all.len(), 3);
        assert_eq!(all[0], Line { text: "ab", number: 1, start: 0, end: 4 });
        assert_eq!(all[1], Line { text: "cd", number: 2, start: 4, end: 7 });
        assert_eq!(all[2], Line { text: "", number: 3, start: 7, end: 7 });
    }

    #[test]
    fn test_lines_empty_source() {
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn test_line_predicates() {
        let line = lines("  ---  ").next().unwrap();

        assert!(line.is_marker());
        assert_eq!(line.indentation(), 2);
        assert!(!line.is_blank());
        assert!(lines(" \t").next().unwrap().is_blank());
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("  # title: a", "#"), Some(" title: a"));
        assert_eq!(strip_comment("//---", "//"), Some("---"));
        assert_eq!(strip_comment("title: a", "#"), None);
    }

    #[test]
    fn test_dedent_keeps_nesting() {
        let text = dedent(&["  a:", "    b: 1", "", "  c: 2"]);

        assert_eq!(text, "a:\n  b: 1\n\nc: 2");
    }
}
