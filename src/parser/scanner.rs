//! Line scanner locating the front matter region.
//!
//! The scanner is a small state machine fed one line at a time:
//!
//! ```text
//! SeekOpenWrapper -> SeekOpenMarker -> InFrontMatter -> InWrapper -> Done
//! ```
//!
//! `SeekOpenWrapper` and `InWrapper` are only visited by multiline
//! wrappers. Any state may instead decide the document has no front
//! matter at all.

use crate::error::{FmxError, Result};
use crate::syntax::Wrapper;

use super::lines::{dedent, lines, strip_comment, Line, MARKER};

/// A located front matter region and the content following it.
#[derive(Debug, PartialEq, Eq)]
pub struct Extraction<'a> {
    /// Region text between the markers, unwrapped and dedented
    pub region: String,
    /// Untouched remainder of the source
    pub content: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    SeekOpenWrapper,
    SeekOpenMarker,
    InFrontMatter,
    InWrapper,
    Done,
}

enum Flow {
    Next,
    Absent,
    Done,
}

struct Scanner<'w, 'a> {
    wrapper: Wrapper<'w>,
    state: State,
    /// Indentation of the opening multiline comment
    base_indent: usize,
    /// Line number of the opening marker
    opened_at: usize,
    region: Vec<&'a str>,
    content_start: usize,
}

/// Scan `source` for front matter hidden behind `wrapper`.
///
/// Returns `None` when the document has no front matter.
pub fn scan<'a>(source: &'a str, wrapper: Wrapper<'_>) -> Result<Option<Extraction<'a>>> {
    let mut scanner = Scanner::new(wrapper);

    for line in lines(source) {
        match scanner.feed(line)? {
            Flow::Next => {}
            Flow::Absent => return Ok(None),
            Flow::Done => break,
        }
    }

    scanner.finish(source)
}

impl<'w, 'a> Scanner<'w, 'a> {
    fn new(wrapper: Wrapper<'w>) -> Self {
        let state = match wrapper {
            Wrapper::Bare | Wrapper::Line(_) => State::SeekOpenMarker,
            Wrapper::Indented(_) | Wrapper::Block { .. } => State::SeekOpenWrapper,
        };

        Self {
            wrapper,
            state,
            base_indent: 0,
            opened_at: 0,
            region: Vec::new(),
            content_start: 0,
        }
    }

    fn feed(&mut self, line: Line<'a>) -> Result<Flow> {
        match self.state {
            State::SeekOpenWrapper => Ok(self.seek_open_wrapper(line)),
            State::SeekOpenMarker => Ok(self.seek_open_marker(line)),
            State::InFrontMatter => self.in_front_matter(line),
            State::InWrapper => Ok(self.in_wrapper(line)),
            State::Done => Ok(Flow::Done),
        }
    }

    fn seek_open_wrapper(&mut self, line: Line<'a>) -> Flow {
        if line.is_blank() {
            return Flow::Next;
        }

        let start = match self.wrapper {
            Wrapper::Indented(start) | Wrapper::Block { start, .. } => start,
            Wrapper::Bare | Wrapper::Line(_) => return Flow::Absent,
        };

        if line.is(start) {
            self.base_indent = line.indentation();
            self.state = State::SeekOpenMarker;
            Flow::Next
        } else {
            Flow::Absent
        }
    }

    fn seek_open_marker(&mut self, line: Line<'a>) -> Flow {
        if line.is_blank() {
            return Flow::Next;
        }

        let opens = match self.wrapper {
            Wrapper::Bare | Wrapper::Block { .. } => line.is_marker(),
            Wrapper::Line(token) => {
                strip_comment(line.text, token).is_some_and(|rest| rest.trim() == MARKER)
            }
            Wrapper::Indented(_) => line.indentation() > self.base_indent && line.is_marker(),
        };

        if opens {
            self.opened_at = line.number;
            self.state = State::InFrontMatter;
            Flow::Next
        } else {
            Flow::Absent
        }
    }

    fn in_front_matter(&mut self, line: Line<'a>) -> Result<Flow> {
        match self.wrapper {
            Wrapper::Bare => {
                if line.is_marker() {
                    return Ok(self.close_at(line.end));
                }
                self.region.push(line.text);
            }
            Wrapper::Line(token) => {
                if line.is_blank() {
                    self.region.push("");
                    return Ok(Flow::Next);
                }
                let Some(rest) = strip_comment(line.text, token) else {
                    return Err(malformed(
                        line.number,
                        format!("front matter line is not commented with `{}`", token),
                        Some(format!("Prefix every front matter line with `{}`", token)),
                    ));
                };
                if rest.trim() == MARKER {
                    return Ok(self.close_at(line.end));
                }
                self.region.push(rest);
            }
            Wrapper::Indented(start) => {
                if line.is_blank() {
                    self.region.push("");
                    return Ok(Flow::Next);
                }
                if line.indentation() <= self.base_indent {
                    return Err(malformed(
                        line.number,
                        format!("`{}` comment ends before the closing {}", start, MARKER),
                        Some("Indent the whole front matter under the comment".to_string()),
                    ));
                }
                if line.is_marker() {
                    self.state = State::InWrapper;
                    return Ok(Flow::Next);
                }
                self.region.push(line.text);
            }
            Wrapper::Block { end, .. } => {
                if line.is(end) {
                    return Err(malformed(
                        line.number,
                        format!("`{}` found before the closing {}", end, MARKER),
                        Some(format!("Close the front matter with {} first", MARKER)),
                    ));
                }
                if line.is_marker() {
                    self.state = State::InWrapper;
                    return Ok(Flow::Next);
                }
                self.region.push(line.text);
            }
        }

        Ok(Flow::Next)
    }

    /// Skip the rest of a multiline comment after the closing marker.
    fn in_wrapper(&mut self, line: Line<'a>) -> Flow {
        match self.wrapper {
            Wrapper::Indented(_) => {
                if !line.is_blank() && line.indentation() <= self.base_indent {
                    return self.close_at(line.start);
                }
                Flow::Next
            }
            Wrapper::Block { end, .. } if line.is(end) => self.close_at(line.end),
            _ => Flow::Next,
        }
    }

    fn close_at(&mut self, content_start: usize) -> Flow {
        self.content_start = content_start;
        self.state = State::Done;
        Flow::Done
    }

    fn finish(self, source: &'a str) -> Result<Option<Extraction<'a>>> {
        let content_start = match (self.state, self.wrapper) {
            (State::SeekOpenWrapper | State::SeekOpenMarker, _) => return Ok(None),
            (State::InFrontMatter, _) => {
                return Err(malformed(
                    self.opened_at,
                    format!("missing closing {}", MARKER),
                    Some(format!("Add {} after the front matter", MARKER)),
                ));
            }
            (State::InWrapper, Wrapper::Block { end, .. }) => {
                return Err(malformed(
                    self.opened_at,
                    format!("comment wrapping the front matter is never closed with `{}`", end),
                    None,
                ));
            }
            (State::InWrapper, _) => source.len(),
            (State::Done, _) => self.content_start,
        };

        Ok(Some(Extraction {
            region: dedent(&self.region),
            content: &source[content_start..],
        }))
    }
}

fn malformed(line: usize, message: String, help: Option<String>) -> FmxError {
    FmxError::MalformedFrontMatter {
        line,
        message,
        help,
    }
}
