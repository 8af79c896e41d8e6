//! Comment wrapper configuration.

use serde::{Deserialize, Serialize};

use crate::error::{FmxError, Result};

/// Comment delimiters hiding the front matter from the host format.
///
/// At most one of `comment` and `start_comment` may be set, and
/// `end_comment` requires `start_comment`. The default (nothing set)
/// means the front matter is not wrapped at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapperConfig {
    /// Single-line comment prefix (e.g. `#`, `//`)
    pub comment: Option<String>,
    /// Opening mark of a multiline comment
    pub start_comment: Option<String>,
    /// Closing mark of a multiline comment; when unset the comment is
    /// closed by returning to the indentation of `start_comment`
    pub end_comment: Option<String>,
}

impl WrapperConfig {
    /// No wrapper: front matter sits directly in the document.
    pub fn bare() -> Self {
        Self::default()
    }

    /// Every front matter line prefixed with `comment`.
    pub fn line(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..Self::default()
        }
    }

    /// Multiline comment closed by indentation.
    pub fn indented(start_comment: impl Into<String>) -> Self {
        Self {
            start_comment: Some(start_comment.into()),
            ..Self::default()
        }
    }

    /// Multiline comment with explicit start and end marks.
    pub fn block(start_comment: impl Into<String>, end_comment: impl Into<String>) -> Self {
        Self {
            comment: None,
            start_comment: Some(start_comment.into()),
            end_comment: Some(end_comment.into()),
        }
    }

    pub(crate) fn from_static(
        comment: Option<&str>,
        start_comment: Option<&str>,
        end_comment: Option<&str>,
    ) -> Self {
        Self {
            comment: comment.map(str::to_string),
            start_comment: start_comment.map(str::to_string),
            end_comment: end_comment.map(str::to_string),
        }
    }

    /// Check the field combination and borrow it as a [`Wrapper`].
    pub fn wrapper(&self) -> Result<Wrapper<'_>> {
        match (
            self.comment.as_deref(),
            self.start_comment.as_deref(),
            self.end_comment.as_deref(),
        ) {
            (Some(_), Some(_), _) => Err(FmxError::InvalidConfig {
                message: "comment and start_comment are mutually exclusive".to_string(),
                help: Some("Use comment for line comments, start_comment for multiline ones".to_string()),
            }),
            (_, None, Some(_)) => Err(FmxError::InvalidConfig {
                message: "end_comment given without start_comment".to_string(),
                help: Some("Add a start_comment to open the multiline comment".to_string()),
            }),
            (Some(token), None, None) => Ok(Wrapper::Line(non_empty(token, "comment")?)),
            (None, Some(start), None) => Ok(Wrapper::Indented(non_empty(start, "start_comment")?)),
            (None, Some(start), Some(end)) => Ok(Wrapper::Block {
                start: non_empty(start, "start_comment")?,
                end: non_empty(end, "end_comment")?,
            }),
            (None, None, None) => Ok(Wrapper::Bare),
        }
    }
}

fn non_empty<'a>(token: &'a str, field: &str) -> Result<&'a str> {
    let token = token.trim();
    if token.is_empty() {
        return Err(FmxError::InvalidConfig {
            message: format!("{} must not be blank", field),
            help: None,
        });
    }
    Ok(token)
}

/// A validated wrapper, borrowed from its [`WrapperConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapper<'a> {
    /// Front matter is not wrapped
    Bare,
    /// Each front matter line starts with this token
    Line(&'a str),
    /// Multiline comment opened by this token and closed by indentation
    Indented(&'a str),
    /// Multiline comment with explicit start and end tokens
    Block { start: &'a str, end: &'a str },
}
