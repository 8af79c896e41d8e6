//! Comment conventions for front matter hidden in host documents.
//!
//! Markup templates, stylesheets and scripting templates each need their
//! front matter tucked inside a native comment. A [`Syntax`] names one such
//! convention and the [`SyntaxTable`] maps it to a [`WrapperConfig`].
//!
//! # Usage
//!
//! ```ignore
//! use fmx::syntax::{Syntax, SyntaxTable};
//!
//! let table = SyntaxTable::global();
//! let syntax = table.resolve_by_extension("slim")?;
//! let wrapper = table.resolve(syntax)?;
//! ```

mod config;
mod table;

pub use config::{Wrapper, WrapperConfig};
pub use table::{Syntax, SyntaxTable};
