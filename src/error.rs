use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fmx operations
#[derive(Error, Diagnostic, Debug)]
pub enum FmxError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(fmx::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid wrapper config: {message}")]
    #[diagnostic(code(fmx::invalid_config))]
    InvalidConfig {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown syntax or extension: {name}")]
    #[diagnostic(
        code(fmx::unknown_convention),
        help("Known syntaxes: slim, coffee, html, haml, liquid, sass, scss, md")
    )]
    UnknownConvention { name: String },

    #[error("Malformed front matter at line {line}: {message}")]
    #[diagnostic(code(fmx::malformed))]
    MalformedFrontMatter {
        line: usize,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error(transparent)]
    #[diagnostic(code(fmx::decode))]
    Decode(#[from] serde_yaml::Error),

    #[error("Invalid manifest: {message}")]
    #[diagnostic(code(fmx::manifest), help("Check fmx.yaml syntax"))]
    Manifest { message: String },

    #[error("Failed to write output: {message}")]
    #[diagnostic(code(fmx::output))]
    Output { message: String },

    #[error("{failed} file(s) failed to parse")]
    #[diagnostic(code(fmx::check))]
    Check { failed: usize },
}

pub type Result<T> = std::result::Result<T, FmxError>;
