use std::{fmt, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Result type for idlgen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The kind of schema item an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentKind {
    Enum,
    EnumValue,
    Typedef,
    Const,
    Service,
    Function,
    Parameter,
    /// A declared exception in a function's `throws` clause.
    Throws,
    Struct,
    Exception,
    Field,
}

impl IdentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentKind::Enum => "enum",
            IdentKind::EnumValue => "enum value",
            IdentKind::Typedef => "typedef",
            IdentKind::Const => "const",
            IdentKind::Service => "service",
            IdentKind::Function => "function",
            IdentKind::Parameter => "parameter",
            IdentKind::Throws => "throws field",
            IdentKind::Struct => "struct",
            IdentKind::Exception => "exception",
            IdentKind::Field => "field",
        }
    }
}

impl fmt::Display for IdentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot use reserved language keyword \"{name}\" as {kind} name")]
    #[diagnostic(
        code(idlgen::naming_conflict),
        help("rename '{name}' at {location}, e.g. '{name}_'")
    )]
    NamingConflict {
        name: String,
        kind: IdentKind,
        /// Dotted path to the offending item (e.g. "Point.class").
        location: String,
    },

    #[error("malformed generator option '{input}': {reason}")]
    #[diagnostic(
        code(idlgen::malformed_option),
        help("expected 'language[:opt1[=val1][,opt2[=val2]]*]'")
    )]
    MalformedOption { input: String, reason: String },

    #[error("failed to write the output to the file '{path}'")]
    #[diagnostic(code(idlgen::output))]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a naming conflict error
    pub fn naming_conflict(
        name: impl Into<String>,
        kind: IdentKind,
        location: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::NamingConflict {
            name: name.into(),
            kind,
            location: location.into(),
        })
    }

    /// Create a malformed option error
    pub fn malformed_option(input: impl Into<String>, reason: impl Into<String>) -> Box<Self> {
        Box::new(Error::MalformedOption {
            input: input.into(),
            reason: reason.into(),
        })
    }

    /// Create an output error for `path`
    pub fn output(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Output {
            path: path.into(),
            source,
        })
    }
}
