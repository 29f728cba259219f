//! Error types for Flow declaration generation.

use thiserror::Error;

/// Error type for generation operations.
///
/// Every variant is fatal for the whole request: the input schema set is
/// inconsistent and no partial output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A message-typed field references a type no file exports.
    #[error("no message export for: {0}")]
    MissingMessageExport(String),

    /// An enum-typed field references a type no file exports.
    #[error("no enum export for: {0}")]
    MissingEnumExport(String),

    /// A message flagged `map_entry` lacks its `key` or `value` field.
    #[error("malformed map entry: {0}")]
    MalformedMapEntry(String),

    /// The file declares a syntax this generator does not know.
    #[error("unknown syntax `{syntax}` in {file}")]
    UnknownSyntax {
        /// File name.
        file: String,
        /// Declared syntax.
        syntax: String,
    },

    /// A file listed in `file_to_generate` is missing from `proto_file`.
    #[error("file to generate not found in request: {0}")]
    MissingFile(String),

    /// Two imports of one file derive the same pseudo-namespace.
    #[error("import namespace `{namespace}` is derived from both {first} and {second}")]
    NamespaceCollision {
        /// Derived namespace identifier.
        namespace: String,
        /// First dependency path.
        first: String,
        /// Second dependency path.
        second: String,
    },

    /// The plugin parameter string could not be parsed.
    #[error("invalid plugin parameter: {0}")]
    InvalidParameter(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
