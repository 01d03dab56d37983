//! Error types for class-name construction.

/// Errors raised when binding identifier segments or loading conventions.
///
/// Falsy modifier values are never errors: they only mean the modifier is
/// absent.
#[derive(Debug, thiserror::Error)]
pub enum AbemError {
    /// A block name must contain at least one character.
    #[error("block name must not be empty")]
    EmptyBlock,

    /// An element name must contain at least one character.
    #[error("element name must not be empty")]
    EmptyElement,

    /// A name would split into more than one class.
    #[error("invalid name `{name}`: {reason}")]
    InvalidName { name: String, reason: String },

    /// The bound identifier already names an element.
    #[error("`{identifier}` already names an element; cannot add element `{element}`")]
    NestedElement { identifier: String, element: String },

    /// A loosely typed argument matched none of the accepted shapes.
    #[error("argument {position} has unsupported shape: {found}")]
    UnsupportedArgument { position: usize, found: String },

    /// More than block, element and modifiers were supplied.
    #[error("expected at most 3 arguments, got {0}")]
    TooManyArguments(usize),

    #[error("invalid conventions: {0}")]
    InvalidConventions(String),

    #[error("failed to read config: {path}: {source}")]
    ReadConfig {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseConfig {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
