//! Terminal error types

/// Error returned when parsing a command line fails
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Blank input
    #[error("empty command line")]
    Empty,

    /// First word is not in the command table
    #[error("{0}: command not found")]
    UnknownCommand(String),
}

/// Errors from terminal configuration
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Configuration values are unusable
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
