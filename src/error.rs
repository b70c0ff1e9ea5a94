//! Defines custom error types for the application.

use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when resolving or publishing a description fails.
pub enum SyncError {
    #[error("Required environment variable {0} is not set or empty")]
    MissingVariable(&'static str),

    #[error("No description file found at {0}.html or {0}.md")]
    DescriptionNotFound(String),

    #[error("Description resolved to empty content")]
    EmptyDescription,

    #[error("Failed to parse description Markdown: {0}")]
    MarkdownParse(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Pyxis request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected Pyxis response: {0}")]
    ResponseFormat(String),
}
