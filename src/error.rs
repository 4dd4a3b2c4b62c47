//! Error types for toolbox operations.

use thiserror::Error;

/// Errors that can occur while building or driving the toolbox.
#[derive(Error, Debug)]
pub enum ToolboxError {
    /// XML parsing error in the category tree
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Structurally invalid category tree
    #[error("Malformed category tree: {message}")]
    MalformedTree {
        /// Description of the problem
        message: String,
    },

    /// `init` was called on a toolbox that already holds categories
    #[error("Toolbox is already initialized")]
    AlreadyInitialized,

    /// Lookup by id or name matched no category
    #[error("Category not found: {key}")]
    UnknownCategory {
        /// The id or name that was looked up
        key: String,
    },
}

impl ToolboxError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        ToolboxError::MalformedTree {
            message: message.into(),
        }
    }

    pub(crate) fn unknown(key: impl Into<String>) -> Self {
        ToolboxError::UnknownCategory { key: key.into() }
    }
}
