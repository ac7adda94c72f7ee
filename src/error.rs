use thiserror::Error;

/// Errors that can occur while inspecting a document
#[derive(Debug, Error)]
pub enum InspectorError {
    /// No document has been loaded, or the document has no root element
    #[error("No document available: {0}")]
    DocumentUnavailable(String),

    /// A single node could not be read during traversal. Contained per-node:
    /// the extractor emits a sentinel node and keeps walking.
    #[error("Failed to read node at {path}: {reason}")]
    NodeAccess { path: String, reason: String },

    /// The response channel failed (unknown action, dropped consumer, ...)
    #[error("Communication failed: {0}")]
    Communication(String),

    /// A consumer received a malformed or missing payload
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The document could not be parsed into a tree
    #[error("Failed to parse document: {0}")]
    ParseFailed(String),

    /// A snapshot could not be serialized for export
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
}

/// Result type alias for inspector operations
pub type Result<T> = std::result::Result<T, InspectorError>;
