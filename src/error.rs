//! Undo Bar Errors
//!
//! Every failure the undo bar can run into. None of them reach the user:
//! they are recorded, logged and dropped.

/// Common result type for undo bar operations
pub type UndoResult<T> = Result<T, UndoError>;

/// Undo bar errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoError {
    /// A host object (window, document) is unavailable
    MissingCollaborator(&'static str),
    /// A required `data-*` attribute is absent on the undo bar
    MissingAttribute(&'static str),
    /// The undo bar's attributes could not be read
    Config(String),
    /// The element to remove is not in the document
    ElementMissing(String),
    /// The host refused to detach the element
    Removal(String),
    /// Building or dispatching the finalize request failed
    Request(String),
}

impl std::fmt::Display for UndoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UndoError::MissingCollaborator(what) => write!(f, "Missing collaborator: {}", what),
            UndoError::MissingAttribute(name) => write!(f, "Missing attribute: data-{}", name),
            UndoError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            UndoError::ElementMissing(id) => write!(f, "Element not found: #{}", id),
            UndoError::Removal(msg) => write!(f, "Removal failed: {}", msg),
            UndoError::Request(msg) => write!(f, "Finalize request failed: {}", msg),
        }
    }
}

impl std::error::Error for UndoError {}
