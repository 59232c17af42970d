use regimen_ui_tree::{DragError, NodeId};
use thiserror::Error;

/// Errors emitted during program editing.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown block: {0}")]
    UnknownBlock(String),
    #[error("Unknown item: {0}")]
    UnknownItem(NodeId),
    #[error("The last remaining block cannot be removed.")]
    LastBlock,
    #[error("Drag error: {0}")]
    Drag(#[from] DragError),
}
