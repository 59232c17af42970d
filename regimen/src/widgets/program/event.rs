use regimen_ui_tree::NodeId;

use super::model::{ItemKind, WorkoutData};

/// Intent events handled by the program editor.
#[derive(Debug, Clone)]
pub enum ProgramIntent {
    /// Append a new block after the last one.
    AddBlock,
    /// Change the name of a block.
    RenameBlock { block_id: String, name: String },
    /// Delete a block and its items.
    RemoveBlock { block_id: String },
    /// The "add item" button of a block was pressed.
    AddItemPressed { block_id: String, kind: ItemKind },
    /// The item editor submitted new content.
    ItemSubmitted { block_id: String, data: WorkoutData },
    /// The item editor was dismissed without submitting.
    ItemEditorClosed,
    /// Show or hide the children of an item.
    ToggleCollapsed { block_id: String, id: NodeId },
    /// Insert a copy of an item right after it.
    Duplicate { block_id: String, id: NodeId },
    /// Delete an item, keeping its children.
    Remove { block_id: String, id: NodeId },
    /// An item was grabbed.
    DragStarted { block_id: String, id: NodeId },
    /// The pointer moved horizontally since the item was grabbed.
    DragMoved { offset: f32 },
    /// The pointer entered another item, or left every item.
    DragOver { id: Option<NodeId> },
    /// The item was released.
    DragEnded,
    /// The drag was abandoned.
    DragCancelled,
}

/// Effect events produced by the program reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramEffect {
    /// Ask the content-authoring layer to edit a new item.
    OpenItemEditor { block_id: String, draft: WorkoutData },
    /// The program changed and may be persisted.
    ProgramChanged,
}
