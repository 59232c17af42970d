use regimen_ui_tree::{
    DragSession, FlatEntry, NodeId, Projection, apply_drop, duplicate_node,
    remove_node, toggle_collapsed, visible_entries,
};

use super::errors::ProgramError;
use super::model::{Block, Item, Program, WorkoutData};
use super::services::{block_name, new_block_id, new_node_id};

/// Runtime state for the program editor.
#[derive(Debug, Default)]
pub struct ProgramState {
    program: Program,
    drag: DragSession,
    drag_block: Option<String>,
    editing_block: Option<String>,
}

impl ProgramState {
    /// Create state around an existing program.
    pub fn with_program(program: Program) -> Self {
        Self {
            program,
            ..Self::default()
        }
    }

    // --- Read access ---

    /// Return the edited program.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Return the blocks of the program.
    pub fn blocks(&self) -> &[Block] {
        self.program.blocks()
    }

    /// Return the block with the given id.
    pub fn block(&self, block_id: &str) -> Option<&Block> {
        self.program.block(block_id)
    }

    /// Whether a block may currently be removed.
    pub fn is_block_removable(&self) -> bool {
        self.program.blocks().len() > 1
    }

    /// Return the drag gesture tracker.
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Return the block the dragged item belongs to.
    pub fn drag_block(&self) -> Option<&str> {
        self.drag_block.as_deref()
    }

    /// Return the block the item editor was opened for.
    pub fn editing_block(&self) -> Option<&str> {
        self.editing_block.as_deref()
    }

    /// Return the rows currently shown for a block.
    ///
    /// Children of collapsed items are hidden, and so are the children of
    /// the dragged item when the drag happens in this block.
    pub fn visible_rows(
        &self,
        block_id: &str,
    ) -> Option<Vec<FlatEntry<WorkoutData>>> {
        let block = self.program.block(block_id)?;
        let active = if self.drag_block.as_deref() == Some(block_id) {
            self.drag.active_id()
        } else {
            None
        };
        Some(visible_entries(block.items(), active))
    }

    /// Return the live drop projection for a block, if it hosts the drag.
    pub fn projection(
        &self,
        block_id: &str,
        indentation_width: f32,
    ) -> Option<Projection> {
        if self.drag_block.as_deref() != Some(block_id) {
            return None;
        }
        let rows = self.visible_rows(block_id)?;
        self.drag.projection(&rows, indentation_width)
    }

    // --- Write access ---

    /// Append a new empty block and return its id.
    pub(super) fn add_block(&mut self) -> String {
        let id = new_block_id();
        let name = block_name(self.program.blocks.len());
        self.program.blocks.push(Block::new(id.clone(), name, Vec::new()));
        id
    }

    /// Rename a block.
    pub(super) fn rename_block(
        &mut self,
        block_id: &str,
        name: String,
    ) -> Result<(), ProgramError> {
        let block = self.block_mut(block_id)?;
        block.name = name;
        Ok(())
    }

    /// Remove a block, unless it is the last one.
    pub(super) fn remove_block(
        &mut self,
        block_id: &str,
    ) -> Result<Block, ProgramError> {
        let index = self
            .program
            .blocks
            .iter()
            .position(|block| block.id == block_id)
            .ok_or_else(|| ProgramError::UnknownBlock(block_id.to_string()))?;
        if !self.is_block_removable() {
            return Err(ProgramError::LastBlock);
        }

        if self.drag_block.as_deref() == Some(block_id) {
            self.cancel_drag();
        }
        if self.editing_block.as_deref() == Some(block_id) {
            self.editing_block = None;
        }
        Ok(self.program.blocks.remove(index))
    }

    /// Remember which block the item editor is open for.
    pub(super) fn open_item_editor(
        &mut self,
        block_id: &str,
    ) -> Result<(), ProgramError> {
        self.block_mut(block_id)?;
        self.editing_block = Some(block_id.to_string());
        Ok(())
    }

    /// Forget the open item editor, returning its block.
    pub(super) fn close_item_editor(&mut self) -> Option<String> {
        self.editing_block.take()
    }

    /// Append a new top-level item to a block and return its id.
    pub(super) fn append_item(
        &mut self,
        block_id: &str,
        data: WorkoutData,
    ) -> Result<NodeId, ProgramError> {
        let block = self.block_mut(block_id)?;
        let id = new_node_id();
        block.items.push(Item::new(id.clone(), data));
        Ok(id)
    }

    /// Flip the collapsed flag of an item.
    pub(super) fn toggle_collapsed(
        &mut self,
        block_id: &str,
        id: &NodeId,
    ) -> Result<(), ProgramError> {
        let block = self.block_mut(block_id)?;
        if !toggle_collapsed(&mut block.items, id) {
            return Err(ProgramError::UnknownItem(id.clone()));
        }
        Ok(())
    }

    /// Duplicate an item with its children and return the copy's id.
    pub(super) fn duplicate_item(
        &mut self,
        block_id: &str,
        id: &NodeId,
    ) -> Result<NodeId, ProgramError> {
        let block = self.block_mut(block_id)?;
        let mut ids = new_node_id;
        duplicate_node(&mut block.items, id, &mut ids)
            .ok_or_else(|| ProgramError::UnknownItem(id.clone()))
    }

    /// Remove an item, moving its children up one level.
    pub(super) fn remove_item(
        &mut self,
        block_id: &str,
        id: &NodeId,
    ) -> Result<Item, ProgramError> {
        let block = self.block_mut(block_id)?;
        remove_node(&mut block.items, id)
            .ok_or_else(|| ProgramError::UnknownItem(id.clone()))
    }

    /// Start dragging an item of a block.
    pub(super) fn start_drag(
        &mut self,
        block_id: &str,
        id: NodeId,
    ) -> Result<(), ProgramError> {
        self.block_mut(block_id)?;
        self.drag.start(id)?;
        self.drag_block = Some(block_id.to_string());
        Ok(())
    }

    /// Record the horizontal pointer offset of the drag.
    pub(super) fn move_drag(&mut self, offset: f32) -> Result<(), ProgramError> {
        self.drag.move_by(offset)?;
        Ok(())
    }

    /// Record the item under the pointer.
    pub(super) fn drag_over(
        &mut self,
        id: Option<NodeId>,
    ) -> Result<(), ProgramError> {
        self.drag.over(id)?;
        Ok(())
    }

    /// Finish the drag and commit the drop.
    ///
    /// Returns `true` when the items of the block changed.
    pub(super) fn end_drag(
        &mut self,
        indentation_width: f32,
    ) -> Result<bool, ProgramError> {
        let rows = self
            .drag_block
            .as_deref()
            .and_then(|block_id| self.visible_rows(block_id))
            .unwrap_or_default();
        let block_id = self.drag_block.take();
        let target = self.drag.end(&rows, indentation_width)?;

        let (Some(block_id), Some(target)) = (block_id, target) else {
            return Ok(false);
        };
        let block = self.block_mut(&block_id)?;
        let Some(items) = apply_drop(&block.items, &target) else {
            return Ok(false);
        };

        let changed = items != block.items;
        block.items = items;
        Ok(changed)
    }

    /// Abandon the drag. Returns `false` when no drag was in progress.
    pub(super) fn cancel_drag(&mut self) -> bool {
        self.drag_block = None;
        self.drag.cancel()
    }

    fn block_mut(&mut self, block_id: &str) -> Result<&mut Block, ProgramError> {
        self.program
            .block_mut(block_id)
            .ok_or_else(|| ProgramError::UnknownBlock(block_id.to_string()))
    }
}
