mod errors;
pub mod event;
pub mod model;
pub mod reducer;
pub mod services;
pub mod state;
pub mod storage;
pub mod view;

pub use errors::ProgramError;
pub use event::{ProgramEffect, ProgramIntent};
use model::RowViewModel;
pub use reducer::ProgramCtx;
use regimen_ui_tree::Projection;
use state::ProgramState;

/// Program widget: owns the blocks and their item trees, the item editor
/// target, and the drag gesture that reorders and nests items.
#[derive(Debug, Default)]
pub struct ProgramWidget {
    state: ProgramState,
}

impl ProgramWidget {
    /// Create a widget with a single empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a widget editing an existing program.
    pub fn with_program(program: model::Program) -> Self {
        Self {
            state: ProgramState::with_program(program),
        }
    }

    /// Reduce an intent into state updates and effects.
    pub fn reduce(
        &mut self,
        intent: ProgramIntent,
        ctx: &ProgramCtx,
    ) -> Option<ProgramEffect> {
        reducer::reduce(&mut self.state, intent, ctx)
    }

    /// Return the edited program.
    pub fn program(&self) -> &model::Program {
        self.state.program()
    }

    /// Return the blocks of the program.
    pub fn blocks(&self) -> &[model::Block] {
        self.state.blocks()
    }

    /// Whether the remove button of a block should be offered.
    pub fn is_block_removable(&self) -> bool {
        self.state.is_block_removable()
    }

    /// Return the live drop projection for a block.
    pub fn projection(
        &self,
        block_id: &str,
        ctx: &ProgramCtx,
    ) -> Option<Projection> {
        self.state.projection(block_id, ctx.indentation_width)
    }

    /// Return the view models of the rows shown for a block.
    ///
    /// While a drag is in progress, the dragged row reports the depth it
    /// would land at.
    pub fn rows(&self, block_id: &str, ctx: &ProgramCtx) -> Vec<RowViewModel> {
        let Some(entries) = self.state.visible_rows(block_id) else {
            return Vec::new();
        };
        let projection = self.projection(block_id, ctx);
        let active_id = self.state.drag().active_id();

        entries
            .into_iter()
            .map(|entry| {
                let is_active = active_id == Some(&entry.id);
                let depth = match &projection {
                    Some(projection) if is_active => projection.depth,
                    _ => entry.depth,
                };
                RowViewModel {
                    depth,
                    indent: depth as f32 * ctx.indentation_width,
                    label: entry.payload.to_string(),
                    collapsible: entry.has_children(),
                    collapsed: entry.collapsed,
                    is_active,
                    id: entry.id,
                }
            })
            .collect()
    }

    /// Return read-only access to state for tests.
    #[cfg(test)]
    pub(crate) fn state(&self) -> &ProgramState {
        &self.state
    }
}
