use super::event::{ProgramEffect, ProgramIntent};
use super::state::ProgramState;

/// Runtime context for the program reducer.
#[derive(Debug, Clone, Copy)]
pub struct ProgramCtx {
    /// Width of one nesting level, in pixels.
    pub indentation_width: f32,
}

/// Reduce a program intent into state updates and effects.
///
/// Rejected intents are logged and leave the state untouched.
pub fn reduce(
    state: &mut ProgramState,
    intent: ProgramIntent,
    ctx: &ProgramCtx,
) -> Option<ProgramEffect> {
    match intent {
        ProgramIntent::AddBlock => {
            let id = state.add_block();
            log::debug!("block {id} added");
            Some(ProgramEffect::ProgramChanged)
        },
        ProgramIntent::RenameBlock { block_id, name } => {
            changed(state.rename_block(&block_id, name), "rename block")
        },
        ProgramIntent::RemoveBlock { block_id } => {
            changed(state.remove_block(&block_id), "remove block")
        },
        ProgramIntent::AddItemPressed { block_id, kind } => {
            match state.open_item_editor(&block_id) {
                Ok(()) => Some(ProgramEffect::OpenItemEditor {
                    block_id,
                    draft: kind.draft(),
                }),
                Err(err) => {
                    log::warn!("open item editor failed: {err}");
                    None
                },
            }
        },
        ProgramIntent::ItemSubmitted { block_id, data } => {
            if state.editing_block() == Some(block_id.as_str()) {
                state.close_item_editor();
            } else {
                log::debug!(
                    "item submitted for {block_id} while editor targets {:?}",
                    state.editing_block()
                );
            }
            changed(state.append_item(&block_id, data), "add item")
        },
        ProgramIntent::ItemEditorClosed => {
            state.close_item_editor();
            None
        },
        ProgramIntent::ToggleCollapsed { block_id, id } => {
            changed(state.toggle_collapsed(&block_id, &id), "toggle collapsed")
        },
        ProgramIntent::Duplicate { block_id, id } => {
            changed(state.duplicate_item(&block_id, &id), "duplicate item")
        },
        ProgramIntent::Remove { block_id, id } => {
            changed(state.remove_item(&block_id, &id), "remove item")
        },
        ProgramIntent::DragStarted { block_id, id } => {
            if let Err(err) = state.start_drag(&block_id, id) {
                log::warn!("drag start rejected: {err}");
            }
            None
        },
        ProgramIntent::DragMoved { offset } => {
            if let Err(err) = state.move_drag(offset) {
                log::warn!("drag move rejected: {err}");
            }
            None
        },
        ProgramIntent::DragOver { id } => {
            if let Err(err) = state.drag_over(id) {
                log::warn!("drag over rejected: {err}");
            }
            None
        },
        ProgramIntent::DragEnded => {
            match state.end_drag(ctx.indentation_width) {
                Ok(true) => Some(ProgramEffect::ProgramChanged),
                Ok(false) => None,
                Err(err) => {
                    log::warn!("drag end rejected: {err}");
                    None
                },
            }
        },
        ProgramIntent::DragCancelled => {
            if !state.cancel_drag() {
                log::debug!("drag cancel without drag in progress");
            }
            None
        },
    }
}

fn changed<T, E: std::fmt::Display>(
    result: Result<T, E>,
    action: &str,
) -> Option<ProgramEffect> {
    match result {
        Ok(_) => Some(ProgramEffect::ProgramChanged),
        Err(err) => {
            log::warn!("{action} failed: {err}");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use regimen_ui_tree::NodeId;

    use super::*;
    use crate::widgets::program::model::{ItemKind, Program, WorkoutData};

    fn ctx() -> ProgramCtx {
        ProgramCtx {
            indentation_width: 50.0,
        }
    }

    fn sample_state() -> ProgramState {
        ProgramState::with_program(Program::sample())
    }

    #[test]
    fn given_add_item_pressed_when_reduced_then_editor_effect_carries_draft() {
        let mut state = sample_state();

        let effect = reduce(
            &mut state,
            ProgramIntent::AddItemPressed {
                block_id: String::from("block-a"),
                kind: ItemKind::Rest,
            },
            &ctx(),
        );

        assert_eq!(
            effect,
            Some(ProgramEffect::OpenItemEditor {
                block_id: String::from("block-a"),
                draft: WorkoutData::Rest { duration: 60 },
            })
        );
        assert_eq!(state.editing_block(), Some("block-a"));
    }

    #[test]
    fn given_item_submitted_when_reduced_then_item_is_appended_and_editor_closed()
     {
        let mut state = sample_state();
        let _ = reduce(
            &mut state,
            ProgramIntent::AddItemPressed {
                block_id: String::from("block-a"),
                kind: ItemKind::Repeat,
            },
            &ctx(),
        );

        let effect = reduce(
            &mut state,
            ProgramIntent::ItemSubmitted {
                block_id: String::from("block-a"),
                data: ItemKind::Repeat.draft(),
            },
            &ctx(),
        );

        assert_eq!(effect, Some(ProgramEffect::ProgramChanged));
        assert_eq!(state.editing_block(), None);
        let items = state.blocks()[0].items();
        assert_eq!(items.len(), 5);
        assert_eq!(items[4].children, Some(Vec::new()));
    }

    #[test]
    fn given_item_submitted_for_other_block_when_reduced_then_editor_stays_open()
     {
        let mut state = sample_state();
        let _ = reduce(&mut state, ProgramIntent::AddBlock, &ctx());
        let _ = reduce(
            &mut state,
            ProgramIntent::AddItemPressed {
                block_id: String::from("block-a"),
                kind: ItemKind::Rest,
            },
            &ctx(),
        );
        let other = state.blocks()[1].id().to_string();

        let effect = reduce(
            &mut state,
            ProgramIntent::ItemSubmitted {
                block_id: other,
                data: ItemKind::Rest.draft(),
            },
            &ctx(),
        );

        assert_eq!(effect, Some(ProgramEffect::ProgramChanged));
        assert_eq!(state.editing_block(), Some("block-a"));
        assert_eq!(state.blocks()[0].items().len(), 4);
        assert_eq!(state.blocks()[1].items().len(), 1);
    }

    #[test]
    fn given_add_item_for_unknown_block_when_reduced_then_no_effect() {
        let mut state = sample_state();

        let effect = reduce(
            &mut state,
            ProgramIntent::AddItemPressed {
                block_id: String::from("missing"),
                kind: ItemKind::Exercise,
            },
            &ctx(),
        );

        assert_eq!(effect, None);
        assert_eq!(state.editing_block(), None);
    }

    #[test]
    fn given_remove_of_repeat_when_reduced_then_children_move_up() {
        let mut state = sample_state();

        let effect = reduce(
            &mut state,
            ProgramIntent::Remove {
                block_id: String::from("block-a"),
                id: NodeId::from("item1"),
            },
            &ctx(),
        );

        assert_eq!(effect, Some(ProgramEffect::ProgramChanged));
        let ids: Vec<&str> = state.blocks()[0]
            .items()
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["item1.1", "item2", "item3", "item4"]);
    }

    #[test]
    fn given_remove_of_last_block_when_reduced_then_state_is_not_mutated() {
        let mut state = sample_state();

        let effect = reduce(
            &mut state,
            ProgramIntent::RemoveBlock {
                block_id: String::from("block-a"),
            },
            &ctx(),
        );

        assert_eq!(effect, None);
        assert_eq!(state.blocks().len(), 1);
    }

    #[test]
    fn given_rename_when_reduced_then_block_name_is_updated() {
        let mut state = sample_state();

        let effect = reduce(
            &mut state,
            ProgramIntent::RenameBlock {
                block_id: String::from("block-a"),
                name: String::from("Strength"),
            },
            &ctx(),
        );

        assert_eq!(effect, Some(ProgramEffect::ProgramChanged));
        assert_eq!(state.blocks()[0].name(), "Strength");
    }

    #[test]
    fn given_full_drag_gesture_when_reduced_then_tree_is_committed_once() {
        let mut state = sample_state();
        let events = [
            ProgramIntent::DragStarted {
                block_id: String::from("block-a"),
                id: NodeId::from("item4"),
            },
            ProgramIntent::DragOver {
                id: Some(NodeId::from("item2")),
            },
            ProgramIntent::DragMoved { offset: 10.0 },
        ];
        for event in events {
            assert_eq!(reduce(&mut state, event, &ctx()), None);
        }

        let effect = reduce(&mut state, ProgramIntent::DragEnded, &ctx());

        assert_eq!(effect, Some(ProgramEffect::ProgramChanged));
        let ids: Vec<&str> = state.blocks()[0]
            .items()
            .iter()
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(ids, vec!["item1", "item4", "item2", "item3"]);
        assert!(!state.drag().is_dragging());
    }

    #[test]
    fn given_drag_cancelled_when_reduced_then_tree_is_unchanged() {
        let mut state = sample_state();
        let before = state.program().clone();
        let _ = reduce(
            &mut state,
            ProgramIntent::DragStarted {
                block_id: String::from("block-a"),
                id: NodeId::from("item2"),
            },
            &ctx(),
        );
        let _ = reduce(
            &mut state,
            ProgramIntent::DragMoved { offset: 50.0 },
            &ctx(),
        );

        let effect = reduce(&mut state, ProgramIntent::DragCancelled, &ctx());

        assert_eq!(effect, None);
        assert_eq!(state.program(), &before);
        assert!(!state.drag().is_dragging());
    }

    #[test]
    fn given_drag_end_without_drag_when_reduced_then_no_effect() {
        let mut state = sample_state();

        let effect = reduce(&mut state, ProgramIntent::DragEnded, &ctx());

        assert_eq!(effect, None);
    }
}
