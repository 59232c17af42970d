//! Drag gesture state and drop commit.
//!
//! A gesture goes `idle -> dragging -> idle`. While dragging, every pointer
//! move or hover change only updates the session; the projection is
//! recomputed from scratch on demand. The tree is replaced once, when the
//! gesture ends with a valid target.

use thiserror::Error;

use crate::build::build_tree;
use crate::flatten::{descendant_run, flatten_tree, position_of};
use crate::model::{FlatEntry, Node, NodeId, Projection};
use crate::projection::get_projection;

/// Misuse of the drag gesture state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    #[error("drag of {0} is already in progress")]
    AlreadyDragging(NodeId),
    #[error("no drag in progress")]
    NotDragging,
}

/// Pointer state of an ongoing drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Node being dragged.
    pub active_id: NodeId,
    /// Node currently hovered, if any.
    pub over_id: Option<NodeId>,
    /// Horizontal displacement since drag start, in pixels.
    pub offset: f32,
}

/// Resolved outcome of a finished drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DropTarget {
    /// Node being dropped.
    pub active_id: NodeId,
    /// Node the pointer was over on release.
    pub over_id: NodeId,
    /// Depth and parent the dropped node takes.
    pub projection: Projection,
}

/// Drag gesture tracker.
#[derive(Debug, Default)]
pub struct DragSession {
    state: Option<DragState>,
}

impl DragSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read access ---

    /// Return the ongoing drag, if any.
    pub fn state(&self) -> Option<&DragState> {
        self.state.as_ref()
    }

    /// Return the id of the dragged node.
    pub fn active_id(&self) -> Option<&NodeId> {
        self.state.as_ref().map(|state| &state.active_id)
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    /// Compute the live projection against the visible rows.
    ///
    /// `entries` must be the rows shown while dragging, that is with the
    /// children of the active node removed. Returns `None` when idle, when
    /// nothing is hovered, or when either id is not among `entries`.
    pub fn projection<P>(
        &self,
        entries: &[FlatEntry<P>],
        indentation_width: f32,
    ) -> Option<Projection> {
        let state = self.state.as_ref()?;
        let over_id = state.over_id.as_ref()?;
        get_projection(
            entries,
            &state.active_id,
            over_id,
            state.offset,
            indentation_width,
        )
    }

    // --- Transitions ---

    /// Start dragging a node. The node initially hovers over itself.
    ///
    /// A second start while dragging is rejected and the ongoing drag is
    /// left untouched.
    pub fn start(&mut self, active_id: NodeId) -> Result<(), DragError> {
        if let Some(state) = &self.state {
            return Err(DragError::AlreadyDragging(state.active_id.clone()));
        }

        self.state = Some(DragState {
            over_id: Some(active_id.clone()),
            active_id,
            offset: 0.0,
        });
        Ok(())
    }

    /// Record the horizontal displacement since drag start.
    pub fn move_by(&mut self, offset: f32) -> Result<(), DragError> {
        let state = self.state.as_mut().ok_or(DragError::NotDragging)?;
        state.offset = offset;
        Ok(())
    }

    /// Record the node under the pointer.
    pub fn over(&mut self, over_id: Option<NodeId>) -> Result<(), DragError> {
        let state = self.state.as_mut().ok_or(DragError::NotDragging)?;
        state.over_id = over_id;
        Ok(())
    }

    /// Finish the drag and resolve where the node lands.
    ///
    /// The session is idle afterwards whatever the outcome. Returns
    /// `Ok(None)` when there is nothing to commit.
    pub fn end<P>(
        &mut self,
        entries: &[FlatEntry<P>],
        indentation_width: f32,
    ) -> Result<Option<DropTarget>, DragError> {
        let projection = self.projection(entries, indentation_width);
        let state = self.state.take().ok_or(DragError::NotDragging)?;

        let (Some(over_id), Some(projection)) = (state.over_id, projection)
        else {
            log::debug!("drag of {} ended without a target", state.active_id);
            return Ok(None);
        };

        Ok(Some(DropTarget {
            active_id: state.active_id,
            over_id,
            projection,
        }))
    }

    /// Abandon the drag. Returns `false` when no drag was in progress.
    pub fn cancel(&mut self) -> bool {
        self.state.take().is_some()
    }
}

/// Apply a drop to a full flat sequence.
///
/// The active entry moves together with its descendants: after the over
/// entry when moving down, before it when moving up, in place when hovering
/// itself. The active entry takes the projected depth and parent, and its
/// descendants keep their relative depth. When a container lands on a
/// nested entry, the siblings that follow it inside the same parent are
/// handed over to the container.
///
/// Returns `false` and leaves `entries` untouched when either id is absent.
pub fn move_entry<P>(
    entries: &mut Vec<FlatEntry<P>>,
    target: &DropTarget,
) -> bool {
    let Some(active_index) = position_of(entries, &target.active_id) else {
        log::debug!("drop: active node {} not found", target.active_id);
        return false;
    };
    let Some(over_index) = position_of(entries, &target.over_id) else {
        log::debug!("drop: over node {} not found", target.over_id);
        return false;
    };

    let span = 1 + descendant_run(entries, active_index);
    let in_place = (active_index..active_index + span).contains(&over_index);
    let split_parent = if in_place || !entries[active_index].supports_children
    {
        None
    } else {
        entries[over_index].parent_id.clone()
    };

    let insert_at = if in_place {
        active_index
    } else if over_index > active_index {
        over_index - span + 1
    } else {
        over_index
    };

    let block: Vec<FlatEntry<P>> =
        entries.drain(active_index..active_index + span).collect();
    entries.splice(insert_at..insert_at, block);

    let old_depth = entries[insert_at].depth;
    let new_depth = target.projection.depth;
    for entry in &mut entries[insert_at..insert_at + span] {
        entry.depth = entry.depth - old_depth + new_depth;
    }
    entries[insert_at].parent_id = target.projection.parent_id.clone();

    if let Some(split_parent) = split_parent {
        adopt_following_siblings(
            entries,
            insert_at + span,
            &split_parent,
            &target.active_id,
            new_depth + 1,
        );
    }

    true
}

fn adopt_following_siblings<P>(
    entries: &mut [FlatEntry<P>],
    start: usize,
    former_parent: &NodeId,
    new_parent: &NodeId,
    child_depth: usize,
) {
    let mut cursor = start;
    while cursor < entries.len()
        && entries[cursor].parent_id.as_ref() == Some(former_parent)
    {
        let run = descendant_run(entries, cursor);
        let old_depth = entries[cursor].depth;
        for entry in &mut entries[cursor..=cursor + run] {
            entry.depth = entry.depth - old_depth + child_depth;
        }
        entries[cursor].parent_id = Some(new_parent.clone());
        cursor += run + 1;
    }
}

/// Commit a drop and return the new tree.
///
/// Returns `None` when either id is not in the tree.
pub fn apply_drop<P: Clone>(
    nodes: &[Node<P>],
    target: &DropTarget,
) -> Option<Vec<Node<P>>> {
    let mut entries = flatten_tree(nodes);
    if !move_entry(&mut entries, target) {
        return None;
    }
    Some(build_tree(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visibility::visible_entries;

    const WIDTH: f32 = 50.0;

    #[derive(Debug, Clone, PartialEq)]
    enum Kind {
        Repeat,
        Exercise,
    }

    fn exercise(id: &str) -> Node<Kind> {
        Node::leaf(id, Kind::Exercise)
    }

    fn repeat(id: &str, children: Vec<Node<Kind>>) -> Node<Kind> {
        Node::container(id, Kind::Repeat, children)
    }

    fn drag(
        nodes: &[Node<Kind>],
        active: &str,
        over: &str,
        offset: f32,
    ) -> Vec<Node<Kind>> {
        let mut session = DragSession::new();
        session.start(NodeId::from(active)).expect("idle session");
        session.over(Some(NodeId::from(over))).expect("dragging");
        session.move_by(offset).expect("dragging");

        let visible = visible_entries(nodes, session.active_id());
        let target = session
            .end(&visible, WIDTH)
            .expect("dragging")
            .expect("drop target");
        apply_drop(nodes, &target).expect("ids present")
    }

    #[test]
    fn start_hovers_over_the_active_node() {
        let mut session = DragSession::new();

        session.start(NodeId::from("a")).expect("idle session");

        let state = session.state().expect("dragging");
        assert_eq!(state.active_id, NodeId::from("a"));
        assert_eq!(state.over_id, Some(NodeId::from("a")));
        assert_eq!(state.offset, 0.0);
    }

    #[test]
    fn second_start_is_rejected_and_keeps_current_drag() {
        let mut session = DragSession::new();
        session.start(NodeId::from("a")).expect("idle session");
        session.move_by(30.0).expect("dragging");

        let result = session.start(NodeId::from("b"));

        assert_eq!(result, Err(DragError::AlreadyDragging(NodeId::from("a"))));
        assert_eq!(session.active_id(), Some(&NodeId::from("a")));
        assert_eq!(session.state().map(|state| state.offset), Some(30.0));
    }

    #[test]
    fn events_without_drag_are_rejected() {
        let mut session = DragSession::new();
        let entries: Vec<FlatEntry<Kind>> = Vec::new();

        assert_eq!(session.move_by(10.0), Err(DragError::NotDragging));
        assert_eq!(session.over(None), Err(DragError::NotDragging));
        assert_eq!(session.end(&entries, WIDTH), Err(DragError::NotDragging));
        assert!(!session.cancel());
    }

    #[test]
    fn cancel_returns_to_idle() {
        let mut session = DragSession::new();
        session.start(NodeId::from("a")).expect("idle session");

        assert!(session.cancel());
        assert!(!session.is_dragging());
        assert!(session.start(NodeId::from("b")).is_ok());
    }

    #[test]
    fn end_without_hovered_node_commits_nothing() {
        let nodes = vec![exercise("a"), exercise("b")];
        let mut session = DragSession::new();
        session.start(NodeId::from("a")).expect("idle session");
        session.over(None).expect("dragging");

        let visible = visible_entries(&nodes, session.active_id());
        let target = session.end(&visible, WIDTH).expect("dragging");

        assert_eq!(target, None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn live_projection_follows_pointer_offset() {
        let nodes = vec![repeat("group", vec![exercise("c1")]), exercise("leaf")];
        let mut session = DragSession::new();
        session.start(NodeId::from("leaf")).expect("idle session");
        let visible = visible_entries(&nodes, session.active_id());

        let idle = session.projection(&visible, WIDTH).expect("projection");
        assert_eq!(idle.depth, 0);

        session.move_by(WIDTH).expect("dragging");
        let nested = session.projection(&visible, WIDTH).expect("projection");
        assert_eq!(nested.depth, 1);
        assert_eq!(nested.parent_id, Some(NodeId::from("group")));
    }

    #[test]
    fn leaf_dropped_right_of_container_becomes_its_last_child() {
        let nodes = vec![repeat("group", vec![exercise("c1")]), exercise("leaf")];

        let result = drag(&nodes, "leaf", "leaf", WIDTH);

        assert_eq!(
            result,
            vec![repeat("group", vec![exercise("c1"), exercise("leaf")])]
        );
    }

    #[test]
    fn leaf_moved_up_lands_before_over_node() {
        let nodes = vec![exercise("a"), exercise("b"), exercise("c")];

        let result = drag(&nodes, "c", "a", 0.0);

        assert_eq!(result, vec![exercise("c"), exercise("a"), exercise("b")]);
    }

    #[test]
    fn leaf_moved_down_lands_after_over_node() {
        let nodes = vec![exercise("a"), exercise("b"), exercise("c")];

        let result = drag(&nodes, "a", "b", 0.0);

        assert_eq!(result, vec![exercise("b"), exercise("a"), exercise("c")]);
    }

    #[test]
    fn last_child_dragged_left_is_promoted_to_root() {
        let nodes = vec![
            repeat("group", vec![exercise("c1"), exercise("c2")]),
            exercise("after"),
        ];

        let result = drag(&nodes, "c2", "c2", -WIDTH);

        assert_eq!(
            result,
            vec![
                repeat("group", vec![exercise("c1")]),
                exercise("c2"),
                exercise("after"),
            ]
        );
    }

    #[test]
    fn container_moves_with_its_children() {
        let nodes = vec![
            exercise("a"),
            repeat("group", vec![exercise("c1"), exercise("c2")]),
        ];

        let result = drag(&nodes, "group", "a", 0.0);

        assert_eq!(
            result,
            vec![
                repeat("group", vec![exercise("c1"), exercise("c2")]),
                exercise("a"),
            ]
        );
    }

    #[test]
    fn container_dropped_on_child_splits_the_group() {
        let nodes = vec![
            repeat("first", vec![exercise("c1"), exercise("c2"), exercise("c3")]),
            repeat("second", vec![exercise("s1")]),
        ];

        let result = drag(&nodes, "second", "c2", 0.0);

        assert_eq!(
            result,
            vec![
                repeat("first", vec![exercise("c1")]),
                repeat(
                    "second",
                    vec![exercise("s1"), exercise("c2"), exercise("c3")]
                ),
            ]
        );
    }

    #[test]
    fn container_moved_down_onto_child_adopts_following_siblings() {
        let nodes = vec![
            repeat("moved", Vec::new()),
            repeat("first", vec![exercise("c1"), exercise("c2"), exercise("c3")]),
        ];

        let result = drag(&nodes, "moved", "c1", 0.0);

        assert_eq!(
            result,
            vec![
                repeat("first", vec![exercise("c1")]),
                repeat("moved", vec![exercise("c2"), exercise("c3")]),
            ]
        );
    }

    #[test]
    fn drop_on_itself_without_offset_keeps_the_tree() {
        let nodes = vec![
            repeat("group", vec![exercise("c1")]),
            exercise("leaf"),
        ];

        assert_eq!(drag(&nodes, "group", "group", 0.0), nodes);
        assert_eq!(drag(&nodes, "leaf", "leaf", 0.0), nodes);
    }

    #[test]
    fn apply_drop_with_unknown_ids_is_rejected() {
        let nodes = vec![exercise("a")];
        let target = DropTarget {
            active_id: NodeId::from("a"),
            over_id: NodeId::from("ghost"),
            projection: Projection {
                depth: 0,
                min_depth: 0,
                max_depth: 0,
                parent_id: None,
            },
        };

        assert_eq!(apply_drop(&nodes, &target), None);
    }
}
