//! Tree/list duality engine for drag-and-drop nested list editors.
//!
//! The authoritative state is always a tree of [`Node`] values. Rows are
//! rendered from its flat form, and drags are resolved against that form:
//! - [`flatten_tree`] turns the tree into pre-order [`FlatEntry`] rows;
//! - [`remove_children_of`] (or [`visible_entries`]) hides the rows below
//!   collapsed or dragged nodes;
//! - [`get_projection`] turns a horizontal pointer offset into the depth and
//!   parent the dragged node would land at;
//! - [`build_tree`] rebuilds the tree from an edited flat sequence.
//!
//! Nesting is limited to a single level: a node whose payload supports
//! children never sits below another node, and nothing sits deeper than one
//! level under such a node.
//!
//! See `examples/drag_drop.rs` for a complete runnable example.
//!
//! The recommended flow for a drag gesture:
//! 1. call [`DragSession::start`] when the pointer grabs a row;
//! 2. feed pointer movement into [`DragSession::move_by`] and
//!    [`DragSession::over`], and render [`DragSession::projection`];
//! 3. on release, pass the result of [`DragSession::end`] to [`apply_drop`]
//!    and keep the returned tree.
//!
//! # Quick Example
//!
//! ```
//! use regimen_ui_tree::{
//!     DragSession, Node, NodeId, TreePayload, apply_drop, visible_entries,
//! };
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Step {
//!     Circuit,
//!     Move(&'static str),
//! }
//!
//! impl TreePayload for Step {
//!     fn supports_children(&self) -> bool {
//!         matches!(self, Step::Circuit)
//!     }
//! }
//!
//! let tree = vec![
//!     Node::container("circuit", Step::Circuit, vec![Node::new("a", Step::Move("squat"))]),
//!     Node::new("b", Step::Move("press")),
//! ];
//!
//! let mut session = DragSession::new();
//! session.start(NodeId::from("b")).unwrap();
//! session.move_by(50.0).unwrap();
//!
//! let rows = visible_entries(&tree, session.active_id());
//! let target = session.end(&rows, 50.0).unwrap().unwrap();
//! let tree = apply_drop(&tree, &target).unwrap();
//!
//! assert_eq!(tree.len(), 1);
//! assert_eq!(tree[0].children().len(), 2);
//! ```

mod build;
mod drag;
mod edit;
mod flatten;
mod model;
mod projection;
mod visibility;

pub use build::build_tree;
pub use drag::{
    DragError, DragSession, DragState, DropTarget, apply_drop, move_entry,
};
pub use edit::{
    descendant_count, duplicate_node, find_node, find_node_mut, remove_node,
    toggle_collapsed,
};
pub use flatten::{descendant_run, flatten_tree, position_of};
pub use model::{
    FlatEntry, IdSource, Node, NodeId, Projection, TreePayload,
};
pub use projection::{drag_depth, get_projection};
pub use visibility::{collapsed_ids, remove_children_of, visible_entries};
