use std::collections::HashSet;

use crate::flatten::flatten_tree;
use crate::model::{FlatEntry, Node, NodeId};

/// Remove every entry that descends from one of `hidden_roots`.
///
/// The roots themselves are kept. Removed entries that own children are
/// added to the exclusion set as the scan goes, so nested descendants are
/// hidden as well. Surviving entries keep their original order.
pub fn remove_children_of<P>(
    entries: Vec<FlatEntry<P>>,
    hidden_roots: &[NodeId],
) -> Vec<FlatEntry<P>> {
    if hidden_roots.is_empty() {
        return entries;
    }

    let mut excluded: HashSet<NodeId> = hidden_roots.iter().cloned().collect();
    entries
        .into_iter()
        .filter(|entry| {
            let hidden = entry
                .parent_id
                .as_ref()
                .is_some_and(|parent_id| excluded.contains(parent_id));
            if hidden && entry.has_children() {
                excluded.insert(entry.id.clone());
            }
            !hidden
        })
        .collect()
}

/// Return ids of collapsed entries that currently own children.
pub fn collapsed_ids<P>(entries: &[FlatEntry<P>]) -> Vec<NodeId> {
    entries
        .iter()
        .filter(|entry| entry.collapsed && entry.has_children())
        .map(|entry| entry.id.clone())
        .collect()
}

/// Flatten a tree into the rows that should actually be shown.
///
/// Children of collapsed nodes are hidden, and so are the children of the
/// node being dragged, if any: they travel with it and are not drop targets.
pub fn visible_entries<P: Clone>(
    nodes: &[Node<P>],
    active_id: Option<&NodeId>,
) -> Vec<FlatEntry<P>> {
    let entries = flatten_tree(nodes);
    let mut hidden = collapsed_ids(&entries);
    if let Some(active_id) = active_id {
        hidden.push(active_id.clone());
    }
    remove_children_of(entries, &hidden)
}
