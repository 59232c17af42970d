//! Structural edits applied to the authoritative tree.
//!
//! Every edit addressing an id that is not in the tree leaves the tree
//! untouched and reports it through its return value.

use crate::model::{IdSource, Node, NodeId};

/// Find a node anywhere in the tree.
pub fn find_node<'a, P>(
    nodes: &'a [Node<P>],
    id: &NodeId,
) -> Option<&'a Node<P>> {
    for node in nodes {
        if &node.id == id {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Find a node anywhere in the tree for mutation.
pub fn find_node_mut<'a, P>(
    nodes: &'a mut [Node<P>],
    id: &NodeId,
) -> Option<&'a mut Node<P>> {
    if let Some(index) = nodes.iter().position(|node| &node.id == id) {
        return Some(&mut nodes[index]);
    }

    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if let Some(found) = find_node_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Return the number of descendants of the node, at any depth.
pub fn descendant_count<P>(nodes: &[Node<P>], id: &NodeId) -> usize {
    find_node(nodes, id).map_or(0, |node| count_descendants(node.children()))
}

fn count_descendants<P>(nodes: &[Node<P>]) -> usize {
    nodes
        .iter()
        .map(|node| 1 + count_descendants(node.children()))
        .sum()
}

/// Flip the collapsed flag of a single node.
///
/// The flag is recorded even when the node has no children. Returns `false`
/// when the id is not in the tree.
pub fn toggle_collapsed<P>(nodes: &mut [Node<P>], id: &NodeId) -> bool {
    let Some(node) = find_node_mut(nodes, id) else {
        log::debug!("toggle collapsed: node {id} not found");
        return false;
    };
    node.collapsed = !node.collapsed;
    true
}

/// Insert a deep copy of a node right after the original.
///
/// The copy and each of its descendants get fresh ids from `ids`; payloads,
/// collapsed flags and the relative structure are preserved. The copy stays
/// under the same parent as the original. Returns the id of the copy, or
/// `None` when the id is not in the tree.
pub fn duplicate_node<P: Clone, S: IdSource + ?Sized>(
    nodes: &mut Vec<Node<P>>,
    id: &NodeId,
    ids: &mut S,
) -> Option<NodeId> {
    let Some((siblings, index)) = sibling_list_mut(nodes, id) else {
        log::debug!("duplicate: node {id} not found");
        return None;
    };

    let copy = deep_copy(&siblings[index], ids);
    let copy_id = copy.id.clone();
    siblings.insert(index + 1, copy);
    Some(copy_id)
}

fn deep_copy<P: Clone, S: IdSource + ?Sized>(
    node: &Node<P>,
    ids: &mut S,
) -> Node<P> {
    let id = ids.next_id();
    let children = match &node.children {
        Some(children) => {
            let mut copies = Vec::with_capacity(children.len());
            for child in children {
                copies.push(deep_copy(child, ids));
            }
            Some(copies)
        },
        None => None,
    };

    Node {
        id,
        payload: node.payload.clone(),
        children,
        collapsed: node.collapsed,
    }
}

/// Remove a single node, keeping its children.
///
/// The children are spliced into the position the node occupied, so they
/// move one level up and become siblings of the node's former siblings.
/// Returns the removed node (with an emptied children list), or `None` when
/// the id is not in the tree.
pub fn remove_node<P>(nodes: &mut Vec<Node<P>>, id: &NodeId) -> Option<Node<P>> {
    let Some((siblings, index)) = sibling_list_mut(nodes, id) else {
        log::debug!("remove: node {id} not found");
        return None;
    };

    let mut removed = siblings.remove(index);
    if let Some(children) = removed.children.as_mut() {
        let orphans = std::mem::take(children);
        siblings.splice(index..index, orphans);
    }
    Some(removed)
}

/// Return the sibling list holding the node, and the node's index in it.
fn sibling_list_mut<'a, P>(
    nodes: &'a mut Vec<Node<P>>,
    id: &NodeId,
) -> Option<(&'a mut Vec<Node<P>>, usize)> {
    if let Some(index) = nodes.iter().position(|node| &node.id == id) {
        return Some((nodes, index));
    }

    for node in nodes.iter_mut() {
        if let Some(children) = node.children.as_mut() {
            if let Some(found) = sibling_list_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}
