use std::collections::HashMap;

use crate::model::{FlatEntry, Node, NodeId};

struct Slot<P> {
    node: Node<P>,
    children: Option<Vec<usize>>,
}

/// Rebuild a nested tree from a flat sequence.
///
/// Parent links are taken from each entry's `parent_id` alone; `depth` and
/// `index` are ignored. Siblings keep their relative order from the
/// sequence. An entry whose parent id was not emitted earlier, or points at
/// a node that cannot own children, is attached to the root.
pub fn build_tree<P>(entries: Vec<FlatEntry<P>>) -> Vec<Node<P>> {
    let mut slots: Vec<Slot<P>> = Vec::with_capacity(entries.len());
    let mut index_of: HashMap<NodeId, usize> = HashMap::new();
    let mut roots = Vec::new();

    for entry in entries {
        let slot_index = slots.len();
        let parent = entry
            .parent_id
            .as_ref()
            .and_then(|parent_id| index_of.get(parent_id).copied())
            .filter(|parent| slots[*parent].children.is_some());

        match parent {
            Some(parent) => {
                if let Some(children) = slots[parent].children.as_mut() {
                    children.push(slot_index);
                }
            },
            None => {
                if let Some(parent_id) = &entry.parent_id {
                    log::debug!(
                        "tree build: parent {parent_id} of {} is unavailable, \
                         attaching to root",
                        entry.id
                    );
                }
                roots.push(slot_index);
            },
        }

        index_of.insert(entry.id.clone(), slot_index);
        let children = entry.supports_children.then(Vec::new);
        slots.push(Slot {
            node: Node {
                id: entry.id,
                payload: entry.payload,
                children: children.as_ref().map(|_| Vec::new()),
                collapsed: entry.collapsed,
            },
            children,
        });
    }

    // Children always sit after their parent, so building back to front
    // finishes every child before the parent collects it.
    let mut built: Vec<Option<Node<P>>> = slots.iter().map(|_| None).collect();
    for (index, slot) in slots.into_iter().enumerate().rev() {
        let Slot { mut node, children } = slot;
        if let (Some(target), Some(child_indices)) =
            (node.children.as_mut(), children)
        {
            for child in child_indices {
                if let Some(child_node) = built[child].take() {
                    target.push(child_node);
                }
            }
        }
        built[index] = Some(node);
    }

    roots
        .into_iter()
        .filter_map(|root| built[root].take())
        .collect()
}
