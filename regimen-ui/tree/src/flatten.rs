use crate::model::{FlatEntry, Node, NodeId};

/// Flatten a tree into its pre-order sequence of entries.
///
/// Every node is emitted exactly once, before all of its descendants, with
/// the parent id and depth it has in the tree. Children are emitted whether
/// or not their parent is collapsed; hiding them is the job of
/// [`remove_children_of`](crate::remove_children_of).
pub fn flatten_tree<P: Clone>(nodes: &[Node<P>]) -> Vec<FlatEntry<P>> {
    let mut entries = Vec::new();
    push_nodes(nodes, None, 0, &mut entries);
    entries
}

fn push_nodes<P: Clone>(
    nodes: &[Node<P>],
    parent_id: Option<&NodeId>,
    depth: usize,
    entries: &mut Vec<FlatEntry<P>>,
) {
    for (index, node) in nodes.iter().enumerate() {
        entries.push(FlatEntry {
            id: node.id.clone(),
            payload: node.payload.clone(),
            collapsed: node.collapsed,
            parent_id: parent_id.cloned(),
            depth,
            index,
            supports_children: node.supports_children(),
            child_count: node.children().len(),
        });

        if let Some(children) = &node.children {
            push_nodes(children, Some(&node.id), depth + 1, entries);
        }
    }
}

/// Return the index of the entry with the given id.
pub fn position_of<P>(entries: &[FlatEntry<P>], id: &NodeId) -> Option<usize> {
    entries.iter().position(|entry| &entry.id == id)
}

/// Return the number of entries that follow `index` and descend from it.
///
/// Relies on pre-order contiguity: the descendants of an entry are the run
/// of deeper entries directly after it.
pub fn descendant_run<P>(entries: &[FlatEntry<P>], index: usize) -> usize {
    let Some(entry) = entries.get(index) else {
        return 0;
    };
    entries[index + 1..]
        .iter()
        .take_while(|candidate| candidate.depth > entry.depth)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum TestNode {
        Group,
        Step,
    }

    fn step(id: &str) -> Node<TestNode> {
        Node::leaf(id, TestNode::Step)
    }

    fn group(id: &str, children: Vec<Node<TestNode>>) -> Node<TestNode> {
        Node::container(id, TestNode::Group, children)
    }

    fn flat_ids(entries: &[FlatEntry<TestNode>]) -> Vec<&str> {
        entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    #[test]
    fn flatten_tree_handles_empty_input() {
        let nodes: Vec<Node<TestNode>> = Vec::new();
        let entries = flatten_tree(&nodes);
        assert!(entries.is_empty());
    }

    #[test]
    fn flatten_tree_emits_pre_order_with_depth_and_parent() {
        let nodes = vec![
            group("root", vec![step("child1"), step("child2")]),
            step("top"),
        ];

        let entries = flatten_tree(&nodes);
        assert_eq!(flat_ids(&entries), vec!["root", "child1", "child2", "top"]);

        assert_eq!(entries[0].depth, 0);
        assert_eq!(entries[1].depth, 1);
        assert_eq!(entries[2].depth, 1);
        assert_eq!(entries[3].depth, 0);
        assert_eq!(entries[0].parent_id, None);
        assert_eq!(entries[1].parent_id, Some(NodeId::from("root")));
        assert_eq!(entries[3].parent_id, None);
    }

    #[test]
    fn flatten_tree_records_sibling_index() {
        let nodes = vec![
            group("a", vec![step("a1"), step("a2")]),
            step("b"),
            step("c"),
        ];

        let indices: Vec<usize> =
            flatten_tree(&nodes).iter().map(|entry| entry.index).collect();
        assert_eq!(indices, vec![0, 0, 1, 1, 2]);
    }

    #[test]
    fn flatten_tree_keeps_children_of_collapsed_nodes() {
        let nodes =
            vec![group("root", vec![step("hidden")]).with_collapsed(true)];

        let entries = flatten_tree(&nodes);
        assert_eq!(flat_ids(&entries), vec!["root", "hidden"]);
        assert!(entries[0].collapsed);
    }

    #[test]
    fn flatten_tree_separates_capability_from_child_presence() {
        let nodes = vec![group("empty", Vec::new()), step("leaf")];

        let entries = flatten_tree(&nodes);
        assert!(entries[0].supports_children);
        assert!(!entries[0].has_children());
        assert!(!entries[1].supports_children);
        assert_eq!(entries[1].child_count, 0);
    }

    #[test]
    fn flatten_tree_depth_invariant_holds() {
        let nodes = vec![
            group("a", vec![group("b", vec![step("c")]), step("d")]),
            step("e"),
        ];

        let entries = flatten_tree(&nodes);
        for entry in &entries {
            match &entry.parent_id {
                Some(parent_id) => {
                    let parent = entries
                        .iter()
                        .find(|candidate| &candidate.id == parent_id)
                        .expect("parent should be flattened");
                    assert_eq!(parent.depth + 1, entry.depth);
                },
                None => assert_eq!(entry.depth, 0),
            }
        }
    }

    #[test]
    fn descendant_run_counts_contiguous_deeper_entries() {
        let nodes = vec![
            group("a", vec![step("a1"), step("a2")]),
            step("b"),
            group("c", Vec::new()),
        ];
        let entries = flatten_tree(&nodes);

        assert_eq!(descendant_run(&entries, 0), 2);
        assert_eq!(descendant_run(&entries, 1), 0);
        assert_eq!(descendant_run(&entries, 3), 0);
        assert_eq!(descendant_run(&entries, 4), 0);
        assert_eq!(descendant_run(&entries, 9), 0);
    }

    #[test]
    fn position_of_finds_entries_by_id() {
        let nodes = vec![step("a"), step("b")];
        let entries = flatten_tree(&nodes);

        assert_eq!(position_of(&entries, &NodeId::from("b")), Some(1));
        assert_eq!(position_of(&entries, &NodeId::from("missing")), None);
    }
}
