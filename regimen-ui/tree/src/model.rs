use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque node identifier.
///
/// Identifiers are generated by the caller and only ever compared for
/// equality. They must be unique across a whole tree value.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an identifier string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Return the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of fresh node identifiers.
///
/// Implemented for every `FnMut() -> NodeId`, so a closure or a plain
/// function can be passed wherever new ids are required.
pub trait IdSource {
    /// Produce an identifier not used by any node of the current tree.
    fn next_id(&mut self) -> NodeId;
}

impl<F> IdSource for F
where
    F: FnMut() -> NodeId,
{
    fn next_id(&mut self) -> NodeId {
        self()
    }
}

/// Trait implemented by payload types stored in tree nodes.
pub trait TreePayload {
    /// Whether a node carrying this payload may own children.
    fn supports_children(&self) -> bool;
}

/// Node of the authoritative tree.
///
/// `children` is `Some` (possibly empty) if and only if the node is
/// container-capable; `None` means the node can never own children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<P> {
    /// Unique identifier.
    pub id: NodeId,
    /// Domain payload.
    #[serde(rename = "data")]
    pub payload: P,
    /// Ordered children, present only on container-capable nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node<P>>>,
    /// Whether the children are hidden from the flat view.
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
}

impl<P> Node<P> {
    /// Create a node whose capability follows its payload.
    pub fn new(id: impl Into<NodeId>, payload: P) -> Self
    where
        P: TreePayload,
    {
        let children = payload.supports_children().then(Vec::new);
        Self {
            id: id.into(),
            payload,
            children,
            collapsed: false,
        }
    }

    /// Create a node that cannot own children.
    pub fn leaf(id: impl Into<NodeId>, payload: P) -> Self {
        Self {
            id: id.into(),
            payload,
            children: None,
            collapsed: false,
        }
    }

    /// Create a container-capable node with the given children.
    pub fn container(
        id: impl Into<NodeId>,
        payload: P,
        children: Vec<Node<P>>,
    ) -> Self {
        Self {
            id: id.into(),
            payload,
            children: Some(children),
            collapsed: false,
        }
    }

    /// Return the node with its collapsed flag set.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }

    /// Whether the node may own children.
    pub fn supports_children(&self) -> bool {
        self.children.is_some()
    }

    /// Return the children, or an empty slice for leaf nodes.
    pub fn children(&self) -> &[Node<P>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Whether the node currently owns at least one child.
    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }
}

/// Entry of the flat, pre-order view of a tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry<P> {
    /// Identifier of the source node.
    pub id: NodeId,
    /// Payload of the source node.
    pub payload: P,
    /// Collapsed flag of the source node.
    pub collapsed: bool,
    /// Identifier of the parent, `None` for top-level entries.
    pub parent_id: Option<NodeId>,
    /// Zero-based depth (`0` for top-level entries).
    pub depth: usize,
    /// Position among the immediate siblings.
    pub index: usize,
    /// Whether the source node carries a children list.
    pub supports_children: bool,
    /// Number of direct children in the source tree.
    pub child_count: usize,
}

impl<P> FlatEntry<P> {
    /// Whether the source node owned at least one child.
    pub fn has_children(&self) -> bool {
        self.child_count > 0
    }
}

/// Advisory drop position for the node being dragged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    /// Depth the active node would land at.
    pub depth: usize,
    /// Lowest depth allowed at the hovered position.
    pub min_depth: usize,
    /// Highest depth allowed at the hovered position.
    pub max_depth: usize,
    /// Parent the active node would be attached to.
    pub parent_id: Option<NodeId>,
}

fn is_false(value: &bool) -> bool {
    !*value
}
