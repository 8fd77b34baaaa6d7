use crate::node::NodeId;

/// The children of a `Node`, shaped by how many there are. Deletion dispatches on this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Children {
    /// A leaf. Its parent's slot can simply be cleared.
    Leaf,
    /// Exactly one child, which takes the node's place when it's deleted.
    One(NodeId),
    /// Both children. Deleting this node means pulling up its in-order successor, found by
    /// walking left from `right`.
    Both { right: NodeId },
}

impl Children {
    pub(crate) fn of(left: Option<NodeId>, right: Option<NodeId>) -> Self {
        match (left, right) {
            (None, None) => Self::Leaf,
            (Some(only), None) | (None, Some(only)) => Self::One(only),
            (Some(_), Some(right)) => Self::Both { right },
        }
    }

    pub(crate) fn count(self) -> usize {
        match self {
            Self::Leaf => 0,
            Self::One(_) => 1,
            Self::Both { .. } => 2,
        }
    }
}
