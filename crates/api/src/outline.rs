use crate::models::NodeId;

/// Read-only view of a forest of labelled nodes.
///
/// This is everything locator resolution and formatting need from a host
/// outline. Implementations must return roots and children in display
/// order, and every parent chain must end at a root.
pub trait OutlineReader {
    /// Top-level nodes, in display order.
    fn roots(&self) -> &[NodeId];

    /// Direct children of `node`, in display order.
    fn children(&self, node: NodeId) -> &[NodeId];

    /// The node's headline.
    fn label(&self, node: NodeId) -> &str;

    /// The node's parent, or `None` for a root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Body text. Outlines without bodies may keep the default.
    fn body(&self, _node: NodeId) -> &str {
        ""
    }

    /// Stable global identifier of the node, if the outline tracks one.
    fn gnx(&self, _node: NodeId) -> Option<&str> {
        None
    }

    /// Whether `node` was issued by this outline.
    fn contains(&self, node: NodeId) -> bool;

    /// `node` followed by its parent, grandparent, up to the root.
    fn self_and_parents(&self, node: NodeId) -> Vec<NodeId> {
        let mut chain = vec![node];
        let mut current = self.parent(node);
        while let Some(id) = current {
            chain.push(id);
            current = self.parent(id);
        }
        chain
    }

    /// Every node, each root followed by its whole subtree, in display order.
    fn preorder(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack: Vec<NodeId> = self.roots().iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Number of ancestors; roots are at level 0.
    fn level(&self, node: NodeId) -> usize {
        self.self_and_parents(node).len() - 1
    }
}
