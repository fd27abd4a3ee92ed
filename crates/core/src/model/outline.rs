use unl_api::{NodeId, OutlineReader};

/// One headline in an [`Outline`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineNode {
    pub label: String,
    pub body: String,
    pub gnx: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena-backed forest of headlines.
///
/// Nodes are only ever appended, and a child is always created after its
/// parent, so every parent chain terminates at a root.
#[derive(Debug, Clone, Default)]
pub struct Outline {
    nodes: Vec<OutlineNode>,
    roots: Vec<NodeId>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&OutlineNode> {
        self.nodes.get(id.index())
    }

    /// Append a new top-level node after the existing roots.
    pub fn add_root(&mut self, label: impl Into<String>) -> NodeId {
        let id = self.push(label.into(), None);
        self.roots.push(id);
        id
    }

    /// Append a new last child under `parent`.
    ///
    /// # Panics
    /// Panics if `parent` was not issued by this outline.
    pub fn add_child(&mut self, parent: NodeId, label: impl Into<String>) -> NodeId {
        assert!(self.contains(parent), "parent {} not in outline", parent);
        let id = self.push(label.into(), Some(parent));
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn set_body(&mut self, id: NodeId, body: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.body = body.into();
        }
    }

    pub fn set_gnx(&mut self, id: NodeId, gnx: impl Into<String>) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            node.gnx = gnx.into();
        }
    }

    /// First node (in preorder) carrying the given gnx.
    pub fn find_gnx(&self, gnx: &str) -> Option<NodeId> {
        self.preorder().into_iter().find(|id| self.nodes[id.index()].gnx == gnx)
    }

    fn push(&mut self, label: String, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(OutlineNode {
            label,
            body: String::new(),
            gnx: default_gnx(id),
            parent,
            children: Vec::new(),
        });
        id
    }
}

/// Identifier given to nodes that were not loaded with one. Documents
/// loaded through `From<&OutlineDocument>` never let it shadow a gnx they
/// spell out; outlines built by hand are responsible for that themselves.
pub fn default_gnx(id: NodeId) -> String {
    format!("unl.{}", id.0)
}

impl OutlineReader for Outline {
    fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.index())
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn label(&self, node: NodeId) -> &str {
        self.nodes
            .get(node.index())
            .map(|n| n.label.as_str())
            .unwrap_or("")
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.index()).and_then(|n| n.parent)
    }

    fn body(&self, node: NodeId) -> &str {
        self.nodes
            .get(node.index())
            .map(|n| n.body.as_str())
            .unwrap_or("")
    }

    fn gnx(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.index()).map(|n| n.gnx.as_str())
    }

    fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }
}
