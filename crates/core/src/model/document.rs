use super::outline::{Outline, default_gnx};
use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use unl_api::{NodeId, OutlineReader};

/// On-disk form of an outline: nested headlines in display order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct OutlineDocument {
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct NodeDocument {
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub body: String,
    /// Stable node identifier. Synthesized as `unl.<index>` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gnx: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDocument>,
}

impl NodeDocument {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<NodeDocument>) -> Self {
        self.children = children;
        self
    }
}

impl From<&OutlineDocument> for Outline {
    fn from(doc: &OutlineDocument) -> Self {
        let mut outline = Outline::new();
        let mut explicit = HashSet::new();
        for root in &doc.nodes {
            let id = outline.add_root(root.label.clone());
            fill(&mut outline, id, root, &mut explicit);
        }
        rename_shadowed_gnx(&mut outline, &explicit);
        outline
    }
}

fn fill(outline: &mut Outline, id: NodeId, doc: &NodeDocument, explicit: &mut HashSet<NodeId>) {
    outline.set_body(id, doc.body.clone());
    if let Some(gnx) = &doc.gnx {
        outline.set_gnx(id, gnx.clone());
        explicit.insert(id);
    }
    for child in &doc.children {
        let child_id = outline.add_child(id, child.label.clone());
        fill(outline, child_id, child, explicit);
    }
}

/// A synthesized `unl.<index>` must not shadow a gnx the document spells
/// out; such nodes get `unl.<index>.<n>` with the first free `n`.
fn rename_shadowed_gnx(outline: &mut Outline, explicit: &HashSet<NodeId>) {
    let taken: HashSet<String> = explicit
        .iter()
        .filter_map(|&id| outline.gnx(id).map(str::to_string))
        .collect();

    for index in 0..outline.node_count() {
        let id = NodeId(index as u32);
        if explicit.contains(&id) || !outline.gnx(id).is_some_and(|g| taken.contains(g)) {
            continue;
        }
        let base = default_gnx(id);
        let mut n = 1;
        let fresh = loop {
            let candidate = format!("{}.{}", base, n);
            if !taken.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        debug!("gnx {} is taken, using {}", base, fresh);
        outline.set_gnx(id, fresh);
    }
}

impl From<&Outline> for OutlineDocument {
    fn from(outline: &Outline) -> Self {
        Self {
            nodes: outline
                .roots()
                .iter()
                .map(|&id| to_document(outline, id))
                .collect(),
        }
    }
}

fn to_document(outline: &Outline, id: NodeId) -> NodeDocument {
    NodeDocument {
        label: outline.label(id).to_string(),
        body: outline.body(id).to_string(),
        gnx: outline.gnx(id).map(str::to_string),
        children: outline
            .children(id)
            .iter()
            .map(|&child| to_document(outline, child))
            .collect(),
    }
}

/// Read an outline document from a JSON file.
pub fn load_outline(path: &Path) -> Result<Outline> {
    let content = std::fs::read_to_string(path)?;
    let doc: OutlineDocument = serde_json::from_str(&content)?;
    let outline = Outline::from(&doc);
    debug!(
        "Loaded outline {} ({} nodes)",
        path.display(),
        outline.node_count()
    );
    Ok(outline)
}

/// Write an outline as a pretty-printed JSON document.
pub fn save_outline(outline: &Outline, path: &Path) -> Result<()> {
    let doc = OutlineDocument::from(outline);
    std::fs::write(path, serde_json::to_string_pretty(&doc)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_builds_ordered_forest() {
        let json = r#"{
            "nodes": [
                { "label": "Users Guide", "gnx": "ekr.1", "children": [
                    { "label": "Chapter 1", "body": "intro" },
                    { "label": "Chapter 8: Customizing Leo" }
                ]},
                { "label": "Scripts" }
            ]
        }"#;
        let doc: OutlineDocument = serde_json::from_str(json).unwrap();
        let outline = Outline::from(&doc);

        assert_eq!(outline.node_count(), 4);
        let roots = outline.roots();
        assert_eq!(outline.label(roots[0]), "Users Guide");
        assert_eq!(outline.label(roots[1]), "Scripts");
        assert_eq!(outline.gnx(roots[0]), Some("ekr.1"));

        let chapters = outline.children(roots[0]);
        assert_eq!(outline.label(chapters[1]), "Chapter 8: Customizing Leo");
        assert_eq!(outline.body(chapters[0]), "intro");
        assert_eq!(outline.gnx(chapters[0]), Some("unl.1"));
    }

    #[test]
    fn test_synthesized_gnx_never_shadows_explicit_one() {
        let json = r#"{
            "nodes": [
                { "label": "Scratch" },
                { "label": "Imported", "gnx": "unl.0" },
                { "label": "Also imported", "gnx": "unl.0.1" }
            ]
        }"#;
        let doc: OutlineDocument = serde_json::from_str(json).unwrap();
        let outline = Outline::from(&doc);
        let roots = outline.roots();

        assert_eq!(outline.find_gnx("unl.0"), Some(roots[1]));
        assert_eq!(outline.gnx(roots[0]), Some("unl.0.2"));
        assert_eq!(outline.find_gnx("unl.0.2"), Some(roots[0]));

        let rows = crate::features::rows::RowModel::project(&outline).unwrap();
        assert_eq!(rows.node_for_gnx("unl.0"), Some(roots[1]));
    }

    #[test]
    fn test_save_then_load_preserves_structure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut outline = Outline::new();
        let a = outline.add_root("A");
        let b = outline.add_child(a, "B");
        outline.set_body(b, "body of B");
        outline.add_root("Z");

        save_outline(&outline, &path).unwrap();
        let loaded = load_outline(&path).unwrap();

        assert_eq!(
            OutlineDocument::from(&loaded),
            OutlineDocument::from(&outline)
        );
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ nodes: ").unwrap();

        assert!(matches!(
            load_outline(&path),
            Err(crate::error::UnlError::Json(_))
        ));
    }
}
