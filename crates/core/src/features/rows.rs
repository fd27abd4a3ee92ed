use crate::error::{Result, UnlError};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use unl_api::{NodeId, OutlineReader};

/// Role id of the first field; list views reserve the ids below it.
pub const FIRST_ROLE: u32 = 100;

/// Fields every projected row carries, in role order.
pub const OUTLINE_ROLES: [&str; 5] = ["h", "b", "gnx", "level", "style"];

/// Bidirectional mapping between field names and numeric data roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleTable {
    ids: IndexMap<String, u32>,
}

impl RoleTable {
    /// Assign role ids `100, 101, ...` to `fields` in order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids = IndexMap::new();
        for field in fields {
            let next = FIRST_ROLE + ids.len() as u32;
            ids.entry(field.into()).or_insert(next);
        }
        Self { ids }
    }

    pub fn role_id(&self, field: &str) -> Option<u32> {
        self.ids.get(field).copied()
    }

    pub fn role_name(&self, role: u32) -> Option<&str> {
        let index = role.checked_sub(FIRST_ROLE)? as usize;
        self.ids.get_index(index).map(|(name, _)| name.as_str())
    }

    /// `(role id, field name)` pairs in role order.
    pub fn roles(&self) -> impl Iterator<Item = (u32, &str)> {
        self.ids.iter().map(|(name, id)| (*id, name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Build a row from field/value pairs. Every field must be a known role.
    pub fn make_row<'a, I>(&self, values: I) -> Result<ModelRow>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let mut row = ModelRow::default();
        for (field, value) in values {
            let role = self
                .role_id(field)
                .ok_or_else(|| UnlError::UnknownRole(field.to_string()))?;
            row.data.insert(role, value);
        }
        Ok(row)
    }
}

/// One list-model item: data keyed by role id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ModelRow {
    data: BTreeMap<u32, Value>,
}

impl ModelRow {
    pub fn get(&self, role: u32) -> Option<&Value> {
        self.data.get(&role)
    }
}

/// Flat list-model projection of an outline, one row per node.
#[derive(Debug, Clone)]
pub struct RowModel {
    roles: RoleTable,
    rows: Vec<ModelRow>,
    nodes: Vec<NodeId>,
    gnx_cache: HashMap<String, NodeId>,
}

impl Default for RowModel {
    fn default() -> Self {
        Self::new()
    }
}

impl RowModel {
    /// An empty model with the [`OUTLINE_ROLES`].
    pub fn new() -> Self {
        Self {
            roles: RoleTable::new(OUTLINE_ROLES),
            rows: Vec::new(),
            nodes: Vec::new(),
            gnx_cache: HashMap::new(),
        }
    }

    /// Every node of `outline` in display order.
    pub fn project(outline: &dyn OutlineReader) -> Result<Self> {
        let mut model = Self::new();
        for node in outline.preorder() {
            model.add_node(outline, node, &[])?;
        }
        Ok(model)
    }

    /// Append the row for `node`. `styling` entries are applied over the
    /// default fields and may set any known role, e.g. `style`.
    pub fn add_node(
        &mut self,
        outline: &dyn OutlineReader,
        node: NodeId,
        styling: &[(&str, Value)],
    ) -> Result<()> {
        if !outline.contains(node) {
            return Err(UnlError::UnknownNode(node.to_string()));
        }

        let gnx = outline.gnx(node).unwrap_or_default().to_string();
        let mut fields: IndexMap<&str, Value> = IndexMap::new();
        fields.insert("h", Value::from(outline.label(node)));
        fields.insert("b", Value::from(outline.body(node)));
        fields.insert("gnx", Value::from(gnx.clone()));
        fields.insert("level", Value::from(outline.level(node)));
        for (field, value) in styling {
            fields.insert(*field, value.clone());
        }

        let row = self.roles.make_row(fields)?;
        self.gnx_cache.insert(gnx, node);
        self.rows.push(row);
        self.nodes.push(node);
        Ok(())
    }

    pub fn roles(&self) -> &RoleTable {
        &self.roles
    }

    pub fn rows(&self) -> &[ModelRow] {
        &self.rows
    }

    /// Node behind each row, parallel to [`rows`](Self::rows).
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn node_for_gnx(&self, gnx: &str) -> Option<NodeId> {
        self.gnx_cache.get(gnx).copied()
    }

    /// Value of a named field in row `index`.
    pub fn value(&self, index: usize, field: &str) -> Option<&Value> {
        let role = self.roles.role_id(field)?;
        self.rows.get(index)?.get(role)
    }

    /// Rows keyed by field name instead of role id, for serialization.
    pub fn named_rows(&self) -> Vec<IndexMap<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.roles
                    .roles()
                    .filter_map(|(role, name)| row.get(role).map(|v| (name.to_string(), v.clone())))
                    .collect()
            })
            .collect()
    }
}
