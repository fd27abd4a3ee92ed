use super::node::NodeId;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal delimiter between headlines in a rendered locator.
pub const LOCATOR_DELIMITER: &str = "-->";

/// An ordered path of headlines, root label first.
///
/// `A-->B-->C` means: a root labelled `A`, its child `B`, that child's child `C`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash, JsonSchema)]
#[serde(transparent)]
pub struct Locator {
    labels: Vec<String>,
}

impl Locator {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Split a rendered locator on `-->`.
    ///
    /// Segments are kept verbatim (no trimming, no decoding). An empty
    /// string yields an empty locator.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        Self {
            labels: raw.split(LOCATOR_DELIMITER).map(str::to_string).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.labels.last().map(String::as_str)
    }

    pub fn render(&self) -> String {
        self.labels.join(LOCATOR_DELIMITER)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<S: Into<String>> FromIterator<S> for Locator {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Outcome of resolving a locator against a forest.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    /// Every label matched; this is the node at the end of the path.
    Found { node: NodeId },
    /// The deepest node reached before matching failed, and how many
    /// labels matched on the way there.
    PartialFound { node: NodeId, depth: usize },
    /// Not even the first label matched a root.
    NotFound,
}

impl MatchResult {
    /// The node a host should focus, exact or partial.
    pub fn node(&self) -> Option<NodeId> {
        match self {
            MatchResult::Found { node } | MatchResult::PartialFound { node, .. } => Some(*node),
            MatchResult::NotFound => None,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, MatchResult::Found { .. })
    }
}
