use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a node inside one outline arena.
///
/// Ids are only meaningful together with the outline that issued them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema)]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which of the host's loaded outlines a node belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutlineSlot {
    /// The outline the user is currently working in.
    Current,
    /// An outline the host opened on request, by open order.
    Opened(u32),
}

impl Default for OutlineSlot {
    fn default() -> Self {
        Self::Current
    }
}

impl fmt::Display for OutlineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineSlot::Current => write!(f, "current"),
            OutlineSlot::Opened(n) => write!(f, "opened:{}", n),
        }
    }
}
