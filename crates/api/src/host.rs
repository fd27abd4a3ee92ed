use crate::error::ApiResult;
use crate::models::{NodeId, OutlineSlot};
use crate::outline::OutlineReader;
use std::path::Path;

/// Capabilities the outline editor exposes to the linking plugin.
///
/// Everything here is owned by the host: which outlines are loaded, how a
/// selection is shown, where messages go. The plugin only decides which
/// node to show and what to say.
pub trait OutlineHost {
    /// The outline the user is working in.
    fn current(&self) -> &dyn OutlineReader;

    /// Any outline the host has loaded.
    fn outline(&self, slot: OutlineSlot) -> Option<&dyn OutlineReader>;

    /// Load (or switch to) the outline stored at `path`.
    fn open_outline(&mut self, path: &Path) -> ApiResult<OutlineSlot>;

    /// Expand the node's ancestors and make it the selection.
    fn select(&mut self, slot: OutlineSlot, node: NodeId) -> ApiResult<()>;

    /// Hand a non-outline link to whatever opens URLs on this system.
    fn open_external(&mut self, url: &str) -> ApiResult<()>;

    fn clear_status(&mut self);

    fn put_status(&mut self, text: &str);

    /// Informational message for the user's log pane.
    fn notify(&mut self, message: &str);
}
