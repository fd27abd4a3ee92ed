use crate::error::Result;
use crate::model::{Outline, load_outline};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use unl_api::{ApiError, ApiResult, NodeId, OutlineHost, OutlineReader, OutlineSlot};

/// In-process outline host.
///
/// Holds the current outline plus any outlines opened by following links,
/// and records what a GUI host would display: the selection, expanded
/// nodes, the status line and informational notices. External URLs are
/// recorded rather than launched.
#[derive(Debug, Default)]
pub struct OutlineSession {
    current: Outline,
    current_path: Option<PathBuf>,
    opened: Vec<(PathBuf, Outline)>,
    selection: Option<(OutlineSlot, NodeId)>,
    expanded: HashSet<(OutlineSlot, NodeId)>,
    status: String,
    notices: Vec<String>,
    external: Vec<String>,
}

impl OutlineSession {
    pub fn new(current: Outline) -> Self {
        Self {
            current,
            ..Default::default()
        }
    }

    /// Start a session on the outline stored at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let outline = load_outline(path)?;
        let mut session = Self::new(outline);
        session.current_path = Some(path.to_path_buf());
        Ok(session)
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    /// Directory of the current outline file, for relative links.
    pub fn base_dir(&self) -> Option<&Path> {
        self.current_path.as_deref().and_then(Path::parent)
    }

    /// Path an opened outline was loaded from.
    pub fn path_of(&self, slot: OutlineSlot) -> Option<&Path> {
        match slot {
            OutlineSlot::Current => self.current_path(),
            OutlineSlot::Opened(n) => self.opened.get(n as usize).map(|(p, _)| p.as_path()),
        }
    }

    pub fn selection(&self) -> Option<(OutlineSlot, NodeId)> {
        self.selection
    }

    pub fn is_expanded(&self, slot: OutlineSlot, node: NodeId) -> bool {
        self.expanded.contains(&(slot, node))
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    pub fn external_links(&self) -> &[String] {
        &self.external
    }

    fn outline_ref(&self, slot: OutlineSlot) -> Option<&Outline> {
        match slot {
            OutlineSlot::Current => Some(&self.current),
            OutlineSlot::Opened(n) => self.opened.get(n as usize).map(|(_, o)| o),
        }
    }
}

impl OutlineHost for OutlineSession {
    fn current(&self) -> &dyn OutlineReader {
        &self.current
    }

    fn outline(&self, slot: OutlineSlot) -> Option<&dyn OutlineReader> {
        self.outline_ref(slot).map(|o| o as &dyn OutlineReader)
    }

    fn open_outline(&mut self, path: &Path) -> ApiResult<OutlineSlot> {
        if self.current_path.as_deref() == Some(path) {
            return Ok(OutlineSlot::Current);
        }
        if let Some(index) = self.opened.iter().position(|(p, _)| p == path) {
            debug!("Outline {} already open", path.display());
            return Ok(OutlineSlot::Opened(index as u32));
        }

        let outline = load_outline(path).map_err(|e| ApiError::OpenFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        info!(
            "Opened outline {} ({} nodes)",
            path.display(),
            outline.node_count()
        );
        self.opened.push((path.to_path_buf(), outline));
        Ok(OutlineSlot::Opened((self.opened.len() - 1) as u32))
    }

    fn select(&mut self, slot: OutlineSlot, node: NodeId) -> ApiResult<()> {
        let outline = self
            .outline_ref(slot)
            .ok_or_else(|| ApiError::NotFound(format!("outline {}", slot)))?;
        if !outline.contains(node) {
            return Err(ApiError::NotFound(format!("node {} in outline {}", node, slot)));
        }

        let ancestors: Vec<NodeId> = outline.self_and_parents(node).into_iter().skip(1).collect();
        for ancestor in ancestors {
            self.expanded.insert((slot, ancestor));
        }
        self.selection = Some((slot, node));
        Ok(())
    }

    fn open_external(&mut self, url: &str) -> ApiResult<()> {
        info!("External link: {}", url);
        self.external.push(url.to_string());
        Ok(())
    }

    fn clear_status(&mut self) {
        self.status.clear();
    }

    fn put_status(&mut self, text: &str) {
        self.status.push_str(text);
    }

    fn notify(&mut self, message: &str) {
        info!("{}", message);
        self.notices.push(message.to_string());
    }
}
