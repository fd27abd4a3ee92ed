use super::link::{LinkTarget, parse_link, resolve_outline_path};
use super::navigation::{LocatorResolver, format_locator};
use crate::config::LinkConfig;
use crate::error::{Result, UnlError};
use std::path::Path;
use tracing::{debug, error, info, warn};
use unl_api::{ApiError, Locator, MatchResult, NodeId, OutlineHost, OutlineSlot};

/// Notice shown when only a prefix of a locator could be followed.
pub const PARTIAL_MATCH_NOTICE: &str = "Partial UNL match";

/// What a link activation ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Empty payload; nothing to do.
    Ignored,
    /// A node was selected. `partial` carries the matched depth when the
    /// locator only resolved part of the way.
    Focused {
        slot: OutlineSlot,
        node: NodeId,
        partial: Option<usize>,
    },
    /// An outline file was opened without a locator to follow.
    Opened { slot: OutlineSlot },
    /// Handed to the host's URL opener.
    External { url: String },
    /// The locator matched nothing.
    NoMatch,
    /// The link could not be followed; the user has been told why.
    Failed { reason: String },
}

/// Event handlers of the node-linking plugin.
///
/// `on_select` shows the locator of the selected node in the status line;
/// `on_link` follows a link payload. Neither ever returns an error: every
/// failure is logged and reported through [`OutlineHost::notify`].
#[derive(Debug, Clone, Default)]
pub struct LinkHandler {
    config: LinkConfig,
}

impl LinkHandler {
    pub fn new(config: LinkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Selection changed in the outline held in `slot`. Returns the locator
    /// put on the status line.
    ///
    /// `None` (no valid selection, e.g. while a settings pane is active), an
    /// outline the host no longer holds, or a node outside that outline
    /// leave the status line alone.
    pub fn on_select(
        &self,
        host: &mut dyn OutlineHost,
        slot: OutlineSlot,
        node: Option<NodeId>,
    ) -> Option<String> {
        let node = node?;
        let Some(outline) = host.outline(slot) else {
            debug!("Ignoring selection in unknown outline {}", slot);
            return None;
        };
        if !outline.contains(node) {
            debug!("Ignoring selection of unknown node {} in {}", node, slot);
            return None;
        }
        let locator = format_locator(outline, node);

        host.clear_status();
        host.put_status(&locator);
        Some(locator)
    }

    /// A link was activated. `base_dir` is the directory of the outline the
    /// link lives in, used for relative outline paths.
    pub fn on_link(
        &self,
        host: &mut dyn OutlineHost,
        payload: &str,
        base_dir: Option<&Path>,
    ) -> LinkOutcome {
        let target = match parse_link(payload, &self.config) {
            Ok(target) => target,
            Err(e) => {
                warn!("Cannot interpret link {:?}: {}", payload, e);
                host.notify(&format!("exception interpreting the url {}", payload));
                host.notify(&e.to_string());
                return LinkOutcome::Failed {
                    reason: e.to_string(),
                };
            }
        };

        match self.follow(host, target, base_dir) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!("Failed to follow link {:?}: {}", payload, e);
                host.notify(&format!("exception opening {}", payload));
                host.notify(&e.to_string());
                LinkOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn follow(
        &self,
        host: &mut dyn OutlineHost,
        target: LinkTarget,
        base_dir: Option<&Path>,
    ) -> Result<LinkOutcome> {
        match target {
            LinkTarget::Empty => Ok(LinkOutcome::Ignored),
            LinkTarget::Local(locator) => self.focus(host, OutlineSlot::Current, &locator),
            LinkTarget::OutlineFile { path, locator } => {
                let file = resolve_outline_path(&path, base_dir, &self.config);
                info!("Opening outline {}", file.display());
                let slot = host.open_outline(&file)?;
                match locator {
                    Some(locator) => self.focus(host, slot, &locator),
                    None => Ok(LinkOutcome::Opened { slot }),
                }
            }
            LinkTarget::External(url) => {
                // URL openers often report spurious failures after opening.
                if let Err(e) = host.open_external(&url) {
                    warn!("External open of {} reported: {}", url, e);
                }
                Ok(LinkOutcome::External { url })
            }
        }
    }

    fn focus(
        &self,
        host: &mut dyn OutlineHost,
        slot: OutlineSlot,
        locator: &Locator,
    ) -> Result<LinkOutcome> {
        let outline = host
            .outline(slot)
            .ok_or_else(|| UnlError::Api(ApiError::NotFound(format!("outline {}", slot))))?;
        let result = LocatorResolver::new(outline).resolve_locator(locator);

        match result {
            MatchResult::Found { node } => {
                host.select(slot, node)?;
                self.on_select(host, slot, Some(node));
                Ok(LinkOutcome::Focused {
                    slot,
                    node,
                    partial: None,
                })
            }
            MatchResult::PartialFound { node, depth } => {
                info!(
                    "Partial match for {}: {} of {} headlines",
                    locator,
                    depth,
                    locator.len()
                );
                host.select(slot, node)?;
                self.on_select(host, slot, Some(node));
                if self.config.notify_partial_match {
                    host.notify(PARTIAL_MATCH_NOTICE);
                }
                Ok(LinkOutcome::Focused {
                    slot,
                    node,
                    partial: Some(depth),
                })
            }
            MatchResult::NotFound => {
                debug!("No node matches {}", locator);
                Ok(LinkOutcome::NoMatch)
            }
        }
    }
}
