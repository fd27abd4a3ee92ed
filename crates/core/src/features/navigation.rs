use unl_api::{Locator, MatchResult, NodeId, OutlineReader};

/// Deepest prefix match seen so far during a search.
#[derive(Debug, Clone, Copy, Default)]
struct BestMatch {
    node: Option<NodeId>,
    depth: usize,
}

/// LocatorResolver walks a forest following a headline path.
///
/// Search is depth-first and keeps sibling order: when several children
/// share a label, the earlier one is explored first, and the first exact
/// match found anywhere wins. If no exact match exists, the deepest node
/// reached (first one to reach that depth) is reported as a partial match.
pub struct LocatorResolver<'a> {
    outline: &'a dyn OutlineReader,
}

impl<'a> LocatorResolver<'a> {
    pub fn new(outline: &'a dyn OutlineReader) -> Self {
        Self { outline }
    }

    pub fn resolve<S: AsRef<str>>(&self, labels: &[S]) -> MatchResult {
        if labels.is_empty() {
            return MatchResult::NotFound;
        }

        let mut best = BestMatch::default();
        if let Some(node) = self.search(labels, 0, self.outline.roots(), &mut best) {
            return MatchResult::Found { node };
        }

        match best.node {
            Some(node) if best.depth > 0 => MatchResult::PartialFound {
                node,
                depth: best.depth,
            },
            _ => MatchResult::NotFound,
        }
    }

    pub fn resolve_locator(&self, locator: &Locator) -> MatchResult {
        self.resolve(locator.labels())
    }

    fn search<S: AsRef<str>>(
        &self,
        labels: &[S],
        depth: usize,
        candidates: &[NodeId],
        best: &mut BestMatch,
    ) -> Option<NodeId> {
        let wanted = labels[depth].as_ref();

        for &candidate in candidates {
            if self.outline.label(candidate) != wanted {
                continue;
            }

            if depth + 1 == labels.len() {
                return Some(candidate);
            }

            if best.depth < depth + 1 {
                *best = BestMatch {
                    node: Some(candidate),
                    depth: depth + 1,
                };
            }

            let children = self.outline.children(candidate);
            if let Some(found) = self.search(labels, depth + 1, children, best) {
                return Some(found);
            }
            // keep looking through the remaining siblings
        }

        None
    }
}

/// Resolve `labels` against `outline`. See [`LocatorResolver`].
pub fn resolve<S: AsRef<str>>(labels: &[S], outline: &dyn OutlineReader) -> MatchResult {
    LocatorResolver::new(outline).resolve(labels)
}

/// The headline path from the root down to `node`.
pub fn locator_of(outline: &dyn OutlineReader, node: NodeId) -> Locator {
    let mut chain = outline.self_and_parents(node);
    chain.reverse();
    chain.into_iter().map(|id| outline.label(id)).collect()
}

/// Render the locator of `node`, e.g. `Users Guide-->Chapter 8`.
pub fn format_locator(outline: &dyn OutlineReader, node: NodeId) -> String {
    locator_of(outline, node).render()
}
