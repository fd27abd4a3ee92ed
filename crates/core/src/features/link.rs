//! Classification of link payloads.
//!
//! A payload is either a bare locator (`A-->B-->C`), a locator inside
//! another outline file (`file:<path>#A-->B`), or some other URL. The
//! splitting follows the usual `scheme://netloc/path?query#fragment`
//! shape, so anything a URL opener understands passes through untouched.

use crate::config::LinkConfig;
use crate::error::{Result, UnlError};
use crate::util::{expand_home, normalize_path};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use unl_api::Locator;

/// The only escape decoded in payloads. Spaces may also appear literally.
const SPACE_ESCAPE: &str = "%20";

/// Schemes need at least two characters so `c:/notes.leo` stays a path.
static SCHEME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]+):").expect("scheme pattern is valid")
});

/// What activating a link should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Nothing to follow.
    Empty,
    /// A locator into the current outline.
    Local(Locator),
    /// Open an outline file, then optionally resolve a locator inside it.
    OutlineFile {
        path: PathBuf,
        locator: Option<Locator>,
    },
    /// Anything else; left to the system URL opener.
    External(String),
}

/// The raw pieces of a payload, before classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkParts<'a> {
    pub scheme: Option<&'a str>,
    pub netloc: Option<&'a str>,
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Split a payload into scheme, netloc, path, query and fragment.
pub fn split_link(link: &str) -> Result<LinkParts<'_>> {
    let mut parts = LinkParts::default();
    let mut rest = link;

    if let Some(caps) = SCHEME.captures(link) {
        let scheme = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        parts.scheme = Some(scheme);
        rest = &link[scheme.len() + 1..];
    }

    if let Some(after) = rest.strip_prefix("//") {
        let end = after.find(['/', '?', '#']).unwrap_or(after.len());
        let netloc = &after[..end];
        if netloc.contains('[') != netloc.contains(']') {
            return Err(UnlError::MalformedLink {
                link: link.to_string(),
                reason: "invalid IPv6 host".to_string(),
            });
        }
        parts.netloc = Some(netloc);
        rest = &after[end..];
    }

    if let Some((before, fragment)) = rest.split_once('#') {
        parts.fragment = Some(fragment);
        rest = before;
    }

    if let Some((before, query)) = rest.split_once('?') {
        parts.query = Some(query);
        rest = before;
    }

    parts.path = rest;
    Ok(parts)
}

/// Decode and classify a link payload.
pub fn parse_link(payload: &str, config: &LinkConfig) -> Result<LinkTarget> {
    let decoded = payload.replace(SPACE_ESCAPE, " ");
    let link = decoded.trim();
    if link.is_empty() {
        return Ok(LinkTarget::Empty);
    }

    let parts = split_link(link)?;
    let is_file = parts
        .scheme
        .is_none_or(|scheme| scheme.eq_ignore_ascii_case("file"));

    if is_file && config.is_outline_path(parts.path) {
        let locator = parts
            .fragment
            .filter(|f| !f.is_empty())
            .map(Locator::parse);
        return Ok(LinkTarget::OutlineFile {
            path: PathBuf::from(parts.path),
            locator,
        });
    }

    if parts.scheme.is_none() {
        if parts.path.is_empty() {
            return Ok(LinkTarget::Empty);
        }
        return Ok(LinkTarget::Local(Locator::parse(parts.path)));
    }

    match url::Url::parse(link) {
        Ok(_) => Ok(LinkTarget::External(link.to_string())),
        Err(e) => Err(UnlError::MalformedLink {
            link: link.to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Turn the path of an outline link into the file to open.
///
/// A leading `~` means the home directory. Relative paths are taken from
/// `base_dir`, then the configured base directory, then the working
/// directory.
pub fn resolve_outline_path(path: &Path, base_dir: Option<&Path>, config: &LinkConfig) -> PathBuf {
    let expanded = expand_home(path);
    if expanded.is_absolute() {
        return normalize_path(&expanded);
    }

    let base = base_dir
        .map(Path::to_path_buf)
        .or_else(|| config.base_dir.clone())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    normalize_path(&base.join(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> LinkTarget {
        parse_link(payload, &LinkConfig::default()).unwrap()
    }

    #[test]
    fn test_local_locator() {
        assert_eq!(
            parse("Users Guide-->Chapter 8: Customizing Leo"),
            LinkTarget::Local(Locator::parse("Users Guide-->Chapter 8: Customizing Leo"))
        );
    }

    #[test]
    fn test_space_escape_is_decoded() {
        assert_eq!(
            parse("Users%20Guide-->Chapter%208"),
            LinkTarget::Local(Locator::parse("Users Guide-->Chapter 8"))
        );
    }

    #[test]
    fn test_other_escapes_are_kept() {
        assert_eq!(
            parse("100%25 done"),
            LinkTarget::Local(Locator::parse("100%25 done"))
        );
    }

    #[test]
    fn test_file_link_with_fragment() {
        assert_eq!(
            parse("file:c:/prog/leoCvs/leo/doc/leoDocs.leo#Users Guide-->Chapter 8"),
            LinkTarget::OutlineFile {
                path: PathBuf::from("c:/prog/leoCvs/leo/doc/leoDocs.leo"),
                locator: Some(Locator::parse("Users Guide-->Chapter 8")),
            }
        );
    }

    #[test]
    fn test_file_link_with_authority() {
        assert_eq!(
            parse("file:///home/me/notes.leo#Todo"),
            LinkTarget::OutlineFile {
                path: PathBuf::from("/home/me/notes.leo"),
                locator: Some(Locator::parse("Todo")),
            }
        );
    }

    #[test]
    fn test_outline_path_without_scheme_or_fragment() {
        assert_eq!(
            parse("docs/notes.leo"),
            LinkTarget::OutlineFile {
                path: PathBuf::from("docs/notes.leo"),
                locator: None,
            }
        );
        assert_eq!(
            parse("docs/notes.leo#"),
            LinkTarget::OutlineFile {
                path: PathBuf::from("docs/notes.leo"),
                locator: None,
            }
        );
    }

    #[test]
    fn test_non_outline_urls_are_external() {
        assert_eq!(
            parse("http://localhost/MySiteUnderDevelopment/index.html"),
            LinkTarget::External("http://localhost/MySiteUnderDevelopment/index.html".to_string())
        );
        assert_eq!(
            parse("file://home/me/todolist.html"),
            LinkTarget::External("file://home/me/todolist.html".to_string())
        );
    }

    #[test]
    fn test_empty_payloads() {
        assert_eq!(parse(""), LinkTarget::Empty);
        assert_eq!(parse("   "), LinkTarget::Empty);
        assert_eq!(parse("#fragment-only"), LinkTarget::Empty);
    }

    #[test]
    fn test_malformed_host_is_rejected() {
        let err = parse_link("http://[::1/index.html", &LinkConfig::default()).unwrap_err();
        assert!(matches!(err, UnlError::MalformedLink { .. }));
    }

    #[test]
    fn test_split_link_pieces() {
        let parts = split_link("http://example.com/a/b?x=1#frag").unwrap();
        assert_eq!(parts.scheme, Some("http"));
        assert_eq!(parts.netloc, Some("example.com"));
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.query, Some("x=1"));
        assert_eq!(parts.fragment, Some("frag"));

        let local = split_link("A-->B").unwrap();
        assert_eq!(local.scheme, None);
        assert_eq!(local.path, "A-->B");
    }

    #[test]
    fn test_extensions_follow_config() {
        let config = LinkConfig {
            outline_extensions: vec!["opml".to_string()],
            ..LinkConfig::default()
        };
        assert!(matches!(
            parse_link("outline.opml#A", &config).unwrap(),
            LinkTarget::OutlineFile { .. }
        ));
        assert!(matches!(
            parse_link("file:///x/outline.leo#A", &config).unwrap(),
            LinkTarget::External(_)
        ));
    }

    #[test]
    fn test_relative_outline_path_uses_base_dir() {
        let config = LinkConfig::default();
        assert_eq!(
            resolve_outline_path(Path::new("../shared/a.leo"), Some(Path::new("/work/notes")), &config),
            PathBuf::from("/work/shared/a.leo")
        );

        let configured = LinkConfig {
            base_dir: Some(PathBuf::from("/srv/outlines")),
            ..LinkConfig::default()
        };
        assert_eq!(
            resolve_outline_path(Path::new("./a.leo"), None, &configured),
            PathBuf::from("/srv/outlines/a.leo")
        );
        assert_eq!(
            resolve_outline_path(Path::new("/abs/./a.leo"), Some(Path::new("/ignored")), &config),
            PathBuf::from("/abs/a.leo")
        );
    }
}
