use std::path::PathBuf;
use tracing::info;
use unl_api::OutlineSlot;
use unl_core::model::load_outline;
use unl_core::{LinkConfig, LinkHandler, OutlineSession, UnlConfig, UnlError};

pub fn run(config: &UnlConfig, path: PathBuf, gnx: String) -> Result<(), Box<dyn std::error::Error>> {
    let outline = load_outline(&path)?;
    let node = outline
        .find_gnx(&gnx)
        .ok_or_else(|| UnlError::UnknownNode(format!("gnx {} in {}", gnx, path.display())))?;
    info!("Selecting {} in {}", gnx, path.display());

    let handler = LinkHandler::new(LinkConfig::from(config));
    let mut session = OutlineSession::new(outline);
    handler.on_select(&mut session, OutlineSlot::Current, Some(node));

    println!("{}", session.status());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn notebook(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("notebook.json");
        fs::write(
            &path,
            r#"{ "nodes": [ { "label": "Projects", "gnx": "tbrown.1", "children": [
                { "label": "UNL.py", "gnx": "ekr.3423" } ] } ] }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_locate_known_gnx() {
        let dir = tempfile::tempdir().unwrap();
        let path = notebook(dir.path());
        assert!(run(&UnlConfig::default(), path, "ekr.3423".into()).is_ok());
    }

    #[test]
    fn test_locate_unknown_gnx_is_unknown_node() {
        let dir = tempfile::tempdir().unwrap();
        let path = notebook(dir.path());

        let err = run(&UnlConfig::default(), path, "nope".into()).unwrap_err();
        let err = err.downcast::<UnlError>().unwrap();
        assert!(matches!(*err, UnlError::UnknownNode(ref what) if what.contains("gnx nope")));
    }
}
