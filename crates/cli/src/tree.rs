use std::path::PathBuf;
use unl_api::OutlineReader;
use unl_core::model::load_outline;

pub fn run(path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let outline = load_outline(&path)?;
    println!("{} ({} nodes)", path.display(), outline.node_count());

    for node in outline.preorder() {
        println!(
            "{}{}  [{}]",
            "  ".repeat(outline.level(node) + 1),
            outline.label(node),
            outline.gnx(node).unwrap_or("-")
        );
    }
    Ok(())
}
