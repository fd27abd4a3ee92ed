use nu_ansi_term::Color;
use std::path::PathBuf;
use unl_api::OutlineHost;
use unl_core::{LinkConfig, LinkHandler, LinkOutcome, OutlineSession, UnlConfig, format_locator};

pub fn run(
    config: &UnlConfig,
    path: PathBuf,
    link: String,
    base_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = OutlineSession::load(&path)?;
    let base_dir = base_dir.or_else(|| session.base_dir().map(PathBuf::from));

    let handler = LinkHandler::new(LinkConfig::from(config));
    let outcome = handler.on_link(&mut session, &link, base_dir.as_deref());

    for notice in session.take_notices() {
        println!("{}", Color::Yellow.paint(notice));
    }

    match outcome {
        LinkOutcome::Focused { slot, node, partial } => {
            let outline = session
                .outline(slot)
                .ok_or("focused outline is no longer loaded")?;
            let file = session
                .path_of(slot)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("Outline: {}", file);
            println!("Node:    {}", format_locator(outline, node));
            if let Some(depth) = partial {
                println!("Matched: {} headline(s)", depth);
            }
        }
        LinkOutcome::Opened { slot } => {
            let file = session
                .path_of(slot)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("Opened:  {}", file);
        }
        LinkOutcome::External { url } => println!("External: {}", url),
        LinkOutcome::NoMatch => println!("No matching node."),
        LinkOutcome::Ignored => println!("Nothing to follow."),
        LinkOutcome::Failed { reason } => return Err(reason.into()),
    }
    Ok(())
}
