use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};
use unl_core::RowModel;
use unl_core::model::load_outline;

#[derive(Tabled)]
struct RowView {
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Gnx")]
    gnx: String,
    #[tabled(rename = "Headline")]
    headline: String,
    #[tabled(rename = "Body")]
    body: String,
}

const BODY_PREVIEW: usize = 40;

pub fn run(path: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let outline = load_outline(&path)?;
    let model = RowModel::project(&outline)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&model.named_rows())?);
        return Ok(());
    }

    if model.is_empty() {
        println!("Outline is empty.");
        return Ok(());
    }

    let text = |index: usize, field: &str| {
        model
            .value(index, field)
            .map(|v| match v.as_str() {
                Some(s) => s.to_string(),
                None => v.to_string(),
            })
            .unwrap_or_default()
    };

    let views: Vec<RowView> = (0..model.len())
        .map(|i| {
            let level = text(i, "level");
            let depth: usize = level.parse().unwrap_or(0);
            RowView {
                headline: format!("{}{}", "  ".repeat(depth), text(i, "h")),
                body: preview(&text(i, "b")),
                gnx: text(i, "gnx"),
                level,
            }
        })
        .collect();

    println!("{}", Table::new(&views).with(Style::psql()));
    Ok(())
}

fn preview(body: &str) -> String {
    let first = body.lines().next().unwrap_or("");
    if first.chars().count() > BODY_PREVIEW {
        let cut: String = first.chars().take(BODY_PREVIEW).collect();
        format!("{}...", cut)
    } else {
        first.to_string()
    }
}
