use std::fs;
use unl_api::{Locator, MatchResult, OutlineReader};
use unl_core::model::load_outline;
use unl_core::{LocatorResolver, RowModel, format_locator};

const NOTEBOOK: &str = r#"{
    "nodes": [
        { "label": "Projects", "gnx": "tbrown.20110602.1", "children": [
            { "label": "qmlnotebook", "gnx": "tbrown.20110602.2", "body": "list model\nsecond line" },
            { "label": "Archived Tk code", "gnx": "tbrown.20110602.3", "children": [
                { "label": "UNL.py", "gnx": "ekr.20110602070710.3423" }
            ]}
        ]},
        { "label": "Scratch" }
    ]
}"#;

#[test]
fn test_loaded_outline_round_trips_every_locator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    fs::write(&path, NOTEBOOK).unwrap();

    let outline = load_outline(&path).unwrap();
    let resolver = LocatorResolver::new(&outline);
    for node in outline.preorder() {
        let locator = Locator::parse(&format_locator(&outline, node));
        assert_eq!(resolver.resolve_locator(&locator), MatchResult::Found { node });
    }

    let unl = outline.find_gnx("ekr.20110602070710.3423").unwrap();
    assert_eq!(
        format_locator(&outline, unl),
        "Projects-->Archived Tk code-->UNL.py"
    );
}

#[test]
fn test_row_projection_of_loaded_outline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebook.json");
    fs::write(&path, NOTEBOOK).unwrap();

    let outline = load_outline(&path).unwrap();
    let model = RowModel::project(&outline).unwrap();

    assert_eq!(model.len(), outline.node_count());
    let headlines: Vec<_> = (0..model.len())
        .map(|i| model.value(i, "h").and_then(|v| v.as_str()).unwrap().to_string())
        .collect();
    assert_eq!(
        headlines,
        vec!["Projects", "qmlnotebook", "Archived Tk code", "UNL.py", "Scratch"]
    );

    let levels: Vec<_> = (0..model.len())
        .map(|i| model.value(i, "level").and_then(|v| v.as_u64()).unwrap())
        .collect();
    assert_eq!(levels, vec![0, 1, 1, 2, 0]);

    let qml = model.node_for_gnx("tbrown.20110602.2").unwrap();
    assert_eq!(outline.body(qml), "list model\nsecond line");
    assert_eq!(model.node_for_gnx("unl.4"), outline.roots().get(1).copied());

    let named = model.named_rows();
    assert_eq!(named[3]["gnx"], "ekr.20110602070710.3423");
}
