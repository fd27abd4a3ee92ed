use unl_core::OutlineDocument;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(OutlineDocument);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
