//! The `bagua init` command.

use std::path::Path;

use anyhow::Result;

use bagua_core::dataset;

pub fn execute() -> Result<()> {
    if Path::new("bagua.toml").exists() {
        println!("bagua.toml already exists, skipping.");
    } else {
        std::fs::write("bagua.toml", SAMPLE_CONFIG)?;
        println!("Created bagua.toml");
    }

    if Path::new("palaces.json").exists() {
        println!("palaces.json already exists, skipping.");
    } else {
        std::fs::write("palaces.json", dataset::bundled_json())?;
        println!("Created palaces.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit palaces.json if you want your own groupings");
    println!("  2. Run: bagua validate");
    println!("  3. Run: bagua list");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# bagua configuration

# Dataset file, relative to this config. Remove to use the bundled data.
dataset = "palaces.json"

# Initial lines of each answer in `bagua test`:
#   "correct" - start from the right lines, toggle only what you think differs
#   "yin"     - start with every line broken
#   "yang"    - start with every line solid
answer_seed = "correct"
"#;
