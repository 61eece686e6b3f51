//! The `bagua validate` command.

use anyhow::Result;

use bagua_core::config::load_config_from;
use bagua_core::dataset;

use super::Source;

pub fn execute(source: &Source) -> Result<()> {
    let config = load_config_from(source.config.as_deref())?;
    let path = source.dataset_path(&config);
    let data = dataset::load(path)?;

    let label = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled".to_string());
    let lines = data
        .line_count()
        .map(|n| format!(", {n} lines each"))
        .unwrap_or_default();
    println!(
        "Dataset: {label} ({} palaces, {} hexagrams{lines})",
        data.palaces.len(),
        data.hexagram_count()
    );

    let warnings = dataset::validate_dataset(&data);
    for w in &warnings {
        let prefix = w
            .palace
            .as_ref()
            .map(|name| format!("  [{name}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Dataset valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
