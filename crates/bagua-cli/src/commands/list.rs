//! The `bagua list` command.

use anyhow::Result;

use bagua_core::view::CatalogView;

use super::Source;
use crate::render::catalog_table;

pub fn execute(source: &Source, format: String) -> Result<()> {
    let ctx = source.load()?;
    let view = CatalogView::build(&ctx.dataset);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        "text" => {
            if view.entries.is_empty() {
                println!("No palaces in dataset.");
            } else {
                println!("{}", catalog_table(&view));
                println!(
                    "{} palace(s). Run `bagua memory <palace>` to study one.",
                    view.entries.len()
                );
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
