//! The `bagua export` command.

use std::path::PathBuf;

use anyhow::Result;

use bagua_report::write_study_html;

use super::Source;

pub fn execute(source: &Source, output: PathBuf) -> Result<()> {
    let ctx = source.load()?;
    write_study_html(&ctx.dataset, &output)?;
    eprintln!(
        "Study page: {} ({} palaces)",
        output.display(),
        ctx.dataset.palaces.len()
    );
    Ok(())
}
