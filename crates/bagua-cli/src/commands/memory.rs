//! The `bagua memory` command.

use anyhow::Result;

use bagua_core::route::Route;

use super::{open, Source};

pub fn execute(source: &Source, palace: String) -> Result<()> {
    let ctx = source.load()?;
    open::show(&ctx, &Route::Memory(palace))
}
