//! The `bagua open` command.

use anyhow::Result;

use bagua_core::route::{Navigation, Route};
use bagua_core::view::{self, View, ViewState};

use super::{Context, Source};
use crate::render::{catalog_table, memory_table, test_table};

pub fn execute(source: &Source, path: String) -> Result<()> {
    let route = Route::parse(&path)?;
    let ctx = source.load()?;
    show(&ctx, &route)
}

/// Render whichever view `route` addresses.
pub fn show(ctx: &Context, route: &Route) -> Result<()> {
    let navigation = Navigation::to(route.clone());

    match view::open(&navigation, &ctx.dataset, ctx.config.answer_seed) {
        ViewState::NotFound(name) => anyhow::bail!("palace not found: {name}"),
        ViewState::Ready(View::Catalog(view)) => {
            if view.entries.is_empty() {
                println!("No palaces in dataset.");
            } else {
                println!("{}", catalog_table(&view));
            }
        }
        ViewState::Ready(View::Memory(view)) => {
            println!("{}", view.palace);
            println!("{}", memory_table(&view));
            let next = view.begin_test().route;
            println!(
                "Begin test: bagua test {}  ({})",
                next.palace_name().unwrap_or_default(),
                next
            );
        }
        ViewState::Ready(View::Test(view)) => {
            println!("{}", view.palace);
            println!("{}", test_table(&view));
            println!("Run `bagua test {}` to answer interactively.", view.palace);
        }
    }

    Ok(())
}
