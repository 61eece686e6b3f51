//! Study session example: drive the catalog, memorization and self-test
//! views through the library API without the CLI.
//!
//! ```bash
//! cargo run -p bagua-core --example study_session
//! ```

use bagua_core::dataset;
use bagua_core::route::{Navigation, Resolution};
use bagua_core::session::{AnswerSeed, TestSession};
use bagua_core::view::{draw, CatalogView, MemoryView, TestView};

fn main() -> anyhow::Result<()> {
    let data = dataset::bundled()?;

    // The catalog lists every palace with a preview of its first hexagram.
    let catalog = CatalogView::build(&data);
    for entry in &catalog.entries {
        println!("{}  {}\n{}\n", entry.name, entry.path, draw(&entry.preview));
    }

    // Selecting an entry yields a navigation; resolving it always goes
    // back to the dataset by decoded name.
    let navigation = CatalogView::select(&data, 0)
        .ok_or_else(|| anyhow::anyhow!("dataset has no palaces"))?;
    let palace = match navigation.resolve(&data) {
        Resolution::Palace(p) => p,
        Resolution::NotFound(name) => anyhow::bail!("palace not found: {name}"),
        Resolution::Catalog => anyhow::bail!("expected a palace route"),
    };

    let memory = MemoryView::build(palace);
    println!("\n{}", memory.palace);
    for card in &memory.cards {
        println!("{}\n{}\n", card.name, draw(&card.marks));
    }

    // Begin the test from the memorization view, then answer the first two
    // hexagrams and flip one line of the second.
    let test_route: Navigation = memory.begin_test();
    println!("test route: {}", test_route.route);

    let session = TestSession::new(palace, AnswerSeed::Correct)
        .set_name(0, palace.hexagrams[0].name.clone())?
        .set_name(1, palace.hexagrams[1].name.clone())?
        .toggle_line(1, 0)?
        .submit(palace);

    let view = TestView::build(palace, &session);
    for (i, card) in view.cards.iter().enumerate() {
        let verdict = match card.verdict {
            Some(true) => "correct",
            Some(false) => "wrong",
            None => "-",
        };
        println!("{}. {:<8} {verdict}", i + 1, card.name);
    }
    if let Some(score) = session.score() {
        println!("score: {score}");
    }

    // Retest clears every answer and verdict.
    let session = session.retest(palace);
    assert!(!session.is_submitted());

    Ok(())
}
