//! Terminal rendering of the views.

use comfy_table::{Cell, CellAlignment, Color, Table};

use bagua_core::view::{draw, CatalogView, LineMark, MemoryView, TestView};

/// Placeholder shown for an empty name entry.
const NAME_PLACEHOLDER: &str = "输入卦名";

pub fn catalog_table(view: &CatalogView) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Palace", "First hexagram", "Path"]);

    for (i, entry) in view.entries.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&entry.name),
            Cell::new(draw(&entry.preview)),
            Cell::new(&entry.path),
        ]);
    }

    table
}

pub fn memory_table(view: &MemoryView) -> Table {
    let mut table = Table::new();
    table.set_header(
        view.cards
            .iter()
            .map(|c| Cell::new(&c.name).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        view.cards
            .iter()
            .map(|c| Cell::new(draw(&c.marks)).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    table
}

/// One column per hexagram, one row per line (top line first, numbered
/// from the bottom), so toggles can be addressed by the printed numbers.
pub fn test_table(view: &TestView) -> Table {
    let mut table = Table::new();

    let mut header = vec![Cell::new("")];
    header.extend(
        (1..=view.cards.len()).map(|i| Cell::new(i).set_alignment(CellAlignment::Center)),
    );
    table.set_header(header);

    let mut names = vec![Cell::new("name")];
    names.extend(view.cards.iter().map(|c| {
        let text = if c.name.is_empty() {
            NAME_PLACEHOLDER.to_string()
        } else {
            c.name.clone()
        };
        if c.wrong {
            Cell::new(format!("✗ {text}")).fg(Color::Red)
        } else {
            Cell::new(text)
        }
    }));
    table.add_row(names);

    let line_count = view.cards.iter().map(|c| c.marks.len()).max().unwrap_or(0);
    for line in (0..line_count).rev() {
        let mut row = vec![Cell::new(line + 1)];
        row.extend(view.cards.iter().map(|c| {
            let glyph = c.marks.get(line).copied().map(LineMark::glyph).unwrap_or("");
            Cell::new(glyph).set_alignment(CellAlignment::Center)
        }));
        table.add_row(row);
    }

    if view.cards.iter().any(|c| c.verdict.is_some()) {
        let mut verdicts = vec![Cell::new("result")];
        verdicts.extend(view.cards.iter().map(|c| match c.verdict {
            Some(true) => Cell::new("正确").fg(Color::Green),
            Some(false) => Cell::new("错误").fg(Color::Red),
            None => Cell::new(""),
        }));
        table.add_row(verdicts);
    }

    table
}
