//! View models for the catalog, memorization, and self-test views.
//!
//! These carry exactly what a front end needs to draw a view. The terminal
//! and HTML front ends both render from them.

use serde::Serialize;

use crate::model::{Dataset, Line, Palace};
use crate::route::{Navigation, Resolution, Route};
use crate::session::{AnswerSeed, TestSession};

/// Glyph for a solid line.
pub const SOLID_GLYPH: &str = "━━━━━";
/// Glyph for a broken line: two dash groups around the gap marker.
pub const BROKEN_GLYPH: &str = "━━│━━";

/// How a single line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineMark {
    Solid,
    Broken,
}

impl LineMark {
    pub fn glyph(self) -> &'static str {
        match self {
            LineMark::Solid => SOLID_GLYPH,
            LineMark::Broken => BROKEN_GLYPH,
        }
    }
}

impl From<Line> for LineMark {
    fn from(line: Line) -> Self {
        match line {
            Line::Yang => LineMark::Solid,
            Line::Yin => LineMark::Broken,
        }
    }
}

/// Marks for a line sequence, in storage order (bottom line first).
pub fn marks(lines: &[Line]) -> Vec<LineMark> {
    lines.iter().copied().map(LineMark::from).collect()
}

/// Draw a line sequence top line first, one glyph per row.
pub fn draw(marks: &[LineMark]) -> String {
    marks
        .iter()
        .rev()
        .map(|m| m.glyph())
        .collect::<Vec<_>>()
        .join("\n")
}

/// A view that either resolved or names a palace that does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Ready(T),
    NotFound(String),
}

/// Any of the three views, built from a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Catalog(CatalogView),
    Memory(MemoryView),
    Test(TestView),
}

/// Build whichever view a navigation addresses. Test views open in the
/// initial session state.
pub fn open(
    navigation: &Navigation,
    dataset: &Dataset,
    seed: AnswerSeed,
) -> ViewState<View> {
    match navigation.resolve(dataset) {
        Resolution::Catalog => ViewState::Ready(View::Catalog(CatalogView::build(dataset))),
        Resolution::NotFound(name) => ViewState::NotFound(name.to_string()),
        Resolution::Palace(palace) => match navigation.route {
            Route::Test(_) => {
                let session = TestSession::new(palace, seed);
                ViewState::Ready(View::Test(TestView::build(palace, &session)))
            }
            _ => ViewState::Ready(View::Memory(MemoryView::build(palace))),
        },
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// One navigable card in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Escaped path of the palace's memorization view.
    pub path: String,
    /// Marks of the palace's first hexagram.
    pub preview: Vec<LineMark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogView {
    pub entries: Vec<CatalogEntry>,
}

impl CatalogView {
    pub fn build(dataset: &Dataset) -> Self {
        let entries = dataset
            .palaces
            .iter()
            .map(|p| CatalogEntry {
                name: p.name.clone(),
                path: Route::Memory(p.name.clone()).to_path(),
                preview: p.head().map(|h| marks(&h.lines)).unwrap_or_default(),
            })
            .collect();
        Self { entries }
    }

    /// Selecting a card navigates to the memorization view with the palace
    /// carried along.
    pub fn select(dataset: &Dataset, index: usize) -> Option<Navigation> {
        dataset
            .palaces
            .get(index)
            .map(|p| Navigation::with_payload(Route::Memory(p.name.clone()), p.clone()))
    }
}

// ---------------------------------------------------------------------------
// Memorization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexagramCard {
    pub name: String,
    pub marks: Vec<LineMark>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryView {
    pub palace: String,
    pub cards: Vec<HexagramCard>,
    #[serde(skip)]
    source: Palace,
}

impl MemoryView {
    pub fn build(palace: &Palace) -> Self {
        let cards = palace
            .hexagrams
            .iter()
            .map(|h| HexagramCard {
                name: h.name.clone(),
                marks: marks(&h.lines),
            })
            .collect();
        Self {
            palace: palace.name.clone(),
            cards,
            source: palace.clone(),
        }
    }

    /// The "begin test" action.
    pub fn begin_test(&self) -> Navigation {
        Navigation::with_payload(Route::Test(self.palace.clone()), self.source.clone())
    }
}

// ---------------------------------------------------------------------------
// Self-test
// ---------------------------------------------------------------------------

/// One hexagram as shown in the self-test view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCard {
    /// The test-taker's current name entry.
    pub name: String,
    /// The test-taker's current lines, not the correct ones.
    pub marks: Vec<LineMark>,
    /// Set only when this hexagram was graded wrong.
    pub wrong: bool,
    /// Verdict, present only after submit.
    pub verdict: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestView {
    pub palace: String,
    pub cards: Vec<TestCard>,
}

impl TestView {
    pub fn build(palace: &Palace, session: &TestSession) -> Self {
        let cards = session
            .answers()
            .iter()
            .enumerate()
            .map(|(i, answer)| {
                let verdict = session.result(i);
                TestCard {
                    name: answer.name.clone(),
                    marks: marks(&answer.lines),
                    wrong: verdict == Some(false),
                    verdict,
                }
            })
            .collect();
        Self {
            palace: palace.name.clone(),
            cards,
        }
    }
}
