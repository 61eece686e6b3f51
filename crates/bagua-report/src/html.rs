//! HTML page generator.
//!
//! Produces self-contained HTML files with all CSS inlined.

use anyhow::Result;
use std::path::Path;

use bagua_core::model::Dataset;
use bagua_core::route::Route;
use bagua_core::view::{CatalogView, LineMark, MemoryView, TestView};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn push_head(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"zh\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");
}

fn push_footer(html: &mut String) {
    html.push_str(&format!(
        "<footer class=\"meta\">Generated by bagua {} at {}</footer>\n",
        env!("CARGO_PKG_VERSION"),
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</body>\n</html>");
}

/// Lines top line first; broken lines get a gap marker between the dashes.
fn render_lines(marks: &[LineMark]) -> String {
    let mut out = String::from("<div class=\"lines\">");
    for mark in marks.iter().rev() {
        match mark {
            LineMark::Solid => out.push_str("<div class=\"line yang\">━━━━━</div>"),
            LineMark::Broken => out.push_str(
                "<div class=\"line yin\">━━<span class=\"gap\">│</span>━━</div>",
            ),
        }
    }
    out.push_str("</div>");
    out
}

/// Generate the study page: the catalog followed by every palace's
/// memorization view. Catalog cards link to in-page anchors named after the
/// escaped memorization route.
pub fn generate_study_html(dataset: &Dataset) -> String {
    let catalog = CatalogView::build(dataset);
    let mut html = String::new();

    push_head(&mut html, "八宫卦 — Eight Palaces");

    // Catalog
    html.push_str("<section class=\"catalog\" id=\"/\">\n");
    html.push_str("<h1>八宫卦</h1>\n");
    html.push_str("<div class=\"grid\">\n");
    for entry in &catalog.entries {
        html.push_str(&format!(
            "<a class=\"card palace-card\" href=\"#{}\"><h2>{}</h2>{}</a>\n",
            html_escape(&entry.path),
            html_escape(&entry.name),
            render_lines(&entry.preview)
        ));
    }
    html.push_str("</div>\n</section>\n");

    // Memorization views
    for palace in &dataset.palaces {
        let view = MemoryView::build(palace);
        html.push_str(&format!(
            "<section class=\"memory\" id=\"{}\">\n",
            html_escape(&Route::Memory(palace.name.clone()).to_path())
        ));
        html.push_str(&format!("<h1>{}</h1>\n", html_escape(&view.palace)));
        html.push_str("<div class=\"grid\">\n");
        for card in &view.cards {
            html.push_str(&format!(
                "<div class=\"card\"><h2>{}</h2>{}</div>\n",
                html_escape(&card.name),
                render_lines(&card.marks)
            ));
        }
        html.push_str("</div>\n");
        html.push_str(&format!(
            "<p class=\"begin-test\">开始测试: <code>bagua open {}</code> · <a href=\"#/\">返回</a></p>\n",
            html_escape(&view.begin_test().route.to_path())
        ));
        html.push_str("</section>\n");
    }

    push_footer(&mut html);
    html
}

/// Generate a page for a self-test view, graded or not.
pub fn generate_test_html(view: &TestView) -> String {
    let mut html = String::new();

    push_head(&mut html, &format!("{} — 测试", view.palace));

    html.push_str("<section class=\"test\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(&view.palace)));

    let graded: Vec<bool> = view.cards.iter().filter_map(|c| c.verdict).collect();
    if !graded.is_empty() {
        html.push_str(&format!(
            "<p class=\"meta\">{}/{} 正确</p>\n",
            graded.iter().filter(|v| **v).count(),
            view.cards.len()
        ));
    }

    html.push_str("<div class=\"grid\">\n");
    for card in &view.cards {
        let class = if card.wrong { "name wrong" } else { "name" };
        let name = if card.name.is_empty() {
            "<span class=\"placeholder\">输入卦名</span>".to_string()
        } else {
            html_escape(&card.name)
        };
        html.push_str(&format!(
            "<div class=\"card\"><div class=\"{class}\">{name}</div>{}",
            render_lines(&card.marks)
        ));
        match card.verdict {
            Some(true) => html.push_str("<div class=\"result pass\">正确</div>"),
            Some(false) => html.push_str("<div class=\"result fail\">错误</div>"),
            None => {}
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n</section>\n");

    push_footer(&mut html);
    html
}

/// Write the study page to a file.
pub fn write_study_html(dataset: &Dataset, path: &Path) -> Result<()> {
    write_page(path, generate_study_html(dataset))
}

/// Write a self-test page to a file.
pub fn write_test_html(view: &TestView, path: &Path) -> Result<()> {
    write_page(path, generate_test_html(view))
}

fn write_page(path: &Path, html: String) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
:root { --bg: #fdfaf3; --fg: #1a1a1a; --border: #e5e0d3; --pass: #dcfce7; --fail: #fde2e2; --ink: #222; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --pass: #064e3b; --fail: #7f1d1d; --ink: #e5e7eb; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'PingFang SC', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1 { margin-top: 2rem; }
h2 { font-size: 1.1rem; margin: 0 0 0.75rem; }
a { color: inherit; }
.meta { color: #6b7280; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(140px, 1fr)); gap: 1rem; }
.card { border: 1px solid var(--border); border-radius: 8px; padding: 1rem; text-align: center; text-decoration: none; }
.palace-card:hover { border-color: var(--ink); }
.lines { display: inline-flex; flex-direction: column; gap: 4px; }
.line { font-family: monospace; letter-spacing: -1px; color: var(--ink); line-height: 1; }
.line.yin .gap { opacity: 0.25; }
.name { padding: 0.25rem; margin-bottom: 0.75rem; border-bottom: 1px solid var(--border); }
.name.wrong { background: var(--fail); }
.placeholder { color: #9ca3af; }
.result { margin-top: 0.5rem; border-radius: 4px; }
.pass { background: var(--pass); }
.fail { background: var(--fail); }
section { margin-bottom: 3rem; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
"#;
