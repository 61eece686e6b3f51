//! bagua-report — HTML rendering of the bagua study views.

pub mod html;

pub use html::{generate_study_html, generate_test_html, write_study_html, write_test_html};
