//! bagua-core — Palace dataset, routes, and self-test logic.
//!
//! This crate defines the data model, dataset loading, navigable routes,
//! the self-test session, and the view models that the bagua front ends
//! render.

pub mod config;
pub mod dataset;
pub mod error;
pub mod model;
pub mod route;
pub mod session;
pub mod view;

pub use error::{RouteError, SessionError};
pub use model::{Dataset, Hexagram, Line, Palace};
