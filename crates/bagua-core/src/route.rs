//! Navigable paths and palace resolution.
//!
//! There are three addressable views: the catalog at `/`, and the
//! memorization and self-test views at `/memory/<palace>` and
//! `/test/<palace>`. The palace segment is percent-encoded UTF-8, so any
//! palace name survives the trip through a path.

use std::fmt;

use crate::error::RouteError;
use crate::model::{Dataset, Palace};

const MEMORY_SEGMENT: &str = "memory";
const TEST_SEGMENT: &str = "test";

/// One of the three views, with the palace name already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Catalog,
    Memory(String),
    Test(String),
}

impl Route {
    /// Parse a path such as `/memory/%E4%B9%BE%E5%AE%AB`.
    ///
    /// Segments after the palace segment are ignored.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        let mut segments = path.trim_start_matches('/').split('/');
        let view = segments.next().unwrap_or_default();
        if view.is_empty() {
            return Ok(Route::Catalog);
        }

        let wrap: fn(String) -> Route = match view {
            MEMORY_SEGMENT => Route::Memory,
            TEST_SEGMENT => Route::Test,
            other => return Err(RouteError::UnknownView(other.to_string())),
        };

        let segment = segments
            .next()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RouteError::MissingPalace(path.to_string()))?;

        Ok(wrap(decode_segment(segment)?))
    }

    /// The escaped path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Memory(name) => format!("/{MEMORY_SEGMENT}/{}", encode_segment(name)),
            Route::Test(name) => format!("/{TEST_SEGMENT}/{}", encode_segment(name)),
        }
    }

    /// The palace this route is parameterized by, if any.
    pub fn palace_name(&self) -> Option<&str> {
        match self {
            Route::Catalog => None,
            Route::Memory(name) | Route::Test(name) => Some(name),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

/// Percent-encode a palace name for use as one path segment.
pub fn encode_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// Reverse of [`encode_segment`].
pub fn decode_segment(segment: &str) -> Result<String, RouteError> {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|e| RouteError::InvalidEscape {
            segment: segment.to_string(),
            reason: e.to_string(),
        })
}

/// A navigation: a route plus an optional palace record carried alongside.
///
/// The payload only saves a lookup. Identity always comes from the route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub route: Route,
    pub payload: Option<Palace>,
}

/// The outcome of resolving a navigation against the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Catalog,
    Palace(&'a Palace),
    NotFound(&'a str),
}

impl Navigation {
    /// Navigate to a route with no payload.
    pub fn to(route: Route) -> Self {
        Self {
            route,
            payload: None,
        }
    }

    /// Navigate to a route carrying the palace record along.
    pub fn with_payload(route: Route, palace: Palace) -> Self {
        Self {
            route,
            payload: Some(palace),
        }
    }

    /// Parse a path into a navigation with no payload.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        Route::parse(path).map(Self::to)
    }

    /// Resolve the route's palace name against the dataset.
    pub fn resolve<'a>(&'a self, dataset: &'a Dataset) -> Resolution<'a> {
        let Some(name) = self.route.palace_name() else {
            return Resolution::Catalog;
        };

        match dataset.find(name) {
            Some(palace) => {
                if let Some(payload) = &self.payload {
                    if payload != palace {
                        tracing::debug!(
                            palace = %name,
                            payload = %payload.name,
                            "discarding navigation payload that disagrees with dataset"
                        );
                    }
                }
                Resolution::Palace(palace)
            }
            None => {
                tracing::debug!(palace = %name, "palace not found");
                Resolution::NotFound(name)
            }
        }
    }
}
