//! Askama templates for the web frontend.

use askama::Template;

use crate::registry::TravelerRegistry;

/// Welcome page listing the catalog.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub travelers: Vec<TravelerView>,
}

impl IndexTemplate {
    pub fn from_registry(registry: &TravelerRegistry) -> Self {
        Self {
            travelers: registry
                .iter()
                .map(|t| TravelerView {
                    name: t.name().to_string(),
                    top_speed: t.top_speed().to_string(),
                })
                .collect(),
        }
    }
}

/// Traveler view model for templates.
#[derive(Debug, Clone)]
pub struct TravelerView {
    pub name: String,

    /// Speed with its unit, e.g. "33.5 m/s"
    pub top_speed: String,
}
