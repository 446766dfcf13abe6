//! Startup-time registry of section types.
//!
//! Maps a section type name to its renderer and default configuration.
//! Registration happens once at startup from the builtin set; resolution
//! against a page's available sections is asynchronous (see `resolve`).

use bevy::prelude::*;
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::theme::SectionData;

use super::renderers;

/// Draws a section preview onto the canvas from its `data`.
pub type RenderFn = fn(&mut bevy_egui::egui::Ui, &SectionData);

/// Produces the default `data` for a freshly added section.
pub type DefaultDataFn = fn() -> Map<String, Value>;

/// A resolved, renderable section implementation.
#[derive(Clone, Copy)]
pub struct SectionRenderer {
    pub render: RenderFn,
}

/// Everything registered for one section type.
#[derive(Clone, Copy)]
pub struct SectionDefinition {
    pub display_name: &'static str,
    pub renderer: SectionRenderer,
    pub default_data: DefaultDataFn,
}

/// Resource mapping section type names to their definitions.
#[derive(Resource, Default)]
pub struct SectionRegistry {
    entries: HashMap<String, SectionDefinition>,
}

impl SectionRegistry {
    /// Registry preloaded with every builtin section type.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for (name, definition) in renderers::builtin_definitions() {
            registry.register(name, definition);
        }
        registry
    }

    pub fn register(&mut self, type_name: &str, definition: SectionDefinition) {
        if self
            .entries
            .insert(type_name.to_string(), definition)
            .is_some()
        {
            warn!("Section type '{}' registered twice, replacing", type_name);
        }
    }

    pub fn get(&self, type_name: &str) -> Option<&SectionDefinition> {
        self.entries.get(type_name)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    /// Snapshot of all entries, cloned for a resolution task.
    pub fn definitions(&self) -> HashMap<String, SectionDefinition> {
        self.entries.clone()
    }

    /// Default `data` for a type, or an empty map for unknown types.
    pub fn default_data_for(&self, type_name: &str) -> Map<String, Value> {
        self.entries
            .get(type_name)
            .map(|d| (d.default_data)())
            .unwrap_or_default()
    }

    /// Human-readable label for a type name (falls back to the raw name).
    pub fn display_name_for<'a>(&self, type_name: &'a str) -> &'a str {
        match self.entries.get(type_name) {
            Some(definition) => definition.display_name,
            None => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILTIN_TYPES: [&str; 8] = [
        "hero",
        "about",
        "featured_collections",
        "image_with_text",
        "best_sellers",
        "newsletter_signup",
        "footer",
        "single_product",
    ];

    #[test]
    fn test_builtin_registry_has_all_types() {
        let registry = SectionRegistry::builtin();
        for name in BUILTIN_TYPES {
            assert!(registry.contains(name), "missing builtin type: {}", name);
        }
    }

    #[test]
    fn test_unknown_type_not_registered() {
        let registry = SectionRegistry::builtin();
        assert!(!registry.contains("video_banner"));
        assert!(registry.get("video_banner").is_none());
    }

    #[test]
    fn test_builtin_default_data_is_populated() {
        let registry = SectionRegistry::builtin();
        for name in BUILTIN_TYPES {
            let data = registry.default_data_for(name);
            assert!(!data.is_empty(), "no default data for: {}", name);
        }
    }

    #[test]
    fn test_default_data_for_unknown_type_is_empty() {
        let registry = SectionRegistry::builtin();
        assert!(registry.default_data_for("video_banner").is_empty());
    }

    #[test]
    fn test_display_name_falls_back_to_raw_name() {
        let registry = SectionRegistry::builtin();
        assert_eq!(registry.display_name_for("hero"), "Hero");
        assert_eq!(registry.display_name_for("video_banner"), "video_banner");
    }
}
