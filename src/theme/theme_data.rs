use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Current on-disk theme format version.
pub const THEME_FORMAT_VERSION: u32 = 1;

/// Opaque identifier for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeId(pub u64);

/// Opaque identifier for a page, assigned at creation and stable across
/// renames. All page lookups go through this id, never the display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub u64);

/// Opaque identifier for a placed section, assigned at insertion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(pub u64);

/// A complete storefront design: a set of pages, each with an ordered
/// list of placed sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeData {
    pub id: ThemeId,
    pub name: String,
    /// Relative path to the theme's preview image, if the author set one.
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub pages: Vec<PageData>,
}

impl ThemeData {
    /// A minimal starter theme with a single empty Home page.
    pub fn starter() -> Self {
        Self {
            id: ThemeId(0),
            name: "Untitled Theme".to_string(),
            thumbnail: None,
            pages: vec![PageData {
                id: PageId(0),
                name: "Home".to_string(),
                available_sections: vec![
                    "hero".to_string(),
                    "about".to_string(),
                    "featured_collections".to_string(),
                    "image_with_text".to_string(),
                    "best_sellers".to_string(),
                    "newsletter_signup".to_string(),
                    "footer".to_string(),
                ],
                presets: Vec::new(),
                body: Vec::new(),
            }],
        }
    }

    pub fn page(&self, id: PageId) -> Option<&PageData> {
        self.pages.iter().find(|p| p.id == id)
    }

    pub fn page_mut(&mut self, id: PageId) -> Option<&mut PageData> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    pub fn first_page(&self) -> Option<&PageData> {
        self.pages.first()
    }

    /// Highest section id used anywhere in the theme. Seeds the allocator
    /// when a theme is loaded so fresh ids never collide with loaded ones.
    pub fn max_section_id(&self) -> u64 {
        self.pages
            .iter()
            .flat_map(|p| p.body.iter())
            .map(|s| s.id.0)
            .max()
            .unwrap_or(0)
    }

    /// Distinct section type names used by any page (for the save manifest).
    pub fn section_manifest(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .pages
            .iter()
            .flat_map(|p| p.body.iter())
            .map(|s| s.section_type.clone())
            .collect();
        types.sort();
        types.dedup();
        types
    }
}

/// One navigable screen of a theme (e.g. Home, Product).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    pub id: PageId,
    pub name: String,
    /// Section type names that can be added to this page.
    pub available_sections: Vec<String>,
    /// Theme-author default configuration per section type.
    #[serde(default)]
    pub presets: Vec<SectionPreset>,
    /// Placed sections, in storefront render order.
    pub body: Vec<SectionData>,
}

impl PageData {
    pub fn section(&self, id: SectionId) -> Option<&SectionData> {
        self.body.iter().find(|s| s.id == id)
    }

    /// The author-provided default data for a section type, if any.
    pub fn preset_for(&self, section_type: &str) -> Option<&SectionPreset> {
        self.presets.iter().find(|p| p.section_type == section_type)
    }
}

/// Author-provided default `data` for one section type on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPreset {
    pub section_type: String,
    pub data: Map<String, Value>,
}

/// One placed, configurable content block within a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionData {
    pub id: SectionId,
    /// Selects the renderer; the `data` shape is owned by the type.
    pub section_type: String,
    /// Display label, defaults to the type name.
    pub name: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// On-disk envelope for a saved theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedTheme {
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Distinct section types the theme uses, validated against the
    /// registry at load time.
    #[serde(default)]
    pub section_manifest: Vec<String>,
    pub theme: ThemeData,
}

fn default_format_version() -> u32 {
    THEME_FORMAT_VERSION
}

impl SavedTheme {
    pub fn from_theme(theme: ThemeData) -> Self {
        Self {
            format_version: THEME_FORMAT_VERSION,
            section_manifest: theme.section_manifest(),
            theme,
        }
    }
}

/// Hands out section ids. Monotonic and never reused, so a section
/// deleted and re-added via redo keeps a distinct identity from any
/// later insertion.
#[derive(bevy::prelude::Resource)]
pub struct SectionIdAllocator {
    next_id: u64,
}

impl Default for SectionIdAllocator {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl SectionIdAllocator {
    pub fn allocate(&mut self) -> SectionId {
        let id = SectionId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Move the counter past every id present in a loaded theme.
    pub fn seed_from(&mut self, theme: &ThemeData) {
        self.next_id = self.next_id.max(theme.max_section_id() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: u64, section_type: &str) -> SectionData {
        SectionData {
            id: SectionId(id),
            section_type: section_type.to_string(),
            name: section_type.to_string(),
            data: Map::new(),
        }
    }

    #[test]
    fn test_starter_theme_has_home_page() {
        let theme = ThemeData::starter();
        assert_eq!(theme.pages.len(), 1);
        assert_eq!(theme.pages[0].name, "Home");
        assert!(theme.pages[0].body.is_empty());
    }

    #[test]
    fn test_page_lookup_by_id() {
        let theme = ThemeData::starter();
        let id = theme.pages[0].id;
        assert!(theme.page(id).is_some());
        assert!(theme.page(PageId(999)).is_none());
    }

    #[test]
    fn test_max_section_id_empty_theme() {
        assert_eq!(ThemeData::starter().max_section_id(), 0);
    }

    #[test]
    fn test_max_section_id_spans_pages() {
        let mut theme = ThemeData::starter();
        theme.pages[0].body.push(section(3, "hero"));
        theme.pages.push(PageData {
            id: PageId(1),
            name: "Product".to_string(),
            available_sections: vec!["single_product".to_string()],
            presets: Vec::new(),
            body: vec![section(7, "single_product")],
        });
        assert_eq!(theme.max_section_id(), 7);
    }

    #[test]
    fn test_section_manifest_dedupes_and_sorts() {
        let mut theme = ThemeData::starter();
        theme.pages[0].body.push(section(1, "hero"));
        theme.pages[0].body.push(section(2, "footer"));
        theme.pages[0].body.push(section(3, "hero"));
        assert_eq!(theme.section_manifest(), vec!["footer", "hero"]);
    }

    #[test]
    fn test_theme_serialization_roundtrip() {
        let mut theme = ThemeData::starter();
        theme.pages[0].body.push(section(1, "hero"));
        let json = serde_json::to_string(&theme).unwrap();
        let parsed: ThemeData = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, parsed);
    }

    #[test]
    fn test_saved_theme_builds_manifest() {
        let mut theme = ThemeData::starter();
        theme.pages[0].body.push(section(1, "newsletter_signup"));
        let saved = SavedTheme::from_theme(theme);
        assert_eq!(saved.format_version, THEME_FORMAT_VERSION);
        assert_eq!(saved.section_manifest, vec!["newsletter_signup"]);
    }

    #[test]
    fn test_saved_theme_defaults_on_deserialize() {
        // Old files without a manifest or version still load.
        let json = r#"{
            "theme": {
                "id": 1,
                "name": "Old Theme",
                "pages": []
            }
        }"#;
        let parsed: SavedTheme = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.format_version, THEME_FORMAT_VERSION);
        assert!(parsed.section_manifest.is_empty());
        assert!(parsed.theme.thumbnail.is_none());
    }

    #[test]
    fn test_allocator_is_monotonic() {
        let mut alloc = SectionIdAllocator::default();
        let a = alloc.allocate();
        let b = alloc.allocate();
        assert!(b.0 > a.0);
    }

    #[test]
    fn test_allocator_seeds_past_loaded_ids() {
        let mut theme = ThemeData::starter();
        theme.pages[0].body.push(section(41, "hero"));
        let mut alloc = SectionIdAllocator::default();
        alloc.seed_from(&theme);
        assert_eq!(alloc.allocate(), SectionId(42));
    }
}
