//! The unit of edit history: the full builder state at one point in time.

use crate::theme::{PageData, PageId, SectionId, ThemeData};

/// Everything the builder is editing, captured as one value.
///
/// `selected_section` is deliberately excluded from history comparisons:
/// picking a section to edit is not itself an edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuilderSnapshot {
    /// The theme being edited, if one is open.
    pub theme: Option<ThemeData>,
    /// The active page within the theme.
    pub page_id: Option<PageId>,
    /// The section currently open in the editor panel, if any.
    pub selected_section: Option<SectionId>,
    /// Section type names addable on the active page.
    pub available_sections: Vec<String>,
}

impl BuilderSnapshot {
    /// Snapshot for a freshly opened theme: first page active, nothing
    /// selected, available sections taken from that page.
    pub fn open_theme(theme: ThemeData) -> Self {
        let page_id = theme.first_page().map(|p| p.id);
        let available_sections = theme
            .first_page()
            .map(|p| p.available_sections.clone())
            .unwrap_or_default();
        Self {
            theme: Some(theme),
            page_id,
            selected_section: None,
            available_sections,
        }
    }

    /// The active page, when both a theme and a valid page id are set.
    pub fn page(&self) -> Option<&PageData> {
        let theme = self.theme.as_ref()?;
        theme.page(self.page_id?)
    }

    pub fn page_mut(&mut self) -> Option<&mut PageData> {
        let page_id = self.page_id?;
        self.theme.as_mut()?.page_mut(page_id)
    }

    /// Equality for history purposes: everything except the selection.
    pub fn edits_equal(&self, other: &Self) -> bool {
        self.theme == other.theme
            && self.page_id == other.page_id
            && self.available_sections == other.available_sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SectionId;

    #[test]
    fn test_open_theme_defaults_to_first_page() {
        let theme = ThemeData::starter();
        let expected_page = theme.pages[0].id;
        let expected_available = theme.pages[0].available_sections.clone();

        let snapshot = BuilderSnapshot::open_theme(theme);
        assert_eq!(snapshot.page_id, Some(expected_page));
        assert_eq!(snapshot.available_sections, expected_available);
        assert!(snapshot.selected_section.is_none());
    }

    #[test]
    fn test_open_theme_with_no_pages() {
        let mut theme = ThemeData::starter();
        theme.pages.clear();
        let snapshot = BuilderSnapshot::open_theme(theme);
        assert!(snapshot.page_id.is_none());
        assert!(snapshot.available_sections.is_empty());
        assert!(snapshot.page().is_none());
    }

    #[test]
    fn test_edits_equal_ignores_selection() {
        let a = BuilderSnapshot::open_theme(ThemeData::starter());
        let mut b = a.clone();
        b.selected_section = Some(SectionId(9));
        assert!(a.edits_equal(&b));
        assert_ne!(a, b);
    }
}
