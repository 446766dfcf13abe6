//! Unit tests for the edit-history store and reducer.

use serde_json::{Map, Value};

use crate::theme::{PageData, PageId, SectionData, SectionId, ThemeData, ThemeId};

use super::actions::BuilderAction;
use super::history::EditHistory;
use super::reducer::apply_action;
use super::snapshot::BuilderSnapshot;
use super::MAX_HISTORY_SIZE;

fn data(entries: &[(&str, &str)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect()
}

fn section(id: u64, section_type: &str, entries: &[(&str, &str)]) -> SectionData {
    SectionData {
        id: SectionId(id),
        section_type: section_type.to_string(),
        name: section_type.to_string(),
        data: data(entries),
    }
}

/// Theme with a Home page (hero/footer addable) and a Product page.
fn two_page_theme() -> ThemeData {
    ThemeData {
        id: ThemeId(1),
        name: "Aurora".to_string(),
        thumbnail: None,
        pages: vec![
            PageData {
                id: PageId(10),
                name: "Home".to_string(),
                available_sections: vec!["hero".to_string(), "footer".to_string()],
                presets: Vec::new(),
                body: Vec::new(),
            },
            PageData {
                id: PageId(11),
                name: "Product".to_string(),
                available_sections: vec!["single_product".to_string()],
                presets: Vec::new(),
                body: Vec::new(),
            },
        ],
    }
}

/// History with the two-page theme installed as the baseline.
fn opened_history() -> EditHistory {
    let mut history = EditHistory::default();
    history.reset_baseline(BuilderSnapshot::open_theme(two_page_theme()));
    history
}

fn body_of(history: &EditHistory) -> &[SectionData] {
    &history.present().page().expect("active page").body
}

#[test]
fn test_baseline_is_undo_floor() {
    let history = opened_history();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_select_theme_defaults_to_first_page() {
    let mut history = EditHistory::default();
    apply_action(&mut history, BuilderAction::SelectTheme(two_page_theme()));

    let present = history.present();
    assert_eq!(present.page_id, Some(PageId(10)));
    assert_eq!(present.available_sections, vec!["hero", "footer"]);
    assert!(history.can_undo());
}

#[test]
fn test_select_page_switches_available_sections() {
    let mut history = opened_history();
    apply_action(&mut history, BuilderAction::SelectPage(PageId(11)));

    let present = history.present();
    assert_eq!(present.page_id, Some(PageId(11)));
    assert_eq!(present.available_sections, vec!["single_product"]);
}

#[test]
fn test_select_page_same_page_is_noop() {
    let mut history = opened_history();
    apply_action(&mut history, BuilderAction::SelectPage(PageId(10)));
    assert!(!history.can_undo());
}

#[test]
fn test_select_page_stale_id_falls_back_to_first_page() {
    let mut history = opened_history();
    apply_action(&mut history, BuilderAction::SelectPage(PageId(11)));
    apply_action(&mut history, BuilderAction::SelectPage(PageId(999)));

    // Not a null page: stale ids reset to the first page.
    assert_eq!(history.present().page_id, Some(PageId(10)));
}

#[test]
fn test_select_page_clears_selection() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    apply_action(
        &mut history,
        BuilderAction::SelectSection(Some(SectionId(1))),
    );
    apply_action(&mut history, BuilderAction::SelectPage(PageId(11)));
    assert!(history.present().selected_section.is_none());
}

#[test]
fn test_add_section_appends_to_active_page_only() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[("title", "A")])),
    );

    assert_eq!(body_of(&history).len(), 1);
    let theme = history.present().theme.as_ref().unwrap();
    assert!(theme.page(PageId(11)).unwrap().body.is_empty());
}

#[test]
fn test_add_section_without_theme_is_noop() {
    let mut history = EditHistory::default();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    assert!(!history.can_undo());
    assert!(history.present().theme.is_none());
}

#[test]
fn test_update_section_replaces_data() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[("title", "A")])),
    );
    apply_action(
        &mut history,
        BuilderAction::UpdateSection {
            id: SectionId(1),
            data: data(&[("title", "B")]),
        },
    );

    let body = body_of(&history);
    assert_eq!(body[0].data, data(&[("title", "B")]));
    assert_eq!(body[0].section_type, "hero");
}

#[test]
fn test_update_missing_id_is_noop() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    let before = history.undo_count();

    apply_action(
        &mut history,
        BuilderAction::UpdateSection {
            id: SectionId(404),
            data: data(&[("title", "X")]),
        },
    );

    assert_eq!(history.undo_count(), before);
    assert_eq!(body_of(&history).len(), 1);
    assert!(body_of(&history)[0].data.is_empty());
}

#[test]
fn test_delete_missing_id_is_noop() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    let before = history.undo_count();

    apply_action(&mut history, BuilderAction::DeleteSection(SectionId(404)));

    assert_eq!(history.undo_count(), before);
    assert_eq!(body_of(&history).len(), 1);
}

#[test]
fn test_delete_section_clears_its_selection() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    apply_action(
        &mut history,
        BuilderAction::SelectSection(Some(SectionId(1))),
    );
    apply_action(&mut history, BuilderAction::DeleteSection(SectionId(1)));

    assert!(body_of(&history).is_empty());
    assert!(history.present().selected_section.is_none());
}

#[test]
fn test_reorder_replaces_body_wholesale() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(2, "footer", &[])),
    );

    let reversed: Vec<SectionData> = body_of(&history).iter().rev().cloned().collect();
    apply_action(&mut history, BuilderAction::ReorderSections(reversed));

    let ids: Vec<u64> = body_of(&history).iter().map(|s| s.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_reorder_without_page_is_noop() {
    let mut history = EditHistory::default();
    apply_action(&mut history, BuilderAction::ReorderSections(Vec::new()));
    assert!(!history.can_undo());
}

#[test]
fn test_undo_redo_inverse_law() {
    let mut history = opened_history();
    let baseline = history.present().clone();

    let edits = [
        BuilderAction::AddSection(section(1, "hero", &[("title", "A")])),
        BuilderAction::AddSection(section(2, "footer", &[])),
        BuilderAction::SelectPage(PageId(11)),
        BuilderAction::AddSection(section(3, "single_product", &[])),
    ];
    for edit in &edits {
        apply_action(&mut history, edit.clone());
    }
    let final_state = history.present().clone();

    for _ in 0..edits.len() {
        apply_action(&mut history, BuilderAction::Undo);
    }
    assert!(history.present().edits_equal(&baseline));
    assert!(!history.can_undo());

    for _ in 0..edits.len() {
        apply_action(&mut history, BuilderAction::Redo);
    }
    assert!(history.present().edits_equal(&final_state));
    assert!(!history.can_redo());
}

#[test]
fn test_redo_stack_invalidated_by_fresh_edit() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(2, "footer", &[])),
    );
    apply_action(&mut history, BuilderAction::Undo);
    assert!(history.can_redo());

    apply_action(
        &mut history,
        BuilderAction::AddSection(section(3, "hero", &[])),
    );
    assert!(!history.can_redo());

    // Redo after invalidation is a no-op.
    let present = history.present().clone();
    apply_action(&mut history, BuilderAction::Redo);
    assert_eq!(history.present(), &present);
}

#[test]
fn test_selection_is_not_an_undo_step() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[("title", "A")])),
    );
    let after_add = history.undo_count();

    apply_action(
        &mut history,
        BuilderAction::SelectSection(Some(SectionId(1))),
    );
    apply_action(&mut history, BuilderAction::SelectSection(None));
    apply_action(
        &mut history,
        BuilderAction::SelectSection(Some(SectionId(1))),
    );
    assert_eq!(history.undo_count(), after_add);

    // Undo rolls back past the last *edit*, not the selection changes.
    apply_action(&mut history, BuilderAction::Undo);
    assert!(body_of(&history).is_empty());
}

#[test]
fn test_add_edit_delete_round_trip() {
    let mut history = opened_history();

    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[("title", "A")])),
    );
    assert_eq!(body_of(&history).len(), 1);

    apply_action(
        &mut history,
        BuilderAction::UpdateSection {
            id: SectionId(1),
            data: data(&[("title", "B")]),
        },
    );
    assert_eq!(body_of(&history)[0].data, data(&[("title", "B")]));

    apply_action(&mut history, BuilderAction::DeleteSection(SectionId(1)));
    assert!(body_of(&history).is_empty());

    apply_action(&mut history, BuilderAction::Undo);
    assert_eq!(body_of(&history)[0].data, data(&[("title", "B")]));

    apply_action(&mut history, BuilderAction::Undo);
    assert_eq!(body_of(&history)[0].data, data(&[("title", "A")]));

    apply_action(&mut history, BuilderAction::Undo);
    assert!(body_of(&history).is_empty());
}

#[test]
fn test_undo_clears_selection() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(2, "footer", &[])),
    );
    apply_action(
        &mut history,
        BuilderAction::SelectSection(Some(SectionId(2))),
    );

    apply_action(&mut history, BuilderAction::Undo);
    assert!(history.present().selected_section.is_none());
}

#[test]
fn test_history_is_bounded() {
    let mut history = opened_history();
    for i in 0..(MAX_HISTORY_SIZE + 50) {
        apply_action(
            &mut history,
            BuilderAction::AddSection(section(i as u64 + 1, "hero", &[])),
        );
    }
    assert_eq!(history.undo_count(), MAX_HISTORY_SIZE);
}

#[test]
fn test_reset_baseline_clears_both_stacks() {
    let mut history = opened_history();
    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    apply_action(&mut history, BuilderAction::Undo);
    assert!(history.can_redo());

    history.reset_baseline(BuilderSnapshot::open_theme(two_page_theme()));
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_revision_tracks_edits_not_selection() {
    let mut history = opened_history();
    let start = history.revision();

    apply_action(
        &mut history,
        BuilderAction::SelectSection(Some(SectionId(1))),
    );
    assert_eq!(history.revision(), start);

    apply_action(
        &mut history,
        BuilderAction::AddSection(section(1, "hero", &[])),
    );
    assert_eq!(history.revision(), start + 1);

    apply_action(&mut history, BuilderAction::Undo);
    assert_eq!(history.revision(), start + 2);
}
