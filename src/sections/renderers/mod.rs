//! Builtin section renderers, one module per section type.
//!
//! A renderer draws a storefront-style preview of a section onto the
//! canvas from its `data` map. Data is read leniently: a missing or
//! mistyped key falls back to the type's default, never an error.

mod about;
mod best_sellers;
mod featured_collections;
mod footer;
mod hero;
mod image_with_text;
mod newsletter_signup;
mod single_product;

use serde_json::{Map, Value};

use crate::theme::SectionData;

use super::registry::SectionDefinition;

/// Every builtin section type with its definition, in registration order.
pub fn builtin_definitions() -> Vec<(&'static str, SectionDefinition)> {
    vec![
        ("hero", hero::definition()),
        ("about", about::definition()),
        ("featured_collections", featured_collections::definition()),
        ("image_with_text", image_with_text::definition()),
        ("best_sellers", best_sellers::definition()),
        ("newsletter_signup", newsletter_signup::definition()),
        ("footer", footer::definition()),
        ("single_product", single_product::definition()),
    ]
}

/// String field with a fallback.
pub(crate) fn str_field<'a>(section: &'a SectionData, key: &str, fallback: &'a str) -> &'a str {
    section
        .data
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
}

/// Integer field with a fallback.
pub(crate) fn i64_field(section: &SectionData, key: &str, fallback: i64) -> i64 {
    section
        .data
        .get(key)
        .and_then(Value::as_i64)
        .unwrap_or(fallback)
}

/// String-array field; missing or mistyped entries are skipped.
pub(crate) fn str_list<'a>(section: &'a SectionData, key: &str) -> Vec<&'a str> {
    section
        .data
        .get(key)
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

/// Unwrap a `json!({..})` literal into a data map.
pub(crate) fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::SectionId;
    use serde_json::json;

    fn section_with(data: Value) -> SectionData {
        SectionData {
            id: SectionId(1),
            section_type: "hero".to_string(),
            name: "hero".to_string(),
            data: object(data),
        }
    }

    #[test]
    fn test_str_field_fallback_on_missing_key() {
        let section = section_with(json!({}));
        assert_eq!(str_field(&section, "title", "Default"), "Default");
    }

    #[test]
    fn test_str_field_fallback_on_wrong_type() {
        let section = section_with(json!({ "title": 42 }));
        assert_eq!(str_field(&section, "title", "Default"), "Default");
    }

    #[test]
    fn test_str_field_reads_value() {
        let section = section_with(json!({ "title": "Summer Sale" }));
        assert_eq!(str_field(&section, "title", "Default"), "Summer Sale");
    }

    #[test]
    fn test_i64_field() {
        let section = section_with(json!({ "columns": 4 }));
        assert_eq!(i64_field(&section, "columns", 3), 4);
        assert_eq!(i64_field(&section, "rows", 3), 3);
    }

    #[test]
    fn test_str_list_skips_non_strings() {
        let section = section_with(json!({ "links": ["Shop", 7, "Contact"] }));
        assert_eq!(str_list(&section, "links"), vec!["Shop", "Contact"]);
        assert!(str_list(&section, "missing").is_empty());
    }

    #[test]
    fn test_builtin_definitions_are_distinct() {
        let definitions = builtin_definitions();
        let mut names: Vec<&str> = definitions.iter().map(|(n, _)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), definitions.len());
    }

    #[test]
    fn test_builtin_default_data_parses_back() {
        for (name, definition) in builtin_definitions() {
            let data = (definition.default_data)();
            let json = serde_json::to_string(&data).unwrap();
            let parsed: Map<String, Value> = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, data, "default data roundtrip failed for {}", name);
        }
    }
}
