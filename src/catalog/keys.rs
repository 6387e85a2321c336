//! Recursive JSON key mapping between the store's snake_case wire naming and
//! the camelCase naming used by catalog consumers.
//!
//! The conversion must reach every key at every depth: nested objects and
//! arrays of objects are transformed too, not just the top level.

use serde_json::Value;

/// Convert a single snake_case key to camelCase.
///
/// Only an underscore followed by a lowercase ASCII letter is collapsed;
/// anything else passes through untouched.
fn camel_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_'
            && let Some(&next) = chars.peek()
            && next.is_ascii_lowercase()
        {
            out.push(next.to_ascii_uppercase());
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a single camelCase key to snake_case (inverse of [`camel_key`]).
fn snake_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rewrite every object key in `value`, recursing through arrays and nested
/// objects.
fn map_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| map_keys(item, rename))
                .collect(),
        ),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, field)| (rename(&key), map_keys(field, rename)))
                .collect(),
        ),
        other => other,
    }
}

/// Convert every key of a store response to camelCase, recursively.
pub fn keys_to_camel(value: Value) -> Value {
    map_keys(value, &camel_key)
}

/// Convert every key of a consumer payload to snake_case, recursively.
pub fn keys_to_snake(value: Value) -> Value {
    map_keys(value, &snake_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_top_level_keys() {
        let converted = keys_to_camel(json!({"min_age": 8, "external_link": null}));
        assert_eq!(converted, json!({"minAge": 8, "externalLink": null}));
    }

    #[test]
    fn reaches_objects_nested_in_arrays() {
        let converted = keys_to_camel(json!([
            {"rules_file": "/rules/a.pdf", "sections": [{"section_title": "Setup"}]},
            {"rules_file": null}
        ]));
        assert_eq!(
            converted,
            json!([
                {"rulesFile": "/rules/a.pdf", "sections": [{"sectionTitle": "Setup"}]},
                {"rulesFile": null}
            ])
        );
    }

    #[test]
    fn leaves_values_untouched() {
        let converted = keys_to_camel(json!({"name": "Catan_base", "players": "2-4"}));
        // Only keys are rewritten, never string values.
        assert_eq!(converted, json!({"name": "Catan_base", "players": "2-4"}));
    }

    #[test]
    fn keys_without_underscores_pass_through() {
        let converted = keys_to_camel(json!({"name": 1, "rating": 2}));
        assert_eq!(converted, json!({"name": 1, "rating": 2}));
    }

    #[test]
    fn snake_is_the_inverse_of_camel() {
        let original = json!({
            "id": 1,
            "min_age": 8,
            "external_link": "https://example.com",
            "rules_summary": null,
            "pros": ["short_setup"],
            "nested": [{"rules_file": "x", "deep": {"some_key": true}}]
        });
        let round_tripped = keys_to_snake(keys_to_camel(original.clone()));
        assert_eq!(round_tripped, original);
    }
}
