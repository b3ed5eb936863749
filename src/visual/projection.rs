//! CSS projection of a component: class list plus `data-*` attributes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Flat representation consumed by rendering adapters.
///
/// `classes` is `[base marker, ...visual-state classes, widget type tag]`.
/// `data_attributes` keys are kebab-case `data-*` names; every value is a
/// string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CssState {
    pub classes: Vec<String>,
    pub data_attributes: BTreeMap<String, String>,
}

impl CssState {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.data_attributes.get(name).map(String::as_str)
    }
}

/// Derive `data-*` attributes from a serializable snapshot.
///
/// Top-level fields become attributes: `active_tab` → `data-active-tab`,
/// `isChecked` → `data-is-checked`. Booleans render as `"true"`/`"false"`,
/// strings verbatim, numbers in their JSON form, arrays and objects as
/// compact JSON. `null` fields are omitted. A snapshot that does not
/// serialize to a JSON object yields no attributes.
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use widget_engine::visual::data_attributes;
///
/// #[derive(Serialize)]
/// struct Snapshot {
///     disabled: bool,
///     active_tab: String,
///     error: Option<String>,
/// }
///
/// let attrs = data_attributes(&Snapshot {
///     disabled: false,
///     active_tab: "general".into(),
///     error: None,
/// });
/// assert_eq!(attrs["data-disabled"], "false");
/// assert_eq!(attrs["data-active-tab"], "general");
/// assert!(!attrs.contains_key("data-error"));
/// ```
pub fn data_attributes<T: Serialize>(snapshot: &T) -> BTreeMap<String, String> {
    let fields = match serde_json::to_value(snapshot) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            tracing::warn!(
                "snapshot serialized to {} instead of an object; no data attributes",
                json_kind(&other)
            );
            return BTreeMap::new();
        }
        Err(err) => {
            tracing::warn!("snapshot failed to serialize: {err}");
            return BTreeMap::new();
        }
    };

    fields
        .into_iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::Bool(flag) => flag.to_string(),
                Value::String(text) => text,
                Value::Number(number) => number.to_string(),
                nested => nested.to_string(),
            };
            Some((format!("data-{}", kebab_case(&key)), rendered))
        })
        .collect()
}

/// `snake_case` and `camelCase` to `kebab-case`.
pub fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch == '_' || ch == ' ' {
            if !out.ends_with('-') && !out.is_empty() {
                out.push('-');
            }
        } else if ch.is_uppercase() {
            if i > 0 && !out.ends_with('-') {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        disabled: bool,
        value: f64,
        count: u32,
        label: String,
        expanded: Vec<String>,
        error: Option<String>,
    }

    fn sample() -> Sample {
        Sample {
            disabled: true,
            value: 2.5,
            count: 3,
            label: "Name".to_string(),
            expanded: vec!["a".to_string(), "b".to_string()],
            error: None,
        }
    }

    #[test]
    fn booleans_render_as_literals() {
        let attrs = data_attributes(&sample());
        assert_eq!(attrs.get("data-disabled").map(String::as_str), Some("true"));
    }

    #[test]
    fn numbers_and_strings_are_coerced() {
        let attrs = data_attributes(&sample());
        assert_eq!(attrs["data-value"], "2.5");
        assert_eq!(attrs["data-count"], "3");
        assert_eq!(attrs["data-label"], "Name");
    }

    #[test]
    fn arrays_render_as_json() {
        let attrs = data_attributes(&sample());
        assert_eq!(attrs["data-expanded"], r#"["a","b"]"#);
    }

    #[test]
    fn null_fields_are_skipped() {
        let attrs = data_attributes(&sample());
        assert!(!attrs.contains_key("data-error"));
    }

    #[test]
    fn non_object_snapshot_has_no_attributes() {
        assert!(data_attributes(&42).is_empty());
    }

    #[test]
    fn kebab_case_handles_both_conventions() {
        assert_eq!(kebab_case("disabled"), "disabled");
        assert_eq!(kebab_case("active_tab"), "active-tab");
        assert_eq!(kebab_case("isChecked"), "is-checked");
        assert_eq!(kebab_case("maxLength"), "max-length");
        assert_eq!(kebab_case("allow_multiple"), "allow-multiple");
    }

    #[test]
    fn css_state_helpers() {
        let css = CssState {
            classes: vec!["component".to_string(), "idle".to_string()],
            data_attributes: data_attributes(&sample()),
        };
        assert!(css.has_class("idle"));
        assert!(!css.has_class("hovered"));
        assert_eq!(css.attribute("data-disabled"), Some("true"));
    }
}
