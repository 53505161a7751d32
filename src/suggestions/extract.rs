//! Pulls a list of suggestion strings out of raw completion text.
//!
//! The provider is asked for a bare JSON array but routinely wraps it in
//! commentary or markdown. Output is untrusted: this module only ever
//! decodes, and its worst case is an empty list.

use serde_json::Value;

/// Extract the first well-formed JSON array embedded in `raw`, keeping only
/// its non-empty string elements. Never fails.
pub fn extract(raw: &str) -> Vec<String> {
    let opens = raw.match_indices('[').map(|(i, _)| i);
    for open in opens {
        for (close, _) in raw.match_indices(']').filter(|(i, _)| *i > open) {
            let candidate = &raw[open..=close];
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(candidate) {
                return items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) if !s.is_empty() => Some(s),
                        _ => None,
                    })
                    .collect();
            }
        }
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_list_wrapped_in_commentary() {
        let raw = r#"Here are some ideas: ["Walk", "Hydrate"] enjoy!"#;
        assert_eq!(extract(raw), vec!["Walk", "Hydrate"]);
    }

    #[test]
    fn test_no_brackets_yields_empty() {
        assert_eq!(extract("no brackets here"), Vec::<String>::new());
    }

    #[test]
    fn test_non_string_elements_are_dropped() {
        assert_eq!(extract(r#"[1, "ok", null]"#), vec!["ok"]);
    }

    #[test]
    fn test_empty_strings_are_dropped() {
        assert_eq!(extract(r#"["", "stretch", ""]"#), vec!["stretch"]);
    }

    #[test]
    fn test_malformed_array_yields_empty() {
        assert_eq!(extract(r#"["unterminated"#), Vec::<String>::new());
        assert_eq!(extract("[not, json]"), Vec::<String>::new());
    }

    #[test]
    fn test_skips_malformed_bracket_pair_for_later_valid_one() {
        let raw = r#"see [citation 3] then ["Sleep early", "Call a friend"]"#;
        assert_eq!(extract(raw), vec!["Sleep early", "Call a friend"]);
    }

    #[test]
    fn test_five_suggestions_pass_through_in_order() {
        let raw = r#"["a1","a2","a3","a4","a5"]"#;
        assert_eq!(extract(raw), vec!["a1", "a2", "a3", "a4", "a5"]);
    }

    #[test]
    fn test_empty_array_is_legitimately_empty() {
        assert_eq!(extract("[]"), Vec::<String>::new());
    }

    #[test]
    fn test_object_is_not_an_array() {
        assert_eq!(extract(r#"{"a": 1}"#), Vec::<String>::new());
    }
}
