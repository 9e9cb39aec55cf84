//! Response-field resolver.
//!
//! Chat backends disagree about where the reply text lives in their
//! JSON envelope. The resolver probes a fixed list of candidate shapes
//! and returns the first string with non-whitespace content, falling
//! back to a pretty-printed dump of the whole payload so callers always
//! get something displayable.

use serde_json::Value;

type Extractor = fn(&Value) -> Option<String>;

/// Candidate extractors, tried in priority order. New payload shapes
/// are added to this table, not as branches in [`resolve_text`].
const EXTRACTORS: &[Extractor] = &[
    |v| field_str(v, "answer"),
    |v| field_str(v, "response"),
    |v| field_str(v, "output"),
    |v| join_array(v, "outputs"),
    |v| join_string_parts(v, "sourceParts").or_else(|| join_string_parts(v, "source_parts")),
    |v| field_str(v, "rendered"),
    |v| field_str(v, "text"),
    |v| field_str(v, "data"),
    first_choice_content,
];

/// Extract a human-readable reply string from an arbitrary envelope.
///
/// Pure function of its input; never fails. A bare JSON string is
/// returned unchanged, including whitespace-only ones.
pub fn resolve_text(payload: &Value) -> String {
    if let Value::String(s) = payload {
        return s.clone();
    }

    for extract in EXTRACTORS {
        if let Some(text) = extract(payload) {
            if !text.trim().is_empty() {
                return text;
            }
        }
    }

    serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string())
}

fn field_str(v: &Value, key: &str) -> Option<String> {
    v.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Join every array element with newlines, stringifying non-strings
fn join_array(v: &Value, key: &str) -> Option<String> {
    let items = v.get(key)?.as_array()?;
    if items.is_empty() {
        return None;
    }
    let parts: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    Some(parts.join("\n"))
}

/// Join only the string elements with newlines
fn join_string_parts(v: &Value, key: &str) -> Option<String> {
    let items = v.get(key)?.as_array()?;
    let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
    if parts.is_empty() {
        return None;
    }
    Some(parts.join("\n"))
}

/// OpenAI-style `choices[0].message.content`
fn first_choice_content(v: &Value) -> Option<String> {
    v.get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_string_returned_unchanged() {
        assert_eq!(resolve_text(&json!("hello there")), "hello there");
    }

    #[test]
    fn test_answer_field() {
        assert_eq!(resolve_text(&json!({"answer": "hi"})), "hi");
    }

    #[test]
    fn test_priority_order() {
        let payload = json!({"response": "second", "answer": "first"});
        assert_eq!(resolve_text(&payload), "first");

        let payload = json!({"text": "late", "output": "early"});
        assert_eq!(resolve_text(&payload), "early");
    }

    #[test]
    fn test_whitespace_only_candidates_skipped() {
        let payload = json!({"answer": "   ", "response": "real reply"});
        assert_eq!(resolve_text(&payload), "real reply");
    }

    #[test]
    fn test_outputs_joined_by_newline() {
        let payload = json!({"outputs": ["one", "two", 3]});
        assert_eq!(resolve_text(&payload), "one\ntwo\n3");
    }

    #[test]
    fn test_source_parts_filtered_to_strings() {
        let payload = json!({"sourceParts": ["a", {"not": "text"}, "b"]});
        assert_eq!(resolve_text(&payload), "a\nb");
    }

    #[test]
    fn test_choices_message_content() {
        let payload = json!({"choices": [{"message": {"content": "hey"}}]});
        assert_eq!(resolve_text(&payload), "hey");
    }

    #[test]
    fn test_fallback_pretty_prints_payload() {
        let payload = json!({"foo": 1});
        let resolved = resolve_text(&payload);
        assert_eq!(resolved, serde_json::to_string_pretty(&payload).unwrap());
        assert!(resolved.contains("\"foo\": 1"));
    }

    #[test]
    fn test_non_object_payload_falls_back() {
        let payload = json!([1, 2, 3]);
        assert_eq!(
            resolve_text(&payload),
            serde_json::to_string_pretty(&payload).unwrap()
        );
    }

    #[test]
    fn test_empty_choices_array_falls_back() {
        let payload = json!({"choices": []});
        assert_eq!(
            resolve_text(&payload),
            serde_json::to_string_pretty(&payload).unwrap()
        );
    }
}
