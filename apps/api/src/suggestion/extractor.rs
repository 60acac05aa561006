//! Text extractor: best-effort recovery of a JSON array from an LLM reply.
//!
//! An ordered list of parser strategies is tried in sequence; the first
//! success wins. Absence of structured data is the expected degraded branch
//! (`None`), not an error; the orchestrator has a fallback path. No partial
//! recovery of malformed JSON: a reply either parses or it doesn't.

use serde_json::Value;
use tracing::debug;

type ExtractStrategy = fn(&str) -> Option<Vec<Value>>;

/// Strategies in trial order: a bare array, a fenced array, then the greedy
/// bracket span from the first `[` to the last `]`.
const STRATEGIES: &[(&str, ExtractStrategy)] = &[
    ("direct", parse_direct),
    ("fenced", parse_fenced),
    ("bracket-span", parse_bracket_span),
];

/// Locates and parses a JSON array inside arbitrary reply text.
pub fn extract_structured(text: &str) -> Option<Vec<Value>> {
    for (name, strategy) in STRATEGIES {
        if let Some(items) = strategy(text) {
            debug!("extractor strategy '{name}' matched with {} items", items.len());
            return Some(items);
        }
    }
    None
}

fn as_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// The trimmed reply is itself a JSON array.
fn parse_direct(text: &str) -> Option<Vec<Value>> {
    serde_json::from_str::<Value>(text.trim()).ok().and_then(as_array)
}

/// The reply wraps the array in a markdown code fence (```json or bare ```).
fn parse_fenced(text: &str) -> Option<Vec<Value>> {
    let body = fenced_body(text)?;
    serde_json::from_str::<Value>(body).ok().and_then(as_array)
}

fn fenced_body(text: &str) -> Option<&str> {
    let start = text.find("```")?;
    let after = &text[start + 3..];
    let after = after.strip_prefix("json").unwrap_or(after);
    let end = after.find("```")?;
    Some(after[..end].trim())
}

/// Greedy span from the first `[` to the last `]` in the text.
fn parse_bracket_span(text: &str) -> Option<Vec<Value>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    serde_json::from_str::<Value>(&text[start..=end])
        .ok()
        .and_then(as_array)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_array_round_trips() {
        let text = r#"[{"title": "Data Analyst"}, {"title": "Nurse"}]"#;
        let items = extract_structured(text).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], json!({"title": "Data Analyst"}));
    }

    #[test]
    fn test_array_in_surrounding_prose_round_trips() {
        let text = r#"Here you go: [{"title":"Data Analyst","description":"Analyzes data."}] Hope that helps!"#;
        let items = extract_structured(text).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Data Analyst");
    }

    #[test]
    fn test_fenced_array_round_trips() {
        let text = "Sure!\n```json\n[{\"title\": \"Chef\"}]\n```\nEnjoy.";
        let items = extract_structured(text).unwrap();
        assert_eq!(items[0]["title"], "Chef");
    }

    #[test]
    fn test_fence_without_language_tag() {
        let text = "```\n[1, 2, 3]\n```";
        let items = extract_structured(text).unwrap();
        assert_eq!(items, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_exact_structural_recovery() {
        let original = json!([{"a": [1, 2]}, {"b": {"c": "d"}}]);
        let text = format!("prose before {original} prose after");
        let items = extract_structured(&text).unwrap();
        assert_eq!(Value::Array(items), original);
    }

    #[test]
    fn test_no_brackets_returns_none() {
        assert!(extract_structured("Sorry, I can't help.").is_none());
    }

    #[test]
    fn test_malformed_json_returns_none() {
        // No trailing-comma repair; strict fail to the fallback path.
        assert!(extract_structured(r#"[{"title": "X",}]"#).is_none());
    }

    #[test]
    fn test_top_level_object_is_not_an_array() {
        // The bracket span inside the object is still recovered; first `[`
        // to last `]` is the inner array.
        let items = extract_structured(r#"{"items": [1, 2]}"#).unwrap();
        assert_eq!(items, vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_reversed_brackets_return_none() {
        assert!(extract_structured("] nothing here [").is_none());
    }

    #[test]
    fn test_empty_array_is_recovered_as_empty() {
        let items = extract_structured("The list: []").unwrap();
        assert!(items.is_empty());
    }
}
