//! Response parsing — extracts an action descriptor from model output.
//!
//! The system prompt instructs the model to emit a JSON descriptor when it
//! wants an action run, and plain text otherwise. The descriptor can arrive
//! embedded anywhere — inside a fenced code block, surrounded by
//! "Thought:" prose, or as the whole response — so the parser never assumes
//! the response is valid JSON. It scans for balanced-brace candidates and
//! accepts the first one that decodes into an [`ActionRequest`].
//!
//! Malformed or absent JSON is not an error: it means "no action requested"
//! and the response is treated as the final answer.

use super::types::ActionRequest;

/// Locate and decode one action descriptor embedded in free-form text.
///
/// Returns `None` when no well-formed descriptor is present. No side effects.
pub fn extract_action(text: &str) -> Option<ActionRequest> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            if let Some(close) = find_matching_brace(text, i) {
                let candidate = &text[i..=close];
                if let Ok(request) = serde_json::from_str::<ActionRequest>(candidate) {
                    return Some(request);
                }
                // A balanced block that isn't a descriptor may still contain
                // one (e.g. prose braces wrapping real JSON) — keep scanning
                // from the next byte rather than skipping the whole block.
            }
        }
        i += 1;
    }

    None
}

/// Find the index of the `}` matching the `{` at `open`, honoring JSON
/// string quoting and escapes so braces inside string values don't count.
fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes[open], b'{');

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_descriptor() {
        let text = r#"{"function_name": "get_seo_page_report", "function_parms": {"url": "example.com"}}"#;
        let req = extract_action(text).unwrap();
        assert_eq!(req.function_name, "get_seo_page_report");
        assert_eq!(req.params_value(), serde_json::json!({"url": "example.com"}));
    }

    #[test]
    fn test_descriptor_in_fenced_block() {
        let text = "Thought: I should run an audit.\n\n```json\n{\"function_name\": \"get_seo_page_report\", \"function_parms\": {\"url\": \"example.com\"}}\n```\n";
        let req = extract_action(text).unwrap();
        assert_eq!(req.function_name, "get_seo_page_report");
    }

    #[test]
    fn test_descriptor_mixed_with_prose() {
        let text = "I need more data, so: {\"function_name\": \"get_seo_page_report\", \"function_parms\": {\"url\": \"rust-lang.org\"}} — running that now.";
        let req = extract_action(text).unwrap();
        assert_eq!(req.params_value(), serde_json::json!({"url": "rust-lang.org"}));
    }

    #[test]
    fn test_plain_text_yields_none() {
        assert!(extract_action("The SEO score for example.com is 87/100.").is_none());
    }

    #[test]
    fn test_malformed_json_yields_none() {
        let text = r#"{"function_name": "get_seo_page_report", "function_parms": {"url": }"#;
        assert!(extract_action(text).is_none());
    }

    #[test]
    fn test_unrelated_json_yields_none() {
        // Well-formed JSON that is not an action descriptor.
        let text = r#"Here is the summary: {"score": 87, "issues": ["missing alt text"]}"#;
        assert!(extract_action(text).is_none());
    }

    #[test]
    fn test_first_descriptor_wins() {
        let text = concat!(
            r#"{"function_name": "get_seo_page_report", "function_parms": {"url": "a.com"}}"#,
            "\n",
            r#"{"function_name": "get_seo_page_report", "function_parms": {"url": "b.com"}}"#,
        );
        let req = extract_action(text).unwrap();
        assert_eq!(req.params_value(), serde_json::json!({"url": "a.com"}));
    }

    #[test]
    fn test_braces_inside_string_values() {
        let text = r#"{"function_name": "get_seo_page_report", "function_parms": {"url": "example.com/{id}"}}"#;
        let req = extract_action(text).unwrap();
        assert_eq!(
            req.params_value(),
            serde_json::json!({"url": "example.com/{id}"})
        );
    }

    #[test]
    fn test_unbalanced_prose_brace_before_descriptor() {
        let text = "note { this is not json\n{\"function_name\": \"get_seo_page_report\", \"function_parms\": {\"url\": \"example.com\"}}";
        let req = extract_action(text).unwrap();
        assert_eq!(req.function_name, "get_seo_page_report");
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_action("").is_none());
    }

    #[test]
    fn test_empty_parameter_bag() {
        let text = r#"{"function_name": "get_seo_page_report", "function_parms": {}}"#;
        let req = extract_action(text).unwrap();
        assert!(req.function_parms.is_empty());
    }
}
