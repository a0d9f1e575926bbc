use serde::de::DeserializeOwned;

/// Strip a markdown code fence around a JSON reply
///
/// Handles ```` ```json ... ``` ```` and bare ```` ``` ... ``` ```` blocks.
/// Anything else is returned trimmed, untouched. Text outside the fence is
/// ignored, but nothing is pulled out of free prose.
pub fn extract_json_string(text: &str) -> &str {
    let trimmed = text.trim();

    let Some(start) = trimmed.find("```") else {
        return trimmed;
    };

    let block = &trimmed[start + 3..];
    // Skip the optional language tag on the opening line
    let body = match block.find('\n') {
        Some(newline) => &block[newline + 1..],
        None => return trimmed,
    };

    match body.find("```") {
        Some(end) => body[..end].trim(),
        None => trimmed,
    }
}

/// Parse an LLM reply into the target type
///
/// The reply must be valid JSON, optionally wrapped in a code fence. There is
/// no repair: truncated or loosely quoted output is an error.
pub fn parse_json<T>(text: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let json_str = extract_json_string(text);

    tracing::debug!(
        "Extracted JSON (first 500 chars): {}",
        json_str.chars().take(500).collect::<String>()
    );

    serde_json::from_str::<T>(json_str).map_err(|e| {
        format!(
            "{} in: {}",
            e,
            json_str.chars().take(200).collect::<String>()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::{json, Value};

    #[derive(Debug, Deserialize)]
    struct Tip {
        title: String,
        minutes: Option<u32>,
    }

    #[test]
    fn test_extract_json_string_with_json_code_block() {
        let response = r#"Here is your plan:

```json
{
    "summary": "Take it slow",
    "activity": "sleep"
}
```

Enjoy!"#;

        let json = extract_json_string(response);
        assert!(json.starts_with('{'));
        assert!(json.ends_with('}'));
        assert!(json.contains("\"summary\""));
    }

    #[test]
    fn test_extract_json_string_with_generic_code_block() {
        let response = "```\n{\"summary\": \"ok\"}\n```";

        assert_eq!(extract_json_string(response), r#"{"summary": "ok"}"#);
    }

    #[test]
    fn test_extract_json_string_plain_is_trimmed() {
        assert_eq!(extract_json_string("  {\"a\": 1}\n"), r#"{"a": 1}"#);
    }

    #[test]
    fn test_extract_json_string_unclosed_fence_is_untouched() {
        let response = "```json\n{\"a\": 1}";
        assert_eq!(extract_json_string(response), response);
    }

    #[test]
    fn test_parse_json_plain_value() {
        let value: Value = parse_json(r#"{"travel": {"plan": []}}"#).unwrap();
        assert_eq!(value, json!({"travel": {"plan": []}}));
    }

    #[test]
    fn test_parse_json_typed_from_markdown() {
        let tip: Tip = parse_json("```json\n{\"title\": \"Box breathing\", \"minutes\": 4}\n```")
            .unwrap();
        assert_eq!(tip.title, "Box breathing");
        assert_eq!(tip.minutes, Some(4));
    }

    #[test]
    fn test_parse_json_truncated_is_error() {
        let result: Result<Value, String> = parse_json(
            r#"{"activity": "nap", "summary": "Rest well", "sleep": {"tips": ["dark room""#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_unquoted_keys_in_prose_is_error() {
        let result: Result<Value, String> =
            parse_json("Sure! Here: {activity: nap, summary: ok} hope it helps");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_trailing_comma_is_error() {
        let result: Result<Value, String> = parse_json(r#"{"title": "Stretch", "minutes": 10,}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_prose_is_error() {
        let result: Result<Value, String> = parse_json("Here are some ideas: go outside.");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_json_type_mismatch_is_error() {
        let result: Result<Tip, String> = parse_json(r#"{"minutes": "many"}"#);
        assert!(result.is_err());
    }
}
