use aws_examples::services::bedrock::{ANTHROPIC_VERSION, build_request_body, extract_text};
use serde_json::{Value, json};

#[test]
fn test_request_body_uses_messages_format() {
    let body = build_request_body("What is SQS?", 256).unwrap();
    let value: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(
        value,
        json!({
            "anthropic_version": ANTHROPIC_VERSION,
            "max_tokens": 256,
            "messages": [{
                "role": "user",
                "content": [{ "type": "text", "text": "What is SQS?" }]
            }]
        })
    );
}

#[test]
fn test_extract_text_with_empty_content() {
    let body = serde_json::to_vec(&json!({ "content": [] })).unwrap();
    assert_eq!(extract_text(&body).unwrap(), "");
}
