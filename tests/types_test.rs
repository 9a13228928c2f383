use contact_extract::*;

// --- ExtractRequest ---

#[test]
fn test_request_validated_text() {
    let request = ExtractRequest::new("call 555-1234");
    assert_eq!(request.validated_text().unwrap(), "call 555-1234");
}

#[test]
fn test_request_keeps_surrounding_whitespace() {
    let request = ExtractRequest::new("  a@b.co \n");
    assert_eq!(request.validated_text().unwrap(), "  a@b.co \n");
}

#[test]
fn test_request_empty_rejected() {
    let request = ExtractRequest::new("");
    assert!(matches!(
        request.validated_text(),
        Err(ServiceError::EmptyText)
    ));
}

#[test]
fn test_request_whitespace_rejected() {
    let request = ExtractRequest::new(" \t\r\n ");
    assert!(matches!(
        request.validated_text(),
        Err(ServiceError::EmptyText)
    ));
}

#[test]
fn test_request_information_separator_not_blank() {
    // U+001C..U+001F are not whitespace for `str::trim`
    let request = ExtractRequest::new("\u{1c}");
    assert_eq!(request.validated_text().unwrap(), "\u{1c}");
    assert!(extract(request.validated_text().unwrap()).is_empty());
}

#[test]
fn test_request_deserialize() {
    let request: ExtractRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
    assert_eq!(request, ExtractRequest::new("hello"));
}

#[test]
fn test_request_missing_text_fails() {
    let request = serde_json::from_str::<ExtractRequest>(r#"{"body": "hello"}"#);
    assert!(request.is_err());
}

#[test]
fn test_request_non_string_text_fails() {
    let request = serde_json::from_str::<ExtractRequest>(r#"{"text": 42}"#);
    assert!(request.is_err());
}

// --- ServiceError ---

#[test]
fn test_empty_text_message() {
    assert_eq!(ServiceError::EmptyText.to_string(), "No text provided");
}

#[test]
fn test_invalid_payload_message() {
    let err = ServiceError::InvalidPayload("missing field `text`".into());
    assert_eq!(
        err.to_string(),
        "Invalid request payload: missing field `text`"
    );
}

// --- HealthStatus ---

#[test]
fn test_health_status_ok() {
    let json = serde_json::to_value(HealthStatus::ok()).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}
