use serde_json::json;
use sparql_loader::core::models::{Context, InvocationEvent, InvocationResult};

#[test]
fn test_invocation_result_serializes_with_gateway_field_names() {
    let result = InvocationResult {
        status_code: 200,
        body: "ok".to_string(),
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({ "statusCode": 200, "body": "ok" }));
}

#[test]
fn test_invocation_result_deserializes_from_gateway_shape() {
    let result: InvocationResult =
        serde_json::from_value(json!({ "statusCode": 502, "body": "bad gateway" })).unwrap();

    assert_eq!(result.status_code, 502);
    assert_eq!(result.body, "bad gateway");
}

#[test]
fn test_invocation_event_round_trips() {
    let event = InvocationEvent {
        headers: [("Content-Type".to_string(), "application/sparql-update".to_string())]
            .into_iter()
            .collect(),
        body: "INSERT DATA { }".to_string(),
    };

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["body"], "INSERT DATA { }");
    assert_eq!(value["headers"]["Content-Type"], "application/sparql-update");

    let back: InvocationEvent = serde_json::from_value(value).unwrap();
    assert_eq!(back.body, event.body);
}

#[test]
fn test_event_header_lookup_is_case_insensitive() {
    let event = InvocationEvent {
        headers: [("content-type".to_string(), "text/turtle".to_string())]
            .into_iter()
            .collect(),
        body: String::new(),
    };

    assert_eq!(event.header("Content-Type"), Some("text/turtle"));
    assert_eq!(event.header("CONTENT-TYPE"), Some("text/turtle"));
    assert_eq!(event.header("accept"), None);
}

#[test]
fn test_default_context_has_no_deadline() {
    let ctx = Context::default();
    assert!(ctx.deadline.is_none());
}
