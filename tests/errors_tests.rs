use std::any::Any;
use std::error::Error;
use std::time::Duration;

use sparql_loader::errors::AdapterError;

#[test]
fn test_adapter_error_implements_error_trait() {
    // Verify AdapterError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = AdapterError::Handler("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_adapter_error_display() {
    // Client-visible strings: the Handler variant displays the bare message
    let error = AdapterError::Handler("boom".to_string());
    assert_eq!(format!("{error}"), "boom");

    let error = AdapterError::UnknownPanic;
    assert_eq!(format!("{error}"), "Unknown error");

    let error = AdapterError::Timeout(Duration::from_millis(250));
    assert_eq!(format!("{error}"), "handler timed out after 250ms");

    let error = AdapterError::Config("PORT: invalid digit".to_string());
    assert_eq!(
        format!("{error}"),
        "invalid configuration: PORT: invalid digit"
    );
}

#[test]
fn test_from_panic_with_str_payload() {
    let payload: Box<dyn Any + Send> = Box::new("kaboom");
    let err = AdapterError::from_panic(payload);

    assert_eq!(err.to_string(), "kaboom");
}

#[test]
fn test_from_panic_with_string_payload() {
    let payload: Box<dyn Any + Send> = Box::new("kaboom".to_string());
    let err = AdapterError::from_panic(payload);

    assert_eq!(err.to_string(), "kaboom");
}

#[test]
fn test_from_panic_with_opaque_payload() {
    let payload: Box<dyn Any + Send> = Box::new(42u32);
    let err = AdapterError::from_panic(payload);

    match err {
        AdapterError::UnknownPanic => {}
        other => panic!("expected UnknownPanic, got {other:?}"),
    }
}

#[test]
fn test_from_panic_with_adapter_error_payload() {
    let payload: Box<dyn Any + Send> = Box::new(AdapterError::Timeout(Duration::from_millis(10)));
    let err = AdapterError::from_panic(payload);

    match err {
        AdapterError::Timeout(limit) => assert_eq!(limit, Duration::from_millis(10)),
        other => panic!("expected Timeout passthrough, got {other:?}"),
    }
}
