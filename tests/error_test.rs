//! Tests for error types

use trade_ledger::Error;

#[test]
fn test_arity_error() {
    let error = Error::arity(5, 3);
    let error_str = format!("{error}");
    assert_eq!(error_str, "Incorrect number of arguments. Expecting 5");
    assert!(matches!(error, Error::Arity { expected: 5, actual: 3 }));
}

#[test]
fn test_unknown_function_error() {
    let error = Error::UnknownFunction("transferTrade".to_string());
    let error_str = format!("{error}");
    assert_eq!(error_str, "Invalid Smart Contract function name.");
}

#[test]
fn test_backend_error_keeps_text() {
    let error = Error::backend("peer unavailable");
    let error_str = format!("{error}");
    assert_eq!(error_str, "peer unavailable");
}

#[test]
fn test_serialization_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("Serialization error"));
}

#[test]
fn test_invalid_config_error() {
    let error = Error::InvalidConfig("key prefix must not be empty".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid configuration"));
    assert!(error_str.contains("key prefix"));
}

#[test]
fn test_error_debug() {
    let error = Error::UnknownFunction("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("UnknownFunction"));
}

#[test]
fn test_result_type_alias() {
    #[allow(clippy::unnecessary_wraps)]
    fn returns_result() -> trade_ledger::Result<i32> {
        Ok(42)
    }

    let result = returns_result();
    assert!(result.is_ok());
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> trade_ledger::Result<i32> {
        Err(Error::backend("test error"))
    }

    let result = returns_error();
    assert!(result.is_err());
}
