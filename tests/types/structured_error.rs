use std::error::Error;
use std::io;

use outcome_rail::{kind, StructuredError};
use serde_json::json;

#[derive(Debug)]
struct QuotaExceeded {
    source: io::Error,
}

impl std::fmt::Display for QuotaExceeded {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "quota exceeded")
    }
}

impl Error for QuotaExceeded {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[test]
fn new_has_no_fallback_or_cause() {
    let err = StructuredError::new("validation", "name is required");

    assert_eq!(err.kind(), "validation");
    assert_eq!(err.message(), "name is required");
    assert!(err.fallback().is_none());
    assert!(err.cause().is_none());
    assert!(err.source().is_none());
}

#[test]
fn kind_accepts_owned_strings() {
    let dynamic = format!("{}_error", "billing");
    let err = StructuredError::new(dynamic, "card declined");

    assert!(err.is_kind("billing_error"));
    assert!(!err.is_kind("billing"));
}

#[test]
fn with_data_accumulates_entries() {
    let err = StructuredError::new("http", "bad gateway")
        .with_data("status", 502)
        .with_data("retry", false);

    let fallback = err.fallback().unwrap();
    assert_eq!(fallback["status"], json!(502));
    assert_eq!(fallback["retry"], json!(false));
}

#[test]
fn with_fallback_replaces_previous_data() {
    let mut replacement = serde_json::Map::new();
    replacement.insert("only".into(), json!("this"));

    let err = StructuredError::new("x", "y")
        .with_data("dropped", 1)
        .with_fallback(replacement);

    let fallback = err.fallback().unwrap();
    assert_eq!(fallback.len(), 1);
    assert_eq!(fallback["only"], json!("this"));
}

#[test]
fn from_error_uses_type_name_and_keeps_chain() {
    let native = QuotaExceeded { source: io::Error::new(io::ErrorKind::Other, "disk full") };
    let err = StructuredError::from_error(native);

    assert_eq!(err.kind(), "QuotaExceeded");
    assert_eq!(err.message(), "quota exceeded");

    let cause = err.source().expect("original error is the cause");
    assert_eq!(cause.to_string(), "quota exceeded");
    assert_eq!(cause.source().unwrap().to_string(), "disk full");
}

#[test]
fn from_error_preserves_structured_identity() {
    let original = StructuredError::new("auth", "token expired").with_data("user", 9);
    let converted = StructuredError::from_error(original.clone());

    assert_eq!(converted, original);
    assert!(converted.cause().is_none());
}

#[test]
fn from_boxed_unboxes_structured_and_tags_native() {
    let structured: Box<dyn Error + Send + Sync> = Box::new(StructuredError::new("db", "locked"));
    assert_eq!(StructuredError::from_boxed(structured).kind(), "db");

    let native: Box<dyn Error + Send + Sync> = "socket closed".into();
    let err: StructuredError = native.into();
    assert_eq!(err.kind(), kind::NATIVE);
    assert_eq!(err.message(), "socket closed");
    assert!(err.cause().is_some());
}

#[test]
fn is_distinguishes_structured_from_native() {
    let structured = StructuredError::new("x", "y");
    let native = io::Error::new(io::ErrorKind::Other, "z");

    assert!(StructuredError::is(&structured));
    assert!(!StructuredError::is(&native));
}

#[test]
fn has_normalizes_optional_errors() {
    assert!(StructuredError::has(None::<io::Error>).is_none());

    let converted = StructuredError::has(Some(io::Error::new(io::ErrorKind::Other, "eof"))).unwrap();
    assert_eq!(converted.kind(), "Error");
    assert_eq!(converted.message(), "eof");

    let original = StructuredError::new("cache", "miss");
    assert_eq!(StructuredError::has(Some(original.clone())), Some(original));
}

#[test]
fn has_boxed_normalizes_type_erased_errors() {
    assert!(StructuredError::has_boxed(None).is_none());

    let native: Box<dyn Error + Send + Sync> = Box::new(io::Error::new(io::ErrorKind::Other, "reset"));
    let converted = StructuredError::has_boxed(Some(native)).unwrap();
    assert_eq!(converted.kind(), kind::NATIVE);
    assert_eq!(converted.message(), "reset");
    assert!(converted.source().is_some());

    let original = StructuredError::new("cache", "stale");
    let boxed: Box<dyn Error + Send + Sync> = Box::new(original.clone());
    assert_eq!(StructuredError::has_boxed(Some(boxed)), Some(original));
}

#[test]
fn when_kind_runs_handler_only_on_match() {
    let err = StructuredError::new("rate_limit", "slow down");
    let mut calls = 0;

    let matched = err.when_kind("rate_limit", |e| {
        calls += 1;
        e.message().len()
    });
    assert_eq!(matched, Some(9));

    let skipped = err.when_kind("auth", |_| {
        calls += 1;
    });
    assert_eq!(skipped, None);
    assert_eq!(calls, 1);
}

#[test]
fn match_kind_picks_one_arm() {
    let retry = StructuredError::new("timeout", "t").match_kind("timeout", |_| "retry", |_| "fail");
    let fail = StructuredError::new("auth", "a").match_kind("timeout", |_| "retry", |_| "fail");

    assert_eq!(retry, "retry");
    assert_eq!(fail, "fail");
}

#[test]
fn dispatch_separates_structured_and_native() {
    let structured: Box<dyn Error + Send + Sync> = Box::new(StructuredError::new("db", "locked"));
    let native: Box<dyn Error + Send + Sync> = "plain".into();

    let on_structured = |e: StructuredError| format!("structured {}", e.kind());
    let on_native = |e: Box<dyn Error + Send + Sync>| format!("native {}", e);

    assert_eq!(StructuredError::dispatch(structured, on_structured, on_native), "structured db");
    assert_eq!(StructuredError::dispatch(native, on_structured, on_native), "native plain");
}

#[test]
fn display_shows_kind_and_message() {
    let err = StructuredError::new("config", "missing key");
    assert_eq!(err.to_string(), "config: missing key");
}

#[test]
fn alternate_display_walks_cause_chain() {
    let inner = StructuredError::new("io", "read failed")
        .with_cause(io::Error::new(io::ErrorKind::Other, "disk gone"));
    let outer = StructuredError::new("config", "cannot load").with_cause(inner);

    assert_eq!(
        format!("{:#}", outer),
        "config: cannot load\n  caused by: io: read failed\n  caused by: disk gone"
    );
}

#[test]
fn equality_compares_causes_by_message() {
    let a = StructuredError::new("x", "y").with_cause(io::Error::new(io::ErrorKind::Other, "z"));
    let b = StructuredError::new("x", "y").with_cause(io::Error::new(io::ErrorKind::NotFound, "z"));
    let c = StructuredError::new("x", "y");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn clone_shares_cause() {
    let err = StructuredError::new("x", "y").with_cause(io::Error::new(io::ErrorKind::Other, "z"));
    let copy = err.clone();

    let lhs = err.cause().unwrap() as *const _ as *const u8;
    let rhs = copy.cause().unwrap() as *const _ as *const u8;
    assert_eq!(lhs, rhs);
}
