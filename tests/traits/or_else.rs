use outcome_rail::{OrElse, StructuredError, StructuredResult};

#[test]
fn result_handler_receives_the_error() {
    let failed: StructuredResult<usize> = Err(StructuredError::new("quota", "used up"));

    let value = failed.value_or_else(|e: StructuredError| e.message().len());
    assert_eq!(value, 7);
}

#[test]
fn option_handler_takes_no_argument() {
    assert_eq!(None::<&str>.value_or_else(|| "default"), "default");
}

#[test]
fn handler_is_not_called_on_success() {
    let mut called = false;
    let value = Ok::<_, StructuredError>(3).value_or_else(|_e: StructuredError| {
        called = true;
        0
    });

    assert_eq!(value, 3);
    assert!(!called, "fallback must not run for Ok");

    let value = Some(4).value_or_else(|| {
        called = true;
        0
    });
    assert_eq!(value, 4);
    assert!(!called, "fallback must not run for Some");
}
