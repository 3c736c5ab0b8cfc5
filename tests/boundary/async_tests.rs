//! Tests for the async capture boundaries.

use std::panic;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use futures_util::future::FusedFuture;
use outcome_rail::boundary::{AllSettled, CaptureFuture};
use outcome_rail::{catch_async, catch_async_all, kind, try_async, StructuredError};

async fn unit(delay_ms: u64, outcome: Result<u32, &'static str>) -> Result<u32, &'static str> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    outcome
}

async fn panicking(delay_ms: u64, value: u32) -> Result<u32, &'static str> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    if value == 0 {
        panic!("unit {} exploded", value);
    }
    Ok(value)
}

#[tokio::test]
async fn catch_async_returns_value() {
    let result = catch_async(|| async { "done" }).await;
    assert_eq!(result, Ok("done"));
}

#[tokio::test]
async fn catch_async_converts_panic_while_polling() {
    let err = catch_async(|| panicking(1, 0)).await.unwrap_err();

    assert_eq!(err.kind(), kind::CATCH_ASYNC);
    assert_eq!(err.message(), "unit 0 exploded");
}

#[tokio::test]
async fn catch_async_converts_panic_while_building_future() {
    let err = catch_async(|| -> std::future::Ready<u8> { panic!("no future for you") })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), kind::CATCH_ASYNC);
    assert_eq!(err.message(), "no future for you");
}

#[tokio::test]
async fn catch_async_passes_structured_payload_through() {
    let original = StructuredError::new("invariant", "broken");
    let thrown = original.clone();

    let err = catch_async(move || async move {
        panic::panic_any(thrown);
    })
    .await
    .unwrap_err();

    assert_eq!(err, original);
}

#[tokio::test]
async fn try_async_wraps_returned_error() {
    let err = try_async(|| unit(1, Err("refused"))).await.unwrap_err();

    assert_eq!(err.kind(), kind::CATCH_ASYNC);
    assert_eq!(err.message(), "refused");
}

#[tokio::test]
async fn try_async_passes_ok_through() {
    assert_eq!(try_async(|| unit(1, Ok(5))).await, Ok(5));
}

#[tokio::test]
async fn catch_async_all_excludes_rejected_unit() {
    let values = catch_async_all(|| vec![unit(10, Ok(1)), unit(20, Err("second")), unit(30, Ok(3))]).await;

    assert_eq!(values, Ok(vec![1, 3]));
}

#[tokio::test]
async fn catch_async_all_collects_in_settlement_order() {
    let values = catch_async_all(|| vec![unit(60, Ok(1)), unit(30, Ok(2)), unit(1, Ok(3))]).await;

    assert_eq!(values, Ok(vec![3, 2, 1]));
}

#[tokio::test]
async fn catch_async_all_excludes_panicked_unit() {
    let values = catch_async_all(|| vec![panicking(5, 4), panicking(1, 0), panicking(10, 6)]).await;

    assert_eq!(values, Ok(vec![4, 6]));
}

#[tokio::test]
async fn catch_async_all_with_no_units_is_empty() {
    let values = catch_async_all(Vec::<std::future::Ready<Result<u8, ()>>>::new).await;

    assert_eq!(values, Ok(vec![]));
}

#[tokio::test]
async fn catch_async_all_reports_panic_in_batch_builder() {
    let err = catch_async_all(|| -> Vec<std::future::Ready<Result<u8, ()>>> { panic!("no batch") })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), kind::CATCH_ASYNC);
    assert_eq!(err.message(), "no batch");
}

#[tokio::test]
async fn catch_async_all_runs_units_concurrently() {
    let started = tokio::time::Instant::now();
    let values = catch_async_all(|| (0..5).map(|i| unit(50, Ok(i)))).await.unwrap();

    assert_eq!(values.len(), 5);
    assert!(started.elapsed() < Duration::from_millis(200));
}

#[tokio::test]
async fn all_settled_counts_exclusions() {
    let mut settled = AllSettled::new(vec![unit(1, Err("a")), unit(2, Ok(7)), unit(3, Err("b"))]);
    assert_eq!(settled.pending(), 3);

    let values = (&mut settled).await;

    assert_eq!(values, vec![7]);
    assert_eq!(settled.excluded(), 2);
    assert_eq!(settled.pending(), 0);
}

#[tokio::test]
async fn capture_future_is_terminated_after_completion() {
    let polls = AtomicU32::new(0);
    let mut future = Box::pin(CaptureFuture::new(
        async {
            polls.fetch_add(1, Ordering::SeqCst);
            11
        },
        kind::CATCH_ASYNC,
    ));

    assert!(!future.is_terminated());
    assert_eq!((&mut future).await, Ok(11));
    assert!(future.is_terminated());
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}
