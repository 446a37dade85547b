#![cfg(feature = "async")]
//! Integration tests for the async adapters over `Outcome`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use rstest::rstest;
use trivalent::prelude::*;

async fn lookup(id: u32) -> Outcome<String> {
    match id {
        0 => Outcome::none(),
        1 => Outcome::value("ada".to_string()),
        _ => Outcome::error(Error::new(format!("user {id} is locked"))),
    }
}

// =============================================================================
// Chaining on futures
// =============================================================================

#[rstest]
#[case(0, "missing")]
#[case(1, "ADA")]
#[case(2, "user 2 is locked")]
#[tokio::test]
async fn fold_outcome_dispatches_each_state(#[case] id: u32, #[case] expected: &str) {
    let text = lookup(id)
        .map_outcome(|name| name.to_uppercase())
        .fold_outcome(|name| name, || "missing".to_string(), |error| error.message().to_string())
        .await;
    assert_eq!(text, expected);
}

#[tokio::test]
async fn then_outcome_async_chains_lookups() {
    let outcome = lookup(1)
        .then_outcome_async(|name| async move {
            if name.is_empty() { lookup(0).await } else { lookup(2).await }
        })
        .await;
    assert_eq!(outcome.error_ref().map(Error::message), Some("user 2 is locked"));
}

#[tokio::test]
async fn error_skips_async_steps() {
    let calls = AtomicUsize::new(0);
    let outcome = lookup(3)
        .map_outcome_async(|name| {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { name.len() }
        })
        .tap_none(|| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
        .await;
    assert!(outcome.is_error());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn panic_inside_awaited_step_is_captured() {
    let outcome: Outcome<usize> = lookup(1)
        .map_outcome_async(|_| async { panic!("decoder crashed") })
        .await;
    let error = outcome.error_ref().cloned().unwrap_or_else(|| Error::new(""));
    assert_eq!(error.message(), "decoder crashed");
    assert!(error.is_panic());
}

#[tokio::test]
async fn get_or_else_on_failed_future() {
    assert_eq!(lookup(9).get_or_else("guest".to_string()).await, "guest");
}

// =============================================================================
// Fault capture and disposal
// =============================================================================

#[tokio::test]
async fn try_async_wraps_output() {
    let outcome = try_async(async { lookup(1).await.get_or_else(String::new()) }).await;
    assert_eq!(outcome, Outcome::value("ada".to_string()));
}

#[tokio::test]
async fn use_resource_async_disposes_once_after_await() {
    let released = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&released);
    let session = Disposable::new(Vec::new(), move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let outcome = use_resource_async(session, |session| {
        async move {
            tokio::task::yield_now().await;
            session.push("row");
            session.len()
        }
        .boxed_local()
    })
    .await;

    assert_eq!(outcome, Outcome::value(1));
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Disposal faults
// =============================================================================

#[tokio::test]
async fn use_resource_async_disposal_fault_after_success_becomes_error() {
    let resource = Disposable::new((), |()| panic!("release failed"));

    let outcome = use_resource_async(resource, |_| async { 7 }.boxed_local()).await;

    assert_eq!(outcome.error_ref().map(Error::message), Some("release failed"));
}

#[tokio::test]
async fn use_resource_async_keeps_original_fault_over_disposal_fault() {
    let resource = Disposable::new((), |()| panic!("release failed"));

    let outcome: Outcome<i32> = use_resource_async(resource, |_| {
        async {
            tokio::task::yield_now().await;
            panic!("original")
        }
        .boxed_local()
    })
    .await;

    assert_eq!(outcome.error_ref().map(Error::message), Some("original"));
}

// =============================================================================
// Acquisition and options
// =============================================================================

#[tokio::test]
async fn using_async_disposes_acquired_resource() {
    let released = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&released);
    let acquire = async move {
        tokio::task::yield_now().await;
        Disposable::new(40, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    };

    let outcome = using_async(acquire, |value| async move { **value + 2 }.boxed_local()).await;

    assert_eq!(outcome, Outcome::value(42));
    assert_eq!(released.load(Ordering::SeqCst), 1);
}

async fn refuse_connection() -> Disposable<i32, fn(i32)> {
    panic!("connection refused")
}

#[tokio::test]
async fn using_async_skips_use_when_acquisition_faults() {
    let used = AtomicUsize::new(0);

    let outcome = using_async(refuse_connection(), |value| {
        used.fetch_add(1, Ordering::SeqCst);
        async move { **value }.boxed_local()
    })
    .await;

    assert_eq!(outcome.error_ref().map(Error::message), Some("connection refused"));
    assert_eq!(used.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn try_async_with_options_rewrites_captured_fault() {
    let seen = AtomicUsize::new(0);
    let options = TryOptions::new()
        .message("profile unavailable")
        .data(503_u16)
        .on_error(|_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });

    let outcome: Outcome<String> = try_async_with_options(
        async {
            tokio::task::yield_now().await;
            panic!("socket closed")
        },
        options,
    )
    .await;

    let error = outcome.error_ref().cloned().unwrap_or_else(|| Error::new(""));
    assert_eq!(error.message(), "profile unavailable");
    assert_eq!(error.data::<u16>(), Some(&503));
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn try_async_with_options_leaves_success_alone() {
    let seen = AtomicUsize::new(0);
    let options = TryOptions::new().on_error(|_| {
        seen.fetch_add(1, Ordering::SeqCst);
    });

    let outcome = try_async_with_options(async { 5 }, options).await;

    assert_eq!(outcome, Outcome::value(5));
    assert_eq!(seen.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn try_outcome_async_with_options_keeps_returned_errors() {
    let outcome = try_outcome_async_with_options(
        lookup(3),
        TryOptions::new().message("lookup crashed"),
    )
    .await;

    assert_eq!(outcome.error_ref().map(Error::message), Some("user 3 is locked"));
}
