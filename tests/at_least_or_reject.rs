use std::time::{Duration, Instant};

use await_at_least::{AtLeastOrReject, WaitExt};
use futures::future;

#[tokio::test(flavor = "multi_thread")]
async fn already_resolved_input_waits_full_duration() {
    let start = Instant::now();
    let result = future::ok::<&str, &str>("resolved")
        .at_least_or_reject(Duration::from_millis(500))
        .await;

    assert!(
        start.elapsed() >= Duration::from_millis(500),
        "A success should still incur the full wait"
    );
    assert_eq!(
        result,
        Ok("resolved"),
        "The resolved value should pass through"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn already_failed_input_rejects_immediately() {
    let start = Instant::now();
    let result = future::err::<&str, &str>("rejected")
        .at_least_or_reject(Duration::from_millis(500))
        .await;

    assert!(
        start.elapsed() < Duration::from_millis(100),
        "A failure should surface without waiting out the deadline"
    );
    assert_eq!(
        result,
        Err("rejected"),
        "The error should pass through unchanged"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn input_succeeding_before_deadline_surfaces_at_deadline() {
    let operation = async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok::<_, &str>("resolved")
    };

    let start = Instant::now();
    let result = operation.at_least_or_reject(Duration::from_millis(500)).await;
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(500),
        "The value should not surface before the deadline"
    );
    assert!(
        elapsed < Duration::from_millis(780),
        "The waits should overlap, not add up"
    );
    assert_eq!(
        result,
        Ok("resolved"),
        "The resolved value should pass through"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn input_failing_before_deadline_rejects_right_away() {
    let operation = async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Err::<&str, _>("rejected")
    };

    let start = Instant::now();
    let result = operation.at_least_or_reject(Duration::from_millis(500)).await;
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(300),
        "The wrapper cannot fail before the operation does"
    );
    assert!(
        elapsed < Duration::from_millis(450),
        "The failure should not be held back to the deadline"
    );
    assert_eq!(
        result,
        Err("rejected"),
        "The error should pass through unchanged"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn slow_success_adds_no_extra_delay() {
    let operation = async {
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok::<_, &str>("resolved")
    };

    let start = Instant::now();
    let result = operation.at_least_or_reject(Duration::from_millis(100)).await;
    let elapsed = start.elapsed();

    assert!(
        elapsed >= Duration::from_millis(300),
        "The wrapper cannot finish before the operation does"
    );
    assert!(
        elapsed < Duration::from_millis(550),
        "Once the deadline has passed the operation's completion should surface immediately"
    );
    assert_eq!(
        result,
        Ok("resolved"),
        "The resolved value should pass through"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn countdown_runs_from_construction() {
    let wrapped = AtLeastOrReject::new(
        future::ok::<&str, &str>("resolved"),
        Duration::from_millis(200),
    );
    tokio::time::sleep(Duration::from_millis(300)).await;

    let start = Instant::now();
    let result = wrapped.await;
    assert!(
        start.elapsed() < Duration::from_millis(100),
        "A wrapper constructed long enough ago should resolve on first poll"
    );
    assert_eq!(
        result,
        Ok("resolved"),
        "The resolved value should pass through"
    );
}
