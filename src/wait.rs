//! The delay primitive the minimum-duration wrappers are built on.
//!
//! [`Wait`] is a leaf future that resolves with no payload once a fixed
//! duration has elapsed. It carries no executor of its own and does not rely
//! on any particular async runtime: pending waits park a thread on a shared
//! thread pool which wakes the stored waker when the deadline is reached.

use std::{
    pin::Pin,
    sync::OnceLock,
    task::{Context, Poll},
    time::{Duration, Instant},
};

use futures::executor::{ThreadPool, ThreadPoolBuilder};

static THREAD_POOL: OnceLock<ThreadPool> = OnceLock::new();

/// A future that resolves once a fixed duration has elapsed.
///
/// The countdown starts when the `Wait` is created, ***not*** when it is first
/// polled. A `Wait` never fails and consumes no CPU while pending; each
/// instance schedules a single wake-up on a shared thread pool.
///
/// A `Wait` that has become due stays due: polling it after it has resolved
/// keeps returning `Poll::Ready`, which lets wrappers holding one alongside
/// another future poll it freely.
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Wait {
    due: Instant,
    scheduled: bool,
}

impl Wait {
    /// Creates a future that resolves after `duration` has elapsed, measured
    /// from this call.
    ///
    /// `Duration` is unsigned, so there is no negative case to consider; a
    /// zero duration resolves on the first poll.
    pub fn new(duration: Duration) -> Self {
        THREAD_POOL.get_or_init(|| {
            ThreadPoolBuilder::new()
                .pool_size(100)
                .name_prefix("wait-timer-")
                .create()
                .expect("Timer pool creation failed")
        });
        Wait {
            due: Instant::now() + duration,
            scheduled: false,
        }
    }
}

/// Resolves after `duration` has elapsed.
///
/// Convenience shorthand for [`Wait::new`].
///
/// # Example
///
/// ```no_run
/// use await_at_least::wait;
/// use std::time::Duration;
///
/// # async fn run() {
/// wait(Duration::from_millis(500)).await;
/// # }
/// ```
pub fn wait(duration: Duration) -> Wait {
    Wait::new(duration)
}

impl Future for Wait {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if Instant::now() >= self.due {
            return Poll::Ready(());
        }
        if !self.scheduled {
            let pool = THREAD_POOL.get().expect("Timer pool not initialized");
            let waker = cx.waker().clone();
            let due = self.due;

            pool.spawn_ok(async move {
                if let Some(remaining) = due.checked_duration_since(Instant::now()) {
                    std::thread::sleep(remaining);
                }
                waker.wake();
            });
            self.scheduled = true;
        }
        Poll::Pending
    }
}
