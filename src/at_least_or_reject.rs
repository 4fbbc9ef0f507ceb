//! Minimum-duration wrapper that lets errors through immediately.

use std::{
    ops::{Deref, DerefMut},
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use futures::TryFuture;
use pin_project_lite::pin_project;

use crate::wait::Wait;

pin_project! {
    /// A future that takes at least a given duration to succeed but fails as
    /// soon as possible.
    ///
    /// Behaves like [`AtLeast`](crate::AtLeast) on the success path: the
    /// wrapped future and an internal [`Wait`] start together, and an `Ok`
    /// produced before the deadline is buffered until the deadline passes.
    /// An `Err`, however, is propagated the moment it is observed, unchanged
    /// and with no added latency.
    ///
    /// The internal timer is not cancelled on the early-error path; its
    /// wake-up simply goes unobserved.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct AtLeastOrReject<F>
    where
        F: TryFuture,
    {
        #[pin]
        future: F,
        wait: Wait,
        value: Option<F::Ok>,
    }
}

impl<F> AtLeastOrReject<F>
where
    F: TryFuture,
{
    /// Wraps `future` so that an `Ok` surfaces no earlier than `min` from
    /// now, while an `Err` surfaces as soon as the future produces it.
    ///
    /// The countdown starts at this call, so a future that has already
    /// succeeded still incurs the full wait.
    ///
    /// A more convenient way to construct this is via the
    /// [`at_least_or_reject()`](../wait_ext/trait.WaitExt.html#method.at_least_or_reject)
    /// operator.
    pub fn new(future: F, min: Duration) -> Self {
        AtLeastOrReject {
            future,
            wait: Wait::new(min),
            value: None,
        }
    }

    /// Consumes the `AtLeastOrReject` and returns the inner future.
    pub fn inner(self) -> F {
        self.future
    }
}

impl<F> Deref for AtLeastOrReject<F>
where
    F: TryFuture,
{
    type Target = F;

    fn deref(&self) -> &Self::Target {
        &self.future
    }
}

impl<F> DerefMut for AtLeastOrReject<F>
where
    F: TryFuture,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.future
    }
}

impl<F> Future for AtLeastOrReject<F>
where
    F: TryFuture,
{
    type Output = Result<F::Ok, F::Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if this.value.is_none() {
            match this.future.as_mut().try_poll(cx) {
                Poll::Ready(Ok(value)) => *this.value = Some(value),
                // Failures are not held back.
                Poll::Ready(Err(error)) => return Poll::Ready(Err(error)),
                Poll::Pending => {}
            }
        }

        if Pin::new(&mut *this.wait).poll(cx).is_pending() {
            return Poll::Pending;
        }

        match this.value.take() {
            Some(value) => Poll::Ready(Ok(value)),
            None => Poll::Pending,
        }
    }
}
