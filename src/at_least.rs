//! Minimum-duration wrapper that holds back both outcomes.

use std::{
    ops::{Deref, DerefMut},
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use pin_project_lite::pin_project;

use crate::wait::Wait;

pin_project! {
    /// A future that takes at least a given duration to produce its output.
    ///
    /// The wrapped future and an internal [`Wait`] start together when the
    /// `AtLeast` is created and run concurrently. If the future settles
    /// before the deadline its output is buffered and returned once the
    /// deadline passes; if it settles after, the output is returned right
    /// away with no extra delay. The output is passed through unchanged, so
    /// for a `Result`-producing future errors are held back exactly like
    /// successes.
    ///
    /// This is useful for keeping loading indicators visible long enough not
    /// to flash.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct AtLeast<F>
    where
        F: Future,
    {
        #[pin]
        future: F,
        wait: Wait,
        output: Option<F::Output>,
    }
}

impl<F> AtLeast<F>
where
    F: Future,
{
    /// Wraps `future` so that its output surfaces no earlier than `min` from
    /// now.
    ///
    /// The countdown starts at this call, so a future that has already
    /// settled still incurs the full wait.
    ///
    /// A more convenient way to construct this is via the
    /// [`at_least()`](../wait_ext/trait.WaitExt.html#method.at_least) operator.
    pub fn new(future: F, min: Duration) -> Self {
        AtLeast {
            future,
            wait: Wait::new(min),
            output: None,
        }
    }

    /// Consumes the `AtLeast` and returns the inner future.
    pub fn inner(self) -> F {
        self.future
    }
}

impl<F> Deref for AtLeast<F>
where
    F: Future,
{
    type Target = F;

    fn deref(&self) -> &Self::Target {
        &self.future
    }
}

impl<F> DerefMut for AtLeast<F>
where
    F: Future,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.future
    }
}

impl<F> Future for AtLeast<F>
where
    F: Future,
{
    type Output = F::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        // Drive the inner future until it settles, buffering its output.
        if this.output.is_none() {
            if let Poll::Ready(output) = this.future.as_mut().poll(cx) {
                *this.output = Some(output);
            }
        }

        if Pin::new(&mut *this.wait).poll(cx).is_pending() {
            return Poll::Pending;
        }

        match this.output.take() {
            Some(output) => Poll::Ready(output),
            None => Poll::Pending,
        }
    }
}
