use std::time::Duration;

use futures::TryFuture;

use crate::{at_least::AtLeast, at_least_or_reject::AtLeastOrReject};

/// Extend `Future` with minimum-duration operations.
pub trait WaitExt: Future {
    /// Holds this future's output back until at least `min` has elapsed.
    ///
    /// See [`AtLeast`] for the full contract.
    fn at_least(self, min: Duration) -> AtLeast<Self>
    where
        Self: Sized,
    {
        AtLeast::new(self, min)
    }

    /// Holds an `Ok` back until at least `min` has elapsed but propagates an
    /// `Err` immediately.
    ///
    /// See [`AtLeastOrReject`] for the full contract.
    fn at_least_or_reject(self, min: Duration) -> AtLeastOrReject<Self>
    where
        Self: Sized + TryFuture,
    {
        AtLeastOrReject::new(self, min)
    }
}

impl<T> WaitExt for T where T: Future {}
