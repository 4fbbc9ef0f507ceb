//! Minimum-duration wrappers for futures.
//!
//! `await-at-least` makes sure an asynchronous operation takes at least a
//! given amount of time to complete. The typical use is keeping a loading
//! indicator on screen long enough not to flash when the operation it covers
//! finishes almost instantly.
//!
//! Three building blocks, each built on the prior:
//! - [`wait()`] / [`Wait`]: a delay primitive that resolves after a fixed
//!   duration with no payload
//! - [`AtLeast`]: runs a future and a `Wait` concurrently and surfaces the
//!   future's output, success or failure, only once the duration has elapsed
//! - [`AtLeastOrReject`]: same minimum-duration guarantee for successes, but
//!   an error is propagated the moment it is observed
//!
//! The crate is executor agnostic: the wrappers are plain hand-polled
//! futures, and the delay primitive wakes itself from a shared thread pool
//! rather than relying on a specific runtime's timer. They run unchanged
//! under tokio, smol, or a bare `block_on`.
//!
//! # Example
//!
//! ```no_run
//! use await_at_least::WaitExt;
//! use std::time::Duration;
//!
//! # async fn fetch_profile() -> Result<String, std::io::Error> { Ok(String::new()) }
//! # async fn run() -> Result<(), std::io::Error> {
//! // The spinner shown while this runs stays up for at least 800 ms.
//! let profile = fetch_profile().at_least(Duration::from_millis(800)).await?;
//! # Ok(())
//! # }
//! ```

pub mod at_least;
pub mod at_least_or_reject;
pub mod wait;
pub mod wait_ext;

pub use at_least::AtLeast;
pub use at_least_or_reject::AtLeastOrReject;
pub use wait::{Wait, wait};
pub use wait_ext::WaitExt;
