// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the lazy-seq workspace.
//!
//! Pull-minimality is the property most tests care about, so most helpers
//! here observe consumption:
//!
//! - [`CountingIter`] / [`CountingStream`]: sources reporting how many items were pulled
//! - [`counted_predicate`] / [`counted_mapper`]: callbacks reporting how often they ran
//! - [`SuspendingStream`]: a source that suspends before every item
//! - [`test_channel`]: a channel-backed source fed imperatively from the test
//! - [`helpers`]: timeout-guarded stream assertions
//!
//! # Examples
//!
//! ```rust
//! use lazy_seq_test_utils::CountingIter;
//!
//! let (mut source, pulled) = CountingIter::new(vec![1, 2, 3]);
//! assert_eq!(source.next(), Some(1));
//! assert_eq!(pulled.get(), 1);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod counting;
pub mod helpers;
pub mod person;
pub mod suspending;
pub mod test_data;

use futures::Stream;
use tokio::sync::mpsc;
use tokio_stream::wrappers::UnboundedReceiverStream;

pub use counting::{
    counted_mapper, counted_predicate, CountingIter, CountingStream, PullCounter, RestartingIter,
};
pub use helpers::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
pub use person::Person;
pub use suspending::{suspending_iter, SuspendingStream};

/// Creates a channel whose receiving half is a `Stream`.
///
/// The stream stays pending while the channel is empty and ends once every
/// sender is dropped, which makes it a faithful asynchronous source.
///
/// # Example
///
/// ```rust
/// use lazy_seq_test_utils::test_channel;
/// use futures::StreamExt;
///
/// # async fn example() {
/// let (tx, mut stream) = test_channel();
/// tx.send(42).unwrap();
/// assert_eq!(stream.next().await, Some(42));
/// # }
/// ```
pub fn test_channel<T: Send + 'static>() -> (
    mpsc::UnboundedSender<T>,
    impl Stream<Item = T> + Send + Unpin,
) {
    let (tx, rx) = mpsc::unbounded_channel();
    (tx, UnboundedReceiverStream::new(rx))
}
