// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fallible map operator: the first mapper error ends the traversal.

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use lazy_seq_core::trace;
use pin_project::pin_project;

/// Sequence of `mapper(item)` results that stops right after the first `Err`.
///
/// The error is emitted at the position of the item that caused it, and the
/// upstream is never pulled again afterwards.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct TryMap<S, F> {
    #[pin]
    source: S,
    mapper: F,
    failed: bool,
}

impl<S, F> TryMap<S, F> {
    pub(crate) const fn new(source: S, mapper: F) -> Self {
        Self {
            source,
            mapper,
            failed: false,
        }
    }
}

/// Maps each item with a fallible mapper, abandoning the traversal on error.
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::try_map;
///
/// let parsed: Vec<_> = try_map(["1", "x", "3"].into_iter(), str::parse::<i32>).collect();
/// assert_eq!(parsed.len(), 2);
/// assert!(parsed[1].is_err());
/// ```
pub const fn try_map<S, F>(source: S, mapper: F) -> TryMap<S, F> {
    TryMap::new(source, mapper)
}

impl<S, F, U, E> Iterator for TryMap<S, F>
where
    S: Iterator,
    F: FnMut(S::Item) -> Result<U, E>,
{
    type Item = Result<U, E>;

    fn next(&mut self) -> Option<Result<U, E>> {
        if self.failed {
            return None;
        }
        let result = (self.mapper)(self.source.next()?);
        if result.is_err() {
            trace!("try_map: mapper failed, abandoning traversal");
            self.failed = true;
        }
        Some(result)
    }
}

impl<S, F, U, E> Stream for TryMap<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> Result<U, E>,
{
    type Item = Result<U, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Result<U, E>>> {
        let this = self.project();
        if *this.failed {
            return Poll::Ready(None);
        }
        let Some(item) = ready!(this.source.poll_next(cx)) else {
            return Poll::Ready(None);
        };
        let result = (this.mapper)(item);
        if result.is_err() {
            trace!("try_map: mapper failed, abandoning traversal");
            *this.failed = true;
        }
        Poll::Ready(Some(result))
    }
}
