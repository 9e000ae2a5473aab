// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Skip operator that discards the first n items of a sequence.

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use lazy_seq_core::debug;
use pin_project::pin_project;

/// Sequence of the upstream items after the first `n`.
///
/// The skipped prefix is pulled and dropped on the first pull; afterwards
/// every upstream item is passed through unchanged. Once the upstream has
/// reported its end, inside the prefix or after it, it is not pulled again.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct Skip<S> {
    #[pin]
    source: S,
    remaining: usize,
    exhausted: bool,
}

impl<S> Skip<S> {
    pub(crate) const fn new(source: S, n: usize) -> Self {
        Self {
            source,
            remaining: n,
            exhausted: false,
        }
    }
}

/// Skips the first `n` items.
///
/// If the upstream has fewer than `n` items, nothing is emitted.
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::skip;
///
/// assert_eq!(skip(1..=5, 2).collect::<Vec<_>>(), vec![3, 4, 5]);
/// assert_eq!(skip(1..=3, 5).count(), 0);
/// ```
pub const fn skip<S>(source: S, n: usize) -> Skip<S> {
    Skip::new(source, n)
}

impl<S: Iterator> Iterator for Skip<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while self.remaining > 0 && !self.exhausted {
            if self.source.next().is_none() {
                debug!(unskipped = self.remaining, "skip: upstream ended inside skipped prefix");
                self.exhausted = true;
            } else {
                self.remaining -= 1;
            }
        }
        if self.exhausted {
            return None;
        }
        let item = self.source.next();
        self.exhausted = item.is_none();
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}

impl<S: Stream> Stream for Skip<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let mut this = self.project();
        while *this.remaining > 0 && !*this.exhausted {
            if ready!(this.source.as_mut().poll_next(cx)).is_none() {
                debug!(unskipped = *this.remaining, "skip: upstream ended inside skipped prefix");
                *this.exhausted = true;
            } else {
                *this.remaining -= 1;
            }
        }
        if *this.exhausted {
            return Poll::Ready(None);
        }
        let item = ready!(this.source.poll_next(cx));
        *this.exhausted = item.is_none();
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.saturating_sub(self.remaining),
            upper.map(|upper| upper.saturating_sub(self.remaining)),
        )
    }
}
