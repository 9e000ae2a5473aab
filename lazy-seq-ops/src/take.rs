// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator that limits a sequence to its first n items.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use lazy_seq_core::trace;
use pin_project::pin_project;

/// Sequence of at most the first `n` upstream items.
///
/// The remaining count is checked before every pull, so once `n` items have
/// been produced the upstream is never pulled again. `n == 0` pulls nothing.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct Take<S> {
    #[pin]
    source: S,
    remaining: usize,
}

impl<S> Take<S> {
    pub(crate) const fn new(source: S, n: usize) -> Self {
        Self {
            source,
            remaining: n,
        }
    }
}

/// Emits only the first `n` items, then completes.
///
/// If the upstream ends before `n` items, only what was available is emitted.
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::take;
///
/// assert_eq!(take(1..=5, 3).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(take(1..=3, 5).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub const fn take<S>(source: S, n: usize) -> Take<S> {
    Take::new(source, n)
}

impl<S: Iterator> Iterator for Take<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.source.next() {
            Some(item) => {
                self.remaining -= 1;
                if self.remaining == 0 {
                    trace!("take: limit reached, releasing upstream");
                }
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        bounded_hint(self.source.size_hint(), self.remaining)
    }
}

impl<S: Stream> Stream for Take<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.project();
        if *this.remaining == 0 {
            return Poll::Ready(None);
        }
        let polled = this.source.poll_next(cx);
        match &polled {
            Poll::Ready(Some(_)) => {
                *this.remaining -= 1;
                if *this.remaining == 0 {
                    trace!("take: limit reached, releasing upstream");
                }
            }
            Poll::Ready(None) => *this.remaining = 0,
            Poll::Pending => {}
        }
        polled
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        bounded_hint(self.source.size_hint(), self.remaining)
    }
}

fn bounded_hint((lower, upper): (usize, Option<usize>), remaining: usize) -> (usize, Option<usize>) {
    let lower = if lower < remaining { lower } else { remaining };
    let upper = match upper {
        Some(upper) if upper < remaining => upper,
        _ => remaining,
    };
    (lower, Some(upper))
}
