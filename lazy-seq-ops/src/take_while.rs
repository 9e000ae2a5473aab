// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-while operator that ends a sequence at the first rejected item.

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use lazy_seq_core::trace;
use pin_project::pin_project;

/// Sequence of the leading upstream items accepted by `predicate`.
///
/// The first rejected item is consumed but not emitted, and the upstream is
/// never pulled again afterwards.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct TakeWhile<S, P> {
    #[pin]
    source: S,
    predicate: P,
    done: bool,
}

impl<S, P> TakeWhile<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self {
            source,
            predicate,
            done: false,
        }
    }
}

/// Emits items while `predicate` holds, then completes.
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::take_while;
///
/// let prefix: Vec<_> = take_while([1, 2, 3, 1].into_iter(), |n: &i32| *n < 3).collect();
/// assert_eq!(prefix, vec![1, 2]);
/// ```
pub const fn take_while<S, P>(source: S, predicate: P) -> TakeWhile<S, P> {
    TakeWhile::new(source, predicate)
}

impl<S, P> Iterator for TakeWhile<S, P>
where
    S: Iterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.source.next() {
            Some(item) if (self.predicate)(&item) => Some(item),
            Some(_) => {
                trace!("take_while: predicate rejected an item, releasing upstream");
                self.done = true;
                None
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<S, P> Stream for TakeWhile<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.project();
        if *this.done {
            return Poll::Ready(None);
        }
        match ready!(this.source.poll_next(cx)) {
            Some(item) if (this.predicate)(&item) => Poll::Ready(Some(item)),
            Some(_) => {
                trace!("take_while: predicate rejected an item, releasing upstream");
                *this.done = true;
                Poll::Ready(None)
            }
            None => {
                *this.done = true;
                Poll::Ready(None)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}
