// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator: keeps the items a predicate accepts.

use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use pin_project::pin_project;

/// Sequence of the upstream items accepted by `predicate`, in upstream order.
///
/// The predicate is consulted once per upstream item considered; rejected
/// items are pulled and dropped until an accepted one is found.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct Filter<S, P> {
    #[pin]
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub(crate) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

/// Filters items based on a predicate, lazily.
///
/// # Arguments
///
/// * `source` - The upstream iterator or stream
/// * `predicate` - Function that takes `&Item` and returns `true` to keep the item
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::filter;
///
/// let evens: Vec<_> = filter(1..=6, |n: &i32| n % 2 == 0).collect();
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub const fn filter<S, P>(source: S, predicate: P) -> Filter<S, P> {
    Filter::new(source, predicate)
}

impl<S, P> Iterator for Filter<S, P>
where
    S: Iterator,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while let Some(item) = self.source.next() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<S, P> Stream for Filter<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let mut this = self.project();
        loop {
            match ready!(this.source.as_mut().poll_next(cx)) {
                Some(item) if (this.predicate)(&item) => return Poll::Ready(Some(item)),
                Some(_) => {}
                None => return Poll::Ready(None),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}
