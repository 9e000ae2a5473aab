// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Scan operator for running accumulation.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;

/// Sequence of running accumulators.
///
/// The i-th output is the accumulator after folding `reducer` over the first
/// i + 1 upstream items, starting from the initial accumulator. The initial
/// accumulator itself is never emitted, so the output has exactly one item
/// per upstream item.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct Scan<S, F, A> {
    #[pin]
    source: S,
    reducer: F,
    acc: A,
}

impl<S, F, A> Scan<S, F, A> {
    pub(crate) const fn new(source: S, reducer: F, initial: A) -> Self {
        Self {
            source,
            reducer,
            acc: initial,
        }
    }
}

/// Accumulates state across items, emitting every intermediate accumulator.
///
/// # Arguments
///
/// * `source` - The upstream iterator or stream
/// * `reducer` - Computes the next accumulator from the current one and an item
/// * `initial` - Initial accumulator value (required, never emitted)
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::scan;
///
/// let sums: Vec<_> = scan([1, 2, 3].into_iter(), |acc: &i32, n: i32| acc + n, 0).collect();
/// assert_eq!(sums, vec![1, 3, 6]);
/// ```
pub const fn scan<S, F, A>(source: S, reducer: F, initial: A) -> Scan<S, F, A> {
    Scan::new(source, reducer, initial)
}

impl<S, F, A> Iterator for Scan<S, F, A>
where
    S: Iterator,
    F: FnMut(&A, S::Item) -> A,
    A: Clone,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        let item = self.source.next()?;
        self.acc = (self.reducer)(&self.acc, item);
        Some(self.acc.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F, A> Stream for Scan<S, F, A>
where
    S: Stream,
    F: FnMut(&A, S::Item) -> A,
    A: Clone,
{
    type Item = A;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<A>> {
        let this = self.project();
        this.source.poll_next(cx).map(|item| {
            item.map(|item| {
                *this.acc = (this.reducer)(this.acc, item);
                this.acc.clone()
            })
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}
