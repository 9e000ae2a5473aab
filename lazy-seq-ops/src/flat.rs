// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flat operators that expand nested sequences up to a bounded depth.
//!
//! Each element is asked to [`unnest`](Unnest::unnest) itself. Nested elements
//! are expanded in place while depth remains; scalars, and nested elements
//! found once the depth is spent, pass through unchanged. Expansion is lazy:
//! an inner sequence is only pulled when the consumer pulls.

use crate::map::{map, Map};
use alloc::vec::Vec;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use futures::Stream;
use lazy_seq_core::{Unnest, UnnestStream};
use pin_project::pin_project;

/// Flattened view of a synchronous sequence.
///
/// Open inner sequences are kept on a stack, each with the depth its own
/// elements may still be expanded by.
#[must_use = "sequences do nothing unless consumed"]
pub struct Flat<S>
where
    S: Iterator,
    S::Item: Unnest,
{
    source: S,
    depth: usize,
    stack: Vec<(<S::Item as Unnest>::Inner, usize)>,
}

impl<S> Flat<S>
where
    S: Iterator,
    S::Item: Unnest,
{
    pub(crate) const fn new(source: S, depth: usize) -> Self {
        Self {
            source,
            depth,
            stack: Vec::new(),
        }
    }

    /// Expands `item` if depth allows, otherwise hands it back for emission.
    fn open(&mut self, item: S::Item, depth: usize) -> Option<S::Item> {
        if depth == 0 {
            return Some(item);
        }
        match item.unnest() {
            Ok(inner) => {
                self.stack.push((inner, depth - 1));
                None
            }
            Err(scalar) => Some(scalar),
        }
    }
}

/// Flattens nested elements of a synchronous sequence, `depth` levels deep.
///
/// `depth == 0` is a pass-through.
///
/// # Examples
///
/// ```rust
/// use lazy_seq_core::Nested;
/// use lazy_seq_ops::flat;
///
/// // [[1], 2, [[3]]]
/// let nested = vec![
///     Nested::list(vec![Nested::item(1)]),
///     Nested::item(2),
///     Nested::list(vec![Nested::list(vec![Nested::item(3)])]),
/// ];
/// let flattened: Vec<_> = flat(nested.into_iter(), 2).filter_map(Nested::into_item).collect();
/// assert_eq!(flattened, vec![1, 2, 3]);
/// ```
pub const fn flat<S>(source: S, depth: usize) -> Flat<S>
where
    S: Iterator,
    S::Item: Unnest,
{
    Flat::new(source, depth)
}

/// Maps each item, then flattens exactly one level: `flat(map(source, mapper), 1)`.
pub const fn flat_map<S, F, U>(source: S, mapper: F) -> Flat<Map<S, F>>
where
    S: Iterator,
    F: FnMut(S::Item) -> U,
    U: Unnest,
{
    flat(map(source, mapper), 1)
}

impl<S> Iterator for Flat<S>
where
    S: Iterator,
    S::Item: Unnest,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some((inner, depth)) = self.stack.last_mut() {
                let depth = *depth;
                match inner.next() {
                    Some(item) => {
                        if let Some(item) = self.open(item, depth) {
                            return Some(item);
                        }
                    }
                    None => {
                        self.stack.pop();
                    }
                }
            } else {
                let item = self.source.next()?;
                if let Some(item) = self.open(item, self.depth) {
                    return Some(item);
                }
            }
        }
    }
}

/// Flattened view of an asynchronous sequence.
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct FlatStream<S>
where
    S: Stream,
    S::Item: UnnestStream,
{
    #[pin]
    source: S,
    depth: usize,
    stack: Vec<(<S::Item as UnnestStream>::Inner, usize)>,
}

impl<S> FlatStream<S>
where
    S: Stream,
    S::Item: UnnestStream,
{
    pub(crate) const fn new(source: S, depth: usize) -> Self {
        Self {
            source,
            depth,
            stack: Vec::new(),
        }
    }
}

fn open_stream<T: UnnestStream>(
    stack: &mut Vec<(T::Inner, usize)>,
    item: T,
    depth: usize,
) -> Option<T> {
    if depth == 0 {
        return Some(item);
    }
    match item.unnest() {
        Ok(inner) => {
            stack.push((inner, depth - 1));
            None
        }
        Err(scalar) => Some(scalar),
    }
}

/// Flattens nested elements of an asynchronous sequence, `depth` levels deep.
pub const fn flat_stream<S>(source: S, depth: usize) -> FlatStream<S>
where
    S: Stream,
    S::Item: UnnestStream,
{
    FlatStream::new(source, depth)
}

/// Asynchronous `flat_map`: `flat_stream(map(source, mapper), 1)`.
pub const fn flat_map_stream<S, F, U>(source: S, mapper: F) -> FlatStream<Map<S, F>>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
    U: UnnestStream,
{
    flat_stream(map(source, mapper), 1)
}

impl<S> Stream for FlatStream<S>
where
    S: Stream,
    S::Item: UnnestStream,
{
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let mut this = self.project();
        loop {
            if let Some((inner, depth)) = this.stack.last_mut() {
                let depth = *depth;
                match ready!(Pin::new(inner).poll_next(cx)) {
                    Some(item) => {
                        if let Some(item) = open_stream(this.stack, item, depth) {
                            return Poll::Ready(Some(item));
                        }
                    }
                    None => {
                        this.stack.pop();
                    }
                }
            } else {
                match ready!(this.source.as_mut().poll_next(cx)) {
                    Some(item) => {
                        if let Some(item) = open_stream(this.stack, item, *this.depth) {
                            return Poll::Ready(Some(item));
                        }
                    }
                    None => return Poll::Ready(None),
                }
            }
        }
    }
}
