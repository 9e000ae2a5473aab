// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator: one output per pulled input.

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::Stream;
use pin_project::pin_project;

/// Sequence of `mapper(item)` for each upstream item, evaluated on demand.
///
/// Implements [`Iterator`] over an iterator upstream and [`Stream`] over a
/// stream upstream. The mapper runs exactly once per item a consumer pulls.
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct Map<S, F> {
    #[pin]
    source: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub(crate) const fn new(source: S, mapper: F) -> Self {
        Self { source, mapper }
    }
}

/// Maps each item to a new value, lazily.
///
/// # Arguments
///
/// * `source` - The upstream iterator or stream
/// * `mapper` - Function applied to every item a consumer pulls
///
/// # Examples
///
/// ```rust
/// use lazy_seq_ops::map;
///
/// let incremented: Vec<_> = map([1, 2, 3].into_iter(), |x: i32| x + 1).collect();
/// assert_eq!(incremented, vec![2, 3, 4]);
/// ```
pub const fn map<S, F>(source: S, mapper: F) -> Map<S, F> {
    Map::new(source, mapper)
}

impl<S, F, U> Iterator for Map<S, F>
where
    S: Iterator,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn next(&mut self) -> Option<U> {
        self.source.next().map(&mut self.mapper)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<S, F, U> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> U,
{
    type Item = U;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<U>> {
        let this = self.project();
        this.source.poll_next(cx).map(|item| item.map(this.mapper))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}
