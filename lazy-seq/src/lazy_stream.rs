// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::pin::Pin;
use core::task::{Context, Poll};
use futures::stream::{self, Stream};
use lazy_seq_core::{Result, Target, UnnestStream};
use lazy_seq_ops::{Filter, FlatStream, Map, Scan, Skip, SkipWhile, Take, TakeWhile, TryMap};
use pin_project::pin_project;

/// Chainable wrapper around an asynchronous sequence.
///
/// The asynchronous twin of [`Lazy`](crate::Lazy): the same chainable
/// operators, each suspending whenever its upstream suspends, and terminal
/// methods that return futures. `LazyStream` is itself a [`Stream`].
///
/// # Examples
///
/// ```rust
/// use lazy_seq::LazyStream;
/// use futures::stream;
///
/// # async fn example() {
/// let found = LazyStream::new(stream::iter(1..=5))
///     .find(|n| *n >= 2)
///     .await;
/// assert_eq!(found, Some(2));
/// # }
/// ```
#[pin_project]
#[derive(Debug, Clone)]
#[must_use = "streams do nothing unless polled"]
pub struct LazyStream<S> {
    #[pin]
    inner: S,
}

impl<S> LazyStream<S> {
    /// Wrap a stream in a `LazyStream` wrapper
    pub const fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Unwrap to get the inner stream
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stream> LazyStream<S> {
    pub fn map<F, U>(self, mapper: F) -> LazyStream<Map<S, F>>
    where
        F: FnMut(S::Item) -> U,
    {
        LazyStream::new(lazy_seq_ops::map(self.inner, mapper))
    }

    pub fn filter<P>(self, predicate: P) -> LazyStream<Filter<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        LazyStream::new(lazy_seq_ops::filter(self.inner, predicate))
    }

    /// Running accumulators; `initial` is required and never emitted.
    pub fn scan<F, A>(self, reducer: F, initial: A) -> LazyStream<Scan<S, F, A>>
    where
        F: FnMut(&A, S::Item) -> A,
        A: Clone,
    {
        LazyStream::new(lazy_seq_ops::scan(self.inner, reducer, initial))
    }

    pub fn take(self, n: usize) -> LazyStream<Take<S>> {
        LazyStream::new(lazy_seq_ops::take(self.inner, n))
    }

    pub fn skip(self, n: usize) -> LazyStream<Skip<S>> {
        LazyStream::new(lazy_seq_ops::skip(self.inner, n))
    }

    pub fn take_while<P>(self, predicate: P) -> LazyStream<TakeWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        LazyStream::new(lazy_seq_ops::take_while(self.inner, predicate))
    }

    pub fn skip_while<P>(self, predicate: P) -> LazyStream<SkipWhile<S, P>>
    where
        P: FnMut(&S::Item) -> bool,
    {
        LazyStream::new(lazy_seq_ops::skip_while(self.inner, predicate))
    }

    /// Fallible map; the first `Err` is emitted and ends the stream.
    pub fn try_map<F, U, E>(self, mapper: F) -> LazyStream<TryMap<S, F>>
    where
        F: FnMut(S::Item) -> core::result::Result<U, E>,
    {
        LazyStream::new(lazy_seq_ops::try_map(self.inner, mapper))
    }

    /// Expands nested streams `depth` levels deep; scalars pass through.
    pub fn flat(self, depth: usize) -> LazyStream<FlatStream<S>>
    where
        S::Item: UnnestStream,
    {
        LazyStream::new(lazy_seq_ops::flat_stream(self.inner, depth))
    }

    /// `map(mapper)` followed by `flat(1)`.
    pub fn flat_map<F, U>(self, mapper: F) -> LazyStream<FlatStream<Map<S, F>>>
    where
        F: FnMut(S::Item) -> U,
        U: UnnestStream,
    {
        LazyStream::new(lazy_seq_ops::flat_map_stream(self.inner, mapper))
    }

    pub async fn first(self) -> Option<S::Item> {
        lazy_seq_ops::first_async(self.inner).await
    }

    pub async fn find<P>(self, predicate: P) -> Option<S::Item>
    where
        P: FnMut(&S::Item) -> bool,
    {
        lazy_seq_ops::find_async(self.inner, predicate).await
    }

    pub async fn some<P>(self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        lazy_seq_ops::some_async(self.inner, predicate).await
    }

    pub async fn every<P>(self, predicate: P) -> bool
    where
        P: FnMut(&S::Item) -> bool,
    {
        lazy_seq_ops::every_async(self.inner, predicate).await
    }

    pub async fn includes<V>(self, value: &V) -> bool
    where
        S::Item: PartialEq<V>,
        V: ?Sized,
    {
        lazy_seq_ops::includes_async(self.inner, value).await
    }

    /// Awaits every item, then builds the container described by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::UnsupportedTarget`](lazy_seq_core::LazyError::UnsupportedTarget)
    /// when `target` has no construction strategy.
    pub async fn to<C>(self, target: Target<S::Item, C>) -> Result<C> {
        lazy_seq_ops::to_async(self.inner, target).await
    }
}

impl<S: Stream> Stream for LazyStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.project().inner.poll_next(cx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A `LazyStream` over nothing.
impl<T> Default for LazyStream<stream::Empty<T>> {
    fn default() -> Self {
        Self::new(stream::empty())
    }
}

/// Wraps a stream in a [`LazyStream`].
pub const fn from_stream<S: Stream>(source: S) -> LazyStream<S> {
    LazyStream::new(source)
}

/// Extension trait turning any stream into a [`LazyStream`] pipeline.
pub trait IntoLazyStream: Stream + Sized {
    fn lazy(self) -> LazyStream<Self> {
        LazyStream::new(self)
    }
}

impl<S: Stream> IntoLazyStream for S {}
