// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use core::iter;
use lazy_seq_core::{Result, Target, Unnest};
use lazy_seq_ops::{Filter, Flat, Map, Scan, Skip, SkipWhile, Take, TakeWhile, TryMap};

/// Chainable wrapper around a synchronous sequence.
///
/// Every chainable method wraps the current sequence in one more lazy
/// operator and returns a new `Lazy`; nothing is pulled until a terminal
/// method runs or the wrapper is iterated. `Lazy` is itself an [`Iterator`],
/// so a pipeline can be handed to any consumer expecting one.
///
/// # Examples
///
/// ```rust
/// use lazy_seq::Lazy;
///
/// let first_even_square = Lazy::from_source(1..)
///     .map(|n: u64| n * n)
///     .filter(|n| n % 2 == 0)
///     .first();
/// assert_eq!(first_even_square, Some(4));
/// ```
#[derive(Debug, Clone)]
#[must_use = "sequences do nothing unless consumed"]
pub struct Lazy<I> {
    inner: I,
}

impl<I> Lazy<I> {
    /// Wrap an iterator in a `Lazy` wrapper
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Unwrap to get the inner iterator
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Lazy<I> {
    /// Wraps anything that can be iterated.
    pub fn from_source<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self::new(source.into_iter())
    }

    pub fn map<F, U>(self, mapper: F) -> Lazy<Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Lazy::new(lazy_seq_ops::map(self.inner, mapper))
    }

    pub fn filter<P>(self, predicate: P) -> Lazy<Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Lazy::new(lazy_seq_ops::filter(self.inner, predicate))
    }

    /// Running accumulators; `initial` is required and never emitted.
    pub fn scan<F, A>(self, reducer: F, initial: A) -> Lazy<Scan<I, F, A>>
    where
        F: FnMut(&A, I::Item) -> A,
        A: Clone,
    {
        Lazy::new(lazy_seq_ops::scan(self.inner, reducer, initial))
    }

    pub fn take(self, n: usize) -> Lazy<Take<I>> {
        Lazy::new(lazy_seq_ops::take(self.inner, n))
    }

    pub fn skip(self, n: usize) -> Lazy<Skip<I>> {
        Lazy::new(lazy_seq_ops::skip(self.inner, n))
    }

    pub fn take_while<P>(self, predicate: P) -> Lazy<TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Lazy::new(lazy_seq_ops::take_while(self.inner, predicate))
    }

    pub fn skip_while<P>(self, predicate: P) -> Lazy<SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Lazy::new(lazy_seq_ops::skip_while(self.inner, predicate))
    }

    /// Fallible map; the first `Err` is emitted and ends the sequence.
    pub fn try_map<F, U, E>(self, mapper: F) -> Lazy<TryMap<I, F>>
    where
        F: FnMut(I::Item) -> core::result::Result<U, E>,
    {
        Lazy::new(lazy_seq_ops::try_map(self.inner, mapper))
    }

    /// Expands nested elements `depth` levels deep; scalars pass through.
    pub fn flat(self, depth: usize) -> Lazy<Flat<I>>
    where
        I::Item: Unnest,
    {
        Lazy::new(lazy_seq_ops::flat(self.inner, depth))
    }

    /// `map(mapper)` followed by `flat(1)`.
    pub fn flat_map<F, U>(self, mapper: F) -> Lazy<Flat<Map<I, F>>>
    where
        F: FnMut(I::Item) -> U,
        U: Unnest,
    {
        Lazy::new(lazy_seq_ops::flat_map(self.inner, mapper))
    }

    /// First item, or `None` for an empty sequence. Pulls at most one item.
    pub fn first(self) -> Option<I::Item> {
        lazy_seq_ops::first(self.inner)
    }

    pub fn find<P>(self, predicate: P) -> Option<I::Item>
    where
        P: FnMut(&I::Item) -> bool,
    {
        lazy_seq_ops::find(self.inner, predicate)
    }

    pub fn some<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        lazy_seq_ops::some(self.inner, predicate)
    }

    pub fn every<P>(self, predicate: P) -> bool
    where
        P: FnMut(&I::Item) -> bool,
    {
        lazy_seq_ops::every(self.inner, predicate)
    }

    pub fn includes<V>(self, value: &V) -> bool
    where
        I::Item: PartialEq<V>,
        V: ?Sized,
    {
        lazy_seq_ops::includes(self.inner, value)
    }

    /// Drains the sequence into the container described by `target`.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::UnsupportedTarget`](lazy_seq_core::LazyError::UnsupportedTarget)
    /// when `target` has no construction strategy.
    pub fn to<C>(self, target: Target<I::Item, C>) -> Result<C> {
        lazy_seq_ops::to(self.inner, target)
    }
}

impl<I: Iterator> Iterator for Lazy<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// A `Lazy` over nothing.
impl<T> Default for Lazy<iter::Empty<T>> {
    fn default() -> Self {
        Self::new(iter::empty())
    }
}

/// Wraps anything that can be iterated in a [`Lazy`].
pub fn from<S: IntoIterator>(source: S) -> Lazy<S::IntoIter> {
    Lazy::from_source(source)
}

/// Extension trait turning any iterable into a [`Lazy`] pipeline.
pub trait IntoLazy: IntoIterator + Sized {
    fn lazy(self) -> Lazy<Self::IntoIter> {
        Lazy::from_source(self)
    }
}

impl<S: IntoIterator> IntoLazy for S {}
