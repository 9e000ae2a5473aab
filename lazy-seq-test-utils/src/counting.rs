// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources and callbacks that record how often they were used.

use futures::Stream;
use pin_project::pin_project;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

/// Shared counter handle. Clones observe the same count.
#[derive(Debug, Clone, Default)]
pub struct PullCounter(Arc<AtomicUsize>);

impl PullCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    fn increment(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Iterator wrapper counting the items handed out by its inner iterator.
#[derive(Debug)]
pub struct CountingIter<I> {
    inner: I,
    pulled: PullCounter,
}

impl<I: Iterator> CountingIter<I> {
    /// Wraps `source` and returns the counter observing it.
    pub fn new<S>(source: S) -> (Self, PullCounter)
    where
        S: IntoIterator<IntoIter = I>,
    {
        let pulled = PullCounter::new();
        let iter = Self {
            inner: source.into_iter(),
            pulled: pulled.clone(),
        };
        (iter, pulled)
    }
}

impl<I: Iterator> Iterator for CountingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let item = self.inner.next();
        if item.is_some() {
            self.pulled.increment();
        }
        item
    }
}

/// Stream wrapper counting the items handed out by its inner stream.
#[pin_project]
#[derive(Debug)]
pub struct CountingStream<S> {
    #[pin]
    inner: S,
    pulled: PullCounter,
}

impl<S: Stream> CountingStream<S> {
    pub fn new(source: S) -> (Self, PullCounter) {
        let pulled = PullCounter::new();
        let stream = Self {
            inner: source,
            pulled: pulled.clone(),
        };
        (stream, pulled)
    }
}

impl<S: Stream> Stream for CountingStream<S> {
    type Item = S::Item;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S::Item>> {
        let this = self.project();
        let polled = this.inner.poll_next(cx);
        if let Poll::Ready(Some(_)) = &polled {
            this.pulled.increment();
        }
        polled
    }
}

/// Non-fused iterator that yields its items, reports the end once, then
/// starts over. Every call to `next` is counted, ends included.
#[derive(Debug, Clone)]
pub struct RestartingIter<T> {
    items: Vec<T>,
    position: usize,
    calls: PullCounter,
}

impl<T: Clone> RestartingIter<T> {
    pub fn new(items: Vec<T>) -> (Self, PullCounter) {
        let calls = PullCounter::new();
        let iter = Self {
            items,
            position: 0,
            calls: calls.clone(),
        };
        (iter, calls)
    }
}

impl<T: Clone> Iterator for RestartingIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.calls.increment();
        match self.items.get(self.position) {
            Some(item) => {
                self.position += 1;
                Some(item.clone())
            }
            None => {
                self.position = 0;
                None
            }
        }
    }
}

/// Wraps a predicate so that every invocation is counted.
pub fn counted_predicate<T, F>(mut predicate: F) -> (impl FnMut(&T) -> bool, PullCounter)
where
    F: FnMut(&T) -> bool,
{
    let calls = PullCounter::new();
    let observer = calls.clone();
    let wrapped = move |item: &T| {
        observer.increment();
        predicate(item)
    };
    (wrapped, calls)
}

/// Wraps a mapper so that every invocation is counted.
pub fn counted_mapper<T, U, F>(mut mapper: F) -> (impl FnMut(T) -> U, PullCounter)
where
    F: FnMut(T) -> U,
{
    let calls = PullCounter::new();
    let observer = calls.clone();
    let wrapped = move |item: T| {
        observer.increment();
        mapper(item)
    };
    (wrapped, calls)
}
