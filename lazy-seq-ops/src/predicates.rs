// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Boolean terminals: `some`, `every` and `includes`.
//!
//! Each one returns as soon as the answer is known, without pulling further.
//! Only exhausting the sequence proves the "no match" / "no failure" answer,
//! which makes `some` of an empty sequence `false` and `every` of it `true`.

use futures::{pin_mut, Stream, StreamExt};
use lazy_seq_core::trace;

/// `true` at the first item accepted by `predicate`, `false` after exhaustion.
pub fn some<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in source {
        if predicate(&item) {
            trace!("some: match found, abandoning upstream");
            return true;
        }
    }
    false
}

/// `false` at the first item rejected by `predicate`, `true` after exhaustion.
pub fn every<I, P>(source: I, mut predicate: P) -> bool
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in source {
        if !predicate(&item) {
            trace!("every: rejection found, abandoning upstream");
            return false;
        }
    }
    true
}

/// `true` at the first item equal to `value`, `false` after exhaustion.
///
/// Equality is [`PartialEq`]; compare handles such as `Rc` with
/// [`some`] and `Rc::ptr_eq` when identity is wanted instead.
pub fn includes<I, V>(source: I, value: &V) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq<V>,
    V: ?Sized,
{
    some(source, |item| item == value)
}

pub async fn some_async<S, P>(source: S, mut predicate: P) -> bool
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    pin_mut!(source);
    while let Some(item) = source.next().await {
        if predicate(&item) {
            trace!("some: match found, abandoning upstream");
            return true;
        }
    }
    false
}

pub async fn every_async<S, P>(source: S, mut predicate: P) -> bool
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    pin_mut!(source);
    while let Some(item) = source.next().await {
        if !predicate(&item) {
            trace!("every: rejection found, abandoning upstream");
            return false;
        }
    }
    true
}

pub async fn includes_async<S, V>(source: S, value: &V) -> bool
where
    S: Stream,
    S::Item: PartialEq<V>,
    V: ?Sized,
{
    some_async(source, |item| item == value).await
}
