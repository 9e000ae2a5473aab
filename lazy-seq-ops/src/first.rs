// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! `first` and `find`: terminals returning one element or `None`.

use crate::filter::filter;
use futures::{pin_mut, Stream, StreamExt};

/// Returns the first item, pulling at most one.
///
/// `None` is the absent marker for an empty sequence.
pub fn first<I: IntoIterator>(source: I) -> Option<I::Item> {
    source.into_iter().next()
}

/// Returns the first item accepted by `predicate`; `first(filter(source, predicate))`.
///
/// Stops pulling at the first accepted item.
pub fn find<I, P>(source: I, predicate: P) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    first(filter(source.into_iter(), predicate))
}

/// Resolves to the first item of the stream, polling for at most one.
pub async fn first_async<S: Stream>(source: S) -> Option<S::Item> {
    pin_mut!(source);
    source.next().await
}

/// Resolves to the first item accepted by `predicate`.
pub async fn find_async<S, P>(source: S, predicate: P) -> Option<S::Item>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    first_async(filter(source, predicate)).await
}
