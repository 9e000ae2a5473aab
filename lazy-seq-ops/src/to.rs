// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Materialization of a drained sequence into a caller-described container.

use alloc::vec::Vec;
use futures::{Stream, StreamExt};
use lazy_seq_core::{LazyError, Result, Target};

/// Drains `source` in order and builds the container described by `target`.
///
/// # Errors
///
/// Returns [`LazyError::UnsupportedTarget`](lazy_seq_core::LazyError::UnsupportedTarget)
/// when `target` exposes neither a `from` entry point nor a constructor. In
/// that case the source is not pulled at all.
pub fn to<I, C>(source: I, target: Target<I::Item, C>) -> Result<C>
where
    I: IntoIterator,
{
    ensure_buildable(&target)?;
    let values: Vec<I::Item> = source.into_iter().collect();
    target.build(values)
}

/// Awaits every item of `source` into an ordered buffer, then builds the
/// container described by `target`.
///
/// # Errors
///
/// Same as [`to`].
pub async fn to_async<S, C>(source: S, target: Target<S::Item, C>) -> Result<C>
where
    S: Stream,
{
    ensure_buildable(&target)?;
    let values: Vec<S::Item> = source.collect().await;
    target.build(values)
}

fn ensure_buildable<T, C>(target: &Target<T, C>) -> Result<()> {
    if target.has_from() || target.has_constructor() {
        Ok(())
    } else {
        Err(LazyError::unsupported_target(target.name()))
    }
}
