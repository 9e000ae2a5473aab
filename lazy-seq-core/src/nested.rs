// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ready-made element types mixing scalars with lazily nested sequences.

use crate::unnest::{Unnest, UnnestStream};
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use futures::stream::{self, BoxStream, StreamExt};
use futures::Stream;

/// A scalar or a lazily produced synchronous sequence of further `Nested` values.
///
/// # Examples
///
/// ```
/// use lazy_seq_core::Nested;
///
/// // [[1], 2, [[3]]]
/// let value = Nested::list(vec![
///     Nested::list(vec![Nested::item(1)]),
///     Nested::item(2),
///     Nested::list(vec![Nested::list(vec![Nested::item(3)])]),
/// ]);
/// assert!(value.is_seq());
/// ```
pub enum Nested<T> {
    Item(T),
    Seq(Box<dyn Iterator<Item = Nested<T>>>),
}

impl<T> Nested<T> {
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Wraps any iterator of nested values. The iterator is not advanced.
    pub fn seq<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Nested<T>>,
        I::IntoIter: 'static,
    {
        Self::Seq(Box::new(values.into_iter()))
    }

    pub fn list(values: Vec<Nested<T>>) -> Self
    where
        T: 'static,
    {
        Self::seq(values)
    }

    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(value) => Some(value),
            Self::Seq(_) => None,
        }
    }

    pub const fn as_item(&self) -> Option<&T> {
        match self {
            Self::Item(value) => Some(value),
            Self::Seq(_) => None,
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Nested<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(value) => f.debug_tuple("Item").field(value).finish(),
            Self::Seq(_) => f.write_str("Seq(..)"),
        }
    }
}

impl<T> Unnest for Nested<T> {
    type Inner = Box<dyn Iterator<Item = Nested<T>>>;

    fn unnest(self) -> Result<Self::Inner, Self> {
        match self {
            Self::Seq(inner) => Ok(inner),
            item => Err(item),
        }
    }
}

/// Asynchronous counterpart of [`Nested`]: nested values are streams.
pub enum NestedStream<T> {
    Item(T),
    Seq(BoxStream<'static, NestedStream<T>>),
}

impl<T> NestedStream<T> {
    pub const fn item(value: T) -> Self {
        Self::Item(value)
    }

    /// Wraps any stream of nested values. The stream is not polled.
    pub fn seq<S>(values: S) -> Self
    where
        S: Stream<Item = NestedStream<T>> + Send + 'static,
    {
        Self::Seq(values.boxed())
    }

    /// Nested stream over already available values.
    pub fn list(values: Vec<NestedStream<T>>) -> Self
    where
        T: Send + 'static,
    {
        Self::seq(stream::iter(values))
    }

    pub const fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    pub fn into_item(self) -> Option<T> {
        match self {
            Self::Item(value) => Some(value),
            Self::Seq(_) => None,
        }
    }
}

impl<T> From<T> for NestedStream<T> {
    fn from(value: T) -> Self {
        Self::Item(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for NestedStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Item(value) => f.debug_tuple("Item").field(value).finish(),
            Self::Seq(_) => f.write_str("Seq(..)"),
        }
    }
}

impl<T> UnnestStream for NestedStream<T> {
    type Inner = BoxStream<'static, NestedStream<T>>;

    fn unnest(self) -> Result<Self::Inner, Self> {
        match self {
            Self::Seq(inner) => Ok(inner),
            item => Err(item),
        }
    }
}
