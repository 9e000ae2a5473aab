// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Construction strategies for materializing a drained sequence.
//!
//! A [`Target`] describes how a container is built from the ordered values of
//! a fully drained sequence. It carries up to two strategies:
//!
//! 1. a `from` entry point that receives the values as a sequence,
//! 2. a constructor that receives the ordered collection as its sole argument.
//!
//! [`Target::build`] applies them in that priority order. A target with
//! neither strategy is rejected with [`LazyError::UnsupportedTarget`].
//!
//! # Examples
//!
//! ```
//! use lazy_seq_core::Target;
//! use std::collections::BTreeSet;
//!
//! let set = Target::<i32, BTreeSet<i32>>::collect().build(vec![3, 1, 3]).unwrap();
//! assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
//!
//! struct Bag(Vec<i32>);
//! let bag = Target::constructor(Bag).build(vec![1, 2]).unwrap();
//! assert_eq!(bag.0, vec![1, 2]);
//! ```

use crate::error::{LazyError, Result};
use crate::trace;
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

type FromEntry<T, C> = Box<dyn FnOnce(vec::IntoIter<T>) -> C>;
type Constructor<T, C> = Box<dyn FnOnce(Vec<T>) -> C>;

/// Capability description of a `to` target container `C` built from values `T`.
pub struct Target<T, C> {
    name: &'static str,
    from: Option<FromEntry<T, C>>,
    constructor: Option<Constructor<T, C>>,
}

impl<T, C> Target<T, C> {
    /// A target exposing no strategy yet. Building it fails until
    /// [`with_from`](Self::with_from) or [`with_constructor`](Self::with_constructor)
    /// is supplied.
    pub fn unresolved(name: &'static str) -> Self {
        Self {
            name,
            from: None,
            constructor: None,
        }
    }

    /// Target built through a `from` entry point.
    pub fn from_fn<F>(from: F) -> Self
    where
        F: FnOnce(vec::IntoIter<T>) -> C + 'static,
    {
        Self::unresolved(core::any::type_name::<C>()).with_from(from)
    }

    /// Target built by passing the drained collection to a constructor.
    pub fn constructor<F>(constructor: F) -> Self
    where
        F: FnOnce(Vec<T>) -> C + 'static,
    {
        Self::unresolved(core::any::type_name::<C>()).with_constructor(constructor)
    }

    /// Target whose `from` entry point is `C`'s [`FromIterator`] implementation.
    pub fn collect() -> Self
    where
        T: 'static,
        C: FromIterator<T> + 'static,
    {
        Self::from_fn(Iterator::collect)
    }

    #[must_use]
    pub fn with_from<F>(mut self, from: F) -> Self
    where
        F: FnOnce(vec::IntoIter<T>) -> C + 'static,
    {
        self.from = Some(Box::new(from));
        self
    }

    #[must_use]
    pub fn with_constructor<F>(mut self, constructor: F) -> Self
    where
        F: FnOnce(Vec<T>) -> C + 'static,
    {
        self.constructor = Some(Box::new(constructor));
        self
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn has_from(&self) -> bool {
        self.from.is_some()
    }

    pub const fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Builds the container from the drained, ordered values.
    ///
    /// The `from` entry point wins over the constructor; exactly one strategy
    /// is invoked, at most once.
    ///
    /// # Errors
    ///
    /// Returns [`LazyError::UnsupportedTarget`] if the target has neither strategy.
    pub fn build(self, values: Vec<T>) -> Result<C> {
        match (self.from, self.constructor) {
            (Some(from), _) => {
                trace!(container = self.name, count = values.len(), "materializing via from entry point");
                Ok(from(values.into_iter()))
            }
            (None, Some(constructor)) => {
                trace!(container = self.name, count = values.len(), "materializing via constructor");
                Ok(constructor(values))
            }
            (None, None) => Err(LazyError::unsupported_target(self.name)),
        }
    }
}

impl<T, C> fmt::Debug for Target<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("name", &self.name)
            .field("from", &self.from.is_some())
            .field("constructor", &self.constructor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use core::sync::atomic::{AtomicUsize, Ordering};

    static FROM_CALLS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Debug, PartialEq)]
    struct Joined(String);

    #[test]
    fn test_from_entry_point_wins_over_constructor() {
        let target = Target::from_fn(|values: vec::IntoIter<i32>| {
            FROM_CALLS.fetch_add(1, Ordering::SeqCst);
            Joined(values.map(|v| v.to_string()).collect())
        })
        .with_constructor(|_| Joined("constructor".to_string()));

        let joined = target.build(vec![1, 2, 3]).ok();

        assert_eq!(joined, Some(Joined("123".to_string())));
        assert_eq!(FROM_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_constructor_receives_ordered_collection() {
        let target = Target::constructor(|values: Vec<char>| values);
        assert_eq!(target.build(vec!['c', 'a', 'b']).ok(), Some(vec!['c', 'a', 'b']));
    }

    #[test]
    fn test_unresolved_target_is_rejected() {
        let target = Target::<u8, Vec<u8>>::unresolved("Opaque");
        assert!(!target.has_from());
        assert!(!target.has_constructor());

        let err = target.build(vec![1]).err();
        assert!(matches!(
            err,
            Some(LazyError::UnsupportedTarget { ref target }) if target == "Opaque"
        ));
    }
}
