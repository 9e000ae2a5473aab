// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # lazy-seq
//!
//! Chainable, pull-based pipelines over synchronous and asynchronous sequences.
//!
//! ## Overview
//!
//! A pipeline is built by chaining operators onto a source and is evaluated
//! only when a terminal operation (or the consumer iterating it) asks for
//! items. Each operator pulls from its upstream only as often as needed to
//! produce the next requested item, so a pipeline over an infinite source
//! terminates as soon as its result is known.
//!
//! - [`Lazy`] wraps any [`Iterator`]; its terminals return plain values.
//! - [`LazyStream`] wraps any [`Stream`](futures::Stream); its terminals are
//!   futures and every operator suspends whenever its upstream does.
//!
//! Both wrappers are themselves sequences of their own flavor, so a pipeline
//! can be fed back into [`from`], [`from_stream`], or any consumer of
//! iterators and streams.
//!
//! ## Quick Start
//!
//! ```rust
//! use lazy_seq::prelude::*;
//!
//! let evens: Vec<u32> = (1..)
//!     .lazy()
//!     .filter(|n| n % 2 == 0)
//!     .take(3)
//!     .to(Target::collect())
//!     .unwrap();
//! assert_eq!(evens, vec![2, 4, 6]);
//! ```
//!
//! ```rust
//! use lazy_seq::prelude::*;
//! use futures::stream;
//!
//! # async fn example() {
//! let running: Vec<i32> = stream::iter(vec![1, 2, 3])
//!     .lazy()
//!     .scan(|acc, n| acc + n, 0)
//!     .to(Target::collect())
//!     .await
//!     .unwrap();
//! assert_eq!(running, vec![1, 3, 6]);
//! # }
//! ```
//!
//! ## Materialization
//!
//! [`Lazy::to`] and [`LazyStream::to`] drain the pipeline and hand the ordered
//! values to a [`Target`]: its `from` entry point when it has one, otherwise
//! its constructor. A target with neither fails with
//! [`LazyError::UnsupportedTarget`] before anything is pulled.
//!
//! ## Features
//!
//! - `std` (default): standard library support. Without it the crates build
//!   on `core` and `alloc`.
//! - `tracing`: emits `trace`/`debug` events at bound and short-circuit points.
//! - `json`: lets `flat` expand `serde_json::Value` arrays.

#![cfg_attr(not(feature = "std"), no_std)]

mod lazy;
mod lazy_stream;

pub use lazy::{from, IntoLazy, Lazy};
pub use lazy_stream::{from_stream, IntoLazyStream, LazyStream};

pub use lazy_seq_core::{
    IntoLazyError, LazyError, Nested, NestedStream, Result, Target, Unnest, UnnestStream,
};

/// Free-function operators, usable without the chainable wrappers.
pub use lazy_seq_ops as ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{from, from_stream, IntoLazy, IntoLazyStream, Lazy, LazyStream};
    pub use lazy_seq_core::{LazyError, Nested, NestedStream, Target};
}
