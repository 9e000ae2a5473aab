// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Core traits and types shared by the lazy sequence operators.
//!
//! - [`LazyError`] / [`Result`]: the few failures that belong to the engine
//! - [`Unnest`] / [`UnnestStream`]: what `flat` asks of an element
//! - [`Nested`] / [`NestedStream`]: elements mixing scalars and nested sequences
//! - [`Target`]: how `to` builds a container from drained values

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

#[doc(hidden)]
pub mod logging;

pub mod error;
pub mod nested;
pub mod target;
pub mod unnest;

pub use self::error::{IntoLazyError, LazyError, Result};
pub use self::nested::{Nested, NestedStream};
pub use self::target::Target;
pub use self::unnest::{Unnest, UnnestStream};
