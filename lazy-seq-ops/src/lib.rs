// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Lazy sequence operators in free-function form.
//!
//! Every adapter is an explicit pull state machine that implements
//! [`Iterator`] when its upstream is an iterator and [`Stream`](futures::Stream)
//! when its upstream is a stream, so the same vocabulary serves both flavors.
//! Flattening needs flavor-specific element capabilities and therefore comes
//! as [`Flat`] and [`FlatStream`]. Because the adapter constructors are not
//! tied to one flavor, closures handed to them directly need annotated
//! parameter types (`|n: &i32| ...`); the `lazy-seq` wrappers infer them.
//!
//! Terminal reducers come in pairs: `first`/`first_async`, `find`/`find_async`
//! and so on. All of them pull the shortest prefix that decides the result.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

extern crate alloc;

pub mod filter;
pub mod first;
pub mod flat;
pub mod map;
pub mod predicates;
pub mod scan;
pub mod skip;
pub mod skip_while;
pub mod take;
pub mod take_while;
pub mod to;
pub mod try_map;

pub use filter::{filter, Filter};
pub use first::{find, find_async, first, first_async};
pub use flat::{flat, flat_map, flat_map_stream, flat_stream, Flat, FlatStream};
pub use map::{map, Map};
pub use predicates::{every, every_async, includes, includes_async, some, some_async};
pub use scan::{scan, Scan};
pub use skip::{skip, Skip};
pub use skip_while::{skip_while, SkipWhile};
pub use take::{take, Take};
pub use take_while::{take_while, TakeWhile};
pub use to::{to, to_async};
pub use try_map::{try_map, TryMap};
