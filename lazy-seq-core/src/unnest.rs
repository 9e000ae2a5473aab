// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Capabilities consulted by the flattening operators.
//!
//! An element that can be unnested is either a nested sequence of elements of
//! its own type or a scalar. Scalars are handed back untouched so that
//! flattening never fails on a per-element basis.

use futures::Stream;

/// Element of a synchronous sequence that may itself be a synchronous sequence.
pub trait Unnest: Sized {
    /// Sequence produced when the element is nested.
    type Inner: Iterator<Item = Self>;

    /// Opens the element.
    ///
    /// # Errors
    ///
    /// Returns the element itself when it is a scalar; callers pass it
    /// through unchanged.
    fn unnest(self) -> Result<Self::Inner, Self>;
}

/// Element of an asynchronous sequence that may itself be an asynchronous sequence.
pub trait UnnestStream: Sized {
    /// Stream produced when the element is nested.
    type Inner: Stream<Item = Self> + Unpin;

    /// Opens the element.
    ///
    /// # Errors
    ///
    /// Returns the element itself when it is a scalar; callers pass it
    /// through unchanged.
    fn unnest(self) -> Result<Self::Inner, Self>;
}

#[cfg(feature = "json")]
impl Unnest for serde_json::Value {
    type Inner = alloc::vec::IntoIter<serde_json::Value>;

    fn unnest(self) -> Result<Self::Inner, Self> {
        match self {
            serde_json::Value::Array(values) => Ok(values.into_iter()),
            scalar => Err(scalar),
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::Unnest;
    use serde_json::json;

    #[test]
    fn test_json_array_unnests() {
        let inner: Vec<_> = json!([1, [2], "x"])
            .unnest()
            .map(Iterator::collect)
            .unwrap_or_default();
        assert_eq!(inner, vec![json!(1), json!([2]), json!("x")]);
    }

    #[test]
    fn test_json_object_is_scalar() {
        let value = json!({ "a": [1, 2] });
        assert_eq!(value.clone().unnest().err(), Some(value));
    }
}
