// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for lazy sequence pipelines
//!
//! The engine itself has very few ways to fail: operators and reducers never
//! recover from or rewrap a caller failure. [`LazyError`] covers the two cases
//! that do belong to the library: a `to` target that offers no construction
//! strategy, and a caller error that was explicitly folded into the library's
//! error type.
//!
//! # Examples
//!
//! ```
//! use lazy_seq_core::{LazyError, Result};
//!
//! fn materialize() -> Result<Vec<i32>> {
//!     Err(LazyError::unsupported_target("Vec<i32>"))
//! }
//! ```

use alloc::boxed::Box;
use alloc::string::String;

/// Root error type for lazy sequence operations
#[derive(Debug, thiserror::Error)]
pub enum LazyError {
    /// The `to` target exposes neither a `from` entry point nor a constructor
    ///
    /// This is a caller contract violation; the engine never guesses a
    /// fallback container.
    #[error("Unsupported materialization target: {target}")]
    UnsupportedTarget {
        /// Display name of the target container
        target: String,
    },

    /// Error raised by a caller-supplied mapper, predicate or reducer
    ///
    /// Produced only when the caller converts its own error through
    /// [`LazyError::callback_error`] or [`IntoLazyError`].
    #[error("Callback error: {0}")]
    CallbackError(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl LazyError {
    /// Create an unsupported-target error naming the target container
    pub fn unsupported_target(target: impl Into<String>) -> Self {
        Self::UnsupportedTarget {
            target: target.into(),
        }
    }

    /// Wrap a caller error
    pub fn callback_error(error: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::CallbackError(Box::new(error))
    }

    /// Check if this error was raised by caller code rather than by the engine
    #[must_use]
    pub const fn is_callback_error(&self) -> bool {
        matches!(self, Self::CallbackError(_))
    }
}

/// Specialized Result type for lazy sequence operations
pub type Result<T> = core::result::Result<T, LazyError>;

/// Extension trait for converting caller errors into `LazyError`
///
/// Implemented for every `Error + Send + Sync + 'static`, so a fallible mapper
/// can end with `.map_err(IntoLazyError::into_lazy)`.
pub trait IntoLazyError {
    /// Convert this error into a `LazyError`
    fn into_lazy(self) -> LazyError;
}

impl<E: core::error::Error + Send + Sync + 'static> IntoLazyError for E {
    fn into_lazy(self) -> LazyError {
        LazyError::callback_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[derive(Debug, thiserror::Error)]
    #[error("parse failed at {0}")]
    struct ParseError(usize);

    #[test]
    fn test_unsupported_target_display() {
        let err = LazyError::unsupported_target("HashSet<i32>");
        assert_eq!(
            err.to_string(),
            "Unsupported materialization target: HashSet<i32>"
        );
        assert!(!err.is_callback_error());
    }

    #[test]
    fn test_callback_error_keeps_source() {
        let err = ParseError(3).into_lazy();
        assert!(err.is_callback_error());
        assert_eq!(err.to_string(), "Callback error: parse failed at 3");

        let source = core::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("parse failed at 3"));
    }
}
