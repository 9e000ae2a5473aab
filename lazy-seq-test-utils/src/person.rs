// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composite record used to exercise operators over non-scalar items.

/// Record compared by value through its derived `PartialEq`, so equality
/// and identity checks can be told apart in tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// Same name, different age: equal in name only.
    #[must_use]
    pub fn with_age(self, age: u32) -> Self {
        Self { age, ..self }
    }
}
