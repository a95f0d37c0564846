//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: deterministic test data generation, seeded from the
//!   test name so reruns see identical data
//! - `assertions`: custom assertion helpers
//!
//! # Usage
//!
//! ```rust
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("create_user");
//! let name = builder.name("alice");
//! let email = builder.email("alice");
//! ```

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data, while keeping
/// values unique across tests with different names.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a display name unique to this builder
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("my_test");
    /// let name = builder.name("alice");
    /// // Returns: "test-user-<seed>-alice"
    /// ```
    pub fn name(&self, suffix: &str) -> String {
        format!("test-user-{}-{}", self.seed, suffix)
    }

    /// Generate a well-formed email address unique to this builder
    pub fn email(&self, local: &str) -> String {
        format!("{}-{}@example.com", local, self.seed)
    }
}

/// Test assertion helpers
pub mod assertions {
    use std::fmt::Debug;

    /// Assert that a Result is Ok, unwrapping it with a nice error message
    pub fn assert_ok<T, E: Debug>(value: Result<T, E>, context: &str) -> T {
        value.unwrap_or_else(|e| panic!("{}: expected Ok, got Err({:?})", context, e))
    }

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.name("alice"), builder2.name("alice"));
        assert_eq!(builder1.email("alice"), builder2.email("alice"));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.email("alice"), builder2.email("alice"));
    }
}
