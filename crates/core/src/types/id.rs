//! Newtype IDs for type-safe entity references.
//!
//! The backend keys catalog and order records by number and people (creators,
//! customers) by an opaque login string. `define_id!` and `define_key!` create
//! wrappers for each so ids from different entities cannot be mixed up.

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a newtype wrapper around `i64` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_i64()`
/// - `From<i64>` and `Into<i64>` implementations
///
/// # Example
///
/// ```rust
/// # use creator_market_core::define_id;
/// define_id!(ProductNo);
/// define_id!(OrderNo);
///
/// let product = ProductNo::new(1);
/// let order = OrderNo::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ProductNo = order;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn as_i64(&self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

/// Macro to define a type-safe string key wrapper.
///
/// Same shape as [`define_id!`] but wraps an owned `String`, for entities the
/// backend identifies by login name or slug.
#[macro_export]
macro_rules! define_key {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            Default,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new key.
            #[must_use]
            pub fn new(key: impl Into<String>) -> Self {
                Self(key.into())
            }

            /// Borrow the key as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(key: String) -> Self {
                Self(key)
            }
        }

        impl From<&str> for $name {
            fn from(key: &str) -> Self {
                Self(key.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductNo);
define_id!(OrderNo);
define_id!(ReviewNo);

define_key!(CreatorId);
define_key!(CustomerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_is_transparent() {
        let id: ProductNo = serde_json::from_str("42").unwrap();
        assert_eq!(id.as_i64(), 42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn test_string_key_is_transparent() {
        let id: CustomerId = serde_json::from_str("\"kim@example.com\"").unwrap();
        assert_eq!(id.as_str(), "kim@example.com");
        assert_eq!(id.to_string(), "kim@example.com");
    }

    #[test]
    fn test_key_equality_is_by_value() {
        assert_eq!(CreatorId::from("studio-a"), CreatorId::new("studio-a".to_string()));
        assert_ne!(CreatorId::from("studio-a"), CreatorId::from("studio-b"));
    }
}
