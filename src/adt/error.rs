//! Errors raised by the union plumbing
//!
//! These are programmer errors (a method table that does not cover the union, a payload
//! that is not a serialized instance of the expected union). Domain errors belong in a
//! [`Validation`](crate::Validation), never here.

use thiserror::Error;

/// Error raised while defining, dispatching or decoding a union
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdtError {
    /// A tag that the union does not declare
    #[error("{union} has no variant named `{variant}`")]
    UnknownVariant {
        /// Union name
        union: &'static str,
        /// The offending tag
        variant: String,
    },

    /// A non-required method left a variant without an implementation
    #[error("`{union}#{method}` has no implementation for {variant}; implement it for every variant or add a fallback")]
    MissingImplementation {
        /// Union name
        union: &'static str,
        /// Method name
        method: &'static str,
        /// First variant left uncovered
        variant: &'static str,
    },

    /// The same variant was given two implementations
    #[error("`{union}#{method}` is implemented twice for {variant}")]
    DuplicateImplementation {
        /// Union name
        union: &'static str,
        /// Method name
        method: &'static str,
        /// Variant implemented twice
        variant: &'static str,
    },

    /// A required method was invoked on a variant that does not implement it
    #[error("`{union}#{method}` is required, but {union}.{variant} does not implement it")]
    AbstractMethod {
        /// Union name
        union: &'static str,
        /// Method name
        method: &'static str,
        /// Variant of the receiver
        variant: &'static str,
    },

    /// A serialized value belongs to a different union
    #[error("expected a serialized `{expected}`, found `{found}`")]
    TypeMismatch {
        /// Type id of the union being decoded
        expected: &'static str,
        /// Type id found in the payload
        found: String,
    },

    /// A serialized value lacks the envelope structure
    #[error("malformed serialized `{type_id}`: {reason}")]
    Malformed {
        /// Type id of the union being decoded
        type_id: &'static str,
        /// What is wrong with the payload
        reason: &'static str,
    },

    /// A serialized variant lacks one of its fields
    #[error("serialized {union}.{variant} has no `{field}` field")]
    MissingField {
        /// Union name
        union: &'static str,
        /// Variant being decoded
        variant: &'static str,
        /// Missing field
        field: &'static str,
    },

    /// A field value could not be decoded into the field's type
    #[error("failed to decode {union}.{variant} field `{field}`")]
    Decode {
        /// Union name
        union: &'static str,
        /// Variant being decoded
        variant: &'static str,
        /// Field being decoded
        field: &'static str,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A field value could not be encoded as JSON
    #[error("failed to encode {union}.{variant} field `{field}`")]
    Encode {
        /// Union name
        union: &'static str,
        /// Variant being encoded
        variant: &'static str,
        /// Field being encoded
        field: &'static str,
        /// Underlying encode error
        #[source]
        source: serde_json::Error,
    },
}
