//! # unionkit
//!
//! Closed tagged unions with derivable structure, and an accumulating `Validation` built
//! on top of them.
//!
//! ## Unions
//!
//! [`union_type!`] declares a native enum whose variants have named fields, and records
//! that structure in a static [`UnionType`](adt::UnionType). Derivations read the
//! description to install equality, a `Name.Variant(field: value)` representation, and a
//! tagged JSON envelope, once for the whole union:
//!
//! ```rust
//! use unionkit::{union_type, Deserialization, Serialization};
//!
//! union_type! {
//!     #[derive(Clone)]
//!     pub enum Payment as "shop:Payment" {
//!         Card(number: String, cvv: u16),
//!         Cash(),
//!     }
//!     derive(Equality, DebugRepresentation, Serialization);
//! }
//!
//! let card = Payment::Card("4111".into(), 123);
//! assert!(card.is_card());
//! assert_eq!(card.to_string(), r#"Payment.Card(number: "4111", cvv: 123)"#);
//!
//! let json = card.to_json().unwrap();
//! assert_eq!(json["@@tag"], "Card");
//! assert_eq!(Payment::from_json(&json).unwrap(), card);
//! ```
//!
//! ## Validation
//!
//! [`Validation`] is such a union. Unlike `Result`, combining validations keeps every
//! failure:
//!
//! ```rust
//! use unionkit::Validation;
//!
//! fn validate_email(email: &str) -> Validation<String, Vec<String>> {
//!     if email.contains('@') {
//!         Validation::success(email.to_string())
//!     } else {
//!         Validation::failure(vec!["Email must contain @".to_string()])
//!     }
//! }
//!
//! fn validate_age(age: i32) -> Validation<i32, Vec<String>> {
//!     if age >= 18 {
//!         Validation::success(age)
//!     } else {
//!         Validation::failure(vec!["Must be 18 or older".to_string()])
//!     }
//! }
//!
//! let result = validate_email("nobody").and(validate_age(12));
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec![
//!         "Email must contain @".to_string(),
//!         "Must be 18 or older".to_string(),
//!     ])
//! );
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber. Method tables log
//! at `DEBUG` when built; use of deprecated APIs is reported at `WARN` through
//! [`diagnostics::TracingDiagnostics`].

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod adt;
pub mod diagnostics;
pub mod semigroup;
pub mod testing;
pub mod validation;

// Re-exports
pub use adt::{Adt, AdtError, Deserialization, Method, MethodBuilder, Serialization};
pub use diagnostics::{DeprecationNotice, Diagnostics, TracingDiagnostics};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adt::{Adt, AdtError, Deserialization, Method, Serialization};
    pub use crate::semigroup::Semigroup;
    pub use crate::union_type;
    pub use crate::validation::Validation;
}

#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    pub use serde;
    pub use serde_json;
}
