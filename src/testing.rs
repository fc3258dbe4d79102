//! Assertions and property-test generators for unions
//!
//! The assertion macros print the offending payload through its `Debug` representation,
//! so a failed test shows `Validation.Failure(value: [...])` style output.
//!
//! # Examples
//!
//! ```rust
//! use unionkit::{Validation, assert_failure, assert_failure_eq, assert_success, assert_variant};
//!
//! let ok = Validation::<_, Vec<&str>>::success(42);
//! assert_eq!(assert_success!(ok), 42);
//!
//! let bad = Validation::<i32, _>::failure(vec!["too short", "no digits"]);
//! assert_failure!(bad.clone());
//! assert_failure_eq!(bad.clone(), vec!["too short", "no digits"]);
//! assert_variant!(bad, "Failure");
//! ```
//!
//! With the `proptest` feature, `Validation<T, E>` implements `Arbitrary` whenever both
//! parameters do, drawing each variant with equal weight.

/// Assert that a validation is a `Success` and evaluate to its value.
///
/// # Panics
///
/// Panics with the failure payload if the validation is a `Failure`.
///
/// # Example
///
/// ```rust
/// use unionkit::{Validation, assert_success};
///
/// let val = Validation::<_, Vec<String>>::success(42);
/// assert_eq!(assert_success!(val), 42);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr $(,)?) => {
        match $validation {
            $crate::Validation::Success(value) => value,
            $crate::Validation::Failure(errors) => {
                panic!("expected Success, got Failure: {:?}", errors)
            }
        }
    };
}

/// Assert that a validation is a `Failure` and evaluate to its payload.
///
/// # Panics
///
/// Panics with the success value if the validation is a `Success`.
///
/// # Example
///
/// ```rust
/// use unionkit::{Validation, assert_failure};
///
/// let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
/// assert_eq!(assert_failure!(val).len(), 1);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr $(,)?) => {
        match $validation {
            $crate::Validation::Failure(errors) => errors,
            $crate::Validation::Success(value) => {
                panic!("expected Failure, got Success: {:?}", value)
            }
        }
    };
}

/// Assert that a validation is a `Failure` whose payload equals `expected`.
///
/// # Example
///
/// ```rust
/// use unionkit::{Validation, assert_failure_eq};
///
/// let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
/// assert_failure_eq!(val, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_failure_eq {
    ($validation:expr, $expected:expr $(,)?) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                ::core::assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(value) => {
                panic!(
                    "expected Failure with {:?}, got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

/// Assert that any union value carries the given tag.
///
/// # Example
///
/// ```rust
/// use unionkit::{Validation, assert_variant};
///
/// assert_variant!(Validation::<_, ()>::success(1), "Success");
/// ```
#[macro_export]
macro_rules! assert_variant {
    ($value:expr, $tag:expr $(,)?) => {{
        let value = &$value;
        let actual = $crate::adt::Adt::tag(value);
        if actual != $tag {
            panic!(
                "expected {}.{}, got {:?}",
                $crate::adt::Adt::union_type(value).name(),
                $tag,
                value
            );
        }
    }};
}

#[cfg(feature = "proptest")]
use crate::Validation;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for Validation<T, E>
where
    T: Arbitrary,
    E: Arbitrary,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (success_params, failure_params) = args;
        prop_oneof![
            any_with::<E>(failure_params).prop_map(Validation::failure),
            any_with::<T>(success_params).prop_map(Validation::success),
        ]
        .boxed()
    }
}
