//! Validation: an applicative that accumulates failures
//!
//! `Validation` looks like `Result`, but combining validations does not stop at the first
//! failure. [`apply`](Validation::apply), [`concat`](Validation::concat), [`and`](Validation::and)
//! and `collect` concatenate every failure payload through its [`Semigroup`] instance, left
//! to right, so a caller sees all problems at once.
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```
//! use unionkit::Validation;
//!
//! let success = Validation::<_, Vec<&str>>::of(3);
//! let failure = Validation::<i32, _>::failure(vec!["bad"]);
//!
//! assert_eq!(success.map(|x| x * 2), Validation::Success(6));
//! assert_eq!(failure.clone().map(|x| x * 2), failure);
//! assert_eq!(failure.get_or_else(0), 0);
//! ```
//!
//! ## Accumulating with `apply`
//!
//! ```
//! use unionkit::Validation;
//!
//! fn positive(n: i32) -> Validation<i32, Vec<String>> {
//!     if n > 0 {
//!         Validation::success(n)
//!     } else {
//!         Validation::failure(vec![format!("{n} is not positive")])
//!     }
//! }
//!
//! let area = |w: i32| move |h: i32| w * h;
//!
//! assert_eq!(
//!     Validation::of(area).apply(positive(2)).apply(positive(3)),
//!     Validation::Success(6)
//! );
//! assert_eq!(
//!     Validation::of(area).apply(positive(-1)).apply(positive(0)),
//!     Validation::Failure(vec![
//!         "-1 is not positive".to_string(),
//!         "0 is not positive".to_string(),
//!     ])
//! );
//! ```
//!
//! ## Serialized form
//!
//! ```
//! use unionkit::Validation;
//!
//! let v = Validation::<i32, Vec<String>>::failure(vec!["bad".into()]);
//! assert_eq!(
//!     serde_json::to_string(&v).unwrap(),
//!     r#"{"@@tag":"Failure","@@type":"unionkit:Validation","values":{"value":["bad"]}}"#
//! );
//! ```

use std::fmt;

use crate::diagnostics::{DeprecationNotice, Diagnostics, TracingDiagnostics};
use crate::Semigroup;

crate::union_type! {
    /// A validation that either succeeds with a value or fails with accumulated errors
    ///
    /// # Type Parameters
    ///
    /// * `T` - The type of the success value
    /// * `E` - The type of the failure payload; a [`Semigroup`] wherever failures accumulate
    ///
    /// Both variants carry a single field, `value`. Equality, the
    /// `Validation.Success(value: ..)` representation and the tagged JSON envelope are
    /// derived once for the whole type.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
    /// assert_eq!(v1.concat(v2), Validation::Failure(vec!["error1", "error2"]));
    /// assert_eq!(Validation::<_, Vec<&str>>::of(42).to_string(), "Validation.Success(value: 42)");
    /// ```
    #[derive(Clone, Copy, Hash)]
    #[must_use = "this `Validation` may be a `Failure`, which should be handled"]
    pub enum Validation<T, E> as "unionkit:Validation" {
        /// Failed validation carrying the accumulated errors
        Failure(value: E),
        /// Successful validation carrying a value
        Success(value: T),
    }
    derive(Equality, TotalEquality, DebugRepresentation, Serialization);
}

const GET_DEPRECATION: DeprecationNotice = DeprecationNotice {
    api: "Validation::get",
    replacement: "Validation::unsafe_get",
};

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, String>::success(42);
    /// assert!(v.is_success());
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, Vec<&str>>::failure(vec!["error"]);
    /// assert!(v.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Applicative unit: always a `Success`
    #[inline]
    pub fn of(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a validation from a Result
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("error".to_string()));
    /// assert_eq!(v, Validation::Failure("error".to_string()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert to a `Result`, `Failure` becoming `Err` and `Success` becoming `Ok`
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// assert_eq!(Validation::<_, String>::success(42).into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Convert to an `Option`, discarding any failure payload
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// assert_eq!(Validation::<_, String>::success(42).into_option(), Some(42));
    /// assert_eq!(Validation::<i32, _>::failure("e").into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    /// Borrow the payload of either variant
    #[inline]
    pub fn as_ref(&self) -> Validation<&T, &E> {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the success value; a `Failure` is returned unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<_, String>::success(5);
    /// assert_eq!(v.map(|x| x * 2), Validation::Success(10));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the failure payload; a `Success` is returned unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["error"]);
    /// assert_eq!(v.map_failure(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_failure<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Transform whichever payload is present
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("bad");
    /// assert_eq!(v.bimap(str::len, |n| n + 1), Validation::Failure(3));
    /// ```
    #[inline]
    pub fn bimap<T2, E2, F, S>(self, on_failure: F, on_success: S) -> Validation<T2, E2>
    where
        F: FnOnce(E) -> E2,
        S: FnOnce(T) -> T2,
    {
        match self {
            Validation::Success(value) => Validation::Success(on_success(value)),
            Validation::Failure(error) => Validation::Failure(on_failure(error)),
        }
    }

    /// Collapse both variants into one value; exactly one of the functions runs
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, Vec<&str>>::failure(vec!["a", "b"]);
    /// let summary = v.fold(|errors| format!("{} errors", errors.len()), |n| n.to_string());
    /// assert_eq!(summary, "2 errors");
    /// ```
    #[inline]
    pub fn fold<R, F, S>(self, on_failure: F, on_success: S) -> R
    where
        F: FnOnce(E) -> R,
        S: FnOnce(T) -> R,
    {
        match self {
            Validation::Success(value) => on_success(value),
            Validation::Failure(error) => on_failure(error),
        }
    }

    /// Turn a `Failure` into a `Success` and back
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("e");
    /// assert_eq!(v.swap(), Validation::Success("e"));
    /// assert_eq!(v.swap().swap(), v);
    /// ```
    #[inline]
    pub fn swap(self) -> Validation<E, T> {
        match self {
            Validation::Success(value) => Validation::Failure(value),
            Validation::Failure(error) => Validation::Success(error),
        }
    }

    /// The success value, or `default` for a `Failure`
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// assert_eq!(Validation::<_, &str>::success(10).get_or_else(0), 10);
    /// assert_eq!(Validation::<i32, _>::failure("e").get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(_) => default,
        }
    }

    /// Recover from a `Failure` with a handler producing a new validation
    ///
    /// A `Success` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<i32, &str>::failure("missing")
    ///     .or_else(|_| Validation::<_, String>::success(0));
    /// assert_eq!(v, Validation::Success(0));
    /// ```
    #[inline]
    pub fn or_else<E2, H>(self, handler: H) -> Validation<T, E2>
    where
        H: FnOnce(E) -> Validation<T, E2>,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => handler(error),
        }
    }

    /// Chain a validation that depends on the success value
    ///
    /// Unlike [`apply`](Validation::apply) this short-circuits: the function only runs on
    /// a `Success`, so there is nothing to accumulate.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v = Validation::<_, Vec<&str>>::success(5)
    ///     .and_then(|x| if x > 0 { Validation::success(x * 2) } else { Validation::failure(vec!["negative"]) });
    /// assert_eq!(v, Validation::Success(10));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }
}

impl<T, E: fmt::Debug> Validation<T, E> {
    /// The success value
    ///
    /// Prefer the total alternatives [`get_or_else`](Validation::get_or_else),
    /// [`fold`](Validation::fold) or [`merge`](Validation::merge).
    ///
    /// # Panics
    ///
    /// Panics if the validation is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// assert_eq!(Validation::<_, String>::success(7).unsafe_get(), 7);
    /// ```
    #[track_caller]
    pub fn unsafe_get(self) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(error) => panic!(
                "called `Validation::unsafe_get()` on a `Failure` value: {error:?}; \
                 use `get_or_else`, `fold` or `merge` to handle failures"
            ),
        }
    }

    /// Old name of [`unsafe_get`](Validation::unsafe_get)
    ///
    /// Reports a [`DeprecationNotice`] through [`TracingDiagnostics`] before delegating.
    ///
    /// # Panics
    ///
    /// Panics if the validation is a `Failure`.
    #[deprecated(since = "0.1.0", note = "use `unsafe_get`, or `get_or_else`/`fold`/`merge`")]
    #[track_caller]
    pub fn get(self) -> T {
        self.get_reporting(&TracingDiagnostics)
    }

    /// [`get`](Validation::get) with an explicit diagnostics sink
    ///
    /// # Panics
    ///
    /// Panics if the validation is a `Failure`.
    #[track_caller]
    pub fn get_reporting<D>(self, diagnostics: &D) -> T
    where
        D: Diagnostics + ?Sized,
    {
        diagnostics.deprecated(&GET_DEPRECATION);
        self.unsafe_get()
    }
}

impl<T> Validation<T, T> {
    /// The payload of whichever variant is present
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// assert_eq!(Validation::<_, i32>::failure(1).merge(), 1);
    /// assert_eq!(Validation::<_, i32>::success(2).merge(), 2);
    /// ```
    #[inline]
    pub fn merge(self) -> T {
        match self {
            Validation::Success(value) | Validation::Failure(value) => value,
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Semigroup combination
    ///
    /// Two failures concatenate their payloads, `self` first. A `Failure` absorbs a
    /// `Success`, and a `Success` yields to `other` whatever it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let ok = Validation::<i32, Vec<&str>>::success(5);
    /// let bad = Validation::<i32, Vec<&str>>::failure(vec!["e"]);
    /// assert_eq!(ok.clone().concat(bad.clone()), bad);
    /// assert_eq!(bad.clone().concat(ok), bad);
    /// ```
    pub fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.concat(right))
            }
            (Validation::Failure(error), Validation::Success(_)) => Validation::Failure(error),
            (Validation::Success(_), other) => other,
        }
    }

    /// Pair two validations, accumulating failures from both
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["error1"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["error2"]);
    /// assert_eq!(v1.and(v2), Validation::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        self.map(|a| move |b: U| (a, b)).apply(other)
    }
}

impl<F, E: Semigroup> Validation<F, E> {
    /// Apply the function held by this validation to the value held by `argument`
    ///
    /// | `self`       | `argument`   | result                     |
    /// |--------------|--------------|----------------------------|
    /// | `Success(f)` | `Success(a)` | `Success(f(a))`            |
    /// | `Success(f)` | `Failure(e)` | `Failure(e)`               |
    /// | `Failure(e)` | `Success(a)` | `Failure(e)`               |
    /// | `Failure(l)` | `Failure(r)` | `Failure(l.concat(r))`     |
    ///
    /// Chained calls therefore collect every failure, in the order of the chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use unionkit::Validation;
    ///
    /// let inc = Validation::<_, Vec<&str>>::of(|x: i32| x + 1);
    /// assert_eq!(inc.apply(Validation::success(5)), Validation::Success(6));
    ///
    /// let broken = Validation::<fn(i32) -> i32, _>::failure(vec!["e1"]);
    /// assert_eq!(
    ///     broken.apply(Validation::<i32, _>::failure(vec!["e2"])),
    ///     Validation::Failure(vec!["e1", "e2"])
    /// );
    /// ```
    pub fn apply<A, B>(self, argument: Validation<A, E>) -> Validation<B, E>
    where
        F: FnOnce(A) -> B,
    {
        match (self, argument) {
            (Validation::Success(f), Validation::Success(value)) => Validation::Success(f(value)),
            (Validation::Success(_), Validation::Failure(error)) => Validation::Failure(error),
            (Validation::Failure(error), Validation::Success(_)) => Validation::Failure(error),
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.concat(right))
            }
        }
    }
}

impl<T, E: Semigroup> Semigroup for Validation<T, E> {
    #[inline]
    fn concat(self, other: Self) -> Self {
        Validation::concat(self, other)
    }
}

/// Collect many validations, accumulating every failure left to right
///
/// ```
/// use unionkit::Validation;
///
/// let all: Validation<Vec<i32>, Vec<&str>> =
///     vec![Validation::success(1), Validation::failure(vec!["a"]), Validation::failure(vec!["b"])]
///         .into_iter()
///         .collect();
/// assert_eq!(all, Validation::Failure(vec!["a", "b"]));
/// ```
impl<T, E, C> FromIterator<Validation<T, E>> for Validation<C, E>
where
    E: Semigroup,
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Validation<T, E>>>(iter: I) -> Self {
        let mut successes = Vec::new();
        let mut failure: Option<E> = None;
        for validation in iter {
            match validation {
                Validation::Success(value) if failure.is_none() => successes.push(value),
                Validation::Success(_) => {}
                Validation::Failure(error) => failure = failure.concat(Some(error)),
            }
        }
        match failure {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(successes.into_iter().collect()),
        }
    }
}

impl<T, E> From<Result<T, E>> for Validation<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Validation::from_result(result)
    }
}

impl<T, E> From<Validation<T, E>> for Result<T, E> {
    fn from(validation: Validation<T, E>) -> Self {
        validation.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adt::{Adt, Deserialization, Serialization};
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_constructors() {
        assert!(Validation::<_, Vec<&str>>::success(42).is_success());
        assert!(Validation::<i32, _>::failure(vec!["error"]).is_failure());
        assert_eq!(Validation::<_, ()>::of(1), Validation::Success(1));
    }

    #[test]
    fn test_union_description() {
        let union = Validation::<i32, i32>::UNION;
        assert_eq!(union.name(), "Validation");
        assert_eq!(union.type_id(), "unionkit:Validation");
        assert_eq!(union.variant_names().collect::<Vec<_>>(), vec!["Failure", "Success"]);
        for variant in union.variants() {
            assert_eq!(variant.fields(), &["value"]);
        }
    }

    #[test]
    fn test_tags() {
        assert_eq!(Validation::<i32, ()>::Success(1).tag(), "Success");
        assert_eq!(Validation::<(), i32>::Failure(1).tag(), "Failure");
    }

    #[test]
    fn test_map_on_success() {
        assert_eq!(Validation::<_, &str>::success(3).map(|x| x * 2), Validation::Success(6));
    }

    #[test]
    fn test_map_on_failure() {
        let v = Validation::<i32, _>::failure("bad");
        assert_eq!(v.map(|x| x * 2), Validation::Failure("bad"));
    }

    #[test]
    fn test_map_failure() {
        let v = Validation::<i32, _>::failure(vec!["a", "b"]);
        assert_eq!(v.map_failure(|e| e.len()), Validation::Failure(2));
        let v = Validation::<_, Vec<&str>>::success(1);
        assert_eq!(v.map_failure(|e| e.len()), Validation::Success(1));
    }

    #[test]
    fn test_bimap() {
        let f = Validation::<i32, i32>::failure(1);
        let s = Validation::<i32, i32>::success(1);
        assert_eq!(f.bimap(|e| e - 1, |v| v + 1), Validation::Failure(0));
        assert_eq!(s.bimap(|e| e - 1, |v| v + 1), Validation::Success(2));
    }

    #[test]
    fn test_apply_success_to_success() {
        let f = Validation::<_, Vec<&str>>::success(|x: i32| x + 1);
        assert_eq!(f.apply(Validation::success(5)), Validation::Success(6));
    }

    #[test]
    fn test_apply_success_to_failure() {
        let f = Validation::<_, Vec<&str>>::success(|x: i32| x + 1);
        assert_eq!(f.apply(Validation::failure(vec!["e"])), Validation::Failure(vec!["e"]));
    }

    #[test]
    fn test_apply_failure_to_success() {
        let f = Validation::<fn(i32) -> i32, _>::failure(vec!["e"]);
        assert_eq!(f.apply(Validation::success(5)), Validation::Failure(vec!["e"]));
    }

    #[test]
    fn test_apply_accumulates_receiver_first() {
        let f = Validation::<fn(i32) -> i32, _>::failure(vec!["e1"]);
        let result = f.apply(Validation::failure(vec!["e2"]));
        assert_eq!(result, Validation::Failure(vec!["e1", "e2"]));
    }

    #[test]
    fn test_apply_chain_accumulates_in_order() {
        let add3 = |a: i32| move |b: i32| move |c: i32| a + b + c;
        let result = Validation::<_, Vec<&str>>::of(add3)
            .apply(Validation::failure(vec!["a"]))
            .apply(Validation::success(2))
            .apply(Validation::failure(vec!["c"]));
        assert_eq!(result, Validation::Failure(vec!["a", "c"]));

        let result = Validation::<_, Vec<&str>>::of(add3)
            .apply(Validation::success(1))
            .apply(Validation::success(2))
            .apply(Validation::success(3));
        assert_eq!(result, Validation::Success(6));
    }

    #[test]
    fn test_get_or_else() {
        assert_eq!(Validation::<_, &str>::success(10).get_or_else(0), 10);
        assert_eq!(Validation::<i32, _>::failure("e").get_or_else(0), 0);
    }

    #[test]
    fn test_unsafe_get_on_success() {
        assert_eq!(Validation::<_, &str>::success(1).unsafe_get(), 1);
    }

    #[test]
    #[should_panic(expected = "called `Validation::unsafe_get()` on a `Failure` value")]
    fn test_unsafe_get_on_failure_panics() {
        let _ = Validation::<i32, _>::failure("e").unsafe_get();
    }

    #[test]
    #[should_panic(expected = "use `get_or_else`, `fold` or `merge`")]
    fn test_unsafe_get_names_alternatives() {
        let _ = Validation::<i32, _>::failure("e").unsafe_get();
    }

    #[test]
    fn test_get_reporting_notifies_then_delegates() {
        let calls = Cell::new(0);
        let sink = |notice: &DeprecationNotice| {
            assert_eq!(notice.api, "Validation::get");
            assert_eq!(notice.replacement, "Validation::unsafe_get");
            calls.set(calls.get() + 1);
        };
        assert_eq!(Validation::<_, &str>::success(4).get_reporting(&sink), 4);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    #[should_panic(expected = "on a `Failure` value")]
    fn test_get_reporting_on_failure_panics() {
        let _ = Validation::<i32, _>::failure("e").get_reporting(&|_: &DeprecationNotice| {});
    }

    #[test]
    fn test_or_else() {
        let recovered = Validation::<i32, &str>::failure("e").or_else(|e| {
            Validation::<_, String>::failure(format!("{e}!"))
        });
        assert_eq!(recovered, Validation::Failure("e!".to_string()));

        let untouched = Validation::<i32, &str>::success(1)
            .or_else(|_| Validation::<_, String>::success(0));
        assert_eq!(untouched, Validation::Success(1));
    }

    #[test]
    fn test_concat() {
        let ok = Validation::<i32, _>::success(5);
        let bad = Validation::<i32, _>::failure("e".to_string());
        assert_eq!(ok.clone().concat(bad.clone()), bad);
        assert_eq!(bad.clone().concat(ok.clone()), bad);
        assert_eq!(ok.clone().concat(Validation::success(6)), Validation::Success(6));
        assert_eq!(
            bad.clone().concat(Validation::failure("f".to_string())),
            Validation::Failure("ef".to_string())
        );
    }

    #[test]
    fn test_fold_runs_exactly_one_branch() {
        let runs = Cell::new((0, 0));
        let count = |v: Validation<i32, i32>| {
            v.fold(
                |_| runs.set((runs.get().0 + 1, runs.get().1)),
                |_| runs.set((runs.get().0, runs.get().1 + 1)),
            )
        };
        count(Validation::Failure(1));
        assert_eq!(runs.get(), (1, 0));
        count(Validation::Success(1));
        assert_eq!(runs.get(), (1, 1));
    }

    #[test]
    fn test_swap() {
        assert_eq!(Validation::<i32, &str>::success(1).swap(), Validation::Failure(1));
        assert_eq!(Validation::<i32, &str>::failure("e").swap(), Validation::Success("e"));
    }

    #[test]
    fn test_merge() {
        assert_eq!(Validation::<&str, &str>::failure("e").merge(), "e");
        assert_eq!(Validation::<&str, &str>::success("v").merge(), "v");
    }

    #[test]
    fn test_and() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<_, Vec<&str>>::success("a");
        assert_eq!(v1.and(v2), Validation::Success((1, "a")));

        let v1 = Validation::<i32, _>::failure(vec!["e1"]);
        let v2 = Validation::<i32, _>::failure(vec!["e2"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["e1", "e2"]));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let v = Validation::<i32, _>::failure(vec!["e"]);
        let result = v.and_then(|_| -> Validation<i32, Vec<&str>> { panic!("must not run") });
        assert_eq!(result, Validation::Failure(vec!["e"]));
    }

    #[test]
    fn test_collect() {
        let all: Validation<Vec<i32>, Vec<&str>> =
            vec![Validation::success(1), Validation::success(2)].into_iter().collect();
        assert_eq!(all, Validation::Success(vec![1, 2]));

        let none: Validation<Vec<i32>, Vec<&str>> =
            Vec::<Validation<i32, Vec<&str>>>::new().into_iter().collect();
        assert_eq!(none, Validation::Success(vec![]));

        let mixed: Validation<Vec<i32>, Vec<&str>> = vec![
            Validation::failure(vec!["a"]),
            Validation::success(2),
            Validation::failure(vec!["b", "c"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(mixed, Validation::Failure(vec!["a", "b", "c"]));
    }

    #[test]
    fn test_result_and_option_conversions() {
        assert_eq!(Validation::from(Ok::<_, &str>(1)), Validation::Success(1));
        assert_eq!(Result::from(Validation::<i32, _>::failure("e")), Err("e"));
        assert_eq!(Validation::<i32, _>::failure("e").into_option(), None);
    }

    #[test]
    fn test_representation() {
        assert_eq!(
            Validation::<i32, _>::failure(vec!["bad"]).to_string(),
            r#"Validation.Failure(value: ["bad"])"#
        );
        assert_eq!(
            format!("{:?}", Validation::<_, ()>::success(Validation::<_, ()>::success(1))),
            "Validation.Success(value: Validation.Success(value: 1))"
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(Validation::<i32, i32>::Success(1), Validation::Success(1));
        assert_ne!(Validation::<i32, i32>::Success(1), Validation::Failure(1));
        assert_ne!(Validation::<i32, i32>::Failure(1), Validation::Failure(2));
    }

    #[test]
    fn test_serialized_form() {
        let v = Validation::<i32, Vec<String>>::failure(vec!["bad".to_string()]);
        assert_eq!(
            v.to_json().unwrap(),
            json!({ "@@type": "unionkit:Validation", "@@tag": "Failure", "values": { "value": ["bad"] } })
        );
    }

    #[test]
    fn test_serialization_round_trip() {
        let failure = Validation::<i32, Vec<String>>::failure(vec!["bad".to_string()]);
        let success = Validation::<i32, Vec<String>>::success(42);
        for v in [failure, success] {
            assert_eq!(Validation::from_json(&v.to_json().unwrap()).unwrap(), v);
            let text = serde_json::to_string(&v).unwrap();
            assert_eq!(serde_json::from_str::<Validation<i32, Vec<String>>>(&text).unwrap(), v);
        }
    }

    #[test]
    fn test_borrowed_payloads_serialize() {
        let v = Validation::<&str, Vec<&str>>::success("x");
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            r#"{"@@tag":"Success","@@type":"unionkit:Validation","values":{"value":"x"}}"#
        );
        let json = Validation::<&str, Vec<&str>>::failure(vec!["a", "b"]).to_json().unwrap();
        assert_eq!(json["values"]["value"], json!(["a", "b"]));
        assert_eq!(
            Validation::<String, Vec<String>>::from_json(&json).unwrap(),
            Validation::Failure(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_nested_serialization() {
        let inner = Validation::<i32, String>::success(1);
        let outer = Validation::<_, String>::success(inner.clone());
        let json = outer.to_json().unwrap();
        assert_eq!(json["values"]["value"]["@@tag"], "Success");
        assert_eq!(Validation::from_json(&json).unwrap(), outer);
    }
}
