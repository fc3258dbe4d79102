//! Semigroup: types with an associative `concat`
//!
//! [`Validation`](crate::Validation) accumulates failures by concatenating their payloads,
//! so a failure payload must be a semigroup. The law is a contract on the implementing type
//! and is not checked at runtime:
//!
//! ```text
//! a.concat(b).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use unionkit::Semigroup;
//!
//! assert_eq!(vec!["e1"].concat(vec!["e2"]), vec!["e1", "e2"]);
//! assert_eq!("ab".to_string().concat("cd".to_string()), "abcd");
//! assert_eq!((vec![1], "a".to_string()).concat((vec![2], "b".to_string())), (vec![1, 2], "ab".to_string()));
//! ```
//!
//! A domain error collection only needs to say how two of them combine:
//!
//! ```
//! use unionkit::Semigroup;
//!
//! #[derive(Debug, PartialEq)]
//! struct Problems(Vec<String>);
//!
//! impl Semigroup for Problems {
//!     fn concat(mut self, other: Self) -> Self {
//!         self.0.extend(other.0);
//!         self
//!     }
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

/// A type with an associative binary operation
///
/// `concat` takes both operands by value; clone first to keep an original around.
pub trait Semigroup: Sized {
    /// Combine `self` with `other`, `self` first.
    fn concat(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T> Semigroup for VecDeque<T> {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T: Ord> Semigroup for BTreeSet<T> {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl<T: Eq + Hash, S: BuildHasher> Semigroup for HashSet<T, S> {
    #[inline]
    fn concat(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Keys present on both sides have their values concatenated.
impl<K: Ord, V: Semigroup> Semigroup for BTreeMap<K, V> {
    fn concat(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.concat(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

/// Keys present on both sides have their values concatenated.
impl<K: Eq + Hash, V: Semigroup, S: BuildHasher> Semigroup for HashMap<K, V, S> {
    fn concat(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.concat(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

/// `None` is the identity on either side.
impl<T: Semigroup> Semigroup for Option<T> {
    #[inline]
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.concat(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }
}

impl Semigroup for () {
    #[inline]
    fn concat(self, _other: Self) -> Self {}
}

macro_rules! tuple_semigroup {
    ($($idx:tt $T:ident),+) => {
        impl<$($T: Semigroup),+> Semigroup for ($($T,)+) {
            #[inline]
            fn concat(self, other: Self) -> Self {
                ($(self.$idx.concat(other.$idx),)+)
            }
        }
    };
}

tuple_semigroup!(0 A, 1 B);
tuple_semigroup!(0 A, 1 B, 2 C);
tuple_semigroup!(0 A, 1 B, 2 C, 3 D);
tuple_semigroup!(0 A, 1 B, 2 C, 3 D, 4 F);
tuple_semigroup!(0 A, 1 B, 2 C, 3 D, 4 F, 5 G);

#[cfg(test)]
mod tests {
    use super::*;

    fn associative<S: Semigroup + Clone + PartialEq + std::fmt::Debug>(a: S, b: S, c: S) {
        let left = a.clone().concat(b.clone()).concat(c.clone());
        let right = a.concat(b.concat(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_vec_keeps_order() {
        assert_eq!(vec!["e1"].concat(vec!["e2", "e3"]), vec!["e1", "e2", "e3"]);
        assert_eq!(Vec::<i32>::new().concat(vec![1]), vec![1]);
    }

    #[test]
    fn test_vec_deque() {
        let a: VecDeque<_> = [1, 2].into();
        let b: VecDeque<_> = [3].into();
        assert_eq!(a.concat(b), VecDeque::from([1, 2, 3]));
    }

    #[test]
    fn test_string() {
        assert_eq!("bad ".to_string().concat("input".to_string()), "bad input");
    }

    #[test]
    fn test_sets_union() {
        let a = BTreeSet::from(["x", "y"]);
        let b = BTreeSet::from(["y", "z"]);
        assert_eq!(a.concat(b), BTreeSet::from(["x", "y", "z"]));

        let a: HashSet<_> = [1, 2].into();
        let b: HashSet<_> = [2, 3].into();
        assert_eq!(a.concat(b), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_maps_concat_colliding_values() {
        let a = BTreeMap::from([("email", vec!["missing @"]), ("age", vec!["too young"])]);
        let b = BTreeMap::from([("email", vec!["too long"])]);
        assert_eq!(
            a.concat(b),
            BTreeMap::from([
                ("age", vec!["too young"]),
                ("email", vec!["missing @", "too long"]),
            ])
        );

        let a = HashMap::from([("k", "a".to_string())]);
        let b = HashMap::from([("k", "b".to_string()), ("j", "c".to_string())]);
        let merged = a.concat(b);
        assert_eq!(merged["k"], "ab");
        assert_eq!(merged["j"], "c");
    }

    #[test]
    fn test_option_none_is_identity() {
        assert_eq!(Some(vec![1]).concat(None), Some(vec![1]));
        assert_eq!(None::<Vec<i32>>.concat(Some(vec![2])), Some(vec![2]));
        assert_eq!(Some(vec![1]).concat(Some(vec![2])), Some(vec![1, 2]));
        assert_eq!(None::<Vec<i32>>.concat(None), None);
    }

    #[test]
    fn test_tuples_componentwise() {
        let a = (vec![1], "a".to_string(), ());
        let b = (vec![2], "b".to_string(), ());
        assert_eq!(a.concat(b), (vec![1, 2], "ab".to_string(), ()));
    }

    #[test]
    fn test_associativity_examples() {
        associative(vec![1], vec![2, 3], vec![4]);
        associative("a".to_string(), "".to_string(), "c".to_string());
        associative(Some(vec![1]), None, Some(vec![3]));
        associative(
            BTreeMap::from([(1, vec!['a'])]),
            BTreeMap::from([(1, vec!['b']), (2, vec!['c'])]),
            BTreeMap::from([(2, vec!['d'])]),
        );
        associative((vec![1], "x".to_string()), (vec![2], "y".to_string()), (vec![3], "z".to_string()));
    }
}
