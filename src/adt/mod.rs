//! Closed tagged unions with per-variant dispatch and derivable structure
//!
//! A union is declared once with [`union_type!`](crate::union_type), which produces:
//! - a native Rust enum whose tuple variants are the first-class constructors
//! - an [`Adt`] implementation exposing the process-wide [`UnionType`] description
//! - `is_<variant>()` membership tests for every variant
//! - the derivations named in its `derive(...)` clause
//!
//! # Example
//!
//! ```
//! use unionkit::adt::Adt;
//! use unionkit::union_type;
//!
//! union_type! {
//!     /// Result of looking a key up in a cache
//!     #[derive(Clone)]
//!     pub enum Lookup<V> as "demo:Lookup" {
//!         /// The key was present
//!         Hit(value: V, age_secs: u64),
//!         /// The key was absent
//!         Miss(),
//!     }
//!     derive(Equality, DebugRepresentation, Serialization);
//! }
//!
//! let hit = Lookup::Hit("cached", 3);
//! assert!(hit.is_hit());
//! assert_eq!(hit.tag(), "Hit");
//! assert_eq!(hit.to_string(), r#"Lookup.Hit(value: "cached", age_secs: 3)"#);
//! assert_eq!(Lookup::<&str>::UNION.variant("Miss").unwrap().fields(), &[] as &[&str]);
//! ```
//!
//! Per-variant behavior is normally a `match`; for tables assembled at runtime,
//! see [`Method`].

pub mod derive;
pub mod error;
mod macros;
pub mod method;
pub mod serialization;

use std::fmt;

pub use error::AdtError;
pub use method::{Method, MethodBuilder};
pub use serialization::{Deserialization, Serialization};

/// Description of one variant of a union
///
/// Built at compile time by [`union_type!`](crate::union_type); never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantDescriptor {
    name: &'static str,
    type_id: &'static str,
    fields: &'static [&'static str],
}

impl VariantDescriptor {
    /// Describe a variant of the union identified by `type_id`.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, when used in a constant) if two fields share a name.
    pub const fn new(
        name: &'static str,
        type_id: &'static str,
        fields: &'static [&'static str],
    ) -> Self {
        let mut i = 0;
        while i < fields.len() {
            let mut j = i + 1;
            while j < fields.len() {
                if str_eq(fields[i], fields[j]) {
                    panic!("a variant declares the same field name twice");
                }
                j += 1;
            }
            i += 1;
        }
        VariantDescriptor {
            name,
            type_id,
            fields,
        }
    }

    /// The variant's name, which is also its tag
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Type id of the union owning this variant
    pub const fn type_id(&self) -> &'static str {
        self.type_id
    }

    /// Field names in declaration order
    pub const fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Returns `true` if `value` is an instance of this exact variant.
    ///
    /// ```
    /// use unionkit::adt::Adt;
    /// use unionkit::Validation;
    ///
    /// let union = Validation::<i32, String>::UNION;
    /// let success = union.variant("Success").unwrap();
    /// assert!(success.has_instance(&Validation::<i32, String>::Success(1)));
    /// assert!(!success.has_instance(&Validation::<i32, String>::Failure("e".into())));
    /// ```
    ///
    /// Identity is the descriptor itself, not its name or type id: a descriptor built by
    /// hand with [`VariantDescriptor::new`] has no instances.
    pub fn has_instance<A: Adt>(&self, value: &A) -> bool {
        std::ptr::eq(value.variant(), self)
    }
}

impl fmt::Display for VariantDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.fields.join(", "))
    }
}

/// Process-wide description of a union: its name, type id and ordered variants
///
/// [`union_type!`](crate::union_type) places it in a `static`, one per union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnionType {
    name: &'static str,
    type_id: &'static str,
    variants: &'static [VariantDescriptor],
}

impl UnionType {
    /// Describe a union.
    ///
    /// # Panics
    ///
    /// Panics (at compile time, when used in a constant) if there are no variants,
    /// if two variants share a name, or if a variant belongs to another type id.
    pub const fn new(
        name: &'static str,
        type_id: &'static str,
        variants: &'static [VariantDescriptor],
    ) -> Self {
        if variants.is_empty() {
            panic!("a union needs at least one variant");
        }
        let mut i = 0;
        while i < variants.len() {
            if !str_eq(variants[i].type_id, type_id) {
                panic!("a variant descriptor belongs to a different union");
            }
            let mut j = i + 1;
            while j < variants.len() {
                if str_eq(variants[i].name, variants[j].name) {
                    panic!("a union declares the same variant name twice");
                }
                j += 1;
            }
            i += 1;
        }
        UnionType {
            name,
            type_id,
            variants,
        }
    }

    /// Short name used in representations, e.g. `Validation`
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Namespaced identifier used in serialized form, e.g. `unionkit:Validation`
    pub const fn type_id(&self) -> &'static str {
        self.type_id
    }

    /// All variants in declaration order
    pub const fn variants(&self) -> &'static [VariantDescriptor] {
        self.variants
    }

    /// Look a variant up by tag.
    pub fn variant(&self, tag: &str) -> Option<&'static VariantDescriptor> {
        self.variants.iter().find(|variant| variant.name == tag)
    }

    /// Declaration index of the variant with the given tag.
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant.name == tag)
    }

    /// Variant names in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &'static str> {
        self.variants.iter().map(|variant| variant.name)
    }

    /// Returns `true` if `value` belongs to this union, whichever variant it is.
    ///
    /// Two unions declared with the same type id are still distinct here; only the
    /// serialized form is keyed by the type id.
    pub fn has_instance<A: Adt>(&self, value: &A) -> bool {
        std::ptr::eq(value.union_type(), self)
    }
}

impl fmt::Display for UnionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A value of a closed tagged union
///
/// Implemented by [`union_type!`](crate::union_type); there is no need to implement it by hand.
pub trait Adt {
    /// Description shared by every value of the union
    const UNION: &'static UnionType;

    /// Declaration index of this value's variant
    fn variant_index(&self) -> usize;

    /// [`Self::UNION`] reached through a value
    fn union_type(&self) -> &'static UnionType {
        Self::UNION
    }

    /// Descriptor of this value's variant
    fn variant(&self) -> &'static VariantDescriptor {
        &Self::UNION.variants()[self.variant_index()]
    }

    /// This value's tag
    fn tag(&self) -> &'static str {
        self.variant().name()
    }

    /// Returns `true` if this value's tag is `name`.
    fn is_variant(&self, name: &str) -> bool {
        self.tag() == name
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
