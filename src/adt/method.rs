//! Per-variant method tables assembled at runtime
//!
//! A `match` is the natural way to give each variant its own behavior, and the compiler
//! proves it exhaustive. [`Method`] covers the cases where the table is only known at
//! runtime (plugins, configuration, tests) while keeping the same guarantee: a table that
//! leaves a variant uncovered is rejected when it is built, not when it is first called.
//!
//! A method marked [`required`](MethodBuilder::required) is abstract instead: variants may
//! omit it, and calling it on such a variant fails with [`AdtError::AbstractMethod`].
//!
//! # Example
//!
//! ```
//! use unionkit::adt::Method;
//! use unionkit::Validation;
//!
//! type Check = Validation<u32, Vec<String>>;
//!
//! let describe = Method::<Check, String>::builder("describe")
//!     .variant("Success", |v: &Check| format!("ok after {} retries", v.as_ref().get_or_else(&0)))
//!     .fallback(|_: &Check| "failed".to_string())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(describe.call(&Validation::Success(2)).unwrap(), "ok after 2 retries");
//! assert_eq!(describe.call(&Validation::Failure(vec![])).unwrap(), "failed");
//! ```

use std::fmt;
use std::sync::Arc;

use super::{AdtError, Adt};

type Implementation<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// A method dispatched on the receiver's variant
pub struct Method<A, R> {
    name: &'static str,
    required: bool,
    table: Vec<Option<Implementation<A, R>>>,
}

impl<A: Adt, R> Method<A, R> {
    /// Start defining the method `name` for the union `A`.
    pub fn builder(name: &'static str) -> MethodBuilder<A, R> {
        MethodBuilder {
            name,
            required: false,
            entries: Vec::new(),
            fallback: None,
        }
    }

    /// Method name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether the method is abstract at the union level
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns `true` if the variant tagged `variant` has an implementation.
    pub fn implements(&self, variant: &str) -> bool {
        A::UNION
            .position(variant)
            .and_then(|index| self.table.get(index))
            .is_some_and(Option::is_some)
    }

    /// Dispatch to the implementation of `receiver`'s variant.
    ///
    /// # Errors
    ///
    /// [`AdtError::AbstractMethod`] if the method is required and the receiver's variant
    /// does not implement it.
    pub fn call(&self, receiver: &A) -> Result<R, AdtError> {
        match self
            .table
            .get(receiver.variant_index())
            .and_then(Option::as_ref)
        {
            Some(implementation) => Ok(implementation(receiver)),
            None => Err(AdtError::AbstractMethod {
                union: A::UNION.name(),
                method: self.name,
                variant: receiver.tag(),
            }),
        }
    }
}

impl<A, R> Clone for Method<A, R> {
    fn clone(&self) -> Self {
        Method {
            name: self.name,
            required: self.required,
            table: self.table.clone(),
        }
    }
}

impl<A: Adt, R> fmt::Debug for Method<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let implemented: Vec<&str> = A::UNION
            .variants()
            .iter()
            .zip(&self.table)
            .filter(|(_, slot)| slot.is_some())
            .map(|(variant, _)| variant.name())
            .collect();
        f.debug_struct("Method")
            .field("union", &A::UNION.name())
            .field("name", &self.name)
            .field("required", &self.required)
            .field("implemented", &implemented)
            .finish()
    }
}

/// Builder returned by [`Method::builder`]
pub struct MethodBuilder<A, R> {
    name: &'static str,
    required: bool,
    entries: Vec<(String, Implementation<A, R>)>,
    fallback: Option<Implementation<A, R>>,
}

impl<A: Adt, R> MethodBuilder<A, R> {
    /// Implement the method for the variant tagged `variant`.
    pub fn variant<F>(mut self, variant: &str, implementation: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.entries
            .push((variant.to_owned(), Arc::new(implementation)));
        self
    }

    /// Shared implementation inherited by every variant without its own.
    pub fn fallback<F>(mut self, implementation: F) -> Self
    where
        F: Fn(&A) -> R + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(implementation));
        self
    }

    /// Mark the method abstract: variants may leave it unimplemented.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Validate the table against the union and build the method.
    ///
    /// # Errors
    ///
    /// - [`AdtError::UnknownVariant`] if an entry names a variant the union lacks
    /// - [`AdtError::DuplicateImplementation`] if a variant is implemented twice
    /// - [`AdtError::MissingImplementation`] if the method is not required and some
    ///   variant has neither an implementation nor a fallback
    pub fn build(self) -> Result<Method<A, R>, AdtError> {
        let union = A::UNION;
        let mut table: Vec<Option<Implementation<A, R>>> = vec![None; union.variants().len()];

        for (variant, implementation) in self.entries {
            let index = union
                .position(&variant)
                .ok_or_else(|| AdtError::UnknownVariant {
                    union: union.name(),
                    variant,
                })?;
            if table[index].is_some() {
                return Err(AdtError::DuplicateImplementation {
                    union: union.name(),
                    method: self.name,
                    variant: union.variants()[index].name(),
                });
            }
            table[index] = Some(implementation);
        }

        if let Some(fallback) = self.fallback {
            for slot in table.iter_mut().filter(|slot| slot.is_none()) {
                *slot = Some(Arc::clone(&fallback));
            }
        }

        if !self.required {
            if let Some(index) = table.iter().position(Option::is_none) {
                return Err(AdtError::MissingImplementation {
                    union: union.name(),
                    method: self.name,
                    variant: union.variants()[index].name(),
                });
            }
        }

        tracing::debug!(
            union = union.name(),
            method = self.name,
            required = self.required,
            "defined method"
        );

        Ok(Method {
            name: self.name,
            required: self.required,
            table,
        })
    }
}

impl<A, R> fmt::Debug for MethodBuilder<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<&str> = self.entries.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("MethodBuilder")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("entries", &entries)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
