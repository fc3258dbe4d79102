//! Diagnostics side channel for non-fatal notices
//!
//! Deprecated APIs report through a [`Diagnostics`] sink instead of printing. The default
//! sink, [`TracingDiagnostics`], emits a `tracing` warning; any closure taking a
//! [`DeprecationNotice`] works as a sink too, which is how tests and applications route
//! notices elsewhere.
//!
//! ```
//! use std::cell::RefCell;
//! use unionkit::Validation;
//!
//! let seen = RefCell::new(Vec::new());
//! let value = Validation::<_, String>::Success(7)
//!     .get_reporting(&|notice: &unionkit::diagnostics::DeprecationNotice| {
//!         seen.borrow_mut().push(notice.api)
//!     });
//!
//! assert_eq!(value, 7);
//! assert_eq!(*seen.borrow(), vec!["Validation::get"]);
//! ```

use std::fmt;

/// A deprecated API was used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// The deprecated API
    pub api: &'static str,
    /// What to use instead
    pub replacement: &'static str,
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is deprecated, use `{}` instead",
            self.api, self.replacement
        )
    }
}

/// Receiver of non-fatal notices
pub trait Diagnostics {
    /// Report use of a deprecated API.
    fn deprecated(&self, notice: &DeprecationNotice);
}

/// Sink that forwards notices to `tracing` at `WARN` level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn deprecated(&self, notice: &DeprecationNotice) {
        tracing::warn!(
            api = notice.api,
            replacement = notice.replacement,
            "{notice}"
        );
    }
}

impl<F> Diagnostics for F
where
    F: Fn(&DeprecationNotice),
{
    fn deprecated(&self, notice: &DeprecationNotice) {
        self(notice)
    }
}
