//! Invariant checking shared by the element store and the Cayley graph.

use crate::semigroup_error::SemigroupError;

/// Trait for validating data structure invariants.
pub trait DebugInvariants {
    /// Validate invariants and return the first error encountered.
    fn validate_invariants(&self) -> Result<(), SemigroupError>;

    /// Assert invariants in debug builds or when invariant checking is enabled.
    #[inline]
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "invariant check failed");
    }
}

/// Run a fallible check and panic on error when invariant checking is
/// enabled. Compiles to nothing in release builds without the
/// `strict-invariants` / `check-invariants` features.
#[macro_export]
macro_rules! debug_invariants {
    ($expr:expr, $($ctx:tt)*) => {
        #[cfg(any(debug_assertions, feature = "strict-invariants", feature = "check-invariants"))]
        if let Err(e) = $expr {
            panic!(concat!("[invariants] ", $($ctx)*, ": {}"), e);
        }
    };
}
