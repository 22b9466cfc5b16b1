//! # semigroup-sieve
//!
//! semigroup-sieve enumerates finite semigroups and monoids given by a finite
//! set of generators. From the generators it discovers every element reachable
//! by repeated multiplication, deduplicating by equality and hashing, and
//! records the right Cayley graph as it goes. On top of that it answers size,
//! membership and factorisation queries, expanding the enumeration only as far
//! as each query needs.
//!
//! ## Features
//! - An element contract ([`element::Element`]) that any value with equality,
//!   hashing and a multiplication can satisfy, plus transformations, matrices
//!   over semirings, and an adapter for foreign types
//! - A breadth-first closure engine with step/element budgets
//!   ([`enumeration::Enumerator`])
//! - Lazy membership, deterministic shortest words, derived idempotents
//!   ([`semigroup::Semigroup`])
//! - Named families: full transformation monoids and symmetric groups
//!   ([`families`])
//! - Optional `rayon` feature for parallel product computation
//!
//! ## Determinism
//!
//! Element indices follow discovery order: generators first, in the order
//! supplied, then products in breadth-first order over `(element, generator)`.
//! Repeated construction from the same generators gives identical numbering
//! and identical words. The parallel path preserves this numbering.
//!
//! ## Usage
//!
//! ```rust
//! use semigroup_sieve::prelude::*;
//!
//! let mut s = full_transformation_monoid(3).unwrap();
//! assert_eq!(s.size().unwrap(), 27);
//! let c = Transformation::constant(3, 1).unwrap();
//! let w = s.word_for(&c).unwrap().unwrap();
//! assert_eq!(s.evaluate(&w).unwrap(), c);
//! ```

pub mod debug_invariants;
pub mod element;
pub mod enumeration;
pub mod families;
pub mod semigroup;
pub mod semigroup_error;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::element::{
        Adapter, AnyElement, BooleanSemiring, Element, ElementError, Integers, Matrix,
        MaxPlusSemiring, MinPlusSemiring, Semiring, Transformation,
    };
    pub use crate::enumeration::{
        Budget, CayleyGraph, ElementStore, EnumerationConfig, EnumerationState, Enumerator,
        Progress,
    };
    pub use crate::families::{
        Family, FullTransformationMonoid, SymmetricGroup, full_transformation_monoid,
        symmetric_group,
    };
    pub use crate::semigroup::Semigroup;
    pub use crate::semigroup_error::{ErrorClass, SemigroupError};
}
