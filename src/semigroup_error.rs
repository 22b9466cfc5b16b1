//! SemigroupError: Unified error type for semigroup-sieve public APIs
//!
//! This error type is used throughout the library to provide non-panicking
//! error handling for construction, enumeration and queries.

use thiserror::Error;

use crate::element::ElementError;

/// Broad classification of a [`SemigroupError`].
///
/// Mirrors the taxonomy callers usually care about: bad input values
/// (`Domain`), incompatible element types (`Type`), out-of-range access
/// (`Index`), unsound multiplication (`Consistency`) and exhausted budgets
/// (`Incomplete`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    Domain,
    Type,
    Index,
    Consistency,
    Incomplete,
}

/// Unified error type for semigroup operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemigroupError {
    /// A semigroup needs at least one generator.
    #[error("there must be at least 1 generator")]
    EmptyGenerators,
    /// Generators are not all of the same concrete kind.
    #[error("generators must be of the same type: generator 0 is `{expected}`, generator {position} is `{found}`")]
    MismatchedKinds {
        expected: String,
        found: String,
        position: usize,
    },
    /// The probe multiplication at construction failed.
    #[error("generators must have a multiplication defined on them: {0}")]
    MultiplicationUndefined(ElementError),
    /// A product failed while enumerating.
    #[error("product of element {source_index} by generator column {column} is undefined: {error}")]
    UndefinedProduct {
        source_index: usize,
        column: usize,
        error: ElementError,
    },
    /// Multiplying out a caller-supplied word failed at `letter`.
    #[error("word product undefined at letter {letter}: {error}")]
    UndefinedWordProduct { letter: usize, error: ElementError },
    /// A Cayley graph edge was recomputed to a different target.
    #[error(
        "inconsistent Cayley graph edge ({source_index}, {column}): recorded {recorded}, recomputed {found}"
    )]
    InconsistentEdge {
        source_index: usize,
        column: usize,
        recorded: usize,
        found: usize,
    },
    /// An edge referred to a row that does not exist yet.
    #[error("Cayley graph has no row {row} (rows: {rows})")]
    MissingRow { row: usize, rows: usize },
    /// Generator or element index out of range.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// A word must name at least one generator.
    #[error("cannot evaluate the empty word")]
    EmptyWord,
    /// Degree parameter of a named family must be positive.
    #[error("degree must be positive, got {0}")]
    InvalidDegree(i64),
    /// Enumeration stopped on its budget before the answer was known.
    #[error("enumeration incomplete: budget exhausted after {steps} steps with {discovered} elements")]
    Incomplete { discovered: usize, steps: usize },
    /// Store or Cayley graph invariants do not hold.
    #[error("internal structure corrupted: {0}")]
    Corrupted(String),
    /// An element could not be constructed.
    #[error("invalid element: {0}")]
    InvalidElement(#[from] ElementError),
}

impl SemigroupError {
    /// Classify this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            SemigroupError::EmptyGenerators
            | SemigroupError::InvalidDegree(_)
            | SemigroupError::InvalidElement(_)
            | SemigroupError::EmptyWord => ErrorClass::Domain,
            SemigroupError::MismatchedKinds { .. }
            | SemigroupError::MultiplicationUndefined(_)
            | SemigroupError::UndefinedProduct { .. }
            | SemigroupError::UndefinedWordProduct { .. } => ErrorClass::Type,
            SemigroupError::IndexOutOfRange { .. } => ErrorClass::Index,
            SemigroupError::InconsistentEdge { .. }
            | SemigroupError::MissingRow { .. }
            | SemigroupError::Corrupted(_) => ErrorClass::Consistency,
            SemigroupError::Incomplete { .. } => ErrorClass::Incomplete,
        }
    }

    /// `true` for the fatal internal-consistency class.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.class() == ErrorClass::Consistency
    }
}
