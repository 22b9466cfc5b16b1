//! Element contract and the element types shipped with the crate.
//!
//! The enumeration engine only ever sees values through [`Element`]:
//! equality and hashing for deduplication, and [`Element::try_mul`] for the
//! semigroup operation. Anything implementing it can be enumerated.
//!
//! Two ways in:
//! - *Native* elements implement the trait directly
//!   ([`Transformation`], [`Matrix`]).
//! - *Adapted* elements wrap a foreign value together with a multiplication
//!   function ([`Adapter`]). The adapter is an explicit type, not a runtime
//!   special case.
//!
//! [`AnyElement`] is the tagged variant used when a generator list may mix
//! concrete kinds; construction rejects such lists with a type error.

pub mod adapter;
pub mod any;
pub mod matrix;
pub mod semiring;
pub mod transformation;

pub use adapter::Adapter;
pub use any::AnyElement;
pub use matrix::Matrix;
pub use semiring::{BooleanSemiring, Integers, MaxPlusSemiring, MinPlusSemiring, Semiring};
pub use transformation::Transformation;

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

use thiserror::Error;

/// Reasons a product of two elements can be undefined.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ElementError {
    /// Operands have different degrees / dimensions.
    #[error("degree mismatch: {left} vs {right}")]
    DegreeMismatch { left: usize, right: usize },
    /// Operands are different variants of a tagged element.
    #[error("cannot multiply `{left}` by `{right}`")]
    KindMismatch { left: String, right: String },
    /// Arithmetic overflow in the underlying value type.
    #[error("arithmetic overflow")]
    Overflow,
    /// Image out of range when building a transformation.
    #[error("image {image} at position {position} is out of range for degree {degree}")]
    ImageOutOfRange {
        position: usize,
        image: u32,
        degree: usize,
    },
    /// Matrix rows do not form a square.
    #[error("matrix must be square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// The multiplication reported no result for these operands.
    #[error("operation undefined: {0}")]
    Undefined(String),
}

/// Capability contract for enumerable values.
///
/// `Eq + Hash` must agree (equal values hash equally) and `try_mul` must be
/// a pure, associative function of its operands. An impure multiplication is
/// detected during enumeration as an inconsistent Cayley graph edge.
pub trait Element: Clone + Eq + Hash + Debug {
    /// The semigroup operation `self * rhs`.
    fn try_mul(&self, rhs: &Self) -> Result<Self, ElementError>;

    /// Tag identifying the concrete kind of this value. Generators of one
    /// semigroup must all share a tag.
    fn kind(&self) -> Cow<'static, str> {
        Cow::Borrowed(std::any::type_name::<Self>())
    }

    /// `self * self == self`, derived from the multiplication.
    fn is_idempotent(&self) -> bool {
        self.try_mul(self).is_ok_and(|sq| sq == *self)
    }
}
