//! Named semigroup families built from a degree parameter.
//!
//! These are thin factories: they validate `n`, produce a generating set,
//! and hand it to [`Semigroup::new`]. No enumeration logic lives here.

use crate::element::{Element, Transformation};
use crate::semigroup::Semigroup;
use crate::semigroup_error::SemigroupError;

/// A family of semigroups indexed by a positive degree.
pub trait Family {
    type Item: Element;

    /// Generating set for degree `n`.
    ///
    /// # Errors
    /// `InvalidDegree` if `n < 1` or `n` does not fit the element type.
    fn generators(n: i64) -> Result<Vec<Self::Item>, SemigroupError>;

    /// The semigroup of degree `n`.
    fn build(n: i64) -> Result<Semigroup<Self::Item>, SemigroupError> {
        Semigroup::new(Self::generators(n)?)
    }
}

fn checked_degree(n: i64) -> Result<u32, SemigroupError> {
    if n < 1 {
        return Err(SemigroupError::InvalidDegree(n));
    }
    u32::try_from(n).map_err(|_| SemigroupError::InvalidDegree(n))
}

/// Images `[first.., 2, 3, .., n-1]`.
fn with_tail(head: &[u32], n: u32) -> Result<Transformation, SemigroupError> {
    let images = head.iter().copied().chain(2..n).collect();
    Ok(Transformation::new(images)?)
}

/// Cycle `0 -> n-1`, `i -> i-1`.
fn cycle(n: u32) -> Result<Transformation, SemigroupError> {
    let images = std::iter::once(n - 1).chain(0..n - 1).collect();
    Ok(Transformation::new(images)?)
}

/// All `n^n` maps on `n` points, generated by a transposition, a collapse
/// and an `n`-cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullTransformationMonoid;

impl Family for FullTransformationMonoid {
    type Item = Transformation;

    fn generators(n: i64) -> Result<Vec<Transformation>, SemigroupError> {
        let n = checked_degree(n)?;
        Ok(match n {
            1 => vec![Transformation::identity(1)],
            2 => vec![with_tail(&[1, 0], 2)?, with_tail(&[0, 0], 2)?],
            _ => vec![
                with_tail(&[1, 0], n)?,
                with_tail(&[0, 0], n)?,
                cycle(n)?,
            ],
        })
    }
}

/// All `n!` permutations on `n` points, generated by a transposition and an
/// `n`-cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymmetricGroup;

impl Family for SymmetricGroup {
    type Item = Transformation;

    fn generators(n: i64) -> Result<Vec<Transformation>, SemigroupError> {
        let n = checked_degree(n)?;
        Ok(match n {
            1 => vec![Transformation::identity(1)],
            2 => vec![with_tail(&[1, 0], 2)?],
            _ => vec![with_tail(&[1, 0], n)?, cycle(n)?],
        })
    }
}

/// Shorthand for [`FullTransformationMonoid::build`].
///
/// # Example
/// ```rust
/// use semigroup_sieve::families::full_transformation_monoid;
/// let mut s = full_transformation_monoid(3).unwrap();
/// assert_eq!(s.size().unwrap(), 27);
/// assert!(full_transformation_monoid(0).is_err());
/// ```
pub fn full_transformation_monoid(n: i64) -> Result<Semigroup<Transformation>, SemigroupError> {
    FullTransformationMonoid::build(n)
}

/// Shorthand for [`SymmetricGroup::build`].
pub fn symmetric_group(n: i64) -> Result<Semigroup<Transformation>, SemigroupError> {
    SymmetricGroup::build(n)
}
