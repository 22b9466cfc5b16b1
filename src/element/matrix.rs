//! Square matrices over a [`Semiring`], multiplied with the semiring's
//! `plus` and `prod`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use super::semiring::Semiring;
use super::{Element, ElementError};

/// Row-major square matrix of dimension `dim`.
pub struct Matrix<S: Semiring> {
    dim: usize,
    entries: Vec<S::Value>,
    _semiring: PhantomData<S>,
}

impl<S: Semiring> Matrix<S> {
    /// Build from rows; all rows must have `rows.len()` entries.
    pub fn new(rows: Vec<Vec<S::Value>>) -> Result<Self, ElementError> {
        let dim = rows.len();
        let mut entries = Vec::with_capacity(dim * dim);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != dim {
                return Err(ElementError::NotSquare {
                    row,
                    len: values.len(),
                    expected: dim,
                });
            }
            entries.extend(values);
        }
        Ok(Self::from_entries(dim, entries))
    }

    fn from_entries(dim: usize, entries: Vec<S::Value>) -> Self {
        Self {
            dim,
            entries,
            _semiring: PhantomData,
        }
    }

    /// Identity matrix: `one` on the diagonal, `zero` elsewhere.
    pub fn identity(dim: usize) -> Self {
        let mut entries = vec![S::zero(); dim * dim];
        for i in 0..dim {
            entries[i * dim + i] = S::one();
        }
        Self::from_entries(dim, entries)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<S::Value> {
        (row < self.dim && col < self.dim).then(|| self.entries[row * self.dim + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[S::Value]> + '_ {
        // chunks(0) panics; an empty matrix has no rows anyway.
        self.entries.chunks(self.dim.max(1))
    }
}

impl<S: Semiring> Element for Matrix<S> {
    fn try_mul(&self, rhs: &Self) -> Result<Self, ElementError> {
        if self.dim != rhs.dim {
            return Err(ElementError::DegreeMismatch {
                left: self.dim,
                right: rhs.dim,
            });
        }
        let n = self.dim;
        let mut entries = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                let mut acc = S::zero();
                for k in 0..n {
                    let term = S::prod(self.entries[i * n + k], rhs.entries[k * n + j])
                        .ok_or(ElementError::Overflow)?;
                    acc = S::plus(acc, term).ok_or(ElementError::Overflow)?;
                }
                entries.push(acc);
            }
        }
        Ok(Self::from_entries(n, entries))
    }
}

// Manual impls keep the bounds on `S::Value` rather than on the marker `S`.

impl<S: Semiring> Clone for Matrix<S> {
    fn clone(&self) -> Self {
        Self::from_entries(self.dim, self.entries.clone())
    }
}

impl<S: Semiring> PartialEq for Matrix<S> {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.entries == other.entries
    }
}

impl<S: Semiring> Eq for Matrix<S> {}

impl<S: Semiring> Hash for Matrix<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dim.hash(state);
        self.entries.hash(state);
    }
}

impl<S: Semiring> fmt::Debug for Matrix<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Matrix(", S::NAME)?;
        f.debug_list().entries(self.rows()).finish()?;
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::semiring::{BooleanSemiring, Integers, MaxPlusSemiring};

    #[test]
    fn ragged_rows_rejected() {
        let err = Matrix::<Integers>::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            ElementError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn integer_product() {
        let a = Matrix::<Integers>::new(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::<Integers>::new(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let ab = a.try_mul(&b).unwrap();
        assert_eq!(ab, Matrix::new(vec![vec![2, 1], vec![4, 3]]).unwrap());
        assert_eq!(a.try_mul(&Matrix::identity(2)).unwrap(), a);
    }

    #[test]
    fn integer_overflow_is_reported() {
        let big = Matrix::<Integers>::new(vec![vec![i64::MAX]]).unwrap();
        assert_eq!(big.try_mul(&big).unwrap_err(), ElementError::Overflow);
    }

    #[test]
    fn boolean_nilpotent() {
        let m = Matrix::<BooleanSemiring>::new(vec![vec![false, true], vec![false, false]])
            .unwrap();
        let sq = m.try_mul(&m).unwrap();
        assert!(sq.rows().all(|r| r.iter().all(|&v| !v)));
        assert!(sq.is_idempotent());
    }

    #[test]
    fn max_plus_product() {
        let m = Matrix::<MaxPlusSemiring>::new(vec![vec![Some(1), None], vec![Some(0), Some(2)]])
            .unwrap();
        let sq = m.try_mul(&m).unwrap();
        assert_eq!(sq.get(0, 0), Some(Some(2)));
        assert_eq!(sq.get(0, 1), Some(None));
        assert_eq!(sq.get(1, 0), Some(Some(2)));
        assert_eq!(sq.get(1, 1), Some(Some(4)));
    }

    #[test]
    fn dimension_mismatch() {
        let a = Matrix::<Integers>::identity(2);
        let b = Matrix::<Integers>::identity(3);
        assert_eq!(
            a.try_mul(&b).unwrap_err(),
            ElementError::DegreeMismatch { left: 2, right: 3 }
        );
    }
}
