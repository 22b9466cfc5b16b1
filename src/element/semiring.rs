//! Semirings over which [`Matrix`](super::Matrix) elements are defined.
//!
//! A semiring `(R, +, x)` has `(R, +)` a commutative monoid with identity
//! `zero`, `(R, x)` a monoid with identity `one`, both distributive laws, and
//! `zero` annihilating under `x`. Operations return `None` when the result
//! is not representable (integer overflow).

use std::fmt::Debug;
use std::hash::Hash;

/// Additive and multiplicative structure over a value type.
pub trait Semiring {
    type Value: Copy + Eq + Hash + Debug;

    /// Short tag used by [`Element::kind`](super::Element::kind).
    const NAME: &'static str;

    fn zero() -> Self::Value;
    fn one() -> Self::Value;
    fn plus(x: Self::Value, y: Self::Value) -> Option<Self::Value>;
    fn prod(x: Self::Value, y: Self::Value) -> Option<Self::Value>;
}

/// The usual ring of the integers, with checked arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Integers;

impl Semiring for Integers {
    type Value = i64;
    const NAME: &'static str = "Integers";

    fn zero() -> i64 {
        0
    }
    fn one() -> i64 {
        1
    }
    fn plus(x: i64, y: i64) -> Option<i64> {
        x.checked_add(y)
    }
    fn prod(x: i64, y: i64) -> Option<i64> {
        x.checked_mul(y)
    }
}

/// `max` as addition, `+` as multiplication; `None` is minus infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaxPlusSemiring;

impl Semiring for MaxPlusSemiring {
    type Value = Option<i64>;
    const NAME: &'static str = "MaxPlus";

    fn zero() -> Option<i64> {
        None
    }
    fn one() -> Option<i64> {
        Some(0)
    }
    fn plus(x: Option<i64>, y: Option<i64>) -> Option<Option<i64>> {
        // Option<i64> orders None below every Some.
        Some(x.max(y))
    }
    fn prod(x: Option<i64>, y: Option<i64>) -> Option<Option<i64>> {
        match (x, y) {
            (Some(a), Some(b)) => a.checked_add(b).map(Some),
            _ => Some(None),
        }
    }
}

/// `min` as addition, `+` as multiplication; `None` is plus infinity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MinPlusSemiring;

impl Semiring for MinPlusSemiring {
    type Value = Option<i64>;
    const NAME: &'static str = "MinPlus";

    fn zero() -> Option<i64> {
        None
    }
    fn one() -> Option<i64> {
        Some(0)
    }
    fn plus(x: Option<i64>, y: Option<i64>) -> Option<Option<i64>> {
        Some(match (x, y) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) | (None, Some(a)) => Some(a),
            (None, None) => None,
        })
    }
    fn prod(x: Option<i64>, y: Option<i64>) -> Option<Option<i64>> {
        match (x, y) {
            (Some(a), Some(b)) => a.checked_add(b).map(Some),
            _ => Some(None),
        }
    }
}

/// Logical `or` / `and`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BooleanSemiring;

impl Semiring for BooleanSemiring {
    type Value = bool;
    const NAME: &'static str = "Boolean";

    fn zero() -> bool {
        false
    }
    fn one() -> bool {
        true
    }
    fn plus(x: bool, y: bool) -> Option<bool> {
        Some(x || y)
    }
    fn prod(x: bool, y: bool) -> Option<bool> {
        Some(x && y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(Integers::plus(3, 4), Some(7));
        assert_eq!(Integers::prod(3, 4), Some(12));
        assert_eq!(Integers::prod(i64::MAX, 2), None);
    }

    #[test]
    fn max_plus_infinity_annihilates() {
        assert_eq!(MaxPlusSemiring::prod(None, Some(5)), Some(None));
        assert_eq!(MaxPlusSemiring::plus(None, Some(-5)), Some(Some(-5)));
        assert_eq!(MaxPlusSemiring::plus(Some(2), Some(7)), Some(Some(7)));
        assert_eq!(MaxPlusSemiring::prod(Some(2), Some(7)), Some(Some(9)));
    }

    #[test]
    fn min_plus_infinity_annihilates() {
        assert_eq!(MinPlusSemiring::prod(Some(1), None), Some(None));
        assert_eq!(MinPlusSemiring::plus(None, Some(5)), Some(Some(5)));
        assert_eq!(MinPlusSemiring::plus(Some(2), Some(7)), Some(Some(2)));
    }

    #[test]
    fn boolean() {
        assert_eq!(BooleanSemiring::plus(false, true), Some(true));
        assert_eq!(BooleanSemiring::prod(false, true), Some(false));
        assert!(!BooleanSemiring::zero());
        assert!(BooleanSemiring::one());
    }
}
