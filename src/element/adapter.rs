//! Adapter for foreign values that lack an [`Element`] impl.
//!
//! The wrapped type supplies equality and hashing; multiplication comes from
//! a plain function pointer that returns `None` when the product is
//! undefined. Two adapters compare equal when their values do. The function
//! pointer is part of [`Element::kind`] instead, so a generator list that
//! mixes operations is rejected when the semigroup is built.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Element, ElementError};

/// Multiplication supplied for an adapted type.
pub type AdaptedOp<T> = fn(&T, &T) -> Option<T>;

#[derive(Clone)]
pub struct Adapter<T> {
    value: T,
    op: AdaptedOp<T>,
}

impl<T> Adapter<T> {
    /// Wrap `value`, multiplying with `op`.
    ///
    /// # Example
    /// ```rust
    /// use semigroup_sieve::element::{Adapter, Element};
    /// let mul_mod_10 = |a: &u64, b: &u64| Some(a * b % 10);
    /// let x = Adapter::new(3u64, mul_mod_10);
    /// assert_eq!(*x.try_mul(&x).unwrap().value(), 9);
    /// ```
    pub fn new(value: T, op: AdaptedOp<T>) -> Self {
        Self { value, op }
    }

    /// Wrap each value with the same operation.
    pub fn wrap_all(values: impl IntoIterator<Item = T>, op: AdaptedOp<T>) -> Vec<Self> {
        values.into_iter().map(|v| Self::new(v, op)).collect()
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T> Element for Adapter<T>
where
    T: Clone + Eq + Hash + fmt::Debug,
{
    fn try_mul(&self, rhs: &Self) -> Result<Self, ElementError> {
        (self.op)(&self.value, &rhs.value)
            .map(|value| Self { value, op: self.op })
            .ok_or_else(|| {
                ElementError::Undefined(format!("{:?} * {:?}", self.value, rhs.value))
            })
    }

    /// The wrapped type plus the address of `op`, so generators wrapped
    /// with different multiplications never share a kind.
    fn kind(&self) -> Cow<'static, str> {
        Cow::Owned(format!(
            "Adapter<{}>@{:p}",
            std::any::type_name::<T>(),
            self.op as *const ()
        ))
    }
}

impl<T: PartialEq> PartialEq for Adapter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Adapter<T> {}

impl<T: Hash> Hash for Adapter<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Adapter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Adapter").field(&self.value).finish()
    }
}
