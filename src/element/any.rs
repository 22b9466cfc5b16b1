//! `AnyElement`: tagged variant over the element kinds the crate ships.
//!
//! Useful when generators arrive from a source that does not fix the
//! concrete type statically. Products are only defined within one variant;
//! [`Element::kind`] reports the variant so semigroup construction can reject
//! mixed generator lists up front.

use std::borrow::Cow;

use super::matrix::Matrix;
use super::semiring::{BooleanSemiring, Integers, MaxPlusSemiring, MinPlusSemiring};
use super::transformation::Transformation;
use super::{Element, ElementError};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyElement {
    Transformation(Transformation),
    BooleanMat(Matrix<BooleanSemiring>),
    IntegerMat(Matrix<Integers>),
    MaxPlusMat(Matrix<MaxPlusSemiring>),
    MinPlusMat(Matrix<MinPlusSemiring>),
}

impl AnyElement {
    /// Variant tag.
    pub fn tag(&self) -> &'static str {
        match self {
            AnyElement::Transformation(_) => "Transformation",
            AnyElement::BooleanMat(_) => "BooleanMat",
            AnyElement::IntegerMat(_) => "IntegerMat",
            AnyElement::MaxPlusMat(_) => "MaxPlusMat",
            AnyElement::MinPlusMat(_) => "MinPlusMat",
        }
    }
}

impl Element for AnyElement {
    fn try_mul(&self, rhs: &Self) -> Result<Self, ElementError> {
        use AnyElement::*;
        match (self, rhs) {
            (Transformation(a), Transformation(b)) => a.try_mul(b).map(Transformation),
            (BooleanMat(a), BooleanMat(b)) => a.try_mul(b).map(BooleanMat),
            (IntegerMat(a), IntegerMat(b)) => a.try_mul(b).map(IntegerMat),
            (MaxPlusMat(a), MaxPlusMat(b)) => a.try_mul(b).map(MaxPlusMat),
            (MinPlusMat(a), MinPlusMat(b)) => a.try_mul(b).map(MinPlusMat),
            _ => Err(ElementError::KindMismatch {
                left: self.tag().to_owned(),
                right: rhs.tag().to_owned(),
            }),
        }
    }

    fn kind(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.tag())
    }
}

impl From<Transformation> for AnyElement {
    fn from(t: Transformation) -> Self {
        AnyElement::Transformation(t)
    }
}

impl From<Matrix<BooleanSemiring>> for AnyElement {
    fn from(m: Matrix<BooleanSemiring>) -> Self {
        AnyElement::BooleanMat(m)
    }
}

impl From<Matrix<Integers>> for AnyElement {
    fn from(m: Matrix<Integers>) -> Self {
        AnyElement::IntegerMat(m)
    }
}

impl From<Matrix<MaxPlusSemiring>> for AnyElement {
    fn from(m: Matrix<MaxPlusSemiring>) -> Self {
        AnyElement::MaxPlusMat(m)
    }
}

impl From<Matrix<MinPlusSemiring>> for AnyElement {
    fn from(m: Matrix<MinPlusSemiring>) -> Self {
        AnyElement::MinPlusMat(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_variant_multiplies() {
        let a: AnyElement = Transformation::new(vec![1, 0]).unwrap().into();
        let id: AnyElement = Transformation::identity(2).into();
        assert_eq!(a.try_mul(&a).unwrap(), id);
        assert_eq!(a.kind(), "Transformation");
    }

    #[test]
    fn mixed_variants_are_undefined() {
        let a: AnyElement = Transformation::identity(2).into();
        let b: AnyElement = Matrix::<BooleanSemiring>::identity(2).into();
        assert_eq!(
            a.try_mul(&b).unwrap_err(),
            ElementError::KindMismatch {
                left: "Transformation".into(),
                right: "BooleanMat".into()
            }
        );
        assert_ne!(a.kind(), b.kind());
    }
}
