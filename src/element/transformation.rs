//! `Transformation`: a total map `{0..n} -> {0..n}` stored by its images.
//!
//! Products compose left to right: `(x * y)[i] = y[x[i]]`, i.e. apply `x`
//! first. This matches the convention that a word `[a, b, c]` evaluates to
//! `a * b * c` and that the right Cayley graph follows `i -> i * g`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Element, ElementError};

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTransformation")]
pub struct Transformation {
    images: Vec<u32>,
}

/// Wire form; checked by [`Transformation::new`] on the way in.
#[derive(Deserialize)]
struct RawTransformation {
    images: Vec<u32>,
}

impl TryFrom<RawTransformation> for Transformation {
    type Error = ElementError;

    fn try_from(raw: RawTransformation) -> Result<Self, Self::Error> {
        Self::new(raw.images)
    }
}

impl Transformation {
    /// Build from an image list; every image must be `< images.len()`.
    ///
    /// # Example
    /// ```rust
    /// use semigroup_sieve::element::Transformation;
    /// let t = Transformation::new(vec![1, 2, 0]).unwrap();
    /// assert_eq!(t.degree(), 3);
    /// assert!(Transformation::new(vec![0, 3]).is_err());
    /// ```
    pub fn new(images: Vec<u32>) -> Result<Self, ElementError> {
        let degree = images.len();
        if let Some((position, &image)) = images
            .iter()
            .enumerate()
            .find(|&(_, &im)| im as usize >= degree)
        {
            return Err(ElementError::ImageOutOfRange {
                position,
                image,
                degree,
            });
        }
        Ok(Self { images })
    }

    /// Identity transformation of degree `n`.
    pub fn identity(n: u32) -> Self {
        Self {
            images: (0..n).collect(),
        }
    }

    /// Constant map of degree `n` onto `value`, or `None` if `value >= n`.
    pub fn constant(n: u32, value: u32) -> Option<Self> {
        (value < n).then(|| Self {
            images: vec![value; n as usize],
        })
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn images(&self) -> &[u32] {
        &self.images
    }

    /// Image of point `i`.
    #[inline]
    pub fn image(&self, i: usize) -> Option<u32> {
        self.images.get(i).copied()
    }

    /// Number of distinct images.
    pub fn rank(&self) -> usize {
        let mut seen = vec![false; self.degree()];
        let mut rank = 0;
        for &im in &self.images {
            if !std::mem::replace(&mut seen[im as usize], true) {
                rank += 1;
            }
        }
        rank
    }

    /// `true` if the map is a bijection.
    #[inline]
    pub fn is_permutation(&self) -> bool {
        self.rank() == self.degree()
    }
}

impl Element for Transformation {
    fn try_mul(&self, rhs: &Self) -> Result<Self, ElementError> {
        if self.degree() != rhs.degree() {
            return Err(ElementError::DegreeMismatch {
                left: self.degree(),
                right: rhs.degree(),
            });
        }
        let images = self
            .images
            .iter()
            .map(|&i| rhs.images[i as usize])
            .collect();
        Ok(Self { images })
    }
}

impl fmt::Debug for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transformation({:?})", self.images)
    }
}

impl fmt::Display for Transformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TryFrom<Vec<u32>> for Transformation {
    type Error = ElementError;

    fn try_from(images: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(images)
    }
}
