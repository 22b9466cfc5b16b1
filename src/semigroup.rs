//! `Semigroup`: the query layer over an [`Enumerator`].
//!
//! A *semigroup* is a set `S` with an associative binary operation. Given a
//! subset `X`, the semigroup generated by `X` is the set of all products of
//! elements of `X`; the elements of `X` are its *generators*.
//!
//! Queries enumerate lazily: membership and factorisation only expand the
//! engine until the element turns up (or the engine saturates), while
//! `size`, `elements` and the idempotent queries need saturation. Every
//! expanding query honours the configured [`Budget`] and reports
//! [`SemigroupError::Incomplete`] when it runs out before the answer is
//! known.
//!
//! # Example
//! ```rust
//! use semigroup_sieve::element::Transformation;
//! use semigroup_sieve::semigroup::Semigroup;
//! # fn main() -> Result<(), semigroup_sieve::semigroup_error::SemigroupError> {
//! let mut s = Semigroup::new([
//!     Transformation::new(vec![1, 2, 0])?,
//!     Transformation::new(vec![2, 1, 0])?,
//! ])?;
//! // the symmetric group
//! assert_eq!(s.size()?, 6);
//! assert!(s.contains(&Transformation::new(vec![0, 1, 2])?)?);
//! assert!(!s.contains(&Transformation::new(vec![0, 1, 0])?)?);
//! assert_eq!(s.generator(0)?, &Transformation::new(vec![1, 2, 0])?);
//! # Ok(())
//! # }
//! ```

use crate::element::Element;
use crate::enumeration::{Budget, CayleyGraph, EnumerationConfig, Enumerator, Progress};
use crate::semigroup_error::SemigroupError;

#[derive(Clone, Debug)]
pub struct Semigroup<E: Element> {
    /// Generators exactly as supplied, duplicates included.
    generators: Vec<E>,
    /// Cayley graph column of each supplied generator.
    columns: Vec<usize>,
    /// First supplied position of each column.
    letters: Vec<usize>,
    engine: Enumerator<E>,
}

/// Construction checks, run once before any enumeration.
fn validate_generators<E: Element>(generators: &[E]) -> Result<(), SemigroupError> {
    let Some(first) = generators.first() else {
        return Err(SemigroupError::EmptyGenerators);
    };
    let kind = first.kind();
    if let Some((position, g)) = generators
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, g)| g.kind() != kind)
    {
        return Err(SemigroupError::MismatchedKinds {
            expected: kind.into_owned(),
            found: g.kind().into_owned(),
            position,
        });
    }
    // The first probe is `first * first`; the rest catch operands the
    // type accepts but cannot combine (e.g. differing degrees).
    for g in generators {
        first
            .try_mul(g)
            .map_err(SemigroupError::MultiplicationUndefined)?;
    }
    Ok(())
}

impl<E: Element> Semigroup<E> {
    /// Semigroup generated by `generators`.
    ///
    /// Any iterable is accepted (a `Vec`, an array, an iterator); it is
    /// collected into the generator list before validation.
    ///
    /// # Errors
    /// - `EmptyGenerators` if the list is empty.
    /// - `MismatchedKinds` if generators report different [`Element::kind`]s.
    /// - `MultiplicationUndefined` if the probe products fail.
    pub fn new<I>(generators: I) -> Result<Self, SemigroupError>
    where
        I: IntoIterator<Item = E>,
    {
        Self::with_config(generators, EnumerationConfig::default())
    }

    pub fn with_config<I>(generators: I, config: EnumerationConfig) -> Result<Self, SemigroupError>
    where
        I: IntoIterator<Item = E>,
    {
        let generators: Vec<E> = generators.into_iter().collect();
        validate_generators(&generators)?;
        let engine = Enumerator::with_config(&generators, config);

        let mut columns = Vec::with_capacity(generators.len());
        let mut letters = Vec::with_capacity(engine.nr_columns());
        for (position, g) in generators.iter().enumerate() {
            let column = engine.store().index_of(g).ok_or_else(|| {
                SemigroupError::Corrupted(format!("generator {position} was not interned"))
            })?;
            if column == letters.len() {
                letters.push(position);
            }
            columns.push(column);
        }
        log::debug!(
            "semigroup with {} generators of kind `{}`",
            generators.len(),
            generators[0].kind()
        );
        Ok(Self {
            generators,
            columns,
            letters,
            engine,
        })
    }

    // ---------------------------------------------------------------------
    // Configuration and engine access
    // ---------------------------------------------------------------------

    #[inline]
    pub fn config(&self) -> &EnumerationConfig {
        self.engine.config()
    }

    /// Budget applied by every expanding query from now on.
    pub fn set_budget(&mut self, budget: Budget) {
        let config = EnumerationConfig {
            budget,
            ..*self.engine.config()
        };
        self.engine.set_config(config);
    }

    #[inline]
    fn budget(&self) -> Budget {
        self.engine.config().budget
    }

    #[inline]
    pub fn enumerator(&self) -> &Enumerator<E> {
        &self.engine
    }

    /// The right Cayley graph discovered so far.
    #[inline]
    pub fn right_cayley_graph(&self) -> &CayleyGraph {
        self.engine.graph()
    }

    /// Run within the configured budget.
    pub fn run(&mut self) -> Result<Progress, SemigroupError> {
        let budget = self.budget();
        self.engine.run(&budget)
    }

    fn saturate(&mut self) -> Result<(), SemigroupError> {
        self.run()?.complete().map(|_| ())
    }

    // ---------------------------------------------------------------------
    // Size and state
    // ---------------------------------------------------------------------

    /// Number of elements. Enumerates fully.
    pub fn size(&mut self) -> Result<usize, SemigroupError> {
        self.saturate()?;
        Ok(self.current_size())
    }

    /// Elements discovered so far, without enumerating further.
    #[inline]
    pub fn current_size(&self) -> usize {
        self.engine.store().len()
    }

    /// `true` once the semigroup is fully enumerated.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.engine.is_saturated()
    }

    /// Enumerate until at least `limit` elements are known or the semigroup
    /// is exhausted; returns the number known.
    pub fn enumerate(&mut self, limit: usize) -> Result<usize, SemigroupError> {
        let config = self.budget();
        let budget = Budget {
            max_elements: Some(config.max_elements.map_or(limit, |m| m.min(limit))),
            ..config
        };
        match self.engine.run(&budget)? {
            Progress::Incomplete { discovered, steps } if discovered < limit => {
                Err(SemigroupError::Incomplete { discovered, steps })
            }
            _ => Ok(self.current_size()),
        }
    }

    // ---------------------------------------------------------------------
    // Generators
    // ---------------------------------------------------------------------

    /// Number of generators as supplied, duplicates included.
    #[inline]
    pub fn num_generators(&self) -> usize {
        self.generators.len()
    }

    /// The `i`-th supplied generator.
    pub fn generator(&self, i: usize) -> Result<&E, SemigroupError> {
        self.generators
            .get(i)
            .ok_or(SemigroupError::IndexOutOfRange {
                index: i,
                len: self.generators.len(),
            })
    }

    pub fn generators(&self) -> std::slice::Iter<'_, E> {
        self.generators.iter()
    }

    /// Element index of the `i`-th supplied generator.
    pub fn generator_index(&self, i: usize) -> Option<usize> {
        self.columns.get(i).copied()
    }

    // ---------------------------------------------------------------------
    // Membership and lookup
    // ---------------------------------------------------------------------

    /// Index of `x`, enumerating only as far as needed to find it.
    pub fn position(&mut self, x: &E) -> Result<Option<usize>, SemigroupError> {
        if let Some(i) = self.engine.store().index_of(x) {
            return Ok(Some(i));
        }
        if self.engine.is_saturated() || x.kind() != self.generators[0].kind() {
            return Ok(None);
        }
        let budget = self.budget();
        match self.engine.run_until(|_, e| e == x, &budget)? {
            Progress::Found(i) => Ok(Some(i)),
            Progress::Saturated => Ok(None),
            Progress::Incomplete { discovered, steps } => {
                Err(SemigroupError::Incomplete { discovered, steps })
            }
        }
    }

    /// Index of `x` among the elements found so far.
    #[inline]
    pub fn current_position(&self, x: &E) -> Option<usize> {
        self.engine.store().index_of(x)
    }

    /// Membership test with lazy expansion.
    pub fn contains(&mut self, x: &E) -> Result<bool, SemigroupError> {
        self.position(x).map(|p| p.is_some())
    }

    /// Element with index `index`, enumerating until it exists.
    pub fn at(&mut self, index: usize) -> Result<&E, SemigroupError> {
        if index >= self.current_size() {
            self.enumerate(index.saturating_add(1))?;
        }
        let len = self.current_size();
        self.engine
            .store()
            .get(index)
            .ok_or(SemigroupError::IndexOutOfRange { index, len })
    }

    /// All elements in index order. Enumerates fully.
    pub fn elements(&mut self) -> Result<std::slice::Iter<'_, E>, SemigroupError> {
        self.saturate()?;
        Ok(self.engine.store().iter())
    }

    // ---------------------------------------------------------------------
    // Words
    // ---------------------------------------------------------------------

    /// Word for the element with index `index`, over supplied generator
    /// positions: `generator(w[0]) * generator(w[1]) * ...` equals it.
    pub fn factorisation(&self, index: usize) -> Result<Vec<usize>, SemigroupError> {
        let word = self.engine.graph().backtrack(index).ok_or(
            SemigroupError::IndexOutOfRange {
                index,
                len: self.current_size(),
            },
        )?;
        Ok(word.into_iter().map(|c| self.letters[c]).collect())
    }

    /// Word for `x`, or `None` if `x` is not an element.
    pub fn word_for(&mut self, x: &E) -> Result<Option<Vec<usize>>, SemigroupError> {
        match self.position(x)? {
            Some(i) => self.factorisation(i).map(Some),
            None => Ok(None),
        }
    }

    /// Length of [`factorisation`](Self::factorisation)`(index)`.
    pub fn word_length(&self, index: usize) -> Option<usize> {
        self.engine.graph().word_length(index)
    }

    /// Multiply out a word over supplied generator positions.
    ///
    /// # Errors
    /// `EmptyWord`, `IndexOutOfRange` for a letter that names no generator,
    /// `UndefinedWordProduct` if a partial product fails.
    pub fn evaluate(&self, word: &[usize]) -> Result<E, SemigroupError> {
        let (&head, tail) = word.split_first().ok_or(SemigroupError::EmptyWord)?;
        tail.iter()
            .enumerate()
            .try_fold(self.generator(head)?.clone(), |acc, (k, &i)| {
                acc.try_mul(self.generator(i)?).map_err(|error| {
                    SemigroupError::UndefinedWordProduct {
                        letter: k + 1,
                        error,
                    }
                })
            })
    }

    /// Index of `element[i] * element[j]`, read off the right Cayley graph
    /// by following `j`'s word from `i`. Enumerates fully.
    pub fn product_by_reduction(&mut self, i: usize, j: usize) -> Result<usize, SemigroupError> {
        self.saturate()?;
        let len = self.current_size();
        if i >= len {
            return Err(SemigroupError::IndexOutOfRange { index: i, len });
        }
        let graph = self.engine.graph();
        let word = graph
            .backtrack(j)
            .ok_or(SemigroupError::IndexOutOfRange { index: j, len })?;
        graph.follow(i, &word).ok_or_else(|| {
            SemigroupError::Corrupted(format!("saturated graph is missing an edge on {i} * {j}"))
        })
    }

    // ---------------------------------------------------------------------
    // Derived structure
    // ---------------------------------------------------------------------

    /// `x * x == x`, computed from the multiplication; nothing is stored.
    #[inline]
    pub fn is_idempotent(&self, x: &E) -> bool {
        x.is_idempotent()
    }

    /// Indices of all idempotents. Enumerates fully.
    pub fn idempotents(&mut self) -> Result<Vec<usize>, SemigroupError> {
        self.saturate()?;
        Ok(self
            .engine
            .store()
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.is_idempotent().then_some(i))
            .collect())
    }

    pub fn nr_idempotents(&mut self) -> Result<usize, SemigroupError> {
        self.idempotents().map(|v| v.len())
    }

    /// Index of the two-sided identity, if the semigroup is a monoid.
    /// Enumerates fully.
    pub fn identity(&mut self) -> Result<Option<usize>, SemigroupError> {
        self.saturate()?;
        let store = self.engine.store();
        let graph = self.engine.graph();
        let columns = graph.degree();
        // Fixing every generator on both sides fixes every product of them.
        Ok((0..store.len()).find(|&i| {
            (0..columns).all(|c| {
                graph.get_edge(i, c) == Some(c)
                    && store[c].try_mul(&store[i]).is_ok_and(|p| p == store[c])
            })
        }))
    }

    pub fn is_monoid(&mut self) -> Result<bool, SemigroupError> {
        self.identity().map(|id| id.is_some())
    }
}

#[cfg(feature = "rayon")]
impl<E: Element + Send + Sync> Semigroup<E> {
    /// Enumerate within the configured budget using parallel products.
    pub fn run_parallel(&mut self) -> Result<Progress, SemigroupError> {
        let budget = self.budget();
        self.engine.run_parallel(&budget)
    }
}

impl<E: Element> TryFrom<Vec<E>> for Semigroup<E> {
    type Error = SemigroupError;

    fn try_from(generators: Vec<E>) -> Result<Self, Self::Error> {
        Self::new(generators)
    }
}
