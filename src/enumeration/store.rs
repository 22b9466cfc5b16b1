//! ElementStore: canonical index assignment for discovered elements.
//!
//! Every element gets a dense `usize` index the first time it is interned.
//! Indices follow discovery order, so a deterministic generator order and
//! traversal order give a deterministic numbering.

use hashbrown::HashMap;

use crate::debug_invariants::DebugInvariants;
use crate::element::Element;
use crate::semigroup_error::SemigroupError;

/// `ElementStore` maintains:
/// - `elements`: index → element, in discovery order,
/// - `index`: element → index, used to deduplicate products.
///
/// # Invariants
///
/// - `elements.len() == index.len()`.
/// - `index[&elements[i]] == i` for every `i`; no two indices hold equal
///   elements.
///
/// The store is append-only: nothing is ever removed or replaced.
#[derive(Clone, Debug)]
pub struct ElementStore<E: Element> {
    elements: Vec<E>,
    index: HashMap<E, usize>,
}

impl<E: Element> Default for ElementStore<E> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<E: Element> ElementStore<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Return the index of `e`, assigning the next one if `e` is new.
    ///
    /// The flag is `true` when `e` was not previously stored.
    ///
    /// # Complexity
    /// Amortized **O(1)** plus one hash and at most one equality probe
    /// per collision.
    pub fn intern(&mut self, e: E) -> (usize, bool) {
        use hashbrown::hash_map::Entry;
        match self.index.entry(e) {
            Entry::Occupied(o) => (*o.get(), false),
            Entry::Vacant(v) => {
                let idx = self.elements.len();
                self.elements.push(v.key().clone());
                v.insert(idx);
                (idx, true)
            }
        }
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&E> {
        self.elements.get(idx)
    }

    #[inline]
    pub fn index_of(&self, e: &E) -> Option<usize> {
        self.index.get(e).copied()
    }

    #[inline]
    pub fn contains(&self, e: &E) -> bool {
        self.index.contains_key(e)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.elements.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[E] {
        &self.elements
    }
}

impl<E: Element> std::ops::Index<usize> for ElementStore<E> {
    type Output = E;

    fn index(&self, idx: usize) -> &E {
        &self.elements[idx]
    }
}

impl<E: Element> DebugInvariants for ElementStore<E> {
    fn validate_invariants(&self) -> Result<(), SemigroupError> {
        if self.elements.len() != self.index.len() {
            return Err(SemigroupError::Corrupted(format!(
                "{} elements but {} index entries",
                self.elements.len(),
                self.index.len()
            )));
        }
        for (i, e) in self.elements.iter().enumerate() {
            match self.index.get(e) {
                Some(&j) if j == i => {}
                Some(&j) => {
                    return Err(SemigroupError::Corrupted(format!(
                        "element {i} maps back to index {j}"
                    )));
                }
                None => {
                    return Err(SemigroupError::Corrupted(format!(
                        "element {i} missing from index"
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Transformation;

    fn t(images: &[u32]) -> Transformation {
        Transformation::new(images.to_vec()).unwrap()
    }

    #[test]
    fn intern_assigns_sequential_indices() {
        let mut s = ElementStore::new();
        assert_eq!(s.intern(t(&[1, 0])), (0, true));
        assert_eq!(s.intern(t(&[0, 0])), (1, true));
        assert_eq!(s.intern(t(&[1, 0])), (0, false));
        assert_eq!(s.intern(t(&[1, 1])), (2, true));
        assert_eq!(s.len(), 3);
        s.validate_invariants().unwrap();
    }

    #[test]
    fn lookup_both_directions() {
        let mut s = ElementStore::with_capacity(4);
        s.intern(t(&[0, 1, 2]));
        s.intern(t(&[2, 1, 0]));
        assert_eq!(s.index_of(&t(&[2, 1, 0])), Some(1));
        assert_eq!(s.index_of(&t(&[0, 0, 0])), None);
        assert_eq!(s.get(0), Some(&t(&[0, 1, 2])));
        assert_eq!(s.get(2), None);
        assert_eq!(s[1], t(&[2, 1, 0]));
        assert!(s.contains(&t(&[0, 1, 2])));
    }

    #[test]
    fn iteration_follows_discovery_order() {
        let mut s = ElementStore::new();
        for images in [[2u32, 2, 2], [0, 0, 0], [1, 1, 1], [0, 0, 0]] {
            s.intern(t(&images));
        }
        let order: Vec<u32> = s.iter().map(|e| e.images()[0]).collect();
        assert_eq!(order, vec![2, 0, 1]);
    }

    #[test]
    fn empty_store() {
        let s: ElementStore<Transformation> = ElementStore::default();
        assert!(s.is_empty());
        s.validate_invariants().unwrap();
    }
}
