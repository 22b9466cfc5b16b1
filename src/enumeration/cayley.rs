//! Right Cayley graph: `(element, generator column) -> element`.
//!
//! Stored as a dense row-major table with one column per distinct
//! generator, so `get_edge` is a single slice lookup. Rows are appended as
//! elements are interned; an edge, once written, never changes.
//!
//! Alongside the table the graph keeps, for every non-generator row, the
//! earliest edge that produced it. Edges are written in ascending
//! `(source, column)` order by the engine, so the first recorded edge is
//! also the lexicographically smallest one; [`CayleyGraph::backtrack`]
//! follows these to reconstruct short, deterministic words.

use crate::debug_invariants::DebugInvariants;
use crate::semigroup_error::SemigroupError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CayleyGraph {
    /// Number of generator columns.
    degree: usize,
    /// `rows * degree` slots; `None` until computed.
    edges: Vec<Option<usize>>,
    /// Earliest producing `(source, column)` per row.
    parent: Vec<Option<(usize, usize)>>,
}

impl CayleyGraph {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            edges: Vec::new(),
            parent: Vec::new(),
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn nr_rows(&self) -> usize {
        self.parent.len()
    }

    /// Append an empty row and return its index.
    pub fn add_row(&mut self) -> usize {
        let row = self.parent.len();
        self.edges.resize(self.edges.len() + self.degree, None);
        self.parent.push(None);
        row
    }

    /// Record `source * column = target`.
    ///
    /// # Errors
    /// - `MissingRow` if `source` or `target` has no row.
    /// - `IndexOutOfRange` if `column >= degree`.
    /// - `InconsistentEdge` if a different target was recorded before.
    pub fn set_edge(
        &mut self,
        source: usize,
        column: usize,
        target: usize,
    ) -> Result<(), SemigroupError> {
        let rows = self.nr_rows();
        for row in [source, target] {
            if row >= rows {
                return Err(SemigroupError::MissingRow { row, rows });
            }
        }
        if column >= self.degree {
            return Err(SemigroupError::IndexOutOfRange {
                index: column,
                len: self.degree,
            });
        }
        let slot = &mut self.edges[source * self.degree + column];
        match *slot {
            Some(recorded) if recorded != target => {
                return Err(SemigroupError::InconsistentEdge {
                    source_index: source,
                    column,
                    recorded,
                    found: target,
                });
            }
            Some(_) => return Ok(()),
            None => *slot = Some(target),
        }
        if target >= self.degree && self.parent[target].is_none() {
            self.parent[target] = Some((source, column));
        }
        Ok(())
    }

    #[inline]
    pub fn get_edge(&self, source: usize, column: usize) -> Option<usize> {
        if column >= self.degree {
            return None;
        }
        self.edges
            .get(source * self.degree + column)
            .copied()
            .flatten()
    }

    /// Outgoing slots of `source`, one per column.
    pub fn row(&self, source: usize) -> Option<&[Option<usize>]> {
        let start = source.checked_mul(self.degree)?;
        self.edges.get(start..start + self.degree)
    }

    /// `true` once every column of `source` is known.
    pub fn is_row_complete(&self, source: usize) -> bool {
        self.row(source)
            .is_some_and(|r| r.iter().all(Option::is_some))
    }

    /// Earliest recorded edge into `index`, `None` for generator rows.
    #[inline]
    pub fn predecessor(&self, index: usize) -> Option<(usize, usize)> {
        self.parent.get(index).copied().flatten()
    }

    /// Word of generator columns whose product is element `index`.
    ///
    /// Generator rows (`index < degree`) give `[index]`. Otherwise the word
    /// of the earliest producing edge's source is extended by its column.
    /// Returns `None` if `index` has no row or no recorded producer.
    pub fn backtrack(&self, index: usize) -> Option<Vec<usize>> {
        if index >= self.nr_rows() {
            return None;
        }
        let mut word = Vec::new();
        let mut current = index;
        while current >= self.degree {
            let (source, column) = self.predecessor(current)?;
            word.push(column);
            current = source;
            if word.len() > self.nr_rows() {
                // Producer chain loops; only possible with hand-built edges.
                return None;
            }
        }
        word.push(current);
        word.reverse();
        Some(word)
    }

    /// Number of letters in [`backtrack`](Self::backtrack)'s word.
    pub fn word_length(&self, index: usize) -> Option<usize> {
        if index >= self.nr_rows() {
            return None;
        }
        let mut len = 1;
        let mut current = index;
        while current >= self.degree {
            current = self.predecessor(current)?.0;
            len += 1;
            if len > self.nr_rows() + 1 {
                return None;
            }
        }
        Some(len)
    }

    /// Follow `word` (columns) from `source`, if every edge is known.
    pub fn follow(&self, source: usize, word: &[usize]) -> Option<usize> {
        word.iter()
            .try_fold(source, |at, &column| self.get_edge(at, column))
    }

    /// All known edges as `(source, column, target)`, row-major.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let degree = self.degree.max(1);
        self.edges
            .iter()
            .enumerate()
            .filter_map(move |(slot, e)| e.map(|t| (slot / degree, slot % degree, t)))
    }
}

impl DebugInvariants for CayleyGraph {
    fn validate_invariants(&self) -> Result<(), SemigroupError> {
        let rows = self.nr_rows();
        if self.edges.len() != rows * self.degree {
            return Err(SemigroupError::Corrupted(format!(
                "{} edge slots for {rows} rows of degree {}",
                self.edges.len(),
                self.degree
            )));
        }
        if let Some((source, column, target)) = self.edges().find(|&(_, _, t)| t >= rows) {
            return Err(SemigroupError::Corrupted(format!(
                "edge ({source}, {column}) points to missing row {target}"
            )));
        }
        let mut earliest = vec![None; rows];
        for (source, column, target) in self.edges() {
            earliest[target].get_or_insert((source, column));
        }
        for index in self.degree..rows {
            let recorded = self.predecessor(index);
            let scanned = earliest[index];
            if recorded != scanned {
                return Err(SemigroupError::Corrupted(format!(
                    "row {index}: recorded producer {recorded:?}, earliest edge {scanned:?}"
                )));
            }
        }
        Ok(())
    }
}
