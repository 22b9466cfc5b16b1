//! Enumerator: closure of a generating set under right multiplication.
//!
//! The engine owns an [`ElementStore`] and a [`CayleyGraph`]. Generators are
//! interned first, in input order, and seed the frontier. One *step* pops the
//! smallest frontier index `i` and, for every generator column `g` whose edge
//! is not yet known, computes `store[i] * store[g]`, interns it, records the
//! edge, and pushes the product onto the frontier if it is new. Frontier
//! indices are popped in discovery order (breadth-first), which keeps the
//! recovered words short.
//!
//! The engine is `Running` until the frontier empties, then `Saturated`: at
//! that point every element's product with every generator is known and the
//! store holds the whole semigroup. Every run can be capped with a
//! [`Budget`]; a capped run that stops early reports
//! [`Progress::Incomplete`] instead of running forever on a semigroup that is
//! too large (or infinite).
//!
//! With the `rayon` feature, [`Enumerator::run_parallel`] computes the
//! products of a batch of frontier rows in parallel and then interns them
//! sequentially in `(row, column)` order, so index assignment is identical to
//! the serial engine.

use std::collections::VecDeque;
use std::ops::Range;

use super::cayley::CayleyGraph;
use super::config::{Budget, EnumerationConfig};
use super::store::ElementStore;
use crate::debug_invariants::DebugInvariants;
use crate::element::Element;
use crate::semigroup_error::SemigroupError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumerationState {
    Running,
    Saturated,
}

/// Outcome of a (possibly capped) run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The frontier is empty; the store is the whole semigroup.
    Saturated,
    /// A `run_until` predicate matched this freshly discovered index.
    Found(usize),
    /// The budget ran out first.
    Incomplete { discovered: usize, steps: usize },
}

impl Progress {
    #[inline]
    pub fn is_saturated(&self) -> bool {
        matches!(self, Progress::Saturated)
    }

    /// Turn `Incomplete` into [`SemigroupError::Incomplete`].
    pub fn complete(self) -> Result<Progress, SemigroupError> {
        match self {
            Progress::Incomplete { discovered, steps } => {
                Err(SemigroupError::Incomplete { discovered, steps })
            }
            done => Ok(done),
        }
    }
}

/// What one step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Frontier row that was expanded.
    pub row: usize,
    /// Indices interned for the first time during this step.
    pub fresh: Range<usize>,
}

#[derive(Clone, Debug)]
pub struct Enumerator<E: Element> {
    store: ElementStore<E>,
    graph: CayleyGraph,
    frontier: VecDeque<usize>,
    state: EnumerationState,
    steps: usize,
    config: EnumerationConfig,
}

impl<E: Element> Enumerator<E> {
    /// Seed a new engine with `generators`. Equal generators share one
    /// index and one Cayley graph column.
    pub fn new(generators: &[E]) -> Self {
        Self::with_config(generators, EnumerationConfig::default())
    }

    pub fn with_config(generators: &[E], config: EnumerationConfig) -> Self {
        let mut store = ElementStore::with_capacity(generators.len());
        for g in generators {
            store.intern(g.clone());
        }
        let degree = store.len();
        let mut graph = CayleyGraph::new(degree);
        for _ in 0..degree {
            graph.add_row();
        }
        let state = if degree == 0 {
            EnumerationState::Saturated
        } else {
            EnumerationState::Running
        };
        log::debug!(
            "enumerator seeded with {} generators ({} distinct)",
            generators.len(),
            degree
        );
        Self {
            store,
            graph,
            frontier: (0..degree).collect(),
            state,
            steps: 0,
            config,
        }
    }

    #[inline]
    pub fn store(&self) -> &ElementStore<E> {
        &self.store
    }

    #[inline]
    pub fn graph(&self) -> &CayleyGraph {
        &self.graph
    }

    #[inline]
    pub fn state(&self) -> EnumerationState {
        self.state
    }

    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.state == EnumerationState::Saturated
    }

    /// Frontier rows processed so far.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Number of distinct generators (Cayley graph columns).
    #[inline]
    pub fn nr_columns(&self) -> usize {
        self.graph.degree()
    }

    #[inline]
    pub fn config(&self) -> &EnumerationConfig {
        &self.config
    }

    /// Replace the configuration; takes effect from the next step.
    pub fn set_config(&mut self, config: EnumerationConfig) {
        self.config = config;
    }

    /// Expand the next frontier row. Returns `None` once saturated.
    ///
    /// # Errors
    /// `UndefinedProduct` if a multiplication fails (the row stays on the
    /// frontier), `InconsistentEdge` if multiplication is not a function.
    pub fn step(&mut self) -> Result<Option<StepReport>, SemigroupError> {
        let Some(row) = self.frontier.pop_front() else {
            self.saturate();
            return Ok(None);
        };
        let before = self.store.len();
        for column in 0..self.graph.degree() {
            if self.graph.get_edge(row, column).is_some() {
                continue;
            }
            let product = match self.store[row].try_mul(&self.store[column]) {
                Ok(p) => p,
                Err(error) => {
                    self.frontier.push_front(row);
                    return Err(SemigroupError::UndefinedProduct {
                        source_index: row,
                        column,
                        error,
                    });
                }
            };
            self.record(row, column, product)?;
        }
        Ok(Some(self.finish_step(row, before)))
    }

    /// Intern `product` and record the edge `row * column`.
    fn record(&mut self, row: usize, column: usize, product: E) -> Result<(), SemigroupError> {
        let (target, fresh) = self.store.intern(product);
        if fresh {
            let added = self.graph.add_row();
            debug_assert_eq!(added, target);
            self.frontier.push_back(target);
        }
        self.graph.set_edge(row, column, target)
    }

    fn finish_step(&mut self, row: usize, before: usize) -> StepReport {
        self.steps += 1;
        log::trace!(
            "step {}: row {} -> {} new elements",
            self.steps,
            row,
            self.store.len() - before
        );
        if self.config.report_interval > 0 && self.steps % self.config.report_interval == 0 {
            log::debug!(
                "enumeration progress: {} steps, {} elements, {} on frontier",
                self.steps,
                self.store.len(),
                self.frontier.len()
            );
        }
        if self.frontier.is_empty() {
            self.saturate();
        }
        StepReport {
            row,
            fresh: before..self.store.len(),
        }
    }

    fn saturate(&mut self) {
        if self.state == EnumerationState::Saturated {
            return;
        }
        self.state = EnumerationState::Saturated;
        log::debug!(
            "saturated: {} elements after {} steps",
            self.store.len(),
            self.steps
        );
        self.store.debug_assert_invariants();
        self.graph.debug_assert_invariants();
    }

    fn out_of_budget(&self, budget: &Budget) -> Option<Progress> {
        if !budget.exhausted(self.steps, self.store.len()) {
            return None;
        }
        log::warn!(
            "enumeration budget exhausted: {} elements, {} steps, {} rows pending",
            self.store.len(),
            self.steps,
            self.frontier.len()
        );
        Some(Progress::Incomplete {
            discovered: self.store.len(),
            steps: self.steps,
        })
    }

    /// Step until saturated or `budget` is exhausted.
    pub fn run(&mut self, budget: &Budget) -> Result<Progress, SemigroupError> {
        loop {
            if self.is_saturated() {
                return Ok(Progress::Saturated);
            }
            if let Some(stop) = self.out_of_budget(budget) {
                return Ok(stop);
            }
            self.step()?;
        }
    }

    /// Run to saturation with no cap.
    pub fn run_to_saturation(&mut self) -> Result<(), SemigroupError> {
        self.run(&Budget::UNLIMITED).map(|_| ())
    }

    /// Perform at most `n` more steps.
    pub fn run_steps(&mut self, n: usize) -> Result<Progress, SemigroupError> {
        self.run(&Budget::steps(self.steps.saturating_add(n)))
    }

    /// Step until `pred` holds for a newly interned element, the engine
    /// saturates, or `budget` is exhausted. Elements known before the call
    /// are not re-tested.
    pub fn run_until<F>(&mut self, mut pred: F, budget: &Budget) -> Result<Progress, SemigroupError>
    where
        F: FnMut(usize, &E) -> bool,
    {
        loop {
            if self.is_saturated() {
                return Ok(Progress::Saturated);
            }
            if let Some(stop) = self.out_of_budget(budget) {
                return Ok(stop);
            }
            if let Some(report) = self.step()? {
                if let Some(hit) = report.fresh.clone().find(|&i| pred(i, &self.store[i])) {
                    return Ok(Progress::Found(hit));
                }
            }
        }
    }
}

#[cfg(feature = "rayon")]
impl<E: Element + Send + Sync> Enumerator<E> {
    /// Like [`run`](Self::run), computing products for up to
    /// `config.batch_size` frontier rows in parallel per round.
    pub fn run_parallel(&mut self, budget: &Budget) -> Result<Progress, SemigroupError> {
        loop {
            if self.is_saturated() {
                return Ok(Progress::Saturated);
            }
            if let Some(stop) = self.out_of_budget(budget) {
                return Ok(stop);
            }
            let rows = self
                .config
                .batch_size
                .max(1)
                .min(budget.remaining_steps(self.steps));
            self.step_batch(rows)?;
        }
    }

    fn step_batch(&mut self, max_rows: usize) -> Result<(), SemigroupError> {
        use rayon::prelude::*;

        let take = max_rows.min(self.frontier.len());
        if take == 0 {
            self.saturate();
            return Ok(());
        }
        let rows: Vec<usize> = self.frontier.drain(..take).collect();
        let degree = self.graph.degree();
        let (store, graph) = (&self.store, &self.graph);
        let products: Vec<Vec<(usize, Result<E, crate::element::ElementError>)>> = rows
            .par_iter()
            .map(|&row| {
                (0..degree)
                    .filter(|&c| graph.get_edge(row, c).is_none())
                    .map(|c| (c, store[row].try_mul(&store[c])))
                    .collect()
            })
            .collect();

        for (k, (&row, row_products)) in rows.iter().zip(products).enumerate() {
            let before = self.store.len();
            for (column, product) in row_products {
                match product {
                    Ok(p) => self.record(row, column, p)?,
                    Err(error) => {
                        for &pending in rows[k..].iter().rev() {
                            self.frontier.push_front(pending);
                        }
                        return Err(SemigroupError::UndefinedProduct {
                            source_index: row,
                            column,
                            error,
                        });
                    }
                }
            }
            self.finish_step(row, before);
        }
        Ok(())
    }
}

#[cfg(test)]
mod thread_tests {
    //! Compile-time check that engines can move across rayon workers.
    use super::*;
    use crate::element::Transformation;
    use static_assertions::assert_impl_all;

    assert_impl_all!(Enumerator<Transformation>: Send, Sync, Clone);
    assert_impl_all!(CayleyGraph: Send, Sync);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Integers, Matrix, Transformation};

    fn t(images: &[u32]) -> Transformation {
        Transformation::new(images.to_vec()).unwrap()
    }

    fn s3_gens() -> Vec<Transformation> {
        vec![t(&[1, 2, 0]), t(&[2, 1, 0])]
    }

    #[test]
    fn generators_seed_the_frontier() {
        let e = Enumerator::new(&s3_gens());
        assert_eq!(e.store().len(), 2);
        assert_eq!(e.frontier_len(), 2);
        assert_eq!(e.nr_columns(), 2);
        assert_eq!(e.state(), EnumerationState::Running);
    }

    #[test]
    fn duplicate_generators_collapse() {
        let g = t(&[1, 0]);
        let e = Enumerator::new(&[g.clone(), g.clone(), t(&[0, 0])]);
        assert_eq!(e.nr_columns(), 2);
        assert_eq!(e.store().index_of(&t(&[0, 0])), Some(1));
    }

    #[test]
    fn empty_generator_list_is_saturated() {
        let mut e = Enumerator::<Transformation>::new(&[]);
        assert!(e.is_saturated());
        assert_eq!(e.run(&Budget::UNLIMITED).unwrap(), Progress::Saturated);
        assert_eq!(e.step().unwrap(), None);
    }

    #[test]
    fn symmetric_group_saturates_at_six() {
        let mut e = Enumerator::new(&s3_gens());
        assert_eq!(e.run(&Budget::UNLIMITED).unwrap(), Progress::Saturated);
        assert_eq!(e.store().len(), 6);
        assert_eq!(e.steps(), 6);
        for i in 0..6 {
            assert!(e.graph().is_row_complete(i));
        }
        e.graph().validate_invariants().unwrap();
    }

    #[test]
    fn step_reports_fresh_range() {
        let mut e = Enumerator::new(&s3_gens());
        let r = e.step().unwrap().unwrap();
        assert_eq!(r.row, 0);
        // [1,2,0]^2 = [2,0,1] is new; [1,2,0]*[2,1,0] = [1,0,2] is new.
        assert_eq!(r.fresh, 2..4);
        assert_eq!(e.store()[2], t(&[2, 0, 1]));
        assert_eq!(e.store()[3], t(&[1, 0, 2]));
    }

    #[test]
    fn step_budget_reports_incomplete() {
        let mut e = Enumerator::new(&s3_gens());
        let p = e.run(&Budget::steps(2)).unwrap();
        assert_eq!(
            p,
            Progress::Incomplete {
                discovered: e.store().len(),
                steps: 2
            }
        );
        assert!(p.complete().is_err());
        // Resuming finishes the job.
        assert!(e.run(&Budget::UNLIMITED).unwrap().is_saturated());
        assert_eq!(e.store().len(), 6);
    }

    #[test]
    fn run_steps_is_relative() {
        let mut e = Enumerator::new(&s3_gens());
        e.run_steps(1).unwrap();
        e.run_steps(1).unwrap();
        assert_eq!(e.steps(), 2);
    }

    #[test]
    fn element_budget_caps_infinite_semigroup() {
        // [[2]] generates the powers of two: infinite until overflow.
        let two = Matrix::<Integers>::new(vec![vec![2]]).unwrap();
        let mut e = Enumerator::new(&[two]);
        let p = e.run(&Budget::elements(10)).unwrap();
        assert_eq!(
            p,
            Progress::Incomplete {
                discovered: 10,
                steps: 9
            }
        );
    }

    #[test]
    fn overflow_surfaces_as_undefined_product() {
        let two = Matrix::<Integers>::new(vec![vec![2]]).unwrap();
        let mut e = Enumerator::new(&[two]);
        let err = e.run(&Budget::UNLIMITED).unwrap_err();
        // 2^1 .. 2^62 are representable; 2^62 * 2 overflows.
        assert_eq!(
            err,
            SemigroupError::UndefinedProduct {
                source_index: 61,
                column: 0,
                error: crate::element::ElementError::Overflow
            }
        );
        assert_eq!(e.store().len(), 62);
        assert_eq!(e.frontier_len(), 1);
        assert!(!e.is_saturated());
    }

    #[test]
    fn run_until_stops_on_match() {
        let mut e = Enumerator::new(&s3_gens());
        let id = Transformation::identity(3);
        let p = e.run_until(|_, x| *x == id, &Budget::UNLIMITED).unwrap();
        let Progress::Found(i) = p else {
            panic!("identity not found: {p:?}");
        };
        assert_eq!(e.store()[i], id);
        assert!(!e.is_saturated());
    }

    #[test]
    fn run_until_saturates_without_match() {
        let mut e = Enumerator::new(&s3_gens());
        let p = e.run_until(|_, _| false, &Budget::UNLIMITED).unwrap();
        assert_eq!(p, Progress::Saturated);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel_run_matches_serial_numbering() {
        let gens = vec![t(&[1, 0, 2, 3]), t(&[0, 0, 2, 3]), t(&[3, 0, 1, 2])];
        let mut serial = Enumerator::new(&gens);
        serial.run_to_saturation().unwrap();
        let mut parallel = Enumerator::with_config(
            &gens,
            EnumerationConfig {
                batch_size: 7,
                ..Default::default()
            },
        );
        assert!(parallel.run_parallel(&Budget::UNLIMITED).unwrap().is_saturated());
        assert_eq!(serial.store().as_slice(), parallel.store().as_slice());
        assert_eq!(serial.graph(), parallel.graph());
        assert_eq!(serial.steps(), parallel.steps());
    }
}
