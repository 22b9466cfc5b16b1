//! Configuration for the enumeration engine and the caps callers impose.

use serde::{Deserialize, Serialize};

/// Caps on the *total* work an [`Enumerator`](super::Enumerator) performs
/// over its lifetime. Both limits are checked between steps, so a run may
/// end with up to one row of products (one per generator) past
/// `max_elements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Budget {
    /// Maximum number of frontier rows processed.
    pub max_steps: Option<usize>,
    /// Stop once at least this many elements are known.
    pub max_elements: Option<usize>,
}

impl Budget {
    /// No caps: run to saturation.
    pub const UNLIMITED: Budget = Budget {
        max_steps: None,
        max_elements: None,
    };

    pub fn steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::UNLIMITED
        }
    }

    pub fn elements(max_elements: usize) -> Self {
        Self {
            max_elements: Some(max_elements),
            ..Self::UNLIMITED
        }
    }

    /// `true` once `steps`/`discovered` reach either cap.
    #[inline]
    pub fn exhausted(&self, steps: usize, discovered: usize) -> bool {
        self.max_steps.is_some_and(|m| steps >= m)
            || self.max_elements.is_some_and(|m| discovered >= m)
    }

    /// Rows still allowed before the step cap is hit.
    #[inline]
    pub(crate) fn remaining_steps(&self, steps: usize) -> usize {
        self.max_steps.map_or(usize::MAX, |m| m.saturating_sub(steps))
    }
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationConfig {
    /// Budget applied by every expanding query on a
    /// [`Semigroup`](crate::semigroup::Semigroup).
    pub budget: Budget,
    /// Frontier rows whose products are computed together. Only the
    /// `rayon` path uses batches larger than one row.
    pub batch_size: usize,
    /// Emit a `debug!` progress line every this many steps (0 disables).
    pub report_interval: usize,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            budget: Budget::UNLIMITED,
            batch_size: 64,
            report_interval: 10_000,
        }
    }
}

impl EnumerationConfig {
    pub fn with_budget(budget: Budget) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }
}
