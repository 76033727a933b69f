//! Finished action logs and their invariant checks.

use serde::{Deserialize, Serialize};

use super::action::{Action, ActionKind};

/// Immutable, fully materialized action log for one sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    input: Vec<u32>,
    actions: Vec<Action>,
}

impl Trace {
    pub(crate) fn new(input: Vec<u32>, actions: Vec<Action>) -> Self {
        Self { input, actions }
    }

    /// Unsorted input the trace was recorded from.
    pub fn input(&self) -> &[u32] {
        &self.input
    }

    /// The `init` action showing the unsorted arrangement.
    pub fn initial_action(&self) -> Action {
        Action::init(&self.input)
    }

    /// Number of recorded actions.
    #[inline]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Action at `index`, if recorded.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Action> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.actions.iter()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Snapshot after the last action (the sorted sequence).
    pub fn final_snapshot(&self) -> Option<&[u32]> {
        self.actions.last().map(|a| a.snapshot.as_slice())
    }

    /// Count actions by kind.
    pub fn stats(&self) -> TraceStats {
        TraceStats::from_trace(self)
    }

    /// Check the structural invariants every recorded trace must satisfy.
    ///
    /// - each snapshot is a permutation of the input
    /// - sorted sets only ever grow
    /// - the last action covers every position with an ascending snapshot
    pub fn verify(&self) -> Result<(), TraceError> {
        let mut expected = self.input.clone();
        expected.sort_unstable();

        let mut previous_sorted = None;
        for (index, action) in self.actions.iter().enumerate() {
            if action.snapshot.len() != self.input.len() {
                return Err(TraceError::LengthMismatch {
                    index,
                    expected: self.input.len(),
                    actual: action.snapshot.len(),
                });
            }

            let mut values = action.snapshot.clone();
            values.sort_unstable();
            if values != expected {
                return Err(TraceError::NotPermutation { index });
            }

            if let Some(position) = action.sorted.iter().find(|&&p| p >= self.input.len()) {
                return Err(TraceError::PositionOutOfRange {
                    index,
                    position: *position,
                });
            }

            if let Some(prev) = previous_sorted
                && !action.sorted.is_superset(prev)
            {
                return Err(TraceError::SortedSetShrank { index });
            }
            previous_sorted = Some(&action.sorted);
        }

        if let Some(last) = self.actions.last() {
            if last.sorted.len() != self.input.len() {
                return Err(TraceError::IncompleteSortedSet {
                    covered: last.sorted.len(),
                    total: self.input.len(),
                });
            }
            if last.snapshot.windows(2).any(|w| w[0] > w[1]) {
                return Err(TraceError::FinalNotSorted);
            }
        } else if !self.input.is_empty() {
            return Err(TraceError::IncompleteSortedSet {
                covered: 0,
                total: self.input.len(),
            });
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Action;
    type IntoIter = std::slice::Iter<'a, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Per-kind action counts for a trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    /// Number of input values.
    pub values: usize,
    /// Total recorded actions.
    pub actions: usize,
    pub pivots: usize,
    pub compares: usize,
    pub swaps: usize,
    pub sorted: usize,
}

impl TraceStats {
    /// Compute statistics from a trace.
    pub fn from_trace(trace: &Trace) -> Self {
        let mut stats = Self {
            values: trace.input.len(),
            actions: trace.len(),
            ..Default::default()
        };
        for action in trace {
            match action.kind {
                ActionKind::Init => {}
                ActionKind::Pivot { .. } => stats.pivots += 1,
                ActionKind::Compare { .. } => stats.compares += 1,
                ActionKind::Swap { .. } => stats.swaps += 1,
                ActionKind::Sorted { .. } => stats.sorted += 1,
            }
        }
        stats
    }
}

impl std::fmt::Display for TraceStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} values, {} actions ({} pivots, {} compares, {} swaps, {} sorted)",
            self.values, self.actions, self.pivots, self.compares, self.swaps, self.sorted
        )
    }
}

/// Trace invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceError {
    #[error("Action {index} snapshot has {actual} values, expected {expected}")]
    LengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
    #[error("Action {index} snapshot is not a permutation of the input")]
    NotPermutation { index: usize },
    #[error("Action {index} marks out-of-range position {position} as sorted")]
    PositionOutOfRange { index: usize, position: usize },
    #[error("Action {index} dropped a previously sorted position")]
    SortedSetShrank { index: usize },
    #[error("Final sorted set covers {covered} of {total} positions")]
    IncompleteSortedSet { covered: usize, total: usize },
    #[error("Final snapshot is not in ascending order")]
    FinalNotSorted,
}
