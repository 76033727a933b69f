//! Instrumented Lomuto quicksort that records every observable event.

use std::ops::Range;

use super::action::{Action, ActionKind, SortedSet};
use super::action_log::Trace;

/// Record the full quicksort trace of `values`.
///
/// The input is copied; the caller's slice is never touched.
pub fn record_trace(values: &[u32]) -> Trace {
    TraceRecorder::new(values).run()
}

/// Working state for one recording.
///
/// Usage:
/// ```ignore
/// let trace = TraceRecorder::new(&[5, 3, 8, 1]).run();
/// assert_eq!(trace.final_snapshot(), Some(&[1, 3, 5, 8][..]));
/// ```
pub struct TraceRecorder {
    input: Vec<u32>,
    working: Vec<u32>,
    sorted: SortedSet,
    actions: Vec<Action>,
}

impl TraceRecorder {
    /// Create a recorder over an owned copy of `values`.
    pub fn new(values: &[u32]) -> Self {
        Self {
            input: values.to_vec(),
            working: values.to_vec(),
            sorted: SortedSet::new(),
            actions: Vec::new(),
        }
    }

    /// Sort the working copy to completion and return the finished trace.
    pub fn run(mut self) -> Trace {
        // Half-open subranges. Left children are pushed last so they are
        // traced completely before their right siblings.
        let mut pending: Vec<Range<usize>> = vec![0..self.working.len()];

        while let Some(range) = pending.pop() {
            match range.len() {
                0 => {}
                1 => self.mark_sorted(range.start),
                _ => {
                    let boundary = self.partition(range.start, range.end - 1);
                    pending.push(boundary + 1..range.end);
                    pending.push(range.start..boundary);
                }
            }
        }

        log::debug!(
            "Recorded {} actions for {} values",
            self.actions.len(),
            self.input.len()
        );

        Trace::new(self.input, self.actions)
    }

    /// Lomuto partition of `[left, right]` around the value at `right`.
    ///
    /// Returns the pivot's final position.
    fn partition(&mut self, left: usize, right: usize) -> usize {
        let pivot = right;
        let pivot_value = self.working[pivot];
        self.emit(ActionKind::Pivot { pivot, left, right });

        let mut boundary = left;
        for j in left..right {
            self.emit(ActionKind::Compare {
                pair: (j, pivot),
                pivot,
            });
            if self.working[j] < pivot_value {
                self.working.swap(boundary, j);
                self.emit(ActionKind::Swap {
                    pair: (boundary, j),
                    pivot,
                });
                boundary += 1;
            }
        }

        self.working.swap(boundary, pivot);
        self.emit(ActionKind::Swap {
            pair: (boundary, pivot),
            pivot,
        });
        self.mark_sorted(boundary);

        boundary
    }

    fn mark_sorted(&mut self, position: usize) {
        self.sorted.insert(position);
        self.emit(ActionKind::Sorted { position });
    }

    fn emit(&mut self, kind: ActionKind) {
        self.actions.push(Action {
            kind,
            snapshot: self.working.clone(),
            sorted: self.sorted.clone(),
        });
    }
}
