//! Trace recording for quicksort.
//!
//! The recorder runs the sort to completion up front and stores every
//! observable event as an [`Action`] carrying its own copy of the sequence
//! and sorted set. Playback then only reads the finished [`Trace`].
//!
//! # Action order
//!
//! ```text
//! pivot(p, [l, r])
//!   compare(j, p)        for j in l..r
//!   swap(i, j)           when value[j] < value[p]
//! swap(i, p)
//! sorted(i)
//! ... left subrange [l, i-1], then right subrange [i+1, r]
//! ```
//!
//! Single-element subranges emit one `sorted` action; empty ones emit nothing.

mod action;
mod action_log;
mod recorder;

pub use action::{Action, ActionKind, Highlight, SortedSet};
pub use action_log::{Trace, TraceError, TraceStats};
pub use recorder::{TraceRecorder, record_trace};
