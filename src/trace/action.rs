//! Action records emitted by the trace recorder.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Positions whose value is final and will not move again.
pub type SortedSet = BTreeSet<usize>;

/// Per-kind payload of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Unsorted starting arrangement, shown before playback begins.
    Init,
    /// Pivot chosen for the subrange `[left, right]`.
    Pivot {
        pivot: usize,
        left: usize,
        right: usize,
    },
    /// `pair.0` compared against the pivot at `pair.1`.
    Compare { pair: (usize, usize), pivot: usize },
    /// Values at the two positions exchanged.
    Swap { pair: (usize, usize), pivot: usize },
    /// `position` reached its final place.
    Sorted { position: usize },
}

impl ActionKind {
    /// Short lowercase label, matching the serialized tag.
    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::Init => "init",
            ActionKind::Pivot { .. } => "pivot",
            ActionKind::Compare { .. } => "compare",
            ActionKind::Swap { .. } => "swap",
            ActionKind::Sorted { .. } => "sorted",
        }
    }
}

/// Positions a view should emphasize for one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlight {
    /// Active pivot position.
    pub pivot: Option<usize>,
    /// Compared or swapped pair.
    pub pair: Option<(usize, usize)>,
}

/// One replayable event in a trace.
///
/// Both the snapshot and the sorted set are owned copies taken when the
/// action was recorded, so later mutation never leaks backwards in time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    #[serde(flatten)]
    pub kind: ActionKind,
    /// Sequence values at the moment of recording.
    pub snapshot: Vec<u32>,
    /// Positions known to be final at the moment of recording.
    pub sorted: SortedSet,
}

impl Action {
    /// Initial action for an unsorted sequence.
    pub fn init(values: &[u32]) -> Self {
        Self {
            kind: ActionKind::Init,
            snapshot: values.to_vec(),
            sorted: SortedSet::new(),
        }
    }

    /// Normalized highlight data for rendering.
    pub fn highlight(&self) -> Highlight {
        match self.kind {
            ActionKind::Init | ActionKind::Sorted { .. } => Highlight::default(),
            ActionKind::Pivot { pivot, .. } => Highlight {
                pivot: Some(pivot),
                pair: None,
            },
            ActionKind::Compare { pair, pivot } | ActionKind::Swap { pair, pivot } => Highlight {
                pivot: Some(pivot),
                pair: Some(pair),
            },
        }
    }

    /// Check whether `position` is final at this point in the trace.
    #[inline]
    pub fn is_sorted(&self, position: usize) -> bool {
        self.sorted.contains(&position)
    }

    /// Number of positions in the snapshot.
    #[inline]
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    /// True for the snapshot of an empty sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }
}
