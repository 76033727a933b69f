//! Quicksort visualizer - Replayable trace recording and timed playback.
//!
//! This crate records a complete, deterministic trace of Lomuto-partition
//! quicksort over a sequence of bar heights, then replays that trace one
//! action at a time for a view layer to draw.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Configuration types and random sequence generation
//! - `trace`: The instrumented sort and its immutable action log
//! - `playback`: Cursor, state machine and timer protocol over a log
//!
//! # Example
//!
//! ```rust,no_run
//! use quicksort_viz::{
//!     playback::{PlaybackController, play_blocking},
//!     schema::VisualizerConfig,
//!     trace::Action,
//! };
//!
//! let config = VisualizerConfig::default();
//! let mut controller = PlaybackController::new(&config, |action: &Action| {
//!     println!("{:?} {:?}", action.kind, action.snapshot);
//! });
//!
//! play_blocking(&mut controller);
//! ```

pub mod playback;
pub mod schema;
pub mod trace;

// WebAssembly bindings (only for wasm32 target)
#[cfg(target_arch = "wasm32")]
pub mod wasm;

// Re-export commonly used types
pub use playback::{PlaybackController, PlaybackState, Renderer, ResumeTicket};
pub use schema::{SequenceGenerator, VisualizerConfig};
pub use trace::{Action, ActionKind, Trace, record_trace};
