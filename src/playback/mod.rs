//! Timed and single-step playback of recorded traces.
//!
//! The controller never sleeps. Each timed advance hands back a
//! [`ResumeTicket`]; the host waits for the ticket's delay (a thread sleep,
//! a browser timeout) and passes the ticket to
//! [`PlaybackController::resume`]. Reset, reshuffle and start bump the
//! controller's epoch, so a timer that fires after any of them is a no-op.
//!
//! ```text
//!            start              log end
//!   Idle ──────────► Playing ──────────► Finished
//!    ▲                 │  ▲
//!    │           pause │  │ start
//!    │                 ▼  │
//!    └──── reset ───  Paused
//! ```

mod controller;
#[cfg(not(target_arch = "wasm32"))]
mod driver;
mod renderer;

pub use controller::{MIN_DELAY_MS, PlaybackController, PlaybackState, ResumeTicket};
#[cfg(not(target_arch = "wasm32"))]
pub use driver::{play_blocking, play_with_timer};
pub use renderer::Renderer;
