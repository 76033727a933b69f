//! Playback controller over a recorded trace.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Renderer;
use crate::schema::{SequenceGenerator, VisualizerConfig};
use crate::trace::{Action, Trace, record_trace};

/// Smallest accepted delay between advances, in milliseconds.
pub const MIN_DELAY_MS: u64 = 10;

/// Playback state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Fresh log installed, nothing applied yet or no cycle started.
    Idle,
    /// Timed advance cycle is running.
    Playing,
    /// Cycle interrupted; resumable with `start`.
    Paused,
    /// Cursor reached the end of the log.
    Finished,
}

/// Token for one scheduled advance.
///
/// The host sleeps for [`ResumeTicket::delay`] and hands the ticket back to
/// [`PlaybackController::resume`]. Tickets from an earlier epoch are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeTicket {
    epoch: u64,
    delay_ms: u64,
}

impl ResumeTicket {
    /// How long to wait before resuming.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Navigable playback over a trace, driving a [`Renderer`].
///
/// Usage:
/// ```ignore
/// let mut controller = PlaybackController::new(&config, |a: &Action| draw(a));
/// let mut ticket = controller.start();
/// while let Some(t) = ticket {
///     std::thread::sleep(t.delay());
///     ticket = controller.resume(t);
/// }
/// ```
pub struct PlaybackController<R: Renderer> {
    generator: SequenceGenerator,
    trace: Trace,
    size: usize,
    cursor: usize,
    state: PlaybackState,
    delay_ms: u64,
    epoch: u64,
    current: Action,
    renderer: R,
}

impl<R: Renderer> PlaybackController<R> {
    /// Create a controller with a freshly generated sequence.
    ///
    /// The renderer receives the initial arrangement immediately.
    pub fn new(config: &VisualizerConfig, renderer: R) -> Self {
        Self::with_generator(
            SequenceGenerator::from_config(config),
            config.bar_count,
            config.delay_ms,
            renderer,
        )
    }

    /// Create a controller from an explicit generator.
    pub fn with_generator(
        mut generator: SequenceGenerator,
        size: usize,
        delay_ms: u64,
        renderer: R,
    ) -> Self {
        let values = generator.generate(size.max(1));
        Self::from_parts(generator, values, delay_ms, renderer)
    }

    /// Create a controller over a known input instead of random values.
    ///
    /// Later resets still draw from `generator`.
    pub fn with_values(
        generator: SequenceGenerator,
        values: &[u32],
        delay_ms: u64,
        renderer: R,
    ) -> Self {
        Self::from_parts(generator, values.to_vec(), delay_ms, renderer)
    }

    fn from_parts(
        generator: SequenceGenerator,
        values: Vec<u32>,
        delay_ms: u64,
        renderer: R,
    ) -> Self {
        let trace = record_trace(&values);
        let current = trace.initial_action();
        let mut controller = Self {
            generator,
            size: values.len(),
            trace,
            cursor: 0,
            state: PlaybackState::Idle,
            delay_ms: delay_ms.max(MIN_DELAY_MS),
            epoch: 0,
            current,
            renderer,
        };
        log::info!("Installed trace: {}", controller.trace.stats());
        controller.renderer.on_action(&controller.current);
        controller
    }

    /// Start or resume timed playback.
    ///
    /// Applies the action at the cursor right away and returns the ticket for
    /// the next advance. Returns `None` when already playing, when the log is
    /// empty or exhausted, or when this advance finished the log.
    pub fn start(&mut self) -> Option<ResumeTicket> {
        if self.state == PlaybackState::Playing || self.cursor >= self.trace.len() {
            return None;
        }

        // Invalidate tickets still pending from an earlier cycle.
        self.epoch += 1;
        self.transition(PlaybackState::Playing);
        self.advance_cycle()
    }

    /// Perform a scheduled advance.
    ///
    /// Stale tickets, or tickets arriving after a pause, do nothing.
    pub fn resume(&mut self, ticket: ResumeTicket) -> Option<ResumeTicket> {
        if ticket.epoch != self.epoch {
            log::debug!(
                "Dropping stale resume ticket (epoch {}, current {})",
                ticket.epoch,
                self.epoch
            );
            return None;
        }
        if self.state != PlaybackState::Playing {
            return None;
        }
        self.advance_cycle()
    }

    /// Stop the timed cycle before its next advance. Idempotent.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.transition(PlaybackState::Paused);
        }
    }

    /// Advance exactly one action without touching Playing/Paused.
    ///
    /// Returns whether an action was applied.
    pub fn step(&mut self) -> bool {
        if self.cursor >= self.trace.len() {
            return false;
        }
        self.apply_next();
        if self.cursor == self.trace.len() {
            self.transition(PlaybackState::Finished);
        }
        true
    }

    /// Install a new random sequence of `size` values (minimum 1).
    pub fn reset(&mut self, size: usize) {
        self.size = size.max(1);
        let values = self.generator.generate(self.size);
        self.install(record_trace(&values));
    }

    /// Install a new random sequence of the current size.
    pub fn reshuffle(&mut self) {
        self.reset(self.size);
    }

    /// Change the delay for future waits, clamped to [`MIN_DELAY_MS`].
    pub fn set_speed(&mut self, delay_ms: u64) {
        self.delay_ms = delay_ms.max(MIN_DELAY_MS);
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the next action to apply.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of actions in the current log.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Current sequence length.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Action most recently exposed to the renderer.
    pub fn current_action(&self) -> &Action {
        &self.current
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Replace the log wholesale and show its initial arrangement.
    fn install(&mut self, trace: Trace) {
        self.size = trace.input().len();
        self.trace = trace;
        self.cursor = 0;
        self.epoch += 1;
        self.transition(PlaybackState::Idle);
        self.current = self.trace.initial_action();
        log::info!("Installed trace: {}", self.trace.stats());
        self.renderer.on_action(&self.current);
    }

    fn advance_cycle(&mut self) -> Option<ResumeTicket> {
        self.apply_next();
        if self.cursor >= self.trace.len() {
            self.transition(PlaybackState::Finished);
            return None;
        }
        Some(ResumeTicket {
            epoch: self.epoch,
            delay_ms: self.delay_ms,
        })
    }

    fn apply_next(&mut self) {
        let action = &self.trace.actions()[self.cursor];
        assert_eq!(
            action.snapshot.len(),
            self.size,
            "action {} belongs to a log for a different sequence length",
            self.cursor
        );
        self.current = action.clone();
        self.cursor += 1;
        self.renderer.on_action(&self.current);
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.state != next {
            log::debug!("Playback {:?} -> {:?} at cursor {}", self.state, next, self.cursor);
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::ActionKind;

    fn controller(values: &[u32]) -> PlaybackController<Vec<Action>> {
        PlaybackController::with_values(
            SequenceGenerator::new(1, 1, 100),
            values,
            50,
            Vec::new(),
        )
    }

    #[test]
    fn test_new_exposes_initial_arrangement() {
        let c = controller(&[5, 3, 8, 1]);
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.cursor(), 0);
        let last = c.renderer().last().unwrap();
        assert_eq!(last.kind, ActionKind::Init);
        assert_eq!(last.snapshot, vec![5, 3, 8, 1]);
    }

    #[test]
    fn test_start_applies_first_action() {
        let mut c = controller(&[5, 3, 8, 1]);
        let ticket = c.start().unwrap();
        assert_eq!(c.state(), PlaybackState::Playing);
        assert_eq!(c.cursor(), 1);
        assert_eq!(ticket.delay_ms(), 50);
        assert!(matches!(
            c.current_action().kind,
            ActionKind::Pivot { pivot: 3, .. }
        ));
    }

    #[test]
    fn test_start_while_playing_is_noop() {
        let mut c = controller(&[5, 3, 8, 1]);
        c.start().unwrap();
        assert!(c.start().is_none());
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn test_resume_runs_to_finished() {
        let mut c = controller(&[5, 3, 8, 1]);
        let mut ticket = c.start();
        while let Some(t) = ticket {
            ticket = c.resume(t);
        }
        assert_eq!(c.state(), PlaybackState::Finished);
        assert_eq!(c.cursor(), c.len());
        assert_eq!(c.current_action().snapshot, vec![1, 3, 5, 8]);
        // Init plus every action, in log order.
        assert_eq!(c.renderer().len(), c.len() + 1);
        assert_eq!(&c.renderer()[1..], c.trace().actions());
    }

    #[test]
    fn test_pause_blocks_pending_ticket() {
        let mut c = controller(&[5, 3, 8, 1]);
        let ticket = c.start().unwrap();
        c.pause();
        assert_eq!(c.state(), PlaybackState::Paused);
        assert!(c.resume(ticket).is_none());
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn test_pause_is_idempotent() {
        let mut c = controller(&[5, 3, 8, 1]);
        c.pause();
        assert_eq!(c.state(), PlaybackState::Idle);
        c.start();
        c.pause();
        c.pause();
        assert_eq!(c.state(), PlaybackState::Paused);
    }

    #[test]
    fn test_restart_invalidates_old_ticket() {
        let mut c = controller(&[5, 3, 8, 1]);
        let old = c.start().unwrap();
        c.pause();
        let fresh = c.start().unwrap();
        assert_eq!(c.cursor(), 2);
        assert!(c.resume(old).is_none());
        assert_eq!(c.cursor(), 2);
        assert!(c.resume(fresh).is_some());
        assert_eq!(c.cursor(), 3);
    }

    #[test]
    fn test_step_keeps_status() {
        let mut c = controller(&[5, 3, 8, 1]);
        assert!(c.step());
        assert_eq!(c.state(), PlaybackState::Idle);

        c.start();
        c.pause();
        assert!(c.step());
        assert_eq!(c.state(), PlaybackState::Paused);
        assert_eq!(c.cursor(), 3);
    }

    #[test]
    fn test_step_stops_at_end() {
        let mut c = controller(&[2, 1]);
        let len = c.len();
        for _ in 0..len {
            assert!(c.step());
        }
        assert_eq!(c.state(), PlaybackState::Finished);
        assert!(!c.step());
        assert_eq!(c.cursor(), len);
        assert!(c.start().is_none());
    }

    #[test]
    fn test_reset_discards_in_flight_playback() {
        let mut c = controller(&[5, 3, 8, 1]);
        let ticket = c.start().unwrap();
        c.reset(6);
        assert_eq!(c.state(), PlaybackState::Idle);
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.size(), 6);
        assert!(c.resume(ticket).is_none());
        assert_eq!(c.cursor(), 0);

        let last = c.renderer().last().unwrap();
        assert_eq!(last.kind, ActionKind::Init);
        assert_eq!(last.snapshot.len(), 6);
    }

    #[test]
    fn test_reset_clamps_size() {
        let mut c = controller(&[5, 3]);
        c.reset(0);
        assert_eq!(c.size(), 1);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn test_reshuffle_keeps_size() {
        let mut c = controller(&[5, 3, 8, 1]);
        c.step();
        c.reshuffle();
        assert_eq!(c.size(), 4);
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.trace().input().len(), 4);
    }

    #[test]
    fn test_speed_applies_to_next_ticket() {
        let mut c = controller(&[5, 3, 8, 1]);
        let first = c.start().unwrap();
        c.set_speed(500);
        assert_eq!(first.delay_ms(), 50);
        let second = c.resume(first).unwrap();
        assert_eq!(second.delay_ms(), 500);
    }

    #[test]
    fn test_speed_is_clamped() {
        let mut c = controller(&[5, 3]);
        c.set_speed(0);
        assert_eq!(c.delay(), Duration::from_millis(MIN_DELAY_MS));
    }

    #[test]
    fn test_ticket_serializes_camel_case() {
        let mut c = controller(&[5, 3, 8, 1]);
        let ticket = c.start().unwrap();
        let json = serde_json::to_value(ticket).unwrap();
        assert_eq!(json["delayMs"], 50);
        let back: ResumeTicket = serde_json::from_value(json).unwrap();
        assert_eq!(back, ticket);
    }
}
