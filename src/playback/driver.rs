//! Blocking timer loop for native hosts.

use std::thread;

use super::{PlaybackController, Renderer, ResumeTicket};

/// Play from the current cursor to the end, sleeping between advances.
///
/// Returns the number of actions applied by this call.
pub fn play_blocking<R: Renderer>(controller: &mut PlaybackController<R>) -> usize {
    play_with_timer(controller, |ticket| thread::sleep(ticket.delay()))
}

/// Play to the end, calling `wait` in place of each scheduled sleep.
///
/// `wait` may drive the controller itself (pausing, changing speed) through
/// whatever channel the host uses; the loop stops as soon as no ticket remains.
pub fn play_with_timer<R, W>(controller: &mut PlaybackController<R>, mut wait: W) -> usize
where
    R: Renderer,
    W: FnMut(&ResumeTicket),
{
    let start_cursor = controller.cursor();
    let mut ticket = controller.start();
    while let Some(t) = ticket {
        wait(&t);
        ticket = controller.resume(t);
    }
    controller.cursor() - start_cursor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackState;
    use crate::schema::SequenceGenerator;
    use crate::trace::Action;

    #[test]
    fn test_play_with_timer_drains_log() {
        let mut controller = PlaybackController::with_values(
            SequenceGenerator::new(3, 1, 50),
            &[9, 4, 7, 1, 3],
            10,
            Vec::<Action>::new(),
        );
        let mut waits = 0;
        let applied = play_with_timer(&mut controller, |_| waits += 1);

        assert_eq!(applied, controller.len());
        assert_eq!(waits, controller.len() - 1);
        assert_eq!(controller.state(), PlaybackState::Finished);
    }

    #[test]
    fn test_play_blocking_single_value() {
        let mut controller = PlaybackController::with_values(
            SequenceGenerator::new(3, 1, 50),
            &[7],
            10,
            Vec::<Action>::new(),
        );
        assert_eq!(play_blocking(&mut controller), 1);
        assert_eq!(controller.current_action().snapshot, vec![7]);
    }
}
