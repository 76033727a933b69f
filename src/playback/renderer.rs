//! Renderer seam between the playback controller and a view.

use crate::trace::Action;

/// Receives each action the controller applies, in log order.
pub trait Renderer {
    fn on_action(&mut self, action: &Action);
}

impl<F: FnMut(&Action)> Renderer for F {
    fn on_action(&mut self, action: &Action) {
        self(action)
    }
}

/// Records every applied action; useful for headless runs and tests.
impl Renderer for Vec<Action> {
    fn on_action(&mut self, action: &Action) {
        self.push(action.clone());
    }
}
