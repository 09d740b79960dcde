/// Tracks when the home screen becomes ready.
///
/// Home is ready on the first frame swapped after the main window became
/// visible. Readiness is reported exactly once per process.
#[derive(Debug, Default)]
pub struct HomeReadiness {
    frame_swap_armed: bool,
    home_ready_sent: bool,
}

impl HomeReadiness {
    pub fn main_window_visibility_changed(&mut self, visible: bool) {
        if visible && !self.home_ready_sent {
            self.frame_swap_armed = true;
        }
    }

    /// Returns `true` if this frame makes the home screen ready.
    pub fn frame_swapped(&mut self) -> bool {
        if !self.frame_swap_armed || self.home_ready_sent {
            return false;
        }
        self.frame_swap_armed = false;
        self.home_ready_sent = true;
        true
    }

    pub fn is_ready(&self) -> bool {
        self.home_ready_sent
    }
}
