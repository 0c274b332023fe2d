#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Pending,
    Fired,
}

/// One-shot latch converting a continuous progress signal into a single
/// discrete "ready" event.
///
/// The gate is scoped to one loading session: there is no way back to
/// `Pending`, and `observe` reports true at most once in its lifetime.
#[derive(Debug, Default, Clone, Copy)]
pub struct TransitionGate {
    state: GateState,
}

impl TransitionGate {
    /// Returns true exactly once, on the first observation of complete
    /// progress. Every later call is a no-op.
    pub fn observe(&mut self, progress: f32) -> bool {
        match self.state {
            GateState::Pending if progress >= 1.0 => {
                self.state = GateState::Fired;
                true
            }
            _ => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == GateState::Fired
    }
}
