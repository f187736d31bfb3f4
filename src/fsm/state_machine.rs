use super::flight_phase::FlightPhase;
use tracing::info;

pub struct FlightStateMachine {
    current_state: FlightPhase,
}

impl FlightStateMachine {
    pub fn new() -> Self {
        Self {
            current_state: FlightPhase::Unconfigured,
        }
    }

    pub fn get_current_state(&self) -> FlightPhase {
        self.current_state
    }

    fn transition_to(&mut self, new_state: FlightPhase, time: f64) {
        if self.current_state != new_state {
            info!(
                "State transition at t={:.2}s: {} -> {}",
                time, self.current_state, new_state
            );
            self.current_state = new_state;
        }
    }

    /// A valid configuration was installed.
    pub fn configured(&mut self) {
        self.transition_to(FlightPhase::Ready, 0.0);
    }

    /// Back to the pad. An unconfigured body has nothing to re-arm.
    pub fn rearm(&mut self) {
        if self.current_state != FlightPhase::Unconfigured {
            self.transition_to(FlightPhase::Ready, 0.0);
        }
    }

    pub fn begin_step(&mut self, time: f64) {
        if self.current_state == FlightPhase::Ready {
            self.transition_to(FlightPhase::Running, time);
        }
    }

    pub fn evaluate_landing(&mut self, landed: bool, time: f64) {
        if self.current_state == FlightPhase::Running && landed {
            self.transition_to(FlightPhase::Landed, time);
        }
    }

    pub fn is_over(&self) -> bool {
        self.current_state == FlightPhase::Landed
    }
}

impl Default for FlightStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
