pub mod flight_phase;
pub mod state_machine;
