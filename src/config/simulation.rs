use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    pub time_step: f64,         // s
    pub max_duration: f64,      // s
    pub sample_interval: usize, // steps between telemetry rows
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            time_step: 0.01,
            max_duration: 60.0,
            sample_interval: 10,
        }
    }
}
