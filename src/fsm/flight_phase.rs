use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Unconfigured,
    Ready,
    Running,
    Landed,
}

impl fmt::Display for FlightPhase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FlightPhase::Unconfigured => write!(f, "Unconfigured"),
            FlightPhase::Ready => write!(f, "Ready"),
            FlightPhase::Running => write!(f, "Running"),
            FlightPhase::Landed => write!(f, "Landed"),
        }
    }
}
