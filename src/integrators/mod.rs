pub mod rk4;
pub mod simulation;
