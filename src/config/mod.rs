pub mod rocket;
pub mod simulation;
