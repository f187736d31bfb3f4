//! Flight model of a gimbal-steered, thrust-vectored rocket flying as a rigid
//! body: net force, torque and moment of inertia for a step-driven integrator.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fsm;
pub mod gnc;
pub mod integrators;
pub mod models;
pub mod numerics;
pub mod physics;
pub mod propulsion;
pub mod telemetry;
pub mod vehicle;

pub use errors::{ConfigurationError, DomainError, RocketError};
pub use models::body::Steppable;
pub use vehicle::rocket::RocketBody;
