use crate::errors::RocketError;
use crate::models::state::RigidBodyState;
use nalgebra as na;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassProperties {
    pub mass: f64,
    pub moment_of_inertia: na::Vector3<f64>,
}

/// A body that a [`Simulation`](crate::integrators::simulation::Simulation)
/// can advance. The body supplies loads; the integrator moves its state.
pub trait Steppable {
    /// Advance auxiliary subsystems before loads are queried.
    fn step(&mut self, current_time: f64, delta_time: f64) -> Result<(), RocketError>;

    /// Net force in the world frame (N).
    fn force(&self, current_time: f64, delta_time: f64) -> Result<na::Vector3<f64>, RocketError>;

    /// Net torque about the body axes (N·m).
    fn torque(&self, current_time: f64, delta_time: f64) -> Result<na::Vector3<f64>, RocketError>;

    fn mass_properties(&self) -> Result<MassProperties, RocketError>;

    fn state(&self) -> &RigidBodyState;

    fn state_mut(&mut self) -> &mut RigidBodyState;

    /// Called once the integrated state has been written back.
    fn after_integration(&mut self, _current_time: f64) {}

    fn is_over(&self) -> bool;
}
