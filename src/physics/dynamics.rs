use crate::models::body::MassProperties;
use crate::models::state::RigidBodyState;
use nalgebra as na;

pub trait EquationsOfMotion {
    type State;

    fn compute_derivative(&self, state: &Self::State) -> Self::State;
}

/// Rigid body under loads held constant over one integration step.
pub struct RigidBodyDynamics {
    force: na::Vector3<f64>,
    torque: na::Vector3<f64>,
    mass_properties: MassProperties,
}

impl RigidBodyDynamics {
    pub fn new(
        force: na::Vector3<f64>,
        torque: na::Vector3<f64>,
        mass_properties: MassProperties,
    ) -> Self {
        Self {
            force,
            torque,
            mass_properties,
        }
    }
}

impl EquationsOfMotion for RigidBodyDynamics {
    type State = RigidBodyState;

    fn compute_derivative(&self, state: &RigidBodyState) -> RigidBodyState {
        let mut derivative = RigidBodyState::zero();

        // Position derivative is velocity
        derivative.position = state.velocity;
        derivative.velocity = self.force / self.mass_properties.mass;

        // Attitude is tracked in degrees
        derivative.angular_position = state.angular_velocity;
        derivative.angular_velocity = self
            .torque
            .component_div(&self.mass_properties.moment_of_inertia)
            .map(f64::to_degrees);

        derivative
    }
}
