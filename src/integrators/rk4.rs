use crate::physics::dynamics::EquationsOfMotion;

pub struct RK4<T: EquationsOfMotion> {
    eom: T,
}

impl<T: EquationsOfMotion> RK4<T>
where
    T::State: Clone + std::ops::Add<Output = T::State> + std::ops::Mul<f64, Output = T::State>,
{
    pub fn new(eom: T) -> Self {
        RK4 { eom }
    }

    pub fn integrate(&self, state: &T::State, dt: f64) -> T::State {
        let k1 = self.eom.compute_derivative(state);

        let state2 = state.clone() + k1.clone() * (dt / 2.0);
        let k2 = self.eom.compute_derivative(&state2);

        let state3 = state.clone() + k2.clone() * (dt / 2.0);
        let k3 = self.eom.compute_derivative(&state3);

        let state4 = state.clone() + k3.clone() * dt;
        let k4 = self.eom.compute_derivative(&state4);

        state.clone() + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::body::MassProperties;
    use crate::models::state::RigidBodyState;
    use crate::physics::dynamics::RigidBodyDynamics;
    use approx::assert_relative_eq;
    use nalgebra as na;

    #[test]
    fn constant_acceleration_is_exact() {
        // Free fall from 10 m: z(t) = 10 - g t² / 2
        let dynamics = RigidBodyDynamics::new(
            na::Vector3::new(0.0, 0.0, -9.81),
            na::Vector3::zeros(),
            MassProperties {
                mass: 1.0,
                moment_of_inertia: na::Vector3::new(1.0, 1.0, 1.0),
            },
        );
        let integrator = RK4::new(dynamics);

        let mut state = RigidBodyState::zero();
        state.position.z = 10.0;
        for _ in 0..10 {
            state = integrator.integrate(&state, 0.1);
        }

        assert_relative_eq!(state.position.z, 10.0 - 9.81 / 2.0, epsilon = 1e-9);
        assert_relative_eq!(state.velocity.z, -9.81, epsilon = 1e-9);
    }

    #[test]
    fn constant_torque_spins_up_attitude() {
        let inertia = na::Vector3::new(2.0, 2.0, 1.0);
        let dynamics = RigidBodyDynamics::new(
            na::Vector3::zeros(),
            na::Vector3::new(0.0, 2.0, 0.0),
            MassProperties {
                mass: 1.0,
                moment_of_inertia: inertia,
            },
        );
        let state = RK4::new(dynamics).integrate(&RigidBodyState::zero(), 1.0);

        // 1 rad/s² about yaw for one second
        let rate = 1.0_f64.to_degrees();
        assert_relative_eq!(state.angular_velocity.y, rate, epsilon = 1e-9);
        assert_relative_eq!(state.angular_position.y, rate / 2.0, epsilon = 1e-9);
        assert_eq!(state.angular_position.x, 0.0);
    }
}
