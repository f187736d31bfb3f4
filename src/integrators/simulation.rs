use super::rk4::RK4;
use crate::config::simulation::SimulationSettings;
use crate::errors::RocketError;
use crate::models::body::Steppable;
use crate::models::state::RigidBodyState;
use crate::physics::dynamics::RigidBodyDynamics;
use nalgebra as na;
use tracing::info;

/// Loads applied over one step and the state they produced.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    pub time: f64,
    pub force: na::Vector3<f64>,
    pub torque: na::Vector3<f64>,
    pub state: RigidBodyState,
}

/// Drives a [`Steppable`] body through time with an RK4 integrator.
pub struct Simulation<B: Steppable> {
    body: B,
    current_time: f64,
}

impl<B: Steppable> Simulation<B> {
    pub fn new(body: B) -> Self {
        Self {
            body,
            current_time: 0.0,
        }
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn into_body(self) -> B {
        self.body
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Rewinds the clock; the body is left as is.
    pub fn rewind(&mut self) {
        self.current_time = 0.0;
    }

    /// Advances subsystems, samples loads at the start of the step, integrates
    /// and lets the body react to its new state.
    pub fn step(&mut self, dt: f64) -> Result<StepRecord, RocketError> {
        let t = self.current_time;
        self.body.step(t, dt)?;

        let force = self.body.force(t, dt)?;
        let torque = self.body.torque(t, dt)?;
        let mass_properties = self.body.mass_properties()?;

        let dynamics = RigidBodyDynamics::new(force, torque, mass_properties);
        let integrator = RK4::new(dynamics);
        let next = integrator.integrate(self.body.state(), dt);

        *self.body.state_mut() = next;
        self.current_time = t + dt;
        self.body.after_integration(self.current_time);

        Ok(StepRecord {
            time: self.current_time,
            force,
            torque,
            state: self.body.state().clone(),
        })
    }

    /// Steps until the body reports the flight is over or `max_duration`
    /// elapses, handing every record to `observer`.
    pub fn run<F>(&mut self, settings: &SimulationSettings, mut observer: F) -> Result<(), RocketError>
    where
        F: FnMut(&Self, &StepRecord),
    {
        while !self.body.is_over() && self.current_time < settings.max_duration {
            let record = self.step(settings.time_step)?;
            observer(self, &record);
        }

        if self.body.is_over() {
            info!("Flight over at t={:.2}s", self.current_time);
        } else {
            info!("Stopped at t={:.2}s without landing", self.current_time);
        }
        Ok(())
    }
}
