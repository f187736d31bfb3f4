use crate::errors::{ConfigurationError, RocketError};
use crate::physics::inertia::inertia_vector;
use nalgebra as na;

/// Validated mass and geometry of a rocket.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketConfig {
    mass: f64,
    body_length: f64,
    center_of_mass_height: f64,
    moment_of_inertia: na::Vector3<f64>,
}

impl RocketConfig {
    /// `center_of_mass_height` is measured from the nozzle and must lie
    /// strictly inside the body.
    pub fn new(
        mass: f64,
        body_length: f64,
        center_of_mass_height: f64,
    ) -> Result<Self, RocketError> {
        let mass = ConfigurationError::check_open_range("mass", mass, 0.0, f64::INFINITY)?;
        let body_length =
            ConfigurationError::check_open_range("body_length", body_length, 0.0, f64::INFINITY)?;
        let center_of_mass_height = ConfigurationError::check_open_range(
            "center_of_mass_height",
            center_of_mass_height,
            0.0,
            body_length,
        )?;

        let moment_of_inertia = inertia_vector(body_length, mass, center_of_mass_height)?;

        Ok(Self {
            mass,
            body_length,
            center_of_mass_height,
            moment_of_inertia,
        })
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn body_length(&self) -> f64 {
        self.body_length
    }

    /// Lever arm between the nozzle and the center of mass.
    pub fn center_of_mass_height(&self) -> f64 {
        self.center_of_mass_height
    }

    pub fn moment_of_inertia(&self) -> na::Vector3<f64> {
        self.moment_of_inertia
    }
}
