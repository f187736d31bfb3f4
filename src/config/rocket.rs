use serde::{Deserialize, Serialize};

/// Unvalidated rocket definition; validation happens in
/// [`RocketBody::configure`](crate::vehicle::rocket::RocketBody::configure).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocketParameters {
    pub mass: f64,                  // kg
    pub body_length: f64,           // nozzle to nose, m
    pub center_of_mass_height: f64, // nozzle to CoM, m
}

impl RocketParameters {
    pub const HOPPER_MASS: f64 = 10.0;
    pub const HOPPER_LENGTH: f64 = 2.0;
    pub const HOPPER_COM_HEIGHT: f64 = 0.5;

    /// Small vertical-takeoff test vehicle.
    pub const fn hopper() -> Self {
        Self {
            mass: Self::HOPPER_MASS,
            body_length: Self::HOPPER_LENGTH,
            center_of_mass_height: Self::HOPPER_COM_HEIGHT,
        }
    }
}

impl Default for RocketParameters {
    fn default() -> Self {
        Self::hopper()
    }
}
