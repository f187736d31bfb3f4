use crate::constants::GRAVITY;
use nalgebra as na;

/// Weight of a body in a uniform field, acting along -z.
pub fn weight(mass: f64) -> na::Vector3<f64> {
    na::Vector3::new(0.0, 0.0, -GRAVITY * mass)
}
