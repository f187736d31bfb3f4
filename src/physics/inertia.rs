use crate::constants::AXIAL_MOMENT_OF_INERTIA;
use crate::errors::DomainError;
use nalgebra as na;

/// Transverse moment of inertia of a slender, axially symmetric rocket whose
/// density varies linearly along its length.
///
/// The body is treated as two conical density regions joined at the center
/// of mass. `center_of_mass_height` is measured from the nozzle, and the ratio
/// `r = center_of_mass_height / length` must lie strictly inside (0, 1). The
/// ratio is not clamped: callers validate the geometry first.
pub fn moment_of_inertia(
    length: f64,
    mass: f64,
    center_of_mass_height: f64,
) -> Result<f64, DomainError> {
    let r = center_of_mass_height / length;
    if !(r > 0.0 && r < 1.0) {
        return Err(DomainError::InertiaRatio { ratio: r });
    }

    let numerator = r.powi(3) + (1.0 - r).powi(4) / r;
    let denominator = r + (1.0 - r).powi(2) / r;

    Ok(length.powi(2) * mass / 3.0 * numerator / denominator)
}

/// Principal moments for the body frame: two equal transverse axes and the
/// placeholder roll axis.
pub fn inertia_vector(
    length: f64,
    mass: f64,
    center_of_mass_height: f64,
) -> Result<na::Vector3<f64>, DomainError> {
    let transverse = moment_of_inertia(length, mass, center_of_mass_height)?;
    Ok(na::Vector3::new(
        transverse,
        transverse,
        AXIAL_MOMENT_OF_INERTIA,
    ))
}
