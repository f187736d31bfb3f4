use crate::constants::{RIGHT_ANGLE_DEG, STRAIGHT_ANGLE_DEG};
use crate::errors::DomainError;

/// Tangent of an angle in degrees, reflected into the supplementary angle
/// past perpendicular: `tan(180 - a)` when `|a| > 90`, `tan(a)` otherwise.
///
/// Fails instead of returning an infinite value when the (reflected) angle is
/// an odd multiple of 90 degrees.
pub fn bounded_tan(angle_deg: f64) -> Result<f64, DomainError> {
    if !angle_deg.is_finite() {
        return Err(DomainError::NonFiniteAngle { angle: angle_deg });
    }

    let reflected = if angle_deg.abs() > RIGHT_ANGLE_DEG {
        STRAIGHT_ANGLE_DEG - angle_deg
    } else {
        angle_deg
    };

    if (reflected - RIGHT_ANGLE_DEG).rem_euclid(STRAIGHT_ANGLE_DEG) == 0.0 {
        return Err(DomainError::TangentSingularity { angle: angle_deg });
    }

    Ok(reflected.to_radians().tan())
}

/// `sqrt(1 + tan²a + tan²b)`, the length of the unit-axial vector deflected
/// by two transverse angles.
pub fn normalize(a_deg: f64, b_deg: f64) -> Result<f64, DomainError> {
    let tan_a = bounded_tan(a_deg)?;
    let tan_b = bounded_tan(b_deg)?;
    Ok((1.0 + tan_a.powi(2) + tan_b.powi(2)).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use test_case::test_case;

    #[test]
    fn matches_plain_tangent_below_perpendicular() {
        assert_eq!(bounded_tan(45.0).unwrap(), 45.0_f64.to_radians().tan());
        assert_eq!(bounded_tan(0.0).unwrap(), 0.0);
        assert_relative_eq!(bounded_tan(-30.0).unwrap(), -(30.0_f64.to_radians().tan()));
    }

    #[test_case(91.0, 89.0; "just past perpendicular")]
    #[test_case(135.0, 45.0; "obtuse")]
    #[test_case(179.0, 1.0; "nearly reversed")]
    fn reflects_past_perpendicular(angle: f64, mirror: f64) {
        let reflected = bounded_tan(angle).unwrap();
        let direct = bounded_tan(mirror).unwrap();
        assert_relative_eq!(reflected.abs(), direct.abs());
    }

    #[test_case(90.0; "positive right angle")]
    #[test_case(-90.0; "negative right angle")]
    #[test_case(270.0; "reflects onto -90")]
    #[test_case(-270.0; "reflects onto 450")]
    fn rejects_singular_angles(angle: f64) {
        assert_eq!(
            bounded_tan(angle),
            Err(DomainError::TangentSingularity { angle })
        );
    }

    #[test]
    fn rejects_non_finite_angles() {
        assert!(matches!(
            bounded_tan(f64::NAN),
            Err(DomainError::NonFiniteAngle { .. })
        ));
        assert!(matches!(
            bounded_tan(f64::INFINITY),
            Err(DomainError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn normalize_is_one_without_deflection() {
        assert_eq!(normalize(0.0, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn normalize_combines_both_axes() {
        // tan(45) = 1 on both axes
        assert_relative_eq!(normalize(45.0, 45.0).unwrap(), 3.0_f64.sqrt(), epsilon = 1e-12);
        assert!(normalize(90.0, 0.0).is_err());
    }
}
