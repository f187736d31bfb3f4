use super::gravity::weight;
use crate::errors::DomainError;
use crate::models::state::Attitude;
use crate::numerics::trigonometry::{bounded_tan, normalize};
use nalgebra as na;

/// Nozzle deflection on the two transverse axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GimbalDeflection {
    pub x: f64,
    pub y: f64,
}

impl GimbalDeflection {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tangents of the deflection angles and the axial loss factor `u` they imply.
struct Deflected {
    tan_x: f64,
    tan_y: f64,
    loss: f64,
}

fn deflect(gimbal: GimbalDeflection) -> Result<Deflected, DomainError> {
    let tan_x = bounded_tan(gimbal.x)?;
    let tan_y = bounded_tan(gimbal.y)?;
    Ok(Deflected {
        tan_x,
        tan_y,
        loss: (1.0 + tan_x.powi(2) + tan_y.powi(2)).sqrt(),
    })
}

fn check_thrust(thrust: f64) -> Result<f64, DomainError> {
    if thrust.is_finite() && thrust >= 0.0 {
        Ok(thrust)
    } else {
        Err(DomainError::InvalidThrust { thrust })
    }
}

/// Resolves a thrust magnitude through the gimbal and the body attitude into
/// world-frame force and body-frame torque.
///
/// Torque follows the gimbal angle, force follows the attitude: the gimbal
/// only costs axial thrust (`u`) on the translational side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustVectorResolver {
    lever_arm: f64,
    mass: f64,
}

impl ThrustVectorResolver {
    pub fn new(lever_arm: f64, mass: f64) -> Self {
        Self { lever_arm, mass }
    }

    /// Thrust plus weight. A missing gimbal counts as an undeflected nozzle.
    pub fn force(
        &self,
        thrust: f64,
        gimbal: Option<GimbalDeflection>,
        attitude: Attitude,
    ) -> Result<na::Vector3<f64>, DomainError> {
        if check_thrust(thrust)? == 0.0 {
            return Ok(weight(self.mass));
        }

        let gimbal = gimbal.unwrap_or_default();
        let loss = normalize(gimbal.x, gimbal.y)?;
        let projection = normalize(attitude.pitch, attitude.yaw)?;
        let axial = thrust / (loss * projection);

        let thrust_vector = na::Vector3::new(
            axial * bounded_tan(attitude.yaw)?,
            axial * bounded_tan(attitude.pitch)?,
            axial,
        );

        Ok(thrust_vector + weight(self.mass))
    }

    /// Moment of the deflected thrust about the center of mass. Zero about
    /// the roll axis, and zero everywhere without a gimbal.
    pub fn torque(
        &self,
        thrust: f64,
        gimbal: Option<GimbalDeflection>,
    ) -> Result<na::Vector3<f64>, DomainError> {
        let thrust = check_thrust(thrust)?;
        let Some(gimbal) = gimbal else {
            return Ok(na::Vector3::zeros());
        };
        if thrust == 0.0 {
            return Ok(na::Vector3::zeros());
        }

        let deflected = deflect(gimbal)?;
        let moment = self.lever_arm * thrust / deflected.loss;

        Ok(na::Vector3::new(
            moment * deflected.tan_x,
            moment * deflected.tan_y,
            0.0,
        ))
    }
}
