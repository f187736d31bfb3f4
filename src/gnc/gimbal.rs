use crate::errors::ConfigurationError;
use crate::models::subsystem::{Gimbal, Subsystem};
use crate::physics::thrust_vector::GimbalDeflection;

/// Two-axis gimbal driven by servos with a finite slew rate.
///
/// Commands are clamped to `±max_deflection` degrees; each axis moves toward
/// its target by at most `slew_rate` degrees per second.
#[derive(Debug, Clone, PartialEq)]
pub struct SlewRateGimbal {
    max_deflection: f64,
    slew_rate: f64,
    current: GimbalDeflection,
    target: GimbalDeflection,
}

impl SlewRateGimbal {
    pub fn new(max_deflection: f64, slew_rate: f64) -> Result<Self, ConfigurationError> {
        // Past 90 degrees the nozzle would point forward
        let max_deflection =
            ConfigurationError::check_open_range("max_deflection", max_deflection, 0.0, 90.0)?;
        let slew_rate =
            ConfigurationError::check_open_range("slew_rate", slew_rate, 0.0, f64::INFINITY)?;

        Ok(Self {
            max_deflection,
            slew_rate,
            current: GimbalDeflection::default(),
            target: GimbalDeflection::default(),
        })
    }

    pub fn target(&self) -> GimbalDeflection {
        self.target
    }

    pub fn deflection(&self) -> GimbalDeflection {
        self.current
    }

    fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(-self.max_deflection, self.max_deflection)
    }
}

fn slew(current: f64, target: f64, max_step: f64) -> f64 {
    current + (target - current).clamp(-max_step, max_step)
}

impl Subsystem for SlewRateGimbal {
    /// Center the nozzle, keeping any pending command.
    fn init(&mut self) {
        self.current = GimbalDeflection::default();
    }

    fn reset(&mut self) {
        self.current = GimbalDeflection::default();
        self.target = GimbalDeflection::default();
    }
}

impl Gimbal for SlewRateGimbal {
    fn deflection_x(&self) -> f64 {
        self.current.x
    }

    fn deflection_y(&self) -> f64 {
        self.current.y
    }

    fn advance(&mut self, delta_time: f64) {
        let max_step = self.slew_rate * delta_time.max(0.0);
        self.current.x = slew(self.current.x, self.target.x, max_step);
        self.current.y = slew(self.current.y, self.target.y, max_step);
    }

    fn command(&mut self, x: f64, y: f64) {
        self.target = GimbalDeflection::new(self.clamp(x), self.clamp(y));
    }
}
