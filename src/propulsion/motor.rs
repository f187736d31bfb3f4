use crate::errors::ConfigurationError;
use crate::models::subsystem::{Subsystem, ThrustSource};

/// Flat thrust from ignition at t = 0 until burnout.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantThrustMotor {
    thrust: f64,
    burn_time: f64,
}

impl ConstantThrustMotor {
    pub fn new(thrust: f64, burn_time: f64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            thrust: non_negative("thrust", thrust)?,
            burn_time: non_negative("burn_time", burn_time)?,
        })
    }
}

impl Subsystem for ConstantThrustMotor {
    fn reset(&mut self) {}
}

impl ThrustSource for ConstantThrustMotor {
    fn thrust_at(&self, time: f64) -> f64 {
        if (0.0..self.burn_time).contains(&time) {
            self.thrust
        } else {
            0.0
        }
    }
}

/// Thrust curve sampled as `(time s, thrust N)` pairs, linearly interpolated.
/// Zero outside the sampled interval.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrustCurveMotor {
    samples: Vec<(f64, f64)>,
}

impl ThrustCurveMotor {
    pub fn new(samples: Vec<(f64, f64)>) -> Result<Self, ConfigurationError> {
        if samples.is_empty() {
            return Err(ConfigurationError {
                field: "samples",
                value: 0.0,
                lower: 1.0,
                upper: f64::INFINITY,
            });
        }

        let mut previous = f64::NEG_INFINITY;
        for &(time, thrust) in &samples {
            ConfigurationError::check_open_range("sample_time", time, previous, f64::INFINITY)?;
            non_negative("sample_thrust", thrust)?;
            previous = time;
        }

        Ok(Self { samples })
    }

    pub fn burnout_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |&(time, _)| time)
    }

    /// Total impulse (N·s) under the curve.
    pub fn total_impulse(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|pair| {
                let (t0, f0) = pair[0];
                let (t1, f1) = pair[1];
                (t1 - t0) * (f0 + f1) / 2.0
            })
            .sum()
    }
}

impl Subsystem for ThrustCurveMotor {
    fn reset(&mut self) {}
}

impl ThrustSource for ThrustCurveMotor {
    fn thrust_at(&self, time: f64) -> f64 {
        // First sample strictly after `time`
        let upper = self.samples.partition_point(|&(t, _)| t <= time);
        if upper == 0 {
            return 0.0;
        }
        let (t0, f0) = self.samples[upper - 1];
        match self.samples.get(upper) {
            Some(&(t1, f1)) => f0 + (f1 - f0) * (time - t0) / (t1 - t0),
            // On the last sample exactly, otherwise burnt out
            None if time == t0 => f0,
            None => 0.0,
        }
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigurationError {
            field,
            value,
            lower: 0.0,
            upper: f64::INFINITY,
        })
    }
}
