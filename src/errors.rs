use thiserror::Error;

/// A rocket definition that cannot describe a physical body.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid {field}: {value} must lie strictly between {lower} and {upper}")]
pub struct ConfigurationError {
    pub field: &'static str,
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ConfigurationError {
    /// Checks `lower < value < upper`. NaN never passes.
    pub fn check_open_range(
        field: &'static str,
        value: f64,
        lower: f64,
        upper: f64,
    ) -> Result<f64, Self> {
        if value > lower && value < upper {
            Ok(value)
        } else {
            Err(Self {
                field,
                value,
                lower,
                upper,
            })
        }
    }
}

/// A math routine was evaluated outside the range where it yields a finite value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("inertia ratio {ratio} is outside (0, 1)")]
    InertiaRatio { ratio: f64 },

    #[error("tangent is singular at {angle} degrees")]
    TangentSingularity { angle: f64 },

    #[error("angle {angle} is not a finite number of degrees")]
    NonFiniteAngle { angle: f64 },

    #[error("thrust {thrust} N is not a finite non-negative magnitude")]
    InvalidThrust { thrust: f64 },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RocketError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("rocket has not been configured")]
    NotConfigured,

    #[error("time step {delta_time} s must be finite and positive")]
    InvalidTimeStep { delta_time: f64 },
}
