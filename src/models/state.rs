use nalgebra as na;

/// Body attitude as read by the thrust resolver, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Attitude {
    pub pitch: f64,
    pub yaw: f64,
}

impl Attitude {
    pub fn new(pitch: f64, yaw: f64) -> Self {
        Self { pitch, yaw }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RigidBodyState {
    // Linear motion, world frame
    pub position: na::Vector3<f64>, // m
    pub velocity: na::Vector3<f64>, // m/s

    // Angular motion: x = pitch, y = yaw, z = roll
    pub angular_position: na::Vector3<f64>, // deg
    pub angular_velocity: na::Vector3<f64>, // deg/s
}

impl RigidBodyState {
    pub fn zero() -> Self {
        RigidBodyState {
            position: na::Vector3::zeros(),
            velocity: na::Vector3::zeros(),
            angular_position: na::Vector3::zeros(),
            angular_velocity: na::Vector3::zeros(),
        }
    }

    pub fn attitude(&self) -> Attitude {
        Attitude::new(self.angular_position.x, self.angular_position.y)
    }

    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    /// On or below the ground and not climbing.
    pub fn is_landed(&self) -> bool {
        self.position.z <= 0.0 && self.velocity.z <= 0.0
    }
}

impl Default for RigidBodyState {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::ops::Add for RigidBodyState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        RigidBodyState {
            position: self.position + other.position,
            velocity: self.velocity + other.velocity,
            angular_position: self.angular_position + other.angular_position,
            angular_velocity: self.angular_velocity + other.angular_velocity,
        }
    }
}

impl std::ops::Mul<f64> for RigidBodyState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        RigidBodyState {
            position: self.position * scalar,
            velocity: self.velocity * scalar,
            angular_position: self.angular_position * scalar,
            angular_velocity: self.angular_velocity * scalar,
        }
    }
}
