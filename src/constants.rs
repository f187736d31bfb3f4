pub const GRAVITY: f64 = 9.81; // Standard gravitational acceleration (m/s²)

// Rocket geometry
pub const AXIAL_MOMENT_OF_INERTIA: f64 = 1.0; // Roll axis placeholder (kg·m²)
pub const LAUNCH_ALTITUDE: f64 = 1.0; // Height above the launch datum at init (m)

// Math
pub const RIGHT_ANGLE_DEG: f64 = 90.0;
pub const STRAIGHT_ANGLE_DEG: f64 = 180.0;
