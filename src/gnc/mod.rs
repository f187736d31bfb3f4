pub mod control;
pub mod gimbal;
