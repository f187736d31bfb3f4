pub mod dynamics;
pub mod gravity;
pub mod inertia;
pub mod thrust_vector;
