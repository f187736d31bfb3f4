pub mod body;
pub mod rocket_config;
pub mod state;
pub mod subsystem;
