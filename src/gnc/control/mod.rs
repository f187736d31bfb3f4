pub mod scheduled_controller;
