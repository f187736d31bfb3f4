pub mod rocket;
