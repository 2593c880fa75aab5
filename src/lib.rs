pub mod configuration;
pub mod domain;
pub mod fishbowl_client;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod utils;
