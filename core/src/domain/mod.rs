pub mod assistant;
pub mod common;
pub mod geocoding;
pub mod health;
pub mod market;
