pub mod assistant;
pub mod health;
pub mod market;
pub mod server;
