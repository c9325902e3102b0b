// Gateway and service port traits
// Define what the domain needs from infrastructure

pub mod gateways;
pub mod services;

pub use gateways::*;
pub use services::*;
