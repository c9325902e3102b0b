pub mod auth_gateway;
pub mod event_gateway;
pub mod resource_gateway;

pub use auth_gateway::*;
pub use event_gateway::*;
pub use resource_gateway::*;
