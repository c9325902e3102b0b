pub mod auth_commands;
pub mod event_commands;
pub mod resource_commands;

pub use auth_commands::*;
pub use event_commands::*;
pub use resource_commands::*;
