pub mod commands;
pub mod error;
pub mod handlers;
pub mod render;

pub use commands::*;
pub use error::*;
pub use handlers::*;
