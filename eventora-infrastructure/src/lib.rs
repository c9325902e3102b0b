pub mod config;
pub mod gateways;
pub mod http;
pub mod repositories;
pub mod services;

pub use config::*;
pub use gateways::*;
pub use http::*;
pub use repositories::*;
pub use services::*;
