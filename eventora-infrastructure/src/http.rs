pub mod api_client;
pub mod schemas;

pub use api_client::*;
