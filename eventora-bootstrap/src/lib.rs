pub mod context;
pub mod lifecycle;

pub use context::AppContext;
pub use lifecycle::{init_tracing, run, Args, LogLevel};
