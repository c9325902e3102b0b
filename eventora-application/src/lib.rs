// Eventora Application Layer

pub mod board;
pub mod commands;
pub mod error;
pub mod notice;
pub mod queries;
pub mod session;
pub mod state;

pub use board::{EventBoard, RefreshOutcome};
pub use error::AppError;
pub use notice::{Notice, NoticeLevel};
pub use session::SessionContext;
pub use state::AppState;

#[cfg(test)]
pub(crate) mod testing;
