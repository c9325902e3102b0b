// Domain entities
pub mod booking;
pub mod event;
pub mod page;
pub mod runtime_config;
pub mod session;
pub mod user;
pub mod vendor;

pub use booking::*;
pub use event::*;
pub use page::*;
pub use runtime_config::*;
pub use session::*;
pub use user::*;
pub use vendor::*;
