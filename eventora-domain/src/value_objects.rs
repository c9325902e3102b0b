// Domain value objects
pub mod booking_status;
pub mod event_category;
pub mod event_status;
pub mod identifiers;
pub mod money;
pub mod user_role;

pub use booking_status::*;
pub use event_category::*;
pub use event_status::*;
pub use identifiers::*;
pub use money::*;
pub use user_role::*;
