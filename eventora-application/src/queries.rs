pub mod event_queries;
pub mod resource_queries;
pub mod session_queries;

pub use event_queries::*;
pub use resource_queries::*;
pub use session_queries::*;
