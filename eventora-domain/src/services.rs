// Domain services
pub mod event_filter;
pub mod pagination;
pub mod pricing;
pub mod stats;
pub mod validation;

pub use event_filter::*;
pub use pagination::*;
pub use pricing::*;
pub use stats::*;
pub use validation::*;
