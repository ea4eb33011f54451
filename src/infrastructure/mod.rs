// Model artifact adapters
pub mod ml;

pub mod observability;
