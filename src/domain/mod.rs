pub mod metrics;
pub mod parameters;
pub mod tier;
