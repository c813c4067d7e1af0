// src/view/mod.rs
pub mod aggregator;
pub mod apply;
pub mod model;
pub mod recommendations;
mod ticker;

pub use aggregator::{JobDetailAggregator, JobView, LoadedJob, ViewError, ViewOptions};
pub use apply::{ApplicationRequest, ApplyError, ApplyHandoff, ApplyOutcome};
pub use model::{Route, ViewModel, ViewStatus, PLACEHOLDER_LOGO};
