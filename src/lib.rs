//! Job-detail and listing views for the hiring portal, backed by its REST API.

pub mod core;
pub mod countdown;
pub mod listing;
pub mod render;
pub mod session;
pub mod telemetry;
pub mod types;
pub mod view;

pub use crate::core::{ConfigError, JobsApi, PortalConfig, ServiceClient};
pub use countdown::{Clock, FixedClock, SystemClock, TimeLeft};
pub use session::CallerIdentity;
pub use view::{JobDetailAggregator, JobView, ViewModel, ViewOptions, ViewStatus};
