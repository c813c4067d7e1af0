// src/core/mod.rs
//! Backend access and configuration shared by every view

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigError, PortalConfig};
pub use service_client::{JobsApi, ServiceClient};
