// src/core/mod.rs
//! Configuration and the recommendation service transport

pub mod config_manager;
pub mod service_client;

pub use config_manager::ConfigManager;
pub use service_client::{RecommendationClient, RecommendationTransport};
