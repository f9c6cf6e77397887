//! Configuration module for Coinwise
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CoinwisePaths;
pub use settings::Settings;
