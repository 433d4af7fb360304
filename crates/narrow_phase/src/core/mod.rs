//! # Core Module
//!
//! Shared configuration types used by the narrow-phase entry points.

pub mod config;

// Re-export commonly used config types
pub use config::{
    NarrowPhaseConfig,
    BoxPlaneContactMode,
    Config,
    ConfigError,
};
