//! # Narrow-Phase Configuration
//!
//! Policy knobs for contact generation. The numeric tolerances are fixed
//! constants in [`crate::foundation::math::constants`]; only choices that do
//! not affect the symmetry of the boolean tests are configurable.
//!
//! ## Example
//!
//! ```toml
//! box_plane_contacts = "Corners"
//! validate_inputs = true
//! max_contacts = 4
//! ```

use serde::{Serialize, Deserialize};

pub use crate::config::{Config, ConfigError};

/// How box-plane contacts are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoxPlaneContactMode {
    /// One contact per penetrating box corner, deepest first
    #[default]
    Corners,
    /// Approximate the box by a sphere of radius max half-extent
    BoundingSphere,
}

/// # Narrow-Phase Configuration
///
/// Consumed by [`crate::physics::NarrowPhase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrowPhaseConfig {
    /// Contact generation strategy for box-plane pairs
    pub box_plane_contacts: BoxPlaneContactMode,
    /// Check shape invariants before every query and report violations as
    /// [`crate::physics::collision::ShapeError`]
    ///
    /// This only decides whether invalid shapes come back as an `Err`. The
    /// shape tests assert the same invariants in debug builds, so with this
    /// off an invalid shape still panics there; release builds run the
    /// query on it unchecked.
    pub validate_inputs: bool,
    /// Upper bound on contacts appended by a single query
    pub max_contacts: usize,
}

impl NarrowPhaseConfig {
    /// Create a configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the box-plane contact strategy
    #[must_use]
    pub const fn with_box_plane_contacts(mut self, mode: BoxPlaneContactMode) -> Self {
        self.box_plane_contacts = mode;
        self
    }

    /// Enable or disable input validation
    #[must_use]
    pub const fn with_validation(mut self, enabled: bool) -> Self {
        self.validate_inputs = enabled;
        self
    }

    /// Set the per-query contact limit
    #[must_use]
    pub const fn with_max_contacts(mut self, max_contacts: usize) -> Self {
        self.max_contacts = max_contacts;
        self
    }
}

impl Default for NarrowPhaseConfig {
    fn default() -> Self {
        Self {
            box_plane_contacts: BoxPlaneContactMode::Corners,
            validate_inputs: cfg!(debug_assertions),
            // A box has 8 corners, the largest manifold any pair produces
            max_contacts: 8,
        }
    }
}

impl Config for NarrowPhaseConfig {}
