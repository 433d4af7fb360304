//! Cross-module tests for the collision routines
