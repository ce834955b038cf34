//! Utils module - Shared utilities and helpers
//!
//! This module provides utility functions and helpers that are used across
//! multiple layers of the application architecture.

/// Error conversion helpers for the API layer
pub mod error_helpers;

/// File system operations and path handling
pub mod file;

/// Tracing subscriber setup
pub mod logging;

/// Input validation utilities
pub mod validation;
