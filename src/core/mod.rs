//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - The document and report model
//! - Region masking for comments and fenced code
//! - Path resolution helpers
//! - File reading
//! - Report rendering

pub mod error;
pub mod file_reader;
pub mod mask;
pub mod model;
pub mod paths;
pub mod render;
