//! Links module - Finding and classifying inline Markdown links

pub mod scan;
pub mod target;
