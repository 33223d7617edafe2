//! lineedits library
//!
//! This module exports the command's configuration, template rendering and
//! report generation for use in integration tests and as a library.

pub mod config;
pub mod render;
pub mod report;
