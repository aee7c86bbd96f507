//! Boundary-value testing exercises.
//!
//! This crate collects small, independent decision functions, field validators
//! and measure converters. Each one has sharp partition edges that are pinned down
//! by its test suite.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod conversion;
pub mod error;
pub mod models;
