//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types and operations
//! - Colors with in-place mutation
//! - Shared single-threaded ownership
//! - Time management
//! - Logging utilities

pub mod math;
pub mod color;
pub mod collections;
pub mod time;
pub mod logging;

pub use collections::{shared, Shared};
pub use color::{Color, ColorParseError};
