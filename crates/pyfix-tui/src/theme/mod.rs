//! Centralized theme system.
//!
//! This module provides:
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//! - `icons` - Icon glyphs with Nerd Font and Unicode variants

pub mod icons;
pub mod palette;
pub mod styles;
