//! Batch image splitter/rotator.
//!
//! For every supported image in a folder, splits the image at its horizontal
//! midpoint, rotates the left half 90° clockwise and the right half 90°
//! counterclockwise, and writes both halves as JPEG files.

/// CLI command implementations.
pub mod commands;
/// Profile-based configuration file support.
pub mod config;
/// Core scan/split/rotate pipeline.
pub mod splitter;
