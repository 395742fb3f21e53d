//! Split-and-rotate image pipeline.
//!
//! The module contains the directory scanner, the per-image crop/rotate/save
//! transform, and the output-directory helpers used by the batch command.

/// Output directory resolution and fatal batch errors.
pub mod batch;
/// Candidate file discovery.
pub mod scan;
/// Per-image split, rotate, and save transform.
pub mod transform;
