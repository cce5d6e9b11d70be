//! Geometry of the overlay pipeline.
//!
//! [`affine`] derives sizes and the rotation matrix; [`resample`] moves pixels through them.

/// Scale factor, rotated bounds, and rotation-about-center construction.
pub mod affine;
/// Bilinear resize and affine warp of RGBA rasters.
pub mod resample;
