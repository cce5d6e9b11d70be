//! The augmentation engine: render an overlay canvas, place it, and cut it into the composite.
//!
//! Nothing in here logs or touches the filesystem; inputs are raster buffers plus a
//! [`crate::RandomSource`].

pub(crate) mod augment;
pub(crate) mod blit;
pub(crate) mod placement;
