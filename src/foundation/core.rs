use image::{RgbImage, RgbaImage};

pub use kurbo::{Affine, Point, Vec2};

/// Pixel dimensions of a raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Dims {
    pub width: u32,
    pub height: u32,
}

impl Dims {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of_rgb(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    pub fn of_rgba(img: &RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    /// `true` when either side is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn fits_within(self, outer: Dims) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left origin of an overlay canvas inside the composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

impl Placement {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
