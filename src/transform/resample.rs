//! Bilinear resampling of straight (non-premultiplied) RGBA8 rasters.

use image::{Rgba, RgbaImage, imageops::FilterType};

use crate::foundation::core::{Affine, Dims, Point};
use crate::foundation::error::{AugmentError, AugmentResult};

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

/// Resize to `dims` with bilinear (triangle) filtering.
pub fn resize_bilinear(src: &RgbaImage, dims: Dims) -> RgbaImage {
    if Dims::of_rgba(src) == dims {
        return src.clone();
    }
    image::imageops::resize(src, dims.width, dims.height, FilterType::Triangle)
}

/// Warp `src` into a fresh transparent raster of size `canvas`.
///
/// `forward` maps source pixel coordinates to canvas coordinates. Each canvas pixel is
/// inverse-mapped and bilinear-sampled; neighbours outside the source read as transparent
/// black, so samples straddling the source border come out partially transparent.
pub fn warp_affine_bilinear(
    src: &RgbaImage,
    forward: Affine,
    canvas: Dims,
) -> AugmentResult<RgbaImage> {
    let det = forward.determinant();
    if !det.is_finite() || det.abs() < 1e-12 {
        return Err(AugmentError::degenerate("warp matrix is not invertible"));
    }
    let inverse = forward.inverse();

    let mut out = RgbaImage::new(canvas.width, canvas.height);
    for (x, y, px) in out.enumerate_pixels_mut() {
        let p = inverse * Point::new(f64::from(x), f64::from(y));
        *px = Rgba(sample_bilinear(src, p.x, p.y));
    }
    Ok(out)
}

fn sample_bilinear(src: &RgbaImage, sx: f64, sy: f64) -> [u8; 4] {
    if !sx.is_finite() || !sy.is_finite() {
        return TRANSPARENT;
    }
    let (w, h) = src.dimensions();
    let x0 = sx.floor();
    let y0 = sy.floor();
    if x0 < -1.0 || y0 < -1.0 || x0 >= f64::from(w) || y0 >= f64::from(h) {
        return TRANSPARENT;
    }
    let fx = sx - x0;
    let fy = sy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let fetch = |x: i64, y: i64| -> [u8; 4] {
        if x < 0 || y < 0 || x >= i64::from(w) || y >= i64::from(h) {
            TRANSPARENT
        } else {
            src.get_pixel(x as u32, y as u32).0
        }
    };
    let taps = [
        (fetch(x0, y0), (1.0 - fx) * (1.0 - fy)),
        (fetch(x0 + 1, y0), fx * (1.0 - fy)),
        (fetch(x0, y0 + 1), (1.0 - fx) * fy),
        (fetch(x0 + 1, y0 + 1), fx * fy),
    ];

    let mut out = TRANSPARENT;
    for (c, slot) in out.iter_mut().enumerate() {
        let v: f64 = taps.iter().map(|(px, wt)| f64::from(px[c]) * wt).sum();
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resample.rs"]
mod tests;
