//! Size and matrix helpers for the scale → rotate pipeline.

use crate::foundation::core::{Affine, Dims, Vec2};
use crate::foundation::error::{AugmentError, AugmentResult};

/// Largest uniform factor that keeps `card` within `max_ratio` of `background` on both axes.
pub fn scale_factor(card: Dims, background: Dims, max_ratio: f64) -> AugmentResult<f64> {
    if card.is_empty() {
        return Err(AugmentError::empty_input(format!("card is {card}")));
    }
    if background.is_empty() {
        return Err(AugmentError::empty_input(format!("background is {background}")));
    }
    let sx = f64::from(background.width) * max_ratio / f64::from(card.width);
    let sy = f64::from(background.height) * max_ratio / f64::from(card.height);
    Ok(sx.min(sy))
}

/// Dimensions after uniform scaling, rounded to the nearest pixel.
pub fn scaled_dims(card: Dims, scale: f64) -> Dims {
    Dims::new(
        (f64::from(card.width) * scale).round() as u32,
        (f64::from(card.height) * scale).round() as u32,
    )
}

/// Axis-aligned bounding box of `dims` rotated by `angle_deg`, rounded up.
pub fn rotated_bounds(dims: Dims, angle_deg: f64) -> Dims {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let w = f64::from(dims.width);
    let h = f64::from(dims.height);
    Dims::new(
        ((w * cos).abs() + (h * sin).abs()).ceil() as u32,
        ((w * sin).abs() + (h * cos).abs()).ceil() as u32,
    )
}

/// Forward transform from source pixel space into the rotated canvas.
///
/// Positive angles turn the content counter-clockwise on screen (y axis pointing down). The
/// source center lands on the canvas center, which is the same as rotating about the source
/// center and then shifting by `(canvas - src) / 2` on each axis.
pub fn rotation_about_center(src: Dims, canvas: Dims, angle_deg: f64) -> Affine {
    let src_center = Vec2::new(f64::from(src.width) / 2.0, f64::from(src.height) / 2.0);
    let canvas_center = Vec2::new(f64::from(canvas.width) / 2.0, f64::from(canvas.height) / 2.0);

    // T(canvas_center) * R(-angle) * T(-src_center)
    Affine::translate(canvas_center)
        * Affine::rotate(-angle_deg.to_radians())
        * Affine::translate(-src_center)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
