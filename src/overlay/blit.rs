use image::{Rgb, RgbImage, RgbaImage};

use crate::foundation::core::{Dims, Placement};
use crate::foundation::error::{AugmentError, AugmentResult};

/// Half-open pixel rectangle `(x0, y0, x1, y1)` covered by a canvas placed at `at`.
pub fn footprint(canvas: Dims, at: Placement) -> (u32, u32, u32, u32) {
    (
        at.x,
        at.y,
        at.x.saturating_add(canvas.width),
        at.y.saturating_add(canvas.height),
    )
}

/// Binary alpha cutout of `canvas` onto `composite` at `at`.
///
/// Every canvas pixel with alpha > 0 overwrites the composite RGB verbatim, however faint the
/// alpha is; alpha == 0 leaves the composite untouched. There is no blending. The footprint is
/// validated before any pixel is written.
pub fn blit_cutout(canvas: &RgbaImage, composite: &mut RgbImage, at: Placement) -> AugmentResult<()> {
    let canvas_dims = Dims::of_rgba(canvas);
    let bg = Dims::of_rgb(composite);
    let (_, _, x1, y1) = footprint(canvas_dims, at);
    if x1 > bg.width || y1 > bg.height {
        return Err(AugmentError::oversized(canvas_dims, bg));
    }

    for (px, py, pixel) in canvas.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a > 0 {
            composite.put_pixel(at.x + px, at.y + py, Rgb([r, g, b]));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/blit.rs"]
mod tests;
