use crate::foundation::core::{Dims, Placement};
use crate::foundation::error::{AugmentError, AugmentResult};
use crate::foundation::rng::RandomSource;

/// Draw a uniform origin that keeps `canvas` fully inside `background`.
///
/// Consumes the x offset first, then the y offset. Nothing is drawn when the canvas does not
/// fit.
pub fn sample_placement(
    canvas: Dims,
    background: Dims,
    rng: &mut RandomSource,
) -> AugmentResult<Placement> {
    if !canvas.fits_within(background) {
        return Err(AugmentError::oversized(canvas, background));
    }
    let x = rng.offset(background.width - canvas.width);
    let y = rng.offset(background.height - canvas.height);
    Ok(Placement::new(x, y))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/placement.rs"]
mod tests;
