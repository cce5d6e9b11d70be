use image::{RgbImage, RgbaImage};

use crate::foundation::core::{Dims, Placement};
use crate::foundation::error::{AugmentError, AugmentResult};
use crate::foundation::rng::RandomSource;
use crate::overlay::blit::blit_cutout;
use crate::overlay::placement::sample_placement;
use crate::transform::affine::{rotated_bounds, rotation_about_center, scale_factor, scaled_dims};
use crate::transform::resample::{resize_bilinear, warp_affine_bilinear};

/// Tunables for a single overlay application.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AugmentOpts {
    /// Largest share of each background axis the scaled card may cover.
    pub max_scale_ratio: f64,
    /// Rotation angles are drawn from `[-max_angle_deg, max_angle_deg]`.
    pub max_angle_deg: f64,
}

impl Default for AugmentOpts {
    fn default() -> Self {
        Self {
            max_scale_ratio: 0.2,
            max_angle_deg: 30.0,
        }
    }
}

impl AugmentOpts {
    pub fn validate(&self) -> AugmentResult<()> {
        if !self.max_scale_ratio.is_finite()
            || self.max_scale_ratio <= 0.0
            || self.max_scale_ratio > 1.0
        {
            return Err(AugmentError::validation(
                "max_scale_ratio must be in (0, 1]",
            ));
        }
        if !self.max_angle_deg.is_finite() || !(0.0..=90.0).contains(&self.max_angle_deg) {
            return Err(AugmentError::validation(
                "max_angle_deg must be in [0, 90]",
            ));
        }
        Ok(())
    }
}

/// Scaled and rotated card on a transparent field, ready to be placed.
#[derive(Clone, Debug)]
pub struct OverlayCanvas {
    pub image: RgbaImage,
    pub scale: f64,
    pub angle_deg: f64,
}

/// What one engine application did to the composite.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Overlay {
    pub scale: f64,
    pub angle_deg: f64,
    pub canvas: Dims,
    pub origin: Placement,
}

/// Scale `card` against `background` and rotate it by `angle_deg` into its bounding canvas.
///
/// Pure: no randomness is consumed.
pub fn render_overlay(
    card: &RgbaImage,
    background: Dims,
    angle_deg: f64,
    opts: &AugmentOpts,
) -> AugmentResult<OverlayCanvas> {
    let card_dims = Dims::of_rgba(card);
    let scale = scale_factor(card_dims, background, opts.max_scale_ratio)?;

    let resized_dims = scaled_dims(card_dims, scale);
    if resized_dims.is_empty() {
        return Err(AugmentError::degenerate(format!(
            "card {card_dims} scaled by {scale} is {resized_dims}"
        )));
    }
    let resized = resize_bilinear(card, resized_dims);

    let canvas_dims = rotated_bounds(resized_dims, angle_deg);
    if canvas_dims.is_empty() {
        return Err(AugmentError::degenerate(format!(
            "rotated canvas for {resized_dims} at {angle_deg} deg is {canvas_dims}"
        )));
    }
    let forward = rotation_about_center(resized_dims, canvas_dims, angle_deg);
    let image = warp_affine_bilinear(&resized, forward, canvas_dims)?;

    Ok(OverlayCanvas {
        image,
        scale,
        angle_deg,
    })
}

/// Apply one randomly rotated, randomly placed overlay of `card` onto `composite`.
///
/// Draws the angle, then the placement. On error `composite` is left exactly as it was.
pub fn augment_card(
    card: &RgbaImage,
    composite: &mut RgbImage,
    rng: &mut RandomSource,
    opts: &AugmentOpts,
) -> AugmentResult<Overlay> {
    ensure_inputs(card, composite)?;
    let angle_deg = rng.angle_deg(opts.max_angle_deg);
    apply_at_angle(card, composite, angle_deg, rng, opts)
}

/// Like [`augment_card`] with a fixed rotation; only the placement is drawn from `rng`.
pub fn augment_card_at_angle(
    card: &RgbaImage,
    composite: &mut RgbImage,
    angle_deg: f64,
    rng: &mut RandomSource,
    opts: &AugmentOpts,
) -> AugmentResult<Overlay> {
    ensure_inputs(card, composite)?;
    apply_at_angle(card, composite, angle_deg, rng, opts)
}

// Callers have already rejected empty inputs.
fn apply_at_angle(
    card: &RgbaImage,
    composite: &mut RgbImage,
    angle_deg: f64,
    rng: &mut RandomSource,
    opts: &AugmentOpts,
) -> AugmentResult<Overlay> {
    let background = Dims::of_rgb(composite);
    let rendered = render_overlay(card, background, angle_deg, opts)?;
    let canvas = Dims::of_rgba(&rendered.image);

    let origin = sample_placement(canvas, background, rng)?;
    blit_cutout(&rendered.image, composite, origin)?;

    Ok(Overlay {
        scale: rendered.scale,
        angle_deg: rendered.angle_deg,
        canvas,
        origin,
    })
}

fn ensure_inputs(card: &RgbaImage, composite: &RgbImage) -> AugmentResult<()> {
    if Dims::of_rgba(card).is_empty() {
        return Err(AugmentError::empty_input("card image has no pixels"));
    }
    if Dims::of_rgb(composite).is_empty() {
        return Err(AugmentError::empty_input("background image has no pixels"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/augment.rs"]
mod tests;
