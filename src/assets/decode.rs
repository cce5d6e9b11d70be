use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::foundation::core::Dims;
use crate::foundation::error::{AugmentError, AugmentResult};

/// Card raster plus whether an opaque alpha channel had to be synthesized.
#[derive(Clone, Debug)]
pub(crate) struct DecodedCard {
    pub(crate) image: RgbaImage,
    pub(crate) promoted: bool,
}

/// Decode encoded card bytes into straight RGBA8, adding opaque alpha when missing.
pub fn decode_card(bytes: &[u8]) -> AugmentResult<RgbaImage> {
    let img = image::load_from_memory(bytes).context("decode card image from memory")?;
    Ok(into_card(img)?.image)
}

/// Read and decode a card image from disk.
pub fn load_card(path: &Path) -> AugmentResult<RgbaImage> {
    Ok(open_card(path)?.image)
}

/// Decode encoded background bytes into opaque RGB8.
pub fn decode_background(bytes: &[u8]) -> AugmentResult<RgbImage> {
    let img = image::load_from_memory(bytes).context("decode background image from memory")?;
    into_background(img)
}

/// Read and decode a background image from disk.
pub fn load_background(path: &Path) -> AugmentResult<RgbImage> {
    let img = image::open(path)
        .with_context(|| format!("decode background image '{}'", path.display()))?;
    into_background(img)
}

pub(crate) fn open_card(path: &Path) -> AugmentResult<DecodedCard> {
    let img =
        image::open(path).with_context(|| format!("decode card image '{}'", path.display()))?;
    into_card(img)
}

fn into_card(img: DynamicImage) -> AugmentResult<DecodedCard> {
    let promoted = !img.color().has_alpha();
    let image = img.into_rgba8();
    if Dims::of_rgba(&image).is_empty() {
        return Err(AugmentError::empty_input("decoded card image has no pixels"));
    }
    Ok(DecodedCard { image, promoted })
}

fn into_background(img: DynamicImage) -> AugmentResult<RgbImage> {
    let image = img.into_rgb8();
    if Dims::of_rgb(&image).is_empty() {
        return Err(AugmentError::empty_input(
            "decoded background image has no pixels",
        ));
    }
    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
