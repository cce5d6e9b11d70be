//! Card augmentation engine for synthetic detector training data.
//!
//! The crate composites scaled, rotated card images onto background photographs. The
//! interesting part is the engine:
//!
//! 1. **Scale**: shrink the card so each side covers at most 20% of the background.
//! 2. **Rotate**: resample into a transparent canvas sized to the rotated bounding box.
//! 3. **Place**: draw a random origin that keeps the canvas fully inside the background.
//! 4. **Blit**: copy every canvas pixel with non-zero alpha over the composite.
//!
//! Everything around it (loading card/background corpora, writing JPEG outputs, the
//! two-layer orchestration loop, and the CLI) is an adapter layer. The engine only sees raw
//! image buffers and an explicit [`RandomSource`], so a fixed seed reproduces a run exactly.
#![forbid(unsafe_code)]

mod assets;
mod config;
mod encode;
mod foundation;
mod generate;
mod overlay;

/// Geometric helpers for the scale → rotate pipeline.
pub mod transform;

pub use assets::decode::{decode_background, decode_card, load_background, load_card};
pub use assets::repository::{CardRepository, DEFAULT_BACKGROUND_LIMIT};
pub use config::{DEFAULT_BACKGROUNDS_DIR, GeneratorConfig};
pub use encode::sink::{
    DEFAULT_JPEG_QUALITY, ImageSink, InMemorySink, JpegDirSink, ensure_dir, output_file_name,
};
pub use foundation::core::{Affine, Dims, Placement, Point, Vec2};
pub use foundation::error::{AugmentError, AugmentResult};
pub use foundation::rng::RandomSource;
pub use generate::session::{GenerateSession, GenerateStats};
pub use overlay::augment::{
    AugmentOpts, Overlay, OverlayCanvas, augment_card, augment_card_at_angle, render_overlay,
};
pub use overlay::blit::{blit_cutout, footprint};
pub use overlay::placement::sample_placement;
