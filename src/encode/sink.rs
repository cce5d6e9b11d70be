use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbImage;
use image::codecs::jpeg::JpegEncoder;

use crate::foundation::core::Dims;
use crate::foundation::error::{AugmentError, AugmentResult};

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Consumer of finished composites.
///
/// `index` is the primary card's position in load order. Indices arrive in increasing order
/// but may have gaps where an item was skipped.
pub trait ImageSink {
    /// Persist or collect one composite.
    fn push_image(&mut self, index: usize, image: &RgbImage) -> AugmentResult<()>;
}

/// File name used for the composite of primary card `index`.
pub fn output_file_name(index: usize) -> String {
    format!("generated_image_new_{index}.jpg")
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> AugmentResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory '{}'", dir.display()))?;
    Ok(())
}

/// Writes each composite as `generated_image_new_<index>.jpg` into one directory.
#[derive(Debug)]
pub struct JpegDirSink {
    out_dir: PathBuf,
    quality: u8,
    dir_ready: bool,
}

impl JpegDirSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            quality: DEFAULT_JPEG_QUALITY,
            dir_ready: false,
        }
    }

    /// Override the JPEG quality, clamped to `1..=100`.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn output_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Point the sink at a new directory. An empty path is ignored with a warning and the
    /// previous directory stays in effect; returns whether the change was applied.
    pub fn set_output_dir(&mut self, out_dir: impl AsRef<Path>) -> bool {
        let out_dir = out_dir.as_ref();
        if out_dir.as_os_str().is_empty() {
            tracing::warn!(
                current = %self.out_dir.display(),
                "ignoring empty output directory"
            );
            return false;
        }
        self.out_dir = out_dir.to_path_buf();
        self.dir_ready = false;
        true
    }

    pub fn path_for(&self, index: usize) -> PathBuf {
        self.out_dir.join(output_file_name(index))
    }
}

impl ImageSink for JpegDirSink {
    fn push_image(&mut self, index: usize, image: &RgbImage) -> AugmentResult<()> {
        if Dims::of_rgb(image).is_empty() {
            return Err(AugmentError::empty_input(format!(
                "composite {index} has no pixels, nothing to save"
            )));
        }
        if !self.dir_ready {
            ensure_dir(&self.out_dir)?;
            self.dir_ready = true;
        }

        let path = self.path_for(index);
        let file =
            File::create(&path).with_context(|| format!("create output '{}'", path.display()))?;
        let mut w = BufWriter::new(file);
        image
            .write_with_encoder(JpegEncoder::new_with_quality(&mut w, self.quality))
            .with_context(|| format!("encode jpeg '{}'", path.display()))?;
        w.flush()
            .with_context(|| format!("flush output '{}'", path.display()))?;

        tracing::info!(path = %path.display(), "image saved");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    pub(crate) images: Vec<(usize, RgbImage)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured composites with their indices, in push order.
    pub fn images(&self) -> &[(usize, RgbImage)] {
        &self.images
    }
}

impl ImageSink for InMemorySink {
    fn push_image(&mut self, index: usize, image: &RgbImage) -> AugmentResult<()> {
        self.images.push((index, image.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
