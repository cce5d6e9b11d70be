//! Run configuration loaded from JSON, with CLI flags layered on top by the binary.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::assets::repository::DEFAULT_BACKGROUND_LIMIT;
use crate::encode::sink::DEFAULT_JPEG_QUALITY;
use crate::foundation::error::{AugmentError, AugmentResult};
use crate::foundation::rng::RandomSource;
use crate::overlay::augment::AugmentOpts;

/// Background directory used when none is configured, relative to the working directory.
pub const DEFAULT_BACKGROUNDS_DIR: &str = "img/background_samples";

/// Tunables for a generation run. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Card image directory; the positional CLI argument wins when given.
    pub cards_dir: Option<PathBuf>,
    /// Output directory for composites; the positional CLI argument wins when given.
    pub output_dir: Option<PathBuf>,
    /// Directory holding background photographs.
    pub backgrounds_dir: PathBuf,
    /// At most this many background paths are listed.
    pub background_limit: usize,
    /// Fixed seed for reproducible runs; OS entropy when absent.
    pub seed: Option<u64>,
    /// JPEG quality of written composites.
    pub jpeg_quality: u8,
    /// Per-overlay engine settings.
    pub augment: AugmentOpts,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cards_dir: None,
            output_dir: None,
            backgrounds_dir: PathBuf::from(DEFAULT_BACKGROUNDS_DIR),
            background_limit: DEFAULT_BACKGROUND_LIMIT,
            seed: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            augment: AugmentOpts::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> AugmentResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AugmentError::validation(format!("parse generator config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> AugmentResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AugmentError::validation(format!("open generator config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> AugmentResult<()> {
        if self.background_limit == 0 {
            return Err(AugmentError::validation("background_limit must be > 0"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(AugmentError::validation("jpeg_quality must be in 1..=100"));
        }
        self.augment.validate()
    }

    /// Cards and output directories with `cards`/`output` taking precedence over the
    /// configured values. Fails when either directory is given by neither.
    pub fn resolve_dirs(
        &self,
        cards: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> AugmentResult<(PathBuf, PathBuf)> {
        let cards = cards
            .or_else(|| self.cards_dir.clone())
            .ok_or_else(|| AugmentError::validation("no cards directory given"))?;
        let output = output
            .or_else(|| self.output_dir.clone())
            .ok_or_else(|| AugmentError::validation("no output directory given"))?;
        Ok((cards, output))
    }

    /// Random source for this run: seeded when `seed` is set.
    pub fn random_source(&self) -> RandomSource {
        match self.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_os_entropy(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
