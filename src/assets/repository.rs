use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{RgbImage, RgbaImage};

use crate::assets::decode::{load_background, open_card};
use crate::foundation::error::{AugmentError, AugmentResult};
use crate::foundation::rng::RandomSource;

/// Number of background paths kept when no explicit limit is configured.
pub const DEFAULT_BACKGROUND_LIMIT: usize = 45;

/// Card and background corpora for one generation run.
///
/// Cards are decoded up front and kept for the lifetime of the repository. Backgrounds are
/// only listed; [`CardRepository::draw_background`] decodes the drawn one on every call.
#[derive(Clone, Debug)]
pub struct CardRepository {
    cards_dir: PathBuf,
    card_paths: Vec<PathBuf>,
    cards: Vec<RgbaImage>,
    background_paths: Vec<PathBuf>,
}

impl CardRepository {
    /// Load every decodable card in `cards_dir` and list up to `background_limit` backgrounds.
    ///
    /// Directory entries are visited in path order. Fails with [`AugmentError::EmptyCorpus`]
    /// when either corpus ends up empty.
    #[tracing::instrument(skip_all, fields(cards_dir = %cards_dir.as_ref().display()))]
    pub fn open(
        cards_dir: impl AsRef<Path>,
        backgrounds_dir: impl AsRef<Path>,
        background_limit: usize,
    ) -> AugmentResult<Self> {
        let cards_dir = cards_dir.as_ref();
        let (card_paths, cards) = load_cards(cards_dir)?;
        let background_paths = list_backgrounds(backgrounds_dir.as_ref(), background_limit)?;

        if cards.is_empty() {
            return Err(AugmentError::empty_corpus(format!(
                "no decodable card images in '{}'",
                cards_dir.display()
            )));
        }

        tracing::info!(
            cards = cards.len(),
            backgrounds = background_paths.len(),
            "repository ready"
        );
        Ok(Self {
            cards_dir: cards_dir.to_path_buf(),
            card_paths,
            cards,
            background_paths,
        })
    }

    /// Replace the card corpus with the contents of `cards_dir`.
    ///
    /// The current cards stay in place when the new directory yields none.
    pub fn set_cards_dir(&mut self, cards_dir: impl AsRef<Path>) -> AugmentResult<usize> {
        let cards_dir = cards_dir.as_ref();
        let (card_paths, cards) = load_cards(cards_dir)?;
        if cards.is_empty() {
            return Err(AugmentError::empty_corpus(format!(
                "no decodable card images in '{}'",
                cards_dir.display()
            )));
        }
        self.cards_dir = cards_dir.to_path_buf();
        self.card_paths = card_paths;
        self.cards = cards;
        Ok(self.cards.len())
    }

    pub fn cards_dir(&self) -> &Path {
        &self.cards_dir
    }

    /// Cards in load order; the index doubles as the output index.
    pub fn cards(&self) -> &[RgbaImage] {
        &self.cards
    }

    pub fn card_paths(&self) -> &[PathBuf] {
        &self.card_paths
    }

    pub fn background_paths(&self) -> &[PathBuf] {
        &self.background_paths
    }

    /// Pick a background uniformly and decode it.
    pub fn draw_background(&self, rng: &mut RandomSource) -> AugmentResult<RgbImage> {
        let idx = rng
            .index(self.background_paths.len())
            .ok_or_else(|| AugmentError::empty_corpus("no background images listed"))?;
        let path = &self.background_paths[idx];
        tracing::debug!(path = %path.display(), "loading background");
        load_background(path)
    }

    /// Pick any card uniformly, the primary card included.
    pub fn draw_card(&self, rng: &mut RandomSource) -> AugmentResult<&RgbaImage> {
        let idx = rng
            .index(self.cards.len())
            .ok_or_else(|| AugmentError::empty_corpus("no card images loaded"))?;
        Ok(&self.cards[idx])
    }
}

fn sorted_files(dir: &Path) -> AugmentResult<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory '{}'", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read entry in '{}'", dir.display()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_cards(dir: &Path) -> AugmentResult<(Vec<PathBuf>, Vec<RgbaImage>)> {
    tracing::info!(dir = %dir.display(), "loading cards");
    let mut paths = Vec::new();
    let mut cards = Vec::new();
    for path in sorted_files(dir)? {
        match open_card(&path) {
            Ok(decoded) => {
                if decoded.promoted {
                    tracing::info!(path = %path.display(), "card promoted to RGBA");
                }
                tracing::debug!(path = %path.display(), "card loaded");
                paths.push(path);
                cards.push(decoded.image);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable card");
            }
        }
    }
    tracing::info!(count = cards.len(), "cards loaded");
    Ok((paths, cards))
}

fn list_backgrounds(dir: &Path, limit: usize) -> AugmentResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(AugmentError::empty_corpus(format!(
            "background directory '{}' does not exist",
            dir.display()
        )));
    }
    let mut paths = sorted_files(dir)?;
    paths.truncate(limit);
    if paths.is_empty() {
        return Err(AugmentError::empty_corpus(format!(
            "no background images in '{}'",
            dir.display()
        )));
    }
    Ok(paths)
}
