use image::{RgbImage, RgbaImage};

use crate::assets::repository::CardRepository;
use crate::encode::sink::ImageSink;
use crate::foundation::error::{AugmentError, AugmentResult};
use crate::foundation::rng::RandomSource;
use crate::overlay::augment::{AugmentOpts, augment_card};

/// Counters for one [`GenerateSession::run`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct GenerateStats {
    /// Primary cards visited.
    pub cards_total: usize,
    /// Composites accepted by the sink.
    pub images_written: usize,
    /// Iterations dropped because of a per-item failure.
    pub images_skipped: usize,
    /// Skipped iterations whose composite the sink failed to store.
    pub sink_failures: usize,
}

/// Two-layer composition loop over a [`CardRepository`].
///
/// Every card in load order becomes the primary layer of one composite. A random background
/// is drawn, then a random second card (possibly the same one), and both are applied in
/// sequence so the second overlay wins wherever they overlap.
#[derive(Debug)]
pub struct GenerateSession {
    repo: CardRepository,
    opts: AugmentOpts,
}

impl GenerateSession {
    pub fn new(repo: CardRepository, opts: AugmentOpts) -> AugmentResult<Self> {
        opts.validate()?;
        if repo.cards().is_empty() {
            return Err(AugmentError::empty_corpus("no card images loaded"));
        }
        Ok(Self { repo, opts })
    }

    pub fn repository(&self) -> &CardRepository {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut CardRepository {
        &mut self.repo
    }

    pub fn opts(&self) -> &AugmentOpts {
        &self.opts
    }

    /// Generate one composite per card and hand each to `sink`.
    ///
    /// Per-item failures are logged and counted; only fatal errors stop the loop. A run in
    /// which the sink stored nothing and rejected at least one composite is fatal.
    #[tracing::instrument(skip_all, fields(cards = self.repo.cards().len()))]
    pub fn run(
        &self,
        rng: &mut RandomSource,
        sink: &mut dyn ImageSink,
    ) -> AugmentResult<GenerateStats> {
        tracing::info!("generation started");
        let mut stats = GenerateStats {
            cards_total: self.repo.cards().len(),
            ..GenerateStats::default()
        };

        for (index, card) in self.repo.cards().iter().enumerate() {
            let composite = match self.compose(index, card, rng) {
                Ok(composite) => composite,
                Err(err) if err.is_per_item() => {
                    tracing::warn!(index, error = %err, "skipping composite");
                    stats.images_skipped += 1;
                    continue;
                }
                Err(err) => return Err(err),
            };
            match sink.push_image(index, &composite) {
                Ok(()) => stats.images_written += 1,
                Err(err) if err.is_per_item() => {
                    tracing::warn!(index, error = %err, "failed to store composite");
                    stats.images_skipped += 1;
                    stats.sink_failures += 1;
                }
                Err(err) => return Err(err),
            }
        }

        tracing::info!(
            written = stats.images_written,
            skipped = stats.images_skipped,
            sink_failures = stats.sink_failures,
            "generation finished"
        );
        if stats.images_written == 0 && stats.sink_failures > 0 {
            return Err(AugmentError::output_unwritable(format!(
                "sink stored none of {} composites ({} write failures)",
                stats.cards_total, stats.sink_failures
            )));
        }
        Ok(stats)
    }

    fn compose(
        &self,
        index: usize,
        primary: &RgbaImage,
        rng: &mut RandomSource,
    ) -> AugmentResult<RgbImage> {
        let mut composite = self.repo.draw_background(rng)?;
        let secondary = self.repo.draw_card(rng)?;

        let first = augment_card(primary, &mut composite, rng, &self.opts)?;
        let second = augment_card(secondary, &mut composite, rng, &self.opts)?;
        tracing::debug!(
            index,
            first_angle = first.angle_deg,
            first_x = first.origin.x,
            first_y = first.origin.y,
            second_angle = second.angle_deg,
            second_x = second.origin.x,
            second_y = second.origin.y,
            "composite ready"
        );
        Ok(composite)
    }
}
