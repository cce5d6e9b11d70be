use crate::foundation::core::Dims;

/// Convenience result type used across the crate.
pub type AugmentResult<T> = Result<T, AugmentError>;

/// Error taxonomy for the augmentation engine and its adapters.
#[derive(thiserror::Error, Debug)]
pub enum AugmentError {
    /// A card or background raster has no pixels.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Scaling or rotation collapsed the overlay to nothing.
    #[error("degenerate transform: {0}")]
    DegenerateTransform(String),

    /// The rotated overlay canvas does not fit inside the background.
    #[error("oversized overlay: canvas {canvas} exceeds background {background}")]
    OversizedOverlay {
        /// Rotated canvas dimensions.
        canvas: Dims,
        /// Background dimensions.
        background: Dims,
    },

    /// Invalid configuration or arguments.
    #[error("validation error: {0}")]
    Validation(String),

    /// A required corpus (cards or backgrounds) is missing or empty.
    #[error("empty corpus: {0}")]
    EmptyCorpus(String),

    /// The output sink accepted none of the composites of a run.
    #[error("output unwritable: {0}")]
    OutputUnwritable(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AugmentError {
    pub fn empty_input(msg: impl Into<String>) -> Self {
        Self::EmptyInput(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateTransform(msg.into())
    }

    pub fn oversized(canvas: Dims, background: Dims) -> Self {
        Self::OversizedOverlay { canvas, background }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn empty_corpus(msg: impl Into<String>) -> Self {
        Self::EmptyCorpus(msg.into())
    }

    pub fn output_unwritable(msg: impl Into<String>) -> Self {
        Self::OutputUnwritable(msg.into())
    }

    /// Whether a generation loop may skip the current item and keep going.
    pub fn is_per_item(&self) -> bool {
        !matches!(
            self,
            Self::EmptyCorpus(_) | Self::Validation(_) | Self::OutputUnwritable(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
