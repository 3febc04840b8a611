//! Error types.
//!
//! Every failure is detected before any output becomes visible: an
//! [`AssembleError`] or [`LoadError`] means no packed buffer was produced.

use thiserror::Error;

use crate::channel::Channel;
use crate::limits::LimitExceeded;

/// A buffer or image dimension does not fit the operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SizeError {
    /// Width or height is zero.
    #[error("image width and height must both be non-zero")]
    ZeroDimension,
    /// `width * height` (or its byte size) does not fit in `usize`.
    #[error("image dimensions overflow")]
    DimensionOverflow,
    /// Interleaved buffer length is not a whole number of 4-byte pixels.
    #[error("buffer length is not a whole number of pixels")]
    NotPixelAligned,
    /// Buffer holds a different number of pixels than the operation needs.
    #[error("buffer holds {actual} pixels, expected {expected}")]
    PixelCountMismatch {
        /// Pixels required.
        expected: usize,
        /// Pixels supplied.
        actual: usize,
    },
}

/// A channel plane could not be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlaneError {
    /// Precision is wider than [`MAX_PRECISION`](crate::MAX_PRECISION).
    #[error("channel precision of {0} bits exceeds the {max}-bit maximum", max = crate::MAX_PRECISION)]
    PrecisionTooWide(u8),
}

/// A single channel sample could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SampleError {
    /// Channel selector outside `0..4`.
    #[error("unspecified channel {0}")]
    UnknownChannel(u32),
    /// The plane is shorter than the pixel index being read.
    #[error("{channel:?} plane holds {len} samples, pixel {index} is past the end")]
    Truncated {
        /// Plane being sampled.
        channel: Channel,
        /// Linear pixel index (`y * width + x`).
        index: usize,
        /// Samples actually stored in the plane.
        len: usize,
    },
}

/// Packing channel planes into RGBA8 failed. No partial image is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AssembleError {
    /// The image dimensions are unusable.
    #[error(transparent)]
    Size(#[from] SizeError),
    /// A pixel could not be sampled.
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// The mandatory red plane has precision 0.
    #[error("red channel is absent")]
    MissingRed,
}

/// Loading the canonical RGBA8 image failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError<E> {
    /// The channel source failed to produce planes.
    #[error("channel decode failed: {0}")]
    Decode(E),
    /// The decoded planes could not be assembled.
    #[error(transparent)]
    Assemble(#[from] AssembleError),
    /// The image dimensions are unusable.
    #[error(transparent)]
    Size(#[from] SizeError),
    /// The image exceeds the configured [`Limits`](crate::Limits).
    #[error(transparent)]
    Limit(#[from] LimitExceeded),
}
