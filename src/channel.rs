//! Channel selectors and per-channel sample planes.

use alloc::vec::Vec;
use core::ops::Index;

use crate::error::{PlaneError, SampleError, SizeError};

/// Widest precision a [`ChannelPlane`] accepts.
pub const MAX_PRECISION: u8 = 16;

/// One of the four color/alpha components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Channel {
    /// Red. The mandatory channel.
    Red = 0,
    /// Green.
    Green = 1,
    /// Blue.
    Blue = 2,
    /// Alpha.
    Alpha = 3,
}

impl Channel {
    /// All channels in packed byte order.
    pub const ALL: [Channel; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    /// Position of this channel within a packed RGBA pixel.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u32> for Channel {
    type Error = SampleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Red),
            1 => Ok(Self::Green),
            2 => Ok(Self::Blue),
            3 => Ok(Self::Alpha),
            _ => Err(SampleError::UnknownChannel(value)),
        }
    }
}

/// Samples for one channel at its native bit depth.
///
/// Each byte holds the low-order `precision` bits of one pixel's sample, in
/// row-major order. A precision of 0 means the channel is absent from the
/// source and the plane stores nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelPlane {
    precision: u8,
    samples: Vec<u8>,
}

impl ChannelPlane {
    /// A plane for a channel the source does not have.
    pub const fn absent() -> Self {
        Self {
            precision: 0,
            samples: Vec::new(),
        }
    }

    /// Wrap `samples` stored at `precision` bits each.
    ///
    /// A precision of 0 yields [`absent`](Self::absent) and drops `samples`.
    /// Precisions above 8 are accepted only for sources whose decoder already
    /// widened samples into the stored byte; the extra low bits are shifted
    /// out when sampled.
    pub fn new(precision: u8, samples: Vec<u8>) -> Result<Self, PlaneError> {
        if precision > MAX_PRECISION {
            return Err(PlaneError::PrecisionTooWide(precision));
        }
        if precision == 0 {
            return Ok(Self::absent());
        }
        Ok(Self {
            precision,
            samples,
        })
    }

    /// A full 8-bit plane.
    pub fn full(samples: Vec<u8>) -> Self {
        Self {
            precision: 8,
            samples,
        }
    }

    /// Bits per stored sample; 0 when absent.
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Whether the source carried this channel.
    #[inline]
    pub fn is_present(&self) -> bool {
        self.precision > 0
    }

    /// Raw stored samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Number of stored samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the plane, returning its samples.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }
}

/// The red, green, blue and alpha planes of one image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Planes {
    planes: [ChannelPlane; 4],
}

impl Planes {
    /// Group four planes.
    pub fn new(red: ChannelPlane, green: ChannelPlane, blue: ChannelPlane, alpha: ChannelPlane) -> Self {
        Self {
            planes: [red, green, blue, alpha],
        }
    }

    /// A red-only source; green and blue follow red, alpha is opaque.
    pub fn luma(red: ChannelPlane) -> Self {
        Self::new(
            red,
            ChannelPlane::absent(),
            ChannelPlane::absent(),
            ChannelPlane::absent(),
        )
    }

    /// The plane for `channel`.
    #[inline]
    pub fn plane(&self, channel: Channel) -> &ChannelPlane {
        &self.planes[channel.index()]
    }

    /// Replace the plane for `channel`.
    pub fn set(&mut self, channel: Channel, plane: ChannelPlane) {
        self.planes[channel.index()] = plane;
    }

    /// Precision of `channel`; 0 when absent.
    #[inline]
    pub fn precision(&self, channel: Channel) -> u8 {
        self.plane(channel).precision()
    }

    /// Check that every present plane holds exactly `pixels` samples.
    pub fn check_len(&self, pixels: usize) -> Result<(), SizeError> {
        for plane in self.planes.iter().filter(|p| p.is_present()) {
            if plane.len() != pixels {
                return Err(SizeError::PixelCountMismatch {
                    expected: pixels,
                    actual: plane.len(),
                });
            }
        }
        Ok(())
    }

    /// Consume into `[red, green, blue, alpha]`.
    pub fn into_inner(self) -> [ChannelPlane; 4] {
        self.planes
    }
}

impl Index<Channel> for Planes {
    type Output = ChannelPlane;

    #[inline]
    fn index(&self, channel: Channel) -> &ChannelPlane {
        self.plane(channel)
    }
}
