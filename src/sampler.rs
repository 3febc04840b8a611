//! Per-pixel, per-channel sample extraction.

use crate::channel::{Channel, Planes};
use crate::depth::DepthTable;
use crate::error::SampleError;

/// Reads canonical 8-bit channel values out of a set of [`Planes`].
///
/// Coordinates outside the image read as 0, as do absent channels. Every
/// other sample is re-quantized from its plane's precision with
/// [`requantize`](crate::requantize).
///
/// ```
/// use rebit::{Channel, ChannelPlane, ChannelSampler, Planes};
///
/// let planes = Planes::luma(ChannelPlane::new(1, vec![0, 1]).unwrap());
/// let sampler = ChannelSampler::new(2, 1, &planes);
/// assert_eq!(sampler.sample(1, 0, Channel::Red), Ok(255));
/// assert_eq!(sampler.sample(2, 0, Channel::Red), Ok(0));
/// ```
#[derive(Clone, Debug)]
pub struct ChannelSampler<'a> {
    width: usize,
    height: usize,
    planes: &'a Planes,
    tables: [DepthTable; 4],
}

impl<'a> ChannelSampler<'a> {
    /// Sample `planes` as a `width` × `height` image.
    pub fn new(width: usize, height: usize, planes: &'a Planes) -> Self {
        let tables = Channel::ALL.map(|ch| DepthTable::new(planes.precision(ch)));
        Self {
            width,
            height,
            planes,
            tables,
        }
    }

    /// Image width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The 8-bit value of `channel` at `(x, y)`.
    ///
    /// Fails only when a present plane is too short to hold pixel `(x, y)`.
    #[inline]
    pub fn sample(&self, x: usize, y: usize, channel: Channel) -> Result<u8, SampleError> {
        if x >= self.width || y >= self.height {
            return Ok(0);
        }
        let plane = &self.planes[channel];
        if !plane.is_present() {
            return Ok(0);
        }
        // Saturates when width * height overflows; no plane reaches that far.
        let index = y
            .checked_mul(self.width)
            .and_then(|row| row.checked_add(x))
            .unwrap_or(usize::MAX);
        let raw = *plane.samples().get(index).ok_or(SampleError::Truncated {
            channel,
            index,
            len: plane.len(),
        })?;
        Ok(self.tables[channel.index()].map(raw))
    }

    /// Like [`sample`](Self::sample) with a numeric channel selector
    /// (0 = red … 3 = alpha).
    ///
    /// Out-of-bounds coordinates read as 0 before the selector is looked at.
    /// An unknown selector is logged and returned as
    /// [`SampleError::UnknownChannel`].
    pub fn sample_index(&self, x: usize, y: usize, channel: u32) -> Result<u8, SampleError> {
        if x >= self.width || y >= self.height {
            return Ok(0);
        }
        let channel = Channel::try_from(channel).inspect_err(|err| log::error!("{err}"))?;
        self.sample(x, y, channel)
    }

    /// Sample row `y` of `channel` into `dst[..width]`.
    ///
    /// Same values as calling [`sample`](Self::sample) for every `x`.
    pub(crate) fn sample_row(
        &self,
        y: usize,
        channel: Channel,
        dst: &mut [u8],
    ) -> Result<(), SampleError> {
        let dst = &mut dst[..self.width];
        let plane = &self.planes[channel];
        if y >= self.height || !plane.is_present() {
            dst.fill(0);
            return Ok(());
        }
        let start = y.checked_mul(self.width).unwrap_or(usize::MAX);
        let row = start
            .checked_add(self.width)
            .and_then(|end| plane.samples().get(start..end))
            .ok_or(SampleError::Truncated {
                channel,
                index: plane.len().max(start),
                len: plane.len(),
            })?;
        self.tables[channel.index()].map_row(row, dst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelPlane;
    use alloc::vec;
    use alloc::vec::Vec;

    fn gradient_planes(precision: u8, w: usize, h: usize) -> Planes {
        let mask = ((1u32 << precision) - 1) as u8;
        let samples: Vec<u8> = (0..w * h).map(|i| i as u8 & mask).collect();
        Planes::new(
            ChannelPlane::new(precision, samples.clone()).unwrap(),
            ChannelPlane::new(precision, samples.clone()).unwrap(),
            ChannelPlane::new(precision, samples.clone()).unwrap(),
            ChannelPlane::new(precision, samples).unwrap(),
        )
    }

    #[test]
    fn out_of_bounds_is_zero() {
        let planes = gradient_planes(8, 3, 2);
        let sampler = ChannelSampler::new(3, 2, &planes);
        for ch in Channel::ALL {
            assert_eq!(sampler.sample(3, 0, ch), Ok(0));
            assert_eq!(sampler.sample(0, 2, ch), Ok(0));
            assert_eq!(sampler.sample(usize::MAX, usize::MAX, ch), Ok(0));
        }
    }

    #[test]
    fn eight_bit_is_identity() {
        let planes = gradient_planes(8, 4, 4);
        let sampler = ChannelSampler::new(4, 4, &planes);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(sampler.sample(x, y, Channel::Blue), Ok((y * 4 + x) as u8));
            }
        }
    }

    #[test]
    fn one_bit_replicates() {
        let planes = Planes::luma(ChannelPlane::new(1, vec![0, 1, 1, 0]).unwrap());
        let sampler = ChannelSampler::new(2, 2, &planes);
        assert_eq!(sampler.sample(0, 0, Channel::Red), Ok(0));
        assert_eq!(sampler.sample(1, 0, Channel::Red), Ok(255));
        assert_eq!(sampler.sample(0, 1, Channel::Red), Ok(255));
        assert_eq!(sampler.sample(1, 1, Channel::Red), Ok(0));
    }

    #[test]
    fn absent_channel_is_zero() {
        let planes = Planes::luma(ChannelPlane::full(vec![200]));
        let sampler = ChannelSampler::new(1, 1, &planes);
        assert_eq!(sampler.sample(0, 0, Channel::Red), Ok(200));
        assert_eq!(sampler.sample(0, 0, Channel::Green), Ok(0));
        assert_eq!(sampler.sample(0, 0, Channel::Alpha), Ok(0));
    }

    #[test]
    fn unknown_channel_index() {
        let planes = gradient_planes(8, 2, 2);
        let sampler = ChannelSampler::new(2, 2, &planes);
        assert_eq!(sampler.sample_index(1, 1, 2), Ok(3));
        assert_eq!(
            sampler.sample_index(0, 0, 4),
            Err(SampleError::UnknownChannel(4))
        );
        // Bounds are resolved first.
        assert_eq!(sampler.sample_index(5, 0, 4), Ok(0));
    }

    #[test]
    fn truncated_plane() {
        let planes = Planes::luma(ChannelPlane::full(vec![1, 2, 3]));
        let sampler = ChannelSampler::new(2, 2, &planes);
        assert_eq!(sampler.sample(0, 1, Channel::Red), Ok(3));
        assert_eq!(
            sampler.sample(1, 1, Channel::Red),
            Err(SampleError::Truncated {
                channel: Channel::Red,
                index: 3,
                len: 3
            })
        );
    }

    #[test]
    fn overflowing_dimensions_report_truncation() {
        let planes = Planes::luma(ChannelPlane::full(vec![1]));
        let sampler = ChannelSampler::new(usize::MAX, 2, &planes);
        assert_eq!(sampler.sample(0, 0, Channel::Red), Ok(1));
        let truncated = Err(SampleError::Truncated {
            channel: Channel::Red,
            index: usize::MAX,
            len: 1,
        });
        assert_eq!(sampler.sample(1, 1, Channel::Red), truncated);
        assert_eq!(sampler.sample_index(1, 1, 0), truncated);
        assert_eq!(sampler.sample(usize::MAX - 1, 1, Channel::Green), Ok(0));
    }

    #[test]
    fn row_matches_per_pixel() {
        for precision in [1u8, 2, 3, 4, 5, 6, 7, 8] {
            let planes = gradient_planes(precision, 7, 3);
            let sampler = ChannelSampler::new(7, 3, &planes);
            let mut row = [0u8; 7];
            for y in 0..3 {
                sampler.sample_row(y, Channel::Green, &mut row).unwrap();
                for (x, &v) in row.iter().enumerate() {
                    assert_eq!(Ok(v), sampler.sample(x, y, Channel::Green));
                }
            }
        }
    }

    #[test]
    fn row_reports_first_missing_pixel() {
        let planes = Planes::luma(ChannelPlane::full(vec![1, 2, 3]));
        let sampler = ChannelSampler::new(2, 2, &planes);
        let mut row = [0u8; 2];
        assert!(sampler.sample_row(0, Channel::Red, &mut row).is_ok());
        assert_eq!(
            sampler.sample_row(1, Channel::Red, &mut row),
            Err(SampleError::Truncated {
                channel: Channel::Red,
                index: 3,
                len: 3
            })
        );
    }
}
