//! Packing channel planes into an RGBA8 image.

use alloc::vec;
use alloc::vec::Vec;

use imgref::ImgVec;
use rgb::Rgba;

use crate::channel::{Channel, Planes};
use crate::error::{AssembleError, SizeError};
use crate::sampler::ChannelSampler;

/// Validate `width` × `height` and return the pixel count.
pub(crate) fn pixel_count(width: usize, height: usize) -> Result<usize, SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::ZeroDimension);
    }
    let pixels = width.checked_mul(height).ok_or(SizeError::DimensionOverflow)?;
    pixels.checked_mul(4).ok_or(SizeError::DimensionOverflow)?;
    Ok(pixels)
}

/// Assemble `planes` into a packed `width` × `height` RGBA8 image.
///
/// Every channel is re-quantized to 8 bits. Absent green and blue take the
/// red value, so a red-only source comes out gray; absent alpha is 255.
///
/// Fails without returning any pixels if red is absent or any present plane
/// is too short to cover the image.
///
/// ```
/// use rebit::{ChannelPlane, Planes};
/// use rgb::Rgba;
///
/// let planes = Planes::luma(ChannelPlane::full(vec![200]));
/// let img = rebit::assemble(1, 1, &planes).unwrap();
/// assert_eq!(img.buf()[0], Rgba::new(200, 200, 200, 255));
/// ```
pub fn assemble(
    width: usize,
    height: usize,
    planes: &Planes,
) -> Result<ImgVec<Rgba<u8>>, AssembleError> {
    let pixels = pixel_count(width, height)?;
    if !planes[Channel::Red].is_present() {
        log::warn!("cannot assemble {width}x{height} image without a red channel");
        return Err(AssembleError::MissingRed);
    }

    let sampler = ChannelSampler::new(width, height, planes);
    let mut out = vec![Rgba::new(0u8, 0, 0, 0); pixels];
    let mut rows: [Vec<u8>; 4] = [vec![0; width], vec![0; width], vec![0; width], vec![0xFF; width]];
    let [red, green, blue, alpha] = &mut rows;

    for (y, dst_row) in out.chunks_exact_mut(width).enumerate() {
        sampler
            .sample_row(y, Channel::Red, red)
            .inspect_err(|err| log::warn!("assembly rejected: {err}"))?;
        for (channel, row) in [(Channel::Green, &mut *green), (Channel::Blue, &mut *blue)] {
            if planes[channel].is_present() {
                sampler
                    .sample_row(y, channel, row)
                    .inspect_err(|err| log::warn!("assembly rejected: {err}"))?;
            } else {
                row.copy_from_slice(red);
            }
        }
        if planes[Channel::Alpha].is_present() {
            sampler
                .sample_row(y, Channel::Alpha, alpha)
                .inspect_err(|err| log::warn!("assembly rejected: {err}"))?;
        }
        let dst: &mut [u8] = bytemuck::cast_slice_mut(dst_row);
        crate::bytes::interleave_rgba(red, green, blue, alpha, dst)
            .expect("scratch rows always match the image width");
    }

    log::debug!(
        "assembled {width}x{height} RGBA8 from precisions r={} g={} b={} a={}",
        planes.precision(Channel::Red),
        planes.precision(Channel::Green),
        planes.precision(Channel::Blue),
        planes.precision(Channel::Alpha),
    );
    Ok(ImgVec::new(out, width, height))
}
