//! Splitting already-packed RGBA8 images into four 8-bit planes.

use alloc::vec;
use alloc::vec::Vec;

use imgref::ImgRef;
use rgb::Rgba;

use crate::SizeError;
use crate::assemble::pixel_count;
use crate::channel::{ChannelPlane, Planes};

/// Destination row `y` reads source row `height - 1 - y` when flipping.
#[inline]
fn source_row(y: usize, height: usize, flip_y: bool) -> usize {
    if flip_y { height - 1 - y } else { y }
}

/// Split a row-major buffer of packed words (see [`packed`](crate::packed))
/// into four full-precision planes.
///
/// With `flip_y`, destination row 0 comes from the last source row.
/// `words` must hold exactly `width * height` entries.
///
/// ```
/// use rebit::Channel;
///
/// let planes = rebit::ingest_words(&[0xFF00_0001, 0xFF00_0002], 1, 2, true).unwrap();
/// assert_eq!(planes[Channel::Red].samples(), &[2, 1]);
/// assert_eq!(planes.precision(Channel::Alpha), 8);
/// ```
pub fn ingest_words(
    words: &[u32],
    width: usize,
    height: usize,
    flip_y: bool,
) -> Result<Planes, SizeError> {
    let pixels = pixel_count(width, height)?;
    if words.len() != pixels {
        return Err(SizeError::PixelCountMismatch {
            expected: pixels,
            actual: words.len(),
        });
    }
    let mut scratch = Vec::new();
    let planes = split_rows(width, height, |y, r, g, b, a| {
        let src = &words[source_row(y, height, flip_y) * width..][..width];
        deinterleave(crate::packed::row_bytes(src, &mut scratch), r, g, b, a);
    });
    log::trace!("ingested {width}x{height} packed words (flip_y={flip_y})");
    Ok(planes)
}

/// Split an [`ImgRef<Rgba<u8>>`] (strided or not) into four full-precision
/// planes. With `flip_y`, destination row 0 comes from the last source row.
pub fn ingest_rgba(img: ImgRef<'_, Rgba<u8>>, flip_y: bool) -> Result<Planes, SizeError> {
    let (width, height, stride) = (img.width(), img.height(), img.stride());
    pixel_count(width, height)?;
    let buf = img.buf();
    let planes = split_rows(width, height, |y, r, g, b, a| {
        let src = &buf[source_row(y, height, flip_y) * stride..][..width];
        deinterleave(bytemuck::cast_slice(src), r, g, b, a);
    });
    log::trace!("ingested {width}x{height} RGBA8 image (flip_y={flip_y})");
    Ok(planes)
}

#[inline]
fn deinterleave(src: &[u8], r: &mut [u8], g: &mut [u8], b: &mut [u8], a: &mut [u8]) {
    crate::bytes::deinterleave_rgba(src, r, g, b, a)
        .expect("source rows always hold width pixels");
}

/// Allocate four `width * height` planes and let `fill` write each row.
fn split_rows(
    width: usize,
    height: usize,
    mut fill: impl FnMut(usize, &mut [u8], &mut [u8], &mut [u8], &mut [u8]),
) -> Planes {
    let pixels = width * height;
    let mut planes = [vec![0u8; pixels], vec![0u8; pixels], vec![0u8; pixels], vec![0u8; pixels]];
    let [r, g, b, a] = &mut planes;
    let rows = r
        .chunks_exact_mut(width)
        .zip(g.chunks_exact_mut(width))
        .zip(b.chunks_exact_mut(width))
        .zip(a.chunks_exact_mut(width));
    for (y, (((r, g), b), a)) in rows.enumerate() {
        fill(y, r, g, b, a);
    }
    let [r, g, b, a] = planes;
    Planes::new(
        ChannelPlane::full(r),
        ChannelPlane::full(g),
        ChannelPlane::full(b),
        ChannelPlane::full(a),
    )
}
