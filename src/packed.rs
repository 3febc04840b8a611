//! Conversions between [`Rgba<u8>`] pixels and packed `u32` words.
//!
//! A packed word holds red in bits 0..8, green in 8..16, blue in 16..24 and
//! alpha in 24..32, independent of the target's byte order.
//!
//! ```rust
//! use rgb::Rgba;
//! use rebit::packed;
//!
//! assert_eq!(packed::pack(Rgba::new(0x11, 0x22, 0x33, 0x44)), 0x4433_2211);
//! assert_eq!(packed::unpack(0x4433_2211), Rgba::new(0x11, 0x22, 0x33, 0x44));
//! ```

use alloc::vec::Vec;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::SizeError;

/// Pack one pixel into a word.
#[inline]
pub fn pack(px: Rgba<u8>) -> u32 {
    u32::from_le_bytes([px.r, px.g, px.b, px.a])
}

/// Unpack one word into a pixel.
#[inline]
pub fn unpack(word: u32) -> Rgba<u8> {
    let [r, g, b, a] = word.to_le_bytes();
    Rgba::new(r, g, b, a)
}

/// Packed words of a whole image, row-major with no row padding.
pub fn to_words(img: ImgRef<'_, Rgba<u8>>) -> Vec<u32> {
    let mut words = Vec::with_capacity(img.width() * img.height());
    for row in img.rows() {
        words.extend(row.iter().map(|&px| pack(px)));
    }
    words
}

/// Build a `width` × `height` image from row-major packed words.
pub fn from_words(
    words: &[u32],
    width: usize,
    height: usize,
) -> Result<ImgVec<Rgba<u8>>, SizeError> {
    let pixels = crate::assemble::pixel_count(width, height)?;
    if words.len() != pixels {
        return Err(SizeError::PixelCountMismatch {
            expected: pixels,
            actual: words.len(),
        });
    }
    let buf: Vec<Rgba<u8>> = words.iter().map(|&w| unpack(w)).collect();
    Ok(ImgVec::new(buf, width, height))
}

/// One row of packed words as interleaved RGBA bytes.
///
/// Little-endian targets reinterpret the words in place; others copy
/// through `scratch`.
pub(crate) fn row_bytes<'a>(row: &'a [u32], scratch: &'a mut Vec<u8>) -> &'a [u8] {
    if cfg!(target_endian = "little") {
        bytemuck::cast_slice(row)
    } else {
        scratch.clear();
        scratch.extend(row.iter().flat_map(|w| w.to_le_bytes()));
        scratch
    }
}
