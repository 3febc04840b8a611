// ---------------------------------------------------------------------------
// Row-level planar ↔ interleaved RGBA kernels with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers are the incant! dispatch targets.
// ---------------------------------------------------------------------------

use crate::SizeError;
use archmage::incant;

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;


// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_planes(r: usize, g: usize, b: usize, a: usize) -> Result<usize, SizeError> {
    if r == 0 {
        return Err(SizeError::ZeroDimension);
    }
    for len in [g, b, a] {
        if len != r {
            return Err(SizeError::PixelCountMismatch {
                expected: r,
                actual: len,
            });
        }
    }
    Ok(r)
}

#[inline]
fn check_interleaved(len: usize, pixels: usize) -> Result<(), SizeError> {
    if !len.is_multiple_of(4) {
        return Err(SizeError::NotPixelAligned);
    }
    if len / 4 != pixels {
        return Err(SizeError::PixelCountMismatch {
            expected: pixels,
            actual: len / 4,
        });
    }
    Ok(())
}

// ===========================================================================
// Public API
// ===========================================================================

/// Four equal-length planes → RGBA (4 bytes/px).
///
/// `dst` must hold exactly `r.len() * 4` bytes.
///
/// ```
/// let mut px = [0u8; 8];
/// rebit::bytes::interleave_rgba(&[1, 5], &[2, 6], &[3, 7], &[4, 8], &mut px).unwrap();
/// assert_eq!(px, [1, 2, 3, 4, 5, 6, 7, 8]);
/// ```
pub fn interleave_rgba(
    r: &[u8],
    g: &[u8],
    b: &[u8],
    a: &[u8],
    dst: &mut [u8],
) -> Result<(), SizeError> {
    let n = check_planes(r.len(), g.len(), b.len(), a.len())?;
    check_interleaved(dst.len(), n)?;
    incant!(interleave_impl(r, g, b, a, dst), [v3, scalar]);
    Ok(())
}

/// RGBA (4 bytes/px) → four planes.
///
/// Each plane must hold exactly `src.len() / 4` bytes.
pub fn deinterleave_rgba(
    src: &[u8],
    r: &mut [u8],
    g: &mut [u8],
    b: &mut [u8],
    a: &mut [u8],
) -> Result<(), SizeError> {
    let n = check_planes(r.len(), g.len(), b.len(), a.len())?;
    check_interleaved(src.len(), n)?;
    incant!(deinterleave_impl(src, r, g, b, a), [v3, scalar]);
    Ok(())
}
