use archmage::prelude::*;

// ===========================================================================
// SIMD constants
// ===========================================================================

// 4×4 byte transpose within each 128-bit lane. Pixel-major
// [r0 g0 b0 a0 r1 ...] ↔ channel-major [r0 r1 r2 r3 g0 ...]; self-inverse.
const TRANSPOSE_4X4_SHUF_AVX: [i8; 32] = [
    0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14, 3, 7, 11, 15, 0, 4, 8, 12, 1, 5, 9, 13, 2, 6, 10, 14,
    3, 7, 11, 15,
];

// Dword gather after the transpose: [R03 G03 B03 A03 | R47 G47 B47 A47]
// → [R03 R47 G03 G47 B03 B47 A03 A47]. Indices 0,4,1,5,2,6,3,7.
const PLANAR_GATHER_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 4, 0, 0, 0, 1, 0, 0, 0, 5, 0, 0, 0, 2, 0, 0, 0, 6, 0, 0, 0, 3, 0, 0, 0, 7, 0, 0, 0,
];

// Inverse of the gather. Indices 0,2,4,6,1,3,5,7.
const PLANAR_SCATTER_PERM_AVX: [i8; 32] = [
    0, 0, 0, 0, 2, 0, 0, 0, 4, 0, 0, 0, 6, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 5, 0, 0, 0, 7, 0, 0, 0,
];

// ===========================================================================
// x86-64 AVX2 — rite row implementations
// ===========================================================================

#[rite]
pub(super) fn interleave_row_v3(
    _token: X64V3Token,
    r: &[u8],
    g: &[u8],
    b: &[u8],
    a: &[u8],
    dst: &mut [u8],
) {
    let shuf = _mm256_loadu_si256(&TRANSPOSE_4X4_SHUF_AVX);
    let perm = _mm256_loadu_si256(&PLANAR_SCATTER_PERM_AVX);
    let n = r.len().min(g.len()).min(b.len()).min(a.len()).min(dst.len() / 4);
    let mut lanes = [0u8; 32];
    let mut i = 0;
    while i + 8 <= n {
        lanes[0..8].copy_from_slice(&r[i..i + 8]);
        lanes[8..16].copy_from_slice(&g[i..i + 8]);
        lanes[16..24].copy_from_slice(&b[i..i + 8]);
        lanes[24..32].copy_from_slice(&a[i..i + 8]);
        let planar = _mm256_loadu_si256(&lanes);
        let grouped = _mm256_permutevar8x32_epi32(planar, perm);
        let packed = _mm256_shuffle_epi8(grouped, shuf);
        let d: &mut [u8; 32] = (&mut dst[i * 4..i * 4 + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, packed);
        i += 8;
    }
    for (j, d) in dst[i * 4..n * 4].chunks_exact_mut(4).enumerate() {
        d[0] = r[i + j];
        d[1] = g[i + j];
        d[2] = b[i + j];
        d[3] = a[i + j];
    }
}

#[rite]
pub(super) fn deinterleave_row_v3(
    _token: X64V3Token,
    src: &[u8],
    r: &mut [u8],
    g: &mut [u8],
    b: &mut [u8],
    a: &mut [u8],
) {
    let shuf = _mm256_loadu_si256(&TRANSPOSE_4X4_SHUF_AVX);
    let perm = _mm256_loadu_si256(&PLANAR_GATHER_PERM_AVX);
    let n = r.len().min(g.len()).min(b.len()).min(a.len()).min(src.len() / 4);
    let mut lanes = [0u8; 32];
    let mut i = 0;
    while i + 8 <= n {
        let s: &[u8; 32] = src[i * 4..i * 4 + 32].try_into().unwrap();
        let packed = _mm256_loadu_si256(s);
        let grouped = _mm256_shuffle_epi8(packed, shuf);
        let planar = _mm256_permutevar8x32_epi32(grouped, perm);
        _mm256_storeu_si256(&mut lanes, planar);
        r[i..i + 8].copy_from_slice(&lanes[0..8]);
        g[i..i + 8].copy_from_slice(&lanes[8..16]);
        b[i..i + 8].copy_from_slice(&lanes[16..24]);
        a[i..i + 8].copy_from_slice(&lanes[24..32]);
        i += 8;
    }
    for (j, s) in src[i * 4..n * 4].chunks_exact(4).enumerate() {
        r[i + j] = s[0];
        g[i + j] = s[1];
        b[i + j] = s[2];
        a[i + j] = s[3];
    }
}

// ===========================================================================
// x86-64 arcane wrappers
// ===========================================================================

#[arcane]
pub(super) fn interleave_impl_v3(
    t: X64V3Token,
    r: &[u8],
    g: &[u8],
    b: &[u8],
    a: &[u8],
    d: &mut [u8],
) {
    interleave_row_v3(t, r, g, b, a, d);
}

#[arcane]
pub(super) fn deinterleave_impl_v3(
    t: X64V3Token,
    s: &[u8],
    r: &mut [u8],
    g: &mut [u8],
    b: &mut [u8],
    a: &mut [u8],
) {
    deinterleave_row_v3(t, s, r, g, b, a);
}
