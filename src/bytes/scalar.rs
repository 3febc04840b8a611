use archmage::prelude::*;

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn interleave_row_scalar(
    _token: ScalarToken,
    r: &[u8],
    g: &[u8],
    b: &[u8],
    a: &[u8],
    dst: &mut [u8],
) {
    let planes = r.iter().zip(g).zip(b).zip(a);
    for ((((&r, &g), &b), &a), d) in planes.zip(dst.chunks_exact_mut(4)) {
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3] = a;
    }
}

pub(super) fn deinterleave_row_scalar(
    _token: ScalarToken,
    src: &[u8],
    r: &mut [u8],
    g: &mut [u8],
    b: &mut [u8],
    a: &mut [u8],
) {
    let planes = r.iter_mut().zip(g.iter_mut()).zip(b.iter_mut()).zip(a.iter_mut());
    for ((((r, g), b), a), s) in planes.zip(src.chunks_exact(4)) {
        *r = s[0];
        *g = s[1];
        *b = s[2];
        *a = s[3];
    }
}

// ===========================================================================
// Scalar wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn interleave_impl_scalar(
    t: ScalarToken,
    r: &[u8],
    g: &[u8],
    b: &[u8],
    a: &[u8],
    d: &mut [u8],
) {
    interleave_row_scalar(t, r, g, b, a, d);
}

pub(super) fn deinterleave_impl_scalar(
    t: ScalarToken,
    s: &[u8],
    r: &mut [u8],
    g: &mut [u8],
    b: &mut [u8],
    a: &mut [u8],
) {
    deinterleave_row_scalar(t, s, r, g, b, a);
}
