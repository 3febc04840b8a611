//! Bit-depth normalization of single samples.
//!
//! Samples narrower than 8 bits are widened by bit replication: the
//! source bits are repeated, most significant chunk first, until all 8
//! output bits are filled, with the last chunk taken from the top of the
//! source when `precision` does not divide 8. This keeps the full range
//! (all-zeros stays 0, all-ones becomes 255) where a plain left shift would
//! leave the low bits empty.
//!
//! ```text
//! precision 5, raw 0b10101:   10101 | 101   = 0b1010_1101 = 0xAD
//! precision 3, raw 0b101:     101 | 101 | 10 = 0b1011_0110 = 0xB6
//! ```

/// Re-quantize a raw sample stored at `precision` bits to 8 bits.
///
/// - `0` → 0 (channel absent).
/// - `8` → `raw` unchanged.
/// - `> 8` → the 8 most significant bits, `raw >> (precision - 8)`. Only
///   meaningful if the decoder pre-widened the stored sample.
/// - `1..8` → bit replication. Bits of `raw` above `precision` are ignored.
#[inline]
pub const fn requantize(raw: u8, precision: u8) -> u8 {
    match precision {
        0 => 0,
        8 => raw,
        p if p > 8 => ((raw as u32) >> (p - 8)) as u8,
        p => replicate(raw, p as u32),
    }
}

#[inline]
const fn replicate(raw: u8, bits: u32) -> u8 {
    let value = raw as u32 & ((1 << bits) - 1);
    let mut out = 0u32;
    let mut left = 8u32;
    while left > 0 {
        if bits > left {
            out = (out << left) | (value >> (bits - left));
            left = 0;
        } else {
            out = (out << bits) | value;
            left -= bits;
        }
    }
    out as u8
}

/// All 256 [`requantize`] results for one precision.
#[derive(Clone, PartialEq, Eq)]
pub struct DepthTable {
    precision: u8,
    table: [u8; 256],
}

impl DepthTable {
    /// Build the table for `precision`.
    pub const fn new(precision: u8) -> Self {
        let mut table = [0u8; 256];
        let mut i = 0;
        while i < 256 {
            table[i] = requantize(i as u8, precision);
            i += 1;
        }
        Self { precision, table }
    }

    /// The precision this table maps from.
    #[inline]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// 8-bit value of one raw sample.
    #[inline(always)]
    pub fn map(&self, raw: u8) -> u8 {
        self.table[raw as usize]
    }

    /// Map `src` into `dst` element by element.
    #[inline]
    pub fn map_row(&self, src: &[u8], dst: &mut [u8]) {
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = self.table[s as usize];
        }
    }
}

impl core::fmt::Debug for DepthTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DepthTable")
            .field("precision", &self.precision)
            .finish_non_exhaustive()
    }
}
