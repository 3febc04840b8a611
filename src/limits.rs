//! Resource limits for loading.
//!
//! [`Limits`] caps the dimensions an [`ImageLoader`](crate::ImageLoader)
//! accepts. The check runs before any channel data is decoded or any
//! plane is allocated.

use thiserror::Error;

/// Dimension caps. `None` means no limit for that dimension.
///
/// ```
/// use rebit::Limits;
///
/// let limits = Limits::none().with_max_pixels(64 * 1024 * 1024);
/// assert!(limits.check(4096, 4096).is_ok());
/// assert!(limits.check(16384, 16384).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct Limits {
    /// Maximum image width in pixels.
    pub max_width: Option<u32>,
    /// Maximum image height in pixels.
    pub max_height: Option<u32>,
    /// Maximum total pixels (width × height).
    pub max_pixels: Option<u64>,
}

impl Limits {
    /// No limits.
    pub fn none() -> Self {
        Self::default()
    }

    /// Set maximum image width in pixels.
    pub fn with_max_width(mut self, width: u32) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set maximum image height in pixels.
    pub fn with_max_height(mut self, height: u32) -> Self {
        self.max_height = Some(height);
        self
    }

    /// Set maximum total pixels.
    pub fn with_max_pixels(mut self, pixels: u64) -> Self {
        self.max_pixels = Some(pixels);
        self
    }

    /// Whether any limit is set.
    pub fn has_any(&self) -> bool {
        self.max_width.is_some() || self.max_height.is_some() || self.max_pixels.is_some()
    }

    /// Check dimensions against every configured limit.
    pub fn check(&self, width: usize, height: usize) -> Result<(), LimitExceeded> {
        let (w, h) = (width as u64, height as u64);
        if let Some(max) = self.max_width
            && w > u64::from(max)
        {
            return Err(LimitExceeded::Width { actual: w, max });
        }
        if let Some(max) = self.max_height
            && h > u64::from(max)
        {
            return Err(LimitExceeded::Height { actual: h, max });
        }
        if let Some(max) = self.max_pixels {
            let pixels = w.saturating_mul(h);
            if pixels > max {
                return Err(LimitExceeded::Pixels {
                    actual: pixels,
                    max,
                });
            }
        }
        Ok(())
    }
}

/// A [`Limits`] check failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LimitExceeded {
    /// Width above `max_width`.
    #[error("width {actual} exceeds limit {max}")]
    Width {
        /// Actual width.
        actual: u64,
        /// Configured maximum.
        max: u32,
    },
    /// Height above `max_height`.
    #[error("height {actual} exceeds limit {max}")]
    Height {
        /// Actual height.
        actual: u64,
        /// Configured maximum.
        max: u32,
    },
    /// Pixel count above `max_pixels`.
    #[error("pixel count {actual} exceeds limit {max}")]
    Pixels {
        /// Actual pixel count.
        actual: u64,
        /// Configured maximum.
        max: u64,
    },
}
