//! The image entity: channel planes in, one cached RGBA8 buffer out.

use core::convert::Infallible;
use core::fmt;

use imgref::{ImgRef, ImgVec};
use rgb::Rgba;

use crate::assemble::{assemble, pixel_count};
use crate::channel::{Channel, Planes};
use crate::error::{AssembleError, LoadError, SizeError};
use crate::ingest::{ingest_rgba, ingest_words};
use crate::limits::Limits;
use crate::sampler::ChannelSampler;

/// Produces raw channel planes for an image, e.g. a file-format decoder.
///
/// `width` and `height` must be known before
/// [`read_channels`](Self::read_channels) is called, and the planes it
/// returns must each hold `width * height` samples when present.
pub trait ChannelSource {
    /// Why decoding failed.
    type Error: fmt::Debug + fmt::Display;

    /// Image width in pixels.
    fn width(&self) -> usize;

    /// Image height in pixels.
    fn height(&self) -> usize;

    /// Decode the four channel planes. A loader calls this again only after
    /// a failure.
    fn read_channels(&mut self) -> Result<Planes, Self::Error>;
}

/// Source type of loaders built directly from pixels or planes.
#[derive(Debug)]
pub enum NoSource {}

impl ChannelSource for NoSource {
    type Error = Infallible;

    fn width(&self) -> usize {
        match *self {}
    }

    fn height(&self) -> usize {
        match *self {}
    }

    fn read_channels(&mut self) -> Result<Planes, Infallible> {
        match *self {}
    }
}

/// Turns channel planes into the canonical packed RGBA8 image, once.
///
/// Planes come from a [`ChannelSource`] (decoded on first use), are supplied
/// directly ([`from_planes`](ImageLoader::from_planes)), or are split out of
/// a packed buffer ([`from_words`](ImageLoader::from_words),
/// [`from_rgba_pixels`](ImageLoader::from_rgba_pixels)). The first
/// successful [`load`](Self::load) assembles and caches the packed image;
/// later calls return the cached buffer. A loader built with
/// [`from_rgba`](ImageLoader::from_rgba) already holds its packed image and
/// never assembles.
///
/// The cache is filled through `&mut self`, so sharing a loader across
/// threads needs external synchronization.
///
/// ```
/// use rebit::{ChannelPlane, ImageLoader, Planes};
/// use rgb::Rgba;
///
/// let planes = Planes::luma(ChannelPlane::new(4, vec![0x0, 0xF]).unwrap());
/// let mut loader = ImageLoader::from_planes(2, 1, planes).unwrap();
/// let img = loader.load().unwrap();
/// assert_eq!(img.buf(), &[Rgba::new(0, 0, 0, 255), Rgba::new(255, 255, 255, 255)]);
/// ```
pub struct ImageLoader<S = NoSource> {
    width: usize,
    height: usize,
    source: Option<S>,
    planes: Option<Planes>,
    packed: Option<ImgVec<Rgba<u8>>>,
    limits: Limits,
}

impl<S: ChannelSource> ImageLoader<S> {
    /// Load from `source`. Nothing is decoded until
    /// [`read_data`](Self::read_data) or [`load`](Self::load).
    pub fn new(source: S) -> Self {
        Self {
            width: source.width(),
            height: source.height(),
            source: Some(source),
            planes: None,
            packed: None,
            limits: Limits::none(),
        }
    }

    /// Reject images larger than `limits` before decoding them.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Channel planes, once read.
    pub fn planes(&self) -> Option<&Planes> {
        self.planes.as_ref()
    }

    /// Precision of `channel`, or 0 if planes have not been read.
    pub fn precision(&self, channel: Channel) -> u8 {
        self.planes.as_ref().map_or(0, |p| p.precision(channel))
    }

    /// A sampler over the planes, once read.
    pub fn sampler(&self) -> Option<ChannelSampler<'_>> {
        let planes = self.planes.as_ref()?;
        Some(ChannelSampler::new(self.width, self.height, planes))
    }

    /// Whether the packed image is available without further work.
    pub fn is_loaded(&self) -> bool {
        self.packed.is_some()
    }

    /// Decode the channel planes if that has not happened yet.
    ///
    /// A no-op when planes or a packed image are already present. After a
    /// failed decode the next call asks the source again.
    pub fn read_data(&mut self) -> Result<(), LoadError<S::Error>> {
        if self.planes.is_some() || self.packed.is_some() {
            return Ok(());
        }
        let Some(source) = self.source.as_mut() else {
            return Ok(());
        };
        let pixels = pixel_count(self.width, self.height)?;
        self.limits.check(self.width, self.height)?;
        let planes = source.read_channels().map_err(|err| {
            log::warn!("channel decode failed: {err}");
            LoadError::Decode(err)
        })?;
        planes.check_len(pixels).inspect_err(|err| {
            log::warn!("decoded planes do not match {}x{}: {err}", self.width, self.height);
        })?;
        self.planes = Some(planes);
        Ok(())
    }

    /// The packed RGBA8 image, decoding and assembling it on first call.
    ///
    /// Nothing is cached on failure.
    pub fn load(&mut self) -> Result<ImgRef<'_, Rgba<u8>>, LoadError<S::Error>> {
        let packed = match self.packed.take() {
            Some(packed) => packed,
            None => self.assemble()?,
        };
        Ok(self.packed.insert(packed).as_ref())
    }

    /// Consume the loader, returning the owned packed image.
    pub fn into_image(mut self) -> Result<ImgVec<Rgba<u8>>, LoadError<S::Error>> {
        match self.packed.take() {
            Some(packed) => Ok(packed),
            None => self.assemble(),
        }
    }

    fn assemble(&mut self) -> Result<ImgVec<Rgba<u8>>, LoadError<S::Error>> {
        self.read_data()?;
        let Some(planes) = self.planes.as_ref() else {
            return Err(AssembleError::MissingRed.into());
        };
        Ok(assemble(self.width, self.height, planes)?)
    }
}

impl<S> fmt::Debug for ImageLoader<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precisions = self
            .planes
            .as_ref()
            .map(|p| Channel::ALL.map(|ch| p.precision(ch)));
        f.debug_struct("ImageLoader")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_source", &self.source.is_some())
            .field("precisions", &precisions)
            .field("loaded", &self.packed.is_some())
            .field("limits", &self.limits)
            .finish()
    }
}

impl ImageLoader<NoSource> {
    fn ready(width: usize, height: usize, planes: Option<Planes>, packed: Option<ImgVec<Rgba<u8>>>) -> Self {
        Self {
            width,
            height,
            source: None,
            planes,
            packed,
            limits: Limits::none(),
        }
    }

    /// Load from planes that are already decoded. Every present plane must
    /// hold exactly `width * height` samples.
    pub fn from_planes(width: usize, height: usize, planes: Planes) -> Result<Self, SizeError> {
        planes.check_len(pixel_count(width, height)?)?;
        Ok(Self::ready(width, height, Some(planes), None))
    }

    /// Load from row-major packed words (see [`packed`](crate::packed)),
    /// split into four 8-bit planes. With `flip_y`, row 0 of the image is the
    /// last row of `words`.
    pub fn from_words(
        width: usize,
        height: usize,
        words: &[u32],
        flip_y: bool,
    ) -> Result<Self, SizeError> {
        let planes = ingest_words(words, width, height, flip_y)?;
        Ok(Self::ready(width, height, Some(planes), None))
    }

    /// Load from an RGBA8 image, split into four 8-bit planes.
    pub fn from_rgba_pixels(img: ImgRef<'_, Rgba<u8>>, flip_y: bool) -> Result<Self, SizeError> {
        let planes = ingest_rgba(img, flip_y)?;
        Ok(Self::ready(img.width(), img.height(), Some(planes), None))
    }

    /// Wrap an already packed image. [`load`](ImageLoader::load) returns
    /// `img` itself; no planes are created and nothing is copied.
    pub fn from_rgba(img: ImgVec<Rgba<u8>>) -> Self {
        Self::ready(img.width(), img.height(), None, Some(img))
    }
}
