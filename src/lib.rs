//! # rebit
//!
//! *Every channel, eight bits, one buffer.*
//!
//! Decoders hand out channel data at whatever precision the file format
//! stores: 5-6-5 color, 1-bit masks, 4-bit gray, 16-bit samples. This crate
//! turns up to four such planes into one packed RGBA8 image, re-quantizing
//! each channel by bit replication so that 0 stays 0 and full scale becomes
//! 255.
//!
//! ## Pieces
//!
//! - [`requantize`] and [`DepthTable`] map one sample of precision 1..=16
//!   to 8 bits.
//! - [`ChannelSampler`] reads one normalized sample at `(x, y)`.
//! - [`assemble`] packs a whole [`Planes`] set into an
//!   [`ImgVec<Rgba<u8>>`](imgref::ImgVec). Absent green and blue follow red;
//!   absent alpha is opaque.
//! - [`ImageLoader`] caches the packed image for a [`ChannelSource`] or for
//!   planes split out of existing packed pixels ([`ingest_words`],
//!   [`ingest_rgba`]).
//! - [`bytes`] holds the SIMD row kernels (planar ↔ interleaved RGBA) the
//!   whole-image paths are built on. x86-64 AVX2 with scalar fallback.
//! - [`packed`] converts between [`Rgba<u8>`](rgb::Rgba) and `u32` words.
//!
//! ## Feature flags
//!
//! - **`std`** (default): `std::error::Error` impls for the error types and
//!   runtime SIMD detection. Without it the crate is `no_std` + `alloc`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod assemble;
mod channel;
mod depth;
mod error;
mod ingest;
mod limits;
mod loader;
mod sampler;

pub mod bytes;
pub mod packed;

pub use assemble::assemble;
pub use channel::{Channel, ChannelPlane, MAX_PRECISION, Planes};
pub use depth::{DepthTable, requantize};
pub use error::{AssembleError, LoadError, PlaneError, SampleError, SizeError};
pub use ingest::{ingest_rgba, ingest_words};
pub use limits::{LimitExceeded, Limits};
pub use loader::{ChannelSource, ImageLoader, NoSource};
pub use sampler::ChannelSampler;
