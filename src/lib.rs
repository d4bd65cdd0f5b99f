//! # bmpgen
//!
//! Writer for uncompressed 24-bit BMP files filled with random or
//! caller-supplied pixel bytes.
//!
//! ## Output format
//!
//! - 14-byte file header (`BM`, file size, pixel offset 54)
//! - 40-byte BITMAPINFOHEADER (24 bpp, no compression, 2835 px/m)
//! - `height` rows of `width * 3` bytes, each zero-padded to a multiple of 4
//!
//! Rows are written in the order they are generated and the height field is
//! positive. Readers treat the first written row as the bottom of the image.
//!
//! ## Non-Goals
//!
//! - Decoding BMP files
//! - Palettes, compression, bit depths other than 24
//! - OS/2, V4 and V5 headers
//!
//! ## Usage
//!
//! ```no_run
//! use bmpgen::{EncodeRequest, RandomBytes, Unstoppable};
//!
//! // 100x100 random noise
//! bmpgen::write_bitmap(100, 100, "noise.bmp")?;
//!
//! // Solid blue, in memory (BMP byte order is B, G, R)
//! let bytes = EncodeRequest::new(4, 4)
//!     .encode(|i: usize| if i % 3 == 0 { 255u8 } else { 0 }, Unstoppable)?;
//! assert_eq!(&bytes[..2], b"BM");
//!
//! // Streamed into any writer
//! let mut sink: Vec<u8> = Vec::new();
//! EncodeRequest::new(640, 480).write_to(&mut sink, RandomBytes::new(), Unstoppable)?;
//! # Ok::<(), bmpgen::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bmp;
mod encode;
mod error;
mod layout;
mod limits;
mod source;

// Re-exports
pub use encode::{
    DEFAULT_FILENAME, DEFAULT_HEIGHT, DEFAULT_WIDTH, EncodeRequest, write_bitmap,
    write_bitmap_with, write_default_bitmap,
};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::BitmapError;
pub use layout::{
    BITS_PER_PIXEL, BitmapLayout, FILE_HEADER_SIZE, HEADER_SIZE, INFO_HEADER_SIZE,
    PIXELS_PER_METER,
};
pub use limits::Limits;
pub use source::{PixelSource, RandomBytes};
