//! 24-bit BMP writer (internal).
//!
//! Use [`crate::EncodeRequest`] or [`crate::write_bitmap`].

mod encode;

use std::io::Write;

use crate::error::BitmapError;
use crate::layout::{BitmapLayout, HEADER_SIZE};
use crate::source::PixelSource;
use enough::Stop;

/// Write a complete BMP: file header, info header, pixel rows.
///
/// Returns the number of bytes written, equal to `layout.file_size()`.
pub(crate) fn encode<W, S>(
    out: &mut W,
    layout: &BitmapLayout,
    source: &mut S,
    stop: &dyn Stop,
) -> Result<u64, BitmapError>
where
    W: Write + ?Sized,
    S: PixelSource + ?Sized,
{
    stop.check()?;
    encode::write_file_header(out, layout)?;
    encode::write_info_header(out, layout)?;
    let pixel_bytes = encode::write_pixel_rows(out, layout, source, stop)?;
    Ok(u64::from(HEADER_SIZE) + pixel_bytes)
}
