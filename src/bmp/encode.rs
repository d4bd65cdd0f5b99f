//! BMP serialization: file header, BITMAPINFOHEADER, padded pixel rows.

use std::io::Write;

use crate::error::BitmapError;
use crate::layout::{BITS_PER_PIXEL, BitmapLayout, HEADER_SIZE, INFO_HEADER_SIZE, PIXELS_PER_METER};
use crate::source::PixelSource;
use enough::Stop;

/// Write the 14-byte file header.
pub(crate) fn write_file_header<W: Write + ?Sized>(
    out: &mut W,
    layout: &BitmapLayout,
) -> Result<(), BitmapError> {
    out.write_all(b"BM")?;
    out.write_all(&layout.file_size().to_le_bytes())?;
    out.write_all(&[0u8; 4])?; // reserved
    out.write_all(&HEADER_SIZE.to_le_bytes())?; // data offset
    Ok(())
}

/// Write the 40-byte BITMAPINFOHEADER.
pub(crate) fn write_info_header<W: Write + ?Sized>(
    out: &mut W,
    layout: &BitmapLayout,
) -> Result<(), BitmapError> {
    // BitmapLayout guarantees both fit in i32.
    let width = layout.width() as i32;
    let height = layout.height() as i32;

    out.write_all(&INFO_HEADER_SIZE.to_le_bytes())?;
    out.write_all(&width.to_le_bytes())?;
    out.write_all(&height.to_le_bytes())?; // positive, rows as generated
    out.write_all(&1u16.to_le_bytes())?; // planes
    out.write_all(&BITS_PER_PIXEL.to_le_bytes())?;
    out.write_all(&0u32.to_le_bytes())?; // compression
    out.write_all(&layout.pixel_data_size().to_le_bytes())?;
    out.write_all(&PIXELS_PER_METER.to_le_bytes())?; // h resolution (72 DPI)
    out.write_all(&PIXELS_PER_METER.to_le_bytes())?; // v resolution
    out.write_all(&0u32.to_le_bytes())?; // colors used
    out.write_all(&0u32.to_le_bytes())?; // important colors
    Ok(())
}

/// Write `height` rows in generation order. Rows are not flipped.
///
/// Returns the number of bytes written, always `layout.pixel_data_size()`.
pub(crate) fn write_pixel_rows<W, S>(
    out: &mut W,
    layout: &BitmapLayout,
    source: &mut S,
    stop: &dyn Stop,
) -> Result<u64, BitmapError>
where
    W: Write + ?Sized,
    S: PixelSource + ?Sized,
{
    let row_width = layout.row_width() as usize;
    // Padding bytes at the tail stay zero; the source only sees the pixel part.
    let mut row = vec![0u8; layout.row_stride() as usize];
    let mut written = 0u64;

    for y in 0..layout.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        source.fill_row(&mut row[..row_width]);
        out.write_all(&row)?;
        written += row.len() as u64;
    }

    Ok(written)
}
