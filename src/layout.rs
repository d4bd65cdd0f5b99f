use crate::error::BitmapError;

/// Size of the `BM` file header.
pub const FILE_HEADER_SIZE: u32 = 14;
/// Size of the BITMAPINFOHEADER.
pub const INFO_HEADER_SIZE: u32 = 40;
/// Offset of the pixel array: file header + info header.
pub const HEADER_SIZE: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
/// Only 24-bit BGR output is produced.
pub const BITS_PER_PIXEL: u16 = 24;
/// 72 DPI in pixels per meter.
pub const PIXELS_PER_METER: i32 = 2835;

const BYTES_PER_PIXEL: u32 = BITS_PER_PIXEL as u32 / 8;

/// Size fields of one 24-bit BMP, derived once from width and height.
///
/// Every field is guaranteed to fit the header field it is written into:
/// width and height as `i32`, image and file size as `u32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapLayout {
    width: u32,
    height: u32,
    row_width: u32,
    row_padding: u32,
    pixel_data_size: u32,
    file_size: u32,
}

impl BitmapLayout {
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        let too_large = BitmapError::DimensionsTooLarge { width, height };
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(too_large);
        }

        let Some(row_width) = width.checked_mul(BYTES_PER_PIXEL) else {
            return Err(too_large);
        };
        let row_padding = (4 - row_width % 4) % 4;
        let Some(pixel_data_size) = row_width
            .checked_add(row_padding)
            .and_then(|stride| stride.checked_mul(height))
        else {
            return Err(too_large);
        };
        let Some(file_size) = pixel_data_size.checked_add(HEADER_SIZE) else {
            return Err(too_large);
        };

        Ok(Self {
            width,
            height,
            row_width,
            row_padding,
            pixel_data_size,
            file_size,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes per row, padding excluded (`width * 3`).
    pub fn row_width(&self) -> u32 {
        self.row_width
    }

    /// Zero bytes appended to each row, in `0..=3`.
    pub fn row_padding(&self) -> u32 {
        self.row_padding
    }

    /// Bytes per row on disk, always a multiple of 4.
    pub fn row_stride(&self) -> u32 {
        self.row_width + self.row_padding
    }

    pub fn pixel_data_size(&self) -> u32 {
        self.pixel_data_size
    }

    /// Total file length: `54 + pixel_data_size`.
    pub fn file_size(&self) -> u32 {
        self.file_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_one_needs_two_padding_bytes() {
        let layout = BitmapLayout::new(2, 1).unwrap();
        assert_eq!(layout.row_width(), 6);
        assert_eq!(layout.row_padding(), 2);
        assert_eq!(layout.pixel_data_size(), 8);
        assert_eq!(layout.file_size(), 62);
    }

    #[test]
    fn four_by_one_is_already_aligned() {
        let layout = BitmapLayout::new(4, 1).unwrap();
        assert_eq!(layout.row_width(), 12);
        assert_eq!(layout.row_padding(), 0);
        assert_eq!(layout.pixel_data_size(), 12);
        assert_eq!(layout.file_size(), 66);
    }

    #[test]
    fn default_dimensions() {
        let layout = BitmapLayout::new(100, 100).unwrap();
        assert_eq!(layout.row_width(), 300);
        assert_eq!(layout.row_padding(), 0);
        assert_eq!(layout.pixel_data_size(), 30_000);
        assert_eq!(layout.file_size(), 30_054);
    }

    #[test]
    fn stride_is_aligned_and_sizes_agree() {
        for width in 1..=64 {
            for height in [1, 2, 3, 7, 100] {
                let layout = BitmapLayout::new(width, height).unwrap();
                assert_eq!(layout.row_stride() % 4, 0, "width {width}");
                assert!(layout.row_padding() <= 3);
                assert_eq!(
                    layout.pixel_data_size(),
                    (width * 3 + layout.row_padding()) * height
                );
                assert_eq!(layout.file_size(), HEADER_SIZE + layout.pixel_data_size());
            }
        }
    }

    #[test]
    fn zero_dimensions_rejected() {
        for (w, h) in [(0, 1), (1, 0), (0, 0)] {
            match BitmapLayout::new(w, h) {
                Err(BitmapError::InvalidDimensions { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("expected InvalidDimensions, got {other:?}"),
            }
        }
    }

    #[test]
    fn dimensions_beyond_i32_rejected() {
        let w = i32::MAX as u32 + 1;
        assert!(matches!(
            BitmapLayout::new(w, 1),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
        assert!(matches!(
            BitmapLayout::new(1, u32::MAX),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn size_overflow_rejected() {
        // 65536 * 3 = 196608 bytes per row; 196608 * 21846 > u32::MAX
        assert!(matches!(
            BitmapLayout::new(65_536, 21_846),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
        // row width alone overflows
        assert!(matches!(
            BitmapLayout::new(i32::MAX as u32, 1),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }

    #[test]
    fn file_size_overflow_by_header_rejected() {
        // 4 * 3 = 12 bytes per row; 12 * 357913941 = 4294967292 fits, +54 does not
        assert!(matches!(
            BitmapLayout::new(4, 357_913_941),
            Err(BitmapError::DimensionsTooLarge { .. })
        ));
    }
}
