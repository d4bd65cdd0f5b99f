use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp;
use crate::error::BitmapError;
use crate::layout::BitmapLayout;
use crate::limits::Limits;
use crate::source::{PixelSource, RandomBytes};

/// Width used by [`EncodeRequest::default`] and [`write_default_bitmap`].
pub const DEFAULT_WIDTH: u32 = 100;
/// Height used by [`EncodeRequest::default`] and [`write_default_bitmap`].
pub const DEFAULT_HEIGHT: u32 = 100;
/// Output path used by [`write_default_bitmap`].
pub const DEFAULT_FILENAME: &str = "tmp.bmp";

/// BMP encode request builder.
///
/// Dimensions are validated when the request is executed, not when it is
/// built; [`EncodeRequest::layout`] exposes the same validation up front.
#[derive(Clone, Debug)]
pub struct EncodeRequest<'a> {
    width: u32,
    height: u32,
    limits: Option<&'a Limits>,
}

impl Default for EncodeRequest<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl<'a> EncodeRequest<'a> {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            limits: None,
        }
    }

    /// Set resource limits.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Validate the dimensions and compute the file layout.
    pub fn layout(&self) -> Result<BitmapLayout, BitmapError> {
        if let Some(limits) = self.limits {
            limits.check(self.width, self.height)?;
        }
        let layout = BitmapLayout::new(self.width, self.height)?;
        if let Some(limits) = self.limits {
            limits.check_memory(layout.file_size())?;
        }
        log::debug!(
            "bmp layout {}x{}: row {} + {} padding, {} pixel bytes, {} total",
            layout.width(),
            layout.height(),
            layout.row_width(),
            layout.row_padding(),
            layout.pixel_data_size(),
            layout.file_size()
        );
        Ok(layout)
    }

    /// Encode into a new buffer of exactly `file_size` bytes.
    pub fn encode<S: PixelSource>(
        &self,
        mut source: S,
        stop: impl Stop,
    ) -> Result<Vec<u8>, BitmapError> {
        let layout = self.layout()?;
        let mut out = Vec::with_capacity(layout.file_size() as usize);
        bmp::encode(&mut out, &layout, &mut source, &stop)?;
        Ok(out)
    }

    /// Stream the encoded file into `writer`.
    ///
    /// Returns the number of bytes written. Nothing is written when
    /// validation fails.
    pub fn write_to<W, S>(
        &self,
        writer: &mut W,
        mut source: S,
        stop: impl Stop,
    ) -> Result<u64, BitmapError>
    where
        W: Write + ?Sized,
        S: PixelSource,
    {
        let layout = self.layout()?;
        let written = bmp::encode(writer, &layout, &mut source, &stop)?;
        log::trace!("wrote {written} bytes");
        Ok(written)
    }

    /// Create or truncate `path` and write the encoded file to it.
    ///
    /// The file is not created when validation fails. If writing fails
    /// after creation, the partial file is removed before the error is
    /// returned.
    pub fn write_file<S: PixelSource>(
        &self,
        path: impl AsRef<Path>,
        mut source: S,
        stop: impl Stop,
    ) -> Result<u64, BitmapError> {
        let path = path.as_ref();
        let layout = self.layout()?;

        let file = File::create(path)?;
        match write_and_flush(file, &layout, &mut source, &stop) {
            Ok(written) => {
                log::debug!("wrote {written} bytes to {}", path.display());
                Ok(written)
            }
            Err(err) => {
                if let Err(rm) = std::fs::remove_file(path) {
                    log::debug!("could not remove partial file {}: {rm}", path.display());
                } else {
                    log::debug!("removed partial file {} after: {err}", path.display());
                }
                Err(err)
            }
        }
    }
}

// Takes ownership so the handle is closed before any cleanup runs.
fn write_and_flush<S: PixelSource>(
    file: File,
    layout: &BitmapLayout,
    source: &mut S,
    stop: &dyn Stop,
) -> Result<u64, BitmapError> {
    let mut out = BufWriter::new(file);
    let written = bmp::encode(&mut out, layout, source, stop)?;
    out.flush()?;
    Ok(written)
}

/// Write a `width` x `height` BMP of uniformly random pixels to `path`.
pub fn write_bitmap(width: u32, height: u32, path: impl AsRef<Path>) -> Result<u64, BitmapError> {
    write_bitmap_with(width, height, path, RandomBytes::new())
}

/// Write a `width` x `height` BMP with pixel bytes from `source`.
///
/// ```no_run
/// // Horizontal blue-green-red gradient, identical on every row.
/// bmpgen::write_bitmap_with(64, 16, "gradient.bmp", |i: usize| (i * 4 % 256) as u8)?;
/// # Ok::<(), bmpgen::BitmapError>(())
/// ```
pub fn write_bitmap_with<S: PixelSource>(
    width: u32,
    height: u32,
    path: impl AsRef<Path>,
    source: S,
) -> Result<u64, BitmapError> {
    EncodeRequest::new(width, height).write_file(path, source, Unstoppable)
}

/// Write a [`DEFAULT_WIDTH`] x [`DEFAULT_HEIGHT`] random BMP to
/// [`DEFAULT_FILENAME`] in the current directory.
pub fn write_default_bitmap() -> Result<u64, BitmapError> {
    write_bitmap(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_100_by_100() {
        let layout = EncodeRequest::default().layout().unwrap();
        assert_eq!(layout.width(), 100);
        assert_eq!(layout.height(), 100);
        assert_eq!(layout.file_size(), 30_054);
    }

    #[test]
    fn encode_length_matches_layout() {
        let request = EncodeRequest::new(7, 5);
        let layout = request.layout().unwrap();
        let encoded = request.encode(|_: usize| 0x55u8, Unstoppable).unwrap();
        assert_eq!(encoded.len(), layout.file_size() as usize);
    }

    #[test]
    fn memory_limit_applies_to_file_size() {
        let limits = Limits {
            max_memory_bytes: Some(61),
            ..Default::default()
        };
        let err = EncodeRequest::new(2, 1)
            .with_limits(&limits)
            .encode(RandomBytes::new(), Unstoppable)
            .unwrap_err();
        assert!(matches!(err, BitmapError::LimitExceeded(_)));
        assert!(err.is_validation());

        let limits = Limits {
            max_memory_bytes: Some(62),
            ..Default::default()
        };
        assert!(
            EncodeRequest::new(2, 1)
                .with_limits(&limits)
                .encode(RandomBytes::new(), Unstoppable)
                .is_ok()
        );
    }

    #[test]
    fn invalid_request_writes_nothing() {
        let mut sink: Vec<u8> = Vec::new();
        let err = EncodeRequest::new(0, 10)
            .write_to(&mut sink, RandomBytes::new(), Unstoppable)
            .unwrap_err();
        assert!(matches!(err, BitmapError::InvalidDimensions { .. }));
        assert!(sink.is_empty());
    }
}
