use enough::StopReason;

/// Errors from BMP layout validation and encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("invalid dimensions: {width}x{height} (width and height must be positive)")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl BitmapError {
    /// Whether this error was raised by dimension or size validation,
    /// before any byte reached the destination.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimensions { .. } | Self::DimensionsTooLarge { .. } | Self::LimitExceeded(_)
        )
    }
}

impl From<StopReason> for BitmapError {
    fn from(r: StopReason) -> Self {
        BitmapError::Cancelled(r)
    }
}
