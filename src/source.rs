//! Pixel byte sources.
//!
//! A [`PixelSource`] fills the pixel bytes of one row at a time; padding is
//! never its concern. Two sources are provided:
//!
//! - any `FnMut(usize) -> u8` closure, called with the byte index within
//!   the row (`0..width * 3`), so every row receives the same sequence;
//! - [`RandomBytes`], drawing each byte uniformly from `0..=255`.
//!
//! Channel order is not interpreted here. BMP stores B, G, R, so a closure
//! that wants pure red returns `255` for `i % 3 == 2`.

use rand::RngCore;
use rand::rngs::ThreadRng;

/// Producer of pixel bytes for one row.
pub trait PixelSource {
    /// Fill `row` (exactly `width * 3` bytes) with pixel data.
    fn fill_row(&mut self, row: &mut [u8]);
}

impl<F> PixelSource for F
where
    F: FnMut(usize) -> u8,
{
    fn fill_row(&mut self, row: &mut [u8]) {
        for (i, b) in row.iter_mut().enumerate() {
            *b = self(i);
        }
    }
}

/// Uniformly random bytes from an RNG.
#[derive(Clone, Debug)]
pub struct RandomBytes<R = ThreadRng> {
    rng: R,
}

impl RandomBytes<ThreadRng> {
    /// Random bytes from the thread-local generator.
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for RandomBytes<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> RandomBytes<R> {
    /// Random bytes from a caller-supplied generator, e.g. a seeded `StdRng`
    /// for reproducible output.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: RngCore> PixelSource for RandomBytes<R> {
    fn fill_row(&mut self, row: &mut [u8]) {
        self.rng.fill_bytes(row);
    }
}
