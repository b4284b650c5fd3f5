//! Packed ARGB8888 raster storage.
//!
//! One `u32` per pixel (alpha, red, green, blue, 8 bits each), row-major,
//! no padding. Cells are atomic so the splatting pass can accumulate from
//! many points in parallel without locks; a frame owns the raster
//! exclusively, so relaxed ordering is sufficient within a pass.
use std::sync::atomic::{AtomicU32, Ordering};

/// Fixed surface dimensions in pixels, immutable for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// A 2D grid of packed ARGB8888 pixel values.
pub struct Raster {
    size: SurfaceSize,
    pixels: Vec<AtomicU32>,
}

impl Raster {
    /// Create a raster of the given size with every pixel zeroed.
    pub fn new(size: SurfaceSize) -> Self {
        let mut pixels = Vec::with_capacity(size.pixel_count());
        pixels.resize_with(size.pixel_count(), || AtomicU32::new(0));
        Self { size, pixels }
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width as usize
    }

    pub fn height(&self) -> usize {
        self.size.height as usize
    }

    /// The pixel cells, row-major.
    pub(crate) fn cells(&self) -> &[AtomicU32] {
        &self.pixels
    }

    /// Read the pixel at `(x, y)`. Returns 0 outside the bounds.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        if x >= self.width() || y >= self.height() {
            return 0;
        }
        self.pixels[y * self.width() + x].load(Ordering::Relaxed)
    }

    /// Copy the full raster into a plain pixel buffer for presentation.
    ///
    /// `out` must hold exactly `width * height` words.
    pub fn copy_into(&self, out: &mut [u32]) {
        debug_assert_eq!(out.len(), self.pixels.len());
        for (dst, src) in out.iter_mut().zip(&self.pixels) {
            *dst = src.load(Ordering::Relaxed);
        }
    }
}

/// Pack four 8-bit channels into an ARGB word.
pub fn pack_argb(a: u32, r: u32, g: u32, b: u32) -> u32 {
    (a << 24) | (r << 16) | (g << 8) | b
}

/// Add `gray` to the red, green, and blue channels of a packed pixel,
/// clamping each channel at 255. The alpha channel is left untouched.
pub fn saturating_add_gray(pixel: u32, gray: u32) -> u32 {
    let mut out = pixel & 0xff00_0000;
    for shift in [16, 8, 0] {
        let channel = (pixel >> shift) & 0xff;
        out |= (channel + gray).min(0xff) << shift;
    }
    out
}

/// Saturating gray accumulation into one atomic cell.
///
/// A compare-exchange loop serializes concurrent splats landing on the same
/// pixel; saturating addition of non-negative increments is commutative
/// under per-step clamping, so the final value is order-independent.
pub(crate) fn accumulate_gray(cell: &AtomicU32, gray: u32) {
    let mut current = cell.load(Ordering::Relaxed);
    loop {
        let next = saturating_add_gray(current, gray);
        match cell.compare_exchange_weak(current, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return,
            Err(seen) => current = seen,
        }
    }
}
