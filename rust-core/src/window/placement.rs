//! Windows placed inside a fixed-length analysis buffer
//!
//! The kernel spans `width` samples starting at `offset`; every other
//! position of the `window_length` buffer is silenced.

use super::kernels::WindowKernel;
use crate::error::{DspError, Result};

/// Window kernel positioned within a buffer of `window_length` samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    kernel: WindowKernel,
    width: usize,
    offset: usize,
    window_length: usize,
}

impl Window {
    /// Create a new window
    ///
    /// # Arguments
    /// * `kernel` - Kernel shape
    /// * `width` - Number of samples the kernel spans
    /// * `offset` - First sample covered by the kernel
    /// * `window_length` - Total buffer length the window applies to
    ///
    /// # Returns
    /// `DspError::InvalidWindow` if `offset + width` exceeds `window_length`
    pub fn new(
        kernel: WindowKernel,
        width: usize,
        offset: usize,
        window_length: usize,
    ) -> Result<Self> {
        match offset.checked_add(width) {
            Some(end) if end <= window_length => Ok(Self {
                kernel,
                width,
                offset,
                window_length,
            }),
            _ => Err(DspError::InvalidWindow {
                width,
                offset,
                window_length,
            }),
        }
    }

    /// Kernel spanning the whole buffer
    pub fn full(kernel: WindowKernel, window_length: usize) -> Self {
        Self {
            kernel,
            width: window_length,
            offset: 0,
            window_length,
        }
    }

    pub fn rectangular(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Rectangular, width, offset, window_length)
    }

    pub fn triangular(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Triangular, width, offset, window_length)
    }

    pub fn welch(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Welch, width, offset, window_length)
    }

    pub fn sine(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Sine, width, offset, window_length)
    }

    pub fn hann(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Hann, width, offset, window_length)
    }

    pub fn hamming(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Hamming, width, offset, window_length)
    }

    pub fn blackman(width: usize, offset: usize, window_length: usize) -> Result<Self> {
        Self::new(WindowKernel::Blackman, width, offset, window_length)
    }

    /// Buffer length this window applies to
    pub fn len(&self) -> usize {
        self.window_length
    }

    pub fn is_empty(&self) -> bool {
        self.window_length == 0
    }

    pub fn kernel(&self) -> WindowKernel {
        self.kernel
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Coefficient for buffer position `i` (zero outside the kernel span)
    pub fn coefficient(&self, i: usize) -> f64 {
        if i < self.offset || i >= self.offset + self.width {
            0.0
        } else {
            self.kernel.coefficient(i - self.offset, self.width)
        }
    }

    /// Coefficients for the whole buffer, generated on every call
    pub fn coefficients(&self) -> Vec<f32> {
        (0..self.window_length)
            .map(|i| self.coefficient(i) as f32)
            .collect()
    }

    /// Mean coefficient over the buffer
    ///
    /// Dividing a windowed magnitude by this restores the amplitude of a
    /// stationary tone.
    pub fn coherent_gain(&self) -> f64 {
        if self.window_length == 0 {
            return 0.0;
        }
        let sum: f64 = (0..self.window_length).map(|i| self.coefficient(i)).sum();
        sum / self.window_length as f64
    }

    /// Apply window to a buffer
    ///
    /// # Arguments
    /// * `input` - Samples to shape, length `window_length`
    /// * `output` - Destination, length `window_length`
    ///
    /// On a length mismatch nothing is written.
    pub fn apply(&self, input: &[f32], output: &mut [f32]) -> Result<()> {
        DspError::check_len(self.window_length, input.len())?;
        DspError::check_len(self.window_length, output.len())?;

        for (i, (out, &s)) in output.iter_mut().zip(input.iter()).enumerate() {
            *out = (s as f64 * self.coefficient(i)) as f32;
        }

        Ok(())
    }

    /// Apply window in-place
    pub fn apply_inplace(&self, buffer: &mut [f32]) -> Result<()> {
        DspError::check_len(self.window_length, buffer.len())?;

        for (i, s) in buffer.iter_mut().enumerate() {
            *s = (*s as f64 * self.coefficient(i)) as f32;
        }

        Ok(())
    }
}
