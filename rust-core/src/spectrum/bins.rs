//! Frequency-domain output of one forward transform
//!
//! Only the N/2 + 1 non-redundant bins of a real-input transform are kept.
//! Bin k sits at k * sample_rate / N Hz.

use num_complex::Complex;

use crate::error::{DspError, Result};

/// Spectrum of a real signal
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    /// Complex bins 0..=N/2
    bins: Vec<Complex<f32>>,

    /// Sample rate of the source signal in Hz
    sample_rate: u32,

    /// FFT size that produced the bins
    source_size: usize,
}

impl Spectrum {
    pub(crate) fn new(bins: Vec<Complex<f32>>, sample_rate: u32, source_size: usize) -> Self {
        debug_assert_eq!(bins.len(), source_size / 2 + 1);
        Self {
            bins,
            sample_rate,
            source_size,
        }
    }

    pub fn bins(&self) -> &[Complex<f32>] {
        &self.bins
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn source_size(&self) -> usize {
        self.source_size
    }

    /// Number of stored bins (source_size/2 + 1)
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Frequency in Hz of bin `index`
    ///
    /// The index wraps modulo `source_size`, so `source_size + k` aliases to `k`.
    pub fn item_freq(&self, index: usize) -> f32 {
        let wrapped = index % self.source_size;
        (wrapped as f64 * self.sample_rate as f64 / self.source_size as f64) as f32
    }

    /// Frequency in Hz of the highest stored bin
    ///
    /// Nyquist for an even FFT size, one half-bin below it for an odd one.
    pub fn max_freq(&self) -> f32 {
        self.item_freq(self.len() - 1)
    }

    /// Bin center frequencies in Hz
    pub fn frequencies(&self) -> Vec<f32> {
        (0..self.len()).map(|k| self.item_freq(k)).collect()
    }

    /// Magnitude spectrum |X[k]|
    pub fn magnitudes(&self) -> Vec<f32> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Power spectrum |X[k]|^2
    pub fn power(&self) -> Vec<f32> {
        self.bins.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Magnitude spectrum in dB: 20*log10(|X[k]|/reference)
    pub fn magnitudes_db(&self, reference: f32) -> Vec<f32> {
        self.bins
            .iter()
            .map(|c| {
                let mag_clamped = c.norm().max(1e-10); // Avoid log(0)
                20.0 * (mag_clamped / reference).log10()
            })
            .collect()
    }

    /// Strongest bin as (index, frequency in Hz, magnitude)
    pub fn peak(&self) -> Option<(usize, f32, f32)> {
        self.bins
            .iter()
            .map(|c| c.norm())
            .enumerate()
            .fold(None, |best: Option<(usize, f32)>, (k, mag)| match best {
                Some((_, best_mag)) if best_mag >= mag => best,
                _ => Some((k, mag)),
            })
            .map(|(k, mag)| (k, self.item_freq(k), mag))
    }

    /// Write the magnitude of each bin into `output`
    ///
    /// `output` must hold exactly `len()` values; on a mismatch nothing is
    /// written.
    pub fn to_real(&self, output: &mut [f32]) -> Result<()> {
        DspError::check_len(self.len(), output.len())?;

        for (out, bin) in output.iter_mut().zip(self.bins.iter()) {
            *out = bin.norm();
        }

        Ok(())
    }

    /// Multiply every bin by a real scalar
    pub(crate) fn scale(&mut self, factor: f32) {
        for bin in self.bins.iter_mut() {
            *bin *= factor;
        }
    }
}
