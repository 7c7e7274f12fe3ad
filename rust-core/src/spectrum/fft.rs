//! Forward FFT plan using realfft for real-valued signals
//!
//! A plan is fixed to one transform size and only ever read after
//! construction, so it can be shared across threads. Scratch space is
//! allocated per call.

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use std::sync::Arc;

use super::bins::Spectrum;
use crate::error::{DspError, Result};
use crate::signal::Signal;

/// Precomputed forward transform for a fixed sample count
#[derive(Clone)]
pub struct ForwardFft {
    /// FFT size (number of samples)
    transform_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f32>>,
}

impl ForwardFft {
    /// Plan a forward FFT
    ///
    /// # Arguments
    /// * `transform_size` - FFT size, any positive integer
    pub fn new(transform_size: usize) -> Result<Self> {
        if transform_size == 0 {
            return Err(DspError::ZeroTransformSize);
        }

        let mut planner = RealFftPlanner::<f32>::new();
        let r2c = planner.plan_fft_forward(transform_size);

        log::debug!(
            "Planned forward FFT: size={}, bins={}",
            transform_size,
            transform_size / 2 + 1
        );

        Ok(Self {
            transform_size,
            r2c,
        })
    }

    /// Get FFT size
    pub fn transform_size(&self) -> usize {
        self.transform_size
    }

    /// Get number of frequency bins (transform_size/2 + 1 for real FFT)
    pub fn num_bins(&self) -> usize {
        self.transform_size / 2 + 1
    }

    /// Length of the interleaved buffer written by `process_real`
    pub fn output_len(&self) -> usize {
        2 * self.num_bins()
    }

    /// Bin center frequencies in Hz for a given sample rate
    pub fn frequency_axis(&self, sample_rate: u32) -> Vec<f32> {
        (0..self.num_bins())
            .map(|bin| (bin as f64 * sample_rate as f64 / self.transform_size as f64) as f32)
            .collect()
    }

    /// Transform a buffer into interleaved complex bins
    ///
    /// # Arguments
    /// * `input` - `transform_size` real samples
    /// * `output` - `output_len()` values, written as `[re0, im0, re1, im1, ...]`
    ///
    /// On any length mismatch nothing is written.
    pub fn process_real(&self, input: &[f32], output: &mut [f32]) -> Result<()> {
        DspError::check_len(self.output_len(), output.len())?;
        let bins = self.transform(input)?;

        for (pair, bin) in output.chunks_exact_mut(2).zip(bins.iter()) {
            pair[0] = bin.re;
            pair[1] = bin.im;
        }

        Ok(())
    }

    /// Transform a signal into a spectrum
    ///
    /// The signal must hold exactly `transform_size` samples; it is never
    /// padded or truncated.
    pub fn process(&self, signal: &Signal) -> Result<Spectrum> {
        let bins = self.transform(signal.samples())?;
        Ok(Spectrum::new(bins, signal.sample_rate(), self.transform_size))
    }

    fn transform(&self, input: &[f32]) -> Result<Vec<Complex<f32>>> {
        DspError::check_len(self.transform_size, input.len())?;

        // realfft uses the input as workspace
        let mut buffer = input.to_vec();
        let mut bins = self.r2c.make_output_vec();
        let mut scratch = self.r2c.make_scratch_vec();

        self.r2c
            .process_with_scratch(&mut buffer, &mut bins, &mut scratch)
            .map_err(|e| DspError::Transform(e.to_string()))?;

        Ok(bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(ForwardFft::new(0), Err(DspError::ZeroTransformSize)));
    }

    #[test]
    fn test_zero_input_gives_zero_output() {
        for n in [1, 2, 3, 7, 16, 100, 257] {
            let fft = ForwardFft::new(n).unwrap();
            let mut output = vec![1.0f32; fft.output_len()];
            fft.process_real(&vec![0.0; n], &mut output).unwrap();
            assert!(output.iter().all(|&v| v == 0.0), "size {}", n);
        }
    }

    #[test]
    fn test_fft_dc_signal() {
        let fft = ForwardFft::new(64).unwrap();
        let mut output = vec![0.0f32; fft.output_len()];
        fft.process_real(&[1.0; 64], &mut output).unwrap();

        // DC bin holds the sum, the rest vanish
        assert!((output[0] - 64.0).abs() < 1e-4);
        assert!(output[1].abs() < 1e-4);
        assert!(output[2..].iter().all(|v| v.abs() < 1e-3));
    }

    #[test]
    fn test_interleaved_layout() {
        // x = [0, 1, 0, 0] -> X[k] = e^{-iπk/2}
        let fft = ForwardFft::new(4).unwrap();
        let mut output = vec![0.0f32; 6];
        fft.process_real(&[0.0, 1.0, 0.0, 0.0], &mut output).unwrap();

        let expected = [1.0, 0.0, 0.0, -1.0, -1.0, 0.0];
        for (a, b) in output.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-6, "{:?}", output);
        }
    }

    #[test]
    fn test_fft_sine_wave() {
        let n = 1024;
        let k = 37;
        let fft = ForwardFft::new(n).unwrap();
        let samples: Vec<f32> = (0..n)
            .map(|i| (2.0 * PI * k as f32 * i as f32 / n as f32).sin())
            .collect();

        let spectrum = fft.process(&Signal::new(&samples, 48000)).unwrap();
        let magnitudes = spectrum.magnitudes();

        let (peak_bin, &peak_mag) = magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, k);
        // Peak magnitude should be N/2 for a bin-centered sine
        assert!((peak_mag - 512.0).abs() < 0.5);
    }

    #[test]
    fn test_length_mismatch() {
        let fft = ForwardFft::new(8).unwrap();

        let mut output = vec![3.0f32; fft.output_len()];
        assert_eq!(
            fft.process_real(&[0.0; 7], &mut output),
            Err(DspError::LengthMismatch { expected: 8, actual: 7 })
        );
        assert!(output.iter().all(|&v| v == 3.0));

        let mut short = vec![3.0f32; 8];
        assert_eq!(
            fft.process_real(&[0.0; 8], &mut short),
            Err(DspError::LengthMismatch { expected: 10, actual: 8 })
        );
        assert!(short.iter().all(|&v| v == 3.0));

        assert!(fft.process(&Signal::new(&[1.0; 16], 8)).is_err());
        assert!(fft.process(&Signal::empty(8)).is_err());
    }

    #[test]
    fn test_frequency_axis() {
        let fft = ForwardFft::new(1024).unwrap();
        let freqs = fft.frequency_axis(48000);

        assert_eq!(freqs.len(), 513);
        assert_eq!(freqs[0], 0.0);
        assert!((freqs[512] - 24000.0).abs() < 1e-3);
    }

    #[test]
    fn test_odd_size_bins() {
        let fft = ForwardFft::new(9).unwrap();
        assert_eq!(fft.num_bins(), 5);
        assert_eq!(fft.output_len(), 10);
    }
}
