//! Sampled signals
//!
//! A `Signal` owns its samples and the rate they were captured at.

use crate::error::Result;
use crate::window::Window;

/// Owned buffer of real samples with its sample rate
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl Signal {
    /// Create signal from samples
    ///
    /// # Arguments
    /// * `samples` - Sample data, copied into the signal
    /// * `sample_rate` - Sample rate in Hz
    pub fn new(samples: &[f32], sample_rate: u32) -> Self {
        Self::from_vec(samples.to_vec(), sample_rate)
    }

    /// Create signal taking ownership of an existing buffer
    pub fn from_vec(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Zero-length signal
    pub fn empty(sample_rate: u32) -> Self {
        Self::from_vec(Vec::new(), sample_rate)
    }

    /// New signal with every sample multiplied by `amount`
    pub fn rescale(&self, amount: f32) -> Self {
        Self {
            samples: self.samples.iter().map(|&s| s * amount).collect(),
            sample_rate: self.sample_rate,
        }
    }

    /// New signal shaped by `window`
    ///
    /// The window length must match the sample count.
    pub fn windowed(&self, window: &Window) -> Result<Self> {
        let mut samples = vec![0.0; window.len()];
        window.apply(&self.samples, &mut samples)?;

        Ok(Self {
            samples,
            sample_rate: self.sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Duration in seconds (0 when the sample rate is 0)
    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.samples.len() as f64 / self.sample_rate as f64
        }
    }
}

impl From<Signal> for Vec<f32> {
    fn from(signal: Signal) -> Self {
        signal.samples
    }
}
