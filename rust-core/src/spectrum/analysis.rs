//! High-level spectrum analyzer
//!
//! Chains the window and the forward FFT: Signal → Window → FFT → Spectrum

use super::bins::Spectrum;
use super::fft::ForwardFft;
use crate::error::Result;
use crate::signal::Signal;
use crate::window::{Window, WindowKernel};

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, any positive integer)
    pub fft_size: usize,

    /// Window kernel spanning the whole frame, `None` to skip windowing
    pub window: Option<WindowKernel>,

    /// Expected sample rate in Hz
    pub sample_rate: u32,

    /// Divide bins by the window's coherent gain
    pub apply_correction: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 2048,
            window: Some(WindowKernel::Hann),
            sample_rate: 48000,
            apply_correction: false,
        }
    }
}

/// Windowed spectrum analyzer
#[derive(Clone)]
pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    fft: ForwardFft,
    window: Option<Window>,
    correction_factor: f32,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let fft = ForwardFft::new(config.fft_size)?;
        let (window, correction_factor) = Self::build_window(&config);

        Ok(Self {
            config,
            fft,
            window,
            correction_factor,
        })
    }

    fn build_window(config: &AnalyzerConfig) -> (Option<Window>, f32) {
        let window = config
            .window
            .map(|kernel| Window::full(kernel, config.fft_size));

        let correction_factor = match window {
            // Two-sample zero-ended kernels have no gain to correct for
            Some(w) if config.apply_correction && w.coherent_gain() > 0.0 => {
                (1.0 / w.coherent_gain()) as f32
            }
            _ => 1.0,
        };

        (window, correction_factor)
    }

    /// Analyze a signal
    ///
    /// The signal must hold exactly `fft_size` samples. Its own sample rate
    /// is carried into the spectrum.
    pub fn analyze(&self, signal: &Signal) -> Result<Spectrum> {
        let mut spectrum = match &self.window {
            Some(window) => self.fft.process(&signal.windowed(window)?)?,
            None => self.fft.process(signal)?,
        };

        if self.correction_factor != 1.0 {
            spectrum.scale(self.correction_factor);
        }

        Ok(spectrum)
    }

    /// Analyze raw samples at the configured sample rate
    pub fn analyze_samples(&self, samples: &[f32]) -> Result<Spectrum> {
        self.analyze(&Signal::new(samples, self.config.sample_rate))
    }

    /// Analyze and return magnitude in dB
    pub fn analyze_db(&self, samples: &[f32], reference: f32) -> Result<Vec<f32>> {
        Ok(self.analyze_samples(samples)?.magnitudes_db(reference))
    }

    /// Get frequency bins in Hz at the configured sample rate
    pub fn frequency_bins_hz(&self) -> Vec<f32> {
        self.fft.frequency_axis(self.config.sample_rate)
    }

    /// Update configuration
    ///
    /// The FFT is only re-planned when the size changes.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<()> {
        let needs_new_fft = config.fft_size != self.config.fft_size;

        let fft = if needs_new_fft {
            ForwardFft::new(config.fft_size)?
        } else {
            self.fft.clone()
        };
        let (window, correction_factor) = Self::build_window(&config);

        log::debug!(
            "Analyzer reconfigured: fft_size={}, window={:?}, replanned={}",
            config.fft_size,
            config.window.map(|k| k.name()),
            needs_new_fft
        );

        self.fft = fft;
        self.window = window;
        self.correction_factor = correction_factor;
        self.config = config;

        Ok(())
    }

    /// Get current configuration
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get number of frequency bins
    pub fn num_bins(&self) -> usize {
        self.fft.num_bins()
    }
}
