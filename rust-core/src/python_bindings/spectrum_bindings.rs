//! Python bindings for spectrum analysis

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::signal_bindings::PySignal;
use super::window_bindings::PyWindowKernel;
use crate::spectrum::{AnalyzerConfig, Spectrum, SpectrumAnalyzer};

/// Spectrum exposed to Python
#[pyclass(name = "Spectrum")]
pub struct PySpectrum {
    pub(crate) spectrum: Spectrum,
}

#[pymethods]
impl PySpectrum {
    /// Frequency in Hz of bin `index` (wraps modulo the FFT size)
    fn item_freq(&self, index: usize) -> f32 {
        self.spectrum.item_freq(index)
    }

    /// Frequency in Hz of the highest stored bin
    fn max_freq(&self) -> f32 {
        self.spectrum.max_freq()
    }

    /// Get magnitude per bin as numpy array
    fn to_real<'py>(&self, py: Python<'py>) -> &'py PyArray1<f32> {
        PyArray1::from_vec(py, self.spectrum.magnitudes())
    }

    /// Get magnitude in dB as numpy array
    #[pyo3(signature = (reference=1.0))]
    fn magnitudes_db<'py>(&self, py: Python<'py>, reference: f32) -> &'py PyArray1<f32> {
        PyArray1::from_vec(py, self.spectrum.magnitudes_db(reference))
    }

    /// Get frequency bins in Hz
    fn frequencies<'py>(&self, py: Python<'py>) -> &'py PyArray1<f32> {
        PyArray1::from_vec(py, self.spectrum.frequencies())
    }

    /// Strongest bin as (index, frequency, magnitude)
    fn peak(&self) -> Option<(usize, f32, f32)> {
        self.spectrum.peak()
    }

    #[getter]
    fn sample_rate(&self) -> u32 {
        self.spectrum.sample_rate()
    }

    #[getter]
    fn source_size(&self) -> usize {
        self.spectrum.source_size()
    }

    fn __len__(&self) -> usize {
        self.spectrum.len()
    }
}

/// Spectrum analyzer exposed to Python
#[pyclass(name = "SpectrumAnalyzer")]
pub struct PySpectrumAnalyzer {
    analyzer: SpectrumAnalyzer,
}

#[pymethods]
impl PySpectrumAnalyzer {
    /// Create a new spectrum analyzer
    ///
    /// Args:
    ///     fft_size: FFT size (number of samples)
    ///     window: Window kernel, or None for no windowing
    ///     sample_rate: Sample rate in Hz
    ///     apply_correction: Whether to correct amplitudes for the window's gain
    #[new]
    #[pyo3(signature = (fft_size=2048, window=Some(PyWindowKernel::Hann), sample_rate=48000, apply_correction=false))]
    fn new(
        fft_size: usize,
        window: Option<PyWindowKernel>,
        sample_rate: u32,
        apply_correction: bool,
    ) -> PyResult<Self> {
        let config = AnalyzerConfig {
            fft_size,
            window: window.map(Into::into),
            sample_rate,
            apply_correction,
        };

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config)?,
        })
    }

    /// Analyze a signal
    fn analyze(&self, signal: PyRef<'_, PySignal>) -> PyResult<PySpectrum> {
        Ok(PySpectrum {
            spectrum: self.analyzer.analyze(&signal.signal)?,
        })
    }

    /// Analyze samples and return magnitude in dB
    ///
    /// Args:
    ///     samples: Input samples as float32 numpy array
    ///     reference: Reference level for dB calculation (default: 1.0)
    #[pyo3(signature = (samples, reference=1.0))]
    fn analyze_db<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
        reference: f32,
    ) -> PyResult<&'py PyArray1<f32>> {
        let spectrum = self.analyzer.analyze_db(samples.as_slice()?, reference)?;
        Ok(PyArray1::from_vec(py, spectrum))
    }

    /// Get frequency bins in Hz
    fn frequency_bins_hz<'py>(&self, py: Python<'py>) -> &'py PyArray1<f32> {
        PyArray1::from_vec(py, self.analyzer.frequency_bins_hz())
    }

    /// Update configuration
    #[pyo3(signature = (fft_size=None, window=None, sample_rate=None, apply_correction=None))]
    fn update_config(
        &mut self,
        fft_size: Option<usize>,
        window: Option<PyWindowKernel>,
        sample_rate: Option<u32>,
        apply_correction: Option<bool>,
    ) -> PyResult<()> {
        let mut config = self.analyzer.config().clone();

        if let Some(size) = fft_size {
            config.fft_size = size;
        }
        if let Some(kernel) = window {
            config.window = Some(kernel.into());
        }
        if let Some(sr) = sample_rate {
            config.sample_rate = sr;
        }
        if let Some(corr) = apply_correction {
            config.apply_correction = corr;
        }

        self.analyzer.update_config(config)?;
        Ok(())
    }

    /// Get number of frequency bins
    fn num_bins(&self) -> usize {
        self.analyzer.num_bins()
    }

    /// Get current FFT size
    fn get_fft_size(&self) -> usize {
        self.analyzer.config().fft_size
    }
}
