//! Python bindings for the forward FFT plan

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::signal_bindings::PySignal;
use super::spectrum_bindings::PySpectrum;
use crate::spectrum::ForwardFft;

/// Forward FFT plan exposed to Python
#[pyclass(name = "ForwardFft")]
pub struct PyForwardFft {
    fft: ForwardFft,
}

#[pymethods]
impl PyForwardFft {
    /// Plan a forward FFT
    ///
    /// Args:
    ///     transform_size: FFT size (any positive integer)
    #[new]
    fn new(transform_size: usize) -> PyResult<Self> {
        Ok(Self {
            fft: ForwardFft::new(transform_size)?,
        })
    }

    /// Transform a signal of exactly `transform_size` samples
    fn process(&self, signal: PyRef<'_, PySignal>) -> PyResult<PySpectrum> {
        Ok(PySpectrum {
            spectrum: self.fft.process(&signal.signal)?,
        })
    }

    /// Transform raw samples
    ///
    /// Returns:
    ///     Interleaved [re0, im0, re1, im1, ...] for transform_size/2 + 1 bins
    fn process_real<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let mut output = vec![0.0; self.fft.output_len()];
        self.fft.process_real(samples.as_slice()?, &mut output)?;

        Ok(PyArray1::from_vec(py, output))
    }

    #[getter]
    fn transform_size(&self) -> usize {
        self.fft.transform_size()
    }

    fn num_bins(&self) -> usize {
        self.fft.num_bins()
    }
}
