//! Python bindings for signals

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use super::window_bindings::PyWindow;
use crate::signal::Signal;

/// Signal exposed to Python
#[pyclass(name = "Signal")]
#[derive(Clone)]
pub struct PySignal {
    pub(crate) signal: Signal,
}

#[pymethods]
impl PySignal {
    /// Create a signal from samples
    ///
    /// Args:
    ///     samples: Sample data as float32 numpy array (copied)
    ///     sample_rate: Sample rate in Hz
    #[new]
    fn new(samples: PyReadonlyArray1<f32>, sample_rate: u32) -> PyResult<Self> {
        Ok(Self {
            signal: Signal::new(samples.as_slice()?, sample_rate),
        })
    }

    /// Create a zero-length signal
    #[staticmethod]
    fn empty(sample_rate: u32) -> Self {
        Self {
            signal: Signal::empty(sample_rate),
        }
    }

    /// Return a new signal scaled by `amount`
    fn rescale(&self, amount: f32) -> Self {
        Self {
            signal: self.signal.rescale(amount),
        }
    }

    /// Return a new signal shaped by `window`
    fn windowed(&self, window: PyRef<'_, PyWindow>) -> PyResult<Self> {
        Ok(Self {
            signal: self.signal.windowed(&window.window)?,
        })
    }

    /// Get samples as numpy array
    fn samples<'py>(&self, py: Python<'py>) -> &'py PyArray1<f32> {
        PyArray1::from_slice(py, self.signal.samples())
    }

    #[getter]
    fn sample_rate(&self) -> u32 {
        self.signal.sample_rate()
    }

    #[getter]
    fn duration(&self) -> f64 {
        self.signal.duration()
    }

    fn __len__(&self) -> usize {
        self.signal.len()
    }
}
