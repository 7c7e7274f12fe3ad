//! PyO3 bindings for Python integration

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::DspError;

mod fft_bindings;
mod signal_bindings;
mod spectrum_bindings;
mod window_bindings;

impl From<DspError> for PyErr {
    fn from(err: DspError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Python module definition
#[pymodule]
fn dsp_rs(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<signal_bindings::PySignal>()?;
    m.add_class::<fft_bindings::PyForwardFft>()?;
    m.add_class::<spectrum_bindings::PySpectrum>()?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;
    m.add_class::<window_bindings::PyWindow>()?;

    // Add WindowKernel enum
    m.add_class::<window_bindings::PyWindowKernel>()?;

    Ok(())
}
