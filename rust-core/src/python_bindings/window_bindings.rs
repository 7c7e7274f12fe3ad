//! Python bindings for analysis windows

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::window::{Window, WindowKernel};

/// Window kernel enum exposed to Python
#[pyclass(name = "WindowKernel")]
#[derive(Clone)]
pub enum PyWindowKernel {
    Rectangular,
    Triangular,
    Welch,
    Sine,
    Hann,
    Hamming,
    Blackman,
}

impl From<PyWindowKernel> for WindowKernel {
    fn from(py_kernel: PyWindowKernel) -> Self {
        match py_kernel {
            PyWindowKernel::Rectangular => WindowKernel::Rectangular,
            PyWindowKernel::Triangular => WindowKernel::Triangular,
            PyWindowKernel::Welch => WindowKernel::Welch,
            PyWindowKernel::Sine => WindowKernel::Sine,
            PyWindowKernel::Hann => WindowKernel::Hann,
            PyWindowKernel::Hamming => WindowKernel::Hamming,
            PyWindowKernel::Blackman => WindowKernel::Blackman,
        }
    }
}

/// Window exposed to Python
#[pyclass(name = "Window")]
pub struct PyWindow {
    pub(crate) window: Window,
}

#[pymethods]
impl PyWindow {
    /// Create a window
    ///
    /// Args:
    ///     kernel: Window kernel
    ///     width: Number of samples the kernel spans
    ///     offset: First sample covered by the kernel
    ///     window_length: Total buffer length (defaults to offset + width)
    #[new]
    #[pyo3(signature = (kernel, width, offset=0, window_length=None))]
    fn new(
        kernel: PyWindowKernel,
        width: usize,
        offset: usize,
        window_length: Option<usize>,
    ) -> PyResult<Self> {
        let window_length = window_length.unwrap_or(offset.saturating_add(width));
        Ok(Self {
            window: Window::new(kernel.into(), width, offset, window_length)?,
        })
    }

    /// Apply the window and return the shaped samples
    ///
    /// Args:
    ///     samples: float32 numpy array of length `len(window)`
    fn apply<'py>(
        &self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f32>,
    ) -> PyResult<&'py PyArray1<f32>> {
        let input = samples.as_slice()?;
        let mut output = vec![0.0; self.window.len()];
        self.window.apply(input, &mut output)?;

        Ok(PyArray1::from_vec(py, output))
    }

    /// Get window coefficients
    fn coefficients<'py>(&self, py: Python<'py>) -> &'py PyArray1<f32> {
        PyArray1::from_vec(py, self.window.coefficients())
    }

    fn coherent_gain(&self) -> f64 {
        self.window.coherent_gain()
    }

    fn __len__(&self) -> usize {
        self.window.len()
    }
}
