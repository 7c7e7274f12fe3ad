//! DSP-RS - Spectral Analysis Core
//!
//! Signal → Window → Forward FFT → Spectrum, with a sentinel-value boundary
//! for handle-based callers and optional Python bindings.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod boundary;
pub mod error;
pub mod signal;
pub mod spectrum;
pub mod window;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{DspError, Result};
pub use signal::Signal;
pub use spectrum::{AnalyzerConfig, ForwardFft, Spectrum, SpectrumAnalyzer};
pub use window::{Window, WindowKernel};
