//! Spectral analysis with FFT

pub mod analysis;
pub mod bins;
pub mod fft;

pub use analysis::{AnalyzerConfig, SpectrumAnalyzer};
pub use bins::Spectrum;
pub use fft::ForwardFft;
