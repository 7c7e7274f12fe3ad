//! Sentinel-value boundary for handle-based callers
//!
//! Mirrors the C-facing contract: every handle may be absent, and failures
//! are reported as `false`, `-1` or `-1.0` instead of a `Result`. Handles are
//! plain owned values; releasing one is dropping it.

use crate::error::DspError;
use crate::signal::Signal;
use crate::spectrum::{ForwardFft, Spectrum};
use crate::window::{Window, WindowKernel};

/// Returned by integer queries on an absent handle
pub const INVALID_LEN: i64 = -1;

/// Returned by frequency queries on an absent handle
pub const INVALID_FREQ: f32 = -1.0;

fn report(op: &str, err: DspError) {
    log::warn!("{} rejected: {}", op, err);
}

pub fn signal_new(data: &[f32], sample_rate: u32) -> Signal {
    Signal::new(data, sample_rate)
}

pub fn signal_empty(sample_rate: u32) -> Signal {
    Signal::empty(sample_rate)
}

pub fn signal_rescale(signal: Option<&Signal>, amount: f32) -> Option<Signal> {
    signal.map(|s| s.rescale(amount))
}

/// Plan a forward FFT, `None` for a zero size
pub fn forward_fft_new(transform_size: usize) -> Option<ForwardFft> {
    ForwardFft::new(transform_size).ok()
}

pub fn forward_fft_process(fft: Option<&ForwardFft>, signal: Option<&Signal>) -> Option<Spectrum> {
    let (fft, signal) = fft.zip(signal)?;
    match fft.process(signal) {
        Ok(spectrum) => Some(spectrum),
        Err(err) => {
            report("forward_fft_process", err);
            None
        }
    }
}

pub fn forward_fft_process_real(fft: Option<&ForwardFft>, input: &[f32], output: &mut [f32]) -> bool {
    match fft {
        Some(fft) => match fft.process_real(input, output) {
            Ok(()) => true,
            Err(err) => {
                report("forward_fft_process_real", err);
                false
            }
        },
        None => false,
    }
}

pub fn rectangular_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Rectangular, width, offset, window_length).ok()
}

pub fn triangular_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Triangular, width, offset, window_length).ok()
}

pub fn welch_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Welch, width, offset, window_length).ok()
}

pub fn sine_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Sine, width, offset, window_length).ok()
}

pub fn hann_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Hann, width, offset, window_length).ok()
}

pub fn hamming_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Hamming, width, offset, window_length).ok()
}

pub fn blackman_window(width: usize, offset: usize, window_length: usize) -> Option<Window> {
    Window::new(WindowKernel::Blackman, width, offset, window_length).ok()
}

/// Window length, or -1 if the window is absent
pub fn window_len(window: Option<&Window>) -> i64 {
    window.map_or(INVALID_LEN, |w| to_i64(w.len()))
}

pub fn window_apply(window: Option<&Window>, input: &[f32], output: &mut [f32]) -> bool {
    match window {
        Some(window) => match window.apply(input, output) {
            Ok(()) => true,
            Err(err) => {
                report("window_apply", err);
                false
            }
        },
        None => false,
    }
}

/// Frequency of bin `index` (cyclic), or -1.0 if the spectrum is absent
pub fn spectrum_item_freq(spectrum: Option<&Spectrum>, index: usize) -> f32 {
    spectrum.map_or(INVALID_FREQ, |s| s.item_freq(index))
}

pub fn spectrum_max_freq(spectrum: Option<&Spectrum>) -> f32 {
    spectrum.map_or(INVALID_FREQ, Spectrum::max_freq)
}

pub fn spectrum_len(spectrum: Option<&Spectrum>) -> i64 {
    spectrum.map_or(INVALID_LEN, |s| to_i64(s.len()))
}

pub fn spectrum_to_real(spectrum: Option<&Spectrum>, output: &mut [f32]) -> bool {
    match spectrum {
        Some(spectrum) => match spectrum.to_real(output) {
            Ok(()) => true,
            Err(err) => {
                report("spectrum_to_real", err);
                false
            }
        },
        None => false,
    }
}

fn to_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_handles() {
        let mut output = vec![0.0f32; 4];

        assert_eq!(window_len(None), -1);
        assert!(!window_apply(None, &[0.0; 4], &mut output));
        assert_eq!(spectrum_item_freq(None, 3), -1.0);
        assert_eq!(spectrum_max_freq(None), -1.0);
        assert_eq!(spectrum_len(None), -1);
        assert!(!spectrum_to_real(None, &mut output));
        assert!(!forward_fft_process_real(None, &[0.0; 4], &mut output));
        assert!(forward_fft_process(None, Some(&signal_empty(8))).is_none());
        assert!(signal_rescale(None, 2.0).is_none());
    }

    #[test]
    fn test_degenerate_construction() {
        assert!(forward_fft_new(0).is_none());
        assert!(hann_window(8, 1, 8).is_none());
        assert!(rectangular_window(4, 4, 8).is_some());
    }

    #[test]
    fn test_impulse_through_handles() {
        let fft = forward_fft_new(4);
        let signal = signal_new(&[1.0, 0.0, 0.0, 0.0], 4);
        let spectrum = forward_fft_process(fft.as_ref(), Some(&signal));

        assert_eq!(spectrum_len(spectrum.as_ref()), 3);
        assert_eq!(spectrum_item_freq(spectrum.as_ref(), 1), 1.0);
        assert_eq!(spectrum_item_freq(spectrum.as_ref(), 5), 1.0);
        assert_eq!(spectrum_max_freq(spectrum.as_ref()), 2.0);

        let mut magnitudes = vec![0.0f32; 3];
        assert!(spectrum_to_real(spectrum.as_ref(), &mut magnitudes));
        assert!(magnitudes.iter().all(|&m| (m - 1.0).abs() < 1e-6));

        let mut wrong = vec![0.0f32; 4];
        assert!(!spectrum_to_real(spectrum.as_ref(), &mut wrong));
    }

    #[test]
    fn test_mismatch_reports_false() {
        let fft = forward_fft_new(8);
        let mut output = vec![0.0f32; 10];
        assert!(forward_fft_process_real(fft.as_ref(), &[0.0; 8], &mut output));
        assert!(!forward_fft_process_real(fft.as_ref(), &[0.0; 4], &mut output));

        let long = signal_new(&[0.0; 9], 8);
        assert!(forward_fft_process(fft.as_ref(), Some(&long)).is_none());

        let window = blackman_window(8, 0, 8);
        assert_eq!(window_len(window.as_ref()), 8);
        let mut out = vec![0.0f32; 8];
        assert!(window_apply(window.as_ref(), &[1.0; 8], &mut out));
        assert!(!window_apply(window.as_ref(), &[1.0; 7], &mut out));
    }

    #[test]
    fn test_every_kernel_constructor() {
        let windows = [
            rectangular_window(4, 0, 4),
            triangular_window(4, 0, 4),
            welch_window(4, 0, 4),
            sine_window(4, 0, 4),
            hann_window(4, 0, 4),
            hamming_window(4, 0, 4),
            blackman_window(4, 0, 4),
        ];
        for (window, kernel) in windows.iter().zip(WindowKernel::ALL) {
            assert_eq!(window.map(|w| w.kernel()), Some(kernel));
        }
    }
}
