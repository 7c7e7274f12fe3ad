//! Window kernels for spectral analysis
//!
//! Every kernel is evaluated over n = 0..width-1 with N = width - 1.
//! A single-sample kernel (N == 0) is defined as 1.

use std::f64::consts::PI;

/// Window kernel types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowKernel {
    /// Rectangular window (no shaping): w[n] = 1
    Rectangular,

    /// Triangular window: w[n] = 1 - |(n - N/2) / (N/2)|
    Triangular,

    /// Welch window: w[n] = 1 - ((n - N/2) / (N/2))^2
    Welch,

    /// Sine window: w[n] = sin(πn/N)
    Sine,

    /// Hann window: w[n] = 0.5*(1 - cos(2πn/N))
    /// Sidelobe attenuation: ~31 dB, endpoints at zero
    Hann,

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/N)
    /// Non-zero endpoints (0.08)
    Hamming,

    /// Blackman window: w[n] = 0.42 - 0.5*cos(2πn/N) + 0.08*cos(4πn/N)
    Blackman,
}

impl WindowKernel {
    pub const ALL: [WindowKernel; 7] = [
        WindowKernel::Rectangular,
        WindowKernel::Triangular,
        WindowKernel::Welch,
        WindowKernel::Sine,
        WindowKernel::Hann,
        WindowKernel::Hamming,
        WindowKernel::Blackman,
    ];

    /// Lowercase kernel name
    pub fn name(&self) -> &'static str {
        match self {
            WindowKernel::Rectangular => "rectangular",
            WindowKernel::Triangular => "triangular",
            WindowKernel::Welch => "welch",
            WindowKernel::Sine => "sine",
            WindowKernel::Hann => "hann",
            WindowKernel::Hamming => "hamming",
            WindowKernel::Blackman => "blackman",
        }
    }

    /// Evaluate the kernel at position `n` of a `width`-sample window
    ///
    /// # Arguments
    /// * `n` - Position inside the window (0..width)
    /// * `width` - Number of samples the kernel spans
    pub fn coefficient(&self, n: usize, width: usize) -> f64 {
        if width <= 1 {
            return 1.0;
        }

        let big_n = (width - 1) as f64;
        let n = n as f64;

        match self {
            WindowKernel::Rectangular => 1.0,

            WindowKernel::Triangular => {
                let half = big_n / 2.0;
                1.0 - ((n - half) / half).abs()
            }

            WindowKernel::Welch => {
                let half = big_n / 2.0;
                let x = (n - half) / half;
                1.0 - x * x
            }

            WindowKernel::Sine => (PI * n / big_n).sin(),

            WindowKernel::Hann => {
                let angle = 2.0 * PI * n / big_n;
                0.5 * (1.0 - angle.cos())
            }

            WindowKernel::Hamming => {
                let angle = 2.0 * PI * n / big_n;
                0.54 - 0.46 * angle.cos()
            }

            WindowKernel::Blackman => {
                let angle1 = 2.0 * PI * n / big_n;
                let angle2 = 4.0 * PI * n / big_n;
                0.42 - 0.5 * angle1.cos() + 0.08 * angle2.cos()
            }
        }
    }
}

/// Generate kernel coefficients
///
/// # Arguments
/// * `kernel` - Window kernel
/// * `width` - Number of samples (N + 1)
///
/// # Returns
/// Vector of coefficients w[n] for n = 0..width-1
pub fn generate_kernel(kernel: WindowKernel, width: usize) -> Vec<f64> {
    (0..width).map(|n| kernel.coefficient(n, width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_symmetry() {
        for kernel in WindowKernel::ALL {
            for width in [2, 7, 8, 161] {
                let w = generate_kernel(kernel, width);
                assert_eq!(w.len(), width);
                for n in 0..width / 2 {
                    assert!(
                        (w[n] - w[width - 1 - n]).abs() < 1e-10,
                        "{} not symmetric at width {}",
                        kernel.name(),
                        width
                    );
                }
            }
        }
    }

    #[test]
    fn test_kernel_centers() {
        // Odd width puts a sample exactly at N/2
        let width = 161;
        let center = width / 2;
        for kernel in WindowKernel::ALL {
            let w = generate_kernel(kernel, width);
            assert!((w[center] - 1.0).abs() < 1e-10, "{}", kernel.name());
        }
    }

    #[test]
    fn test_kernel_endpoints() {
        let width = 64;
        let zero_ended = [
            WindowKernel::Triangular,
            WindowKernel::Welch,
            WindowKernel::Sine,
            WindowKernel::Hann,
        ];
        for kernel in zero_ended {
            let w = generate_kernel(kernel, width);
            assert!(w[0].abs() < 1e-10);
            assert!(w[width - 1].abs() < 1e-10);
        }

        let hamming = generate_kernel(WindowKernel::Hamming, width);
        assert!((hamming[0] - 0.08).abs() < 1e-10);

        let blackman = generate_kernel(WindowKernel::Blackman, width);
        assert!(blackman[0].abs() < 1e-10);
    }

    #[test]
    fn test_single_sample_kernel() {
        for kernel in WindowKernel::ALL {
            assert_eq!(generate_kernel(kernel, 1), vec![1.0]);
        }
        assert!(generate_kernel(WindowKernel::Hann, 0).is_empty());
    }

    #[test]
    fn test_triangular_values() {
        let w = generate_kernel(WindowKernel::Triangular, 5);
        let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_welch_values() {
        let w = generate_kernel(WindowKernel::Welch, 5);
        let expected = [0.0, 0.75, 1.0, 0.75, 0.0];
        for (a, b) in w.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
