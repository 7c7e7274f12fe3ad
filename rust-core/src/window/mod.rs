//! Analysis windows

pub mod kernels;
pub mod placement;

pub use kernels::{generate_kernel, WindowKernel};
pub use placement::Window;
