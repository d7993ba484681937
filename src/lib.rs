#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod border;
pub mod convolve;
pub mod error;
pub mod image;
pub mod kernel;
pub mod parallel;

// Demo plumbing: reports, viewers and the binary's config.
pub mod config;
pub mod diagnostics;
pub mod display;

// --- High-level re-exports -------------------------------------------------

pub use crate::border::extend;
pub use crate::convolve::{
    convolve_parallel, convolve_parallel_with, convolve_sequential, Evaluator,
};
pub use crate::error::{ConvError, Result};
pub use crate::kernel::Kernel;
pub use crate::parallel::{ParallelFor, Partition};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use stencil_conv::prelude::*;
///
/// # fn main() -> stencil_conv::Result<()> {
/// let raw = vec![100u8; 10 * 10];
/// let img = ImageU8::new(10, 10, &raw)?;
/// let kernel = Kernel::box_filter(5)?;
///
/// let blurred = convolve_parallel(&img, &kernel)?;
/// assert!(blurred.data().iter().all(|&v| v == 100));
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};
    pub use crate::{
        convolve_parallel, convolve_parallel_with, convolve_sequential, extend, Kernel,
        ParallelFor, Partition,
    };
}
