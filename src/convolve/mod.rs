//! 2-D stencil convolution over 8-bit grayscale images.
//!
//! Both evaluators pad the input with a replicated border of
//! `kernel.half_width()` pixels and then compute, for every output pixel
//! `(x, y)`,
//!
//! ```text
//! value = Σ_k Σ_l kernel[k][l] * extended[y + k][x + l],   k, l ∈ [0, ksize)
//! ```
//!
//! They deliberately differ in how `value` is accumulated and stored:
//!
//! | evaluator             | accumulator | store                                   |
//! |-----------------------|-------------|-----------------------------------------|
//! | [`convolve_sequential`] | `f32`     | truncate toward zero, wrap modulo 256    |
//! | [`convolve_parallel`]   | `f64`     | round half to even, clamp to `[0, 255]` |
//!
//! For non-negative kernels summing to at most one the two agree within one
//! grey level; outside that regime the sequential store wraps where the
//! parallel one saturates.
//!
//! Arguments are validated before any output is allocated: the kernel side
//! must be odd and must not exceed `min(width, height)`.

mod parallel;
mod sequential;

#[cfg(test)]
mod tests;

pub use parallel::{convolve_parallel, convolve_parallel_with};
pub use sequential::convolve_sequential;

use crate::error::{ConvError, Result};
use crate::image::{GrayImageU8, ImageU8};
use crate::kernel::Kernel;
use crate::parallel::ParallelFor;
use serde::Serialize;

/// Selects one of the two evaluators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluator {
    Sequential,
    Parallel,
}

impl Evaluator {
    pub const ALL: [Evaluator; 2] = [Evaluator::Sequential, Evaluator::Parallel];

    pub fn label(&self) -> &'static str {
        match self {
            Evaluator::Sequential => "sequential",
            Evaluator::Parallel => "parallel",
        }
    }

    /// Run this evaluator; `executor` is only consulted by the parallel one.
    pub fn run(
        &self,
        src: &ImageU8<'_>,
        kernel: &Kernel,
        executor: &ParallelFor,
    ) -> Result<GrayImageU8> {
        match self {
            Evaluator::Sequential => convolve_sequential(src, kernel),
            Evaluator::Parallel => convolve_parallel_with(src, kernel, executor),
        }
    }
}

/// Reject kernels the padded-window indexing cannot serve.
pub fn validate(src: &ImageU8<'_>, kernel: &Kernel) -> Result<()> {
    let ksize = kernel.ksize();
    if ksize % 2 == 0 {
        return Err(ConvError::invalid(format!(
            "kernel size must be odd, got {ksize}"
        )));
    }
    let min_side = src.w.min(src.h);
    if ksize > min_side {
        return Err(ConvError::invalid(format!(
            "kernel size {ksize} exceeds the smaller image side ({}x{})",
            src.w, src.h
        )));
    }
    Ok(())
}
