use super::validate;
use crate::border::extend;
use crate::error::Result;
use crate::image::{GrayImageU8, ImageU8, ImageView};
use crate::kernel::Kernel;
use crate::parallel::ParallelFor;

/// Parallel convolution on the global rayon pool with the default partition.
pub fn convolve_parallel(src: &ImageU8<'_>, kernel: &Kernel) -> Result<GrayImageU8> {
    convolve_parallel_with(src, kernel, &ParallelFor::new())
}

/// Parallel convolution over the flattened pixel range `[0, w * h)`.
///
/// `executor` cuts the range into contiguous chunks; each index `r` maps to
/// `(x, y) = (r % w, r / w)` and writes only its own output cell, so any
/// partition yields the same image. Accumulates in `f64` and stores with a
/// saturating cast.
pub fn convolve_parallel_with(
    src: &ImageU8<'_>,
    kernel: &Kernel,
    executor: &ParallelFor,
) -> Result<GrayImageU8> {
    validate(src, kernel)?;
    let ksize = kernel.ksize();
    let cols = src.w;
    let ext = extend(src, kernel.half_width());
    log::debug!(
        "convolve_parallel: {}x{} image, {ksize}x{ksize} kernel, {:?} partition",
        src.w,
        src.h,
        executor.partition()
    );

    let mut dst = GrayImageU8::zeros(src.w, src.h);
    executor.run(dst.data_mut(), |range, chunk| {
        for (r, out) in range.zip(chunk.iter_mut()) {
            let (y, x) = (r / cols, r % cols);
            let mut value = 0.0f64;
            for k in 0..ksize {
                let window = &ext.row(y + k)[x..x + ksize];
                for (&w, &px) in kernel.row(k).iter().zip(window) {
                    value += f64::from(w) * f64::from(px);
                }
            }
            *out = saturate_u8(value);
        }
    });
    Ok(dst)
}

/// Round half to even, then clamp to `[0, 255]`. NaN maps to 0.
#[inline]
pub(crate) fn saturate_u8(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}
