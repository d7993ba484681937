//! Run reports for the demo binary and the comparison helpers they rely on.
//!
//! `ConvolutionReport` bundles what was convolved (input and kernel size), how
//! the parallel run was partitioned, per-evaluator timings, and how far the
//! two outputs drifted apart.

pub mod timing;

pub use timing::{StageTiming, TimingBreakdown};

use crate::image::{ImageView, ImageViewMut};
use crate::parallel::Partition;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
    pub ksize: usize,
    pub kernel_sum: f32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallelDescriptor {
    pub partition: Partition,
    pub threads: usize,
    pub chunk_len: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvolutionReport {
    pub input: InputDescriptor,
    pub parallel: ParallelDescriptor,
    pub timings: TimingBreakdown,
    /// Largest per-pixel difference between the sequential and parallel output.
    pub max_abs_diff: Option<u8>,
    /// Number of pixels where the two outputs differ.
    pub differing_pixels: Option<usize>,
}

/// Largest absolute per-pixel difference, or `None` when the shapes differ.
pub fn max_abs_diff<A, B>(a: &A, b: &B) -> Option<u8>
where
    A: ImageView<Pixel = u8>,
    B: ImageView<Pixel = u8>,
{
    if a.width() != b.width() || a.height() != b.height() {
        return None;
    }
    let max = a
        .rows()
        .zip(b.rows())
        .flat_map(|(ra, rb)| ra.iter().zip(rb).map(|(&pa, &pb)| pa.abs_diff(pb)))
        .max()
        .unwrap_or(0);
    Some(max)
}

/// Number of pixels that differ, or `None` when the shapes differ.
pub fn count_differences<A, B>(a: &A, b: &B) -> Option<usize>
where
    A: ImageView<Pixel = u8>,
    B: ImageView<Pixel = u8>,
{
    if a.width() != b.width() || a.height() != b.height() {
        return None;
    }
    let count = a
        .rows()
        .zip(b.rows())
        .map(|(ra, rb)| ra.iter().zip(rb).filter(|(pa, pb)| pa != pb).count())
        .sum();
    Some(count)
}

/// Per-pixel `|a - b|` image, useful for inspecting where two runs disagree.
pub fn diff_image<A, B>(a: &A, b: &B) -> Option<crate::image::GrayImageU8>
where
    A: ImageView<Pixel = u8>,
    B: ImageView<Pixel = u8>,
{
    if a.width() != b.width() || a.height() != b.height() {
        return None;
    }
    let mut out = crate::image::GrayImageU8::zeros(a.width(), a.height());
    for ((dst, ra), rb) in out.rows_mut().zip(a.rows()).zip(b.rows()) {
        for ((d, &pa), &pb) in dst.iter_mut().zip(ra).zip(rb) {
            *d = pa.abs_diff(pb);
        }
    }
    Some(out)
}
