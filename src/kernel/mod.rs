//! Square convolution kernels with an odd side length.
//!
//! Weights are stored row-major as `f32`, `ksize × ksize` of them. A kernel
//! never checks that its weights sum to one: the box kernel does, but the
//! evaluators accept any weights.

use crate::error::{ConvError, Result};

/// Binomial taps `[1, 4, 6, 4, 1] / 16`, a 5-tap Gaussian approximation.
pub const GAUSSIAN_5TAP: [f32; 5] = [0.0625, 0.25, 0.375, 0.25, 0.0625];

/// Binomial taps `[1, 2, 1] / 4`.
pub const BINOMIAL_3TAP: [f32; 3] = [0.25, 0.5, 0.25];

#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    ksize: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Build a kernel from `ksize * ksize` row-major weights.
    pub fn new(ksize: usize, weights: Vec<f32>) -> Result<Self> {
        check_odd_size(ksize)?;
        if weights.len() != ksize * ksize {
            return Err(ConvError::invalid(format!(
                "{ksize}x{ksize} kernel needs {} weights, got {}",
                ksize * ksize,
                weights.len()
            )));
        }
        Ok(Self { ksize, weights })
    }

    /// Build a kernel from explicit rows; every row must be as long as the
    /// number of rows.
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self> {
        let ksize = rows.len();
        let mut weights = Vec::with_capacity(ksize * ksize);
        for (k, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ksize {
                return Err(ConvError::invalid(format!(
                    "kernel row {k} has {} weights, expected {ksize}",
                    row.len()
                )));
            }
            weights.extend_from_slice(row);
        }
        Self::new(ksize, weights)
    }

    /// Uniform averaging kernel, every weight `1 / ksize²`.
    pub fn box_filter(ksize: usize) -> Result<Self> {
        check_odd_size(ksize)?;
        let weight = 1.0f32 / (ksize * ksize) as f32;
        Ok(Self {
            ksize,
            weights: vec![weight; ksize * ksize],
        })
    }

    /// 1×1 kernel with weight 1.
    pub fn identity() -> Self {
        Self {
            ksize: 1,
            weights: vec![1.0],
        }
    }

    /// Outer product `taps[k] * taps[l]` of a 1D filter with itself.
    pub fn from_separable(taps: &[f32]) -> Result<Self> {
        let ksize = taps.len();
        check_odd_size(ksize)?;
        let weights = taps
            .iter()
            .flat_map(|&ty| taps.iter().map(move |&tx| ty * tx))
            .collect();
        Ok(Self { ksize, weights })
    }

    /// Side length (always odd).
    #[inline]
    pub fn ksize(&self) -> usize {
        self.ksize
    }

    /// Half-width `(ksize - 1) / 2`, i.e. the border margin the kernel needs.
    #[inline]
    pub fn half_width(&self) -> usize {
        self.ksize / 2
    }

    #[inline]
    pub fn get(&self, k: usize, l: usize) -> f32 {
        self.weights[k * self.ksize + l]
    }

    #[inline]
    pub fn row(&self, k: usize) -> &[f32] {
        let start = k * self.ksize;
        &self.weights[start..start + self.ksize]
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }
}

fn check_odd_size(ksize: usize) -> Result<()> {
    if ksize % 2 == 0 {
        return Err(ConvError::invalid(format!(
            "kernel size must be odd and >= 1, got {ksize}"
        )));
    }
    Ok(())
}
