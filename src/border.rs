//! Replicate-border padding.
//!
//! `extend` copies a view into a new buffer grown by `margin` pixels on every
//! side. Each padding cell takes the value of the nearest source pixel, so
//! `out[y][x] == src[clamp(y - m, 0, h - 1)][clamp(x - m, 0, w - 1)]`,
//! corners included. Interior rows are a memcpy of the source row with the
//! first and last pixel repeated `margin` times on either side.
use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};

/// Pad `src` by `margin` pixels on all four sides, replicating edge values.
///
/// `margin == 0` is a plain copy. An empty source has no edge to replicate and
/// is returned as an empty copy.
pub fn extend(src: &ImageU8<'_>, margin: usize) -> GrayImageU8 {
    if src.is_empty() {
        return GrayImageU8::from_view(src);
    }

    let (w, h) = (src.w, src.h);
    let (ew, eh) = (w + 2 * margin, h + 2 * margin);
    let mut out = GrayImageU8::zeros(ew, eh);

    for (ey, dst) in out.rows_mut().enumerate() {
        let sy = ey.saturating_sub(margin).min(h - 1);
        let row = src.row(sy);
        let (left, rest) = dst.split_at_mut(margin);
        let (middle, right) = rest.split_at_mut(w);
        left.fill(row[0]);
        middle.copy_from_slice(row);
        right.fill(row[w - 1]);
    }

    log::trace!("extended {w}x{h} by {margin} -> {ew}x{eh}");
    out
}
