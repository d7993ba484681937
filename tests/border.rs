mod common;

use common::synthetic_image::{noise_u8, ramp_u8};
use stencil_conv::extend;
use stencil_conv::image::{GrayImageU8, ImageView};

fn assert_replicated(src: &GrayImageU8, margin: usize) {
    let ext = extend(&src.as_view(), margin);
    let (w, h) = (src.width(), src.height());
    assert_eq!(ext.width(), w + 2 * margin);
    assert_eq!(ext.height(), h + 2 * margin);
    for ey in 0..ext.height() {
        let sy = (ey as isize - margin as isize).clamp(0, h as isize - 1) as usize;
        for ex in 0..ext.width() {
            let sx = (ex as isize - margin as isize).clamp(0, w as isize - 1) as usize;
            assert_eq!(
                ext.get(ex, ey),
                src.get(sx, sy),
                "{w}x{h} margin {margin} at ({ex}, {ey})"
            );
        }
    }
}

#[test]
fn padding_matches_clamped_source_for_many_shapes() {
    for (w, h) in [(1, 1), (1, 7), (7, 1), (5, 5), (13, 8), (32, 3)] {
        let src = noise_u8(w, h, (w * 31 + h) as u32);
        for margin in 0..=4 {
            assert_replicated(&src, margin);
        }
    }
}

#[test]
fn interior_is_an_exact_copy() {
    let src = ramp_u8(20, 11);
    let margin = 3;
    let ext = extend(&src.as_view(), margin);
    for y in 0..src.height() {
        assert_eq!(&ext.row(y + margin)[margin..margin + src.width()], src.row(y));
    }
}

#[test]
fn source_is_left_untouched() {
    let src = noise_u8(9, 6, 7);
    let before = src.clone();
    let _ = extend(&src.as_view(), 2);
    assert_eq!(src, before);
}
