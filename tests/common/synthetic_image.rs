use stencil_conv::image::GrayImageU8;

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard_u8(width: usize, height: usize, cell: usize) -> GrayImageU8 {
    assert!(cell > 0, "cell size must be positive");

    GrayImageU8::from_fn(width, height, |x, y| {
        let sum = x / cell + y / cell;
        if sum & 1 == 0 {
            32u8
        } else {
            220u8
        }
    })
}

/// Deterministic pseudo-random noise covering the full 8-bit range.
pub fn noise_u8(width: usize, height: usize, seed: u32) -> GrayImageU8 {
    GrayImageU8::from_fn(width, height, |x, y| {
        let mut v = (x as u32)
            .wrapping_mul(0x9E37_79B1)
            .wrapping_add((y as u32).wrapping_mul(0x85EB_CA77))
            .wrapping_add(seed);
        v ^= v >> 15;
        v = v.wrapping_mul(0x2C1B_3C6D);
        v ^= v >> 12;
        (v >> 24) as u8
    })
}

/// Smooth diagonal ramp, `x + y` scaled into `[0, 255]`.
pub fn ramp_u8(width: usize, height: usize) -> GrayImageU8 {
    let span = (width + height).saturating_sub(2).max(1);
    GrayImageU8::from_fn(width, height, |x, y| ((x + y) * 255 / span) as u8)
}
