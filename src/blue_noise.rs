//! Fixed 64x64 blue-noise texture and the perturbation built on it.
//!
//! Values are signed bytes indexed as `(x & 63) | (y & 63) << 6`. Path
//! positions index the table directly with `pos & 4095`.

use rgb::RGBA8;

use crate::blue_noise_matrix::BLUE_NOISE_64;

pub const SIZE: usize = 64;
pub const LEN: usize = SIZE * SIZE;

/// 64x64 threshold texture, values -128..=127, each level used 16 times.
pub static BLUE_NOISE: [i8; LEN] = BLUE_NOISE_64;

#[inline]
pub fn at(pos: usize) -> i8 {
    BLUE_NOISE[pos & (LEN - 1)]
}

#[inline]
pub fn at_xy(x: usize, y: usize) -> i8 {
    BLUE_NOISE[(x & (SIZE - 1)) | (y & (SIZE - 1)) << 6]
}

/// Push `pixel` away from (or toward) `quantized` by a blue-noise modulated
/// fraction of their difference. A checkerboard bias scaled by `strength`
/// keeps neighbouring pixels from taking the same decision.
pub fn diffuse(pixel: RGBA8, quantized: RGBA8, weight: f32, strength: f32, x: usize, y: usize) -> RGBA8 {
    let mut adj = (at_xy(x, y) as f32 + 0.5) / 127.5;
    adj += (((x + y) & 1) as f32 - 0.5) * strength / 8.0;
    adj *= weight;

    let shift = |p: u8, q: u8| -> u8 {
        let v = p as f32 + adj * (p as f32 - q as f32);
        v.clamp(0.0, 255.0) as u8
    };

    RGBA8 {
        r: shift(pixel.r, quantized.r),
        g: shift(pixel.g, quantized.g),
        b: shift(pixel.b, quantized.b),
        a: shift(pixel.a, quantized.a),
    }
}
