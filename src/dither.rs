//! Error diffusion along a generalized Hilbert curve.
//!
//! Instead of pushing error onto fixed raster neighbours, each pixel
//! receives a weighted sum of the residuals left by the last few pixels on
//! the curve. Weights grow geometrically toward the most recent pixel.
//! Large residuals are compressed before they are queued, using the
//! blue-noise table to decide where to keep edges crisp.

use std::collections::VecDeque;
use std::f64::consts::E;

use rgb::RGBA8;

use crate::blue_noise;
use crate::color::{alpha_of, pack_argb, u_diff, unpack_argb, y_diff};
use crate::gilbert;
use crate::remap::ColorIndexer;

/// Curve positions per luminance-sorted block. Also sets the ratio between
/// the largest and smallest queue weight.
const BLOCK_SIZE: usize = 343;

/// Dither settings that depend on the image rather than the pixel.
#[derive(Debug, Clone, Copy)]
pub struct DitherParams {
    /// `target / bins` from the reduction, capped at 0.9.
    pub weight: f64,
    /// The image has any transparent or semi-transparent pixel.
    pub has_alpha: bool,
    /// Pixels at or below this alpha bypass diffusion.
    pub alpha_threshold: u8,
    /// `false` assigns every pixel independently in raster order.
    pub dither: bool,
}

/// Strength settings for one ditherer run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DitherTuning {
    /// Queue length, 9 to 25.
    pub dither_max: usize,
    /// Residuals at or above this magnitude get compressed.
    pub error_bound: f32,
    /// Blue-noise values above this mark a position as an edge.
    pub threshold: i8,
    pub beta: f32,
    pub margin: f64,
}

impl DitherTuning {
    pub(crate) fn new(palette_len: usize, weight: f64, has_alpha: bool, has_saliency: bool) -> Self {
        let n = palette_len as f64;

        let mut beta = if n > 4.0 { 0.6 - 0.00625 * n } else { 1.0 };
        if n > 4.0 {
            let boundary = 0.005 - 0.0000625 * n;
            beta = if weight > boundary {
                0.25
            } else {
                (beta + n * weight).min(1.5)
            };
            if n > 16.0 && n <= 32.0 && weight < 0.003 {
                beta += 0.075;
            } else if n > 32.0 && n < 256.0 {
                beta += 0.1;
            }
            if (n >= 64.0 && weight > 0.012 && weight < 0.0125) || (weight > 0.025 && weight < 0.03) {
                beta *= 2.0;
            } else if n > 32.0 && n < 64.0 && weight < 0.015 {
                beta = 0.55;
            }
        } else {
            beta *= 0.95;
        }
        if n > 64.0 || (n > 4.0 && weight > 0.02) {
            beta *= 0.4;
        }
        if n > 64.0 && weight < 0.02 {
            beta = 0.2;
        }

        let dither_max: usize = if weight < 0.015 {
            if weight > 0.0025 {
                25
            } else {
                16
            }
        } else {
            9
        };
        let edge = if has_alpha { 1.0 } else { weight.exp() + 0.25 };
        let deviation = if !has_alpha && weight > 0.002 { 0.25 } else { 1.0 };
        let dm = dither_max as f64;
        let mut bound = if has_alpha || dither_max > 9 {
            let v = dm.sqrt() + edge * deviation;
            v * v
        } else {
            dm * if has_saliency { 2.0 } else { E }
        };
        let density = if n > 16.0 { 3200.0 } else { 1500.0 };
        if n / weight > 5000.0 && (weight > 0.045 || (weight > 0.01 && n < 64.0)) {
            bound = (5.0 + edge) * (5.0 + edge);
        } else if weight < 0.03 && n / weight < density && n >= 16.0 && n < 256.0 {
            bound = (5.0 + edge) * (5.0 + edge);
        }

        let margin = if weight < 0.0025 {
            12.0
        } else if weight < 0.004 {
            8.0
        } else {
            6.0
        };

        Self {
            dither_max,
            error_bound: bound.clamp(1.0, 255.0) as f32,
            threshold: if dither_max > 9 { -112 } else { -64 },
            beta: beta as f32,
            margin,
        }
    }
}

/// Queue weights for `size` residuals, oldest first, summing to 1. The
/// newest residual weighs `BLOCK_SIZE + 1` times the oldest.
pub(crate) fn queue_weights(size: usize) -> Vec<f32> {
    if size <= 1 {
        return vec![1.0; size];
    }
    let ratio = ((BLOCK_SIZE + 1) as f32).powf(1.0 / (size as f32 - 1.0));
    let mut weights = vec![0.0f32; size];
    let mut w = 1.0f32;
    let mut sum = 0.0f32;
    for c in 0..size {
        weights[size - c - 1] = 1.0 / w;
        sum += 1.0 / w;
        w *= ratio;
    }
    let mut total = 0.0;
    for v in weights.iter_mut() {
        *v /= sum;
        total += *v;
    }
    weights[0] += 1.0 - total;
    weights
}

/// Assign a palette index to every pixel.
///
/// With dithering off each pixel goes straight through
/// [`ColorIndexer::dither_classify`] in raster order. Otherwise pixels are
/// visited along the curve and perturbed by the queued residuals first.
/// `saliency`, when given, holds one value in `0..=1` per pixel.
pub fn remap_image<I: ColorIndexer>(
    pixels: &[u32],
    width: usize,
    height: usize,
    indexer: &mut I,
    saliency: Option<&[f32]>,
    params: &DitherParams,
) -> Vec<u16> {
    debug_assert_eq!(pixels.len(), width * height);
    if !params.dither {
        return pixels
            .iter()
            .enumerate()
            .map(|(i, &argb)| indexer.dither_classify(argb, i))
            .collect();
    }
    CurveDitherer::new(pixels, width, height, indexer, saliency, params).run()
}

struct CurveDitherer<'a, I: ColorIndexer> {
    pixels: &'a [u32],
    width: usize,
    height: usize,
    indexer: &'a mut I,
    saliency: Option<&'a [f32]>,
    tuning: DitherTuning,
    alpha_threshold: u8,
    /// Luminance-sorted blocks; reverses the weight order.
    sorted: bool,
    queue: VecDeque<[f32; 4]>,
    weights: Vec<f32>,
    out: Vec<u16>,
}

impl<'a, I: ColorIndexer> CurveDitherer<'a, I> {
    fn new(
        pixels: &'a [u32],
        width: usize,
        height: usize,
        indexer: &'a mut I,
        saliency: Option<&'a [f32]>,
        params: &DitherParams,
    ) -> Self {
        let len = indexer.palette().len();
        let tuning = DitherTuning::new(len, params.weight, params.has_alpha, saliency.is_some());
        let sorted = len >= 128 && !params.has_alpha;
        tracing::trace!(?tuning, sorted, "curve dither setup");
        Self {
            pixels,
            width,
            height,
            indexer,
            saliency,
            tuning,
            alpha_threshold: params.alpha_threshold,
            sorted,
            queue: VecDeque::with_capacity(tuning.dither_max),
            weights: Vec::new(),
            out: vec![0; pixels.len()],
        }
    }

    fn run(mut self) -> Vec<u16> {
        let (width, height) = (self.width, self.height);
        if !self.sorted {
            gilbert::traverse(width, height, |x, y| self.dither_pixel(x, y));
            return self.out;
        }

        let path = gilbert::order(width, height);
        for block in path.chunks(BLOCK_SIZE) {
            let mut keyed: Vec<(f64, usize)> = block
                .iter()
                .map(|&p| {
                    let argb = self.pixels[p];
                    let k = self.indexer.classify(argb);
                    let nearest = self.indexer.palette().color(k);
                    (y_diff(unpack_argb(argb), nearest), p)
                })
                .collect();
            keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
            for (_, p) in keyed {
                self.dither_pixel(p % width, p / width);
            }
        }
        self.out
    }

    fn dither_pixel(&mut self, x: usize, y: usize) {
        let bidx = y * self.width + x;
        let argb = self.pixels[bidx];
        if alpha_of(argb) <= self.alpha_threshold {
            self.out[bidx] = self.indexer.classify(argb);
            return;
        }

        let pixel = unpack_argb(argb);
        let mut acc = [pixel.r as f32, pixel.g as f32, pixel.b as f32, pixel.a as f32];
        let n = self.queue.len();
        let mut max_err = (self.tuning.dither_max - 1) as f32;
        for (k, residual) in self.queue.iter().enumerate() {
            let w = if self.sorted {
                self.weights[n - 1 - k]
            } else {
                self.weights[k]
            };
            for j in 0..4 {
                acc[j] += residual[j] * w;
                max_err = max_err.max(residual[j].abs());
            }
        }
        let channel = |v: f32| v.round().clamp(0.0, 255.0) as u8;
        let perturbed = RGBA8 {
            r: channel(acc[0]),
            g: channel(acc[1]),
            b: channel(acc[2]),
            a: channel(acc[3]),
        };

        let mut candidate = perturbed;
        if let Some(saliency) = self.saliency {
            if !self.sorted && self.indexer.palette().len() <= 32 {
                candidate = self.rescue(pixel, perturbed, saliency[bidx], x, y);
            }
        }

        let mut idx = self.indexer.dither_classify(pack_argb(candidate), bidx);
        let mut chosen = self.indexer.palette().color(idx);
        let mut residual = diff(perturbed, chosen);

        let bound = self.tuning.error_bound;
        if self.indexer.palette().len() > 2 {
            let diffuse = blue_noise::at(bidx) > self.tuning.threshold;
            let ydiff = (y_diff(pixel, chosen) / 100.0) as f32;
            let illusion = !diffuse
                && blue_noise::at((ydiff * blue_noise::LEN as f32) as usize) > self.tuning.threshold;
            for e in residual.iter_mut() {
                if e.abs() < bound {
                    continue;
                }
                *e = if diffuse {
                    (*e / max_err * 20.0).tanh() * (bound - 1.0)
                } else if illusion {
                    *e / max_err * ydiff * (bound - 1.0)
                } else {
                    *e / (1.0 + bound.sqrt())
                };
            }
        }

        if self.sorted && residual.iter().any(|e| e.abs() >= self.tuning.dither_max as f32) {
            idx = self.indexer.classify(argb);
            chosen = self.indexer.palette().color(idx);
            residual = diff(pixel, chosen).map(|e| e / (1.0 + bound.sqrt()));
        }

        self.out[bidx] = idx;
        self.push_residual(residual);
    }

    /// Pull the perturbed color back toward the source where the eye would
    /// notice the shift, scaled by per-pixel saliency.
    fn rescue(&mut self, pixel: RGBA8, perturbed: RGBA8, saliency: f32, x: usize, y: usize) -> RGBA8 {
        const STRENGTH: f32 = 1.0 / 3.0;
        let n = self.indexer.palette().len();
        let k = self.indexer.classify(pack_argb(pixel));
        let reference = self.indexer.palette().color(k);
        let beta = self.tuning.beta;
        let margin = self.tuning.margin;
        let accepted = (n as f64 - margin).max(2.0);
        let s = saliency.max(0.05);

        let mut c2 = perturbed;
        if n <= 4 && s > 0.2 && s < 0.25 {
            c2 = blue_noise::diffuse(pixel, reference, beta * 2.0 / s, STRENGTH, x, y);
        } else if n <= 4 || y_diff(pixel, c2) < 2.0 * accepted {
            c2 = blue_noise::diffuse(pixel, reference, beta * 0.5 / s, STRENGTH, x, y);
            if u_diff(pixel, c2) > margin * accepted {
                c2 = blue_noise::diffuse(pixel, reference, beta / s, STRENGTH, x, y);
            }
        }

        if n > 4
            && (y_diff(pixel, c2) > beta as f64 * accepted || u_diff(pixel, c2) > accepted)
        {
            c2 = if beta < 0.3 && s < beta {
                blue_noise::diffuse(c2, reference, beta * 0.4 * s, STRENGTH, x, y)
            } else {
                perturbed
            };
        }

        if self.tuning.dither_max < 16 && s < 0.6 && y_diff(pixel, c2) > margin - 1.0 {
            c2 = perturbed;
        }
        c2
    }

    fn push_residual(&mut self, residual: [f32; 4]) {
        if self.queue.len() >= self.tuning.dither_max {
            self.queue.pop_front();
        }
        self.queue.push_back(residual);
        if self.weights.len() != self.queue.len() {
            self.weights = queue_weights(self.queue.len());
        }
        debug_assert!(self.queue.len() <= self.tuning.dither_max);
    }
}

fn diff(a: RGBA8, b: RGBA8) -> [f32; 4] {
    [
        a.r as f32 - b.r as f32,
        a.g as f32 - b.g as f32,
        a.b as f32 - b.b as f32,
        a.a as f32 - b.a as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    /// Plain RGB nearest search, enough to drive the ditherer without a session.
    struct MockIndexer {
        palette: Palette,
        calls: usize,
    }

    impl MockIndexer {
        fn new(colors: Vec<u32>) -> Self {
            Self {
                palette: Palette::from_argb(colors, false),
                calls: 0,
            }
        }
    }

    impl ColorIndexer for MockIndexer {
        fn palette(&self) -> &Palette {
            &self.palette
        }

        fn classify(&mut self, argb: u32) -> u16 {
            let c = unpack_argb(argb);
            let dist = |p: RGBA8| {
                let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2);
                d(c.r, p.r) + d(c.g, p.g) + d(c.b, p.b) + d(c.a, p.a)
            };
            (0..self.palette.len() as u16)
                .min_by_key(|&k| dist(self.palette.color(k)))
                .unwrap_or(0)
        }

        fn dither_classify(&mut self, argb: u32, _pos: usize) -> u16 {
            self.calls += 1;
            self.classify(argb)
        }
    }

    fn params(weight: f64, dither: bool) -> DitherParams {
        DitherParams {
            weight,
            has_alpha: false,
            alpha_threshold: 0,
            dither,
        }
    }

    fn grey(v: u32) -> u32 {
        0xFF00_0000 | v << 16 | v << 8 | v
    }

    #[test]
    fn weights_sum_to_one_and_grow() {
        for n in [1usize, 2, 5, 9, 16, 25] {
            let w = queue_weights(n);
            assert_eq!(w.len(), n);
            let sum: f32 = w.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "n={n} sum={sum}");
            for pair in w.windows(2).skip(1) {
                assert!(pair[0] < pair[1], "n={n}: {w:?}");
            }
        }
        let w = queue_weights(16);
        let spread = w[15] / w[1];
        assert!(spread > 100.0, "newest should dominate: {spread}");
    }

    #[test]
    fn tuning_ranges() {
        for len in [2usize, 4, 16, 32, 64, 128, 256] {
            for weight in [0.0005, 0.002, 0.01, 0.02, 0.05, 0.5, 0.9] {
                for alpha in [false, true] {
                    let t = DitherTuning::new(len, weight, alpha, len <= 32);
                    assert!([9, 16, 25].contains(&t.dither_max));
                    assert!(t.error_bound >= 1.0 && t.error_bound <= 255.0);
                    assert!(t.beta > 0.0, "len={len} w={weight} beta={}", t.beta);
                }
            }
        }
        assert_eq!(DitherTuning::new(16, 0.001, false, false).dither_max, 16);
        assert_eq!(DitherTuning::new(16, 0.005, false, false).dither_max, 25);
        assert_eq!(DitherTuning::new(16, 0.5, false, false).threshold, -64);
    }

    #[test]
    fn without_dither_every_pixel_is_classified_once() {
        let pixels: Vec<u32> = (0..48).map(|i| grey(i * 5)).collect();
        let mut idx = MockIndexer::new(vec![grey(0), grey(128), grey(255)]);
        let out = remap_image(&pixels, 8, 6, &mut idx, None, &params(0.1, false));
        assert_eq!(idx.calls, 48);
        assert_eq!(out[0], 0);
        assert_eq!(out[47], 2);
    }

    #[test]
    fn palette_colors_stay_exact() {
        let colors = vec![grey(0), grey(85), grey(170), grey(255)];
        let pixels: Vec<u32> = (0..64).map(|i| colors[(i * 7 + i / 8) % 4]).collect();
        let mut idx = MockIndexer::new(colors.clone());
        let out = remap_image(&pixels, 8, 8, &mut idx, None, &params(0.5, true));
        for (i, &k) in out.iter().enumerate() {
            assert_eq!(colors[k as usize], pixels[i], "pixel {i}");
        }
    }

    #[test]
    fn mid_grey_dithers_to_a_mix() {
        let pixels = vec![grey(128); 32 * 32];
        let mut idx = MockIndexer::new(vec![grey(0), grey(255)]);
        let out = remap_image(&pixels, 32, 32, &mut idx, None, &params(0.5, true));
        let whites = out.iter().filter(|&&k| k == 1).count();
        let share = whites as f64 / out.len() as f64;
        assert!((0.3..0.7).contains(&share), "white share {share}");
    }

    #[test]
    fn dithered_mean_tracks_source() {
        let (w, h) = (40, 40);
        let pixels: Vec<u32> = (0..w * h).map(|i| grey((i % w * 255 / (w - 1)) as u32)).collect();
        let colors = vec![grey(0), grey(64), grey(128), grey(192), grey(255)];
        let mut idx = MockIndexer::new(colors.clone());
        let out = remap_image(&pixels, w, h, &mut idx, None, &params(0.05, true));
        let src: f64 = pixels.iter().map(|&p| (p & 0xFF) as f64).sum::<f64>() / pixels.len() as f64;
        let dst: f64 = out.iter().map(|&k| (colors[k as usize] & 0xFF) as f64).sum::<f64>()
            / out.len() as f64;
        assert!((src - dst).abs() < 10.0, "src mean {src}, dithered mean {dst}");
    }

    #[test]
    fn transparent_pixels_bypass_diffusion() {
        let mut pixels = vec![grey(128); 16];
        pixels[5] = 0x0000_0000;
        let mut idx = MockIndexer::new(vec![0x0000_0000, grey(0), grey(255)]);
        let p = DitherParams {
            weight: 0.5,
            has_alpha: true,
            alpha_threshold: 0,
            dither: true,
        };
        let out = remap_image(&pixels, 4, 4, &mut idx, None, &p);
        assert_eq!(out[5], 0);
        assert!(out.iter().enumerate().all(|(i, &k)| i == 5 || k != 0));
    }

    #[test]
    fn saliency_rescue_runs_on_small_palettes() {
        let pixels: Vec<u32> = (0..256).map(|i| grey(i as u32)).collect();
        let saliency = vec![0.5f32; 256];
        let mut idx = MockIndexer::new(vec![grey(0), grey(60), grey(120), grey(180), grey(255)]);
        let out = remap_image(&pixels, 16, 16, &mut idx, Some(&saliency), &params(0.02, true));
        assert_eq!(out.len(), 256);
        assert_eq!(out[0], 0);
    }
}
