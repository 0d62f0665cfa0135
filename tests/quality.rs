use pnnquant::{ciede2000, to_lab, Metric, QuantizeConfig};
use rgb::RGBA8;

fn rgba(c: u32) -> RGBA8 {
    RGBA8 {
        r: (c >> 16) as u8,
        g: (c >> 8) as u8,
        b: c as u8,
        a: (c >> 24) as u8,
    }
}

/// Mean CIEDE2000 distance between original pixels and their palette entries.
fn mean_delta_e(pixels: &[u32], result: &pnnquant::QuantizeResult) -> f64 {
    let palette = result.palette_argb();
    let mut total = 0.0;
    for (&argb, &idx) in pixels.iter().zip(result.indices()) {
        let original = to_lab(rgba(argb));
        let quantized = to_lab(rgba(palette[idx as usize]));
        total += ciede2000(&original, &quantized);
    }
    total / pixels.len() as f64
}

fn gradient_image(width: usize, height: usize) -> Vec<u32> {
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u32;
            let g = (y * 255 / height.max(1)) as u32;
            let b = ((x + y) * 128 / (width + height).max(1)) as u32;
            pixels.push(0xFF00_0000 | r << 16 | g << 8 | b);
        }
    }
    pixels
}

fn noisy_image(width: usize, height: usize) -> Vec<u32> {
    let mut pixels = Vec::with_capacity(width * height);
    for i in 0..(width * height) {
        let h = ((i as u32).wrapping_mul(2654435761) >> 13) as u8;
        let (r, g, b) = (h as u32, h.wrapping_add(50) as u32, h.wrapping_add(100) as u32);
        pixels.push(0xFF00_0000 | r << 16 | g << 8 | b);
    }
    pixels
}

/// Gradient with a soft alpha ramp down the left edge.
fn faded_image(width: usize, height: usize) -> Vec<u32> {
    let mut pixels = gradient_image(width, height);
    for y in 0..height {
        for x in 0..width / 4 {
            let a = (x * 255 / (width / 4)) as u32;
            let p = &mut pixels[y * width + x];
            *p = a << 24 | (*p & 0x00FF_FFFF);
        }
    }
    pixels
}

#[test]
fn more_colors_lower_error() {
    let (w, h) = (48, 48);
    let pixels = gradient_image(w, h);

    let mut last = f64::INFINITY;
    for n in [4u32, 16, 64] {
        let config = QuantizeConfig::new().max_colors(n).dither(false);
        let result = pnnquant::quantize(&pixels, w, h, &config).unwrap();
        let err = mean_delta_e(&pixels, &result);
        assert!(
            err < last,
            "{n} colors should beat the smaller palette: {err:.3} vs {last:.3}"
        );
        last = err;
    }
}

#[test]
fn gradient_produces_reasonable_quality() {
    let (w, h) = (64, 64);
    let pixels = gradient_image(w, h);
    let config = QuantizeConfig::new().max_colors(256).dither(false);
    let result = pnnquant::quantize(&pixels, w, h, &config).unwrap();

    let err = mean_delta_e(&pixels, &result);
    assert!(err < 3.0, "mean delta E too high for a 256 color gradient: {err:.3}");
}

#[test]
fn dithering_preserves_mean_color() {
    let (w, h) = (32, 32);
    let pixels = gradient_image(w, h);
    let config = QuantizeConfig::new().max_colors(8);
    let result = pnnquant::quantize(&pixels, w, h, &config).unwrap();

    let palette = result.palette();
    let mut orig = [0.0f64; 3];
    let mut quant = [0.0f64; 3];
    for (&argb, &idx) in pixels.iter().zip(result.indices()) {
        let o = rgba(argb);
        let q = palette[idx as usize];
        orig[0] += o.r as f64;
        orig[1] += o.g as f64;
        orig[2] += o.b as f64;
        quant[0] += q.r as f64;
        quant[1] += q.g as f64;
        quant[2] += q.b as f64;
    }
    let n = pixels.len() as f64;
    for c in 0..3 {
        let diff = (orig[c] - quant[c]).abs() / n;
        assert!(diff < 12.0, "channel {c} mean drifted by {diff:.2}");
    }
}

#[test]
fn quantization_is_deterministic() {
    let (w, h) = (40, 30);
    let pixels = noisy_image(w, h);
    let config = QuantizeConfig::new().max_colors(16);

    let a = pnnquant::quantize(&pixels, w, h, &config).unwrap();
    let b = pnnquant::quantize(&pixels, w, h, &config).unwrap();
    assert_eq!(a.palette(), b.palette());
    assert_eq!(a.indices(), b.indices());
}

#[test]
fn rgb_metric_is_competitive() {
    let (w, h) = (32, 32);
    let pixels = gradient_image(w, h);
    let lab = QuantizeConfig::new().max_colors(16).dither(false);
    let rgb = lab.clone().metric(Metric::Rgb);

    let lab_err = mean_delta_e(&pixels, &pnnquant::quantize(&pixels, w, h, &lab).unwrap());
    let rgb_err = mean_delta_e(&pixels, &pnnquant::quantize(&pixels, w, h, &rgb).unwrap());
    assert!(lab_err.is_finite() && rgb_err.is_finite());
    assert!(
        rgb_err < lab_err * 3.0 && lab_err < rgb_err * 3.0,
        "metrics diverge: lab {lab_err:.3}, rgb {rgb_err:.3}"
    );
}

#[test]
fn semi_transparent_pixels_keep_their_alpha() {
    let (w, h) = (32, 16);
    let pixels = faded_image(w, h);
    let config = QuantizeConfig::new().max_colors(32).dither(false);
    let result = pnnquant::quantize(&pixels, w, h, &config).unwrap();
    let palette = result.palette();

    assert!(palette.iter().any(|p| p.a > 0 && p.a < 255), "no partial alpha entry");

    let mut total = 0.0;
    for (&argb, &idx) in pixels.iter().zip(result.indices()) {
        total += (rgba(argb).a as f64 - palette[idx as usize].a as f64).abs();
    }
    let mean = total / pixels.len() as f64;
    assert!(mean < 40.0, "mean alpha error too high: {mean:.2}");
}

#[test]
fn optimize_returns_ratios_in_range() {
    let (w, h) = (16, 16);
    let pixels = gradient_image(w, h);
    let config = QuantizeConfig::new().max_colors(8);

    let tuned = pnnquant::optimize(&pixels, w, h, &config).unwrap();
    for r in [tuned.ratio_x, tuned.ratio_y] {
        assert!(r > 0.0 && r <= 1.0, "ratio {r} out of range");
    }
    assert!(tuned.fitness <= 0.0 && tuned.fitness.is_finite());

    let again = pnnquant::optimize(&pixels, w, h, &config).unwrap();
    assert_eq!(tuned, again);
}

#[test]
fn auto_tune_matches_optimized_ratios() {
    let (w, h) = (16, 16);
    let pixels = gradient_image(w, h);
    let tuned = QuantizeConfig::new().max_colors(8).dither(false).auto_tune(true);
    let result = pnnquant::quantize(&pixels, w, h, &tuned).unwrap();
    assert_eq!(result.palette_len(), 8);

    let ratios = pnnquant::optimize(&pixels, w, h, &tuned).unwrap();
    let fixed = tuned.clone().auto_tune(false).ratios(ratios.ratio_x, ratios.ratio_y);
    let same = pnnquant::quantize(&pixels, w, h, &fixed).unwrap();
    assert_eq!(result.indices(), same.indices());
}
