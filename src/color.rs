//! CIELAB conversion and perceptual color differences.
//!
//! Colors travel through the crate as packed `0xAARRGGBB` words; [`Lab`]
//! carries L*a*b* under the D65 white point plus the untouched alpha byte.
//! The CIEDE2000 difference is exposed both whole ([`ciede2000_sq`]) and as
//! its individual terms so that nearest-color searches can bail out early
//! once a partial sum already exceeds the best candidate.

use core::f64::consts::PI;

use rgb::RGBA8;

/// CIE epsilon (216/24389 rounded as in the CIE publication).
const EPSILON: f64 = 0.008856;
/// CIE kappa (24389/27 rounded).
const KAPPA: f64 = 903.3;

/// D65 reference white, Y normalised to 1.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// 25^7, shared by the G correction and the rotation term.
const POW25_7: f64 = 6_103_515_625.0;

/// L*a*b* coordinates with a pass-through alpha channel (0..=255).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Lab {
    pub const fn new(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { l, a, b, alpha }
    }

    /// Plain squared Euclidean distance over L*, a*, b* (CIE76).
    pub fn distance_sq(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

// --- packed ARGB helpers ---

/// BT.601 RGB -> YUV rows, used wherever a distance blends in luma/chroma.
pub(crate) const YUV: [[f64; 3]; 3] = [
    [0.299, 0.587, 0.114],
    [-0.14713, -0.28886, 0.436],
    [0.615, -0.51499, -0.10001],
];

#[inline]
pub fn unpack_argb(argb: u32) -> RGBA8 {
    RGBA8 {
        r: (argb >> 16) as u8,
        g: (argb >> 8) as u8,
        b: argb as u8,
        a: (argb >> 24) as u8,
    }
}

#[inline]
pub fn pack_argb(c: RGBA8) -> u32 {
    (c.a as u32) << 24 | (c.r as u32) << 16 | (c.g as u32) << 8 | c.b as u32
}

#[inline]
pub(crate) fn alpha_of(argb: u32) -> u8 {
    (argb >> 24) as u8
}

#[inline]
pub(crate) fn sqr(v: f64) -> f64 {
    v * v
}

// --- sRGB transfer function ---

#[inline]
fn srgb_to_linear(c: u8) -> f64 {
    let v = c as f64 / 255.0;
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

#[inline]
fn linear_to_srgb(v: f64) -> f64 {
    if v > 0.003_130_8 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    }
}

#[inline]
fn clamp_byte(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

// --- Lab pivot ---

#[inline]
fn pivot(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn unpivot(f: f64) -> f64 {
    let f3 = f * f * f;
    if f3 > EPSILON {
        f3
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

/// Convert an sRGB color to L*a*b*. Alpha is carried over unchanged.
#[allow(clippy::excessive_precision)]
pub fn to_lab(c: RGBA8) -> Lab {
    let r = srgb_to_linear(c.r);
    let g = srgb_to_linear(c.g);
    let b = srgb_to_linear(c.b);

    let x = (0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b) / WHITE_X;
    let y = (0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b) / WHITE_Y;
    let z = (0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b) / WHITE_Z;

    let fx = pivot(x);
    let fy = pivot(y);
    let fz = pivot(z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
        alpha: c.a as f64,
    }
}

/// Inverse of [`to_lab`], clamping every channel to a byte.
#[allow(clippy::excessive_precision)]
pub fn from_lab(lab: Lab) -> RGBA8 {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = fy + lab.a / 500.0;
    let fz = fy - lab.b / 200.0;

    let x = unpivot(fx) * WHITE_X;
    let y = unpivot(fy) * WHITE_Y;
    let z = unpivot(fz) * WHITE_Z;

    let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
    let g = -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z;
    let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;

    RGBA8 {
        r: clamp_byte(linear_to_srgb(r) * 255.0),
        g: clamp_byte(linear_to_srgb(g) * 255.0),
        b: clamp_byte(linear_to_srgb(b) * 255.0),
        a: clamp_byte(lab.alpha),
    }
}

// --- CIEDE2000 (Sharma, Wu, Dalal 2005), kL = kC = kH = 1 ---

/// Chroma part of CIEDE2000 plus the intermediates the hue term reuses.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ChromaTerm {
    /// ΔC' / S_C
    pub delta: f64,
    a1_prime: f64,
    a2_prime: f64,
    c1_prime: f64,
    c2_prime: f64,
}

/// Hue part of CIEDE2000 plus the averages the rotation term needs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HueTerm {
    /// ΔH' / S_H
    pub delta: f64,
    c_bar_prime: f64,
    h_bar_prime: f64,
}

#[inline]
fn rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// ΔL' / S_L
pub(crate) fn lightness_term(lab1: &Lab, lab2: &Lab) -> f64 {
    let delta_l = lab2.l - lab1.l;
    let l_bar_offset = sqr((lab1.l + lab2.l) / 2.0 - 50.0);
    let s_l = 1.0 + 0.015 * l_bar_offset / (20.0 + l_bar_offset).sqrt();
    delta_l / s_l
}

pub(crate) fn chroma_term(lab1: &Lab, lab2: &Lab) -> ChromaTerm {
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let c_bar7 = ((c1 + c2) / 2.0).powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1_prime = (1.0 + g) * lab1.a;
    let a2_prime = (1.0 + g) * lab2.a;
    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);

    let s_c = 1.0 + 0.045 * (c1_prime + c2_prime) / 2.0;
    ChromaTerm {
        delta: (c2_prime - c1_prime) / s_c,
        a1_prime,
        a2_prime,
        c1_prime,
        c2_prime,
    }
}

/// Hue angle in degrees within [0, 360). Zero chroma maps to 0 instead of
/// asking atan2 for an undefined angle.
#[inline]
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    if b == 0.0 && a_prime == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

pub(crate) fn hue_term(lab1: &Lab, lab2: &Lab, chroma: &ChromaTerm) -> HueTerm {
    let h1 = hue_angle(lab1.b, chroma.a1_prime);
    let h2 = hue_angle(lab2.b, chroma.a2_prime);
    let c_product = chroma.c1_prime * chroma.c2_prime;

    let delta_h = if c_product == 0.0 {
        0.0
    } else {
        let d = h2 - h1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    let delta_big_h = 2.0 * c_product.sqrt() * rad(delta_h / 2.0).sin();

    let h_bar = if c_product == 0.0 {
        h1 + h2
    } else if (h1 - h2).abs() <= 180.0 {
        (h1 + h2) / 2.0
    } else if h1 + h2 < 360.0 {
        (h1 + h2 + 360.0) / 2.0
    } else {
        (h1 + h2 - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * rad(h_bar - 30.0).cos()
        + 0.24 * rad(2.0 * h_bar).cos()
        + 0.32 * rad(3.0 * h_bar + 6.0).cos()
        - 0.20 * rad(4.0 * h_bar - 63.0).cos();

    let c_bar_prime = (chroma.c1_prime + chroma.c2_prime) / 2.0;
    let s_h = 1.0 + 0.015 * c_bar_prime * t;
    HueTerm {
        delta: delta_big_h / s_h,
        c_bar_prime,
        h_bar_prime: h_bar,
    }
}

/// R_T · (ΔC'/S_C) · (ΔH'/S_H). Not squared; may be negative.
pub(crate) fn rotation_term(hue: &HueTerm, chroma_delta: f64) -> f64 {
    let delta_theta = 30.0 * (-sqr((hue.h_bar_prime - 275.0) / 25.0)).exp();
    let c7 = hue.c_bar_prime.powi(7);
    let r_c = 2.0 * (c7 / (c7 + POW25_7)).sqrt();
    let r_t = -r_c * rad(2.0 * delta_theta).sin();
    r_t * chroma_delta * hue.delta
}

/// Squared CIEDE2000 difference.
pub fn ciede2000_sq(lab1: &Lab, lab2: &Lab) -> f64 {
    let dl = lightness_term(lab1, lab2);
    let chroma = chroma_term(lab1, lab2);
    let hue = hue_term(lab1, lab2, &chroma);
    sqr(dl) + sqr(chroma.delta) + sqr(hue.delta) + rotation_term(&hue, chroma.delta)
}

/// CIEDE2000 difference (ΔE00).
pub fn ciede2000(lab1: &Lab, lab2: &Lab) -> f64 {
    ciede2000_sq(lab1, lab2).max(0.0).sqrt()
}

// --- cheap per-pixel helpers used by the ditherer ---

/// Relative luminance of an sRGB color, scaled to 0..=100.
fn luminance(c: RGBA8) -> f64 {
    (0.212_672_9 * srgb_to_linear(c.r)
        + 0.715_152_2 * srgb_to_linear(c.g)
        + 0.072_175_0 * srgb_to_linear(c.b))
        * 100.0
}

/// Absolute luminance difference between two colors (0..=100).
pub fn y_diff(c1: RGBA8, c2: RGBA8) -> f64 {
    (luminance(c1) - luminance(c2)).abs()
}

/// Absolute difference of the BT.601 U chroma component, in byte units.
pub fn u_diff(c1: RGBA8, c2: RGBA8) -> f64 {
    let u = |c: RGBA8| -0.147_13 * c.r as f64 - 0.288_86 * c.g as f64 + 0.436 * c.b as f64;
    (u(c1) - u(c2)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> RGBA8 {
        RGBA8 { r, g, b, a }
    }

    #[test]
    fn argb_pack_roundtrip() {
        let c = rgba(0x12, 0x34, 0x56, 0x78);
        assert_eq!(pack_argb(c), 0x7812_3456);
        assert_eq!(unpack_argb(0x7812_3456), c);
    }

    #[test]
    fn black_and_white_anchor_points() {
        let black = to_lab(rgba(0, 0, 0, 255));
        assert!(black.l.abs() < 1e-9);
        let white = to_lab(rgba(255, 255, 255, 255));
        assert!((white.l - 100.0).abs() < 0.01, "L={}", white.l);
        assert!(white.a.abs() < 0.01);
        assert!(white.b.abs() < 0.01);
    }

    #[test]
    fn alpha_passes_through() {
        let lab = to_lab(rgba(10, 20, 30, 77));
        assert_eq!(lab.alpha, 77.0);
        assert_eq!(from_lab(lab).a, 77);
    }

    #[test]
    fn lab_roundtrip_within_one() {
        for r in (0..=255u32).step_by(15) {
            for g in (0..=255u32).step_by(17) {
                for b in (0..=255u32).step_by(5) {
                    let c = rgba(r as u8, g as u8, b as u8, 255);
                    let back = from_lab(to_lab(c));
                    assert!(
                        (back.r as i16 - c.r as i16).abs() <= 1
                            && (back.g as i16 - c.g as i16).abs() <= 1
                            && (back.b as i16 - c.b as i16).abs() <= 1,
                        "{c:?} came back as {back:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn ciede2000_identity_is_zero() {
        for c in [rgba(0, 0, 0, 255), rgba(200, 30, 90, 255), rgba(7, 250, 128, 40)] {
            let lab = to_lab(c);
            assert_eq!(ciede2000_sq(&lab, &lab), 0.0);
        }
    }

    #[test]
    fn ciede2000_sharma_reference_pairs() {
        // (L1, a1, b1, L2, a2, b2, ΔE00) from Sharma, Wu & Dalal.
        let pairs = [
            (50.0, 2.6772, -79.7751, 50.0, 0.0, -82.7485, 2.0425),
            (50.0, 3.1571, -77.2803, 50.0, 0.0, -82.7485, 2.8615),
            (50.0, -1.3802, -84.2814, 50.0, 0.0, -82.7485, 1.0000),
            (50.0, 2.5, 0.0, 50.0, 0.0, -2.5, 4.3065),
            (50.0, 2.5, 0.0, 73.0, 25.0, -18.0, 27.1492),
            (60.2574, -34.0099, 36.2677, 60.4626, -34.1751, 39.4387, 1.2644),
            (22.7233, 20.0904, -46.6940, 23.0331, 14.9730, -42.5619, 2.0373),
        ];
        for (l1, a1, b1, l2, a2, b2, expected) in pairs {
            let lab1 = Lab::new(l1, a1, b1, 255.0);
            let lab2 = Lab::new(l2, a2, b2, 255.0);
            let de = ciede2000(&lab1, &lab2);
            assert!(
                (de - expected).abs() < 1e-3,
                "ΔE00 {de} != {expected} for ({l1},{a1},{b1}) vs ({l2},{a2},{b2})"
            );
        }
    }

    #[test]
    fn ciede2000_is_symmetric() {
        let a = to_lab(rgba(255, 0, 0, 255));
        let b = to_lab(rgba(0, 0, 255, 255));
        assert!((ciede2000_sq(&a, &b) - ciede2000_sq(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn zero_chroma_pair_is_finite() {
        let grey1 = to_lab(rgba(90, 90, 90, 255));
        let grey2 = to_lab(rgba(91, 91, 91, 255));
        let d = ciede2000_sq(&grey1, &grey2);
        assert!(d.is_finite() && d >= 0.0);
    }

    #[test]
    fn luminance_helpers() {
        let black = rgba(0, 0, 0, 255);
        let white = rgba(255, 255, 255, 255);
        assert!((y_diff(black, white) - 100.0).abs() < 0.01);
        assert_eq!(y_diff(white, white), 0.0);
        assert!(u_diff(rgba(0, 0, 255, 255), rgba(0, 0, 0, 255)) > 100.0);
    }
}
