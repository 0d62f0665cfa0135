use crate::session::Session;

/// Floor for visible pixels so dark regions still get some protection.
const BASE: f32 = 0.1;

/// Compute per-pixel saliency from Lab lightness.
///
/// Returns values in [0.1, 1.0] for visible pixels (brighter means more
/// salient) and 0.0 for pixels at or below the alpha threshold.
pub(crate) fn saliency_map(session: &mut Session, pixels: &[u32]) -> Vec<f32> {
    pixels
        .iter()
        .map(|&argb| {
            if session.is_transparent(argb) {
                return 0.0;
            }
            let l = session.lab(argb).l.clamp(0.0, 100.0) as f32;
            BASE + (1.0 - BASE) * l / 100.0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ImageStats;
    use crate::QuantizeConfig;

    fn map(pixels: &[u32]) -> Vec<f32> {
        let stats = ImageStats::scan(pixels, 0);
        let mut session = Session::new(&QuantizeConfig::new().max_colors(16), stats, 16);
        saliency_map(&mut session, pixels)
    }

    #[test]
    fn range_and_order() {
        let s = map(&[0xFF00_0000, 0xFF80_8080, 0xFFFF_FFFF]);
        assert!((s[0] - BASE).abs() < 1e-6);
        assert!(s[0] < s[1] && s[1] < s[2]);
        assert!((s[2] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn transparent_pixels_have_zero_saliency() {
        let s = map(&[0x00FF_FFFF, 0xFFFF_FFFF]);
        assert_eq!(s[0], 0.0);
        assert!(s[1] > 0.9);
    }
}
