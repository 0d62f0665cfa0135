use std::collections::HashMap;

use crate::color::{alpha_of, to_lab, unpack_argb, Lab};
use crate::{ChannelWeights, Metric, QuantizeConfig};

/// Transparency facts gathered in one pass over the source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ImageStats {
    /// First pixel at or below the alpha threshold; every such pixel is
    /// treated as this color.
    pub transparent: Option<u32>,
    /// Any pixel strictly between the threshold and fully opaque.
    pub has_semi: bool,
}

impl ImageStats {
    pub(crate) fn scan(pixels: &[u32], alpha_threshold: u8) -> Self {
        let mut stats = Self::default();
        for &argb in pixels {
            let a = alpha_of(argb);
            if a <= alpha_threshold {
                if stats.transparent.is_none() {
                    stats.transparent = Some(argb);
                }
            } else if a < 255 {
                stats.has_semi = true;
            }
            if stats.has_semi && stats.transparent.is_some() {
                break;
            }
        }
        stats
    }

    pub(crate) fn has_alpha(&self) -> bool {
        self.has_semi || self.transparent.is_some()
    }
}

/// The two best palette candidates for one pixel, as found by the
/// closest-pair search.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClosestPair {
    pub idx: [u16; 2],
    pub err: [f64; 2],
}

/// Everything one quantization run mutates: effective weights and blend
/// ratios plus the per-color memo tables. Built fresh per image (and per
/// fitness evaluation) so nothing leaks between runs.
#[derive(Debug)]
pub(crate) struct Session {
    pub metric: Metric,
    pub weights: ChannelWeights,
    pub weights_fixed: bool,
    pub ratio_x: f64,
    pub ratio_y: f64,
    pub ratio_fixed: bool,
    pub alpha_threshold: u8,
    pub stats: ImageStats,
    labs: HashMap<u32, Lab>,
    pub(crate) nearest: HashMap<u32, u16>,
    pub(crate) closest: HashMap<u32, ClosestPair>,
}

impl Session {
    pub(crate) fn new(config: &QuantizeConfig, stats: ImageStats, max_colors: usize) -> Self {
        let (weights, weights_fixed) = match config.weights {
            Some(w) => (w, true),
            None if max_colors <= 32 => (ChannelWeights::UNIFORM, false),
            None => (ChannelWeights::LUMA, false),
        };
        let (ratio_x, ratio_y, ratio_fixed) = match config.ratios {
            Some((x, y)) => (x, y, true),
            None => (0.5, 0.5, false),
        };
        Self {
            metric: config.metric,
            weights,
            weights_fixed,
            ratio_x,
            ratio_y,
            ratio_fixed,
            alpha_threshold: config.alpha_threshold,
            stats,
            labs: HashMap::new(),
            nearest: HashMap::new(),
            closest: HashMap::new(),
        }
    }

    #[inline]
    pub(crate) fn is_transparent(&self, argb: u32) -> bool {
        alpha_of(argb) <= self.alpha_threshold
    }

    /// Map every transparent pixel onto the image's transparent color.
    #[inline]
    pub(crate) fn normalize(&self, argb: u32) -> u32 {
        match self.stats.transparent {
            Some(t) if self.is_transparent(argb) => t,
            _ => argb,
        }
    }

    /// Memoized [`to_lab`] keyed by packed ARGB.
    pub(crate) fn lab(&mut self, argb: u32) -> Lab {
        *self
            .labs
            .entry(argb)
            .or_insert_with(|| to_lab(unpack_argb(argb)))
    }

    /// Drop all memo tables; the next image starts cold.
    pub(crate) fn clear(&mut self) {
        self.labs.clear();
        self.nearest.clear();
        self.closest.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_finds_first_transparent_pixel() {
        let pixels = [0xFF10_2030, 0x00AB_CDEF, 0x0012_3456, 0xFF00_0000];
        let stats = ImageStats::scan(&pixels, 0);
        assert_eq!(stats.transparent, Some(0x00AB_CDEF));
        assert!(!stats.has_semi);
        assert!(stats.has_alpha());
    }

    #[test]
    fn scan_detects_semi_transparency() {
        let stats = ImageStats::scan(&[0xFF00_0000, 0x8000_0000], 0);
        assert!(stats.has_semi);
        assert_eq!(stats.transparent, None);
    }

    #[test]
    fn threshold_widens_transparency() {
        let stats = ImageStats::scan(&[0x0F11_1111, 0xFF00_0000], 0x10);
        assert_eq!(stats.transparent, Some(0x0F11_1111));
        assert!(!stats.has_semi);
    }

    #[test]
    fn normalize_collapses_transparent_pixels() {
        let pixels = [0x0000_00FF, 0x00FF_0000, 0xFF12_3456];
        let stats = ImageStats::scan(&pixels, 0);
        let session = Session::new(&QuantizeConfig::default(), stats, 256);
        assert_eq!(session.normalize(0x00FF_0000), 0x0000_00FF);
        assert_eq!(session.normalize(0xFF12_3456), 0xFF12_3456);
    }

    #[test]
    fn lab_cache_is_cleared() {
        let mut session = Session::new(&QuantizeConfig::default(), ImageStats::default(), 256);
        let lab = session.lab(0xFF80_8080);
        assert_eq!(session.lab(0xFF80_8080), lab);
        assert_eq!(session.labs.len(), 1);
        session.clear();
        assert!(session.labs.is_empty());
    }

    #[test]
    fn small_palettes_use_uniform_weights() {
        let s = Session::new(&QuantizeConfig::default(), ImageStats::default(), 16);
        assert_eq!(s.weights, ChannelWeights::UNIFORM);
        let s = Session::new(&QuantizeConfig::default(), ImageStats::default(), 64);
        assert_eq!(s.weights, ChannelWeights::LUMA);
    }
}
