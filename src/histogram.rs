use std::collections::{HashMap, HashSet};

use crate::color::{alpha_of, unpack_argb};
use crate::session::Session;
use crate::Metric;

/// Keys for coarse bucketing never exceed 16 bits.
const COARSE_SLOTS: usize = 1 << 16;

/// Largest distinct-color count the exact-color fallback will bucket, and
/// the most bins any refined histogram may hold.
pub(crate) const MAX_EXACT_COLORS: usize = 1 << 16;

/// Per-channel bit depths tried, in order, when coarse bins fall short of
/// the target on an image with too many colors to bucket exactly.
const REFINE_BITS: [u8; 3] = [6, 7, 8];

/// How pixels are grouped into histogram bins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BucketMode {
    /// 5-6-5 bit RGB key for opaque images.
    Rgb565,
    /// 4 bits per channel including alpha, for images with partial alpha.
    Argb4444,
    /// Top `n` bits of every channel, alpha included.
    Fine(u8),
    /// One bin per distinct color.
    Exact,
}

impl BucketMode {
    #[inline]
    pub(crate) fn key(self, argb: u32) -> u32 {
        let c = unpack_argb(argb);
        let (a, r, g, b) = (c.a as u32, c.r as u32, c.g as u32, c.b as u32);
        match self {
            Self::Rgb565 => (r & 0xF8) << 8 | (g & 0xFC) << 3 | b >> 3,
            Self::Argb4444 => (a & 0xF0) << 8 | (r & 0xF0) << 4 | (g & 0xF0) | b >> 4,
            Self::Fine(bits) => {
                let m = (0xFFu32 << (8 - bits as u32)) & 0xFF;
                argb & (m << 24 | m << 16 | m << 8 | m)
            }
            Self::Exact => argb,
        }
    }
}

/// One histogram bin: mean color in the working space plus the merge
/// bookkeeping the pairwise reducer threads through it.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Bin {
    pub alpha: f64,
    /// R, G, B means for the RGB metric; L, a, b means for Lab.
    pub c: [f64; 3],
    /// Pixel count, later replaced by the transformed count.
    pub count: f64,
    pub err: f64,
    pub nn: usize,
    pub fw: usize,
    pub bk: usize,
    pub tm: u32,
    pub mtm: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct Accum {
    alpha: f64,
    c: [f64; 3],
    count: u32,
}

impl Accum {
    fn add(&mut self, argb: u32, c: [f64; 3]) {
        self.alpha += alpha_of(argb) as f64;
        self.c[0] += c[0];
        self.c[1] += c[1];
        self.c[2] += c[2];
        self.count += 1;
    }

    fn centroid(&self) -> Bin {
        let n = self.count as f64;
        Bin {
            alpha: self.alpha / n,
            c: [self.c[0] / n, self.c[1] / n, self.c[2] / n],
            count: n,
            ..Bin::default()
        }
    }
}

#[derive(Debug)]
pub(crate) struct Histogram {
    pub bins: Vec<Bin>,
    pub mode: BucketMode,
}

/// Count distinct (normalized) colors, stopping once `cap` is exceeded.
pub(crate) fn count_distinct(session: &Session, pixels: &[u32], cap: usize) -> usize {
    let mut seen = HashSet::new();
    for &argb in pixels {
        seen.insert(session.normalize(argb));
        if seen.len() > cap {
            break;
        }
    }
    seen.len()
}

/// Every distinct color in first-seen order, or `None` once there are more
/// than `limit`. A transparent color, if present, is moved to slot 0.
pub(crate) fn exact_colors(session: &Session, pixels: &[u32], limit: usize) -> Option<Vec<u32>> {
    let mut seen = HashSet::new();
    let mut colors = Vec::new();
    for &argb in pixels {
        let c = session.normalize(argb);
        if seen.insert(c) {
            if colors.len() == limit {
                return None;
            }
            colors.push(c);
        }
    }
    if let Some(t) = session.stats.transparent {
        if let Some(pos) = colors.iter().position(|&c| c == t) {
            colors.swap(0, pos);
        }
    }
    Some(colors)
}

/// Bucket every visible pixel.
///
/// When coarse bucketing leaves fewer bins than `target` but the image has
/// more distinct colors than that, buckets get finer: exact colors if there
/// are few enough, otherwise 6, 7 then 8 bits per channel, capped at
/// [`MAX_EXACT_COLORS`] bins.
pub(crate) fn build(session: &mut Session, pixels: &[u32], target: usize) -> Histogram {
    let coarse = if session.stats.has_semi {
        BucketMode::Argb4444
    } else {
        BucketMode::Rgb565
    };
    let bins = bucket(session, pixels, coarse);
    if bins.len() >= target {
        return Histogram { bins, mode: coarse };
    }

    let distinct = count_distinct(session, pixels, MAX_EXACT_COLORS);
    if distinct <= target {
        return Histogram { bins, mode: coarse };
    }
    if distinct <= MAX_EXACT_COLORS {
        tracing::debug!(coarse = bins.len(), distinct, "falling back to exact-color bins");
        return Histogram {
            bins: bucket(session, pixels, BucketMode::Exact),
            mode: BucketMode::Exact,
        };
    }

    let coarse_bins = bins.len();
    let mut refined = Histogram { bins, mode: coarse };
    for bits in REFINE_BITS {
        let mode = if bits == 8 {
            BucketMode::Exact
        } else {
            BucketMode::Fine(bits)
        };
        refined = Histogram {
            bins: refine(session, pixels, mode, coarse, coarse_bins, MAX_EXACT_COLORS),
            mode,
        };
        if refined.bins.len() >= target {
            break;
        }
    }
    tracing::debug!(
        coarse = coarse_bins,
        bins = refined.bins.len(),
        mode = ?refined.mode,
        "refined histogram"
    );
    refined
}

fn channels(session: &mut Session, argb: u32) -> [f64; 3] {
    match session.metric {
        Metric::Rgb => {
            let px = unpack_argb(argb);
            [px.r as f64, px.g as f64, px.b as f64]
        }
        Metric::Lab => {
            let lab = session.lab(argb);
            [lab.l, lab.a, lab.b]
        }
    }
}

fn bucket(session: &mut Session, pixels: &[u32], mode: BucketMode) -> Vec<Bin> {
    let mut accums: Vec<Accum> = Vec::new();
    let mut slots = vec![u32::MAX; if mode == BucketMode::Exact { 0 } else { COARSE_SLOTS }];
    let mut exact: HashMap<u32, u32> = HashMap::new();

    for &argb in pixels {
        if session.is_transparent(argb) {
            continue;
        }
        let key = mode.key(argb);
        let slot = if mode == BucketMode::Exact {
            *exact.entry(key).or_insert_with(|| {
                accums.push(Accum::default());
                accums.len() as u32 - 1
            })
        } else {
            let s = &mut slots[key as usize];
            if *s == u32::MAX {
                *s = accums.len() as u32;
                accums.push(Accum::default());
            }
            *s
        };
        let c = channels(session, argb);
        accums[slot as usize].add(argb, c);
    }

    accums.iter().map(Accum::centroid).collect()
}

/// Bucket with a fine `mode`, holding at most `cap` bins. Each coarse
/// bucket keeps one bin reserved for it; once the cap is reached, pixels
/// with an unseen fine key join the first fine bin of their coarse bucket.
/// `cap` must exceed `coarse_bins`.
fn refine(
    session: &mut Session,
    pixels: &[u32],
    mode: BucketMode,
    coarse: BucketMode,
    coarse_bins: usize,
    cap: usize,
) -> Vec<Bin> {
    let mut accums: Vec<Accum> = Vec::new();
    let mut fine: HashMap<u32, u32> = HashMap::new();
    let mut home: HashMap<u32, u32> = HashMap::new();

    for &argb in pixels {
        if session.is_transparent(argb) {
            continue;
        }
        let key = mode.key(argb);
        let slot = match fine.get(&key) {
            Some(&s) => s,
            None => {
                let ck = coarse.key(argb);
                let unhomed = coarse_bins.saturating_sub(home.len());
                match home.get(&ck) {
                    Some(&h) if accums.len() + unhomed >= cap => h,
                    _ => {
                        let s = accums.len() as u32;
                        accums.push(Accum::default());
                        fine.insert(key, s);
                        home.entry(ck).or_insert(s);
                        s
                    }
                }
            }
        };
        let c = channels(session, argb);
        accums[slot as usize].add(argb, c);
    }

    accums.iter().map(Accum::centroid).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ImageStats;
    use crate::QuantizeConfig;

    fn session_for(pixels: &[u32], metric: Metric) -> Session {
        let stats = ImageStats::scan(pixels, 0);
        Session::new(&QuantizeConfig::new().max_colors(256).metric(metric), stats, 256)
    }

    #[test]
    fn rgb565_key_layout() {
        assert_eq!(BucketMode::Rgb565.key(0xFFFF_FFFF), 0xFFFF);
        assert_eq!(BucketMode::Rgb565.key(0xFF00_0000), 0);
        assert_eq!(BucketMode::Rgb565.key(0xFFFF_0000), 0xF800);
        assert_eq!(BucketMode::Rgb565.key(0xFF00_FF00), 0x07E0);
        assert_eq!(BucketMode::Rgb565.key(0xFF00_00FF), 0x001F);
    }

    #[test]
    fn argb4444_key_layout() {
        assert_eq!(BucketMode::Argb4444.key(0xF000_0000), 0xF000);
        assert_eq!(BucketMode::Argb4444.key(0x00F0_0000), 0x0F00);
        assert_eq!(BucketMode::Argb4444.key(0x0000_F000), 0x00F0);
        assert_eq!(BucketMode::Argb4444.key(0x0000_00F0), 0x000F);
    }

    #[test]
    fn coarse_bins_merge_neighbours() {
        let pixels = [0xFF10_1010, 0xFF11_1111, 0xFF80_8080];
        let mut session = session_for(&pixels, Metric::Rgb);
        let hist = build(&mut session, &pixels, 1);
        assert_eq!(hist.mode, BucketMode::Rgb565);
        assert_eq!(hist.bins.len(), 2);
        assert_eq!(hist.bins[0].count, 2.0);
        assert!((hist.bins[0].c[0] - 16.5).abs() < 1e-9);
    }

    #[test]
    fn transparent_pixels_are_not_binned() {
        let pixels = [0x0000_0000, 0xFFFF_0000, 0x0012_3456];
        let mut session = session_for(&pixels, Metric::Lab);
        let hist = build(&mut session, &pixels, 1);
        assert_eq!(hist.bins.len(), 1);
        assert_eq!(hist.bins[0].count, 1.0);
        assert!((hist.bins[0].alpha - 255.0).abs() < 1e-9);
    }

    #[test]
    fn semi_transparency_selects_argb4444() {
        let pixels = [0x80FF_0000, 0xFF00_FF00];
        let mut session = session_for(&pixels, Metric::Lab);
        assert_eq!(build(&mut session, &pixels, 1).mode, BucketMode::Argb4444);
    }

    #[test]
    fn falls_back_to_exact_colors() {
        // Eight greys that share one RGB565 bucket pair.
        let pixels: Vec<u32> = (0..8u32).map(|v| 0xFF00_0000 | v * 0x0001_0101).collect();
        let mut session = session_for(&pixels, Metric::Rgb);
        let hist = build(&mut session, &pixels, 4);
        assert_eq!(hist.mode, BucketMode::Exact);
        assert_eq!(hist.bins.len(), 8);
    }

    #[test]
    fn fine_key_keeps_top_bits() {
        assert_eq!(BucketMode::Fine(6).key(0xFFFF_FFFF), 0xFCFC_FCFC);
        assert_eq!(BucketMode::Fine(7).key(0x8103_0507), 0x8002_0406);
    }

    /// `coarse` RGB565 buckets, each split into `variants` low-bit colors.
    fn split_buckets(coarse: u32, variants: u32) -> Vec<u32> {
        let mut pixels = Vec::new();
        for k in 0..coarse {
            let (r, g) = ((k & 31) << 3, (k >> 5) << 2);
            for v in 0..variants {
                let (lr, lg, lb) = (v & 7, (v >> 3) & 3, (v >> 5) & 7);
                pixels.push(0xFF00_0000 | (r | lr) << 16 | (g | lg) << 8 | lb);
            }
        }
        pixels
    }

    #[test]
    fn refine_respects_cap_and_covers_every_coarse_bucket() {
        let pixels = split_buckets(6, 256);
        let mut session = session_for(&pixels, Metric::Rgb);
        let bins = refine(&mut session, &pixels, BucketMode::Exact, BucketMode::Rgb565, 6, 10);
        assert_eq!(bins.len(), 10);
        let total: f64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, pixels.len() as f64);
        let mut coarse: Vec<u32> = bins
            .iter()
            .map(|b| {
                let (r, g) = (b.c[0] as u32, b.c[1] as u32);
                BucketMode::Rgb565.key(0xFF00_0000 | r << 16 | g << 8)
            })
            .collect();
        coarse.sort_unstable();
        coarse.dedup();
        assert_eq!(coarse.len(), 6);
    }

    #[test]
    fn too_many_colors_steps_to_finer_buckets() {
        // 76800 distinct colors in 300 coarse buckets.
        let pixels = split_buckets(300, 256);
        let mut session = session_for(&pixels, Metric::Rgb);
        let hist = build(&mut session, &pixels, 1000);
        assert_eq!(hist.mode, BucketMode::Fine(6));
        assert_eq!(hist.bins.len(), 1200);
    }

    #[test]
    fn exact_colors_puts_transparent_first() {
        let pixels = [0xFFFF_0000, 0xFF00_FF00, 0x0000_0000, 0x00FF_FFFF];
        let session = session_for(&pixels, Metric::Lab);
        let colors = exact_colors(&session, &pixels, 4).unwrap();
        assert_eq!(colors, vec![0x0000_0000, 0xFF00_FF00, 0xFFFF_0000]);
        assert!(exact_colors(&session, &pixels, 2).is_none());
    }

    #[test]
    fn count_distinct_stops_past_cap() {
        let pixels: Vec<u32> = (0..100u32).map(|v| 0xFF00_0000 | v).collect();
        let session = session_for(&pixels, Metric::Rgb);
        assert_eq!(count_distinct(&session, &pixels, 10), 11);
        assert_eq!(count_distinct(&session, &pixels, 1000), 100);
    }
}
