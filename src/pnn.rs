//! Pairwise-nearest-neighbor palette reduction.
//!
//! Bins live in a doubly linked list ordered by first appearance. Each bin
//! remembers its cheapest forward partner and the cost of merging with it; a
//! binary min-heap keyed on that cost picks the next merge. Heap entries go
//! stale when a partner is merged away, so every bin carries two epochs:
//! `tm` (when its partner was last searched) and `mtm` (when it last changed).
//! A top entry is trusted only if neither it nor its partner changed since
//! the search.

use crate::color::{
    chroma_term, from_lab, hue_term, lightness_term, pack_argb, rotation_term, sqr, Lab, YUV,
};
use crate::histogram::{self, Bin, BucketMode};
use crate::session::Session;
use crate::{ChannelWeights, Metric};
use rgb::RGBA8;

pub(crate) const NIL: usize = usize::MAX;
const DELETED: u32 = u32::MAX;

/// e^1.5, the divisor applied to alpha differences in Lab space.
pub(crate) const ALPHA_SCALE: f64 = 4.481_689_070_338_065;

/// Output of one reduction.
#[derive(Debug, Clone)]
pub(crate) struct Reduction {
    /// Packed ARGB colors. If the image has a transparent color it is slot 0.
    pub palette: Vec<u32>,
    /// Sum of the costs of every merge performed (0 for exact palettes).
    pub error: f64,
    /// `target / bins`, capped at 0.9. Drives dither tuning.
    pub weight: f64,
}

/// How bin populations are flattened before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CountTransform {
    Linear,
    Sqrt,
    TruncSqrt,
    Pow075,
    TruncCbrt,
}

impl CountTransform {
    fn apply(self, n: f64) -> f64 {
        match self {
            Self::Linear => n,
            Self::Sqrt => n.sqrt(),
            Self::TruncSqrt => n.sqrt().trunc(),
            Self::Pow075 => n.powf(0.75).trunc(),
            Self::TruncCbrt => n.cbrt().trunc(),
        }
    }
}

/// Per-run merge settings derived from palette size and histogram density.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MergePlan {
    pub transform: CountTransform,
    /// Use L1-style Lab distances instead of squared ones.
    pub texicab: bool,
    pub proportional: f64,
    pub weight: f64,
}

/// Pick count transform, taxicab mode and (unless fixed) the Lab blend
/// ratios. May also shift green weight onto blue for sparse palettes.
pub(crate) fn plan(session: &mut Session, target: usize, bins: usize) -> MergePlan {
    let t = target as f64;
    let proportional = sqr(t) / bins as f64;
    let weight = (t / bins as f64).min(0.9);

    let mut quan_rt: i8 = 1;
    if session.stats.has_alpha() && target < 32 {
        quan_rt = -1;
    }
    if weight < 0.001 || (weight > 0.0015 && weight < 0.0022) {
        quan_rt = 2;
    }
    let w = &mut session.weights;
    if !session.weights_fixed && weight < 0.04 && w.g < 1.0 && w.g >= ChannelWeights::LUMA.g {
        match session.metric {
            Metric::Lab => {
                let shift = 1.75f64.exp() * weight;
                w.g -= shift;
                w.b += shift;
            }
            Metric::Rgb => *w = ChannelWeights::UNIFORM,
        }
        if target >= 64 {
            quan_rt = 0;
        }
    }

    let transform = match quan_rt {
        2 => CountTransform::Pow075,
        1 if target < 64 => CountTransform::TruncSqrt,
        1 => CountTransform::Sqrt,
        q if q < 0 => CountTransform::TruncCbrt,
        _ => CountTransform::Linear,
    };

    if session.metric == Metric::Lab && !session.ratio_fixed {
        let ratio = blend_ratio(session.stats.has_semi, quan_rt, target, bins, proportional, weight);
        session.ratio_x = ratio;
        session.ratio_y = ratio;
    }

    MergePlan {
        transform,
        texicab: proportional > 0.025,
        proportional,
        weight,
    }
}

fn blend_ratio(
    has_semi: bool,
    quan_rt: i8,
    target: usize,
    bins: usize,
    proportional: f64,
    weight: f64,
) -> f64 {
    let mut ratio = if has_semi {
        0.5
    } else if quan_rt != 0 && target < 64 {
        if proportional > 0.018 && proportional < 0.022 {
            proportional + weight * 3.13f64.exp()
        } else if proportional > 0.1 {
            1.0 - weight
        } else if proportional > 0.04 {
            weight * 2.28f64.exp()
        } else if proportional > 0.03 {
            weight * 3.275f64.exp()
        } else {
            let beta = if bins % 2 == 0 { -1.0 } else { 1.0 };
            proportional + beta * weight * 1.997f64.exp()
        }
    } else if target > 256 {
        1.0 - 1.0 / proportional
    } else {
        (1.0 - 0.7 * weight).max(0.98)
    };
    if !has_semi && quan_rt < 0 {
        ratio = weight * 1.997f64.exp();
    }
    ratio.clamp(0.0, 1.0)
}

/// Reduce `pixels` to at most `max_colors` colors.
///
/// Images that already fit are returned exactly. Two-color requests on
/// multi-color images get a fixed black/white (or transparent/black)
/// palette. Everything else goes through the merge loop, with slot 0
/// reserved for the transparent color when the image has one.
pub(crate) fn reduce(session: &mut Session, pixels: &[u32], max_colors: usize) -> Reduction {
    let exact_limit = if max_colors == 2 { 1 } else { max_colors };
    if let Some(colors) = histogram::exact_colors(session, pixels, exact_limit) {
        tracing::debug!(colors = colors.len(), "image fits the palette exactly");
        let weight = (max_colors as f64 / colors.len().max(1) as f64).min(0.9);
        return Reduction { palette: colors, error: 0.0, weight };
    }

    if max_colors == 2 {
        let distinct = histogram::count_distinct(session, pixels, histogram::MAX_EXACT_COLORS);
        let palette = match session.stats.transparent {
            Some(t) => vec![t, 0xFF00_0000],
            None => vec![0xFF00_0000, 0xFFFF_FFFF],
        };
        tracing::debug!(distinct, "binary palette");
        return Reduction {
            palette,
            error: 0.0,
            weight: (2.0 / distinct as f64).min(0.9),
        };
    }

    let transparent = session.stats.transparent;
    let target = max_colors - usize::from(transparent.is_some());
    let hist = histogram::build(session, pixels, target);
    let mut bins = hist.bins;
    let plan = plan(session, target, bins.len());
    tracing::debug!(
        bins = bins.len(),
        target,
        mode = ?hist.mode,
        transform = ?plan.transform,
        texicab = plan.texicab,
        ratio_x = session.ratio_x,
        ratio_y = session.ratio_y,
        "pnn merge plan"
    );

    let error = merge(session, &mut bins, target, &plan);

    let mut palette = Vec::with_capacity(max_colors);
    palette.extend(transparent);
    let mut i = 0;
    while i != NIL && !bins.is_empty() {
        palette.push(bin_color(session.metric, &bins[i]));
        i = bins[i].fw;
    }
    if hist.mode == BucketMode::Exact {
        tracing::trace!(colors = palette.len(), "palette from exact bins");
    }

    Reduction {
        palette,
        error,
        weight: plan.weight,
    }
}

fn bin_color(metric: Metric, bin: &Bin) -> u32 {
    let alpha = bin.alpha.round().clamp(0.0, 255.0) as u8;
    let c = match metric {
        Metric::Rgb => {
            let ch = |v: f64| v.round().clamp(0.0, 255.0) as u8;
            RGBA8 {
                r: ch(bin.c[0]),
                g: ch(bin.c[1]),
                b: ch(bin.c[2]),
                a: alpha,
            }
        }
        Metric::Lab => {
            let mut c = from_lab(Lab::new(bin.c[0], bin.c[1], bin.c[2], bin.alpha));
            c.a = alpha;
            c
        }
    };
    pack_argb(c)
}

/// Merge bins until `target` remain. Returns the accumulated merge cost.
fn merge(session: &Session, bins: &mut [Bin], target: usize, plan: &MergePlan) -> f64 {
    let len = bins.len();
    for (i, bin) in bins.iter_mut().enumerate() {
        bin.count = plan.transform.apply(bin.count).max(1.0);
        bin.fw = if i + 1 < len { i + 1 } else { NIL };
        bin.bk = if i == 0 { NIL } else { i - 1 };
        bin.nn = NIL;
        bin.tm = 0;
        bin.mtm = 0;
    }
    if len <= target {
        return 0.0;
    }

    let search = Search::new(session, plan);
    let mut heap = MergeHeap::with_capacity(len);
    for i in 0..len - 1 {
        search.find_nn(bins, i);
        heap.push(i, bins);
    }

    let extbins = len - target;
    let mut total = 0.0;
    let mut epoch: u32 = 0;
    'merge: while (epoch as usize) < extbins {
        let tb = loop {
            let Some(b1) = heap.top() else {
                break 'merge;
            };
            let bin = bins[b1];
            if bin.mtm == DELETED {
                heap.pop_top(bins);
                continue;
            }
            if bin.nn != NIL && bin.tm >= bin.mtm && bins[bin.nn].mtm <= bin.tm {
                break b1;
            }
            search.find_nn(bins, b1);
            bins[b1].tm = epoch;
            heap.sift_down(1, bins);
            if bins[b1].nn == NIL && heap.top() == Some(b1) {
                // Only bins with nothing left to merge with remain.
                break 'merge;
            }
        };

        let nb = bins[tb].nn;
        let (a, b) = (bins[tb], bins[nb]);
        total += a.err;
        let (n1, n2) = (a.count, b.count);
        let d = 1.0 / (n1 + n2);
        let target_bin = &mut bins[tb];
        target_bin.alpha = d * (n1 * a.alpha + n2 * b.alpha);
        for k in 0..3 {
            target_bin.c[k] = d * (n1 * a.c[k] + n2 * b.c[k]);
        }
        target_bin.count += n2;
        epoch += 1;
        target_bin.mtm = epoch;

        bins[b.bk].fw = b.fw;
        if b.fw != NIL {
            bins[b.fw].bk = b.bk;
        }
        bins[nb].mtm = DELETED;
    }

    tracing::trace!(merges = epoch, total, "pnn merge finished");
    total
}

/// Distance settings fixed for one merge loop.
struct Search {
    metric: Metric,
    weights: ChannelWeights,
    ratio_x: f64,
    ratio_y: f64,
    has_semi: bool,
    texicab: bool,
}

impl Search {
    fn new(session: &Session, plan: &MergePlan) -> Self {
        Self {
            metric: session.metric,
            weights: session.weights,
            ratio_x: session.ratio_x,
            ratio_y: session.ratio_y,
            has_semi: session.stats.has_semi,
            texicab: plan.texicab && plan.proportional < 1.0,
        }
    }

    /// Find the cheapest merge partner for `idx` among the bins after it.
    fn find_nn(&self, bins: &mut [Bin], idx: usize) {
        let (nn, err) = match self.metric {
            Metric::Rgb => self.nearest_rgb(bins, idx),
            Metric::Lab => self.nearest_lab(bins, idx),
        };
        bins[idx].nn = nn;
        bins[idx].err = err;
    }

    /// Weighted RGB blended with YUV: `ratio_x` shifts weight onto luma,
    /// `ratio_y` adds the chroma rows.
    fn nearest_rgb(&self, bins: &[Bin], idx: usize) -> (usize, f64) {
        let b1 = &bins[idx];
        let w = &self.weights;
        let (rx, ry) = (self.ratio_x, self.ratio_y);
        let (mut nn, mut err) = (NIL, f64::INFINITY);
        let mut i = b1.fw;
        while i != NIL {
            let b2 = &bins[i];
            let j = i;
            i = b2.fw;

            let nerr2 = b1.count * b2.count / (b1.count + b2.count);
            let d = [b2.c[0] - b1.c[0], b2.c[1] - b1.c[1], b2.c[2] - b1.c[2]];
            let mut nerr = (1.0 - rx) * (w.r * sqr(d[0]) + w.g * sqr(d[1]) + w.b * sqr(d[2]));
            for (row, ratio) in YUV.iter().zip([rx, ry, ry]) {
                nerr += ratio * sqr(row[0] * d[0] + row[1] * d[1] + row[2] * d[2]);
            }
            if self.has_semi {
                nerr += w.a * sqr(b2.alpha - b1.alpha);
            }
            nerr *= nerr2;
            if nerr < err {
                err = nerr;
                nn = j;
            }
        }
        (nn, err)
    }

    fn nearest_lab(&self, bins: &[Bin], idx: usize) -> (usize, f64) {
        let b1 = &bins[idx];
        let lab1 = Lab::new(b1.c[0], b1.c[1], b1.c[2], b1.alpha);
        let (rx, ry) = (self.ratio_x, self.ratio_y);
        let (mut nn, mut err) = (NIL, f64::INFINITY);
        let mut i = b1.fw;
        while i != NIL {
            let b2 = &bins[i];
            let j = i;
            i = b2.fw;

            let nerr2 = b1.count * b2.count / (b1.count + b2.count);
            if nerr2 >= err {
                continue;
            }
            let lab2 = Lab::new(b2.c[0], b2.c[1], b2.c[2], b2.alpha);

            let mut nerr = 0.0;
            if self.has_semi {
                nerr += nerr2 * sqr(lab2.alpha - lab1.alpha) / ALPHA_SCALE;
                if nerr >= err {
                    continue;
                }
            }

            if self.texicab {
                nerr += (1.0 - rx) * nerr2 * (lab2.l - lab1.l).abs();
                if nerr >= err {
                    continue;
                }
                nerr += (1.0 - ry) * nerr2 * (sqr(lab2.a - lab1.a) + sqr(lab2.b - lab1.b)).sqrt();
            } else {
                nerr += (1.0 - rx) * nerr2 * sqr(lab2.l - lab1.l);
                if nerr >= err {
                    continue;
                }
                nerr += (1.0 - ry) * nerr2 * (sqr(lab2.a - lab1.a) + sqr(lab2.b - lab1.b));
            }
            if nerr >= err {
                continue;
            }

            nerr += rx * nerr2 * sqr(lightness_term(&lab1, &lab2));
            if nerr >= err {
                continue;
            }
            let chroma = chroma_term(&lab1, &lab2);
            nerr += ry * nerr2 * sqr(chroma.delta);
            if nerr >= err {
                continue;
            }
            let hue = hue_term(&lab1, &lab2, &chroma);
            nerr += ry * nerr2 * sqr(hue.delta);
            if nerr >= err {
                continue;
            }
            nerr += ry * nerr2 * rotation_term(&hue, chroma.delta);
            if nerr >= err {
                continue;
            }

            err = nerr;
            nn = j;
        }
        (nn, err)
    }
}

/// 1-based binary min-heap of bin indices ordered by `Bin::err`.
#[derive(Debug)]
struct MergeHeap {
    slots: Vec<usize>,
}

impl MergeHeap {
    fn with_capacity(n: usize) -> Self {
        let mut slots = Vec::with_capacity(n + 1);
        slots.push(NIL);
        Self { slots }
    }

    fn len(&self) -> usize {
        self.slots.len() - 1
    }

    fn top(&self) -> Option<usize> {
        self.slots.get(1).copied()
    }

    fn push(&mut self, bin: usize, bins: &[Bin]) {
        self.slots.push(bin);
        let err = bins[bin].err;
        let mut l = self.len();
        while l > 1 {
            let parent = l / 2;
            if bins[self.slots[parent]].err <= err {
                break;
            }
            self.slots[l] = self.slots[parent];
            l = parent;
        }
        self.slots[l] = bin;
    }

    /// Replace the top with the last entry and restore heap order.
    fn pop_top(&mut self, bins: &[Bin]) {
        if self.len() == 0 {
            return;
        }
        let last = self.slots.pop().unwrap_or(NIL);
        if self.len() >= 1 {
            self.slots[1] = last;
            self.sift_down(1, bins);
        }
    }

    fn sift_down(&mut self, mut l: usize, bins: &[Bin]) {
        let n = self.len();
        if l > n {
            return;
        }
        let bin = self.slots[l];
        let err = bins[bin].err;
        loop {
            let mut child = l * 2;
            if child > n {
                break;
            }
            if child < n && bins[self.slots[child]].err > bins[self.slots[child + 1]].err {
                child += 1;
            }
            if err <= bins[self.slots[child]].err {
                break;
            }
            self.slots[l] = self.slots[child];
            l = child;
        }
        self.slots[l] = bin;
    }
}
