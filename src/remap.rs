//! Per-pixel palette index assignment.

use crate::color::{
    chroma_term, hue_term, lightness_term, rotation_term, sqr, unpack_argb, Lab, YUV,
};
use crate::palette::Palette;
use crate::pnn::ALPHA_SCALE;
use crate::session::{ClosestPair, Session};
use crate::Metric;

/// Palette lookup as seen by the ditherer.
pub trait ColorIndexer {
    fn palette(&self) -> &Palette;

    /// Best palette entry for a color, independent of position.
    fn classify(&mut self, argb: u32) -> u16;

    /// Entry to use for a (possibly perturbed) color at path position `pos`.
    fn dither_classify(&mut self, argb: u32, pos: usize) -> u16;
}

/// Which search `dither_classify` uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AssignPolicy {
    Nearest,
    /// Alternate between the two best candidates on a checkerboard.
    Closest,
}

/// Nearest and closest-pair search over a palette, memoized in the session.
pub(crate) struct Remapper<'a> {
    palette: &'a Palette,
    session: &'a mut Session,
    policy: AssignPolicy,
}

impl<'a> Remapper<'a> {
    pub(crate) fn new(palette: &'a Palette, session: &'a mut Session) -> Self {
        let policy = if !session.stats.has_alpha() && palette.len() >= 256 {
            AssignPolicy::Closest
        } else {
            AssignPolicy::Nearest
        };
        Self {
            palette,
            session,
            policy,
        }
    }

    pub(crate) fn policy(&self) -> AssignPolicy {
        self.policy
    }

    pub(crate) fn lab(&mut self, argb: u32) -> Lab {
        self.session.lab(argb)
    }

    pub(crate) fn nearest(&mut self, argb: u32) -> u16 {
        if let Some(&k) = self.session.nearest.get(&argb) {
            return k;
        }
        let k = self.search_nearest(argb);
        self.session.nearest.insert(argb, k);
        k
    }

    fn search_nearest(&mut self, argb: u32) -> u16 {
        if self.session.is_transparent(argb) {
            if let Some(t) = self.palette.transparent_index() {
                return t;
            }
        }
        let range = self.palette.opaque_range();
        if range.is_empty() {
            return 0;
        }

        let c1 = unpack_argb(argb);
        let lab1 = self.session.lab(argb);
        let len = self.palette.len();
        let has_semi = self.session.stats.has_semi;
        let w = self.session.weights;
        let rgb_space = self.session.metric == Metric::Rgb || len <= 4;

        let mut best = range.start;
        let mut min = f64::INFINITY;
        for i in range {
            let k = i as u16;
            let c2 = self.palette.color(k);
            let mut d = 0.0;
            if has_semi {
                d += if self.session.metric == Metric::Rgb {
                    w.a * sqr(c2.a as f64 - c1.a as f64)
                } else {
                    sqr(c2.a as f64 - c1.a as f64) / ALPHA_SCALE
                };
                if d >= min {
                    continue;
                }
            }

            if rgb_space {
                d += w.g * sqr(c2.g as f64 - c1.g as f64);
                if d >= min {
                    continue;
                }
                d += w.r * sqr(c2.r as f64 - c1.r as f64);
                if d >= min {
                    continue;
                }
                d += w.b * sqr(c2.b as f64 - c1.b as f64);
            } else if len < 256 {
                let lab2 = self.palette.lab(k);
                d += sqr(lightness_term(&lab1, &lab2));
                if d >= min {
                    continue;
                }
                let chroma = chroma_term(&lab1, &lab2);
                d += sqr(chroma.delta);
                if d >= min {
                    continue;
                }
                let hue = hue_term(&lab1, &lab2, &chroma);
                d += sqr(hue.delta);
                if d >= min {
                    continue;
                }
                d += rotation_term(&hue, chroma.delta);
            } else {
                let lab2 = self.palette.lab(k);
                d += (lab2.l - lab1.l).abs();
                if d >= min {
                    continue;
                }
                d += (sqr(lab2.a - lab1.a) + sqr(lab2.b - lab1.b)).sqrt();
            }

            if d < min {
                min = d;
                best = i;
            }
        }
        best as u16
    }

    pub(crate) fn closest(&mut self, argb: u32, pos: usize) -> u16 {
        if self.session.is_transparent(argb) {
            return self.nearest(argb);
        }
        let pair = match self.session.closest.get(&argb) {
            Some(&p) => p,
            None => {
                let p = self.search_closest(argb);
                self.session.closest.insert(argb, p);
                p
            }
        };

        let max_err = (self.palette.len() * 4) as f64;
        let mut idx = (pos + 1) % 2;
        if pair.err[1] * 0.67 < pair.err[1] - pair.err[0] {
            idx = 0;
        } else if pair.idx[0] > pair.idx[1] {
            idx = pos % 2;
        }

        let chosen = pair.idx[idx];
        if pair.err[idx] >= max_err || Some(chosen) == self.palette.transparent_index() {
            return self.nearest(argb);
        }
        chosen
    }

    fn search_closest(&self, argb: u32) -> ClosestPair {
        let range = self.palette.opaque_range();
        let first = range.start as u16;
        let mut pair = ClosestPair {
            idx: [first, first],
            err: [f64::MAX, f64::MAX],
        };

        let c = unpack_argb(argb);
        let w = self.session.weights;
        let ratio = self.session.ratio_x;
        let has_semi = self.session.stats.has_semi;

        'candidates: for i in range {
            let k = i as u16;
            let c2 = self.palette.color(k);
            let delta = [
                c.r as f64 - c2.r as f64,
                c.g as f64 - c2.g as f64,
                c.b as f64 - c2.b as f64,
            ];

            let mut err = (1.0 - ratio) * w.r * sqr(delta[0]);
            if err >= pair.err[1] {
                continue;
            }
            err += (1.0 - ratio) * w.g * sqr(delta[1]);
            if err >= pair.err[1] {
                continue;
            }
            err += (1.0 - ratio) * w.b * sqr(delta[2]);
            if err >= pair.err[1] {
                continue;
            }
            if has_semi {
                err += (1.0 - ratio) * w.a * sqr(c.a as f64 - c2.a as f64);
                if err >= pair.err[1] {
                    continue;
                }
            }
            for row in &YUV {
                err += ratio * sqr(row[0] * delta[0] + row[1] * delta[1] + row[2] * delta[2]);
                if err >= pair.err[1] {
                    continue 'candidates;
                }
            }

            if err < pair.err[0] {
                pair.idx[1] = pair.idx[0];
                pair.err[1] = pair.err[0];
                pair.idx[0] = k;
                pair.err[0] = err;
            } else {
                pair.idx[1] = k;
                pair.err[1] = err;
            }
        }

        if pair.err[1] == f64::MAX {
            pair.err[1] = pair.err[0];
            pair.idx[1] = pair.idx[0];
        }
        pair
    }
}

impl ColorIndexer for Remapper<'_> {
    fn palette(&self) -> &Palette {
        self.palette
    }

    fn classify(&mut self, argb: u32) -> u16 {
        self.nearest(argb)
    }

    fn dither_classify(&mut self, argb: u32, pos: usize) -> u16 {
        match self.policy {
            AssignPolicy::Nearest => self.nearest(argb),
            AssignPolicy::Closest => self.closest(argb, pos),
        }
    }
}
