//! Genetic search for the Lab blend ratios.
//!
//! [`evolve`] is a small elitist generational driver over any
//! [`Chromosome`]; [`Candidate`] and [`TuningProblem`] plug the quantizer
//! into it. Fitness runs a full reduction per candidate, so results are
//! memoized on a discretized ratio key shared by the whole run.

use std::collections::HashMap;
use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::blue_noise;
use crate::color::sqr;
use crate::error::QuantizeError;
use crate::palette::Palette;
use crate::pnn::{self, ALPHA_SCALE};
use crate::remap::Remapper;
use crate::session::{ImageStats, Session};
use crate::QuantizeConfig;

/// Only pixels whose blue-noise value reaches this are scored.
const SAMPLE_THRESHOLD: i8 = 88;

/// Ratios closer than this are treated as one value.
const SAME_RATIO: f64 = 1e-7;

/// A candidate solution the driver can breed.
pub trait Chromosome<Ctx: ?Sized>: Clone + Send {
    /// A fresh random individual.
    fn clone_random<R: Rng + ?Sized>(ctx: &Ctx, rng: &mut R) -> Self;

    /// Compute fitness. Called from worker threads.
    fn evaluate(&mut self, ctx: &Ctx);

    fn crossover<R: Rng + ?Sized>(&self, mate: &Self, ctx: &Ctx, rng: &mut R) -> Self;

    fn mutate<R: Rng + ?Sized>(&mut self, ctx: &Ctx, rng: &mut R);

    /// Higher is better. Only meaningful after [`evaluate`](Self::evaluate).
    fn fitness(&self) -> f64;
}

/// Population policy for [`evolve`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvolutionParams {
    pub population: usize,
    pub generations: usize,
    /// Best individuals copied unchanged into the next generation.
    pub elite: usize,
    /// Chance that a child is mutated after crossover.
    pub mutation_rate: f64,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            population: 12,
            generations: 6,
            elite: 2,
            mutation_rate: 0.3,
        }
    }
}

/// Run the generational loop and return the fittest individual found.
///
/// Each generation keeps the elite, fills the rest by tournament selection
/// (size 2), crossover and occasional mutation, then evaluates the new
/// children in parallel. Deterministic for a given `rng` state.
pub fn evolve<C, Ctx, R>(ctx: &Ctx, params: &EvolutionParams, rng: &mut R) -> Option<C>
where
    C: Chromosome<Ctx>,
    Ctx: Sync + ?Sized,
    R: Rng,
{
    if params.population == 0 {
        return None;
    }

    let sort_by_fitness = |population: &mut [C]| {
        population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    };
    let tournament = |population: &[C], rng: &mut R| -> usize {
        let a = rng.gen_range(0..population.len());
        let b = rng.gen_range(0..population.len());
        if population[a].fitness() >= population[b].fitness() {
            a
        } else {
            b
        }
    };

    let mut population: Vec<C> = (0..params.population)
        .map(|_| C::clone_random(ctx, rng))
        .collect();
    population.par_iter_mut().for_each(|c| c.evaluate(ctx));
    sort_by_fitness(&mut population[..]);

    let elite = params.elite.min(params.population);
    for generation in 0..params.generations {
        let mut next: Vec<C> = population[..elite].to_vec();
        while next.len() < params.population {
            let a = tournament(&population[..], rng);
            let b = tournament(&population[..], rng);
            let mut child = population[a].crossover(&population[b], ctx, rng);
            if rng.gen::<f64>() < params.mutation_rate {
                child.mutate(ctx, rng);
            }
            next.push(child);
        }
        next[elite..].par_iter_mut().for_each(|c| c.evaluate(ctx));
        sort_by_fitness(&mut next[..]);
        population = next;
        tracing::trace!(generation, best = population[0].fitness(), "ga generation");
    }

    population.into_iter().next()
}

/// Memo key: ratios truncated to the search resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RatioKey(i64, Option<i64>);

/// Search space and fitness function for one image.
#[derive(Debug)]
pub struct TuningProblem<'a> {
    pixels: &'a [u32],
    config: QuantizeConfig,
    stats: ImageStats,
    min_ratio: f64,
    max_ratio: f64,
    scale: f64,
    crossover_skip: f64,
    memo: Mutex<HashMap<RatioKey, [f64; 4]>>,
}

impl<'a> TuningProblem<'a> {
    /// `pixels` must already be validated against `config`.
    pub fn new(pixels: &'a [u32], config: &QuantizeConfig) -> Self {
        let stats = ImageStats::scan(pixels, config.alpha_threshold);
        let n = config.max_colors as f64;
        let min_ratio = if stats.has_semi || n < 64.0 { 0.0111 } else { 0.85 };
        let max_ratio = (n / if n < 64.0 { 400.0 } else { 50.0 })
            .min(1.0)
            .max(min_ratio);
        let scale = if max_ratio < 0.1 { 10_000.0 } else { 100.0 };
        let mut config = config.clone();
        config.auto_tune = false;
        Self {
            pixels,
            config,
            stats,
            min_ratio,
            max_ratio,
            scale,
            crossover_skip: 0.25,
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// Probability that crossover returns a fresh random child instead of
    /// blending its parents.
    pub fn crossover_skip(mut self, p: f64) -> Self {
        self.crossover_skip = p.clamp(0.0, 1.0);
        self
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.min_ratio, self.max_ratio)
    }

    fn random_ratio<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.max_ratio > self.min_ratio {
            rng.gen_range(self.min_ratio..=self.max_ratio)
        } else {
            self.min_ratio
        }
    }

    /// Build an unevaluated candidate, snapping near-equal ratios together
    /// and clamping both into bounds.
    pub fn candidate(&self, ratio_x: f64, ratio_y: f64) -> Candidate {
        let ratio_y = if (ratio_x - ratio_y).abs() <= self.min_ratio {
            ratio_x
        } else {
            ratio_y
        };
        Candidate {
            ratio_x: ratio_x.clamp(self.min_ratio, self.max_ratio),
            ratio_y: ratio_y.clamp(self.min_ratio, self.max_ratio),
            fitness: f64::NEG_INFINITY,
            objectives: [0.0; 4],
            evaluated: false,
        }
    }

    fn key(&self, ratio_x: f64, ratio_y: f64) -> RatioKey {
        let x = (ratio_x * self.scale).trunc() as i64;
        if (ratio_x - ratio_y).abs() <= SAME_RATIO {
            RatioKey(x, None)
        } else {
            RatioKey(x, Some((ratio_y * self.scale * 100.0).trunc() as i64))
        }
    }

    /// Mean per-channel Lab error over the sampled pixels.
    pub fn objectives(&self, ratio_x: f64, ratio_y: f64) -> [f64; 4] {
        let key = self.key(ratio_x, ratio_y);
        if let Some(hit) = self.memo.lock().ok().and_then(|m| m.get(&key).copied()) {
            return hit;
        }

        let config = self.config.clone().ratios(ratio_x, ratio_y);
        let max_colors = config.max_colors as usize;
        let mut session = Session::new(&config, self.stats, max_colors);
        let reduction = pnn::reduce(&mut session, self.pixels, max_colors);
        let palette = Palette::from_argb(reduction.palette, self.stats.transparent.is_some());
        let mut remapper = Remapper::new(&palette, &mut session);

        let has_alpha = self.stats.has_alpha();
        let mut sums = [0.0f64; 4];
        let mut samples = 0usize;
        for (i, &argb) in self.pixels.iter().enumerate() {
            if blue_noise::at(i) < SAMPLE_THRESHOLD {
                continue;
            }
            samples += 1;
            let k = remapper.nearest(argb);
            let lab1 = remapper.lab(argb);
            let lab2 = palette.lab(k);
            if has_alpha {
                sums[0] += sqr(lab1.l - lab2.l);
                sums[1] += sqr(lab1.a - lab2.a);
                sums[2] += sqr(lab1.b - lab2.b);
                sums[3] += sqr(lab1.alpha - lab2.alpha) / ALPHA_SCALE;
            } else {
                sums[0] += (lab1.l - lab2.l).abs();
                sums[1] += (sqr(lab1.a - lab2.a) + sqr(lab1.b - lab2.b)).sqrt();
            }
        }
        let n = samples.max(1) as f64;
        let objectives = sums.map(|s| s / n);

        if let Ok(mut memo) = self.memo.lock() {
            memo.insert(key, objectives);
        }
        objectives
    }

    fn memo_len(&self) -> usize {
        self.memo.lock().map(|m| m.len()).unwrap_or(0)
    }
}

/// One point in ratio space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub ratio_x: f64,
    pub ratio_y: f64,
    fitness: f64,
    objectives: [f64; 4],
    evaluated: bool,
}

impl Candidate {
    /// Per-channel errors: L, a, b (or chroma), alpha.
    pub fn objectives(&self) -> [f64; 4] {
        self.objectives
    }
}

impl<'a> Chromosome<TuningProblem<'a>> for Candidate {
    fn clone_random<R: Rng + ?Sized>(ctx: &TuningProblem<'a>, rng: &mut R) -> Self {
        let x = ctx.random_ratio(rng);
        let y = ctx.random_ratio(rng);
        ctx.candidate(x, y)
    }

    fn evaluate(&mut self, ctx: &TuningProblem<'a>) {
        if self.evaluated {
            return;
        }
        self.objectives = ctx.objectives(self.ratio_x, self.ratio_y);
        self.fitness = -self.objectives.iter().sum::<f64>();
        self.evaluated = true;
    }

    fn crossover<R: Rng + ?Sized>(&self, mate: &Self, ctx: &TuningProblem<'a>, rng: &mut R) -> Self {
        let child = Self::clone_random(ctx, rng);
        if rng.gen::<f64>() < ctx.crossover_skip {
            return child;
        }
        ctx.candidate(
            (self.ratio_x * mate.ratio_x).sqrt(),
            (self.ratio_y * mate.ratio_y).sqrt(),
        )
    }

    fn mutate<R: Rng + ?Sized>(&mut self, ctx: &TuningProblem<'a>, rng: &mut R) {
        let fresh = ctx.random_ratio(rng);
        let (x, y) = if rng.gen_bool(0.5) {
            ((self.ratio_x + fresh) / 2.0, self.ratio_y)
        } else {
            (self.ratio_x, (self.ratio_y + fresh) / 2.0)
        };
        *self = ctx.candidate(x, y);
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Best ratios found by [`optimize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TunedRatios {
    pub ratio_x: f64,
    pub ratio_y: f64,
    /// Negated sum of the mean channel errors; closer to zero is better.
    pub fitness: f64,
}

/// Search blend ratios that minimize Lab error for this image.
///
/// Seeded from the pixel count, so repeated calls on the same image agree.
pub fn optimize(
    pixels: &[u32],
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<TunedRatios, QuantizeError> {
    crate::validate_inputs(pixels.len(), width, height, config)?;
    Ok(optimize_validated(pixels, config))
}

pub(crate) fn optimize_validated(pixels: &[u32], config: &QuantizeConfig) -> TunedRatios {
    let problem = TuningProblem::new(pixels, config);
    let mut rng = StdRng::seed_from_u64(pixels.len() as u64);
    let params = EvolutionParams::default();
    let mut best: Candidate = evolve(&problem, &params, &mut rng)
        .unwrap_or_else(|| problem.candidate(problem.min_ratio, problem.min_ratio));
    best.evaluate(&problem);
    tracing::debug!(
        ratio_x = best.ratio_x,
        ratio_y = best.ratio_y,
        fitness = best.fitness,
        evaluations = problem.memo_len(),
        "ratio search finished"
    );
    TunedRatios {
        ratio_x: best.ratio_x,
        ratio_y: best.ratio_y,
        fitness: best.fitness,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One-dimensional toy problem: maximize -(x - 0.3)^2 on [0, 1].
    #[derive(Debug, Clone)]
    struct Point {
        x: f64,
        fitness: f64,
    }

    impl Chromosome<()> for Point {
        fn clone_random<R: Rng + ?Sized>(_: &(), rng: &mut R) -> Self {
            Point {
                x: rng.gen_range(0.0..=1.0),
                fitness: f64::NEG_INFINITY,
            }
        }

        fn evaluate(&mut self, _: &()) {
            self.fitness = -sqr(self.x - 0.3);
        }

        fn crossover<R: Rng + ?Sized>(&self, mate: &Self, _: &(), _: &mut R) -> Self {
            Point {
                x: (self.x + mate.x) / 2.0,
                fitness: f64::NEG_INFINITY,
            }
        }

        fn mutate<R: Rng + ?Sized>(&mut self, _: &(), rng: &mut R) {
            self.x = (self.x + rng.gen_range(0.0..=1.0)) / 2.0;
        }

        fn fitness(&self) -> f64 {
            self.fitness
        }
    }

    fn noisy_image(w: usize, h: usize) -> Vec<u32> {
        (0..w * h)
            .map(|i| {
                let (x, y) = ((i % w) as u32, (i / w) as u32);
                let r = (x * 255 / w as u32) & 0xFF;
                let g = (y * 255 / h as u32) & 0xFF;
                let b = ((x * 7 + y * 13) * 3) & 0xFF;
                0xFF00_0000 | r << 16 | g << 8 | b
            })
            .collect()
    }

    #[test]
    fn evolve_converges_on_toy_problem() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = EvolutionParams {
            population: 16,
            generations: 20,
            elite: 2,
            mutation_rate: 0.3,
        };
        let best: Point = evolve(&(), &params, &mut rng).unwrap();
        assert!((best.x - 0.3).abs() < 0.05, "best x {}", best.x);
    }

    #[test]
    fn evolve_with_empty_population_is_none() {
        let mut rng = StdRng::seed_from_u64(1);
        let params = EvolutionParams {
            population: 0,
            ..EvolutionParams::default()
        };
        assert!(evolve::<Point, (), _>(&(), &params, &mut rng).is_none());
    }

    #[test]
    fn bounds_follow_palette_size() {
        let pixels = noisy_image(16, 16);
        let small = TuningProblem::new(&pixels, &QuantizeConfig::new().max_colors(16));
        assert_eq!(small.bounds(), (0.0111, 0.04));
        let large = TuningProblem::new(&pixels, &QuantizeConfig::new().max_colors(256));
        assert_eq!(large.bounds(), (0.85, 1.0));
    }

    #[test]
    fn candidates_snap_and_clamp() {
        let pixels = noisy_image(8, 8);
        let problem = TuningProblem::new(&pixels, &QuantizeConfig::new().max_colors(256));
        let c = problem.candidate(0.9, 0.95);
        assert_eq!(c.ratio_x, c.ratio_y);
        let c = problem.candidate(0.2, 3.0);
        assert_eq!((c.ratio_x, c.ratio_y), (0.85, 1.0));
    }

    #[test]
    fn nearby_ratios_share_a_memo_entry() {
        let pixels = noisy_image(32, 32);
        let problem = TuningProblem::new(&pixels, &QuantizeConfig::new().max_colors(16));
        let a = problem.objectives(0.02, 0.02);
        let b = problem.objectives(0.020_000_01, 0.020_000_01);
        assert_eq!(a, b);
        assert_eq!(problem.memo_len(), 1);
    }

    #[test]
    fn optimize_is_deterministic_and_in_bounds() {
        let pixels = noisy_image(24, 24);
        let config = QuantizeConfig::new().max_colors(16);
        let a = optimize(&pixels, 24, 24, &config).unwrap();
        let b = optimize(&pixels, 24, 24, &config).unwrap();
        assert_eq!(a, b);
        assert!(a.fitness <= 0.0);
        assert!((0.0111..=0.04).contains(&a.ratio_x), "{a:?}");
        assert!((0.0111..=0.04).contains(&a.ratio_y), "{a:?}");
    }

    #[test]
    fn optimize_rejects_bad_input() {
        let config = QuantizeConfig::new().max_colors(16);
        assert!(optimize(&[0xFF00_0000; 3], 2, 2, &config).is_err());
    }
}
