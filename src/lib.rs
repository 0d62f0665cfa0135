#![forbid(unsafe_code)]

//! Palette quantization with pairwise-nearest-neighbor reduction.
//!
//! The pipeline buckets pixels into a histogram, merges bins until the
//! requested palette size is reached, then assigns every pixel an index,
//! optionally diffusing error along a space-filling curve.

pub mod blue_noise;
mod blue_noise_matrix;
pub mod color;
pub mod dither;
pub mod error;
pub mod gilbert;
mod histogram;
pub mod palette;
mod pnn;
pub mod remap;
mod saliency;
mod session;
pub mod tune;

pub use color::{ciede2000, from_lab, to_lab, Lab};
pub use error::QuantizeError;
pub use palette::Palette;
pub use remap::ColorIndexer;
pub use tune::{optimize, TunedRatios};

use imgref::ImgRef;
use rgb::RGBA8;

use crate::color::pack_argb;
use crate::dither::DitherParams;
use crate::remap::Remapper;
use crate::session::{ImageStats, Session};

/// Largest palette the index type can address.
pub const MAX_COLORS: u32 = 1 << 16;

/// Space in which bins are averaged and compared during reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    /// Weighted squared distance over raw R, G, B (and alpha).
    Rgb,
    /// CIELAB means, CIEDE2000-based merge cost.
    #[default]
    Lab,
}

/// Per-channel weights for RGB distances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelWeights {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ChannelWeights {
    /// Rec. 709 luma coefficients.
    pub const LUMA: Self = Self {
        r: 0.2126,
        g: 0.7152,
        b: 0.0722,
        a: 0.3333,
    };

    pub const UNIFORM: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
}

/// Configuration for palette quantization.
#[derive(Debug, Clone)]
pub struct QuantizeConfig {
    /// Maximum number of palette colors (2..=65536).
    pub max_colors: u32,
    /// Diffuse quantization error along a Hilbert curve.
    pub dither: bool,
    pub metric: Metric,
    /// Override the channel weights. If None, luma weights are used for
    /// palettes above 32 colors and uniform weights otherwise.
    pub weights: Option<ChannelWeights>,
    /// Pixels with alpha at or below this are treated as fully transparent.
    pub alpha_threshold: u8,
    /// Fixed (lightness, chroma) blend ratios in (0, 1]. If None, they are
    /// derived from the histogram.
    pub ratios: Option<(f64, f64)>,
    /// Search for the best blend ratios before quantizing. Slow.
    pub auto_tune: bool,
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            max_colors: 256,
            dither: true,
            metric: Metric::Lab,
            weights: None,
            alpha_threshold: 0,
            ratios: None,
            auto_tune: false,
        }
    }
}

impl QuantizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_colors(mut self, n: u32) -> Self {
        self.max_colors = n;
        self
    }

    pub fn dither(mut self, enabled: bool) -> Self {
        self.dither = enabled;
        self
    }

    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn weights(mut self, weights: ChannelWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    pub fn ratios(mut self, ratio_x: f64, ratio_y: f64) -> Self {
        self.ratios = Some((ratio_x, ratio_y));
        self
    }

    pub fn auto_tune(mut self, enabled: bool) -> Self {
        self.auto_tune = enabled;
        self
    }
}

/// Quantization result.
#[derive(Debug)]
pub struct QuantizeResult {
    palette: Palette,
    indices: Vec<u16>,
    requested_colors: u32,
    error_estimate: f64,
}

impl QuantizeResult {
    /// Palette entries. Entry 0 is the transparent color when there is one.
    pub fn palette(&self) -> &[RGBA8] {
        self.palette.entries()
    }

    /// Palette entries as packed `0xAARRGGBB`.
    pub fn palette_argb(&self) -> &[u32] {
        self.palette.entries_argb()
    }

    /// One palette index per pixel, row-major.
    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn transparent_index(&self) -> Option<u16> {
        self.palette.transparent_index()
    }

    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    pub fn requested_colors(&self) -> u32 {
        self.requested_colors
    }

    /// The image had fewer distinct colors than requested, so the palette
    /// is shorter than `max_colors`.
    pub fn is_reduced_palette(&self) -> bool {
        self.palette.len() < self.requested_colors as usize
    }

    /// Total cost of all bin merges. Zero when the palette is exact.
    pub fn error_estimate(&self) -> f64 {
        self.error_estimate
    }
}

/// Quantize packed `0xAARRGGBB` pixels.
pub fn quantize(
    pixels: &[u32],
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    validate_inputs(pixels.len(), width, height, config)?;
    Ok(run(pixels, width, height, config))
}

/// Quantize an RGBA image.
pub fn quantize_rgba(
    pixels: &[RGBA8],
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    validate_inputs(pixels.len(), width, height, config)?;
    let packed: Vec<u32> = pixels.iter().map(|&p| pack_argb(p)).collect();
    Ok(run(&packed, width, height, config))
}

/// Quantize a (possibly strided) image view.
pub fn quantize_img(
    img: ImgRef<'_, RGBA8>,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    let (width, height) = (img.width(), img.height());
    let packed: Vec<u32> = img.rows().flat_map(|row| row.iter().map(|&p| pack_argb(p))).collect();
    validate_inputs(packed.len(), width, height, config)?;
    Ok(run(&packed, width, height, config))
}

fn run(pixels: &[u32], width: usize, height: usize, config: &QuantizeConfig) -> QuantizeResult {
    let config = if config.auto_tune && config.ratios.is_none() {
        let tuned = tune::optimize_validated(pixels, config);
        config.clone().ratios(tuned.ratio_x, tuned.ratio_y)
    } else {
        config.clone()
    };

    let max_colors = config.max_colors as usize;
    let stats = ImageStats::scan(pixels, config.alpha_threshold);
    let mut session = Session::new(&config, stats, max_colors);

    let reduction = pnn::reduce(&mut session, pixels, max_colors);
    let palette = Palette::from_argb(reduction.palette, stats.transparent.is_some());
    if palette.len() < max_colors {
        tracing::info!(
            requested = max_colors,
            produced = palette.len(),
            "image has fewer colors than requested"
        );
    }

    let saliency = (config.dither && palette.len() <= 32)
        .then(|| saliency::saliency_map(&mut session, pixels));
    let params = DitherParams {
        weight: reduction.weight,
        has_alpha: stats.has_alpha(),
        alpha_threshold: config.alpha_threshold,
        dither: config.dither,
    };
    tracing::debug!(
        colors = palette.len(),
        weight = params.weight,
        dither = params.dither,
        "remapping pixels"
    );

    let indices = {
        let mut remapper = Remapper::new(&palette, &mut session);
        dither::remap_image(pixels, width, height, &mut remapper, saliency.as_deref(), &params)
    };
    session.clear();

    QuantizeResult {
        palette,
        indices,
        requested_colors: config.max_colors,
        error_estimate: reduction.error,
    }
}

pub(crate) fn validate_inputs(
    pixel_count: usize,
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<(), QuantizeError> {
    if width == 0 || height == 0 {
        return Err(QuantizeError::ZeroDimension);
    }
    if width.checked_mul(height) != Some(pixel_count) {
        return Err(QuantizeError::DimensionMismatch {
            len: pixel_count,
            width,
            height,
        });
    }
    if config.max_colors < 2 || config.max_colors > MAX_COLORS {
        return Err(QuantizeError::InvalidMaxColors(config.max_colors));
    }
    if let Some((ratio_x, ratio_y)) = config.ratios {
        let valid = |r: f64| r.is_finite() && r > 0.0 && r <= 1.0;
        if !valid(ratio_x) || !valid(ratio_y) {
            return Err(QuantizeError::InvalidRatio { ratio_x, ratio_y });
        }
    }
    Ok(())
}
