use rgb::RGBA8;

use crate::color::{to_lab, unpack_argb, Lab};

/// An ordered list of output colors with their Lab coordinates precomputed.
#[derive(Debug, Clone)]
pub struct Palette {
    /// Packed ARGB entries.
    entries_argb: Vec<u32>,
    entries_rgba: Vec<RGBA8>,
    entries_lab: Vec<Lab>,
    /// Slot reserved for the transparent color, if any.
    transparent_index: Option<u16>,
}

impl Palette {
    /// Build a palette from packed ARGB colors. When `has_transparency` is
    /// set, entry 0 must already be the transparent color.
    pub fn from_argb(entries_argb: Vec<u32>, has_transparency: bool) -> Self {
        let entries_rgba: Vec<RGBA8> = entries_argb.iter().map(|&c| unpack_argb(c)).collect();
        let entries_lab = entries_rgba.iter().map(|&c| to_lab(c)).collect();
        let transparent_index = (has_transparency && !entries_argb.is_empty()).then_some(0);
        Self {
            entries_argb,
            entries_rgba,
            entries_lab,
            transparent_index,
        }
    }

    pub fn entries(&self) -> &[RGBA8] {
        &self.entries_rgba
    }

    pub fn entries_argb(&self) -> &[u32] {
        &self.entries_argb
    }

    #[inline]
    pub fn color(&self, idx: u16) -> RGBA8 {
        self.entries_rgba[idx as usize]
    }

    #[inline]
    pub fn lab(&self, idx: u16) -> Lab {
        self.entries_lab[idx as usize]
    }

    pub fn transparent_index(&self) -> Option<u16> {
        self.transparent_index
    }

    pub fn len(&self) -> usize {
        self.entries_argb.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries_argb.is_empty()
    }

    /// Indices a visible pixel may map to.
    pub(crate) fn opaque_range(&self) -> std::ops::Range<usize> {
        let start = usize::from(self.transparent_index.is_some());
        start..self.len()
    }
}
