//! Glyph width measurement. The trail mapper only needs to know how wide a
//! character is at a given size; [`GlyphMetrics`] is that seam.

use font_kit::family_name::FamilyName;
use font_kit::font::Font;
use font_kit::properties::Properties;
use font_kit::source::SystemSource;
use pathfinder_geometry::vector::Vector2F;
use std::cell::Cell;
use tracing::{debug, warn};

use crate::errors::TypographyError;

/// Anything that can tell how wide a character renders at a font size.
pub trait GlyphMetrics {
    /// Horizontal advance of `glyph` at `size` (in the same units as `size`).
    fn advance(&self, glyph: char, size: f64) -> f64;
}

/// Every glyph is `ratio * size` wide. Deterministic, needs no font files.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMetrics {
    ratio: f64,
}

impl FixedAdvanceMetrics {
    pub fn new(ratio: f64) -> Self {
        FixedAdvanceMetrics { ratio }
    }
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        // Roughly the average advance of a serif face.
        FixedAdvanceMetrics::new(0.5)
    }
}

impl GlyphMetrics for FixedAdvanceMetrics {
    fn advance(&self, _glyph: char, size: f64) -> f64 {
        self.ratio * size
    }
}

/// Width ratio used for glyphs the loaded font cannot measure.
const FALLBACK_ADVANCE_RATIO: f64 = 0.5;

/// Glyph advances read from a real font through font-kit. Glyphs the font
/// cannot measure (not even as a space) get `0.5 * size`, and the first such
/// miss is logged.
#[derive(Clone, Debug)]
pub struct FontKitMetrics {
    font: Font,
    units_per_em: f64,
    warned: Cell<bool>,
}

impl FontKitMetrics {
    /// Find the best system match for `family`, falling back to any serif face.
    pub fn from_family(family: &str) -> Result<Self, TypographyError> {
        let handle = SystemSource::new().select_best_match(
            &[FamilyName::Title(family.to_string()), FamilyName::Serif],
            &Properties::new(),
        )?;
        let font = handle.load()?;
        debug!("Loaded font {} for family {}", font.full_name(), family);
        Ok(FontKitMetrics::from_font(font))
    }

    pub fn from_font(font: Font) -> Self {
        let units_per_em = f64::from(font.metrics().units_per_em.max(1));
        FontKitMetrics {
            font,
            units_per_em,
            warned: Cell::new(false),
        }
    }

    fn raw_advance(&self, glyph: char) -> Result<Vector2F, TypographyError> {
        let id = self
            .font
            .glyph_for_char(glyph)
            .or_else(|| self.font.glyph_for_char(' '))
            .ok_or(TypographyError::GlyphNotFound(glyph))?;
        self.font
            .advance(id)
            .map_err(|_| TypographyError::GlyphNotFound(glyph))
    }
}

fn scaled_advance(raw: &Result<Vector2F, TypographyError>, units_per_em: f64, size: f64) -> f64 {
    match raw {
        Ok(advance) => f64::from(advance.x()) / units_per_em * size,
        Err(_) => FALLBACK_ADVANCE_RATIO * size,
    }
}

impl GlyphMetrics for FontKitMetrics {
    fn advance(&self, glyph: char, size: f64) -> f64 {
        let raw = self.raw_advance(glyph);
        if let Err(err) = &raw {
            if !self.warned.replace(true) {
                warn!("Measuring with a fixed width: {}", err);
            }
        }
        scaled_advance(&raw, self.units_per_em, size)
    }
}
