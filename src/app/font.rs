//! Font loading and text outlines.
//!
//! Text is laid out on a single baseline without shaping: every character is
//! mapped through the font's cmap (missing characters fall back to `.notdef`)
//! and the pen advances by the glyph's advance width. Outlines come back in
//! canvas orientation (y grows downwards) with the baseline at `y = 0`.

use skrifa::instance::{LocationRef, Size};
use skrifa::outline::{DrawSettings, OutlinePen};
use skrifa::raw::{FileRef, FontRef, TableProvider};
use skrifa::MetadataProvider;
use std::path::Path;
use tiny_skia::PathBuilder;

use crate::app::{error::AvatarError, utils::validation::ensure_positive};

/// Produces the filled outline of a run of text.
pub trait GlyphSource: Send {
    /// Returns `None` when nothing in `text` has ink.
    fn outline(&self, text: &str) -> Option<tiny_skia::Path>;
}

/// A font file held in memory together with the size it is drawn at.
pub struct FontFace {
    data: Vec<u8>,
    size: Size,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("bytes", &self.data.len())
            .field("points", &self.size.ppem())
            .finish()
    }
}

impl FontFace {
    #[tracing::instrument(name = "Loading font face", skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>, points: f32) -> Result<Self, AvatarError> {
        let path = path.as_ref();
        ensure_positive("font_face_points", points)?;

        let data = std::fs::read(path)
            .map_err(|e| AvatarError::font_load(path.display().to_string(), e))?;

        Self::parse(data, points, &path.display().to_string())
    }

    pub fn from_bytes(data: Vec<u8>, points: f32) -> Result<Self, AvatarError> {
        ensure_positive("font_face_points", points)?;

        Self::parse(data, points, "memory")
    }

    fn parse(data: Vec<u8>, points: f32, origin: &str) -> Result<Self, AvatarError> {
        {
            let font = to_font_ref(&data).map_err(|e| AvatarError::font_load(origin, e))?;
            font.cmap().map_err(|e| AvatarError::font_load(origin, e))?;
        }

        tracing::debug!(bytes = data.len(), points, "font face parsed");

        Ok(Self {
            data,
            size: Size::new(points),
        })
    }

    pub fn points(&self) -> f32 {
        self.size.ppem().unwrap_or_default()
    }
}

impl GlyphSource for FontFace {
    fn outline(&self, text: &str) -> Option<tiny_skia::Path> {
        let font = to_font_ref(&self.data).ok()?;
        let location = LocationRef::default();
        let charmap = font.charmap();
        let metrics = font.glyph_metrics(self.size, location);
        let outlines = font.outline_glyphs();

        let mut pen = PathPen::default();
        for ch in text.chars() {
            let gid = charmap.map(ch).unwrap_or_default();

            if let Some(glyph) = outlines.get(gid) {
                let settings = DrawSettings::unhinted(self.size, location);
                if let Err(e) = glyph.draw(settings, &mut pen) {
                    tracing::warn!(%ch, error = %e, "failed to draw glyph outline");
                }
            }

            pen.origin_x += metrics.advance_width(gid).unwrap_or_default();
        }

        pen.builder.finish()
    }
}

/// First face of a font file or collection.
fn to_font_ref(data: &[u8]) -> Result<FontRef<'_>, skrifa::raw::ReadError> {
    match FileRef::new(data)? {
        FileRef::Font(font) => Ok(font),
        FileRef::Collection(collection) => collection.get(0),
    }
}

/// Feeds skrifa outlines into a tiny-skia path, flipping y.
#[derive(Default)]
struct PathPen {
    builder: PathBuilder,
    origin_x: f32,
}

impl OutlinePen for PathPen {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(self.origin_x + x, -y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(self.origin_x + x, -y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.builder
            .quad_to(self.origin_x + cx0, -cy0, self.origin_x + x, -y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(
            self.origin_x + cx0,
            -cy0,
            self.origin_x + cx1,
            -cy1,
            self.origin_x + x,
            -y,
        );
    }

    fn close(&mut self) {
        self.builder.close();
    }
}
