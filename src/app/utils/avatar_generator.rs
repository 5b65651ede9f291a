//! Circular initials avatars.
//!
//! One [`AvatarGenerator`] owns a canvas, a font and the background color
//! rotation. Every call to [`AvatarGenerator::generate`] clears the canvas,
//! fills a circle with the next palette color, draws up to two characters of
//! the name in white at the center and writes the result as `<glyphs>.png`.
//!
//! The whole sequence runs under one lock, so a generator can be shared
//! between threads; concurrent calls are serialized and take colors in lock
//! acquisition order.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::app::{
    canvas::Canvas,
    error::AvatarError,
    font::{FontFace, GlyphSource},
    glyphs::glyph_string,
    palette::{ColorRotation, Rgb},
    storage::{disk::OutputDir, path::AvatarFile},
    utils::validation::ensure_positive,
};

/// Horizontal and vertical anchor of the text inside its own bounding box.
const TEXT_ANCHOR: (f32, f32) = (0.5, 0.5);

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub radius: f32,
    pub output_dir: OutputDir,
}

impl GeneratorOptions {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            output_dir: OutputDir::current(),
        }
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = OutputDir::new(dir);
        self
    }
}

struct Studio {
    canvas: Canvas,
    glyphs: Box<dyn GlyphSource>,
    colors: ColorRotation,
    output: OutputDir,
}

/// The default value is an uninitialized generator: it owns no canvas or
/// font and every [`generate`](Self::generate) call fails.
#[derive(Default)]
pub struct AvatarGenerator {
    radius: f32,
    studio: Mutex<Option<Studio>>,
}

impl AvatarGenerator {
    /// Loads the font at `font_face_path` and writes avatars into the current
    /// directory.
    pub fn new(
        radius: f32,
        font_face_path: impl AsRef<Path>,
        font_face_points: f32,
    ) -> Result<Self, AvatarError> {
        let font = FontFace::load(font_face_path, font_face_points)?;

        Self::with_options(GeneratorOptions::new(radius), Box::new(font))
    }

    #[tracing::instrument(name = "Building avatar generator", skip(glyphs))]
    pub fn with_options(
        options: GeneratorOptions,
        glyphs: Box<dyn GlyphSource>,
    ) -> Result<Self, AvatarError> {
        ensure_positive("radius", options.radius)?;

        let studio = Studio {
            canvas: Canvas::for_radius(options.radius)?,
            glyphs,
            colors: ColorRotation::new()?,
            output: options.output_dir,
        };

        Ok(Self {
            radius: options.radius,
            studio: Mutex::new(Some(studio)),
        })
    }

    /// Draws the avatar for `name` and returns the path it was written to.
    #[tracing::instrument(name = "Generating avatar", skip(self))]
    pub fn generate(&self, name: &str) -> Result<PathBuf, AvatarError> {
        // A panic mid-draw leaves nothing behind that the next reset won't clear.
        let mut guard = self.studio.lock().unwrap_or_else(PoisonError::into_inner);
        let studio = guard.as_mut().ok_or(AvatarError::Uninitialized)?;

        let r = self.radius;
        let (ax, ay) = TEXT_ANCHOR;

        studio.canvas.reset();

        let (index, background) = studio.colors.advance();
        studio.canvas.fill_circle(r, r, r, background);

        let glyphs = glyph_string(name);
        studio.canvas.draw_text_anchored(
            studio.glyphs.as_ref(),
            &glyphs,
            r,
            r,
            ax,
            ay,
            Rgb::WHITE,
        );
        studio.canvas.stroke_text();

        tracing::debug!(%glyphs, color_index = index, %background, "avatar drawn");

        let file = AvatarFile::for_glyphs(&glyphs)?;
        let png = studio.canvas.encode_png()?;
        let path = studio.output.persist(&file, &png)?;

        tracing::info!(path = %path.display(), "avatar generated");

        Ok(path)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_ready(&self) -> bool {
        self.lock().is_some()
    }

    /// Side of the square canvas in pixels, `None` when uninitialized.
    pub fn size(&self) -> Option<u32> {
        self.lock().as_ref().map(|studio| studio.canvas.side())
    }

    /// Palette index the next avatar will use, `None` when uninitialized.
    pub fn palette_cursor(&self) -> Option<usize> {
        self.lock().as_ref().map(|studio| studio.colors.cursor())
    }

    /// Restarts the color rotation at the first palette entry.
    pub fn reset_palette(&self) {
        if let Some(studio) = self.lock().as_mut() {
            studio.colors.reset();
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Studio>> {
        self.studio.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for AvatarGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarGenerator")
            .field("radius", &self.radius)
            .field("ready", &self.is_ready())
            .finish()
    }
}
