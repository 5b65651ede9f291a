use tiny_skia::{Color, FillRule, Paint, Pixmap, PremultipliedColorU8, Stroke, Transform};

use crate::app::{
    error::AvatarError,
    font::GlyphSource,
    palette::Rgb,
    utils::validation::{ensure_positive, field_error},
};

/// Largest canvas side in pixels, 256 MiB of RGBA.
pub const MAX_SIDE: u32 = 8192;

/// Square raster surface reused between avatars.
pub struct Canvas {
    pixmap: Pixmap,
    current_path: Option<tiny_skia::Path>,
    stroke: Option<(Paint<'static>, Stroke)>,
}

impl Canvas {
    /// Side is `2 * radius` rounded down, never less than one pixel nor more
    /// than [`MAX_SIDE`].
    pub fn for_radius(radius: f32) -> Result<Self, AvatarError> {
        ensure_positive("radius", radius)?;

        let side = (radius * 2.0).floor();
        if side > MAX_SIDE as f32 {
            return Err(field_error("radius", "too_large").into());
        }

        let side = (side as u32).max(1);
        let pixmap =
            Pixmap::new(side, side).ok_or_else(|| field_error("radius", "too_large"))?;

        Ok(Self {
            pixmap,
            current_path: None,
            stroke: None,
        })
    }

    pub fn side(&self) -> u32 {
        self.pixmap.width()
    }

    /// Clears every pixel to transparent black and drops the current path.
    pub fn reset(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        self.current_path = None;
    }

    pub fn fill_circle(&mut self, cx: f32, cy: f32, r: f32, color: Rgb) {
        let Some(circle) = tiny_skia::PathBuilder::from_circle(cx, cy, r) else {
            return;
        };

        self.pixmap.fill_path(
            &circle,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    /// Fills `text` so that the point at fraction `(ax, ay)` of its bounding
    /// box lands on `(x, y)`. `(0.5, 0.5)` centers it.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text_anchored(
        &mut self,
        glyphs: &dyn GlyphSource,
        text: &str,
        x: f32,
        y: f32,
        ax: f32,
        ay: f32,
        color: Rgb,
    ) {
        let Some(outline) = glyphs.outline(text) else {
            self.current_path = None;
            return;
        };

        let bounds = outline.bounds();
        let dx = x - (bounds.left() + ax * bounds.width());
        let dy = y - (bounds.top() + ay * bounds.height());
        let Some(placed) = outline.transform(Transform::from_translate(dx, dy)) else {
            self.current_path = None;
            return;
        };

        self.pixmap.fill_path(
            &placed,
            &solid(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        self.current_path = Some(placed);
    }

    /// Style for the outline pass of [`stroke_text`](Self::stroke_text).
    /// Unset by default, which leaves the pass without visible effect.
    pub fn set_stroke(&mut self, color: Rgb, width: f32) {
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.stroke = Some((solid(color), stroke));
    }

    /// Outlines the last drawn text with the stroke style, if one is set.
    /// The current path is consumed either way.
    pub fn stroke_text(&mut self) {
        let Some(path) = self.current_path.take() else {
            return;
        };

        if let Some((paint, stroke)) = &self.stroke {
            self.pixmap
                .stroke_path(&path, paint, stroke, Transform::identity(), None);
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, AvatarError> {
        self.pixmap
            .encode_png()
            .map_err(|e| AvatarError::Encode(e.to_string()))
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }
}

fn solid(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 0xFF);
    paint.anti_alias = true;
    paint
}
