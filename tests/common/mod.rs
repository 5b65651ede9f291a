#![allow(dead_code)]

use avatar_gen::{
    app::{font::GlyphSource, palette::Rgb},
    telemetry::{build_telemetry, register_telemetry},
    AvatarGenerator, GeneratorOptions,
};
use std::{
    path::{Path, PathBuf},
    sync::{Arc, LazyLock},
};
use tiny_skia::{PathBuilder, Pixmap, Rect};
use uuid::Uuid;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "debug".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::stdout);
        register_telemetry(telemetry);
    } else {
        let null_telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::sink);
        register_telemetry(null_telemetry);
    };
});

/// Fonts tried for the end-to-end tests, first hit wins.
const SYSTEM_FONTS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Glyph source drawing one solid 12x16 block per non-whitespace character.
/// Blocks touch, so any run of characters is a single solid rectangle.
pub struct Blocks;

pub const BLOCK_WIDTH: f32 = 12.0;
pub const BLOCK_HEIGHT: f32 = 16.0;

impl GlyphSource for Blocks {
    fn outline(&self, text: &str) -> Option<tiny_skia::Path> {
        let mut pb = PathBuilder::new();
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = i as f32 * BLOCK_WIDTH;
            let rect = Rect::from_xywh(x, -BLOCK_HEIGHT, BLOCK_WIDTH, BLOCK_HEIGHT)?;
            pb.push_rect(rect);
        }
        pb.finish()
    }
}

pub struct TestGenerator {
    pub generator: Arc<AvatarGenerator>,
    pub output_dir: PathBuf,
}

impl Drop for TestGenerator {
    fn drop(&mut self) {
        _ = std::fs::remove_dir_all(&self.output_dir);
    }
}

/// Fresh output directory under the OS temp dir for test isolation.
pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("avatar-gen-test-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("failed to create scratch directory");
    dir
}

pub fn spawn_generator(radius: f32) -> TestGenerator {
    LazyLock::force(&TELEMETRY);

    let output_dir = scratch_dir();
    let options = GeneratorOptions::new(radius).output_dir(&output_dir);
    let generator = AvatarGenerator::with_options(options, Box::new(Blocks))
        .expect("failed to build generator");

    TestGenerator {
        generator: Arc::new(generator),
        output_dir,
    }
}

pub fn system_font() -> Option<PathBuf> {
    LazyLock::force(&TELEMETRY);

    SYSTEM_FONTS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

pub fn load_png(path: &Path) -> Pixmap {
    Pixmap::load_png(path).expect("failed to decode png")
}

pub fn rgba(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
    let px = pixmap.pixel(x, y).expect("pixel out of bounds").demultiply();
    [px.red(), px.green(), px.blue(), px.alpha()]
}

pub fn opaque(color: Rgb) -> [u8; 4] {
    [color.r, color.g, color.b, 0xFF]
}

/// Points well inside the circle and away from the centered text.
pub fn ring_samples(radius: u32) -> [(u32, u32); 4] {
    let near = 3;
    let far = radius * 2 - 4;
    [(radius, near), (radius, far), (near, radius), (far, radius)]
}

pub fn corners(radius: u32) -> [(u32, u32); 4] {
    let last = radius * 2 - 1;
    [(0, 0), (last, 0), (0, last), (last, last)]
}
