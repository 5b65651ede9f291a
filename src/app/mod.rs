use anyhow::Context;
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};

pub mod canvas;
pub mod error;
pub mod font;
pub mod glyphs;
pub mod palette;
pub mod storage;
pub mod utils;

use crate::{config::AppConfig, telemetry::spawn_blocking_with_tracing};
use font::FontFace;
use utils::avatar_generator::{AvatarGenerator, GeneratorOptions};

pub struct Application {
    generator: Arc<AvatarGenerator>,
}

/// Outcome of one name, in the shape printed by `--format json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub name: String,
    pub glyphs: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl Application {
    #[tracing::instrument(name = "Building application", skip_all)]
    pub fn build(config: &AppConfig) -> Result<Self, anyhow::Error> {
        let font = FontFace::load(&config.font_path, config.font_points)
            .with_context(|| format!("failed to load {}", config.font_path.display()))?;

        tracing::info!(
            font = %config.font_path.display(),
            points = font.points(),
            radius = config.radius,
            "font loaded"
        );

        let options = GeneratorOptions::new(config.radius).output_dir(&config.output_dir);
        let generator = AvatarGenerator::with_options(options, Box::new(font))
            .context("failed to build avatar generator")?;

        Ok(Self::new(Arc::new(generator)))
    }

    pub fn new(generator: Arc<AvatarGenerator>) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &Arc<AvatarGenerator> {
        &self.generator
    }

    /// Generates every name, in order, in one blocking task against the
    /// shared generator. Background colors follow the order of `names`.
    #[tracing::instrument(name = "Generating avatars", skip_all, fields(count = names.len()))]
    pub async fn run(&self, names: Vec<String>) -> Result<Vec<Report>, anyhow::Error> {
        let generator = Arc::clone(&self.generator);

        spawn_blocking_with_tracing(move || {
            names
                .into_iter()
                .map(|name| render(&generator, name))
                .collect::<Vec<Report>>()
        })
        .await
        .context("panic in generating avatars")
    }
}

fn render(generator: &AvatarGenerator, name: String) -> Report {
    let glyphs = glyphs::glyph_string(&name);

    match generator.generate(&name) {
        Ok(path) => Report {
            name,
            glyphs,
            path: Some(path),
            error: None,
        },
        Err(e) => {
            tracing::error!(%name, error = %e, "failed to generate avatar");
            Report {
                name,
                glyphs,
                path: None,
                error: Some(e.to_string()),
            }
        }
    }
}
