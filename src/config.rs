use std::path::PathBuf;

#[derive(clap::Parser, Debug, Clone)]
#[command(name = "avatar-gen", version, about = "Draws circular initials avatars as PNG files")]
pub struct AppConfig {
    /// Circle radius in pixels, the image is twice as wide
    #[clap(long, env = "AVATAR_RADIUS", default_value_t = 64.0)]
    pub radius: f32,

    /// TrueType or OpenType font used for the initials
    #[clap(long, env = "AVATAR_FONT_PATH")]
    pub font_path: PathBuf,

    #[clap(long, env = "AVATAR_FONT_POINTS", default_value_t = 48.0)]
    pub font_points: f32,

    /// Directory the PNG files are written into
    #[clap(long, env = "AVATAR_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Filter used when `RUST_LOG` is not set
    #[clap(long, env = "AVATAR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    #[clap(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Display names to draw avatars for
    #[clap(required = true)]
    pub names: Vec<String>,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab_case")]
pub enum Format {
    Text,
    Json,
}
