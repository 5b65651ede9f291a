pub mod app;
pub mod config;
pub mod telemetry;

pub use app::{
    error::AvatarError,
    utils::avatar_generator::{AvatarGenerator, GeneratorOptions},
};
