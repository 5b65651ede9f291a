pub mod avatar_generator;
pub mod validation;
