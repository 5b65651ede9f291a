use crate::app::{error::AvatarError, utils::validation::is_safe_file_name};

pub const AVATAR_EXTENSION: &str = "png";

/// File name an avatar is stored under, `<glyphs>.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile(String);

impl AvatarFile {
    pub fn for_glyphs(glyphs: &str) -> Result<Self, AvatarError> {
        let name = format!("{}.{}", glyphs, AVATAR_EXTENSION);

        if !is_safe_file_name(&name) {
            return Err(AvatarError::InvalidFileName(name));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AvatarFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
