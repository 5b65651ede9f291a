use unicode_script::{Script, UnicodeScript};

/// Number of characters drawn on an avatar.
pub const MAX_GLYPHS: usize = 2;

/// True when any character of `name` belongs to the Han script.
pub fn is_han(name: &str) -> bool {
    name.chars().any(|c| c.script() == Script::Han)
}

/// Reduces a display name to the characters drawn on its avatar.
///
/// Short names are kept whole. Longer names keep their last two characters
/// when they contain Han script (family name first, so `巩祥啊` -> `祥啊`),
/// and their first two otherwise (`Kevin.Gong` -> `Ke`).
pub fn glyph_string(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();

    if chars.len() <= MAX_GLYPHS {
        return name.to_string();
    }

    if is_han(name) {
        chars[chars.len() - MAX_GLYPHS..].iter().collect()
    } else {
        chars[..MAX_GLYPHS].iter().collect()
    }
}
