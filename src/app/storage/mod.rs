pub mod disk;
pub mod path;
