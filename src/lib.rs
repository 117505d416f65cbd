pub mod config;
pub mod draw;
pub mod glyph;
pub mod icon_gen;

pub use glyph::{create_icon, create_icon_with};
