//! CLI enum types for shape and palette options.

use clap::ValueEnum;

use crate::projector::Palette;

/// Which projector to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    /// Spinning wireframe cube
    Logo,
    /// Flickering particle flame
    Flame,
}

impl Shape {
    pub fn name(&self) -> &'static str {
        match self {
            Shape::Logo => "logo",
            Shape::Flame => "flame",
        }
    }
}

/// Built-in character palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaletteArg {
    Shade,
    Flame,
    Blocks,
    Minimal,
}

impl From<PaletteArg> for Palette {
    fn from(p: PaletteArg) -> Self {
        match p {
            PaletteArg::Shade => Palette::Shade,
            PaletteArg::Flame => Palette::Flame,
            PaletteArg::Blocks => Palette::Blocks,
            PaletteArg::Minimal => Palette::Minimal,
        }
    }
}
