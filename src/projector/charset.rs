//! Character palettes for shading.
//!
//! Every palette is ordered from lightest to densest.

/// Depth-shading ramp for wireframe segments (10 levels).
pub const SHADE_CHARSET: &[char] = &['.', ':', '-', '~', '=', '+', '*', '#', '%', '@'];

/// Particle palette for the flame (5 levels).
pub const FLAME_CHARSET: &[char] = &['.', ':', '*', '@', '#'];

/// Block characters, light to full.
pub const BLOCKS_CHARSET: &[char] = &['░', '▒', '▓', '█'];

/// Minimal palette for a cleaner look.
pub const MINIMAL_CHARSET: &[char] = &['.', ':', '#'];

/// Named palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// 10-level ramp used for wireframe shading
    #[default]
    Shade,
    /// 5-level flame palette
    Flame,
    /// Unicode block characters
    Blocks,
    /// 3-level palette
    Minimal,
}

impl Palette {
    pub fn chars(&self) -> &'static [char] {
        match self {
            Palette::Shade => SHADE_CHARSET,
            Palette::Flame => FLAME_CHARSET,
            Palette::Blocks => BLOCKS_CHARSET,
            Palette::Minimal => MINIMAL_CHARSET,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Palette::Shade => "shade",
            Palette::Flame => "flame",
            Palette::Blocks => "blocks",
            Palette::Minimal => "minimal",
        }
    }

    /// Look up a palette by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "shade" => Some(Palette::Shade),
            "flame" => Some(Palette::Flame),
            "blocks" => Some(Palette::Blocks),
            "minimal" => Some(Palette::Minimal),
            _ => None,
        }
    }
}

/// Characters for a configured palette string.
///
/// A built-in palette name selects that palette; anything else is used
/// literally, one character per level.
pub fn resolve_palette(value: &str) -> Vec<char> {
    match Palette::from_name(value) {
        Some(palette) => palette.chars().to_vec(),
        None => value.chars().collect(),
    }
}

/// Pick the palette entry for a depth value.
///
/// `depth / shade_depth` is scaled onto the palette indices and clamped, so
/// any depth beyond `shade_depth` gets the densest character.
pub fn shade_for_depth(palette: &[char], depth: f64, shade_depth: f64) -> Option<char> {
    let last = palette.len().checked_sub(1)?;
    let scaled = (depth / shade_depth * palette.len() as f64).floor();
    // NaN falls through to index 0
    let idx = if scaled >= last as f64 {
        last
    } else if scaled > 0.0 {
        scaled as usize
    } else {
        0
    };
    Some(palette[idx])
}
