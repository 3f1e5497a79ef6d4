//! Character grid produced by the projector.

/// Fill character for cells no sample has reached.
pub const BLANK: char = ' ';

/// Row-major character grid.
///
/// Every cell always holds exactly one character; cells nothing was drawn
/// into hold [`BLANK`]. The grid is reused between frames via [`Grid::clear`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    chars: Vec<char>,
    width: u16,
    height: u16,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl Grid {
    /// Create a blank grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            chars: vec![BLANK; size],
            width,
            height,
        }
    }

    /// Create a grid from existing row-major characters.
    ///
    /// Returns `None` if the length does not match `width * height`.
    pub fn from_chars(chars: Vec<char>, width: u16, height: u16) -> Option<Self> {
        if chars.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            chars,
            width,
            height,
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Row-major character data.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Reset every cell to blank without reallocating.
    pub fn clear(&mut self) {
        self.chars.fill(BLANK);
    }

    /// Index of `(x, y)` if it lies inside the grid.
    pub fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<char> {
        self.index_of(x, y).map(|i| self.chars[i])
    }

    /// Write a character at a flat index. Out-of-range indices are ignored.
    pub fn set_at(&mut self, idx: usize, c: char) {
        if let Some(cell) = self.chars.get_mut(idx) {
            *cell = c;
        }
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.chars.iter().filter(|&&c| c != BLANK).count()
    }

    /// Iterate over rows as character slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks() panics on 0; a zero-width grid has no rows to yield anyway
        self.chars.chunks(self.width.max(1) as usize)
    }

    /// Serialize the grid: each row joined, rows separated by newlines.
    pub fn to_string_display(&self) -> String {
        if self.width == 0 || self.height == 0 {
            return String::new();
        }

        self.rows()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_string_display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new() {
        let grid = Grid::new(20, 10);
        assert_eq!(grid.width(), 20);
        assert_eq!(grid.height(), 10);
        assert_eq!(grid.chars().len(), 200);
        assert!(grid.chars().iter().all(|&c| c == BLANK));
        assert_eq!(grid.filled(), 0);
    }

    #[test]
    fn test_grid_default() {
        let grid = Grid::default();
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
        assert!(grid.chars().is_empty());
    }

    #[test]
    fn test_grid_from_chars() {
        let chars = vec!['#', '.', ':', '#', '.', ':'];
        let grid = Grid::from_chars(chars.clone(), 3, 2).unwrap();
        assert_eq!(grid.chars(), &chars[..]);
        assert!(Grid::from_chars(chars, 4, 2).is_none());
    }

    #[test]
    fn test_grid_to_string_display() {
        let grid = Grid::from_chars(vec!['#', '.', ':', '@', '*', '+'], 3, 2).unwrap();
        assert_eq!(grid.to_string_display(), "#.:\n@*+");
        assert_eq!(grid.to_string(), "#.:\n@*+");
    }

    #[test]
    fn test_grid_to_string_display_empty() {
        assert_eq!(Grid::new(0, 0).to_string_display(), "");
        assert_eq!(Grid::new(5, 0).to_string_display(), "");
    }

    #[test]
    fn test_grid_blank_rows_keep_width() {
        let s = Grid::new(4, 3).to_string_display();
        let lines: Vec<&str> = s.split('\n').collect();
        assert_eq!(lines, vec!["    ", "    ", "    "]);
    }

    #[test]
    fn test_grid_index_bounds() {
        let grid = Grid::new(3, 2);
        assert_eq!(grid.index_of(0, 0), Some(0));
        assert_eq!(grid.index_of(2, 1), Some(5));
        assert_eq!(grid.index_of(3, 0), None);
        assert_eq!(grid.index_of(0, 2), None);
        assert_eq!(grid.index_of(-1, 0), None);
        assert_eq!(grid.index_of(0, -1), None);
    }

    #[test]
    fn test_grid_set_and_clear() {
        let mut grid = Grid::new(3, 2);
        let idx = grid.index_of(1, 1).unwrap();
        grid.set_at(idx, '@');
        grid.set_at(999, '#');
        assert_eq!(grid.get(1, 1), Some('@'));
        assert_eq!(grid.filled(), 1);
        grid.clear();
        assert_eq!(grid.filled(), 0);
        assert_eq!(grid.chars().len(), 6);
    }
}
