//! Text block composition.

/// Prefix `block` with `banner` centred over `width` columns and a blank line.
///
/// An empty banner returns the block unchanged.
pub fn with_banner(banner: &str, block: &str, width: u16) -> String {
    if banner.is_empty() {
        return block.to_string();
    }
    let banner_width = banner.chars().count();
    let pad = usize::from(width).saturating_sub(banner_width) / 2;
    format!("{}{}\n\n{}", " ".repeat(pad), banner, block)
}

/// Lay text blocks out left to right separated by `gap` spaces.
///
/// Every block is padded to its widest line and to the tallest block's
/// height, so columns stay aligned. Widths are counted in chars.
pub fn compose_horizontal(blocks: &[&str], gap: usize) -> String {
    let columns: Vec<Vec<&str>> = blocks.iter().map(|b| b.lines().collect()).collect();
    let widths: Vec<usize> = columns
        .iter()
        .map(|lines| lines.iter().map(|l| l.chars().count()).max().unwrap_or(0))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (i, (lines, &width)) in columns.iter().zip(&widths).enumerate() {
            if i > 0 {
                line.push_str(&" ".repeat(gap));
            }
            let cell = lines.get(row).copied().unwrap_or("");
            line.push_str(cell);
            let fill = width - cell.chars().count();
            line.push_str(&" ".repeat(fill));
        }
        rows.push(line);
    }
    rows.join("\n")
}
