use super::Color;

/// Number of entries in the indexed palette.
pub const PALETTE_LEN: usize = 16;

/// The classic 16-color text/graphics palette, in index order.
pub const PALETTE: [Color; PALETTE_LEN] = [
    Color::rgb(0, 0, 0),       // 0 black
    Color::rgb(0, 0, 170),     // 1 blue
    Color::rgb(0, 170, 0),     // 2 green
    Color::rgb(0, 170, 170),   // 3 cyan
    Color::rgb(170, 0, 0),     // 4 red
    Color::rgb(170, 0, 170),   // 5 magenta
    Color::rgb(170, 85, 0),    // 6 brown
    Color::rgb(170, 170, 170), // 7 light gray
    Color::rgb(85, 85, 85),    // 8 dark gray
    Color::rgb(85, 85, 255),   // 9 light blue
    Color::rgb(85, 255, 85),   // 10 light green
    Color::rgb(85, 255, 255),  // 11 light cyan
    Color::rgb(255, 85, 85),   // 12 light red
    Color::rgb(255, 85, 255),  // 13 light magenta
    Color::rgb(255, 255, 85),  // 14 yellow
    Color::rgb(255, 255, 255), // 15 white
];

/// Returns the index of the palette entry closest to `color` (alpha is ignored).
///
/// Ties resolve to the lower index.
pub fn nearest_index(color: Color) -> u8 {
    let mut best = 0usize;
    let mut best_dist = u32::MAX;
    for (i, entry) in PALETTE.iter().enumerate() {
        let d = entry.distance_sq(color);
        if d < best_dist {
            best = i;
            best_dist = d;
        }
    }
    best as u8
}

/// Palette color for `index`; out-of-range indices wrap.
#[inline]
pub fn color_at(index: u8) -> Color {
    PALETTE[index as usize % PALETTE_LEN]
}
