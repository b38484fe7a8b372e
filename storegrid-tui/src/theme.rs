//! Grid colors.

use gridom::{Color, Rgb};

/// Resolved palette for the grid surface.
///
/// Colors are declared in Oklch and resolved once at startup; the two tile
/// fills keep the original storefront styling (black tiles, light selected
/// tile).
pub struct GridTheme {
    pub background: Rgb,
    pub header_fg: Rgb,
    pub tile: Rgb,
    pub tile_border: Rgb,
    pub selected_tile: Rgb,
    pub detail_fg: Rgb,
    pub price_fg: Rgb,
    pub image_fg: Rgb,
    pub drop_hint: Rgb,
    pub hint_fg: Rgb,
}

impl GridTheme {
    pub fn dark() -> Self {
        Self {
            background: Color::oklch(0.18, 0.015, 255.0).to_rgb(),
            header_fg: Color::oklch(0.75, 0.02, 255.0).to_rgb(),
            tile: Color::rgb(0, 0, 0).to_rgb(),
            tile_border: Color::rgb(255, 255, 255).to_rgb(),
            selected_tile: Color::rgb(240, 240, 240).to_rgb(),
            detail_fg: Color::rgb(0, 0, 0).to_rgb(),
            price_fg: Color::oklch(0.45, 0.12, 145.0).to_rgb(),
            image_fg: Color::oklch(0.6, 0.08, 255.0).to_rgb(),
            drop_hint: Color::oklch(0.35, 0.06, 255.0).to_rgb(),
            hint_fg: Color::oklch(0.6, 0.02, 255.0).to_rgb(),
        }
    }
}

impl Default for GridTheme {
    fn default() -> Self {
        Self::dark()
    }
}
