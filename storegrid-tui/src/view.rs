//! View mapping and painting.
//!
//! [`cell_views`] is a pure function of the grid state: it decides what every
//! cell shows this frame, with detail content on the selected cell only.
//! Painting then writes the views into a frame buffer.

use gridom::text::truncate_to_width;
use gridom::{Buffer, Cell, Coord, GridLayout, GridState, Rect, Rgb, TextStyle};
use storegrid_lib::model::Product;

use crate::theme::GridTheme;

/// Fixed display size of the image placeholder inside the selected cell.
const IMAGE_WIDTH: u16 = 8;
const IMAGE_HEIGHT: u16 = 2;

/// What one cell renders this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub coord: Coord,
    pub selected: bool,
    pub drop_target: bool,
    pub detail: Option<CellDetail>,
}

/// Detail content, present only on the selected cell when it holds a product.
#[derive(Debug, Clone, PartialEq)]
pub struct CellDetail {
    pub title: String,
    pub price: String,
    pub image: String,
}

impl CellDetail {
    fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: format!("${:.2}", product.price),
            image: product.image.clone(),
        }
    }
}

/// Maps the grid to one view per cell, row-major.
///
/// Exactly the selected cell carries detail, and only when it holds a
/// product; every other cell is an empty tile. `drop_target` marks the cell
/// hovered during a drag.
pub fn cell_views(grid: &GridState<Product>, drop_target: Option<Coord>) -> Vec<CellView> {
    let mut views = Vec::with_capacity(grid.capacity());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let coord = Coord::new(row, col);
            let selected = grid.selected() == Some(coord);
            let detail = if selected {
                grid.get(coord).map(CellDetail::from_product)
            } else {
                None
            };
            views.push(CellView {
                coord,
                selected,
                drop_target: drop_target == Some(coord),
                detail,
            });
        }
    }
    views
}

/// Screen regions: one header row, the grid, one status row.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub header: Rect,
    pub grid: GridLayout,
    pub status: Rect,
}

pub fn screen_layout(width: u16, height: u16, rows: usize, cols: usize) -> ScreenLayout {
    let screen = Rect::from_size(width, height);
    let header = Rect::new(0, 0, width, height.min(1));
    let status = if height > 1 {
        Rect::new(0, height - 1, width, 1)
    } else {
        Rect::new(0, 0, width, 0)
    };
    let grid_area = screen.shrink(1, 0, 1, 0);
    ScreenLayout {
        header,
        grid: GridLayout::new(grid_area, rows, cols),
        status,
    }
}

/// Paints a full frame: background, column headers, every cell, status line.
pub fn paint(
    buffer: &mut Buffer,
    layout: &ScreenLayout,
    views: &[CellView],
    loading: bool,
    theme: &GridTheme,
) {
    // Blank cells carry fg == bg so a painted frame never collides with the
    // buffer's default cell and always reaches the screen.
    buffer.fill(
        Rect::from_size(buffer.width(), buffer.height()),
        theme.background,
        theme.background,
    );

    if layout.grid.is_degenerate() {
        paint_status(buffer, layout.status, "Terminal too small", theme);
        return;
    }

    paint_header(buffer, layout, theme);

    for view in views {
        if let Some(rect) = layout.grid.cell_rect(view.coord) {
            paint_cell(buffer, rect, view, theme);
        }
    }

    let status = if loading {
        "Loading catalog…"
    } else {
        "storegrid · click or arrows select · drag to swap · q quits"
    };
    paint_status(buffer, layout.status, status, theme);
}

fn paint_header(buffer: &mut Buffer, layout: &ScreenLayout, theme: &GridTheme) {
    if layout.header.is_empty() {
        return;
    }
    let (cell_width, _) = layout.grid.cell_size();
    let area = layout.grid.area();
    for col in 0..layout.grid.cols() {
        let label = format!("Column {}", col + 1);
        let label = truncate_to_width(&label, cell_width.saturating_sub(1) as usize);
        buffer.put_str(
            area.x + col as u16 * cell_width + 1,
            layout.header.y,
            &label,
            theme.header_fg,
            theme.background,
            TextStyle::bold(),
        );
    }
}

fn paint_status(buffer: &mut Buffer, status: Rect, text: &str, theme: &GridTheme) {
    if status.is_empty() {
        return;
    }
    let text = truncate_to_width(text, status.width as usize);
    buffer.put_str(
        status.x,
        status.y,
        &text,
        theme.hint_fg,
        theme.background,
        TextStyle::dim(),
    );
}

fn paint_cell(buffer: &mut Buffer, rect: Rect, view: &CellView, theme: &GridTheme) {
    let fill = if view.selected {
        theme.selected_tile
    } else if view.drop_target {
        theme.drop_hint
    } else {
        theme.tile
    };

    buffer.fill(rect, fill, fill);
    paint_border(buffer, rect, theme.tile_border, fill);

    if let Some(detail) = &view.detail {
        paint_detail(buffer, rect.shrink(1, 1, 1, 1), detail, fill, theme);
    }
}

fn paint_border(buffer: &mut Buffer, rect: Rect, fg: Rgb, bg: Rgb) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let (left, right) = (rect.left(), rect.right() - 1);
    let (top, bottom) = (rect.top(), rect.bottom() - 1);

    for x in left..=right {
        buffer.set(x, top, Cell::new('─').with_fg(fg).with_bg(bg));
        buffer.set(x, bottom, Cell::new('─').with_fg(fg).with_bg(bg));
    }
    for y in top..=bottom {
        buffer.set(left, y, Cell::new('│').with_fg(fg).with_bg(bg));
        buffer.set(right, y, Cell::new('│').with_fg(fg).with_bg(bg));
    }
    buffer.set(left, top, Cell::new('┌').with_fg(fg).with_bg(bg));
    buffer.set(right, top, Cell::new('┐').with_fg(fg).with_bg(bg));
    buffer.set(left, bottom, Cell::new('└').with_fg(fg).with_bg(bg));
    buffer.set(right, bottom, Cell::new('┘').with_fg(fg).with_bg(bg));
}

fn paint_detail(
    buffer: &mut Buffer,
    inner: Rect,
    detail: &CellDetail,
    fill: Rgb,
    theme: &GridTheme,
) {
    if inner.is_empty() {
        return;
    }

    // Image placeholder at a fixed display size, clipped to the cell.
    let image_width = IMAGE_WIDTH.min(inner.width);
    let image_height = IMAGE_HEIGHT.min(inner.height);
    let block: String = "▒".repeat(image_width as usize);
    for dy in 0..image_height {
        buffer.put_str(
            inner.x,
            inner.y + dy,
            &block,
            theme.image_fg,
            fill,
            TextStyle::new(),
        );
    }

    let title_y = inner.y + image_height;
    if title_y < inner.bottom() {
        let title = truncate_to_width(&detail.title, inner.width as usize);
        buffer.put_str(
            inner.x,
            title_y,
            &title,
            theme.detail_fg,
            fill,
            TextStyle::bold(),
        );
    }

    let price_y = title_y + 1;
    if price_y < inner.bottom() {
        buffer.put_str(
            inner.x,
            price_y,
            &detail.price,
            theme.price_fg,
            fill,
            TextStyle::new(),
        );
    }

    // Image URL caption, when the cell is tall enough.
    let image_y = price_y + 1;
    if image_y < inner.bottom() {
        let url = truncate_to_width(&detail.image, inner.width as usize);
        buffer.put_str(inner.x, image_y, &url, theme.image_fg, fill, TextStyle::dim());
    }
}
