use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Rgb, TextStyle};

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Fill every cell of `rect` with a space in the given colors.
    pub fn fill(&mut self, rect: Rect, fg: Rgb, bg: Rgb) {
        for y in rect.top()..rect.bottom().min(self.height) {
            for x in rect.left()..rect.right().min(self.width) {
                self.set(x, y, Cell::new(' ').with_fg(fg).with_bg(bg));
            }
        }
    }

    /// Write a string starting at (x, y), clipped to `max_width` columns.
    ///
    /// Wide characters occupy two cells; the trailing cell is marked as a
    /// continuation so the terminal writer skips it.
    pub fn put_str(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        style: TextStyle,
    ) -> u16 {
        let mut cursor = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if cursor + w > self.width {
                break;
            }
            self.set(
                cursor,
                y,
                Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
            );
            if w == 2 {
                let mut cont = Cell::new(' ').with_fg(fg).with_bg(bg);
                cont.wide_continuation = true;
                self.set(cursor + 1, y, cont);
            }
            cursor += w;
        }
        cursor - x
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
