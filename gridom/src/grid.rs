//! Grid selection and reorder state.
//!
//! A [`GridState`] owns a fixed row-major slot vector and a single selected
//! coordinate. Slots are reordered exclusively by swapping two positions, so
//! a drag-and-drop never loses an item: exchanging with an empty slot moves
//! the item and leaves a hole behind.

use std::fmt;
use std::str::FromStr;

/// A cell position, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Serializes as the drag payload text, `"{row},{col}"`.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Error returned when a drag payload does not parse back into a coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordError;

impl fmt::Display for ParseCoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid coordinate payload")
    }
}

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').ok_or(ParseCoordError)?;
        let row = row.trim().parse().map_err(|_| ParseCoordError)?;
        let col = col.trim().parse().map_err(|_| ParseCoordError)?;
        Ok(Self { row, col })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Fixed-shape grid of optional items with a single selected cell.
///
/// Dimensions are injected at construction; nothing about the shape is
/// hard-coded, so tests can use non-default grids.
#[derive(Debug, Clone)]
pub struct GridState<T> {
    rows: usize,
    cols: usize,
    slots: Vec<Option<T>>,
    selected: Option<Coord>,
}

impl<T> GridState<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut slots = Vec::with_capacity(rows * cols);
        slots.resize_with(rows * cols, || None);
        Self {
            rows,
            cols,
            slots,
            selected: None,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn capacity(&self) -> usize {
        self.rows * self.cols
    }

    /// True when no slot holds an item.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        let idx = self.index_of(coord)?;
        self.slots[idx].as_ref()
    }

    /// Replaces the whole slot vector with `items`, in order, from slot 0.
    /// Items beyond capacity are dropped; remaining slots are emptied.
    pub fn load(&mut self, items: impl IntoIterator<Item = T>) {
        let capacity = self.capacity();
        let mut items = items.into_iter();
        for slot in &mut self.slots {
            *slot = items.next();
        }
        // Exhaust the iterator so the drop count is visible in logs.
        let dropped = items.count();
        if dropped > 0 {
            log::debug!("grid holds {capacity} slots, dropped {dropped} extra items");
        }
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    /// The item under the selection, if the selected cell holds one.
    pub fn selected_item(&self) -> Option<&T> {
        self.get(self.selected?)
    }

    /// Click semantics: selects the cell unconditionally, empty or not.
    /// Coordinates outside the grid are ignored.
    pub fn select(&mut self, coord: Coord) {
        if self.contains(coord) {
            self.selected = Some(coord);
        }
    }

    /// Arrow-key semantics: one step along the axis, clamped at the edges.
    /// The first press with nothing selected selects the origin.
    pub fn move_selection(&mut self, direction: Direction) {
        if self.capacity() == 0 {
            return;
        }
        let Some(current) = self.selected else {
            self.selected = Some(Coord::new(0, 0));
            return;
        };
        let next = match direction {
            Direction::Up => Coord::new(current.row.saturating_sub(1), current.col),
            Direction::Down => Coord::new((current.row + 1).min(self.rows - 1), current.col),
            Direction::Left => Coord::new(current.row, current.col.saturating_sub(1)),
            Direction::Right => Coord::new(current.row, (current.col + 1).min(self.cols - 1)),
        };
        self.selected = Some(next);
    }

    /// Exchanges two slots in place. Either side may be empty; both ends
    /// always land consistently. Out-of-range coordinates are a no-op.
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let (Some(i), Some(j)) = (self.index_of(a), self.index_of(b)) else {
            return;
        };
        self.slots.swap(i, j);
    }

    /// Drop semantics: parses the source coordinate out of the drag payload,
    /// swaps source and target slots, and moves the selection to the target.
    ///
    /// Returns false (leaving the grid untouched) when the payload does not
    /// parse or either coordinate is outside the grid.
    pub fn drop_from_payload(&mut self, payload: &str, target: Coord) -> bool {
        let Ok(source) = payload.parse::<Coord>() else {
            log::debug!("ignoring drop with malformed payload {payload:?}");
            return false;
        };
        if !self.contains(source) || !self.contains(target) {
            return false;
        }
        self.swap(source, target);
        self.selected = Some(target);
        true
    }
}

/// Tracks one mouse-driven drag from press to release.
///
/// A press only arms the tracker; the drag proper starts on the first motion
/// event, at which point the source coordinate is captured as the serialized
/// payload. Every cell is a valid drop target, so drag-over merely records
/// the hovered coordinate.
#[derive(Debug, Default)]
pub struct DragTracker {
    armed: Option<Coord>,
    payload: Option<String>,
    over: Option<Coord>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the tracker with the pressed cell.
    pub fn press(&mut self, source: Coord) {
        self.armed = Some(source);
        self.payload = None;
        self.over = None;
    }

    /// Motion with the button held. Starts the drag on the first call and
    /// records the hovered cell (or none, between cells).
    pub fn drag_over(&mut self, over: Option<Coord>) {
        if let Some(source) = self.armed {
            if self.payload.is_none() {
                self.payload = Some(source.to_string());
            }
            self.over = over;
        }
    }

    /// True once a press has turned into an actual drag.
    pub fn dragging(&self) -> bool {
        self.payload.is_some()
    }

    /// The cell currently hovered, while dragging.
    pub fn over(&self) -> Option<Coord> {
        if self.dragging() {
            self.over
        } else {
            None
        }
    }

    /// Button release. Yields `(payload, target)` when an armed drag ends
    /// over a cell; a release without prior motion is a plain click and
    /// yields nothing. The tracker resets either way.
    pub fn release(&mut self, target: Option<Coord>) -> Option<(String, Coord)> {
        let payload = self.payload.take();
        self.armed = None;
        self.over = None;
        Some((payload?, target?))
    }
}
