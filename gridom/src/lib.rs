pub mod buffer;
pub mod event;
pub mod grid;
pub mod layout;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use event::{InputEvent, Key, Modifiers, MouseButton};
pub use grid::{Coord, Direction, DragTracker, GridState};
pub use layout::{GridLayout, Rect};
pub use terminal::Terminal;
pub use types::{Color, Rgb, TextStyle};
