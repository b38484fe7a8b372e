//! Application state and event loop.

use crossterm::event::EventStream;
use futures::StreamExt;
use gridom::event::convert_event;
use gridom::{Buffer, Direction, DragTracker, GridState, InputEvent, Key, MouseButton, Terminal};
use storegrid_lib::CatalogClient;
use storegrid_lib::model::Product;
use tokio_util::sync::CancellationToken;

use crate::config::GridConfig;
use crate::loader;
use crate::theme::GridTheme;
use crate::view::{self, ScreenLayout};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog client error: {0}")]
    Api(#[from] storegrid_lib::error::ApiError),
}

/// What an input event means for the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

/// The grid controller: owns the product slots, the selection, and the drag
/// lifecycle, and translates input events into state transitions.
pub struct App {
    config: GridConfig,
    client: CatalogClient,
    grid: GridState<Product>,
    drag: DragTracker,
    theme: GridTheme,
    loading: bool,
    width: u16,
    height: u16,
}

impl App {
    pub fn new(config: GridConfig) -> Result<Self, AppError> {
        let client = CatalogClient::builder().url(&config.base_url).build()?;
        let grid = GridState::new(config.rows, config.cols);
        Ok(Self {
            config,
            client,
            grid,
            drag: DragTracker::new(),
            theme: GridTheme::default(),
            loading: true,
            width: 0,
            height: 0,
        })
    }

    pub async fn run(mut self) -> Result<(), AppError> {
        let mut terminal = Terminal::new()?;
        let cancel = CancellationToken::new();
        let mut catalog_rx = loader::spawn_fetch(self.client.clone(), cancel.clone());
        let mut events = EventStream::new();

        let (width, height) = terminal.size()?;
        self.width = width;
        self.height = height;
        let mut layout = self.layout();
        self.draw(&mut terminal, &layout)?;

        loop {
            tokio::select! {
                maybe_event = events.next() => {
                    let Some(Ok(event)) = maybe_event else {
                        break;
                    };
                    let Some(input) = convert_event(event) else {
                        continue;
                    };
                    match self.handle_input(input, &layout) {
                        Flow::Quit => break,
                        Flow::Redraw => {
                            layout = self.layout();
                            self.draw(&mut terminal, &layout)?;
                        }
                        Flow::Continue => {}
                    }
                }
                received = catalog_rx.recv() => {
                    // A closed channel without a message means the fetch was
                    // cancelled; there is nothing to apply.
                    if let Some(products) = received {
                        self.loading = false;
                        self.grid.load(products);
                        self.draw(&mut terminal, &layout)?;
                    }
                }
            }
        }

        cancel.cancel();
        Ok(())
    }

    fn layout(&self) -> ScreenLayout {
        view::screen_layout(self.width, self.height, self.config.rows, self.config.cols)
    }

    fn arrow(&mut self, direction: Direction) -> Flow {
        self.grid.move_selection(direction);
        Flow::Redraw
    }

    fn handle_input(&mut self, input: InputEvent, layout: &ScreenLayout) -> Flow {
        match input {
            InputEvent::Key { key, modifiers } => match key {
                Key::Char('q') if modifiers.none() => Flow::Quit,
                Key::Char('c') if modifiers.ctrl => Flow::Quit,
                Key::Up => self.arrow(Direction::Up),
                Key::Down => self.arrow(Direction::Down),
                Key::Left => self.arrow(Direction::Left),
                Key::Right => self.arrow(Direction::Right),
                _ => Flow::Continue,
            },
            InputEvent::Press {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let Some(coord) = layout.grid.coord_at(x, y) else {
                    return Flow::Continue;
                };
                self.grid.select(coord);
                self.drag.press(coord);
                Flow::Redraw
            }
            InputEvent::Drag {
                x,
                y,
                button: MouseButton::Left,
            } => {
                self.drag.drag_over(layout.grid.coord_at(x, y));
                Flow::Redraw
            }
            InputEvent::Release {
                x,
                y,
                button: MouseButton::Left,
            } => {
                let target = layout.grid.coord_at(x, y);
                if let Some((payload, target)) = self.drag.release(target) {
                    self.grid.drop_from_payload(&payload, target);
                }
                Flow::Redraw
            }
            InputEvent::Resize { width, height } => {
                self.width = width;
                self.height = height;
                Flow::Redraw
            }
            _ => Flow::Continue,
        }
    }

    fn draw(&self, terminal: &mut Terminal, layout: &ScreenLayout) -> std::io::Result<()> {
        let mut frame = Buffer::new(self.width, self.height);
        let views = view::cell_views(&self.grid, self.drag.over());
        view::paint(&mut frame, layout, &views, self.loading, &self.theme);
        terminal.draw(&frame)
    }
}
