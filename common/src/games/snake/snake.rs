use crate::games::SessionRng;

use super::drawable::{Drawable, Palette, Rgb, Surface};
use super::types::{Cell, Direction, Grid};

#[derive(Clone, Debug)]
pub struct Snake {
    /// Head first.
    pub positions: Vec<Cell>,
    /// Target body length; `positions` is trimmed from the tail down to it.
    pub length: usize,
    pub direction: Direction,
    pub next_direction: Option<Direction>,
    /// Tail cell dropped by the latest move, still to be erased on screen.
    pub last: Option<Cell>,
    start: Cell,
    palette: Palette,
}

impl Snake {
    pub fn new(start: Cell, palette: Palette, rng: &mut SessionRng) -> Self {
        Self {
            positions: vec![start],
            length: 1,
            direction: rng.choose_direction(),
            next_direction: None,
            last: None,
            start,
            palette,
        }
    }

    pub fn update_direction(&mut self) {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }
    }

    pub fn move_forward(&mut self, grid: &Grid) {
        let new_head = grid.wrap(self.head(), self.direction);
        self.positions.insert(0, new_head);
        self.last = if self.positions.len() > self.length {
            self.positions.pop()
        } else {
            None
        };
    }

    pub fn head(&self) -> Cell {
        self.positions[0]
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.positions.contains(&cell)
    }

    pub fn collides_with_self(&self) -> bool {
        self.positions[1..].contains(&self.head())
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.length = 1;
        self.positions = vec![self.start];
        self.direction = rng.choose_direction();
        self.next_direction = None;
        self.last = None;
    }
}

impl Drawable for Snake {
    fn position(&self) -> Cell {
        self.head()
    }

    fn color(&self) -> Rgb {
        self.palette.snake
    }

    /// Paints only the head and erases the dropped tail; the rest of the body
    /// is already on the surface from earlier ticks.
    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_cell(self.head(), self.palette.snake, self.palette.border);

        if let Some(last) = self.last {
            surface.draw_cell(last, self.palette.background, self.palette.background);
        }
    }
}
