use std::collections::HashMap;

use crate::games::snake::{Cell, Rgb, Surface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintedCell {
    pub fill: Rgb,
    pub border: Rgb,
}

/// Retained in-memory surface.
///
/// Cells stay painted until overwritten or until the next `fill`, so the
/// game only has to send what changed this tick.
#[derive(Clone, Debug)]
pub struct Canvas {
    background: Rgb,
    cells: HashMap<Cell, PaintedCell>,
}

impl Canvas {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            cells: HashMap::new(),
        }
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn get(&self, cell: Cell) -> Option<PaintedCell> {
        self.cells.get(&cell).copied()
    }

    /// Cells whose fill differs from the background, in no particular order.
    pub fn visible_cells(&self) -> impl Iterator<Item = (Cell, PaintedCell)> + '_ {
        self.cells
            .iter()
            .filter(|(_, painted)| painted.fill != self.background)
            .map(|(cell, painted)| (*cell, *painted))
    }

    pub fn visible_count(&self) -> usize {
        self.visible_cells().count()
    }
}

impl Surface for Canvas {
    fn fill(&mut self, color: Rgb) {
        self.background = color;
        self.cells.clear();
    }

    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb) {
        self.cells.insert(cell, PaintedCell { fill, border });
    }
}
