use serde::{Deserialize, Serialize};

use super::types::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Whatever ends up showing the field: a window, a test canvas.
pub trait Surface {
    /// Paints the whole surface with one color.
    fn fill(&mut self, color: Rgb);

    /// Paints one grid cell with a 1px border.
    fn draw_cell(&mut self, cell: Cell, fill: Rgb, border: Rgb);
}

pub trait Drawable {
    fn position(&self) -> Cell;
    fn color(&self) -> Rgb;
    fn draw(&self, surface: &mut dyn Surface);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            border: Rgb::new(93, 216, 228),
            apple: Rgb::new(255, 0, 0),
            snake: Rgb::new(0, 255, 0),
        }
    }
}
