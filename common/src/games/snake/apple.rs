use crate::games::SessionRng;
use crate::log;

use super::drawable::{Drawable, Palette, Rgb, Surface};
use super::types::{Cell, Grid};

#[derive(Clone, Debug)]
pub struct Apple {
    pub position: Cell,
    color: Rgb,
    border: Rgb,
    /// Failed draws in a row after which a placement warning is logged.
    warn_after: Option<u64>,
}

impl Apple {
    pub fn new(
        occupied: &[Cell],
        grid: &Grid,
        palette: &Palette,
        warn_after: Option<u64>,
        rng: &mut SessionRng,
    ) -> Self {
        let mut apple = Self {
            position: grid.center(),
            color: palette.apple,
            border: palette.border,
            warn_after,
        };
        apple.randomize_position(occupied, grid, rng);
        apple
    }

    /// Draws random cells until one is not in `occupied` and returns how many
    /// draws it took.
    ///
    /// Never returns when `occupied` covers the whole field.
    pub fn randomize_position(
        &mut self,
        occupied: &[Cell],
        grid: &Grid,
        rng: &mut SessionRng,
    ) -> u64 {
        let mut attempts = 0u64;
        loop {
            let candidate = grid.random_cell(rng);
            attempts += 1;

            if !occupied.contains(&candidate) {
                self.position = candidate;
                return attempts;
            }

            if self.warns_at(attempts) {
                log!(
                    "Apple placement: no free cell after {} attempts ({} of {} cells occupied)",
                    attempts,
                    occupied.len(),
                    grid.cell_count()
                );
            }
        }
    }

    fn warns_at(&self, attempts: u64) -> bool {
        matches!(self.warn_after, Some(threshold) if threshold > 0 && attempts % threshold == 0)
    }

    /// One draw over the whole field, occupied or not.
    pub fn place_unconstrained(&mut self, grid: &Grid, rng: &mut SessionRng) {
        self.position = grid.random_cell(rng);
    }
}

impl Drawable for Apple {
    fn position(&self) -> Cell {
        self.position
    }

    fn color(&self) -> Rgb {
        self.color
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.draw_cell(self.position, self.color, self.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_apple_avoids_occupied_cells() {
        let grid = Grid::default();
        let mut rng = SessionRng::new(5);
        let occupied = vec![grid.center()];
        for _ in 0..200 {
            let apple = Apple::new(&occupied, &grid, &Palette::default(), None, &mut rng);
            assert!(!occupied.contains(&apple.position));
            assert!(grid.contains(apple.position));
        }
    }

    #[test]
    fn test_randomize_finds_the_only_free_cell() {
        let grid = Grid::new(60, 60, 20);
        let free = Cell::new(40, 20);
        let occupied: Vec<Cell> = grid.cells().filter(|cell| *cell != free).collect();
        let mut rng = SessionRng::new(9);
        let mut apple = Apple::new(&[], &grid, &Palette::default(), Some(4), &mut rng);

        let attempts = apple.randomize_position(&occupied, &grid, &mut rng);
        assert_eq!(apple.position, free);
        assert!(attempts >= 1);
    }

    #[test]
    fn test_warning_fires_on_every_threshold_multiple() {
        let grid = Grid::default();
        let mut rng = SessionRng::new(4);
        let apple = Apple::new(&[], &grid, &Palette::default(), Some(3), &mut rng);
        assert!(!apple.warns_at(1));
        assert!(!apple.warns_at(2));
        assert!(apple.warns_at(3));
        assert!(apple.warns_at(6));
        assert!(!apple.warns_at(7));

        let silent = Apple::new(&[], &grid, &Palette::default(), None, &mut rng);
        assert!(!silent.warns_at(3));
    }

    #[test]
    fn test_crowded_field_runs_past_warning_threshold() {
        let grid = Grid::new(60, 60, 20);
        let free = Cell::new(0, 40);
        let occupied: Vec<Cell> = grid.cells().filter(|cell| *cell != free).collect();
        let threshold = 2;

        let mut warned = false;
        for seed in 0..32 {
            let mut rng = SessionRng::new(seed);
            let mut apple = Apple::new(&[], &grid, &Palette::default(), Some(threshold), &mut rng);
            let attempts = apple.randomize_position(&occupied, &grid, &mut rng);

            assert_eq!(apple.position, free);
            if (1..attempts).any(|failed| apple.warns_at(failed)) {
                assert!(attempts > threshold);
                warned = true;
            }
        }
        assert!(warned);
    }

    #[test]
    fn test_randomize_with_nothing_occupied_takes_one_draw() {
        let grid = Grid::default();
        let mut rng = SessionRng::new(2);
        let mut apple = Apple::new(&[], &grid, &Palette::default(), None, &mut rng);
        assert_eq!(apple.randomize_position(&[], &grid, &mut rng), 1);
    }

    #[test]
    fn test_place_unconstrained_stays_on_field() {
        let grid = Grid::default();
        let mut rng = SessionRng::new(21);
        let mut apple = Apple::new(&[], &grid, &Palette::default(), None, &mut rng);
        for _ in 0..100 {
            apple.place_unconstrained(&grid, &mut rng);
            assert!(grid.contains(apple.position));
        }
    }
}
