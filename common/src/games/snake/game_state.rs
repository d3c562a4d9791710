use crate::games::SessionRng;
use crate::log;

use super::apple::Apple;
use super::drawable::{Drawable, Surface};
use super::input::{turn_for_key, InputEvent, Key};
use super::settings::{RelocationPolicy, SnakeSettings};
use super::snake::Snake;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    /// Quit key or window close.
    Quit,
    /// Legacy relocation dropped the apple onto the snake.
    SessionEnded,
}

/// Everything one running game owns: the field, the snake, the apple and
/// the random source that drives them.
pub struct SnakeGameState {
    snake: Snake,
    apple: Apple,
    settings: SnakeSettings,
    rng: SessionRng,
    tick: u64,
}

impl SnakeGameState {
    pub fn new(settings: SnakeSettings, mut rng: SessionRng) -> Self {
        let snake = Snake::new(settings.grid.center(), settings.palette, &mut rng);
        let apple = Apple::new(
            &snake.positions,
            &settings.grid,
            &settings.palette,
            settings.placement_warn_after,
            &mut rng,
        );

        log!(
            "New game: {}x{} cells, seed {}, relocation {:?}",
            settings.grid.columns(),
            settings.grid.rows(),
            rng.seed(),
            settings.relocation
        );

        Self {
            snake,
            apple,
            settings,
            rng,
            tick: 0,
        }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    pub fn settings(&self) -> &SnakeSettings {
        &self.settings
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Clears the surface and paints the opening scene.
    pub fn start(&self, surface: &mut dyn Surface) {
        surface.fill(self.settings.palette.background);
        self.snake.draw(surface);
        self.apple.draw(surface);
    }

    /// Buffers the turn a key asks for. Returns `false` once termination is
    /// requested.
    ///
    /// The turn is always looked up against the current direction, so only
    /// the last arrow key before the next tick counts.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit | InputEvent::KeyPressed(Key::Escape) => false,
            InputEvent::KeyPressed(key) => {
                let current = self.snake.direction;
                self.snake.next_direction = Some(turn_for_key(current, key).unwrap_or(current));
                true
            }
        }
    }

    pub fn tick<I>(&mut self, events: I, surface: &mut dyn Surface) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if !self.handle_event(event) {
                log!("Quit requested at tick {}", self.tick);
                return TickOutcome::Quit;
            }
        }

        self.snake.update_direction();
        self.snake.move_forward(&self.settings.grid);
        self.tick += 1;

        if self.apple.position == self.snake.head() {
            self.snake.grow();
            log!("Apple eaten at {:?}, length {}", self.apple.position, self.snake.length);
            if !self.relocate_apple() {
                return TickOutcome::SessionEnded;
            }
        } else if self.snake.collides_with_self() {
            log!(
                "Self collision at {:?} with length {}, resetting",
                self.snake.head(),
                self.snake.length
            );
            self.snake.reset(&mut self.rng);
            if !self.relocate_apple() {
                return TickOutcome::SessionEnded;
            }
            surface.fill(self.settings.palette.background);
        }

        // Snake first: erasing its old tail must not wipe an apple placed there.
        self.snake.draw(surface);
        self.apple.draw(surface);
        TickOutcome::Continue
    }

    fn relocate_apple(&mut self) -> bool {
        match self.settings.relocation {
            RelocationPolicy::Legacy => {
                self.apple.place_unconstrained(&self.settings.grid, &mut self.rng);
                if self.snake.occupies(self.apple.position) {
                    log!(
                        "Apple relocated onto the snake at {:?}, session over after {} ticks",
                        self.apple.position,
                        self.tick
                    );
                    return false;
                }
                true
            }
            RelocationPolicy::AvoidSnake => {
                self.apple
                    .randomize_position(&self.snake.positions, &self.settings.grid, &mut self.rng);
                true
            }
        }
    }
}
