mod apple;
mod drawable;
mod game_state;
mod input;
mod settings;
mod snake;
mod types;

pub use apple::Apple;
pub use drawable::{Drawable, Palette, Rgb, Surface};
pub use game_state::{SnakeGameState, TickOutcome};
pub use input::{turn_for_key, InputEvent, Key};
pub use settings::{RelocationPolicy, SnakeSettings};
pub use snake::Snake;
pub use types::{Cell, Direction, Grid};
