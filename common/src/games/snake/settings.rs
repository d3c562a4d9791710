use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

use super::drawable::Palette;
use super::types::Grid;

/// What happens to the apple after a pickup or a reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelocationPolicy {
    /// One draw over the whole field; landing on the snake ends the session.
    #[default]
    Legacy,
    /// Redraw until the apple is off the snake.
    AvoidSnake,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSettings {
    pub grid: Grid,
    pub palette: Palette,
    pub speed: u32,
    pub relocation: RelocationPolicy,
    pub placement_warn_after: Option<u64>,
}

impl SnakeSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / self.speed.max(1) as u64)
    }
}

impl Default for SnakeSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

impl From<&GameConfig> for SnakeSettings {
    fn from(config: &GameConfig) -> Self {
        Self {
            grid: Grid::new(
                config.screen_width as i32,
                config.screen_height as i32,
                config.grid_size as i32,
            ),
            palette: config.colors,
            speed: config.speed,
            relocation: config.relocation,
            placement_warn_after: config.placement_warn_after,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_classic_field() {
        let settings = SnakeSettings::default();
        assert_eq!(settings.grid, Grid::new(640, 480, 20));
        assert_eq!(settings.speed, 10);
        assert_eq!(settings.relocation, RelocationPolicy::Legacy);
        assert_eq!(settings.tick_interval(), Duration::from_millis(100));
    }
}
