use serde::{Deserialize, Serialize};

use crate::games::snake::{Palette, RelocationPolicy};

use super::Validate;

pub const CONFIG_FILE_NAME: &str = "the_snake.yaml";

/// Config file next to the executable, or in the working directory when the
/// executable path is unknown.
pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub grid_size: u32,
    /// Ticks per second.
    pub speed: u32,
    #[serde(default)]
    pub colors: Palette,
    #[serde(default)]
    pub relocation: RelocationPolicy,
    #[serde(default = "default_placement_warn_after")]
    pub placement_warn_after: Option<u64>,
}

fn default_placement_warn_after() -> Option<u64> {
    Some(10_000)
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.grid_size == 0 {
            return Err("grid_size must be greater than 0".to_string());
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err("screen dimensions must be greater than 0".to_string());
        }
        if self.screen_width % self.grid_size != 0 || self.screen_height % self.grid_size != 0 {
            return Err("screen dimensions must be multiples of grid_size".to_string());
        }
        if self.screen_width > 4096 || self.screen_height > 4096 {
            return Err("screen dimensions must not exceed 4096".to_string());
        }
        if !(1..=60).contains(&self.speed) {
            return Err("speed must be between 1 and 60".to_string());
        }
        if self.placement_warn_after == Some(0) {
            return Err("placement_warn_after must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            grid_size: 20,
            speed: 10,
            colors: Palette::default(),
            relocation: RelocationPolicy::Legacy,
            placement_warn_after: default_placement_warn_after(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigManager, ConfigSerializer, FileContentConfigProvider,
        MemoryConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_the_snake_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_survives_yaml() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_saves_and_loads_file() {
        let config = GameConfig {
            speed: 15,
            relocation: RelocationPolicy::AvoidSnake,
            ..GameConfig::default()
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh: ConfigManager<_, GameConfig, _> = ConfigManager::from_yaml_file(&file_path);
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::from_yaml_file("this_snake_config_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let content = r#"
            screen_width: 400
            screen_height: 300
            grid_size: 20
            speed: 5
        "#;
        let provider = MemoryConfigProvider::new(Some(content.to_string()));
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());

        let config = manager.get_config().unwrap();
        assert_eq!(config.screen_width, 400);
        assert_eq!(config.colors, Palette::default());
        assert_eq!(config.relocation, RelocationPolicy::Legacy);
        assert_eq!(config.placement_warn_after, Some(10_000));
    }

    #[test]
    fn test_misaligned_field_cant_be_read() {
        let content = r#"
            screen_width: 650
            screen_height: 480
            grid_size: 20
            speed: 10
        "#;
        let provider = MemoryConfigProvider::new(Some(content.to_string()));
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let provider = MemoryConfigProvider::default();
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = GameConfig {
            speed: 0,
            ..GameConfig::default()
        };
        assert!(manager.set_config(&config).is_err());
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_relocation_policy_names_in_yaml() {
        let provider = MemoryConfigProvider::default();
        let manager = ConfigManager::new(provider, YamlConfigSerializer::new());
        let config = GameConfig {
            relocation: RelocationPolicy::AvoidSnake,
            ..GameConfig::default()
        };
        manager.set_config(&config).unwrap();

        let raw = YamlConfigSerializer::new().serialize(&manager.get_config().unwrap()).unwrap();
        assert!(raw.contains("relocation: AvoidSnake"), "{}", raw);
    }

    #[test]
    fn test_memory_provider_starts_empty() {
        let provider = MemoryConfigProvider::default();
        assert_eq!(provider.get_config_content().unwrap(), None);
        provider.set_config_content("speed: 3").unwrap();
        assert_eq!(provider.get_config_content().unwrap().as_deref(), Some("speed: 3"));
    }
}
