mod input;
mod ui;

use clap::Parser;
use eframe::egui;
use snake_common::config::{default_config_path, ConfigManager, GameConfig, Validate};
use snake_common::games::SessionRng;
use snake_common::games::snake::{RelocationPolicy, SnakeGameState, SnakeSettings};
use snake_common::{log, logger};

use ui::SnakeApp;

#[derive(Parser)]
#[command(name = "the_snake")]
struct Args {
    /// Path to the YAML config; defaults to the_snake.yaml next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for apple placement and start directions.
    #[arg(long)]
    seed: Option<u64>,

    /// Ticks per second, overrides the config.
    #[arg(long)]
    speed: Option<u32>,

    /// Keep relocated apples off the snake instead of ending the session.
    #[arg(long)]
    avoid_snake: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn load_config(args: &Args) -> Result<GameConfig, String> {
    let path = args.config.clone().unwrap_or_else(default_config_path);
    let manager: ConfigManager<_, GameConfig, _> = ConfigManager::from_yaml_file(&path);
    let mut config = manager.get_config()?;

    if let Some(speed) = args.speed {
        config.speed = speed;
    }
    if args.avoid_snake {
        config.relocation = RelocationPolicy::AvoidSnake;
    }
    config.validate()?;

    log!("Config loaded from {}", path);
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Snake".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = load_config(&args)?;
    let settings = SnakeSettings::from(&config);
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let game = SnakeGameState::new(settings, rng);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.screen_width as f32, config.screen_height as f32])
            .with_resizable(false)
            .with_title("Snake"),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(game)))),
    )?;

    log!("Bye");
    Ok(())
}
