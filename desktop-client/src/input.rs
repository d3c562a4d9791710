use eframe::egui;
use snake_common::games::snake::{InputEvent, Key};

/// Key presses of this frame in arrival order, plus `Quit` when the window
/// was asked to close.
pub fn collect_input_events(ctx: &egui::Context) -> Vec<InputEvent> {
    ctx.input(|i| {
        let mut events: Vec<InputEvent> = i
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } => map_key(*key),
                _ => None,
            })
            .map(InputEvent::KeyPressed)
            .collect();

        if i.viewport().close_requested() {
            events.push(InputEvent::Quit);
        }
        events
    })
}

pub fn map_key(key: egui::Key) -> Option<Key> {
    match key {
        egui::Key::ArrowUp => Some(Key::Up),
        egui::Key::ArrowDown => Some(Key::Down),
        egui::Key::ArrowLeft => Some(Key::Left),
        egui::Key::ArrowRight => Some(Key::Right),
        egui::Key::Escape => Some(Key::Escape),
        _ => None,
    }
}

pub fn is_termination(event: &InputEvent) -> bool {
    matches!(event, InputEvent::Quit | InputEvent::KeyPressed(Key::Escape))
}
