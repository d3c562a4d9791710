mod canvas_painter;

use std::time::Instant;

use eframe::egui;
use snake_common::canvas::Canvas;
use snake_common::games::snake::{InputEvent, SnakeGameState, TickOutcome};
use snake_common::log;

use crate::input::{collect_input_events, is_termination};
use canvas_painter::paint_canvas;

pub struct SnakeApp {
    game: SnakeGameState,
    canvas: Canvas,
    pending_events: Vec<InputEvent>,
    last_tick: Instant,
    finished: Option<TickOutcome>,
}

impl SnakeApp {
    pub fn new(game: SnakeGameState) -> Self {
        let mut canvas = Canvas::new(game.settings().palette.background);
        game.start(&mut canvas);

        Self {
            game,
            canvas,
            pending_events: Vec::new(),
            last_tick: Instant::now(),
            finished: None,
        }
    }

    fn run_due_tick(&mut self, now: Instant) -> TickOutcome {
        let interval = self.game.settings().tick_interval();
        let quit_pending = self.pending_events.iter().any(is_termination);

        if !quit_pending && now.duration_since(self.last_tick) < interval {
            return TickOutcome::Continue;
        }

        self.last_tick = now;
        let events = std::mem::take(&mut self.pending_events);
        self.game.tick(events, &mut self.canvas)
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.finished.is_none() {
            self.pending_events.extend(collect_input_events(ctx));

            let outcome = self.run_due_tick(Instant::now());
            if outcome != TickOutcome::Continue {
                log!(
                    "Session finished with {:?} after {} ticks, length {}",
                    outcome,
                    self.game.tick_count(),
                    self.game.snake().length
                );
                self.finished = Some(outcome);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        let grid = self.game.settings().grid;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let size = egui::vec2(grid.width as f32, grid.height as f32);
                let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
                paint_canvas(&painter, response.rect, &self.canvas, &grid);
            });

        let elapsed = self.last_tick.elapsed();
        let interval = self.game.settings().tick_interval();
        ctx.request_repaint_after(interval.saturating_sub(elapsed));
    }
}
