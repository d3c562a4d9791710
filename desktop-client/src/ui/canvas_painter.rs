use eframe::egui;
use snake_common::canvas::Canvas;
use snake_common::games::snake::{Grid, Rgb};

fn to_color32(color: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Paints the retained canvas into `rect`, one pixel of the field per point.
pub fn paint_canvas(painter: &egui::Painter, rect: egui::Rect, canvas: &Canvas, grid: &Grid) {
    painter.rect_filled(rect, 0.0, to_color32(canvas.background()));

    let cell_size = grid.cell_size as f32;
    for (cell, painted) in canvas.visible_cells() {
        let cell_rect = egui::Rect::from_min_size(
            egui::pos2(rect.min.x + cell.x as f32, rect.min.y + cell.y as f32),
            egui::vec2(cell_size, cell_size),
        );
        painter.rect_filled(cell_rect, 0.0, to_color32(painted.fill));
        painter.rect_stroke(
            cell_rect,
            0.0,
            egui::Stroke::new(1.0, to_color32(painted.border)),
            egui::StrokeKind::Inside,
        );
    }
}
