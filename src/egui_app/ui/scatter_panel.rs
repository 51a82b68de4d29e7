use super::EguiApp;
use super::style;
use crate::egui_app::view_model::scatter::{PlotBounds, ScatterView};
use eframe::egui::{self, Pos2, Rect, RichText, Sense, Ui};

const PLOT_HEIGHT: f32 = 420.0;
const POINT_RADIUS: f32 = 3.5;
const PLOT_MARGIN: f32 = 12.0;

impl EguiApp {
    pub(super) fn render_scatter_panel(&mut self, ui: &mut Ui) {
        egui::CollapsingHeader::new(RichText::new("Features Scatter Plot").heading())
            .id_salt("feature_scatter")
            .default_open(false)
            .show(ui, |ui| {
                let view = &self.controller.ui.scatter;
                if view.is_empty() {
                    ui.label(
                        RichText::new("No feature data available")
                            .color(style::palette().text_muted),
                    );
                    return;
                }
                render_legend(ui, view);
                ui.add_space(6.0);
                render_plot(ui, view);
            });
    }
}

fn render_legend(ui: &mut Ui, view: &ScatterView) {
    ui.horizontal_wrapped(|ui| {
        for series in &view.series {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(10.0, 10.0), Sense::hover());
            ui.painter().circle_filled(rect.center(), 5.0, series.color);
            ui.label(&series.label);
            ui.add_space(8.0);
        }
    });
}

fn render_plot(ui: &mut Ui, view: &ScatterView) {
    let Some(bounds) = view.bounds else {
        return;
    };
    let palette = style::palette();
    let size = egui::vec2(ui.available_width(), PLOT_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let frame = response.rect;
    painter.rect_filled(frame, 0.0, palette.bg_primary);
    let plot_rect = frame.shrink(PLOT_MARGIN);
    draw_grid(&painter, plot_rect, palette.grid_soft);

    let hover = response.hover_pos();
    let mut nearest: Option<(f32, &str, [f64; 2])> = None;
    for series in &view.series {
        for point in &series.points {
            let pos = to_screen(plot_rect, bounds, *point);
            painter.circle_filled(pos, POINT_RADIUS, series.color);
            if let Some(hover) = hover {
                let distance = hover.distance(pos);
                if distance <= POINT_RADIUS * 2.0
                    && nearest.is_none_or(|(best, _, _)| distance < best)
                {
                    nearest = Some((distance, series.label.as_str(), *point));
                }
            }
        }
    }
    if let Some((_, label, [x, y])) = nearest {
        response.on_hover_text(format!("{label}\nx: {x:.3}\ny: {y:.3}"));
    }
}

fn draw_grid(painter: &egui::Painter, rect: Rect, color: egui::Color32) {
    let stroke = egui::Stroke::new(1.0, color);
    for step in 0..=4 {
        let t = step as f32 / 4.0;
        let x = egui::lerp(rect.left()..=rect.right(), t);
        let y = egui::lerp(rect.top()..=rect.bottom(), t);
        painter.line_segment([Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())], stroke);
        painter.line_segment([Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)], stroke);
    }
}

fn to_screen(rect: Rect, bounds: PlotBounds, point: [f64; 2]) -> Pos2 {
    let tx = ((point[0] - bounds.min_x) / bounds.width()) as f32;
    let ty = ((point[1] - bounds.min_y) / bounds.height()) as f32;
    Pos2::new(
        egui::lerp(rect.left()..=rect.right(), tx),
        egui::lerp(rect.bottom()..=rect.top(), ty),
    )
}
