//! egui renderer for the application UI.

use eframe::egui;
use egui::RichText;

use crate::egui_app::controller::EguiController;
use crate::egui_app::state::ActiveView;
use crate::egui_app::style;

mod editor_panel;
mod table_panel;

/// Smallest sensible window for either workspace.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(640.0, 400.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    last_title: String,
}

impl EguiApp {
    /// Create an app booting into the given workspace, loading persisted
    /// configuration.
    pub fn new(start: ActiveView) -> Result<Self, String> {
        let mut controller = EguiController::new(start);
        controller
            .load_configuration()
            .map_err(|err| format!("Failed to load config: {err}"))?;
        Ok(Self {
            controller,
            visuals_set: false,
            last_title: String::new(),
        })
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let title = self.controller.window_title();
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }

    fn handle_close_request(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if !self.controller.confirm_close() {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        }
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = &self.controller.ui.status;
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.painter().circle_filled(
                    ui.cursor().min + egui::vec2(7.0, 9.0),
                    6.0,
                    status.badge_color,
                );
                ui.add_space(16.0);
                ui.label(RichText::new(&status.badge_label));
                ui.separator();
                ui.label(RichText::new(&status.text).color(style::palette().text_muted));
            });
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.handle_close_request(ctx);
        self.sync_window_title(ctx);
        self.render_status(ctx);
        match self.controller.ui.active {
            ActiveView::Editor => self.render_editor_view(ctx),
            ActiveView::CsvViewer => self.render_table_view(ctx),
        }
    }
}
