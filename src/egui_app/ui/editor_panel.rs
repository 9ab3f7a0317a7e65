//! Rendering for the text editor workspace.

use eframe::egui;
use egui::RichText;

use crate::buffer_search::MatchMode;
use crate::egui_app::style;
use crate::egui_app::ui::EguiApp;

const SHORTCUT_OPEN: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SHORTCUT_NEW: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::N);
const SHORTCUT_SAVE: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const SHORTCUT_DELETE: egui::KeyboardShortcut =
    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::D);

impl EguiApp {
    pub(super) fn render_editor_view(&mut self, ctx: &egui::Context) {
        self.consume_editor_shortcuts(ctx);
        self.render_editor_menu(ctx);
        self.render_search_panel(ctx);
        self.render_buffer(ctx);
    }

    fn consume_editor_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_SAVE)) {
            self.controller.save_file();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_OPEN)) {
            self.controller.open_text_file();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_NEW)) {
            self.controller.new_file();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SHORTCUT_DELETE)) {
            self.controller.delete_file();
        }
    }

    fn render_editor_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("editor_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open File...").clicked() {
                        self.controller.open_text_file();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("New Text File").clicked() {
                        self.controller.new_file();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Save").clicked() {
                        self.controller.save_file();
                        ui.close();
                    }
                    if ui.button("Save as...").clicked() {
                        self.controller.save_file_as();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Delete File").clicked() {
                        self.controller.delete_file();
                        ui.close();
                    }
                });
                ui.menu_button("Actions", |ui| {
                    if ui.button("Open CSV Viewer").clicked() {
                        self.controller.open_csv_viewer();
                        ui.close();
                    }
                    ui.separator();
                    let mut wrap = self.controller.word_wrap();
                    if ui.checkbox(&mut wrap, "Word Wrap").changed() {
                        self.controller.toggle_word_wrap();
                    }
                    ui.separator();
                    if ui.button("Close window").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        ui.close();
                    }
                });
                ui.menu_button("Edit", |ui| {
                    if ui.button("Cut").clicked() {
                        self.controller.cut_selection();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Copy").clicked() {
                        self.controller.copy_selection();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Paste").clicked() {
                        self.controller.paste_at_cursor();
                        ui.close();
                    }
                });
            });
        });
    }

    fn render_search_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("buffer_search")
            .resizable(true)
            .default_width(300.0)
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(RichText::new("Search").strong());
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    let entry = ui.add(
                        egui::TextEdit::singleline(&mut self.controller.ui.editor.search_entry)
                            .hint_text("keyword, keyword, ...")
                            .desired_width(ui.available_width() - 60.0),
                    );
                    let enter =
                        entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Run").clicked() || enter {
                        self.controller.run_buffer_search();
                    }
                });
                let mut mode = self.controller.ui.editor.match_mode;
                egui::ComboBox::from_id_salt("match_mode")
                    .selected_text(mode.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut mode, MatchMode::MatchCase, MatchMode::MatchCase.label());
                        ui.selectable_value(
                            &mut mode,
                            MatchMode::IgnoreCase,
                            MatchMode::IgnoreCase.label(),
                        );
                    });
                self.controller.ui.editor.match_mode = mode;
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.controller.clear_search_results();
                    }
                    if ui.button("Export...").clicked() {
                        self.controller.export_search_results();
                    }
                });
                ui.separator();
                egui::ScrollArea::vertical()
                    .id_salt("search_results")
                    .show(ui, |ui| {
                        if self.controller.ui.editor.results.is_empty() {
                            ui.label(
                                RichText::new("No results").color(style::palette().text_muted),
                            );
                        } else {
                            ui.label(self.controller.ui.editor.results.clone());
                        }
                    });
            });
    }

    fn render_buffer(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let wrap = self.controller.word_wrap();
            egui::ScrollArea::both()
                .id_salt("editor_scroll")
                .show(ui, |ui| {
                    let width = if wrap {
                        ui.available_width()
                    } else {
                        f32::INFINITY
                    };
                    let output = egui::TextEdit::multiline(self.controller.document.buffer_mut())
                        .id_salt("editor_buffer")
                        .frame(false)
                        .desired_width(width)
                        .desired_rows(24)
                        .show(ui);
                    if let Some(range) = output.state.cursor.char_range() {
                        let start = range.primary.index.min(range.secondary.index);
                        let end = range.primary.index.max(range.secondary.index);
                        self.controller.ui.editor.cursor = range.primary.index;
                        self.controller.ui.editor.selection =
                            (start != end).then_some((start, end));
                    }
                });
        });
    }
}
