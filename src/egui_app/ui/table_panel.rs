//! Rendering for the CSV viewer workspace.

use eframe::egui;
use egui::RichText;

use crate::dataset::ColumnScope;
use crate::egui_app::style;
use crate::egui_app::ui::EguiApp;

impl EguiApp {
    pub(super) fn render_table_view(&mut self, ctx: &egui::Context) {
        self.consume_table_drops(ctx);
        self.render_table_menu(ctx);
        self.render_file_list(ctx);
        self.render_table(ctx);
    }

    fn consume_table_drops(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if !dropped.is_empty() {
            self.controller.handle_dropped_files(dropped);
        }
    }

    fn render_table_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("table_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Save file").clicked() {
                        self.controller.save_table_as();
                        ui.close();
                    }
                });
                ui.separator();
                let entry = ui.add(
                    egui::TextEdit::singleline(&mut self.controller.ui.table.search_entry)
                        .hint_text("col=value,col=value")
                        .desired_width(280.0),
                );
                if entry.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    self.controller.run_table_search();
                }
                let mut scope = self.controller.workspace.scope();
                let changed = egui::ComboBox::from_id_salt("column_scope")
                    .selected_text(scope.label())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut scope,
                            ColumnScope::AllColumns,
                            ColumnScope::AllColumns.label(),
                        )
                        .changed()
                            | ui.selectable_value(
                                &mut scope,
                                ColumnScope::SearchedColumns,
                                ColumnScope::SearchedColumns.label(),
                            )
                            .changed()
                    });
                if changed.inner.unwrap_or(false) {
                    self.controller.set_column_scope(scope);
                }
            });
        });
    }

    fn render_file_list(&mut self, ctx: &egui::Context) {
        let mut load = None;
        let mut reveal = None;
        egui::SidePanel::left("file_list")
            .resizable(true)
            .default_width(220.0)
            .min_width(160.0)
            .show(ctx, |ui| {
                ui.add_space(6.0);
                ui.label(RichText::new("Files").strong());
                ui.add_space(4.0);
                let names: Vec<String> = self
                    .controller
                    .workspace
                    .files()
                    .iter()
                    .map(|entry| entry.name.clone())
                    .collect();
                if names.is_empty() {
                    ui.label(
                        RichText::new("Drop .csv files here")
                            .color(style::palette().text_muted),
                    );
                }
                egui::ScrollArea::vertical()
                    .id_salt("file_list_scroll")
                    .show(ui, |ui| {
                        for (index, name) in names.iter().enumerate() {
                            let selected =
                                self.controller.ui.table.selected_file == Some(index);
                            let response = ui.selectable_label(selected, name);
                            if response.double_clicked() {
                                load = Some(index);
                            } else if response.clicked() {
                                self.controller.ui.table.selected_file = Some(index);
                            }
                            response.context_menu(|ui| {
                                if ui.button("Reveal in folder").clicked() {
                                    reveal = Some(index);
                                    ui.close();
                                }
                            });
                        }
                    });
            });
        if let Some(index) = load {
            self.controller.load_file_at(index);
        }
        if let Some(index) = reveal {
            self.controller.reveal_in_folder(index);
        }
    }

    fn render_table(&mut self, ctx: &egui::Context) {
        // Snapshot the visible cells so the grid loop can hand out mutable
        // access to the edit session without holding a borrow on the table.
        let Some((headers, rows)) = self.visible_cells() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Double-click a file to load it")
                            .color(style::palette().text_muted),
                    );
                });
            });
            return;
        };

        let mut begin = None;
        let mut commit = false;
        let mut cancel = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().id_salt("table_scroll").show(ui, |ui| {
                egui::Grid::new("csv_grid")
                    .striped(true)
                    .min_col_width(80.0)
                    .show(ui, |ui| {
                        for header in &headers {
                            ui.label(RichText::new(header).strong());
                        }
                        ui.end_row();
                        for (visible_row, cells) in rows.iter().enumerate() {
                            for (visible_column, (row, column, text)) in
                                cells.iter().enumerate()
                            {
                                let editing = self
                                    .controller
                                    .workspace
                                    .edit
                                    .as_ref()
                                    .is_some_and(|e| e.row == *row && e.column == *column);
                                if editing {
                                    let (done, abandoned) = render_cell_editor(
                                        ui,
                                        &mut self.controller.workspace,
                                    );
                                    commit |= done;
                                    cancel |= abandoned;
                                } else {
                                    let response = ui.add(
                                        egui::Label::new(text)
                                            .sense(egui::Sense::click()),
                                    );
                                    if response.double_clicked() {
                                        begin = Some((visible_row, visible_column));
                                    }
                                }
                            }
                            ui.end_row();
                        }
                    });
            });
        });

        if let Some((visible_row, visible_column)) = begin {
            self.controller.workspace.begin_edit(visible_row, visible_column);
        }
        if commit {
            self.controller.workspace.commit_edit();
        } else if cancel {
            self.controller.workspace.cancel_edit();
        }
    }

    /// Visible header names plus, per visible row, `(backing_row,
    /// backing_column, text)` for each visible cell.
    #[allow(clippy::type_complexity)]
    fn visible_cells(&self) -> Option<(Vec<String>, Vec<Vec<(usize, usize, String)>>)> {
        let loaded = self.controller.workspace.loaded()?;
        let headers = loaded
            .view
            .columns
            .iter()
            .map(|&column| loaded.table.columns()[column].clone())
            .collect();
        let rows = loaded
            .view
            .rows
            .iter()
            .map(|&row| {
                loaded
                    .view
                    .columns
                    .iter()
                    .map(|&column| {
                        let text = loaded.table.cell(row, column).unwrap_or_default();
                        (row, column, text.to_string())
                    })
                    .collect()
            })
            .collect();
        Some((headers, rows))
    }
}

/// Render the inline cell editor; returns `(commit, cancel)`.
fn render_cell_editor(
    ui: &mut egui::Ui,
    workspace: &mut crate::workspace::CsvWorkspace,
) -> (bool, bool) {
    let Some(edit) = workspace.edit.as_mut() else {
        return (false, false);
    };
    let output = egui::TextEdit::singleline(&mut edit.text)
        .id_salt(("cell_edit", edit.row, edit.column))
        .desired_width(120.0)
        .show(ui);
    let response = output.response;
    if edit.take_focus {
        response.request_focus();
        let mut state = output.state;
        state
            .cursor
            .set_char_range(Some(egui::text::CCursorRange::select_all(&output.galley)));
        state.store(ui.ctx(), response.id);
        edit.take_focus = false;
        return (false, false);
    }
    let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
    let escape = ui.input(|i| i.key_pressed(egui::Key::Escape));
    if enter && (response.has_focus() || response.lost_focus()) {
        (true, false)
    } else if escape || (response.lost_focus() && !enter) {
        (false, true)
    } else {
        (false, false)
    }
}
