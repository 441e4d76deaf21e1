//! Draws a `RenderedTable`. Rows are rebuilt from scratch every frame.

use eframe::egui;
use shared::domain::SortColumn;
use table_core::render::{CellStyle, HeaderCell, Placeholder, RenderedCell, RenderedTable};
use table_core::TableBody;

const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(0xE0, 0x40, 0x40);

/// Shows the table and returns the header the user clicked this frame, if any.
pub fn show_table(ui: &mut egui::Ui, table: &RenderedTable) -> Option<SortColumn> {
    let mut clicked = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("benchmark_table")
                .num_columns(table.headers.len())
                .striped(true)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for header in &table.headers {
                        if header_button(ui, header) {
                            clicked = Some(header.column);
                        }
                    }
                    ui.end_row();

                    if let TableBody::Rows(rows) = &table.body {
                        for row in rows {
                            for cell in &row.cells {
                                show_cell(ui, cell);
                            }
                            ui.end_row();
                        }
                    }
                });

            if let TableBody::Placeholder(placeholder) = &table.body {
                show_placeholder(ui, placeholder);
            }
        });

    clicked
}

fn header_button(ui: &mut egui::Ui, header: &HeaderCell) -> bool {
    let glyph_color = ui
        .visuals()
        .strong_text_color()
        .gamma_multiply(header.glyph_opacity());

    ui.horizontal(|ui| {
        let label = ui
            .add(egui::Label::new(egui::RichText::new(header.label).strong()).sense(egui::Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        let glyph = ui.add(
            egui::Label::new(egui::RichText::new(header.glyph.to_string()).color(glyph_color))
                .sense(egui::Sense::click()),
        );
        label.clicked() || glyph.clicked()
    })
    .inner
}

fn show_cell(ui: &mut egui::Ui, cell: &RenderedCell) {
    let text = egui::RichText::new(&cell.text);
    let text = match cell.style {
        CellStyle::Emphasized => text.strong(),
        CellStyle::Plain => text,
        CellStyle::Monospace => text.monospace(),
    };
    ui.label(text);
}

fn show_placeholder(ui: &mut egui::Ui, placeholder: &Placeholder) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        let text = egui::RichText::new(&placeholder.message);
        let text = if placeholder.is_error() {
            text.color(ERROR_COLOR)
        } else {
            text.weak()
        };
        ui.label(text);
    });
}
