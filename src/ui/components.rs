//! Reusable UI components
//!
//! Standalone form widgets styled from theme.rs.

use crate::constants::GENDER_OPTIONS;
use crate::theme;
use eframe::egui;

/// Small uppercase caption above a field
pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.add(
        egui::Label::new(
            egui::RichText::new(text)
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_DIM),
        )
        .selectable(false),
    );
}

/// Single-line text field inside a bordered frame.
/// Returns the inner `TextEdit` response.
pub fn text_field(ui: &mut egui::Ui, id: egui::Id, value: &mut String, hint: &str) -> egui::Response {
    let focused = ui.ctx().memory(|m| m.has_focus(id));
    theme::input_frame(focused)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(value)
                    .id(id)
                    .hint_text(egui::RichText::new(hint).color(theme::TEXT_DIM))
                    .frame(false)
                    .desired_width(ui.available_width()),
            )
        })
        .inner
}

/// Free-text gender field with a menu of suggestions next to it. Picking a
/// suggestion writes into the same string; nothing restricts what is typed.
/// Returns the `TextEdit` response.
pub fn gender_field(ui: &mut egui::Ui, id: egui::Id, value: &mut String, hint: &str) -> egui::Response {
    ui.horizontal(|ui| {
        let menu_width = theme::BUTTON_HEIGHT + theme::SPACING_MD;
        let field_size = egui::vec2(ui.available_width() - menu_width, theme::BUTTON_HEIGHT);
        let response = ui
            .allocate_ui(field_size, |ui| text_field(ui, id, value, hint))
            .inner;

        ui.menu_button(egui_phosphor::regular::CARET_DOWN, |ui| {
            if ui.button("Not selected").clicked() {
                choose_gender(value, None);
                ui.close_menu();
            }
            ui.separator();
            for option in GENDER_OPTIONS {
                if ui.button(*option).clicked() {
                    choose_gender(value, Some(*option));
                    ui.close_menu();
                }
            }
        });

        response
    })
    .inner
}

/// Apply a suggestion menu pick. `None` clears the field.
pub fn choose_gender(value: &mut String, option: Option<&str>) {
    value.clear();
    if let Some(option) = option {
        value.push_str(option);
    }
}

/// Centered icon + message block used by the alert modal
pub fn status_banner(ui: &mut egui::Ui, icon: &str, color: egui::Color32, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(theme::SPACING_MD);
        ui.label(egui::RichText::new(icon).size(theme::ICON_ALERT).color(color));
        ui.add_space(theme::SPACING_MD);
        ui.label(egui::RichText::new(message).size(theme::FONT_BODY + 2.0).strong());
    });
}
