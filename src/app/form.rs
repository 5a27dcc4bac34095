//! Form panel: one input per user-details field plus the submit button

use super::App;
use crate::theme;
use crate::types::UserField;
use crate::ui::components::{field_label, gender_field, text_field};
use eframe::egui;

impl App {
    pub(crate) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_ELEVATED)
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(egui_phosphor::regular::GLOBE_SIMPLE)
                            .size(theme::FONT_SMALL + 1.0)
                            .color(theme::TEXT_DIM),
                    );
                    ui.label(
                        egui::RichText::new(&self.endpoint)
                            .size(theme::FONT_SMALL)
                            .color(theme::TEXT_MUTED),
                    );
                    if self.endpoint_from_env {
                        ui.label(
                            egui::RichText::new("(from environment)")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_DIM),
                        );
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.submission.is_sending() {
                            ui.spinner();
                        }
                    });
                });
            });
    }

    pub(crate) fn render_form(&mut self, ctx: &egui::Context) {
        let mut submit = false;
        let sending = self.submission.is_sending();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8)),
            )
            .show(ctx, |ui| {
                // Header: title + settings
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("User Details")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let gear = ui
                            .add(theme::button(egui_phosphor::regular::GEAR_SIX))
                            .on_hover_text("Settings");
                        if gear.clicked() {
                            self.open_settings();
                        }
                    });
                });
                ui.add_space(theme::SPACING_LG);

                ui.vertical_centered(|ui| {
                    theme::card_frame().show(ui, |ui| {
                        ui.set_width(theme::FORM_WIDTH);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            for field in UserField::ALL {
                                field_label(ui, field.label());
                                ui.add_space(theme::SPACING_SM);

                                let id = ui.make_persistent_id(field.label());
                                let value = self.details.field_mut(field);
                                let response = if field == UserField::Gender {
                                    gender_field(ui, id, value, field.hint())
                                } else {
                                    text_field(ui, id, value, field.hint())
                                };
                                if self.focus_first_field && field == UserField::ALL[0] {
                                    self.focus_first_field = false;
                                    response.request_focus();
                                }
                                // Enter submits, like an HTML form
                                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                                    submit = true;
                                }
                                ui.add_space(theme::SPACING_LG);
                            }

                            ui.add_space(theme::SPACING_SM);
                            ui.horizontal(|ui| {
                                let label = if sending {
                                    "Sending...".to_string()
                                } else {
                                    format!("{}  Submit", egui_phosphor::regular::PAPER_PLANE_RIGHT)
                                };
                                let button = ui.add_enabled(
                                    !sending,
                                    theme::button_accent(label)
                                        .min_size(egui::vec2(120.0, theme::BUTTON_HEIGHT_LARGE)),
                                );
                                if button.clicked() {
                                    submit = true;
                                }
                                if sending {
                                    ui.spinner();
                                }
                            });
                        });
                    });
                });
            });

        if submit && !self.modal_open() {
            self.submit_form(ctx);
        }
    }
}
