//! Modal dialogs (submission alert, settings)

use super::App;
use crate::constants::DEFAULT_ENDPOINT;
use crate::theme;
use crate::types::Alert;
use crate::ui::components::{field_label, status_banner, text_field};
use eframe::egui;
use tracing::info;

impl App {
    /// Blocking notification for the last submission. Backdrop swallows
    /// input to the form until dismissed.
    pub(crate) fn render_alert_modal(&mut self, ctx: &egui::Context) {
        let Some(alert) = &self.alert else {
            return;
        };

        let (icon, color) = match alert {
            Alert::Success => (egui_phosphor::regular::CHECK_CIRCLE, theme::STATUS_SUCCESS),
            Alert::Failure { .. } => (egui_phosphor::regular::WARNING_CIRCLE, theme::STATUS_ERROR),
        };
        let message = alert.message();
        let detail = alert.detail().map(str::to_string);

        let modal_area = egui::Modal::default_area(egui::Id::new("alert_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("alert_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut dismissed = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            status_banner(ui, icon, color, message);
            if let Some(detail) = &detail {
                ui.add_space(theme::SPACING_SM);
                ui.vertical_centered(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(detail)
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        )
                        .wrap(),
                    );
                });
            }
            ui.add_space(theme::SPACING_XL);

            ui.vertical_centered(|ui| {
                let ok = ui.add(
                    theme::button_accent(format!("{}  OK", egui_phosphor::regular::CHECK))
                        .min_size(egui::vec2(96.0, theme::BUTTON_HEIGHT)),
                );
                if ok.clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    dismissed = true;
                }
            });
        });

        if dismissed || modal_response.should_close() {
            self.alert = None;
        }
    }

    pub(crate) fn render_settings_modal(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let modal_area = egui::Modal::default_area(egui::Id::new("settings_modal"))
            .default_width(theme::MODAL_WIDTH + theme::SPACING_XL * 2.0);
        let modal = egui::Modal::new(egui::Id::new("settings_modal"))
            .area(modal_area)
            .backdrop_color(egui::Color32::from_black_alpha(180))
            .frame(theme::modal_frame());

        let mut done = false;
        let modal_response = modal.show(ctx, |ui| {
            ui.set_min_width(theme::MODAL_WIDTH);
            ui.set_max_width(theme::MODAL_WIDTH);

            ui.label(egui::RichText::new("Settings").size(theme::FONT_TITLE).strong());
            ui.add_space(theme::SPACING_LG);

            field_label(ui, "ENDPOINT");
            ui.add_space(theme::SPACING_SM);
            let id = ui.make_persistent_id("endpoint_input");
            ui.add_enabled_ui(!self.endpoint_from_env, |ui| {
                text_field(ui, id, &mut self.endpoint_draft, DEFAULT_ENDPOINT);
            });
            if self.endpoint_from_env {
                ui.add_space(theme::SPACING_SM);
                ui.label(
                    egui::RichText::new(format!(
                        "Overridden by {}",
                        crate::constants::ENDPOINT_ENV_VAR
                    ))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_DIM),
                );
            }

            ui.add_space(theme::SPACING_XL);
            ui.horizontal(|ui| {
                ui.set_min_height(theme::BUTTON_HEIGHT);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .add(theme::button_accent(format!("{}  Done", egui_phosphor::regular::CHECK)))
                        .clicked()
                    {
                        done = true;
                    }
                    ui.add_space(theme::SPACING_MD);
                    let reset = ui.add_enabled(
                        !self.endpoint_from_env,
                        theme::button(format!(
                            "{}  Reset",
                            egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                        )),
                    );
                    if reset.clicked() {
                        self.endpoint_draft = DEFAULT_ENDPOINT.to_string();
                    }
                });
            });
        });

        if done {
            self.close_settings(true);
        } else if modal_response.should_close() {
            // Escape / click outside discards the edit
            self.close_settings(false);
        }
    }

    pub(crate) fn open_settings(&mut self) {
        self.endpoint_draft = self.endpoint.clone();
        self.show_settings = true;
    }

    /// Close the settings modal. Only `commit` keeps and persists the edited endpoint.
    pub(crate) fn close_settings(&mut self, commit: bool) {
        self.show_settings = false;
        if commit && !self.endpoint_from_env {
            self.apply_endpoint_draft();
        }
        self.endpoint_draft = self.endpoint.clone();
    }

    fn apply_endpoint_draft(&mut self) {
        let draft = self.endpoint_draft.trim().to_string();
        let saved = if draft.is_empty() || draft == DEFAULT_ENDPOINT {
            None
        } else {
            Some(draft)
        };
        if saved != self.settings.endpoint {
            self.settings.endpoint = saved;
            self.endpoint = self.settings.resolve_endpoint();
            info!(url = %self.endpoint, "Endpoint changed");
            self.save_settings();
        }
    }
}
