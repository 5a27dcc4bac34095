//! App module - contains the main application state and logic

mod form;
mod modals;
mod submit;

use submit::Submission;

use crate::constants::ENDPOINT_ENV_VAR;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use eframe::egui;
use std::path::PathBuf;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    // Form record, edited in place by the form panel
    pub(crate) details: UserDetails,
    pub(crate) focus_first_field: bool,
    // Submission
    pub(crate) submission: Submission,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) endpoint: String,
    pub(crate) endpoint_from_env: bool,
    // Blocking notification for the last submission
    pub(crate) alert: Option<Alert>,
    // Settings
    pub(crate) settings: Settings,
    pub(crate) show_settings: bool,
    pub(crate) endpoint_draft: String,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self::with_state(settings, data_dir, runtime)
    }

    /// State without any egui context setup
    pub(crate) fn with_state(settings: Settings, data_dir: PathBuf, runtime: tokio::runtime::Runtime) -> Self {
        let endpoint = settings.resolve_endpoint();
        let endpoint_from_env = std::env::var(ENDPOINT_ENV_VAR).is_ok_and(|v| !v.trim().is_empty());

        Self {
            details: UserDetails::default(),
            focus_first_field: true,
            submission: Submission::new(reqwest::Client::new()),
            runtime,
            endpoint_draft: endpoint.clone(),
            endpoint,
            endpoint_from_env,
            alert: None,
            settings,
            show_settings: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.save(&self.data_dir);
    }

    /// A modal is open, so the form underneath must not react to input
    pub fn modal_open(&self) -> bool {
        self.alert.is_some() || self.show_settings
    }
}
