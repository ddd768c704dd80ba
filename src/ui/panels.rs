use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::SiteSelection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel: site dropdown and payload range sliders.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    let (sites, bounds) = match &state.table {
        Some(table) => (table.sites.clone(), table.payload_bounds),
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    let mut changed = false;

    // ---- Launch site dropdown ----
    ui.strong("Launch site");
    let selected_label = state.site.label().to_string();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(selected_label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.site == SiteSelection::All, "All Sites")
                .clicked()
            {
                state.site = SiteSelection::All;
                changed = true;
            }
            for site in &sites {
                let is_selected =
                    matches!(&state.site, SiteSelection::Site(cur) if cur == site);
                if ui.selectable_label(is_selected, site).clicked() {
                    state.site = SiteSelection::Site(site.clone());
                    changed = true;
                }
            }
        });

    ui.separator();

    // ---- Payload range sliders ----
    ui.strong("Payload range (kg)");
    let (min, max) = bounds;
    changed |= ui
        .add(
            egui::Slider::new(&mut state.payload_range.0, min..=max)
                .text("min")
                .suffix(" kg"),
        )
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut state.payload_range.1, min..=max)
                .text("max")
                .suffix(" kg"),
        )
        .changed();

    // An inverted range is allowed; it simply selects no rows.
    if state.payload_range.0 > state.payload_range.1 {
        ui.label(RichText::new("min above max: empty selection").weak());
    }

    if changed {
        state.refresh_charts();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let visible = state
                .scatter
                .as_ref()
                .map(|s| s.point_count())
                .unwrap_or(0);
            ui.label(format!(
                "{} launches loaded, {} in view",
                table.len(),
                visible
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
