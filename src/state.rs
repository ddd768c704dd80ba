use std::path::Path;

use crate::charts::select::{payload_scatter, success_pie};
use crate::charts::spec::{PieSpec, ScatterSpec};
use crate::color::ColorMap;
use crate::data::filter::SiteSelection;
use crate::data::model::LaunchTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Holds the immutable table, the current control values, and the two chart
/// specs rebuilt from them. The selectors themselves are stateless; this is
/// just the cache the host re-fills on every control change.
pub struct AppState {
    /// Loaded dataset (None until the user loads a file).
    pub table: Option<LaunchTable>,

    /// Current value of the site dropdown.
    pub site: SiteSelection,

    /// Current value of the payload range control, `(low, high)` in kg.
    pub payload_range: (f64, f64),

    /// Colour per launch site (all-sites pie slices).
    pub site_colors: ColorMap,

    /// Colour per booster version category (scatter series).
    pub booster_colors: ColorMap,

    /// Success pie spec for the current controls.
    pub pie: Option<PieSpec>,

    /// Payload/outcome scatter spec for the current controls.
    pub scatter: Option<ScatterSpec>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            site: SiteSelection::All,
            payload_range: (0.0, 0.0),
            site_colors: ColorMap::default(),
            booster_colors: ColorMap::default(),
            pie: None,
            scatter: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table: reset controls to their defaults
    /// (all sites, full payload range), rebuild colour maps, refresh charts.
    pub fn set_table(&mut self, table: LaunchTable) {
        self.site = SiteSelection::All;
        self.payload_range = table.payload_bounds;
        self.site_colors = ColorMap::new(&table.sites);
        self.booster_colors = ColorMap::new(&table.booster_categories);

        self.table = Some(table);
        self.status_message = None;
        self.loading = false;
        self.refresh_charts();
    }

    /// Re-run both selectors against the current control values.
    /// Called by the UI whenever a control changes.
    pub fn refresh_charts(&mut self) {
        if let Some(table) = &self.table {
            self.pie = Some(success_pie(table, &self.site_colors, &self.site));
            self.scatter = Some(payload_scatter(
                table,
                &self.booster_colors,
                &self.site,
                self.payload_range,
            ));
        }
    }

    /// Set the site dropdown value and refresh.
    pub fn set_site(&mut self, site: SiteSelection) {
        self.site = site;
        self.refresh_charts();
    }

    /// Load a dataset file, installing it on success and surfacing the
    /// error in the status line otherwise.
    pub fn load_from_path(&mut self, path: &Path) {
        self.loading = true;
        match crate::data::loader::load_file(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} launches across {} sites from {}",
                    table.len(),
                    table.sites.len(),
                    path.display()
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
                self.loading = false;
            }
        }
    }
}
