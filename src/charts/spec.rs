use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Declarative chart specs
// ---------------------------------------------------------------------------
// Renderer-agnostic descriptions: the selectors produce them, `ui::plot`
// consumes them. `PartialEq` so idempotence is directly assertable.

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

/// A pie chart: title plus slices. Zero slices is a legal, empty chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieSpec {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One scatter series: all points sharing a booster version category.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    pub color: Color32,
    /// `[payload_mass_kg, outcome]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// A scatter chart: title plus per-category series.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSpec {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterSpec {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
