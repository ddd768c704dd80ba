use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Outcome;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Fixed outcome encoding for the per-site pie: failure red, success green.
pub fn outcome_color(outcome: Outcome) -> Color32 {
    match outcome {
        Outcome::Failure => Color32::from_rgb(214, 48, 49),
        Outcome::Success => Color32::from_rgb(32, 160, 64),
    }
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps category labels (launch sites, booster categories) to distinct
/// colours. Built once per dataset so repeated chart selections stay
/// structurally identical.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    /// Build a colour map from an ordered label list; palette hues follow
    /// the given order.
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let palette = generate_palette(labels.len());
        let mapping: BTreeMap<String, Color32> = labels
            .iter()
            .zip(palette)
            .map(|(label, color)| (label.as_ref().to_string(), color))
            .collect();

        ColorMap { mapping }
    }

    /// Look up the colour for a label; unknown labels fall back to gray.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn map_is_stable_and_falls_back_to_gray() {
        let labels = ["CCAFS", "VAFB"];
        let a = ColorMap::new(&labels);
        let b = ColorMap::new(&labels);
        assert_eq!(a.color_for("CCAFS"), b.color_for("CCAFS"));
        assert_ne!(a.color_for("CCAFS"), a.color_for("VAFB"));
        assert_eq!(a.color_for("nowhere"), Color32::GRAY);
    }
}
