use crate::color::{outcome_color, ColorMap};
use crate::data::filter::{filtered_indices, SiteSelection};
use crate::data::model::{LaunchTable, Outcome};

use super::spec::{PieSlice, PieSpec, ScatterSeries, ScatterSpec};

// ---------------------------------------------------------------------------
// Chart selectors
// ---------------------------------------------------------------------------
// Pure functions from (table, control values) to a chart spec. The color
// maps are derived once from the table, so identical inputs always yield
// structurally identical specs.

/// Build the success pie chart for the current site selection.
///
/// * `All Sites`: one slice per site, value = that site's success count
///   (outcomes are 0/1, so summing them counts successes).
/// * A single site: one slice per outcome value present among its rows,
///   failure red, success green.
///
/// A site string with no matching rows produces a pie with zero slices;
/// that is a legal output, not an error.
pub fn success_pie(
    table: &LaunchTable,
    site_colors: &ColorMap,
    selection: &SiteSelection,
) -> PieSpec {
    match selection {
        SiteSelection::All => {
            let slices = table
                .sites
                .iter()
                .map(|site| PieSlice {
                    label: site.clone(),
                    value: table
                        .records
                        .iter()
                        .filter(|rec| rec.site == *site)
                        .map(|rec| rec.outcome.as_f64())
                        .sum(),
                    color: site_colors.color_for(site),
                })
                .collect();

            PieSpec {
                title: "Total Success Launches By Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let mut failures = 0usize;
            let mut successes = 0usize;
            for rec in table.records.iter().filter(|rec| rec.site == *name) {
                match rec.outcome {
                    Outcome::Failure => failures += 1,
                    Outcome::Success => successes += 1,
                }
            }

            let slices = [(Outcome::Failure, failures), (Outcome::Success, successes)]
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(outcome, count)| PieSlice {
                    label: outcome.label().to_string(),
                    value: count as f64,
                    color: outcome_color(outcome),
                })
                .collect();

            PieSpec {
                title: format!("Total Success Launches for site {name}"),
                slices,
            }
        }
    }
}

/// Build the payload/outcome scatter chart for the current site selection
/// and payload range.
///
/// The payload filter is applied first (inclusive bounds, inverted range
/// keeps nothing), then the site filter. Surviving rows become points
/// (x = payload mass, y = outcome) grouped into one series per booster
/// version category, in the table's first-seen category order.
pub fn payload_scatter(
    table: &LaunchTable,
    booster_colors: &ColorMap,
    selection: &SiteSelection,
    range: (f64, f64),
) -> ScatterSpec {
    let indices = filtered_indices(table, selection, Some(range));

    let series = table
        .booster_categories
        .iter()
        .filter_map(|category| {
            let points: Vec<[f64; 2]> = indices
                .iter()
                .map(|&i| &table.records[i])
                .filter(|rec| rec.booster_category == *category)
                .map(|rec| [rec.payload_mass_kg, rec.outcome.as_f64()])
                .collect();

            if points.is_empty() {
                return None;
            }
            Some(ScatterSeries {
                label: category.clone(),
                color: booster_colors.color_for(category),
                points,
            })
        })
        .collect();

    let title = match selection {
        SiteSelection::All => {
            "Correlation between Payload and Success for All Sites".to_string()
        }
        SiteSelection::Site(name) => {
            format!("Correlation between Payload and Success for site {name}")
        }
    };

    ScatterSpec { title, series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn rec(site: &str, payload: f64, outcome: Outcome, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            outcome,
            booster_category: booster.to_string(),
        }
    }

    /// CCAFS: 3 successes, 1 failure; VAFB: 1 success, 2 failures.
    fn scenario_table() -> LaunchTable {
        LaunchTable::from_records(vec![
            rec("CCAFS", 500.0, Outcome::Success, "v1.0"),
            rec("CCAFS", 1000.0, Outcome::Success, "v1.0"),
            rec("CCAFS", 6000.0, Outcome::Success, "FT"),
            rec("CCAFS", 7000.0, Outcome::Failure, "FT"),
            rec("VAFB", 1000.0, Outcome::Success, "FT"),
            rec("VAFB", 7000.0, Outcome::Failure, "B4"),
            rec("VAFB", 12000.0, Outcome::Failure, "B4"),
        ])
        .unwrap()
    }

    fn site_colors(table: &LaunchTable) -> ColorMap {
        ColorMap::new(&table.sites)
    }

    fn booster_colors(table: &LaunchTable) -> ColorMap {
        ColorMap::new(&table.booster_categories)
    }

    #[test]
    fn pie_all_sums_successes_per_site() {
        let table = scenario_table();
        let pie = success_pie(&table, &site_colors(&table), &SiteSelection::All);

        assert_eq!(pie.title, "Total Success Launches By Site");
        assert_eq!(pie.slices.len(), table.sites.len());
        assert_eq!(pie.slices[0].label, "CCAFS");
        assert_eq!(pie.slices[0].value, 3.0);
        assert_eq!(pie.slices[1].label, "VAFB");
        assert_eq!(pie.slices[1].value, 1.0);
    }

    #[test]
    fn pie_single_site_counts_both_outcomes() {
        let table = scenario_table();
        let sel = SiteSelection::Site("CCAFS".to_string());
        let pie = success_pie(&table, &site_colors(&table), &sel);

        assert_eq!(pie.title, "Total Success Launches for site CCAFS");
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.slices[0].label, "Failure");
        assert_eq!(pie.slices[0].value, 1.0);
        assert_eq!(pie.slices[1].label, "Success");
        assert_eq!(pie.slices[1].value, 3.0);
        // Slice values sum to the site's total row count.
        assert_eq!(pie.total(), 4.0);
    }

    #[test]
    fn pie_single_outcome_site_has_one_slice() {
        let table = LaunchTable::from_records(vec![
            rec("KSC", 100.0, Outcome::Success, "B5"),
            rec("KSC", 200.0, Outcome::Success, "B5"),
        ])
        .unwrap();
        let sel = SiteSelection::Site("KSC".to_string());
        let pie = success_pie(&table, &site_colors(&table), &sel);

        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "Success");
        assert_eq!(pie.slices[0].value, 2.0);
    }

    #[test]
    fn pie_unknown_site_is_empty_not_an_error() {
        let table = scenario_table();
        let sel = SiteSelection::Site("Boca Chica".to_string());
        let pie = success_pie(&table, &site_colors(&table), &sel);

        assert!(pie.slices.is_empty());
        assert_eq!(pie.total(), 0.0);
    }

    #[test]
    fn scatter_range_filter_is_inclusive() {
        // Rows at 500, 6000, 12000 with range [0, 10000]: the 12000 row is out.
        let table = LaunchTable::from_records(vec![
            rec("CCAFS", 500.0, Outcome::Success, "v1.0"),
            rec("CCAFS", 6000.0, Outcome::Failure, "FT"),
            rec("VAFB", 12000.0, Outcome::Success, "FT"),
        ])
        .unwrap();
        let scatter = payload_scatter(
            &table,
            &booster_colors(&table),
            &SiteSelection::All,
            (0.0, 10000.0),
        );

        assert_eq!(scatter.point_count(), 2);
        assert_eq!(
            scatter.title,
            "Correlation between Payload and Success for All Sites"
        );
    }

    #[test]
    fn scatter_site_and_range_combine() {
        // VAFB rows at 1000 (success) and 7000 (failure); range [0, 5000]
        // keeps exactly the 1000 point.
        let table = scenario_table();
        let sel = SiteSelection::Site("VAFB".to_string());
        let scatter =
            payload_scatter(&table, &booster_colors(&table), &sel, (0.0, 5000.0));

        assert_eq!(scatter.point_count(), 1);
        assert_eq!(scatter.series.len(), 1);
        assert_eq!(scatter.series[0].label, "FT");
        assert_eq!(scatter.series[0].points, vec![[1000.0, 1.0]]);
        assert_eq!(
            scatter.title,
            "Correlation between Payload and Success for site VAFB"
        );
    }

    #[test]
    fn scatter_inverted_range_is_empty() {
        let table = scenario_table();
        let scatter = payload_scatter(
            &table,
            &booster_colors(&table),
            &SiteSelection::All,
            (5000.0, 100.0),
        );
        assert_eq!(scatter.point_count(), 0);
        assert!(scatter.series.is_empty());
    }

    #[test]
    fn scatter_widening_range_only_adds_points() {
        let table = scenario_table();
        let colors = booster_colors(&table);
        let (min, max) = table.payload_bounds;

        let full = payload_scatter(&table, &colors, &SiteSelection::All, (min, max));
        assert_eq!(full.point_count(), table.len());

        let narrow =
            payload_scatter(&table, &colors, &SiteSelection::All, (1000.0, 7000.0));
        assert!(narrow.point_count() <= full.point_count());

        // Out-of-bounds range values filter nothing extra.
        let wide = payload_scatter(
            &table,
            &colors,
            &SiteSelection::All,
            (min - 1000.0, max + 1000.0),
        );
        assert_eq!(wide.point_count(), full.point_count());
    }

    #[test]
    fn scatter_min_min_boundary() {
        let table = scenario_table();
        let (min, _) = table.payload_bounds;
        let scatter = payload_scatter(
            &table,
            &booster_colors(&table),
            &SiteSelection::All,
            (min, min),
        );

        let expected = table
            .records
            .iter()
            .filter(|rec| rec.payload_mass_kg == min)
            .count();
        assert_eq!(scatter.point_count(), expected);
    }

    #[test]
    fn selectors_are_idempotent() {
        let table = scenario_table();
        let sites = site_colors(&table);
        let boosters = booster_colors(&table);
        let sel = SiteSelection::Site("CCAFS".to_string());

        assert_eq!(
            success_pie(&table, &sites, &sel),
            success_pie(&table, &sites, &sel)
        );
        assert_eq!(
            payload_scatter(&table, &boosters, &sel, (0.0, 8000.0)),
            payload_scatter(&table, &boosters, &sel, (0.0, 8000.0))
        );
    }

    #[test]
    fn scatter_is_subset_of_pie_rows_for_same_site() {
        let table = scenario_table();
        let sel = SiteSelection::Site("CCAFS".to_string());
        let pie = success_pie(&table, &site_colors(&table), &sel);
        let scatter = payload_scatter(
            &table,
            &booster_colors(&table),
            &sel,
            (0.0, 6500.0),
        );

        assert!(scatter.point_count() as f64 <= pie.total());
    }
}
