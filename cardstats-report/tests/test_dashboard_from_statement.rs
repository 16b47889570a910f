use cardstats_core::{category_totals, weekly_matrix, ColorStreams};
use cardstats_ingest::{ingest, HtmlTableReader, Section};
use cardstats_report::{export_rows, Dashboard, PanelKind};
use rust_decimal_macros::dec;
use std::path::PathBuf;

fn statement_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("fixtures")
        .join("card_activity.html")
}

fn statement_html() -> String {
    std::fs::read_to_string(statement_path()).expect("fixture statement page")
}

/// Real-page regression: default selector → scan → dashboard.
#[test]
fn test_dashboard_from_statement_page() {
    let scan = ingest(&HtmlTableReader::new(statement_html())).unwrap();

    assert_eq!(scan.debit.len(), 4);
    assert_eq!(scan.meal_swipes.len(), 3);
    assert_eq!(scan.flex.len(), 3);
    assert_eq!(scan.meal_plan_type, "Block 200 Meal Plan");

    assert_eq!(scan.skipped.len(), 1);
    assert_eq!(scan.skipped[0].section, Section::Debit);
    assert_eq!(scan.skipped[0].index, 8);

    let mut colors = ColorStreams::seeded(2023);
    let dash = Dashboard::build(&scan, &mut colors);
    assert_eq!(dash.skipped_rows, 1);

    let debit = dash.panel(PanelKind::DebitAccount).unwrap();
    assert_eq!(debit.total, dec!(15.00));
    assert_eq!(debit.pie.labels, ["Crossroads", "Golden Bear Cafe"]);
    assert_eq!(debit.pie.values, [5.0, 10.0]);
    assert_eq!(
        debit.bar.labels,
        [
            "Sun Jan 08 2023 to Sat Jan 14 2023",
            "Sun Jan 15 2023 to Sat Jan 21 2023",
        ]
    );
    assert_eq!(debit.bar.datasets[0].label, "Crossroads");
    assert_eq!(debit.bar.datasets[0].data, [5.0, 0.0]);
    assert_eq!(debit.bar.datasets[1].data, [3.0, 7.0]);

    let meals = dash.panel(PanelKind::MealSwipes).unwrap();
    assert_eq!(meals.total, dec!(4));
    assert_eq!(meals.pie.labels, ["Crossroads", "Foothill"]);
    assert_eq!(meals.pie.values, [3.0, 1.0]);

    let flex = dash.panel(PanelKind::FlexDollars).unwrap();
    assert_eq!(flex.total, dec!(6.75));
    assert_eq!(flex.pie.labels, ["Bear Market"]);
}

#[test]
fn test_totals_agree_with_weekly_matrix() {
    let scan = ingest(&HtmlTableReader::new(statement_html())).unwrap();
    let spends: Vec<_> = scan.debit.iter().filter(|t| t.is_spend()).cloned().collect();

    let totals = category_totals(&spends, |t| t.location.as_str(), |t| t.amount);
    let matrix = weekly_matrix(&spends, |t| t.location.as_str(), |t| t.amount);
    assert_eq!(matrix.total(), totals.total());
}

#[test]
fn test_seeded_colors_are_stable_across_builds() {
    let scan = ingest(&HtmlTableReader::new(statement_html())).unwrap();

    let a = Dashboard::build(&scan, &mut ColorStreams::seeded(5));
    let b = Dashboard::build(&scan, &mut ColorStreams::seeded(5));
    assert_eq!(a, b);
}

#[test]
fn test_export_covers_every_record() {
    let scan = ingest(&HtmlTableReader::new(statement_html())).unwrap();
    let rows = export_rows(&scan);
    assert_eq!(rows.len(), scan.record_count());
    assert_eq!(rows[0].location, "Crossroads");
}
