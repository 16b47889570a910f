//! Dashboard: the three statement panels with their totals and charts.

use cardstats_core::{
    category_totals, weekly_matrix, CategoryTotals, ColorStreams, Dated, MealSwipeTransaction,
    MoneyTransaction, WeeklyMatrix,
};
use cardstats_ingest::ScanOutput;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{BarChart, PieChart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelKind {
    MealSwipes,
    FlexDollars,
    DebitAccount,
}

impl PanelKind {
    /// Panel order on the page; also the color stream of both charts in the panel
    pub const ALL: [PanelKind; 3] = [
        PanelKind::MealSwipes,
        PanelKind::FlexDollars,
        PanelKind::DebitAccount,
    ];

    pub fn stream_id(&self) -> u32 {
        match self {
            PanelKind::MealSwipes => 0,
            PanelKind::FlexDollars => 1,
            PanelKind::DebitAccount => 2,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PanelKind::MealSwipes => "Meal Swipes",
            PanelKind::FlexDollars => "Flex Dollars",
            PanelKind::DebitAccount => "Debit Account",
        }
    }

    pub fn total_caption(&self) -> &'static str {
        match self {
            PanelKind::MealSwipes => "Total Swipes Used",
            PanelKind::FlexDollars => "Total Flex Dollars Spent",
            PanelKind::DebitAccount => "Total Debit Spent",
        }
    }
}

/// One panel: headline total, per-location pie, per-week stacked bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    pub kind: PanelKind,
    pub title: String,
    /// Swipe count or dollars spent (magnitude)
    pub total: Decimal,
    pub pie: PieChart,
    pub bar: BarChart,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub meal_plan_type: String,
    pub panels: Vec<Panel>,
    /// Rows dropped while scanning
    pub skipped_rows: usize,
}

impl Dashboard {
    /// Build every panel from one scan.
    ///
    /// Money panels only count spends; deposits and refunds are left out.
    pub fn build(scan: &ScanOutput, colors: &mut ColorStreams) -> Self {
        let spends = |txns: &[MoneyTransaction]| -> Vec<MoneyTransaction> {
            txns.iter().filter(|t| t.is_spend()).cloned().collect()
        };

        let panels = PanelKind::ALL
            .into_iter()
            .map(|kind| match kind {
                PanelKind::MealSwipes => swipe_panel(&scan.meal_swipes, colors),
                PanelKind::FlexDollars => money_panel(kind, &spends(&scan.flex), colors),
                PanelKind::DebitAccount => money_panel(kind, &spends(&scan.debit), colors),
            })
            .collect();

        Dashboard {
            meal_plan_type: scan.meal_plan_type.clone(),
            panels,
            skipped_rows: scan.skipped.len(),
        }
    }

    pub fn panel(&self, kind: PanelKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

fn swipe_panel(swipes: &[MealSwipeTransaction], colors: &mut ColorStreams) -> Panel {
    let value = |t: &MealSwipeTransaction| Decimal::from(t.swipes);
    let total: Decimal = swipes.iter().map(value).sum();
    build_panel(
        PanelKind::MealSwipes,
        total,
        category_totals(swipes, |t| t.location.as_str(), value),
        weekly_matrix(swipes, |t| t.location.as_str(), value),
        colors,
    )
}

fn money_panel(kind: PanelKind, spends: &[MoneyTransaction], colors: &mut ColorStreams) -> Panel {
    let total: Decimal = spends.iter().map(MoneyTransaction::abs_amount).sum();
    build_panel(
        kind,
        total,
        category_totals(spends, |t| t.location.as_str(), |t| t.amount),
        weekly_matrix(spends, |t| t.location.as_str(), |t| t.amount),
        colors,
    )
}

fn build_panel(
    kind: PanelKind,
    total: Decimal,
    totals: CategoryTotals,
    matrix: WeeklyMatrix,
    colors: &mut ColorStreams,
) -> Panel {
    debug!(
        panel = kind.title(),
        locations = totals.len(),
        weeks = matrix.weeks().count(),
        "panel built"
    );
    Panel {
        kind,
        title: kind.title().to_string(),
        total,
        pie: PieChart::from_totals(&totals, colors, kind.stream_id()),
        bar: BarChart::from_matrix(&matrix, colors, kind.stream_id()),
    }
}

/// First and last record dates across the whole scan
pub fn date_range(scan: &ScanOutput) -> Option<(chrono::NaiveDateTime, chrono::NaiveDateTime)> {
    let dates = scan
        .debit
        .iter()
        .map(Dated::date)
        .chain(scan.flex.iter().map(Dated::date))
        .chain(scan.meal_swipes.iter().map(Dated::date));

    dates.fold(None, |acc, d| match acc {
        None => Some((d, d)),
        Some((lo, hi)) => Some((lo.min(d), hi.max(d))),
    })
}
