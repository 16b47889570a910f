//! Chart payloads handed to the renderer.

use cardstats_core::{CategoryTotals, ColorStreams, WeeklyMatrix};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

/// Pie view: `values[i]` belongs to `labels[i]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl PieChart {
    pub fn from_totals(totals: &CategoryTotals, colors: &mut ColorStreams, stream_id: u32) -> Self {
        let mut chart = PieChart {
            labels: Vec::with_capacity(totals.len()),
            values: Vec::with_capacity(totals.len()),
            colors: Vec::with_capacity(totals.len()),
        };
        for (i, (label, value)) in totals.iter().enumerate() {
            chart.labels.push(label.to_string());
            chart.values.push(to_f64(value));
            chart.colors.push(colors.color_for(stream_id, i).css());
        }
        chart
    }

    /// Share of each slice in whole percent, rounded half up
    pub fn percentages(&self) -> Vec<u32> {
        let total: f64 = self.values.iter().sum();
        if total <= 0.0 {
            return vec![0; self.values.len()];
        }
        self.values
            .iter()
            .map(|v| (v / total * 100.0 + 0.5).floor() as u32)
            .collect()
    }
}

/// One location's stacked series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDataset {
    pub label: String,
    /// Aligned with [`BarChart::labels`]
    pub data: Vec<f64>,
    pub color: String,
}

/// Stacked-bar view: one column per week, one dataset per location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub labels: Vec<String>,
    pub datasets: Vec<BarDataset>,
}

impl BarChart {
    pub fn from_matrix(matrix: &WeeklyMatrix, colors: &mut ColorStreams, stream_id: u32) -> Self {
        let datasets = matrix
            .locations()
            .iter()
            .enumerate()
            .map(|(i, location)| BarDataset {
                label: location.clone(),
                data: matrix.series(location).into_iter().map(to_f64).collect(),
                color: colors.color_for(stream_id, i).css(),
            })
            .collect();

        BarChart {
            labels: matrix.week_labels(),
            datasets,
        }
    }

    /// Height of each stacked column
    pub fn column_totals(&self) -> Vec<f64> {
        (0..self.labels.len())
            .map(|col| self.datasets.iter().map(|ds| ds.data[col]).sum())
            .collect()
    }
}
