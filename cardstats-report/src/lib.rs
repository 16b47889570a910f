//! cardstats-report: dashboard panels, chart payloads and export rows built from a statement scan

pub mod chart;
pub mod dashboard;
pub mod export;

pub use chart::{BarChart, BarDataset, PieChart};
pub use dashboard::{date_range, Dashboard, Panel, PanelKind};
pub use export::{export_rows, ExportRow, RecordKind};
