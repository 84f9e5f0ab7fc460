//! Results export and cross-algorithm analysis.
//!
//! Serializes a sequence of [`Metrics`] to CSV, renders a console
//! comparison table, and scans for statistical outliers: algorithms
//! whose average waiting or turnaround time deviates more than two
//! standard deviations from the cross-algorithm mean.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::models::Metrics;

/// Column header of the CSV export.
pub const CSV_HEADER: &str = "Algorithm,AWT,ATT,CpuUtil,Throughput,ResponseTime";

/// Serializes metrics to CSV, one row per algorithm, values to two
/// decimal places (throughput to four).
pub fn to_csv(metrics: &[Metrics]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for m in metrics {
        let _ = writeln!(
            out,
            "{},{:.2},{:.2},{:.2},{:.4},{:.2}",
            m.name,
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.cpu_utilization_percent,
            m.throughput,
            m.avg_response_time,
        );
    }
    out
}

/// Writes the CSV export to a file.
pub fn write_csv(path: impl AsRef<Path>, metrics: &[Metrics]) -> SimResult<()> {
    fs::write(path, to_csv(metrics))?;
    Ok(())
}

/// Renders an aligned console comparison table.
pub fn render_table(metrics: &[Metrics]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<10} {:>8} {:>8} {:>9} {:>11} {:>9}",
        "Algorithm", "AWT", "ATT", "CpuUtil%", "Throughput", "Response"
    );
    for m in metrics {
        let _ = writeln!(
            out,
            "{:<10} {:>8.2} {:>8.2} {:>9.2} {:>11.4} {:>9.2}",
            m.name,
            m.avg_waiting_time,
            m.avg_turnaround_time,
            m.cpu_utilization_percent,
            m.throughput,
            m.avg_response_time,
        );
    }
    out
}

/// Metric field an anomaly was detected on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyField {
    /// Average waiting time.
    AvgWaitingTime,
    /// Average turnaround time.
    AvgTurnaroundTime,
}

/// A metric value more than two standard deviations from the
/// cross-algorithm mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Algorithm the outlying value belongs to.
    pub name: String,
    /// Which metric deviated.
    pub field: AnomalyField,
    /// The outlying value.
    pub value: f64,
    /// Cross-algorithm mean of the field.
    pub mean: f64,
    /// Cross-algorithm standard deviation of the field.
    pub std_dev: f64,
}

/// Flags AWT/ATT values deviating more than 2σ from the mean.
///
/// Population standard deviation over the supplied metrics. Fewer than
/// two records (or zero spread) can never produce an anomaly.
pub fn scan_anomalies(metrics: &[Metrics]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    scan_field(
        metrics,
        AnomalyField::AvgWaitingTime,
        |m| m.avg_waiting_time,
        &mut anomalies,
    );
    scan_field(
        metrics,
        AnomalyField::AvgTurnaroundTime,
        |m| m.avg_turnaround_time,
        &mut anomalies,
    );
    anomalies
}

fn scan_field(
    metrics: &[Metrics],
    field: AnomalyField,
    value_of: impl Fn(&Metrics) -> f64,
    anomalies: &mut Vec<Anomaly>,
) {
    if metrics.len() < 2 {
        return;
    }

    let n = metrics.len() as f64;
    let mean = metrics.iter().map(&value_of).sum::<f64>() / n;
    let variance = metrics
        .iter()
        .map(|m| {
            let d = value_of(m) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let std_dev = variance.sqrt();
    if std_dev <= f64::EPSILON {
        return;
    }

    for m in metrics {
        let value = value_of(m);
        if (value - mean).abs() > 2.0 * std_dev {
            anomalies.push(Anomaly {
                name: m.name.clone(),
                field,
                value,
                mean,
                std_dev,
            });
        }
    }
}
