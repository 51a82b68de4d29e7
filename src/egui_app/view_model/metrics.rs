//! Table rows for the metrics panel.

use std::cmp::Ordering;

use super::{format_percent, format_support};
use crate::service::{ClassificationReport, FamilyMetrics, ModelMetrics};
use crate::settings::CategoryTable;
use crate::training::ModelFamily;

/// One per-class row of a classification report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassRow {
    pub class_key: String,
    /// Category name, or empty when the key is not in the table.
    pub label: String,
    pub precision: String,
    pub recall: String,
    pub f1_score: String,
    pub support: String,
}

/// Rendered classification report: class rows then the accuracy summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportTable {
    pub rows: Vec<ClassRow>,
    pub accuracy: String,
    /// Support of the `macro avg` row.
    pub accuracy_support: String,
}

/// A labelled overall metric.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRow {
    pub name: &'static str,
    pub value: String,
}

/// Everything shown for one family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilySection {
    pub family: ModelFamily,
    pub overall: Vec<MetricRow>,
    pub report: ReportTable,
}

pub fn report_table(report: &ClassificationReport, categories: &CategoryTable) -> ReportTable {
    let mut keys: Vec<&String> = report.classes.keys().collect();
    keys.sort_by(|a, b| compare_class_keys(a, b));
    let rows = keys
        .into_iter()
        .map(|key| {
            let scores = &report.classes[key];
            ClassRow {
                class_key: key.clone(),
                label: categories.name_for(key).unwrap_or_default().to_string(),
                precision: format_percent(scores.precision),
                recall: format_percent(scores.recall),
                f1_score: format_percent(scores.f1_score),
                support: format_support(scores.support),
            }
        })
        .collect();
    ReportTable {
        rows,
        accuracy: format_percent(report.accuracy),
        accuracy_support: format_support(report.macro_avg.support),
    }
}

pub fn overall_rows(metrics: &FamilyMetrics) -> Vec<MetricRow> {
    vec![
        MetricRow {
            name: "Test Accuracy",
            value: format_percent(metrics.test_accuracy),
        },
        MetricRow {
            name: "Test AUC",
            value: format_percent(metrics.test_auc),
        },
        MetricRow {
            name: "Training Accuracy",
            value: format_percent(metrics.train_accuracy),
        },
    ]
}

/// Sections for every family present, in svm, random forest, knn order.
pub fn family_sections(metrics: &ModelMetrics, categories: &CategoryTable) -> Vec<FamilySection> {
    metrics
        .families()
        .map(|(family, family_metrics)| FamilySection {
            family,
            overall: overall_rows(family_metrics),
            report: report_table(&family_metrics.classification_report, categories),
        })
        .collect()
}

// Numeric keys first in numeric order, then everything else lexicographically.
fn compare_class_keys(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
