use crate::core::aggregate;
use crate::domain::model::{CountTable, Record};

/// Selector tokens accepted on the command line.
pub const VALID_SELECTORS: &str = "summary|filter|group|avg|top|region";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Summary,
    Filter,
    Group,
    Average,
    Top,
    Region,
}

impl Operation {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "summary" => Some(Self::Summary),
            "filter" => Some(Self::Filter),
            "group" => Some(Self::Group),
            "avg" => Some(Self::Average),
            "top" => Some(Self::Top),
            "region" => Some(Self::Region),
            _ => None,
        }
    }
}

/// Computes the aggregate(s) selected by `selector` and renders them as
/// output lines. An unknown selector is not an error: it yields a single
/// line listing the valid selectors.
pub fn run_operation(
    records: &[Record],
    selector: &str,
    min_age: i64,
    top_count: usize,
) -> Vec<String> {
    let Some(operation) = Operation::parse(selector) else {
        return vec![format!(
            "Unknown operation '{}'. Use {}.",
            selector, VALID_SELECTORS
        )];
    };

    match operation {
        Operation::Summary => summary_lines(records, min_age, top_count),
        Operation::Filter => vec![format!(
            "Filtered count: {}",
            aggregate::filter_by_minimum_age(records, min_age).len()
        )],
        Operation::Group => {
            let mut lines = vec!["Users per country:".to_string()];
            lines.extend(key_value_lines(&aggregate::count_by_country(records)));
            lines
        }
        Operation::Average => vec![format!(
            "Average age: {}",
            format_average(aggregate::average_age(records))
        )],
        Operation::Top => aggregate::top_n_oldest(records, top_count)
            .iter()
            .map(|record| format!("{} ({})", record.name, record.age))
            .collect(),
        Operation::Region => {
            let mut lines = vec!["Users per region:".to_string()];
            lines.extend(key_value_lines(&aggregate::region_counts(records)));
            lines
        }
    }
}

fn summary_lines(records: &[Record], min_age: i64, top_count: usize) -> Vec<String> {
    let filtered = aggregate::filter_by_minimum_age(records, min_age);
    let grouped = aggregate::count_by_country(records);
    let avg = aggregate::average_age(records);
    let oldest = aggregate::top_n_oldest(records, top_count);

    let mut lines = vec![
        format!("Total users: {}", records.len()),
        format!("Filtered count: {}", filtered.len()),
        "Users per country:".to_string(),
    ];
    lines.extend(key_value_lines(&grouped));
    lines.push(format!("Average age: {}", format_average(avg)));
    lines.push(format!("Top {} oldest users:", top_count));
    lines.extend(
        oldest
            .iter()
            .map(|record| format!("  {} ({})", record.name, record.age)),
    );
    lines
}

fn key_value_lines(counts: &CountTable) -> Vec<String> {
    counts
        .iter()
        .map(|(key, value)| format!("  {}: {}", key, value))
        .collect()
}

/// Renders an already-rounded average. Whole numbers print without a
/// decimal point (`30`, not `30.0`).
pub fn format_average(avg: f64) -> String {
    let scaled = (avg * 10.0).round() as i64;
    if scaled % 10 == 0 {
        (scaled / 10).to_string()
    } else {
        format!("{:.1}", scaled as f64 / 10.0)
    }
}
