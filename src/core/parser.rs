use crate::domain::model::Record;

/// Field order expected in the first line of the input.
pub const EXPECTED_HEADER: &str = "name,age,country";

/// Parses comma-delimited text into records.
///
/// The first line is a header naming fields by position; the parser maps
/// the `name`, `age` and `country` columns by their header position. Rows
/// shorter than a mapped position yield an empty field. There is no
/// quoting or escaping support: a comma inside a field splits the field.
pub fn parse_records(text: &str) -> Vec<Record> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut lines = trimmed
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line));

    let header: Vec<&str> = match lines.next() {
        Some(line) => line.split(',').collect(),
        None => return Vec::new(),
    };

    let name_idx = field_index(&header, "name");
    let age_idx = field_index(&header, "age");
    let country_idx = field_index(&header, "country");

    let mut records = Vec::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        let cols: Vec<&str> = line.split(',').collect();
        records.push(Record {
            name: field_at(&cols, name_idx),
            age: field_at(&cols, age_idx),
            country: field_at(&cols, country_idx),
        });
    }

    records
}

/// Renders records back into the same header/delimiter convention.
pub fn render_records(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(EXPECTED_HEADER.to_string());
    for record in records {
        lines.push(format!("{},{},{}", record.name, record.age, record.country));
    }
    lines.join("\n")
}

fn field_index(header: &[&str], field: &str) -> Option<usize> {
    let index = header.iter().position(|h| *h == field);
    if index.is_none() {
        tracing::warn!("Header is missing expected column '{}'", field);
    }
    index
}

fn field_at(cols: &[&str], index: Option<usize>) -> String {
    index
        .and_then(|i| cols.get(i))
        .map(|value| (*value).to_string())
        .unwrap_or_default()
}
