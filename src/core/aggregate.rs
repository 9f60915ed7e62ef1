use crate::domain::model::{CountTable, Record};

/// Parses a leading base-10 integer run from age text. Leading whitespace
/// and an optional sign are accepted; anything after the digit run is
/// ignored. Empty or non-numeric text yields `None`.
pub fn coerce_age(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(&b'-') => (true, &s[1..]),
        Some(&b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let value: i64 = rest[..digits].parse().ok()?;
    Some(if negative { -value } else { value })
}

// Ranking treats absent ages as 0.
fn ranking_age(record: &Record) -> i64 {
    coerce_age(&record.age).unwrap_or(0)
}

/// Records whose coerced age is present and at least `threshold`, in input
/// order. Records with absent age are excluded.
pub fn filter_by_minimum_age(records: &[Record], threshold: i64) -> Vec<Record> {
    records
        .iter()
        .filter(|record| matches!(coerce_age(&record.age), Some(age) if age >= threshold))
        .cloned()
        .collect()
}

/// Count per exact country string; a blank country is its own bucket.
pub fn count_by_country(records: &[Record]) -> CountTable {
    let mut counts = CountTable::new();
    for record in records {
        counts.increment(&record.country);
    }
    counts
}

/// Mean of all present coerced ages, rounded to one decimal place with
/// half-away-from-zero. Zero valid ages yields 0.0.
pub fn average_age(records: &[Record]) -> f64 {
    let mut sum: i64 = 0;
    let mut count: i64 = 0;

    for record in records {
        if let Some(age) = coerce_age(&record.age) {
            sum += age;
            count += 1;
        }
    }

    if count == 0 {
        return 0.0;
    }

    let avg = sum as f64 / count as f64;
    (avg * 10.0).round() / 10.0
}

/// First `n` records of a stable descending sort by coerced age; ties keep
/// input order and absent ages rank as 0. The input is never mutated.
pub fn top_n_oldest(records: &[Record], n: usize) -> Vec<Record> {
    let mut copy = records.to_vec();
    copy.sort_by(|a, b| ranking_age(b).cmp(&ranking_age(a)));
    copy.truncate(n);
    copy
}

/// Static country-to-region classification, case-sensitive exact match.
pub fn region_for_country(country: &str) -> &'static str {
    match country {
        "Finland" | "Germany" | "France" | "UK" => "Europe",
        "USA" | "Canada" => "North America",
        "Brazil" => "South America",
        "India" | "Japan" => "Asia",
        "Australia" => "Oceania",
        _ => "Other",
    }
}

/// Count per region derived from each record's country.
pub fn region_counts(records: &[Record]) -> CountTable {
    let mut counts = CountTable::new();
    for record in records {
        counts.increment(region_for_country(&record.country));
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Alice", "34", "Finland"),
            Record::new("Bob", "27", "USA"),
            Record::new("Carol", "41", "Germany"),
            Record::new("Dan", "not-a-number", "Brazil"),
            Record::new("Eve", "", "Atlantis"),
            Record::new("Frank", "41", "Canada"),
        ]
    }

    #[test]
    fn test_coerce_age_plain_numbers() {
        assert_eq!(coerce_age("34"), Some(34));
        assert_eq!(coerce_age("0"), Some(0));
        assert_eq!(coerce_age(" 27"), Some(27));
        assert_eq!(coerce_age("+5"), Some(5));
        assert_eq!(coerce_age("-3"), Some(-3));
    }

    #[test]
    fn test_coerce_age_leading_digit_run() {
        assert_eq!(coerce_age("34abc"), Some(34));
        assert_eq!(coerce_age("12.9"), Some(12));
    }

    #[test]
    fn test_coerce_age_absent() {
        assert_eq!(coerce_age(""), None);
        assert_eq!(coerce_age("abc"), None);
        assert_eq!(coerce_age("-"), None);
        assert_eq!(coerce_age("  "), None);
    }

    #[test]
    fn test_filter_by_minimum_age_excludes_absent_and_young() {
        let records = sample_records();
        let filtered = filter_by_minimum_age(&records, 30);

        let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol", "Frank"]);
        assert!(filtered.iter().all(|r| coerce_age(&r.age).unwrap() >= 30));
    }

    #[test]
    fn test_filter_boundary_is_inclusive() {
        let records = vec![Record::new("Edge", "30", "UK")];
        assert_eq!(filter_by_minimum_age(&records, 30).len(), 1);
        assert_eq!(filter_by_minimum_age(&records, 31).len(), 0);
    }

    #[test]
    fn test_count_by_country_sums_to_record_count() {
        let records = sample_records();
        let counts = count_by_country(&records);

        assert_eq!(counts.total() as usize, records.len());
        assert_eq!(counts.get("Finland"), 1);
        assert_eq!(counts.get("Atlantis"), 1);
    }

    #[test]
    fn test_count_by_country_blank_is_own_bucket() {
        let records = vec![
            Record::new("A", "20", ""),
            Record::new("B", "21", ""),
            Record::new("C", "22", "USA"),
        ];
        let counts = count_by_country(&records);

        assert_eq!(counts.get(""), 2);
        assert_eq!(counts.get("USA"), 1);
    }

    #[test]
    fn test_average_age_excludes_malformed() {
        let records = vec![
            Record::new("A", "34", "Finland"),
            Record::new("B", "27", "USA"),
            Record::new("C", "oops", "UK"),
        ];
        assert_eq!(average_age(&records), 30.5);
    }

    #[test]
    fn test_average_age_empty_inputs() {
        assert_eq!(average_age(&[]), 0.0);

        let all_malformed = vec![
            Record::new("A", "", "Finland"),
            Record::new("B", "x", "USA"),
        ];
        assert_eq!(average_age(&all_malformed), 0.0);
    }

    #[test]
    fn test_average_age_rounds_half_away_from_zero() {
        // mean 2.25 must round up to 2.3, not down to 2.2
        let records = vec![
            Record::new("A", "2", ""),
            Record::new("B", "2", ""),
            Record::new("C", "2", ""),
            Record::new("D", "3", ""),
        ];
        assert_eq!(average_age(&records), 2.3);
    }

    #[test]
    fn test_top_n_oldest_descending_with_stable_ties() {
        let records = sample_records();
        let top = top_n_oldest(&records, 3);

        let names: Vec<&str> = top.iter().map(|r| r.name.as_str()).collect();
        // Carol and Frank tie at 41; Carol appears first in the input
        assert_eq!(names, vec!["Carol", "Frank", "Alice"]);
    }

    #[test]
    fn test_top_n_oldest_absent_age_ranks_as_zero() {
        let records = vec![
            Record::new("A", "", "Finland"),
            Record::new("B", "1", "USA"),
        ];
        let top = top_n_oldest(&records, 2);

        assert_eq!(top[0].name, "B");
        assert_eq!(top[1].name, "A");
    }

    #[test]
    fn test_top_n_oldest_n_exceeds_record_count() {
        let records = sample_records();
        let top = top_n_oldest(&records, 100);

        assert_eq!(top.len(), records.len());
    }

    #[test]
    fn test_top_n_oldest_does_not_mutate_input() {
        let records = sample_records();
        let before = records.clone();
        let _ = top_n_oldest(&records, 3);

        assert_eq!(records, before);
    }

    #[test]
    fn test_region_for_country_table() {
        assert_eq!(region_for_country("Finland"), "Europe");
        assert_eq!(region_for_country("Germany"), "Europe");
        assert_eq!(region_for_country("France"), "Europe");
        assert_eq!(region_for_country("UK"), "Europe");
        assert_eq!(region_for_country("USA"), "North America");
        assert_eq!(region_for_country("Canada"), "North America");
        assert_eq!(region_for_country("Brazil"), "South America");
        assert_eq!(region_for_country("India"), "Asia");
        assert_eq!(region_for_country("Japan"), "Asia");
        assert_eq!(region_for_country("Australia"), "Oceania");
        assert_eq!(region_for_country("Atlantis"), "Other");
        assert_eq!(region_for_country(""), "Other");
    }

    #[test]
    fn test_region_classification_is_case_sensitive() {
        assert_eq!(region_for_country("finland"), "Other");
        assert_eq!(region_for_country("usa"), "Other");
    }

    #[test]
    fn test_region_counts_sum_to_record_count() {
        let records = sample_records();
        let counts = region_counts(&records);

        assert_eq!(counts.total() as usize, records.len());
        assert_eq!(counts.get("Europe"), 2);
        assert_eq!(counts.get("North America"), 2);
        assert_eq!(counts.get("South America"), 1);
        assert_eq!(counts.get("Other"), 1);
    }

    #[test]
    fn test_aggregators_are_idempotent() {
        let records = sample_records();
        let before = records.clone();

        assert_eq!(
            filter_by_minimum_age(&records, 30),
            filter_by_minimum_age(&records, 30)
        );
        assert_eq!(count_by_country(&records), count_by_country(&records));
        assert_eq!(average_age(&records), average_age(&records));
        assert_eq!(top_n_oldest(&records, 3), top_n_oldest(&records, 3));
        assert_eq!(region_counts(&records), region_counts(&records));
        assert_eq!(records, before);
    }
}
