use chrono::NaiveDate;
use spotidash::utils::*;
use std::collections::HashSet;

fn ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("artist_{:03}", i)).collect()
}

#[test]
fn test_chunk_ids_batch_sizes() {
    // 120 distinct ids with a page size of 50 -> ceil(120/50) = 3 batches
    let input = ids(120);
    let batches = chunk_ids(&input, ARTIST_IDS_PER_REQUEST);

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), 50);
    assert_eq!(batches[1].len(), 50);
    assert_eq!(batches[2].len(), 20);

    // Every batch respects the limit
    for batch in &batches {
        assert!(batch.len() <= ARTIST_IDS_PER_REQUEST);
    }
}

#[test]
fn test_chunk_ids_union_equals_input() {
    let input = ids(73);
    let batches = chunk_ids(&input, ARTIST_IDS_PER_REQUEST);

    let union: Vec<String> = batches.into_iter().flatten().collect();
    assert_eq!(union, input);

    // No duplicates introduced
    let unique: HashSet<&String> = union.iter().collect();
    assert_eq!(unique.len(), union.len());
}

#[test]
fn test_chunk_ids_exact_multiple() {
    let input = ids(100);
    let batches = chunk_ids(&input, 50);
    assert_eq!(batches.len(), 2);
    assert!(batches.iter().all(|b| b.len() == 50));
}

#[test]
fn test_chunk_ids_deduplicates_first_occurrence() {
    let input = vec![
        "a".to_string(),
        "b".to_string(),
        "a".to_string(),
        "c".to_string(),
        "b".to_string(),
    ];
    let batches = chunk_ids(&input, 2);

    let union: Vec<String> = batches.into_iter().flatten().collect();
    assert_eq!(union, vec!["a", "b", "c"]);
}

#[test]
fn test_chunk_ids_empty_input() {
    let batches = chunk_ids(&[], 50);
    assert!(batches.is_empty());
}

#[test]
fn test_time_range_display() {
    // Display is the exact query parameter value
    assert_eq!(TimeRange::Short.to_string(), "short_term");
    assert_eq!(TimeRange::Medium.to_string(), "medium_term");
    assert_eq!(TimeRange::Long.to_string(), "long_term");
}

#[test]
fn test_time_range_label() {
    assert_eq!(TimeRange::Short.label(), "short-term");
    assert_eq!(TimeRange::Medium.label(), "medium-term");
    assert_eq!(TimeRange::Long.label(), "long-term");
}

#[test]
fn test_time_range_all_constant() {
    assert_eq!(
        TimeRange::ALL,
        [TimeRange::Short, TimeRange::Medium, TimeRange::Long]
    );
}

#[test]
fn test_parse_time_range_valid_inputs() {
    assert_eq!(parse_time_range("short").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("medium_term").unwrap(), TimeRange::Medium);
    assert_eq!(parse_time_range("long-term").unwrap(), TimeRange::Long);

    // Case insensitivity and surrounding whitespace
    assert_eq!(parse_time_range("SHORT").unwrap(), TimeRange::Short);
    assert_eq!(parse_time_range("  Long_Term ").unwrap(), TimeRange::Long);
}

#[test]
fn test_parse_time_range_invalid_inputs() {
    let result = parse_time_range("yearly");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid value 'yearly'"));

    let result = parse_time_range("");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("cannot be empty"));
}

#[test]
fn test_parse_added_at_date() {
    // Full RFC 3339 timestamp truncates to its calendar date
    let date = parse_added_at_date("2023-10-17T12:34:56Z");
    assert_eq!(date, NaiveDate::from_ymd_opt(2023, 10, 17).unwrap());

    // Offset timestamps keep their local calendar date
    let date = parse_added_at_date("2024-01-01T23:30:00+02:00");
    assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

    // Unparseable input falls back to the epoch date, never "today"
    let date = parse_added_at_date("not-a-timestamp");
    assert_eq!(date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
}
