//! Tests for match counting and summary formatting

use std::path::PathBuf;
use std::time::Duration;

use super::*;
use crate::histogram::HistogramBucket;

fn bucket(upper_bound: &str, num_eq: i64, num_range: i64) -> HistogramBucket {
    HistogramBucket {
        distinct_range: 0.0,
        num_eq,
        num_range,
        upper_bound: upper_bound.to_string(),
    }
}

fn stats(column: &str, buckets: Vec<HistogramBucket>) -> Statistics {
    Statistics {
        columns: vec![column.to_string()],
        histo_buckets: buckets,
    }
}

fn test_config(spans: Vec<Span>) -> Config {
    Config {
        demo_binary: "cockroach".to_string(),
        script: PathBuf::from("make_histograms.sql"),
        int_column: "i".to_string(),
        string_column: "s".to_string(),
        spans,
        timeout: Duration::from_secs(120),
        from_output: None,
    }
}

#[test]
fn test_hand_computed_counts_over_default_spans() {
    let int_stats = stats(
        "i",
        vec![
            bucket("1", 1, 0),
            bucket("10000", 1, 9998),
            bucket("105000", 1, 0),
        ],
    );
    // A single string bucket bounded at "5": matches are "5" itself plus
    // every decimal string sorting below it, i.e. those starting 1-4.
    let string_stats = stats("s", vec![bucket("5", 1, 1)]);

    let config = test_config(Config::default_spans());
    let report = count_matches(&config, &int_stats, &string_stats);

    assert_eq!(report.total, 20_001);

    // Integers: all of [1,10000] (exact 1, the (1,10000) window, exact
    // 10000), then only 105000 from the second span — the (10000,105000)
    // window is empty and everything past 105000 is off the end.
    assert_eq!(report.int_matches, 10_001);

    // Strings from [1,10000] starting 1-4: 4 + 40 + 400 + 4000 + 1
    // (for "10000"), plus "5" exact = 4446; all 10001 strings from
    // [100000,110000] start with '1'. 4446 + 10001 = 14447.
    assert_eq!(report.string_matches, 14_447);
}

#[test]
fn test_count_matches_small_spans() {
    let int_stats = stats("i", vec![bucket("1", 1, 0), bucket("5", 1, 3), bucket("10", 1, 4)]);
    let string_stats = stats("s", vec![bucket("1", 1, 0), bucket("5", 1, 3)]);

    let config = test_config(vec![Span::new(1, 10), Span::new(100, 105)]);
    let report = count_matches(&config, &int_stats, &string_stats);

    assert_eq!(report.total, 16);
    // Integers: every value of [1,10] hits (exacts at 1, 5, 10; live
    // windows between); [100,105] is past the last bound.
    assert_eq!(report.int_matches, 10);
    // Strings: "1" exact, "2".."4" in the ("1","5") window, "5" exact,
    // "10" sorts into ("1","5") too, and so do "100".."105"; "6".."9"
    // sort past "5". That is 6 + 6 = 12.
    assert_eq!(report.string_matches, 12);
}

#[test]
fn test_count_matches_empty_histograms() {
    let config = test_config(vec![Span::new(1, 100)]);
    let report = count_matches(&config, &stats("i", vec![]), &stats("s", vec![]));

    assert_eq!(report.total, 100);
    assert_eq!(report.int_matches, 0);
    assert_eq!(report.string_matches, 0);
}

#[test]
fn test_count_matches_carries_config_into_report() {
    let mut config = test_config(vec![Span::new(2, 3)]);
    config.int_column = "height".to_string();
    config.string_column = "label".to_string();

    let report = count_matches(&config, &stats("height", vec![]), &stats("label", vec![]));

    assert_eq!(report.int_column, "height");
    assert_eq!(report.string_column, "label");
    assert_eq!(report.spans, vec![Span::new(2, 3)]);
}

#[test]
fn test_report_display_format() {
    let report = MatchReport {
        int_column: "i".to_string(),
        string_column: "s".to_string(),
        int_matches: 10_001,
        string_matches: 14_447,
        total: 20_001,
        spans: vec![Span::new(1, 10_000), Span::new(100_000, 110_000)],
    };

    let lines: Vec<String> = report.to_string().lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "Column 'i' histogram matches 10001/20001 values in the ranges [1-10000], [100000-110000].",
            "Column 's' histogram matches 14447/20001 values in the ranges [1-10000], [100000-110000].",
        ]
    );
}
