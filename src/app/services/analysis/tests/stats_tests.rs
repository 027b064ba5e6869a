//! Tests for the descriptive statistics functions

use super::*;
use crate::Error;
use crate::app::services::analysis::stats::{
    average_lap_times, fastest_driver, overall_average, rank_drivers,
};
use crate::app::services::session_loader::LapTimeSet;

#[test]
fn test_fastest_driver_returns_global_minimum() {
    let laps = monza_set();
    let (code, time) = fastest_driver(&laps).unwrap();
    assert_eq!(code, "VER");
    assert!((time - 90.876).abs() < 1e-9);
}

#[test]
fn test_fastest_driver_tie_goes_to_first_in_file_order() {
    let laps = lap_set(&[("HAM", &[90.0, 95.0]), ("VER", &[90.0])]);
    let (code, time) = fastest_driver(&laps).unwrap();
    assert_eq!(code, "HAM");
    assert!((time - 90.0).abs() < 1e-9);
}

#[test]
fn test_fastest_driver_empty_set_fails_fast() {
    let laps = LapTimeSet::new();
    let result = fastest_driver(&laps);
    assert!(matches!(result.unwrap_err(), Error::EmptySession { .. }));
}

#[test]
fn test_average_lap_times_per_driver() {
    let laps = monza_set();
    let averages = average_lap_times(&laps);

    assert_eq!(averages.len(), 2);
    assert!((averages["HAM"] - 91.6175).abs() < 1e-9);
    assert!((averages["VER"] - 90.876).abs() < 1e-9);
}

#[test]
fn test_average_lap_times_empty_set_is_empty() {
    let laps = LapTimeSet::new();
    assert!(average_lap_times(&laps).is_empty());
}

#[test]
fn test_overall_average_spans_all_drivers() {
    let laps = monza_set();
    let average = overall_average(&laps).unwrap();
    let expected = (91.234 + 92.001 + 90.876) / 3.0;
    assert!((average - expected).abs() < 1e-9);
}

#[test]
fn test_overall_average_is_order_independent() {
    let forward = lap_set(&[("HAM", &[91.234, 92.001]), ("VER", &[90.876])]);
    let reverse = lap_set(&[("VER", &[90.876]), ("HAM", &[92.001, 91.234])]);

    let a = overall_average(&forward).unwrap();
    let b = overall_average(&reverse).unwrap();
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn test_overall_average_empty_set_fails_fast() {
    let laps = LapTimeSet::new();
    let result = overall_average(&laps);
    assert!(matches!(result.unwrap_err(), Error::EmptySession { .. }));
}

#[test]
fn test_ranking_is_descending_by_fastest_lap() {
    // The slowest best lap ranks first; the session's fastest driver is last.
    let laps = monza_set();
    let rankings = rank_drivers(&laps);

    assert_eq!(rankings.len(), 2);
    assert_eq!(rankings[0].code, "HAM");
    assert!((rankings[0].fastest - 91.234).abs() < 1e-9);
    assert!((rankings[0].average - 91.6175).abs() < 1e-9);
    assert_eq!(rankings[1].code, "VER");
    assert!((rankings[1].fastest - 90.876).abs() < 1e-9);

    for pair in rankings.windows(2) {
        assert!(pair[0].fastest >= pair[1].fastest);
    }
}

#[test]
fn test_ranking_has_one_entry_per_driver() {
    let laps = lap_set(&[
        ("HAM", &[91.0, 92.0]),
        ("VER", &[90.5]),
        ("LEC", &[93.2, 91.8, 92.4]),
    ]);
    let rankings = rank_drivers(&laps);
    assert_eq!(rankings.len(), laps.driver_count());
}

#[test]
fn test_ranking_equal_fastest_laps_keep_file_order() {
    let laps = lap_set(&[("HAM", &[90.0]), ("VER", &[90.0]), ("LEC", &[89.0])]);
    let rankings = rank_drivers(&laps);

    let codes: Vec<&str> = rankings.iter().map(|r| r.code.as_str()).collect();
    assert_eq!(codes, vec!["HAM", "VER", "LEC"]);
}

#[test]
fn test_ranking_empty_set_is_empty() {
    let laps = LapTimeSet::new();
    assert!(rank_drivers(&laps).is_empty());
}
