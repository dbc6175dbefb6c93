//! Integration tests for command handlers

use chrono::NaiveDate;
use dfs_lineups::{
    commands::{
        common::load_lineup_set,
        export::write_export,
        rank::{render_table, resolve_view},
        resolve_salary_cap_from,
        toggle_sort::toggle_view_file,
    },
    core::{filter_and_sort, summarize},
    LineupError, SalaryCap, SortField, SortSpec,
};
use tempfile::TempDir;

const LINEUPS_JSON: &str = r#"{
    "lineups": [
        {"totalSalary": 50000, "proj": 145.2, "site": "draftkings", "mode": "classic",
         "slots": [{"name": "Jalen Hurts", "team": "PHI"}]},
        {"totalSalary": 51000, "proj": 143.8, "site": "draftkings", "mode": "classic"},
        {"totalSalary": "49000", "proj": null, "site": "draftkings", "mode": "classic"}
    ],
    "analytics": [
        {"lineupId": 1, "winProb": 0.5534, "roi": 0.241, "leverageScore": 3.14159},
        {"lineupId": 3, "winProb": 0.9, "roi": 1.5}
    ]
}"#;

fn write_inputs() -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lineups.json");
    std::fs::write(&path, LINEUPS_JSON).unwrap();
    (dir, path)
}

#[test]
fn test_load_rank_and_export_flow() {
    let (dir, path) = write_inputs();
    let cap = resolve_salary_cap_from(None, Some("50000".to_string())).unwrap();
    let set = load_lineup_set(&path, None, 100).unwrap();

    let view = resolve_view(Default::default(), Some(SortField::WinProb), false, None);
    let ranked = filter_and_sort(set.lineups(), set.analytics(), cap, &view);
    let ids: Vec<u32> = ranked.iter().map(|r| r.lineup.id.as_u32()).collect();
    assert_eq!(ids, vec![3, 1]);

    let text = render_table(&ranked, cap, &summarize(set.lineups(), cap, &ranked), &view);
    assert!(text.contains("Sorted by winProb (desc), cap 50000"));
    assert!(text.contains("1 over-cap lineups hidden"));

    let date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();
    let outcome = write_export(&set, cap, Some(dir.path()), date).unwrap();
    assert_eq!(outcome.included, 2);
    assert_eq!(outcome.excluded, 1);

    let csv = std::fs::read_to_string(&outcome.path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[1],
        "\"1\",\"draftkings\",\"classic\",\"145.2\",\"50000\",\"55.34%\",\"0.00%\",\"24%\",\"0%\",\"3.1\",\"Jalen Hurts (PHI)\""
    );
    assert_eq!(
        lines[2],
        "\"2\",\"draftkings\",\"classic\",\"0.0\",\"49000\",\"90.00%\",\"0.00%\",\"150%\",\"0%\",\"0.0\""
    );
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "\"excluded_over_cap:1\"");
}

#[test]
fn test_export_with_every_lineup_over_cap() {
    let (dir, path) = write_inputs();
    let set = load_lineup_set(&path, None, 100).unwrap();
    let target = dir.path().join("out.csv");
    let date = NaiveDate::from_ymd_opt(2025, 9, 14).unwrap();

    let result = write_export(&set, SalaryCap::new(40000), Some(&target), date);
    assert!(matches!(result, Err(LineupError::NoExportableRows { total: 3 })));
    assert!(!target.exists());
}

#[test]
fn test_row_limit_applies_to_loaded_files() {
    let (_dir, path) = write_inputs();
    assert!(matches!(
        load_lineup_set(&path, None, 2),
        Err(LineupError::TooManyLineups { count: 3, max: 2 })
    ));
}

#[test]
fn test_toggle_then_rank_uses_saved_view() {
    let (dir, path) = write_inputs();
    let view_path = dir.path().join("view.json");

    toggle_view_file(&view_path, SortField::TotalSalary).unwrap();
    let saved = toggle_view_file(&view_path, SortField::TotalSalary).unwrap();
    assert_eq!(saved.sort, SortSpec::new(SortField::TotalSalary, false));

    let set = load_lineup_set(&path, None, 100).unwrap();
    let view = resolve_view(saved, None, false, Some(true));
    let ranked = filter_and_sort(set.lineups(), set.analytics(), SalaryCap::new(50000), &view);
    let ids: Vec<u32> = ranked.iter().map(|r| r.lineup.id.as_u32()).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}
