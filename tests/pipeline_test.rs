//! Integration tests for the ranking and export pipeline

use dfs_lineups::{
    core::{export_table, filter_and_sort, RankedLineup},
    Lineup, LineupAnalytics, LineupError, LineupId, LineupSet, PlayerSlot, SalaryCap, SortField,
    SortSpec, ViewConfig,
};

fn lineup(id: u32, salary: u32, proj: f64) -> Lineup {
    Lineup::new(LineupId::new(id), salary, proj).with_contest("draftkings", "classic")
}

fn analytics(id: u32, win: f64, roi: f64, dup: f64, lev: f64) -> LineupAnalytics {
    LineupAnalytics {
        lineup_id: LineupId::new(id),
        win_prob: win,
        min_cash_prob: win * 10.0,
        roi,
        dup_risk: dup,
        leverage_score: lev,
    }
}

/// A slate with ties, over-cap rows and gaps in analytics coverage.
fn slate() -> (Vec<Lineup>, Vec<LineupAnalytics>) {
    let lineups = vec![
        lineup(1, 50000, 145.2),
        lineup(2, 51000, 143.8),
        lineup(3, 49500, 145.2),
        lineup(4, 48000, 120.0),
        lineup(5, 50500, 160.1),
        lineup(6, 49900, 143.8),
    ];
    let analytics = vec![
        analytics(1, 0.012, 0.35, 0.10, 2.0),
        analytics(2, 0.020, 0.35, 0.02, -1.0),
        analytics(4, 0.003, -0.2, 0.10, 5.5),
        analytics(5, 0.030, 0.90, 0.40, 0.1),
        analytics(6, 0.012, 0.10, 0.07, 2.0),
    ];
    (lineups, analytics)
}

fn ids(view: &[RankedLineup<'_>]) -> Vec<u32> {
    view.iter().map(|r| r.lineup.id.as_u32()).collect()
}

fn all_views() -> Vec<ViewConfig> {
    let mut views = Vec::new();
    for field in SortField::ALL {
        for descending in [true, false] {
            for show_over_cap in [true, false] {
                views.push(ViewConfig::new(SortSpec::new(field, descending), show_over_cap));
            }
        }
    }
    views
}

#[test]
fn test_sorting_twice_gives_identical_order() {
    let (lineups, analytics) = slate();
    let cap = SalaryCap::new(50000);

    for view in all_views() {
        let first = filter_and_sort(&lineups, &analytics, cap, &view);
        let second = filter_and_sort(&lineups, &analytics, cap, &view);
        assert_eq!(ids(&first), ids(&second), "view {:?}", view);
    }
}

#[test]
fn test_ties_keep_input_order() {
    let (lineups, analytics) = slate();
    let cap = SalaryCap::new(50000);

    let view = ViewConfig::new(SortSpec::new(SortField::Proj, true), true);
    assert_eq!(
        ids(&filter_and_sort(&lineups, &analytics, cap, &view)),
        vec![5, 1, 3, 2, 6, 4]
    );

    let view = ViewConfig::new(SortSpec::new(SortField::Roi, true), true);
    assert_eq!(
        ids(&filter_and_sort(&lineups, &analytics, cap, &view)),
        vec![5, 1, 2, 6, 3, 4]
    );
}

#[test]
fn test_filter_correctness() {
    let (lineups, analytics) = slate();

    for cap in [0, 48000, 49999, 50000, 51000] {
        let cap = SalaryCap::new(cap);
        for view in all_views() {
            let ranked = filter_and_sort(&lineups, &analytics, cap, &view);
            if view.show_over_cap {
                assert_eq!(ranked.len(), lineups.len());
            } else {
                assert!(ranked.iter().all(|r| cap.allows(r.lineup.total_salary)));
                let expected = lineups.iter().filter(|l| cap.allows(l.total_salary)).count();
                assert_eq!(ranked.len(), expected);
            }
        }
    }
}

#[test]
fn test_analytics_join_is_independent_of_view() {
    let (lineups, analytics) = slate();
    let cap = SalaryCap::new(50000);

    for view in all_views() {
        for entry in filter_and_sort(&lineups, &analytics, cap, &view) {
            let expected = analytics.iter().find(|a| a.lineup_id == entry.lineup.id);
            assert_eq!(entry.analytics, expected);
            assert_eq!(lineups[entry.original_index].id, entry.lineup.id);
        }
    }
}

#[test]
fn test_join_survives_input_reordering() {
    let (mut lineups, analytics) = slate();
    lineups.reverse();
    let ranked = filter_and_sort(
        &lineups,
        &analytics,
        SalaryCap::new(50000),
        &ViewConfig::new(SortSpec::new(SortField::LeverageScore, true), false),
    );

    assert_eq!(ids(&ranked), vec![4, 6, 1, 3]);
    assert_eq!(ranked[0].analytics.unwrap().leverage_score, 5.5);
    assert!(ranked[3].analytics.is_none());
}

#[test]
fn test_export_ignores_display_toggle() {
    let (lineups, analytics) = slate();
    let cap = SalaryCap::new(50000);

    let baseline = export_table(&lineups, &analytics, cap).unwrap();
    for view in all_views() {
        // Building a view must not influence what gets exported.
        let _ = filter_and_sort(&lineups, &analytics, cap, &view);
        assert_eq!(export_table(&lineups, &analytics, cap).unwrap(), baseline);
    }
    assert_eq!(baseline.included_count(), 4);
    assert_eq!(baseline.excluded_count(), 2);
}

#[test]
fn test_round_trip_example() {
    let lineups = vec![
        Lineup::new(LineupId::new(1), 50000, 145.2),
        Lineup::new(LineupId::new(2), 51000, 143.8),
    ];
    let table = export_table(&lineups, &[], SalaryCap::new(50000)).unwrap();

    assert_eq!(table.included_count(), 1);
    assert_eq!(table.excluded_count(), 1);
    assert_eq!(table.rows()[0].cells[3], "145.2");

    let csv = table.to_csv().unwrap();
    assert_eq!(csv.lines().last(), Some("\"excluded_over_cap:1\""));
}

#[test]
fn test_formatting_example() {
    let lineups = vec![lineup(1, 100, 0.0)];
    let analytics = vec![LineupAnalytics {
        win_prob: 0.5534,
        roi: 0.241,
        leverage_score: 3.14159,
        ..LineupAnalytics::empty(LineupId::new(1))
    }];
    let table = export_table(&lineups, &analytics, SalaryCap::new(100)).unwrap();
    let cells = &table.rows()[0].cells;

    assert_eq!(cells[5], "55.34%");
    assert_eq!(cells[7], "24%");
    assert_eq!(cells[9], "3.1");
}

#[test]
fn test_empty_input() {
    let ranked = filter_and_sort(&[], &[], SalaryCap::new(50000), &ViewConfig::default());
    assert!(ranked.is_empty());

    assert!(matches!(
        export_table(&[], &[], SalaryCap::new(50000)),
        Err(LineupError::NoExportableRows { total: 0 })
    ));
}

#[test]
fn test_toggle_pairing() {
    for current in SortField::ALL {
        for descending in [true, false] {
            let spec = SortSpec::new(current, descending);
            for field in SortField::ALL {
                let toggled = spec.toggle(field);
                if field == current {
                    assert_eq!(toggled.toggle(field).descending, descending);
                } else {
                    assert!(toggled.descending);
                    assert_eq!(toggled.field, field);
                }
            }
        }
    }
}

#[test]
fn test_lineup_set_feeds_pipeline() {
    let json = r#"[
        {"totalSalary": 50000, "proj": 145.2, "site": "draftkings", "mode": "classic",
         "slots": [{"name": "Josh Allen", "team": "BUF"}, {"name": "Bijan Robinson", "team": "ATL"}]},
        {"totalSalary": 51000, "proj": 143.8}
    ]"#;
    let inputs = serde_json::from_str(json).unwrap();
    let records = vec![analytics(1, 0.5534, 0.241, 0.05, 3.14159)];
    let set = LineupSet::from_inputs(inputs, records, 100).unwrap();

    let csv = export_table(set.lineups(), set.analytics(), SalaryCap::new(50000))
        .unwrap()
        .to_csv()
        .unwrap();
    let row = csv.lines().nth(1).unwrap();

    assert_eq!(
        row,
        "\"1\",\"draftkings\",\"classic\",\"145.2\",\"50000\",\"55.34%\",\"553.40%\",\"24%\",\"5%\",\"3.1\",\"Josh Allen (BUF)\",\"Bijan Robinson (ATL)\""
    );
    assert_eq!(
        set.lineups()[0].slots[1],
        PlayerSlot::new("Bijan Robinson", "ATL")
    );
}

#[test]
fn test_fractional_salary_over_cap_is_not_exported() {
    let json = r#"[{"totalSalary": 50000.5, "proj": 150.0}, {"totalSalary": 49000, "proj": 140.0}]"#;
    let inputs = serde_json::from_str(json).unwrap();
    let set = LineupSet::from_inputs(inputs, Vec::new(), 100).unwrap();
    let cap = SalaryCap::new(50000);

    let visible = filter_and_sort(set.lineups(), set.analytics(), cap, &ViewConfig::default());
    assert_eq!(ids(&visible), vec![2]);

    let table = export_table(set.lineups(), set.analytics(), cap).unwrap();
    assert_eq!(table.included_count(), 1);
    assert_eq!(table.excluded_count(), 1);
}
