use chrono::Utc;

use sdg_planner::allocation::{rank, ActivityLedger, ResourceCeilings};
use sdg_planner::models::{ActivityInput, ActivityRecord};
use sdg_planner::PlannerError;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn input(name: &str, budget: f64, time: f64, personnel: f64, impact: i64) -> ActivityInput {
    ActivityInput {
        name: name.to_string(),
        goal_tag: "Zero Hunger".to_string(),
        budget,
        time,
        personnel,
        impact_rating: impact,
    }
}

fn record(name: &str, budget: f64, time: f64, personnel: f64, impact: i64) -> ActivityRecord {
    ActivityRecord {
        id: name.to_string(),
        name: name.to_string(),
        goal_tag: "Zero Hunger".to_string(),
        budget,
        time,
        personnel,
        impact_rating: impact,
        recorded_at: Utc::now(),
    }
}

#[test]
fn test_ledger_preserves_insertion_order() {
    init_logs();
    let mut ledger = ActivityLedger::new();
    ledger.add(input("A", 10.0, 5.0, 2.0, 8)).unwrap();
    ledger.add(input("B", 5.0, 5.0, 0.0, 4)).unwrap();
    ledger.add(input("C", 1.0, 1.0, 1.0, 5)).unwrap();

    let names: Vec<&str> = ledger.all().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(ledger.len(), 3);

    // Each add stamps a distinct id.
    assert_ne!(ledger.all()[0].id, ledger.all()[1].id);
    assert_ne!(ledger.all()[1].id, ledger.all()[2].id);
}

#[test]
fn test_ledger_rejects_malformed_records() {
    let mut ledger = ActivityLedger::new();

    let negative = ledger.add(input("A", -1.0, 5.0, 2.0, 8));
    assert!(matches!(negative, Err(PlannerError::InvalidRecord { .. })));

    let impact_low = ledger.add(input("B", 1.0, 1.0, 1.0, 0));
    assert!(matches!(impact_low, Err(PlannerError::InvalidRecord { .. })));

    let impact_high = ledger.add(input("C", 1.0, 1.0, 1.0, 11));
    assert!(matches!(impact_high, Err(PlannerError::InvalidRecord { .. })));

    let unnamed = ledger.add(input("  ", 1.0, 1.0, 1.0, 5));
    assert!(matches!(unnamed, Err(PlannerError::InvalidRecord { .. })));

    // Rejected adds leave the ledger untouched.
    assert!(ledger.is_empty());
}

#[test]
fn test_rank_orders_by_efficiency() {
    init_logs();
    let records = vec![
        record("A", 10.0, 5.0, 2.0, 8),
        record("B", 5.0, 5.0, 0.0, 4),
    ];

    let outcome = rank(&records, &ResourceCeilings::default()).unwrap();

    assert_eq!(outcome.ranked[0].record.name, "A");
    assert_eq!(outcome.ranked[1].record.name, "B");
    assert!((outcome.ranked[0].efficiency - 8.0 / 17.0).abs() < 1e-9);
    assert!((outcome.ranked[1].efficiency - 0.4).abs() < 1e-9);
}

#[test]
fn test_rank_rejects_zero_resource_activity() {
    let records = vec![
        record("A", 10.0, 5.0, 2.0, 8),
        record("Free Lunch", 0.0, 0.0, 0.0, 5),
    ];

    let result = rank(&records, &ResourceCeilings::default());

    match result {
        Err(PlannerError::ZeroResourceActivity { name }) => assert_eq!(name, "Free Lunch"),
        other => panic!("expected ZeroResourceActivity, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_rank_ties_keep_insertion_order() {
    // Both score 0.5; the earlier record stays first.
    let records = vec![
        record("First", 10.0, 0.0, 0.0, 5),
        record("Second", 20.0, 0.0, 0.0, 10),
    ];

    let outcome = rank(&records, &ResourceCeilings::default()).unwrap();

    assert_eq!(outcome.ranked[0].record.name, "First");
    assert_eq!(outcome.ranked[1].record.name, "Second");
}

#[test]
fn test_summary_totals_each_dimension() {
    let records = vec![
        record("A", 10.0, 5.0, 2.0, 8),
        record("B", 5.0, 5.0, 1.0, 4),
    ];
    let ceilings = ResourceCeilings {
        budget: 100.0,
        time: 12.0,
        personnel: 5.0,
    };

    let outcome = rank(&records, &ceilings).unwrap();

    assert!((outcome.summary.used.budget - 15.0).abs() < 1e-9);
    assert!((outcome.summary.used.time - 10.0).abs() < 1e-9);
    assert!((outcome.summary.used.personnel - 3.0).abs() < 1e-9);
    assert!((outcome.summary.ceilings.budget - 100.0).abs() < 1e-9);
}

#[test]
fn test_rank_reports_but_does_not_enforce_ceilings() {
    // Usage above every ceiling still ranks; the caller decides what to do.
    let records = vec![record("Big", 500.0, 50.0, 20.0, 9)];
    let ceilings = ResourceCeilings {
        budget: 100.0,
        time: 12.0,
        personnel: 5.0,
    };

    let outcome = rank(&records, &ceilings).unwrap();

    assert_eq!(outcome.ranked.len(), 1);
    assert!(outcome.summary.used.budget > outcome.summary.ceilings.budget);
}

#[test]
fn test_rank_empty_ledger() {
    let outcome = rank(&[], &ResourceCeilings::default()).unwrap();

    assert!(outcome.ranked.is_empty());
    assert_eq!(outcome.summary.used.budget, 0.0);
    assert_eq!(outcome.summary.used.time, 0.0);
    assert_eq!(outcome.summary.used.personnel, 0.0);
}

#[test]
fn test_default_ceilings_match_planner_defaults() {
    let ceilings = ResourceCeilings::default();
    assert_eq!(ceilings.budget, 100_000.0);
    assert_eq!(ceilings.time, 24.0);
    assert_eq!(ceilings.personnel, 10.0);
}
