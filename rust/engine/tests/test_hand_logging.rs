use std::fs;

use tablestakes_engine::decision::{Decision, DecisionMaker, ScriptedPolicy};
use tablestakes_engine::engine::{Engine, TableConfig};
use tablestakes_engine::game::Stage;
use tablestakes_engine::logger::{read_hand_records, HandLogger, HandRecord};
use tablestakes_engine::player::ActionKind;

fn fold_to_big_blind_record(id: &str) -> HandRecord {
    let policies: Vec<Box<dyn DecisionMaker>> = vec![
        Box::new(ScriptedPolicy::new([Decision::fold()])),
        Box::new(ScriptedPolicy::new([Decision::fold()])),
        Box::new(ScriptedPolicy::default()),
    ];
    let mut engine = Engine::new(TableConfig::new(3, 1000, 10, 20).with_seed(5), policies).unwrap();
    let summary = engine.play_hand().unwrap();
    HandRecord::from_summary(id.to_string(), Some(5), [10, 20], &summary)
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&fold_to_big_blind_record("20250102-000001")).expect("write");
    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    assert_eq!(bytes.iter().filter(|&&b| b == b'\n').count(), 1);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("hands.jsonl");
    HandLogger::create(&path).expect("create logger");
    assert!(path.exists());
}

#[test]
fn record_captures_actions_and_result() {
    let rec = fold_to_big_blind_record("20250102-000001");
    assert_eq!(rec.button, 0);
    assert_eq!(rec.pot, 30);
    assert_eq!(rec.payouts, vec![(2, 30)]);
    assert_eq!(rec.actions.len(), 2);
    assert!(rec
        .actions
        .iter()
        .all(|a| a.action == ActionKind::Fold && a.stage == Stage::Preflop));
    assert_eq!(rec.result.as_deref(), Some("seat 2 wins 30 uncontested"));
    assert!(rec.showdown.is_none());
}

#[test]
fn ts_is_generated_when_missing_and_preserved_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    let rec = fold_to_big_blind_record("20250102-000010");
    logger.write(&rec).expect("write");

    let preset = "2030-01-01T00:00:00Z".to_string();
    logger
        .write(&HandRecord {
            ts: Some(preset.clone()),
            ..rec
        })
        .expect("write2");

    let records = read_hand_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0].ts.as_deref().is_some_and(|ts| ts.ends_with('Z')));
    assert_eq!(records[1].ts.as_deref(), Some(preset.as_str()));
}

#[test]
fn session_log_round_trips_through_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.jsonl");
    let mut logger = HandLogger::create(&path).unwrap();
    let policies: Vec<Box<dyn DecisionMaker>> = (0..3)
        .map(|_| Box::new(ScriptedPolicy::default()) as Box<dyn DecisionMaker>)
        .collect();
    let mut engine = Engine::new(TableConfig::new(3, 200, 5, 10).with_seed(9), policies).unwrap();
    for summary in engine.play_session(5).unwrap() {
        logger.log_summary(Some(9), [5, 10], &summary).unwrap();
    }
    let records = read_hand_records(&path).unwrap();
    assert_eq!(records.len(), 5);
    assert!(records[4].hand_id.ends_with("-000005"));
    assert_eq!(records[0].seed, Some(9));
}
