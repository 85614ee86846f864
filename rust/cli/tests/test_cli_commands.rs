use serial_test::serial;
use tablestakes_cli::run;
use tablestakes_engine::logger::read_hand_records;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["tablestakes"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn help_lists_expected_commands() {
    let (code, stdout, _) = run_cli(&["--help"]);
    assert_eq!(code, 0);
    for cmd in ["play", "sim", "deal", "rank", "cfg"] {
        assert!(stdout.contains(cmd), "help should list subcommand `{}`", cmd);
    }
}

#[test]
fn unknown_command_prints_usage_and_exits_2() {
    let (code, stdout, stderr) = run_cli(&["shuffle"]);
    assert_eq!(code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage: tablestakes <command> [options]"));
    assert!(stderr.contains("  rank"));
}

#[test]
fn rank_scenario_wheel() {
    let (code, stdout, _) = run_cli(&["rank", "As", "2s", "3d", "4h", "5c", "9s", "Kh"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Hand: Straight"));
    assert!(stdout.contains("Tiebreak: 5"));
}

#[test]
fn rank_with_bad_input_exits_2() {
    let (code, _, stderr) = run_cli(&["rank", "As", "Ks"]);
    assert_eq!(code, 2);
    assert!(stderr.starts_with("Error: Engine error:"));
}

#[test]
#[serial]
fn deal_is_reproducible_from_seed() {
    let (code, first, _) = run_cli(&["deal", "--seed", "77", "--players", "4"]);
    assert_eq!(code, 0);
    let (_, second, _) = run_cli(&["deal", "--seed", "77", "--players", "4"]);
    assert_eq!(first, second);
}

#[test]
#[serial]
fn deal_rejects_oversized_table() {
    let (code, _, stderr) = run_cli(&["deal", "--players", "10"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("players must be between 2 and 9"));
}

#[test]
#[serial]
fn sim_writes_hand_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sim.jsonl");
    let (code, stdout, stderr) = run_cli(&[
        "sim",
        "--hands",
        "15",
        "--players",
        "3",
        "--seed",
        "5",
        "--ai",
        "random,passive",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "{}", stderr);
    assert!(stdout.contains("seat 2 (RandomAI)"));
    assert!(stdout.contains("Hand history:"));

    let records = read_hand_records(&path).unwrap();
    assert!(!records.is_empty());
    for record in &records {
        assert_eq!(record.blinds, [10, 20]);
        assert!(record.ts.is_some());
        let paid: u32 = record.payouts.iter().map(|&(_, amount)| amount).sum();
        assert_eq!(paid, record.pot);
    }
}

#[test]
#[serial]
fn sim_with_unknown_bot_exits_2() {
    let (code, _, stderr) = run_cli(&["sim", "--hands", "3", "--ai", "shark"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("shark"));
}

#[test]
#[serial]
fn play_spectates_bots() {
    let (code, stdout, _) = run_cli(&[
        "play", "--vs", "ai", "--hands", "2", "--players", "4", "--seed", "8",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("play: vs=ai hands=2 players=4 seed=8"));
    assert!(stdout.contains("posts small blind 10"));
    assert!(stdout.contains("posts big blind 20"));
    assert!(stdout.contains("Hands played: 2"));
}
