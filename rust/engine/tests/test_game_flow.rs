use std::cell::RefCell;
use std::rc::Rc;

use tablestakes_engine::betting::RoundClosure;
use tablestakes_engine::decision::{Decision, DecisionMaker, DecisionRequest, ScriptedPolicy};
use tablestakes_engine::engine::{Engine, TableConfig};
use tablestakes_engine::events::{BlindKind, EventSink, HandEvent};
use tablestakes_engine::game::Stage;
use tablestakes_engine::player::ActionKind;

/// Calls any bet, checks otherwise.
struct CallingStation;

impl DecisionMaker for CallingStation {
    fn decide(&mut self, req: &DecisionRequest) -> Decision {
        if req.can(ActionKind::Call) {
            Decision::call()
        } else {
            Decision::check()
        }
    }
    fn name(&self) -> &str {
        "station"
    }
}

/// Shoves whenever it may, calls otherwise.
struct Shover;

impl DecisionMaker for Shover {
    fn decide(&mut self, req: &DecisionRequest) -> Decision {
        match req.aggressive_action() {
            Some(kind) => Decision::new(kind, req.all_in_total()),
            None if req.can(ActionKind::Call) => Decision::call(),
            None => Decision::check(),
        }
    }
    fn name(&self) -> &str {
        "shover"
    }
}

struct SharedLog(Rc<RefCell<Vec<HandEvent>>>);

impl EventSink for SharedLog {
    fn emit(&mut self, event: &HandEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

fn stations(n: usize) -> Vec<Box<dyn DecisionMaker>> {
    (0..n)
        .map(|_| Box::new(CallingStation) as Box<dyn DecisionMaker>)
        .collect()
}

fn scripted(scripts: Vec<Vec<Decision>>) -> Vec<Box<dyn DecisionMaker>> {
    scripts
        .into_iter()
        .map(|s| Box::new(ScriptedPolicy::new(s)) as Box<dyn DecisionMaker>)
        .collect()
}

fn action_count(events: &[HandEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, HandEvent::ActionTaken { .. }))
        .count()
}

#[test]
fn fold_around_to_big_blind() {
    let config = TableConfig::new(3, 1000, 10, 20).with_seed(11);
    let policies = scripted(vec![vec![Decision::fold()], vec![Decision::fold()], vec![]]);
    let mut engine = Engine::new(config, policies).unwrap();
    let summary = engine.play_hand().unwrap();

    assert_eq!(summary.button, 0);
    assert_eq!((summary.small_blind_seat, summary.big_blind_seat), (1, 2));
    assert!(summary.default_win);
    assert_eq!(summary.pot, 30);
    assert_eq!(summary.payouts, vec![(2, 30)]);
    assert_eq!(summary.stacks, vec![1000, 990, 1010]);
}

#[test]
fn default_win_skips_remaining_streets() {
    let config = TableConfig::new(3, 1000, 10, 20).with_seed(3);
    let policies = scripted(vec![vec![Decision::fold()], vec![Decision::fold()], vec![]]);
    let mut engine = Engine::new(config, policies).unwrap();
    let summary = engine.play_hand().unwrap();

    assert!(summary.board.is_empty());
    assert!(summary.showdown.is_empty());
    assert!(!summary
        .events
        .iter()
        .any(|e| matches!(e, HandEvent::CommunityDealt { .. })));
    assert!(summary.events.contains(&HandEvent::RoundClosed {
        stage: Stage::Preflop,
        closure: RoundClosure::DefaultWin(2),
        pot: 30,
    }));
}

#[test]
fn events_follow_hand_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut engine = Engine::new(TableConfig::new(3, 1000, 10, 20).with_seed(5), stations(3)).unwrap();
    engine.subscribe(Box::new(SharedLog(Rc::clone(&log))));
    let summary = engine.play_hand().unwrap();

    let events = log.borrow();
    assert_eq!(*events, summary.events);
    assert!(matches!(events[0], HandEvent::HandStarted { hand_no: 1, button: 0, .. }));
    assert_eq!(
        events[1],
        HandEvent::BlindPosted { seat: 1, blind: BlindKind::Small, amount: 10 }
    );
    assert_eq!(
        events[2],
        HandEvent::BlindPosted { seat: 2, blind: BlindKind::Big, amount: 20 }
    );
    let dealt: Vec<usize> = events
        .iter()
        .filter_map(|e| match e {
            HandEvent::HoleCardsDealt { seat, .. } => Some(*seat),
            _ => None,
        })
        .collect();
    assert_eq!(dealt, vec![1, 2, 0]);
    assert!(matches!(events.last(), Some(HandEvent::HandSettled { .. })));
    assert_eq!(summary.board.len(), 5);
    assert_eq!(summary.showdown.len(), 3);
}

#[test]
fn illegal_decision_is_reported_and_folded() {
    let config = TableConfig::new(3, 1000, 10, 20).with_seed(8);
    let policies = scripted(vec![vec![Decision::check()], vec![Decision::fold()], vec![]]);
    let mut engine = Engine::new(config, policies).unwrap();
    let summary = engine.play_hand().unwrap();

    assert!(summary.events.iter().any(|e| matches!(
        e,
        HandEvent::IllegalAction { seat: 0, attempted: ActionKind::Check, .. }
    )));
    assert!(summary.events.contains(&HandEvent::ActionTaken {
        seat: 0,
        stage: Stage::Preflop,
        action: ActionKind::Fold,
        amount: 0,
        total: 0,
        all_in: false,
    }));
    assert_eq!(summary.payouts, vec![(2, 30)]);
}

#[test]
fn all_in_preflop_runs_out_the_board() {
    let config = TableConfig::new(2, 100, 10, 20).with_seed(21);
    let policies: Vec<Box<dyn DecisionMaker>> = vec![Box::new(Shover), Box::new(Shover)];
    let mut engine = Engine::new(config, policies).unwrap();
    let summary = engine.play_hand().unwrap();

    assert_eq!(action_count(&summary.events), 2, "no decisions after both are all-in");
    assert_eq!(summary.board.len(), 5);
    assert_eq!(summary.pot, 200);
    assert_eq!(summary.showdown.len(), 2);
    assert_eq!(summary.stacks.iter().sum::<u32>(), 200);
    let runouts = summary
        .events
        .iter()
        .filter(|e| {
            matches!(
                e,
                HandEvent::RoundClosed { closure: RoundClosure::NoActionNeeded, .. }
            )
        })
        .count();
    assert_eq!(runouts, 3);
}

#[test]
fn busted_seat_sits_out() {
    let mut config = TableConfig::new(3, 1000, 10, 20).with_seed(4);
    config.stacks = vec![1000, 0, 1000];
    let mut engine = Engine::new(config, stations(3)).unwrap();
    let summary = engine.play_hand().unwrap();

    assert_eq!(summary.button, 0);
    assert_eq!((summary.small_blind_seat, summary.big_blind_seat), (0, 2));
    assert!(!summary.events.iter().any(|e| match e {
        HandEvent::HoleCardsDealt { seat, .. }
        | HandEvent::ActionTaken { seat, .. }
        | HandEvent::Showdown { seat, .. } => *seat == 1,
        _ => false,
    }));
    assert_eq!(summary.stacks[1], 0);
}

#[test]
fn same_seed_replays_identically() {
    let run = |seed| {
        let mut engine = Engine::new(TableConfig::new(4, 500, 5, 10).with_seed(seed), stations(4)).unwrap();
        engine.play_session(10).unwrap()
    };
    assert_eq!(run(99), run(99));
    assert_ne!(run(99)[0].board, run(100)[0].board);
}

#[test]
fn chips_are_conserved_across_a_session() {
    let mut engine = Engine::new(TableConfig::new(6, 300, 5, 10).with_seed(1234), stations(6)).unwrap();
    let summaries = engine.play_session(50).unwrap();
    assert!(!summaries.is_empty());
    for s in &summaries {
        assert_eq!(s.stacks.iter().sum::<u32>(), 1800, "hand {}", s.hand_no);
        assert_eq!(s.payouts.iter().map(|&(_, a)| a).sum::<u32>(), s.pot);
    }
    assert_eq!(engine.state().pot(), 0);
}

#[test]
fn split_pots_share_evenly_and_odd_chip_goes_left_of_button() {
    let mut engine = Engine::new(TableConfig::new(9, 2000, 5, 10).with_seed(777), stations(9)).unwrap();
    let summaries = engine.play_session(400).unwrap();
    let mut splits = 0;
    for s in summaries.iter().filter(|s| s.payouts.len() > 1) {
        splits += 1;
        let shares: Vec<u32> = s.payouts.iter().map(|&(_, a)| a).collect();
        let ways = shares.len() as u32;
        let base = s.pot / ways;
        assert_eq!(shares[0], base + s.pot % ways, "first seat left of the button takes the odd chips");
        assert!(shares[1..].iter().all(|&a| a == base));
        let n = 9;
        let dist = |seat: usize| (seat + n - (s.button + 1) % n) % n;
        let seats: Vec<usize> = s.payouts.iter().map(|&(seat, _)| seat).collect();
        assert!(seats.windows(2).all(|w| dist(w[0]) < dist(w[1])));
    }
    assert!(splits > 0, "expected at least one chopped pot");
}

#[test]
fn session_stops_when_one_player_has_the_chips() {
    let config = TableConfig::new(2, 100, 10, 20).with_seed(42);
    let policies: Vec<Box<dyn DecisionMaker>> = vec![Box::new(Shover), Box::new(Shover)];
    let mut engine = Engine::new(config, policies).unwrap();
    let summaries = engine.play_session(1000).unwrap();
    assert!(summaries.len() < 1000);
    assert_eq!(engine.state().funded_seats(), 1);
    assert!(engine.play_hand().is_err());
}
