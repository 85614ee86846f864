use tablestakes_engine::cards::{Card, Rank, Suit};
use tablestakes_engine::errors::GameError;
use tablestakes_engine::game::{GameState, Stage};
use tablestakes_engine::player::{Player, SeatStatus, STARTING_STACK};

#[test]
fn player_receives_two_hole_cards() {
    let mut p = Player::new(0, STARTING_STACK);
    let a = Card::new(Rank::Ace, Suit::Spades);
    let k = Card::new(Rank::King, Suit::Spades);
    p.give_card(a).unwrap();
    p.give_card(k).unwrap();
    assert_eq!(p.hole_cards(), [Some(a), Some(k)]);
    assert!(p.give_card(a).is_err());
}

#[test]
fn ledger_bet_moves_chips_into_pot() {
    let mut gs = GameState::new(&[100, 100], 5, 10).unwrap();
    gs.rotate_button().unwrap();
    gs.start_hand().unwrap();
    assert_eq!(gs.place_bet(0, 40).unwrap(), 40);
    assert_eq!(gs.pot(), 40);
    assert_eq!(gs.player(0).stack(), 60);
    assert_eq!(gs.player(0).committed(), 40);
}

#[test]
fn ledger_bet_clamps_to_stack_and_marks_all_in() {
    let mut gs = GameState::new(&[30, 100], 5, 10).unwrap();
    gs.rotate_button().unwrap();
    gs.start_hand().unwrap();
    assert_eq!(gs.place_bet(0, 50).unwrap(), 30);
    assert_eq!(gs.player(0).status(), SeatStatus::AllIn);
    assert_eq!(gs.seats_in_hand(), vec![0, 1]);
    assert_eq!(gs.actable_seats(), vec![1]);
}

#[test]
fn street_transition_resets_bets_not_stacks() {
    let mut gs = GameState::new(&[100, 100], 5, 10).unwrap();
    gs.rotate_button().unwrap();
    gs.start_hand().unwrap();
    gs.place_bet(0, 10).unwrap();
    gs.place_bet(1, 10).unwrap();
    let flop = vec![
        Card::new(Rank::Two, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Hearts),
        Card::new(Rank::King, Suit::Diamonds),
    ];
    gs.enter_street(Stage::Flop, flop).unwrap();
    assert_eq!(gs.stage(), Stage::Flop);
    assert_eq!(gs.board().len(), 3);
    assert!(gs.players().iter().all(|p| p.committed() == 0));
    assert_eq!(gs.stacks(), vec![90, 90]);
    assert_eq!(gs.pot(), 20);
}

#[test]
fn board_never_exceeds_five_cards() {
    let mut gs = GameState::new(&[100, 100], 5, 10).unwrap();
    gs.rotate_button().unwrap();
    gs.start_hand().unwrap();
    let six: Vec<Card> = (2..=7)
        .filter_map(Rank::from_value)
        .map(|r| Card::new(r, Suit::Clubs))
        .collect();
    assert!(matches!(
        gs.enter_street(Stage::River, six),
        Err(GameError::InvariantViolation(_))
    ));
}

#[test]
fn hand_cannot_start_with_chips_in_the_pot() {
    let mut gs = GameState::new(&[100, 100], 5, 10).unwrap();
    gs.rotate_button().unwrap();
    gs.start_hand().unwrap();
    gs.place_bet(0, 5).unwrap();
    assert!(matches!(
        gs.start_hand(),
        Err(GameError::InvariantViolation(_))
    ));
}

#[test]
fn zero_stack_seat_sits_out_after_reset() {
    let mut gs = GameState::new(&[100, 0, 100], 5, 10).unwrap();
    gs.rotate_button().unwrap();
    gs.start_hand().unwrap();
    assert_eq!(gs.player(1).status(), SeatStatus::SittingOut);
    assert_eq!(gs.seats_in_hand(), vec![0, 2]);
    assert_eq!(gs.blind_seats().unwrap(), (0, 2));
}
