use tablestakes_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use tablestakes_engine::hand::{compare_hands, evaluate_hand, evaluate_with_board, Category, HandStrength};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

fn eval(s: &str) -> HandStrength {
    evaluate_hand(&parse_cards(s).expect("cards parse")).expect("5-7 cards")
}

#[test]
fn wheel_straight_plays_ace_low() {
    let hole = [c(S::Spades, R::Ace), c(S::Spades, R::Two)];
    let board = [
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Four),
        c(S::Clubs, R::Five),
        c(S::Spades, R::Nine),
        c(S::Hearts, R::King),
    ];
    let hs = evaluate_with_board(&hole, &board).unwrap();
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.category.to_string(), "Straight");
    assert_eq!(hs.tiebreak[0], 5);
}

#[test]
fn detects_royal_flush() {
    let hs = eval("Th Jh Qh Kh Ah 2c 3d");
    assert_eq!(hs.category, Category::RoyalFlush);
    assert_eq!(hs.tiebreak, vec![14]);
    assert_eq!(hs.category.to_string(), "Royal Flush");
}

#[test]
fn steel_wheel_is_a_five_high_straight_flush() {
    let hs = eval("Ad 2d 3d 4d 5d Kc Qh");
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreak, vec![5]);
}

#[test]
fn flush_and_straight_in_different_cards_is_only_a_flush() {
    let hs = eval("9h 8h 7c 6h 5d 2h Kh");
    assert_eq!(hs.category, Category::Flush);
    assert_eq!(hs.tiebreak, vec![13, 9, 8, 6, 2]);
}

#[test]
fn category_ordering_is_pairwise_correct() {
    let ladder = [
        "2c 7d 9h Js Kc",    // high card
        "2c 2d 9h Js Kc",    // one pair
        "2c 2d 9h 9s Kc",    // two pair
        "2c 2d 2h 9s Kc",    // trips
        "5c 6d 7h 8s 9c",    // straight
        "2h 7h 9h Jh Kh",    // flush
        "2c 2d 2h 9s 9c",    // full house
        "2c 2d 2h 2s Kc",    // quads
        "5h 6h 7h 8h 9h",    // straight flush
        "Ts Js Qs Ks As",    // royal flush
    ];
    let strengths: Vec<HandStrength> = ladder.iter().map(|s| eval(s)).collect();
    for (i, hs) in strengths.iter().enumerate() {
        assert_eq!(hs.category as usize, i, "{} ranked {}", ladder[i], hs.category);
    }
    for i in 0..strengths.len() {
        for j in (i + 1)..strengths.len() {
            assert!(
                compare_hands(&strengths[j], &strengths[i]).is_gt(),
                "{} should beat {}",
                ladder[j],
                ladder[i]
            );
        }
    }
}

#[test]
fn kickers_break_pair_ties() {
    let a = eval("Ac Ad Kh 9s 4c 3d 2h");
    let b = eval("Ah As Qh 9c 4d 3c 2s");
    assert_eq!(a.tiebreak, vec![14, 13, 9, 4]);
    assert!(a > b);
}

#[test]
fn identical_five_card_boards_tie() {
    let board = parse_cards("Ts Js Qd Kc Ah").unwrap();
    let a = evaluate_with_board(&parse_cards("2c 3c").unwrap(), &board).unwrap();
    let b = evaluate_with_board(&parse_cards("2d 4h").unwrap(), &board).unwrap();
    assert_eq!(a, b);
    assert!(compare_hands(&a, &b).is_eq());
}

#[test]
fn full_house_prefers_higher_trips() {
    let a = eval("Kc Kd Kh 2s 2c");
    let b = eval("Qc Qd Qh As Ac");
    assert!(a > b);
}

#[test]
fn quads_keep_best_kicker() {
    let hs = eval("9c 9d 9h 9s 3c Kd Qh");
    assert_eq!(hs.category, Category::FourOfAKind);
    assert_eq!(hs.tiebreak, vec![9, 13]);
}
