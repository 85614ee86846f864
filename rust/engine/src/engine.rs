use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::betting::{BettingRound, RoundClosure};
use crate::cards::Card;
use crate::decision::DecisionMaker;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::events::{BlindKind, EventSink, HandEvent};
use crate::game::{table_chips, GameState, Stage, MAX_SEATS};
use crate::hand::{evaluate_with_board, HandStrength};
use crate::player::STARTING_STACK;
use crate::pot::split_pot;

/// Table setup: one stack per seat, the blinds and an optional master seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    pub stacks: Vec<u32>,
    pub small_blind: u32,
    pub big_blind: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new(2, STARTING_STACK, 10, 20)
    }
}

impl TableConfig {
    /// `players` seats with the same starting stack.
    pub fn new(players: usize, stack: u32, small_blind: u32, big_blind: u32) -> Self {
        Self {
            stacks: vec![stack; players],
            small_blind,
            big_blind,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let n = self.stacks.len();
        if n < 2 {
            return Err(GameError::Configuration(format!(
                "at least two players are required, got {}",
                n
            )));
        }
        if n > MAX_SEATS {
            return Err(GameError::Configuration(format!(
                "at most {} players are supported, got {}",
                MAX_SEATS, n
            )));
        }
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::Configuration("blinds must be positive".into()));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::Configuration(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        table_chips(&self.stacks)?;
        if self.stacks.iter().filter(|&&s| s > 0).count() < 2 {
            return Err(GameError::Configuration(
                "at least two players need chips".into(),
            ));
        }
        Ok(())
    }
}

/// Result of one hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandSummary {
    pub hand_no: u64,
    /// Seed of this hand's deck; replays the exact deal.
    pub deck_seed: u64,
    pub button: usize,
    pub small_blind_seat: usize,
    pub big_blind_seat: usize,
    pub board: Vec<Card>,
    pub pot: u32,
    pub payouts: Vec<(usize, u32)>,
    pub showdown: Vec<(usize, HandStrength)>,
    pub default_win: bool,
    pub events: Vec<HandEvent>,
    pub stacks: Vec<u32>,
}

impl HandSummary {
    pub fn winners(&self) -> Vec<usize> {
        self.payouts.iter().map(|&(seat, _)| seat).collect()
    }
}

/// Drives hands from blinds to settlement.
///
/// Every seat has exactly one [`DecisionMaker`]; the engine asks it for a decision
/// whenever that seat is the current actor and blocks until it answers. Subscribed
/// [`EventSink`]s receive each [`HandEvent`] as it happens.
///
/// # Examples
///
/// ```
/// use tablestakes_engine::decision::{Decision, DecisionMaker, ScriptedPolicy};
/// use tablestakes_engine::engine::{Engine, TableConfig};
///
/// let config = TableConfig::new(3, 1000, 10, 20).with_seed(7);
/// let policies: Vec<Box<dyn DecisionMaker>> = vec![
///     Box::new(ScriptedPolicy::new([Decision::fold()])),
///     Box::new(ScriptedPolicy::new([Decision::fold()])),
///     Box::new(ScriptedPolicy::default()),
/// ];
/// let mut engine = Engine::new(config, policies).unwrap();
/// let summary = engine.play_hand().unwrap();
/// assert!(summary.default_win);
/// assert_eq!(summary.stacks, vec![1000, 990, 1010]);
/// ```
pub struct Engine<'a> {
    config: TableConfig,
    state: GameState,
    seed: u64,
    rng: ChaCha20Rng,
    policies: Vec<Box<dyn DecisionMaker + 'a>>,
    sinks: Vec<Box<dyn EventSink + 'a>>,
    hands_played: u64,
    events: Vec<HandEvent>,
}

impl<'a> Engine<'a> {
    pub fn new(
        config: TableConfig,
        policies: Vec<Box<dyn DecisionMaker + 'a>>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if policies.len() != config.stacks.len() {
            return Err(GameError::Configuration(format!(
                "{} seats but {} decision policies",
                config.stacks.len(),
                policies.len()
            )));
        }
        let state = GameState::new(&config.stacks, config.small_blind, config.big_blind)?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            config,
            state,
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
            policies,
            sinks: Vec::new(),
            hands_played: 0,
            events: Vec::new(),
        })
    }

    pub fn subscribe(&mut self, sink: Box<dyn EventSink + 'a>) {
        self.sinks.push(sink);
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn state(&self) -> &GameState {
        &self.state
    }
    /// Master seed, drawn at random when the config had none.
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }
    pub fn policy_name(&self, seat: usize) -> Option<&str> {
        self.policies.get(seat).map(|p| p.name())
    }

    /// Plays hands until `max_hands` have been played or fewer than two seats have
    /// chips.
    pub fn play_session(&mut self, max_hands: u64) -> Result<Vec<HandSummary>, GameError> {
        let mut summaries = Vec::new();
        while (summaries.len() as u64) < max_hands && self.state.funded_seats() >= 2 {
            summaries.push(self.play_hand()?);
        }
        Ok(summaries)
    }

    /// Plays one complete hand.
    ///
    /// # Errors
    ///
    /// [`GameError::Configuration`] when fewer than two seats have chips; any
    /// [`GameError::InvariantViolation`] or [`GameError::InsufficientCards`] aborts the
    /// hand.
    pub fn play_hand(&mut self) -> Result<HandSummary, GameError> {
        self.events.clear();
        self.state.start_hand()?;
        let button = self.state.rotate_button()?;
        self.hands_played += 1;
        let hand_no = self.hands_played;

        let deck_seed = self.rng.next_u64();
        let mut deck = Deck::new_with_seed(deck_seed);
        deck.shuffle();

        self.emit(HandEvent::HandStarted {
            hand_no,
            button,
            stacks: self.state.stacks(),
        });
        debug!(hand_no, button, deck_seed, "hand started");

        let (sb, bb) = self.state.blind_seats()?;
        self.post_blind(sb, BlindKind::Small)?;
        self.post_blind(bb, BlindKind::Big)?;
        self.deal_hole_cards(&mut deck)?;

        let hand = HandProgress {
            hand_no,
            deck_seed,
            button,
            sb,
            bb,
        };

        if let RoundClosure::DefaultWin(winner) = self.run_round(Stage::Preflop, Some(bb))? {
            return self.settle_default(&hand, winner);
        }
        for stage in [Stage::Flop, Stage::Turn, Stage::River] {
            let cards = deck.burn_and_deal(stage.cards_to_deal())?;
            self.state.enter_street(stage, cards.clone())?;
            debug!(hand_no, %stage, board = ?self.state.board(), "street dealt");
            self.emit(HandEvent::CommunityDealt { stage, cards });
            if let RoundClosure::DefaultWin(winner) = self.run_round(stage, None)? {
                return self.settle_default(&hand, winner);
            }
        }
        self.settle_showdown(&hand)
    }

    fn emit(&mut self, event: HandEvent) {
        for sink in &mut self.sinks {
            sink.emit(&event);
        }
        self.events.push(event);
    }

    fn post_blind(&mut self, seat: usize, blind: BlindKind) -> Result<(), GameError> {
        let size = match blind {
            BlindKind::Small => self.state.small_blind(),
            BlindKind::Big => self.state.big_blind(),
        };
        let amount = self.state.place_bet(seat, size)?;
        self.emit(HandEvent::BlindPosted { seat, blind, amount });
        Ok(())
    }

    /// One card at a time, two passes, starting left of the button.
    fn deal_hole_cards(&mut self, deck: &mut Deck) -> Result<(), GameError> {
        let order = self.state.order_from_button(&self.state.seats_in_hand());
        for _ in 0..2 {
            for &seat in &order {
                let card = deck.deal_card()?;
                self.state.give_card(seat, card)?;
            }
        }
        for &seat in &order {
            let cards = self.hole_pair(seat)?;
            self.emit(HandEvent::HoleCardsDealt { seat, cards });
        }
        Ok(())
    }

    fn hole_pair(&self, seat: usize) -> Result<[Card; 2], GameError> {
        match self.state.player(seat).hole_cards() {
            [Some(a), Some(b)] => Ok([a, b]),
            _ => Err(GameError::InvariantViolation(format!(
                "seat {} is missing hole cards",
                seat
            ))),
        }
    }

    fn run_round(
        &mut self,
        stage: Stage,
        big_blind_seat: Option<usize>,
    ) -> Result<RoundClosure, GameError> {
        let mut round = BettingRound::new(stage);
        round.open(&self.state, big_blind_seat)?;
        while let Some(request) = round.decision_request(&self.state) {
            let seat = request.seat;
            let decision = self.policies[seat].decide(&request);
            let outcome = round.apply(&mut self.state, seat, decision)?;
            if let Some(illegal) = outcome.illegal {
                self.emit(HandEvent::IllegalAction {
                    seat,
                    attempted: illegal.attempted,
                    reason: illegal.reason,
                });
            }
            self.emit(HandEvent::ActionTaken {
                seat,
                stage,
                action: outcome.action,
                amount: outcome.amount,
                total: outcome.total,
                all_in: outcome.all_in,
            });
        }
        let closure = round.closure().ok_or_else(|| {
            GameError::InvariantViolation(format!("{} round stopped without closing", stage))
        })?;
        self.emit(HandEvent::RoundClosed {
            stage,
            closure,
            pot: self.state.pot(),
        });
        Ok(closure)
    }

    fn settle_default(
        &mut self,
        hand: &HandProgress,
        winner: usize,
    ) -> Result<HandSummary, GameError> {
        let payouts = vec![(winner, self.state.pot())];
        self.finish(hand, payouts, Vec::new(), true)
    }

    fn settle_showdown(&mut self, hand: &HandProgress) -> Result<HandSummary, GameError> {
        let contenders = self.state.order_from_button(&self.state.seats_in_hand());
        let mut results: Vec<(usize, HandStrength)> = Vec::with_capacity(contenders.len());
        for seat in contenders {
            let cards = self.hole_pair(seat)?;
            let strength = evaluate_with_board(&cards, self.state.board())?;
            self.emit(HandEvent::Showdown {
                seat,
                cards,
                strength: strength.clone(),
            });
            results.push((seat, strength));
        }
        let best = results
            .iter()
            .map(|(_, s)| s)
            .max()
            .cloned()
            .ok_or_else(|| GameError::InvariantViolation("showdown without contenders".into()))?;
        let winners: Vec<usize> = results
            .iter()
            .filter(|(_, s)| *s == best)
            .map(|&(seat, _)| seat)
            .collect();
        let payouts = split_pot(self.state.pot(), &winners);
        self.finish(hand, payouts, results, false)
    }

    fn finish(
        &mut self,
        hand: &HandProgress,
        payouts: Vec<(usize, u32)>,
        showdown: Vec<(usize, HandStrength)>,
        default_win: bool,
    ) -> Result<HandSummary, GameError> {
        let pot = self.state.pot();
        self.state.award(&payouts)?;
        let stacks = self.state.stacks();
        self.emit(HandEvent::HandSettled {
            payouts: payouts.clone(),
            pot,
            stacks: stacks.clone(),
        });
        info!(
            hand_no = hand.hand_no,
            pot,
            ?payouts,
            default_win,
            "hand settled"
        );
        Ok(HandSummary {
            hand_no: hand.hand_no,
            deck_seed: hand.deck_seed,
            button: hand.button,
            small_blind_seat: hand.sb,
            big_blind_seat: hand.bb,
            board: self.state.board().to_vec(),
            pot,
            payouts,
            showdown,
            default_win,
            events: std::mem::take(&mut self.events),
            stacks,
        })
    }
}

struct HandProgress {
    hand_no: u64,
    deck_seed: u64,
    button: usize,
    sb: usize,
    bb: usize,
}
