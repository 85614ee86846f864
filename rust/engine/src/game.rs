use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::player::Player;
use crate::pot::Pot;

/// Most seats a single deck can serve with room for the board and burns.
pub const MAX_SEATS: usize = 9;

/// Sums the starting stacks. Every pot and stack is a `u32`, so the table as a whole
/// must fit in one.
pub fn table_chips(stacks: &[u32]) -> Result<u32, GameError> {
    stacks
        .iter()
        .try_fold(0u32, |sum, &s| sum.checked_add(s))
        .ok_or_else(|| {
            GameError::Configuration(format!(
                "table holds more than {} chips in total",
                u32::MAX
            ))
        })
}

/// Stage of a hand. The first four are betting streets.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Preflop,
    Flop,
    Turn,
    River,
    Complete,
}

impl Stage {
    /// Community cards dealt when entering this stage.
    pub fn cards_to_deal(self) -> usize {
        match self {
            Stage::Flop => 3,
            Stage::Turn | Stage::River => 1,
            Stage::Preflop | Stage::Complete => 0,
        }
    }

    pub fn next(self) -> Stage {
        match self {
            Stage::Preflop => Stage::Flop,
            Stage::Flop => Stage::Turn,
            Stage::Turn => Stage::River,
            Stage::River | Stage::Complete => Stage::Complete,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Preflop => "preflop",
            Stage::Flop => "flop",
            Stage::Turn => "turn",
            Stage::River => "river",
            Stage::Complete => "complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a hand mutates: the seat arena, the pot, the board, the button and the
/// blinds. Seats are never removed; folding and busting only change a seat's status.
#[derive(Debug, Clone)]
pub struct GameState {
    players: Vec<Player>,
    pot: Pot,
    button: Option<usize>,
    small_blind: u32,
    big_blind: u32,
    stage: Stage,
    board: Vec<Card>,
    total_chips: u64,
}

impl GameState {
    pub fn new(stacks: &[u32], small_blind: u32, big_blind: u32) -> Result<Self, GameError> {
        if stacks.len() < 2 {
            return Err(GameError::Configuration(format!(
                "at least two players are required, got {}",
                stacks.len()
            )));
        }
        if stacks.len() > MAX_SEATS {
            return Err(GameError::Configuration(format!(
                "at most {} players are supported, got {}",
                MAX_SEATS,
                stacks.len()
            )));
        }
        if small_blind == 0 || big_blind == 0 {
            return Err(GameError::Configuration("blinds must be positive".into()));
        }
        if small_blind > big_blind {
            return Err(GameError::Configuration(format!(
                "small blind {} exceeds big blind {}",
                small_blind, big_blind
            )));
        }
        let total_chips = u64::from(table_chips(stacks)?);
        let players: Vec<Player> = stacks
            .iter()
            .enumerate()
            .map(|(seat, &stack)| Player::new(seat, stack))
            .collect();
        Ok(Self {
            players,
            pot: Pot::new(),
            button: None,
            small_blind,
            big_blind,
            stage: Stage::Complete,
            board: Vec::with_capacity(5),
            total_chips,
        })
    }

    /// Places the button explicitly, e.g. to replay a recorded hand. The next
    /// `rotate_button` moves it on from here.
    pub fn with_button(mut self, seat: usize) -> Self {
        self.button = Some(seat % self.players.len());
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, seat: usize) -> &Player {
        &self.players[seat]
    }
    pub fn seat_count(&self) -> usize {
        self.players.len()
    }
    pub fn button(&self) -> Option<usize> {
        self.button
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn pot(&self) -> u32 {
        self.pot.amount()
    }
    pub fn stage(&self) -> Stage {
        self.stage
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn total_chips(&self) -> u64 {
        self.total_chips
    }
    pub fn stacks(&self) -> Vec<u32> {
        self.players.iter().map(Player::stack).collect()
    }

    pub fn funded_seats(&self) -> usize {
        self.players.iter().filter(|p| p.stack() > 0).count()
    }

    /// Seats still contesting the pot, in seat order.
    pub fn seats_in_hand(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.in_hand())
            .map(Player::seat)
            .collect()
    }

    pub fn actable_seats(&self) -> Vec<usize> {
        self.players
            .iter()
            .filter(|p| p.can_act())
            .map(Player::seat)
            .collect()
    }

    /// First seat strictly after `seat`, going clockwise and wrapping, that satisfies
    /// `pred`. `seat` itself is checked last.
    pub fn seat_after(&self, seat: usize, pred: impl Fn(&Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..=n)
            .map(|offset| (seat + offset) % n)
            .find(|&s| pred(&self.players[s]))
    }

    /// Orders `seats` clockwise starting left of the button.
    pub fn order_from_button(&self, seats: &[usize]) -> Vec<usize> {
        let n = self.players.len();
        let start = self.button.map_or(0, |b| (b + 1) % n);
        let mut ordered = seats.to_vec();
        ordered.sort_by_key(|&s| (s + n - start) % n);
        ordered
    }

    /// Resets hand-scoped fields. Refuses to start while chips are still in the pot or
    /// when fewer than two seats can pay.
    pub fn start_hand(&mut self) -> Result<(), GameError> {
        if self.pot.amount() != 0 {
            return Err(GameError::InvariantViolation(format!(
                "pot holds {} chips at hand start",
                self.pot.amount()
            )));
        }
        if self.funded_seats() < 2 {
            return Err(GameError::Configuration(
                "fewer than two players have chips".into(),
            ));
        }
        for p in &mut self.players {
            p.reset_for_hand();
        }
        self.board.clear();
        self.stage = Stage::Preflop;
        Ok(())
    }

    /// Moves the button to the next funded seat; the first hand puts it on the first
    /// funded seat.
    pub fn rotate_button(&mut self) -> Result<usize, GameError> {
        let n = self.players.len();
        let from = self.button.unwrap_or(n - 1);
        let next = self
            .seat_after(from, |p| p.stack() > 0)
            .ok_or_else(|| GameError::Configuration("no funded seat for the button".into()))?;
        self.button = Some(next);
        Ok(next)
    }

    /// Small and big blind seats for the current button. Heads-up the button posts
    /// the small blind.
    pub fn blind_seats(&self) -> Result<(usize, usize), GameError> {
        let button = self
            .button
            .ok_or(GameError::Configuration("button has not been placed".into()))?;
        let funded = |p: &Player| p.can_act();
        let sb = if self.actable_seats().len() == 2 {
            button
        } else {
            self.seat_after(button, funded)
                .ok_or(GameError::Configuration("no small blind seat".into()))?
        };
        let bb = self
            .seat_after(sb, funded)
            .ok_or(GameError::Configuration("no big blind seat".into()))?;
        Ok((sb, bb))
    }

    /// Ledger `place_bet` for `seat`: the committed chips go into the pot.
    pub fn place_bet(&mut self, seat: usize, amount: u32) -> Result<u32, GameError> {
        let committed = self.players[seat].place_bet(amount);
        self.pot.add(committed)?;
        self.check_invariants()?;
        Ok(committed)
    }

    pub fn fold(&mut self, seat: usize) -> Result<(), GameError> {
        self.players[seat].fold();
        self.check_invariants()
    }

    pub fn give_card(&mut self, seat: usize, card: Card) -> Result<(), GameError> {
        self.players[seat]
            .give_card(card)
            .map_err(GameError::InvariantViolation)
    }

    /// Enters `stage`: appends its community cards and zeroes street bets.
    pub fn enter_street(&mut self, stage: Stage, cards: Vec<Card>) -> Result<(), GameError> {
        if self.board.len() + cards.len() > 5 {
            return Err(GameError::InvariantViolation(format!(
                "board would hold {} cards",
                self.board.len() + cards.len()
            )));
        }
        self.board.extend(cards);
        self.stage = stage;
        for p in &mut self.players {
            p.reset_street();
        }
        Ok(())
    }

    /// Pays out the whole pot and completes the hand.
    pub fn award(&mut self, payouts: &[(usize, u32)]) -> Result<(), GameError> {
        let paid: u32 = payouts.iter().map(|&(_, amount)| amount).sum();
        if paid != self.pot.amount() {
            return Err(GameError::InvariantViolation(format!(
                "payouts total {} but pot holds {}",
                paid,
                self.pot.amount()
            )));
        }
        self.pot.take();
        for &(seat, amount) in payouts {
            self.players[seat].award(amount);
        }
        self.stage = Stage::Complete;
        self.check_invariants()
    }

    /// Chip conservation, plus per-seat ledger invariants while a hand is running.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let in_play: u64 = self
            .players
            .iter()
            .map(|p| u64::from(p.stack()))
            .sum::<u64>()
            + u64::from(self.pot.amount());
        if in_play != self.total_chips {
            return Err(GameError::InvariantViolation(format!(
                "stacks plus pot total {} but table started with {}",
                in_play, self.total_chips
            )));
        }
        if self.stage != Stage::Complete {
            for p in &self.players {
                p.check_invariants().map_err(GameError::InvariantViolation)?;
            }
        }
        Ok(())
    }
}
