//! # tablestakes-engine: Hold'em Betting Engine Core
//!
//! A deterministic multi-player Texas Hold'em engine: blind posting, turn rotation,
//! betting-round closure, street dealing and showdown ranking. Decisions come in
//! through [`decision::DecisionMaker`]; what happened goes out as
//! [`events::HandEvent`]s. The engine never prints anything itself.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and deck construction
//! - [`deck`] - Seeded deck shuffling with ChaCha20 RNG and atomic burns
//! - [`player`] - Per-seat ledger: stack, commitments, status
//! - [`pot`] - Main pot and split arithmetic
//! - [`game`] - Table state, button rotation, chip conservation
//! - [`rules`] - Legal actions and decision validation
//! - [`betting`] - One street of betting as a state machine
//! - [`decision`] - Decision interface and a scripted policy
//! - [`events`] - Event interface and an in-memory log
//! - [`hand`] - Hand evaluation and strength comparison
//! - [`engine`] - Hand lifecycle orchestration
//! - [`logger`] - JSONL hand history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use tablestakes_engine::cards::parse_cards;
//! use tablestakes_engine::hand::{evaluate_hand, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let strength = evaluate_hand(&cards).unwrap();
//! assert_eq!(strength.category, Category::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every deal is reproducible from its seed:
//!
//! ```rust
//! use tablestakes_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal(5).unwrap(), b.deal(5).unwrap());
//! ```

pub mod betting;
pub mod cards;
pub mod decision;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod events;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
