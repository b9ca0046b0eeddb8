//! Strategies for the Iterated Prisoner's Dilemma
//!
//! Every strategy implements [`Policy`]: given the history of the current
//! game and the slot it plays in, it picks the next [`Action`]. Running the
//! game (pairing players, keeping the [`History`], scoring) is left to the
//! caller, which builds one policy instance per player per game.

mod action;
mod error;
mod history;
mod random;
mod registry;
mod strategy;

pub use action::Action;
pub use error::PolicyError;
pub use history::{opponent_slot, History, RoundOutcome};
pub use random::SeededRng;
pub use registry::{
    build_policy, describe_strategy, parse_strategy, Strategy, StrategyBase, StrategyParams,
};
pub use strategy::{
    AlwaysCooperate, AlwaysDefect, Grudger, Gtft, Pavlov, Policy, RandomStrategy, TitForTat,
    DEFAULT_COOPERATE_PROBABILITY, DEFAULT_FORGIVENESS,
};
