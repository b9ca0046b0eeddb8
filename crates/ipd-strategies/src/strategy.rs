//! Policy contract and the built-in strategies
//!
//! Every policy reads the game history as a slice of [`RoundOutcome`]s and the
//! slot (0 or 1) it plays in. History is never modified; the only state a
//! policy mutates is its own (Grudger's latch, a generator's position).

use log::{debug, trace};

use crate::action::Action;
use crate::error::{check_probability, PolicyError};
use crate::history::{opponent_slot, RoundOutcome};
use crate::random::SeededRng;

/// Default cooperation probability for [`RandomStrategy`]
pub const DEFAULT_COOPERATE_PROBABILITY: f64 = 0.5;

/// Default forgiveness probability for [`Gtft`]
pub const DEFAULT_FORGIVENESS: f64 = 0.1;

/// A decision policy for one player in one game
///
/// Instances are not shared between games: create a new one (or call
/// [`Policy::reset`]) before playing a new opponent.
pub trait Policy {
    /// Display name, e.g. `Tit-for-Tat` or `GTFT(p=0.1)`
    fn name(&self) -> String;

    /// Choose the next action from `history`, playing as `slot`
    ///
    /// Fails with [`PolicyError::InvalidSlot`] when `slot` is not 0 or 1.
    fn decide(&mut self, history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError>;

    /// Forget everything learned in the current game
    fn reset(&mut self) {}
}

/// Always cooperate, never defect.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysCooperate;

impl Policy for AlwaysCooperate {
    fn name(&self) -> String {
        "Always Cooperate".to_string()
    }

    fn decide(&mut self, _history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        opponent_slot(slot)?;
        Ok(Action::Cooperate)
    }
}

/// Always defect, never cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysDefect;

impl Policy for AlwaysDefect {
    fn name(&self) -> String {
        "Always Defect".to_string()
    }

    fn decide(&mut self, _history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        opponent_slot(slot)?;
        Ok(Action::Defect)
    }
}

/// Copy opponent's last move. Start with cooperate.
#[derive(Clone, Copy, Debug, Default)]
pub struct TitForTat;

impl Policy for TitForTat {
    fn name(&self) -> String {
        "Tit-for-Tat".to_string()
    }

    fn decide(&mut self, history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        let opponent = opponent_slot(slot)?;
        Ok(match history.last() {
            None => Action::Cooperate,
            Some(last) => last.action_of(opponent),
        })
    }
}

/// Win-stay, lose-shift
///
/// Matching actions last round (CC or DD): repeat own move.
/// Mismatched (CD or DC): switch.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pavlov;

impl Policy for Pavlov {
    fn name(&self) -> String {
        "Pavlov".to_string()
    }

    fn decide(&mut self, history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        let opponent = opponent_slot(slot)?;
        let Some(last) = history.last() else {
            return Ok(Action::Cooperate);
        };

        let my_last = last.action_of(slot);
        if my_last == last.action_of(opponent) {
            Ok(my_last)
        } else {
            Ok(my_last.opposite())
        }
    }
}

/// Grim trigger: cooperate until the opponent defects once, then defect for
/// the rest of the game.
///
/// The whole history is scanned on every call, so an instance handed a
/// partial game still finds earlier defections. Once latched the flag is only
/// cleared by [`Policy::reset`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Grudger {
    opponent_defected: bool,
}

impl Grudger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the grudge has been latched in this game
    pub fn holds_grudge(&self) -> bool {
        self.opponent_defected
    }
}

impl Policy for Grudger {
    fn name(&self) -> String {
        "Grudger".to_string()
    }

    fn decide(&mut self, history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        let opponent = opponent_slot(slot)?;
        if history.is_empty() {
            return Ok(Action::Cooperate);
        }

        if !self.opponent_defected {
            if let Some(round) = history
                .iter()
                .position(|outcome| outcome.action_of(opponent).is_defect())
            {
                debug!("Grudger in slot {slot} latched: opponent defected in round {round}");
                self.opponent_defected = true;
            }
        }

        if self.opponent_defected {
            Ok(Action::Defect)
        } else {
            Ok(Action::Cooperate)
        }
    }

    fn reset(&mut self) {
        self.opponent_defected = false;
    }
}

/// Cooperate with a fixed probability each round, regardless of history.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    cooperate_probability: f64,
    rng: SeededRng,
}

impl RandomStrategy {
    /// `seed = None` draws the seed from OS entropy
    pub fn new(cooperate_probability: f64, seed: Option<u64>) -> Result<Self, PolicyError> {
        Ok(Self {
            cooperate_probability: check_probability(cooperate_probability)?,
            rng: SeededRng::from_optional_seed(seed),
        })
    }

    pub fn cooperate_probability(&self) -> f64 {
        self.cooperate_probability
    }
}

impl Policy for RandomStrategy {
    fn name(&self) -> String {
        format!("Random(p={:?})", self.cooperate_probability)
    }

    fn decide(&mut self, _history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        opponent_slot(slot)?;
        let draw = self.rng.next_f64();
        trace!("Random(p={}) drew {draw}", self.cooperate_probability);
        if draw < self.cooperate_probability {
            Ok(Action::Cooperate)
        } else {
            Ok(Action::Defect)
        }
    }

    fn reset(&mut self) {
        self.rng.reset();
    }
}

/// Generous Tit-for-Tat: like [`TitForTat`], but forgives a defection with
/// probability `forgiveness`.
///
/// The generator is only consulted after an opponent defection.
#[derive(Clone, Debug)]
pub struct Gtft {
    forgiveness: f64,
    rng: SeededRng,
}

impl Gtft {
    pub fn new(forgiveness: f64, seed: Option<u64>) -> Result<Self, PolicyError> {
        Ok(Self {
            forgiveness: check_probability(forgiveness)?,
            rng: SeededRng::from_optional_seed(seed),
        })
    }

    pub fn forgiveness(&self) -> f64 {
        self.forgiveness
    }
}

impl Policy for Gtft {
    fn name(&self) -> String {
        format!("GTFT(p={:?})", self.forgiveness)
    }

    fn decide(&mut self, history: &[RoundOutcome], slot: usize) -> Result<Action, PolicyError> {
        let opponent = opponent_slot(slot)?;
        match history.last().map(|last| last.action_of(opponent)) {
            None | Some(Action::Cooperate) => Ok(Action::Cooperate),
            Some(Action::Defect) => {
                let draw = self.rng.next_f64();
                trace!("GTFT(p={}) drew {draw} after defection", self.forgiveness);
                if draw < self.forgiveness {
                    Ok(Action::Cooperate)
                } else {
                    Ok(Action::Defect)
                }
            }
        }
    }

    fn reset(&mut self) {
        self.rng.reset();
    }
}
