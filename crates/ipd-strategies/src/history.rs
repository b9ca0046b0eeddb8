//! Round outcomes and the per-game history a runner accumulates

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::PolicyError;

/// Validate a player slot and return the opponent's slot
pub fn opponent_slot(slot: usize) -> Result<usize, PolicyError> {
    match slot {
        0 | 1 => Ok(1 - slot),
        other => Err(PolicyError::InvalidSlot(other)),
    }
}

/// Actions played by slot 0 and slot 1 in one completed round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundOutcome {
    actions: [Action; 2],
}

impl RoundOutcome {
    pub fn new(first: Action, second: Action) -> Self {
        Self { actions: [first, second] }
    }

    /// Build from raw ordinals, e.g. `(0, 1)` for Cooperate/Defect
    pub fn from_ordinals(first: u8, second: u8) -> Result<Self, PolicyError> {
        Ok(Self::new(Action::try_from(first)?, Action::try_from(second)?))
    }

    /// Action played by `slot`
    ///
    /// Callers validate the slot with [`opponent_slot`] first; any slot other
    /// than 0 reads the second entry.
    pub fn action_of(&self, slot: usize) -> Action {
        self.actions[slot.min(1)]
    }

    pub fn actions(&self) -> (Action, Action) {
        (self.actions[0], self.actions[1])
    }
}

impl From<(Action, Action)> for RoundOutcome {
    fn from((first, second): (Action, Action)) -> Self {
        Self::new(first, second)
    }
}

/// Append-only record of one game, owned by the game-runner
///
/// Policies only ever see it as `&[RoundOutcome]`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    rounds: Vec<RoundOutcome>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(rounds: usize) -> Self {
        Self { rounds: Vec::with_capacity(rounds) }
    }

    /// Append the outcome of the round just played
    pub fn record(&mut self, outcome: impl Into<RoundOutcome>) {
        self.rounds.push(outcome.into());
    }

    pub fn rounds(&self) -> &[RoundOutcome] {
        &self.rounds
    }

    pub fn last(&self) -> Option<&RoundOutcome> {
        self.rounds.last()
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RoundOutcome> {
        self.rounds.iter()
    }
}

impl AsRef<[RoundOutcome]> for History {
    fn as_ref(&self) -> &[RoundOutcome] {
        &self.rounds
    }
}

impl FromIterator<RoundOutcome> for History {
    fn from_iter<I: IntoIterator<Item = RoundOutcome>>(iter: I) -> Self {
        Self { rounds: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a RoundOutcome;
    type IntoIter = std::slice::Iter<'a, RoundOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_slot() {
        assert_eq!(opponent_slot(0).unwrap(), 1);
        assert_eq!(opponent_slot(1).unwrap(), 0);
        assert!(matches!(opponent_slot(2), Err(PolicyError::InvalidSlot(2))));
    }

    #[test]
    fn test_outcome_from_ordinals() {
        let outcome = RoundOutcome::from_ordinals(0, 1).unwrap();
        assert_eq!(outcome.action_of(0), Action::Cooperate);
        assert_eq!(outcome.action_of(1), Action::Defect);
        assert_eq!(outcome.actions(), (Action::Cooperate, Action::Defect));

        assert!(matches!(
            RoundOutcome::from_ordinals(0, 7),
            Err(PolicyError::InvalidAction(7))
        ));
    }

    #[test]
    fn test_history_appends_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record((Action::Cooperate, Action::Cooperate));
        history.record((Action::Cooperate, Action::Defect));

        assert_eq!(history.len(), 2);
        assert_eq!(history.rounds()[0], RoundOutcome::new(Action::Cooperate, Action::Cooperate));
        assert_eq!(history.last().map(|r| r.action_of(1)), Some(Action::Defect));
        assert_eq!(history.iter().count(), 2);
    }

    #[test]
    fn test_history_collects() {
        let history: History = [(0, 0), (1, 0)]
            .into_iter()
            .map(|(a, b)| RoundOutcome::from_ordinals(a, b).unwrap())
            .collect();
        assert_eq!(history.as_ref().len(), 2);
        assert_eq!((&history).into_iter().filter(|r| r.action_of(0).is_defect()).count(), 1);
    }
}
