//! Actions available in the Prisoner's Dilemma

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// A move in the Prisoner's Dilemma
///
/// The ordinal is fixed: 0 = Cooperate, 1 = Defect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Action {
    Cooperate = 0,
    Defect = 1,
}

impl Action {
    /// Both actions, in ordinal order
    pub const ALL: [Action; 2] = [Action::Cooperate, Action::Defect];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// The other action
    pub fn opposite(self) -> Self {
        match self {
            Action::Cooperate => Action::Defect,
            Action::Defect => Action::Cooperate,
        }
    }

    pub fn is_defect(self) -> bool {
        self == Action::Defect
    }
}

impl TryFrom<u8> for Action {
    type Error = PolicyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Action::Cooperate),
            1 => Ok(Action::Defect),
            other => Err(PolicyError::InvalidAction(other)),
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action.ordinal()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Cooperate => write!(f, "Cooperate"),
            Action::Defect => write!(f, "Defect"),
        }
    }
}
