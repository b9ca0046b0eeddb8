//! Strategy configuration and policy construction
//!
//! A [`Strategy`] is the serializable description of a policy; a runner turns
//! it into a fresh [`Policy`] instance for every (game, slot) pairing with
//! [`build_policy`].

use serde::{Deserialize, Serialize};

use crate::error::{check_probability, PolicyError};
use crate::strategy::{
    AlwaysCooperate, AlwaysDefect, Grudger, Gtft, Pavlov, Policy, RandomStrategy, TitForTat,
    DEFAULT_COOPERATE_PROBABILITY, DEFAULT_FORGIVENESS,
};

/// Base strategy type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyBase {
    /// Always cooperate, never defect.
    AlwaysCooperate,
    /// Always defect, never cooperate.
    AlwaysDefect,
    /// Copy opponent's last move. Start with cooperate.
    TitForTat,
    /// Win-stay, lose-shift. Repeat move if both played the same.
    Pavlov,
    /// Cooperate until opponent defects once, then always defect.
    Grudger,
    /// Random choice each round.
    Random,
    /// Tit-for-Tat that sometimes forgives a defection.
    Gtft,
}

impl StrategyBase {
    pub const ALL: [StrategyBase; 7] = [
        StrategyBase::AlwaysCooperate,
        StrategyBase::AlwaysDefect,
        StrategyBase::TitForTat,
        StrategyBase::Pavlov,
        StrategyBase::Grudger,
        StrategyBase::Random,
        StrategyBase::Gtft,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            StrategyBase::AlwaysCooperate => "Always Cooperate",
            StrategyBase::AlwaysDefect => "Always Defect",
            StrategyBase::TitForTat => "Tit-for-Tat",
            StrategyBase::Pavlov => "Pavlov",
            StrategyBase::Grudger => "Grudger",
            StrategyBase::Random => "Random",
            StrategyBase::Gtft => "GTFT",
        }
    }

    /// Whether policies of this type own a random source
    pub fn is_stochastic(self) -> bool {
        matches!(self, StrategyBase::Random | StrategyBase::Gtft)
    }
}

/// Strategy parameters; only the stochastic strategies read them
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Chance to cooperate each round for Random (0.0-1.0)
    pub cooperate_probability: f64,
    /// Chance to cooperate after an opponent defection for GTFT (0.0-1.0)
    pub forgiveness: f64,
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            cooperate_probability: DEFAULT_COOPERATE_PROBABILITY,
            forgiveness: DEFAULT_FORGIVENESS,
            seed: None,
        }
    }
}

/// Complete strategy with base type and parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    pub base: StrategyBase,
    #[serde(default)]
    pub params: StrategyParams,
}

impl Strategy {
    /// Create a new strategy with default parameters
    pub fn new(base: StrategyBase) -> Self {
        Self {
            base,
            params: StrategyParams::default(),
        }
    }

    /// Create with custom parameters
    pub fn with_params(base: StrategyBase, params: StrategyParams) -> Self {
        Self { base, params }
    }

    /// Check the parameters the base actually uses
    pub fn validate(&self) -> Result<(), PolicyError> {
        match self.base {
            StrategyBase::Random => check_probability(self.params.cooperate_probability).map(drop),
            StrategyBase::Gtft => check_probability(self.params.forgiveness).map(drop),
            _ => Ok(()),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self::new(StrategyBase::TitForTat)
    }
}

/// Build a fresh policy instance for one player in one game
pub fn build_policy(strategy: &Strategy) -> Result<Box<dyn Policy + Send>, PolicyError> {
    let params = &strategy.params;
    let policy: Box<dyn Policy + Send> = match strategy.base {
        StrategyBase::AlwaysCooperate => Box::new(AlwaysCooperate),
        StrategyBase::AlwaysDefect => Box::new(AlwaysDefect),
        StrategyBase::TitForTat => Box::new(TitForTat),
        StrategyBase::Pavlov => Box::new(Pavlov),
        StrategyBase::Grudger => Box::new(Grudger::new()),
        StrategyBase::Random => {
            Box::new(RandomStrategy::new(params.cooperate_probability, params.seed)?)
        }
        StrategyBase::Gtft => Box::new(Gtft::new(params.forgiveness, params.seed)?),
    };
    log::debug!("Built policy {}", policy.name());
    Ok(policy)
}

/// Parse a strategy from JSON
///
/// Accepts two formats:
/// - Full:  `{"base": "Gtft", "params": {"forgiveness": 0.2, "seed": 7}}`
/// - Short: `"Pavlov"` (default parameters)
pub fn parse_strategy(json: &str) -> Result<Strategy, PolicyError> {
    let strategy = match serde_json::from_str::<Strategy>(json) {
        Ok(strategy) => strategy,
        Err(full_err) => match serde_json::from_str::<StrategyBase>(json) {
            Ok(base) => Strategy::new(base),
            Err(_) => return Err(full_err.into()),
        },
    };
    strategy.validate()?;
    Ok(strategy)
}

/// Get a human-readable description of a strategy
pub fn describe_strategy(strategy: &Strategy) -> String {
    let base_desc = match strategy.base {
        StrategyBase::AlwaysCooperate => "Never defects. Always cooperates.",
        StrategyBase::AlwaysDefect => "Never cooperates. Always defects.",
        StrategyBase::TitForTat => "Copies opponent's last move. Starts by cooperating.",
        StrategyBase::Pavlov => "Repeats its move after a matching round, switches after a mismatch.",
        StrategyBase::Grudger => "Cooperates until betrayed, then always defects.",
        StrategyBase::Random => "Randomly cooperates or defects each round.",
        StrategyBase::Gtft => "Copies opponent's last move, but sometimes forgives a defection.",
    };

    let mut desc = base_desc.to_string();

    match strategy.base {
        StrategyBase::Random => desc.push_str(&format!(
            " Cooperates with probability {}.",
            strategy.params.cooperate_probability
        )),
        StrategyBase::Gtft => desc.push_str(&format!(
            " Forgives with probability {}.",
            strategy.params.forgiveness
        )),
        _ => {}
    }

    if let (true, Some(seed)) = (strategy.base.is_stochastic(), strategy.params.seed) {
        desc.push_str(&format!(" Seed {}.", seed));
    }

    desc
}
