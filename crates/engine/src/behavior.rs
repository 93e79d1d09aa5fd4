use super::cooldown::Cooldown;
use super::phases::Phases;
use adv_core::*;
use serde::Deserialize;
use serde::Serialize;

/// How an entity's timed behavior repeats, and what each hit costs.
///
/// - `NoBreak` marks only the start of every cooldown; each hit consumes
///   two advances.
/// - `AlwaysBreak` follows every cooldown with a one-step break, marking
///   both the start and the break.
/// - `ProbabilisticBreak(p)` takes the one-step break with probability `p`
///   and an eight-step break otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "p1", rename_all = "snake_case")]
pub enum Behavior {
    NoBreak,
    AlwaysBreak,
    ProbabilisticBreak(Probability),
}

/// One weighted sub-behavior: a cycle shape and the prior mass on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub phases: Phases,
    pub weight: Probability,
}

impl Behavior {
    /// Advances consumed per hit.
    pub const fn factor(&self) -> Advance {
        match self {
            Behavior::NoBreak => NO_BREAK_FACTOR,
            Behavior::AlwaysBreak => BREAK_FACTOR,
            Behavior::ProbabilisticBreak(_) => BREAK_FACTOR,
        }
    }
    /// Sub-behaviors reachable from one cooldown. Weights sum to the cooldown's.
    /// A break length that can never be taken yields no branch; every other
    /// branch is kept even at zero weight, so it still widens the tally.
    pub fn branches(&self, cooldown: &Cooldown) -> Vec<Branch> {
        let Cooldown { cycle, weight } = *cooldown;
        match *self {
            Behavior::NoBreak => vec![Branch {
                phases: Phases::single(cycle),
                weight,
            }],
            Behavior::AlwaysBreak => vec![Branch {
                phases: Phases::broken(cycle.after(SHORT_BREAK), SHORT_BREAK),
                weight,
            }],
            Behavior::ProbabilisticBreak(p) => [(SHORT_BREAK, p), (LONG_BREAK, 1. - p)]
                .into_iter()
                .filter(|&(_, q)| q > 0.)
                .map(|(gap, q)| Branch {
                    phases: Phases::broken(cycle.after(gap), gap),
                    weight: weight * q,
                })
                .collect(),
        }
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        match self {
            Behavior::ProbabilisticBreak(p) if !(0.0..=1.0).contains(p) => {
                Err(anyhow::anyhow!("break probability {} outside [0, 1]", p))
            }
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Behavior::NoBreak => write!(f, "no break"),
            Behavior::AlwaysBreak => write!(f, "always break"),
            Behavior::ProbabilisticBreak(p) => write!(f, "short break {:.2}%", p * 100.),
        }
    }
}
