use super::cycle::Cycle;
use adv_core::*;
use serde::Deserialize;
use serde::Serialize;

/// One candidate cooldown and its prior weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    pub cycle: Cycle,
    pub weight: Probability,
}

/// The set of cooldowns an entity may draw from. Weights sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Cooldown>", into = "Vec<Cooldown>")]
pub struct Cooldowns(Vec<Cooldown>);

impl Cooldowns {
    pub fn iter(&self) -> impl Iterator<Item = &Cooldown> {
        self.0.iter()
    }
}

impl Default for Cooldowns {
    fn default() -> Self {
        Self(
            COOLDOWNS
                .iter()
                .map(|&(length, weight)| Cooldown {
                    cycle: Cycle::try_from(length).expect("default cooldowns are positive"),
                    weight,
                })
                .collect(),
        )
    }
}

impl TryFrom<Vec<Cooldown>> for Cooldowns {
    type Error = anyhow::Error;
    fn try_from(cooldowns: Vec<Cooldown>) -> Result<Self, Self::Error> {
        if cooldowns.is_empty() {
            return Err(anyhow::anyhow!("cooldown catalog is empty"));
        }
        if let Some(c) = cooldowns.iter().find(|c| !(0.0..=1.0).contains(&c.weight)) {
            return Err(anyhow::anyhow!(
                "cooldown {} has weight {} outside [0, 1]",
                c.cycle,
                c.weight
            ));
        }
        let total = cooldowns.iter().map(|c| c.weight).sum::<Probability>();
        if !approx(total, 1.0) {
            return Err(anyhow::anyhow!("cooldown weights sum to {}, not 1", total));
        }
        Ok(Self(cooldowns))
    }
}

impl TryFrom<&[(Steps, Probability)]> for Cooldowns {
    type Error = anyhow::Error;
    fn try_from(pairs: &[(Steps, Probability)]) -> Result<Self, Self::Error> {
        pairs
            .iter()
            .map(|&(length, weight)| {
                Cycle::try_from(length).map(|cycle| Cooldown { cycle, weight })
            })
            .collect::<Result<Vec<_>, _>>()
            .and_then(Self::try_from)
    }
}

impl From<Cooldowns> for Vec<Cooldown> {
    fn from(cooldowns: Cooldowns) -> Self {
        cooldowns.0
    }
}
