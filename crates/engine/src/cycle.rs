use adv_core::Steps;
use serde::Deserialize;
use serde::Serialize;

/// Length of one repetition of a timed behavior. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Steps", into = "Steps")]
pub struct Cycle(Steps);

impl Cycle {
    /// This cycle followed by a break of `gap` steps.
    pub const fn after(self, gap: Steps) -> Self {
        Self(self.0 + gap)
    }
    pub const fn length(&self) -> Steps {
        self.0
    }
}

impl TryFrom<Steps> for Cycle {
    type Error = anyhow::Error;
    fn try_from(length: Steps) -> Result<Self, Self::Error> {
        match length {
            0 => Err(anyhow::anyhow!("cycle length must be positive")),
            n => Ok(Self(n)),
        }
    }
}

impl From<Cycle> for Steps {
    fn from(cycle: Cycle) -> Self {
        cycle.0
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L{}", self.0)
    }
}
