use super::cycle::Cycle;
use adv_core::Steps;
use std::collections::BTreeSet;

/// Offsets within a cycle that count as a hit when the window covers them.
///
/// Every offset lies in `[0, L)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phases {
    cycle: Cycle,
    marks: BTreeSet<Steps>,
}

impl Phases {
    /// Arbitrary marked offsets, each of which must lie inside the cycle.
    pub fn new<I>(cycle: Cycle, offsets: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = Steps>,
    {
        let marks = offsets.into_iter().collect::<BTreeSet<_>>();
        match marks.iter().find(|&&o| o >= cycle.length()) {
            Some(o) => Err(anyhow::anyhow!("phase {} outside cycle {}", o, cycle)),
            None => Ok(Self { cycle, marks }),
        }
    }
    /// Only the start of the cycle is marked.
    pub fn single(cycle: Cycle) -> Self {
        Self {
            cycle,
            marks: BTreeSet::from([0]),
        }
    }
    /// The start of the cycle and the break `gap` steps before its end.
    pub fn broken(cycle: Cycle, gap: Steps) -> Self {
        debug_assert!(gap >= 1 && gap <= cycle.length());
        Self {
            cycle,
            marks: BTreeSet::from([0, cycle.length() - gap]),
        }
    }
    pub fn cycle(&self) -> Cycle {
        self.cycle
    }
    pub fn contains(&self, offset: Steps) -> bool {
        self.marks.contains(&(offset % self.cycle.length()))
    }
    /// Number of distinct marked offsets.
    pub fn len(&self) -> usize {
        self.marks.len()
    }
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = Steps> + '_ {
        self.marks.iter().copied()
    }
}
