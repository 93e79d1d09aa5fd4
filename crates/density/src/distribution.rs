use super::density::Density;
use adv_core::*;

/// Probability mass over advance counts, stored densely by outcome.
///
/// Index `k` holds the probability of consuming exactly `k` advances.
/// Dense storage keeps lookups O(1) and makes convolution a pair of
/// nested loops; the arrays involved stay small because window lengths
/// are short relative to cycle lengths.
///
/// Values are immutable once built: every operation returns a new
/// distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution(Vec<Probability>);

impl Distribution {
    /// All mass on zero advances. The identity element of convolution.
    pub fn identity() -> Self {
        Self(vec![1.0])
    }
    /// Places each `(hits, mass)` pair at index `hits * factor`, zero elsewhere.
    /// The array extends to the largest hit count seen, so entries with zero
    /// mass still widen it.
    pub fn scatter<I>(pairs: I, factor: Advance) -> Self
    where
        I: IntoIterator<Item = (usize, Probability)>,
    {
        let pairs = pairs.into_iter().collect::<Vec<_>>();
        let max = pairs.iter().map(|(k, _)| *k).max().unwrap_or(0);
        let mut masses = vec![0.0; max * factor + 1];
        for (hits, p) in pairs {
            masses[hits * factor] += p;
        }
        Self(masses)
    }
    /// Number of outcomes covered, including trailing zeros.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Mass at the given advance count, 0 beyond the end.
    pub fn get(&self, advance: Advance) -> Probability {
        self.0.get(advance).copied().unwrap_or(0.)
    }
    pub fn masses(&self) -> &[Probability] {
        &self.0
    }
    /// (advance, mass) pairs in outcome order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (Advance, Probability)> + '_ {
        self.0.iter().copied().enumerate()
    }
    /// Whether every entry is non-negative and the total is 1.
    pub fn is_normalized(&self) -> bool {
        self.0.iter().all(|p| *p >= 0.) && approx(self.0.iter().sum(), 1.0)
    }
}

impl From<Vec<Probability>> for Distribution {
    fn from(masses: Vec<Probability>) -> Self {
        Self(masses)
    }
}

impl From<Distribution> for Vec<Probability> {
    fn from(distribution: Distribution) -> Self {
        distribution.0
    }
}

impl Density for Distribution {
    type Support = Advance;
    fn density(&self, x: &Self::Support) -> Probability {
        self.get(*x)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.iter().filter(|(_, p)| *p > 0.).map(|(k, _)| k)
    }
}

impl Arbitrary for Distribution {
    fn random() -> Self {
        use rand::Rng;
        const MAX: usize = 8;
        let ref mut rng = rand::rng();
        let n = rng.random_range(1..=MAX);
        let raw = (0..n)
            .map(|_| match rng.random_bool(0.25) {
                true => 0.,
                false => rng.random_range(0.01..1.0),
            })
            .collect::<Vec<Probability>>();
        let total = raw.iter().sum::<Probability>();
        match total > 0. {
            true => Self(raw.into_iter().map(|p| p / total).collect()),
            false => Self::identity(),
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (advance, p) in self.iter() {
            writeln!(f, "{:>3} {:>8.4}%", advance, p * 100.)?;
        }
        Ok(())
    }
}
