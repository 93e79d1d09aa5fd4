use super::support::Support;
use adv_core::Probability;
use std::collections::BTreeMap;

/// A discrete probability distribution over a support set.
///
/// Provides access to probability mass at each point and iteration over
/// the support, so sparse tallies and dense arrays can be inspected the
/// same way.
pub trait Density {
    /// The type of elements in the distribution's support.
    type Support: Support;
    /// Returns the probability mass at point `x`, or 0 if not in support.
    fn density(&self, x: &Self::Support) -> Probability;
    /// Iterates over all points with positive probability mass.
    fn support(&self) -> impl Iterator<Item = Self::Support>;
    /// Total mass over the support. Should be 1 for any well-formed distribution.
    fn mass(&self) -> Probability {
        self.support().map(|ref x| self.density(x)).sum()
    }
}

impl<T> Density for BTreeMap<T, Probability>
where
    T: Eq + Ord + Support,
{
    type Support = T;
    fn density(&self, x: &Self::Support) -> Probability {
        self.get(x).cloned().unwrap_or(0.)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.iter()
            .filter(|(_, p)| **p > 0.)
            .map(|(x, _)| x)
            .cloned()
    }
}
