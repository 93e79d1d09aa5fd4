use super::distribution::Distribution;
use adv_core::*;

/// Inclusive range of advance counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub min: Advance,
    pub max: Advance,
}

impl Span {
    pub const fn new(min: Advance, max: Advance) -> Self {
        Self { min, max }
    }
    /// Number of advance counts covered.
    pub fn height(&self) -> usize {
        self.max - self.min + 1
    }
    pub fn contains(&self, advance: Advance) -> bool {
        (self.min..=self.max).contains(&advance)
    }
    /// Smallest span covering every advance the predicate accepts.
    fn covering<P>(distribution: &Distribution, accept: P) -> Option<Self>
    where
        P: Fn(Probability) -> bool,
    {
        let mut hits = distribution
            .iter()
            .filter(|(_, p)| accept(*p))
            .map(|(k, _)| k);
        let min = hits.next()?;
        let max = hits.last().unwrap_or(min);
        Some(Self::new(min, max))
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// The ranges of a combined distribution worth presenting.
///
/// - `full` spans every advance count with mass above [`EPS`].
///   A distribution with no such mass falls back to `0-0`.
/// - `significant` spans every advance count whose odds reach
///   [`DISPLAY_THRESHOLD`] percent, up to [`DISPLAY_TOLERANCE`].
///   When nothing is that likely it falls back to `full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub full: Span,
    pub significant: Span,
}

impl From<&Distribution> for Summary {
    fn from(distribution: &Distribution) -> Self {
        let full = Span::covering(distribution, |p| p > EPS).unwrap_or_default();
        let significant = Span::covering(distribution, |p| {
            p * 100. >= DISPLAY_THRESHOLD - DISPLAY_TOLERANCE
        })
        .unwrap_or(full);
        Self { full, significant }
    }
}
