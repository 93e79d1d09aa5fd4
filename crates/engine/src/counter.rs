use super::phases::Phases;
use adv_core::*;
use adv_density::Density;
use std::collections::BTreeMap;

/// Probability mass over hit counts, before conversion into advances.
///
/// Sparse because only a handful of distinct hit counts are reachable
/// for any one cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally(BTreeMap<usize, Probability>);

impl Tally {
    /// Adds `weight` times every mass in `other` into this tally.
    pub fn absorb(mut self, other: &Self, weight: Probability) -> Self {
        for (&hits, &p) in other.0.iter() {
            *self.0.entry(hits).or_insert(0.) += weight * p;
        }
        self
    }
    /// Largest hit count carrying an entry.
    pub fn max(&self) -> usize {
        self.0.keys().next_back().copied().unwrap_or(0)
    }
    pub fn iter(&self) -> impl Iterator<Item = (usize, Probability)> + '_ {
        self.0.iter().map(|(&k, &p)| (k, p))
    }
}

impl IntoIterator for Tally {
    type Item = (usize, Probability);
    type IntoIter = std::collections::btree_map::IntoIter<usize, Probability>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Density for Tally {
    type Support = usize;
    fn density(&self, x: &Self::Support) -> Probability {
        self.0.density(x)
    }
    fn support(&self) -> impl Iterator<Item = Self::Support> {
        self.0.support()
    }
}

/// Counts how many marked phases a window overlaps.
///
/// The cycle starts at an offset drawn uniformly from `[0, L)`. For start
/// offset `s` the window covers cycle positions `(s + t) mod L` for every
/// `t` in `[0, W)`, and each covered marked position is one hit. The
/// resulting mass for a hit count is the share of the `L` offsets that
/// produce it, so the tally always sums to 1.
pub struct Counter;

impl Counter {
    pub fn count(window: Steps, phases: &Phases) -> Tally {
        let length = phases.cycle().length();
        let laps = (window / length) * phases.len();
        let rest = window % length;
        let mut offsets = BTreeMap::<usize, usize>::new();
        for start in 0..length {
            let hits = laps + (start..start + rest).filter(|&t| phases.contains(t)).count();
            *offsets.entry(hits).or_insert(0) += 1;
        }
        let tally = Tally(
            offsets
                .into_iter()
                .map(|(hits, n)| (hits, n as Probability / length as Probability))
                .collect(),
        );
        debug_assert!(approx(tally.mass(), 1.0));
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cycle;

    fn phases(length: Steps, marks: &[Steps]) -> Phases {
        let cycle = Cycle::try_from(length).expect("positive");
        Phases::new(cycle, marks.iter().copied()).expect("in range")
    }

    /// Direct enumeration of every offset and every step.
    fn brute(window: Steps, phases: &Phases) -> Tally {
        let length = phases.cycle().length();
        (0..length)
            .map(|s| (0..window).filter(|t| phases.contains(s + t)).count())
            .fold(Tally::default(), |tally, hits| {
                let unit = Tally(BTreeMap::from([(hits, 1. / length as Probability)]));
                tally.absorb(&unit, 1.)
            })
    }

    #[test]
    fn single_step_window_hits_once_in_length() {
        let tally = Counter::count(1, &phases(5, &[0]));
        assert_eq!(tally.density(&0), 4. / 5.);
        assert_eq!(tally.density(&1), 1. / 5.);
    }

    #[test]
    fn full_lap_always_hits_once() {
        let tally = Counter::count(5, &phases(5, &[0]));
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![(1, 1.0)]);
    }

    #[test]
    fn empty_window_never_hits() {
        let tally = Counter::count(0, &phases(17, &[0, 16]));
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![(0, 1.0)]);
    }

    #[test]
    fn unmarked_cycle_never_hits() {
        let tally = Counter::count(40, &phases(16, &[]));
        assert_eq!(tally.iter().collect::<Vec<_>>(), vec![(0, 1.0)]);
    }

    #[test]
    fn two_phases_in_a_short_window() {
        // W=2 over L=17 with {0, 16}: offsets 15 and 0 hit once, 16 hits twice.
        let tally = Counter::count(2, &phases(17, &[0, 16]));
        assert!(approx(tally.density(&0), 14. / 17.));
        assert!(approx(tally.density(&1), 2. / 17.));
        assert!(approx(tally.density(&2), 1. / 17.));
    }

    #[test]
    fn matches_brute_force_enumeration() {
        for length in 1..=24 {
            for window in 0..=60 {
                for marks in [vec![0], vec![0, length - 1], vec![0, length / 2]] {
                    let ref p = phases(length, &marks);
                    let fast = Counter::count(window, p);
                    let slow = brute(window, p);
                    assert_eq!(fast.max(), slow.max());
                    for (hits, mass) in slow.iter() {
                        assert!(approx(fast.density(&hits), mass));
                    }
                    assert!(approx(fast.mass(), 1.0));
                }
            }
        }
    }
}
