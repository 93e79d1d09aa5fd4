use super::behavior::Behavior;
use super::cooldown::Cooldowns;
use super::counter::Counter;
use super::counter::Tally;
use adv_core::*;
use adv_density::Distribution;

/// Builds one entity's advance distribution over one window.
///
/// Every cooldown in the catalog splits into the behavior's branches;
/// each branch contributes its hit-count tally scaled by its prior
/// weight. The mixed tally is then spread over advance counts by the
/// behavior's per-hit factor.
pub struct Mixer<'a> {
    cooldowns: &'a Cooldowns,
}

impl<'a> Mixer<'a> {
    pub fn new(cooldowns: &'a Cooldowns) -> Self {
        Self { cooldowns }
    }
    /// Weighted mixture of hit counts across all cooldowns and branches.
    pub fn tally(&self, behavior: &Behavior, window: Steps) -> Tally {
        self.cooldowns
            .iter()
            .flat_map(|cooldown| behavior.branches(cooldown))
            .fold(Tally::default(), |tally, branch| {
                tally.absorb(&Counter::count(window, &branch.phases), branch.weight)
            })
    }
    pub fn mix(&self, behavior: &Behavior, window: Steps) -> Distribution {
        let tally = self.tally(behavior, window);
        let distribution = Distribution::scatter(tally, behavior.factor());
        debug_assert!(distribution.is_normalized());
        log::debug!(
            "{} over {} steps spans {} advances",
            behavior,
            window,
            distribution.len()
        );
        distribution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adv_density::Density;

    fn mix(behavior: Behavior, window: Steps) -> Distribution {
        Mixer::new(&Cooldowns::default()).mix(&behavior, window)
    }

    #[test]
    fn no_break_consumes_advances_in_pairs() {
        let d = mix(Behavior::NoBreak, 40);
        assert!(d.is_normalized());
        assert!(d.support().all(|k| k % 2 == 0));
        // at most three starts of a 16-step cycle fit in 40 steps
        assert_eq!(d.len(), 7);
        assert!(d.get(0) > 0.);
    }

    #[test]
    fn no_break_hand_computed() {
        // W=2: each cooldown c hits once with probability 2/c.
        let d = mix(Behavior::NoBreak, 2);
        let hit = 0.25 * (2. / 16. + 2. / 32. + 2. / 48. + 2. / 64.);
        assert_eq!(d.len(), 3);
        assert!(approx(d.get(0), 1. - hit));
        assert_eq!(d.get(1), 0.);
        assert!(approx(d.get(2), hit));
    }

    #[test]
    fn zero_weight_cooldown_still_sets_the_length() {
        let ref cooldowns = Cooldowns::try_from(&[(16, 0.0), (32, 1.0)][..]).expect("valid");
        let d = Mixer::new(cooldowns).mix(&Behavior::NoBreak, 40);
        // the 16-step cycle reaches three hits, six advances, at no mass
        assert_eq!(d.len(), 7);
        assert_eq!(d.masses(), &[0.0, 0.0, 0.75, 0.0, 0.25, 0.0, 0.0]);
        assert!(d.is_normalized());
    }

    #[test]
    fn empty_window_is_degenerate() {
        for behavior in [
            Behavior::NoBreak,
            Behavior::AlwaysBreak,
            Behavior::ProbabilisticBreak(0.5),
        ] {
            assert_eq!(mix(behavior, 0), Distribution::identity());
        }
    }

    #[test]
    fn certain_break_matches_always_break() {
        for window in [1, 2, 7, 40, 75] {
            let always = mix(Behavior::AlwaysBreak, window);
            let certain = mix(Behavior::ProbabilisticBreak(1.0), window);
            assert_eq!(always, certain);
        }
    }

    #[test]
    fn probabilistic_break_is_normalized() {
        for p in [0.0, 0.1548, 0.3333, 0.5, 0.75, 1.0] {
            for window in [1, 10, 54, 75] {
                assert!(mix(Behavior::ProbabilisticBreak(p), window).is_normalized());
            }
        }
    }

    #[test]
    fn single_step_window_hits_at_most_once() {
        // A one-step window covers exactly one cycle position.
        let d = mix(Behavior::AlwaysBreak, 1);
        let hit = 0.25 * (2. / 17. + 2. / 33. + 2. / 49. + 2. / 65.);
        assert_eq!(d.len(), 2);
        assert!(approx(d.get(1), hit));
    }
}
