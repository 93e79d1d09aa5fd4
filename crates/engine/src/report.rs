use super::window::Window;
use adv_density::Distribution;
use adv_density::Summary;

/// Everything presented for one window: the combined distribution over
/// all entities and the ranges worth showing.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub window: Window,
    pub distribution: Distribution,
    pub summary: Summary,
}

impl From<(Window, Distribution)> for Report {
    fn from((window, distribution): (Window, Distribution)) -> Self {
        let summary = Summary::from(&distribution);
        Self {
            window,
            distribution,
            summary,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: possible {}, likely {}",
            self.window, self.summary.full, self.summary.significant
        )
    }
}
