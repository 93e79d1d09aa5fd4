use super::behavior::Behavior;
use super::catalog::Catalog;
use super::catalog::Code;
use super::mixer::Mixer;
use super::report::Report;
use super::window::Window;
use adv_density::Distribution;
use rayon::prelude::*;

/// Runs the full pipeline against one catalog.
///
/// Windows are independent of each other and are computed in parallel.
/// Within a window, entities are convolved left to right in the order
/// given, so identical inputs always round identically.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    catalog: Catalog,
}

impl Calculator {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
    /// Resolves entity type codes into behaviors.
    pub fn entities(&self, codes: &[Code]) -> anyhow::Result<Vec<Behavior>> {
        codes
            .iter()
            .map(|&code| self.catalog.behavior(code))
            .collect()
    }
    /// One entity's advance distribution over one window.
    pub fn distribution(&self, behavior: &Behavior, window: &Window) -> Distribution {
        Mixer::new(&self.catalog.cooldowns).mix(behavior, window.length)
    }
    /// Combined distribution of every entity over one window.
    pub fn combine(&self, behaviors: &[Behavior], window: &Window) -> Distribution {
        behaviors
            .iter()
            .map(|behavior| self.distribution(behavior, window))
            .product()
    }
    pub fn report(&self, behaviors: &[Behavior], window: &Window) -> Report {
        let report = Report::from((window.clone(), self.combine(behaviors, window)));
        log::info!("{}", report);
        report
    }
    /// One report per catalog window, in catalog order.
    pub fn reports(&self, behaviors: &[Behavior]) -> Vec<Report> {
        self.catalog
            .windows
            .par_iter()
            .map(|window| self.report(behaviors, window))
            .collect()
    }
}
