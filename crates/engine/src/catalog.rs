use super::behavior::Behavior;
use super::cooldown::Cooldowns;
use super::window::Window;
use adv_core::Probability;
use adv_core::Steps;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Entity type code as entered by the user.
pub type Code = usize;

/// Everything the engine needs to know about the world it models.
///
/// Entity behaviors are keyed by their type code; windows keep their
/// catalog order, which is also the order reports come back in.
/// The built-in catalog is [`Catalog::default`]; alternatives load from JSON:
///
/// ```json
/// {
///   "entities": { "1": { "kind": "no_break" },
///                 "3": { "kind": "probabilistic_break", "p1": 0.3333 } },
///   "windows":  [ { "label": "Honey", "length": 54 } ]
/// }
/// ```
///
/// `cooldowns` may be omitted and defaults to the standard four.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub cooldowns: Cooldowns,
    pub entities: BTreeMap<Code, Behavior>,
    pub windows: Vec<Window>,
}

impl Catalog {
    /// Reads and validates a JSON catalog.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        let catalog = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parsing catalog {}", path.display()))?;
        catalog.validate()?;
        log::info!(
            "loaded catalog {} ({} entity types, {} windows)",
            path.display(),
            catalog.entities.len(),
            catalog.windows.len()
        );
        Ok(catalog)
    }
    pub fn validate(&self) -> anyhow::Result<()> {
        for (code, behavior) in self.entities.iter() {
            behavior
                .validate()
                .with_context(|| format!("entity type {}", code))?;
        }
        if self.entities.is_empty() {
            return Err(anyhow::anyhow!("catalog defines no entity types"));
        }
        if self.windows.is_empty() {
            return Err(anyhow::anyhow!("catalog defines no windows"));
        }
        Ok(())
    }
    pub fn behavior(&self, code: Code) -> anyhow::Result<Behavior> {
        self.entities.get(&code).copied().ok_or_else(|| {
            anyhow::anyhow!(
                "unknown entity type {} (expected one of {})",
                code,
                self.codes()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
    pub fn codes(&self) -> impl Iterator<Item = Code> + '_ {
        self.entities.keys().copied()
    }
    /// Keeps only the named windows, in catalog order.
    pub fn restrict(mut self, labels: &[String]) -> anyhow::Result<Self> {
        if let Some(missing) = labels
            .iter()
            .find(|l| !self.windows.iter().any(|w| &w.label == *l))
        {
            return Err(anyhow::anyhow!("unknown window {:?}", missing));
        }
        self.windows.retain(|w| labels.contains(&w.label));
        Ok(self)
    }
}

/// Short-break probabilities of the built-in probabilistic entity types.
const BREAKS: [(Code, Probability); 19] = [
    (3, 0.3333),
    (4, 0.7500),
    (5, 0.6667),
    (6, 0.6000),
    (7, 0.5714),
    (8, 0.5000),
    (9, 0.4167),
    (10, 0.3333),
    (11, 0.2917),
    (12, 0.2667),
    (13, 0.2381),
    (14, 0.2500),
    (15, 0.1548),
    (16, 0.3333),
    (17, 0.5000),
    (18, 0.3750),
    (19, 0.2222),
    (20, 0.4375),
    (21, 0.4333),
];

/// Windows reported alongside the full-precision tables.
const FULL_WINDOWS: [(&str, Steps); 11] = [
    ("Loading into the game", 40),
    ("Sweet Scent", 75),
    ("Honey", 54),
    ("b-out menu static/egg", 2),
    ("x-out party static/egg", 1),
    ("b-out menu phenomena (step)", 11),
    ("x-out party phenomena (step)", 10),
    ("b-out menu step encounter (turn)", 7),
    ("x-out party step encounter (turn)", 6),
    ("b-out menu Lati@s (step)", 10),
    ("x-out party Lati@s (step)", 9),
];

/// Windows reported alongside the rounded tables.
const ROUNDED_WINDOWS: [(&str, Steps); 10] = [
    ("Loading into the game", 40),
    ("Sweet Scent", 75),
    ("Honey", 54),
    ("b-out menu static/egg", 2),
    ("x-out party static/egg", 1),
    ("b-out menu Lati@s (step)", 8),
    ("7-frame step (Lati@s x-out + StepEnc b-out)", 7),
    ("b-out menu phenomena (step)", 11),
    ("x-out party phenomena (step)", 10),
    ("x-out party step encounter (turn)", 6),
];

impl Catalog {
    /// Built-in entity types and cooldowns over the rounded-table windows.
    pub fn rounded() -> Self {
        Self::preset(&ROUNDED_WINDOWS)
    }
    fn preset(windows: &[(&str, Steps)]) -> Self {
        let entities = [(1, Behavior::NoBreak), (2, Behavior::AlwaysBreak)]
            .into_iter()
            .chain(
                BREAKS
                    .into_iter()
                    .map(|(code, p)| (code, Behavior::ProbabilisticBreak(p))),
            )
            .collect();
        let windows = windows
            .iter()
            .map(|&(label, length)| Window::new(label, length))
            .collect();
        Self {
            cooldowns: Cooldowns::default(),
            entities,
            windows,
        }
    }
}

/// Built-in entity types and cooldowns over the full-table windows.
impl Default for Catalog {
    fn default() -> Self {
        Self::preset(&FULL_WINDOWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = Catalog::default();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.codes().collect::<Vec<_>>(), (1..=21).collect::<Vec<_>>());
        assert_eq!(catalog.windows.len(), 11);
        assert_eq!(catalog.windows[2], Window::new("Honey", 54));
    }

    #[test]
    fn rounded_preset_has_its_own_windows() {
        let catalog = Catalog::rounded();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.entities, Catalog::default().entities);
        let windows = catalog
            .windows
            .iter()
            .map(|w| (w.label.as_str(), w.length))
            .collect::<Vec<_>>();
        assert_eq!(
            windows,
            vec![
                ("Loading into the game", 40),
                ("Sweet Scent", 75),
                ("Honey", 54),
                ("b-out menu static/egg", 2),
                ("x-out party static/egg", 1),
                ("b-out menu Lati@s (step)", 8),
                ("7-frame step (Lati@s x-out + StepEnc b-out)", 7),
                ("b-out menu phenomena (step)", 11),
                ("x-out party phenomena (step)", 10),
                ("x-out party step encounter (turn)", 6),
            ]
        );
    }

    #[test]
    fn probabilities_are_kept_verbatim() {
        let catalog = Catalog::default();
        assert_eq!(catalog.behavior(11).ok(), Some(Behavior::ProbabilisticBreak(0.2917)));
        assert_eq!(catalog.behavior(1).ok(), Some(Behavior::NoBreak));
        assert!(catalog.behavior(22).is_err());
        assert!(catalog.behavior(0).is_err());
    }

    #[test]
    fn json_catalog_defaults_cooldowns() {
        let json = r#"{
            "entities": { "1": { "kind": "no_break" }, "7": { "kind": "probabilistic_break", "p1": 0.5714 } },
            "windows": [ { "label": "Honey", "length": 54 } ]
        }"#;
        let catalog = serde_json::from_str::<Catalog>(json).expect("valid json");
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.cooldowns, Cooldowns::default());
        assert_eq!(catalog.behavior(7).ok(), Some(Behavior::ProbabilisticBreak(0.5714)));
    }

    #[test]
    fn json_roundtrip_preserves_catalog() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).expect("serialize");
        let parsed = serde_json::from_str::<Catalog>(&json).expect("deserialize");
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn invalid_probability_fails_validation() {
        let json = r#"{
            "entities": { "3": { "kind": "probabilistic_break", "p1": 1.5 } },
            "windows": [ { "label": "Honey", "length": 54 } ]
        }"#;
        let catalog = serde_json::from_str::<Catalog>(json).expect("valid json");
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn restrict_keeps_catalog_order() {
        let labels = vec!["Honey".to_string(), "Sweet Scent".to_string()];
        let catalog = Catalog::default().restrict(&labels).expect("known windows");
        let kept = catalog.windows.iter().map(|w| w.length).collect::<Vec<_>>();
        assert_eq!(kept, vec![75, 54]);
        assert!(Catalog::default().restrict(&["Surf".to_string()]).is_err());
    }

    #[test]
    fn load_reports_missing_files() {
        assert!(Catalog::load("/nonexistent/catalog.json").is_err());
    }
}
