use adv_core::Steps;
use serde::Deserialize;
use serde::Serialize;

/// A named span of time steps during which advances are counted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub label: String,
    pub length: Steps,
}

impl Window {
    pub fn new(label: impl Into<String>, length: Steps) -> Self {
        Self {
            label: label.into(),
            length,
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label, self.length)
    }
}
