use serde::{Deserialize, Serialize};

use crate::errors::PolymerError;

pub const DEFAULT_DEGREE: usize = 2;

/// What to do with a monomer that carries more than two `*` placeholders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderPolicy {
    /// Claim the first two placeholders in stored order and leave the rest
    /// as open placeholders.
    #[default]
    FirstTwo,
    /// Fail with `InvalidMonomer`.
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolymerConfig {
    /// Number of monomer copies in the chain.
    pub degree: usize,
    pub placeholder_policy: PlaceholderPolicy,
}

impl Default for PolymerConfig {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            placeholder_policy: PlaceholderPolicy::default(),
        }
    }
}

impl PolymerConfig {
    pub fn new(degree: usize) -> Self {
        Self {
            degree,
            ..Self::default()
        }
    }

    pub fn strict(mut self) -> Self {
        self.placeholder_policy = PlaceholderPolicy::Reject;
        self
    }

    pub fn from_json(text: &str) -> Result<Self, PolymerError> {
        let config: PolymerConfig = serde_json::from_str(text)
            .map_err(|e| PolymerError::invalid_input(format!("config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PolymerError> {
        if self.degree == 0 {
            return Err(PolymerError::invalid_input("degree must be a positive integer"));
        }
        Ok(())
    }
}
