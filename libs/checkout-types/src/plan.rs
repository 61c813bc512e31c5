use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subscription tiers, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    Associates,
    Bachelors,
    Masters,
}

impl PlanTier {
    /// Numeric tier level (associates = 1, bachelors = 2, masters = 3).
    pub fn level(&self) -> u8 {
        match self {
            Self::Associates => 1,
            Self::Bachelors => 2,
            Self::Masters => 3,
        }
    }

    /// Returns true if this plan unlocks content gated at `required`.
    pub fn allows(&self, required: PlanTier) -> bool {
        *self >= required
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Associates => "associates",
            Self::Bachelors => "bachelors",
            Self::Masters => "masters",
        }
    }
}

impl std::fmt::Display for PlanTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PlanTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "associates" => Ok(Self::Associates),
            "bachelors" => Ok(Self::Bachelors),
            "masters" => Ok(Self::Masters),
            other => Err(format!("unknown plan: {other}")),
        }
    }
}

/// Billing frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cadence {
    Monthly,
    Annual,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Annual => "annual",
        }
    }
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Self::Monthly),
            "annual" => Ok(Self::Annual),
            other => Err(format!("unknown cadence: {other}")),
        }
    }
}
