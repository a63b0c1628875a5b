//! Pot identifiers and per-pot configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_POT_A_BUDGET: f64 = 300.0;
pub const DEFAULT_POT_B_BUDGET: f64 = 200.0;

/// Closed set of spending envelopes tracked per month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PotId {
    #[serde(rename = "potA")]
    PotA,
    #[serde(rename = "potB")]
    PotB,
}

impl PotId {
    pub const ALL: [PotId; 2] = [PotId::PotA, PotId::PotB];

    /// Display label used when a pot's stored name is blank.
    pub fn default_label(self) -> &'static str {
        match self {
            PotId::PotA => "Pot A",
            PotId::PotB => "Pot B",
        }
    }
}

impl fmt::Display for PotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PotId::PotA => "potA",
            PotId::PotB => "potB",
        };
        f.write_str(label)
    }
}

/// A named spending envelope with its monthly starting budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pot {
    pub name: String,
    pub starting_budget: f64,
}

impl Pot {
    pub fn new(name: impl Into<String>, starting_budget: f64) -> Self {
        Self {
            name: name.into(),
            starting_budget,
        }
    }

    /// Stored name, or the pot's default label when blank. The fallback is
    /// applied here at read time and never written back.
    pub fn display_name(&self, id: PotId) -> &str {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            id.default_label()
        } else {
            trimmed
        }
    }
}

/// Both pots of a month. The fixed pair is a record rather than a map, so a
/// month with a missing pot is unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pots {
    #[serde(rename = "potA")]
    pub pot_a: Pot,
    #[serde(rename = "potB")]
    pub pot_b: Pot,
}

impl Pots {
    /// Example configuration used for the first bootstrap month.
    pub fn bootstrap() -> Self {
        Self {
            pot_a: Pot::new(PotId::PotA.default_label(), DEFAULT_POT_A_BUDGET),
            pot_b: Pot::new(PotId::PotB.default_label(), DEFAULT_POT_B_BUDGET),
        }
    }

    /// Clean-install configuration: default labels, zero budgets.
    pub fn zeroed() -> Self {
        Self {
            pot_a: Pot::new(PotId::PotA.default_label(), 0.0),
            pot_b: Pot::new(PotId::PotB.default_label(), 0.0),
        }
    }

    pub fn get(&self, id: PotId) -> &Pot {
        match id {
            PotId::PotA => &self.pot_a,
            PotId::PotB => &self.pot_b,
        }
    }

    pub fn get_mut(&mut self, id: PotId) -> &mut Pot {
        match id {
            PotId::PotA => &mut self.pot_a,
            PotId::PotB => &mut self.pot_b,
        }
    }
}
