//! Complexity levels and their static ceiling tables.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One row of a level table: the sub-result it produces and its ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelSpec {
    pub label: &'static str,
    pub ceiling: f64,
    pub description: &'static str,
}

static SINGLE: &[LevelSpec] = &[LevelSpec {
    label: "Unique Grade",
    ceiling: 10.0,
    description: "Standard mapping",
}];

static DUAL: &[LevelSpec] = &[
    LevelSpec {
        label: "Basic",
        ceiling: 8.0,
        description: "Max 8.0",
    },
    LevelSpec {
        label: "Advanced",
        ceiling: 10.0,
        description: "Max 10.0",
    },
];

static TRIPLE: &[LevelSpec] = &[
    LevelSpec {
        label: "Basic",
        ceiling: 7.5,
        description: "Max 7.5",
    },
    LevelSpec {
        label: "Intermediate",
        ceiling: 8.5,
        description: "Max 8.5",
    },
    LevelSpec {
        label: "Advanced",
        ceiling: 10.0,
        description: "Max 10.0",
    },
];

/// How many difficulty levels a test has.
///
/// Serialized as the integer `1`, `2` or `3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ComplexityLevel {
    Single,
    Dual,
    #[default]
    Triple,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 3] = [Self::Single, Self::Dual, Self::Triple];

    /// Level table in ascending difficulty. The last entry always has ceiling 10.
    pub fn specs(self) -> &'static [LevelSpec] {
        match self {
            Self::Single => SINGLE,
            Self::Dual => DUAL,
            Self::Triple => TRIPLE,
        }
    }

    /// Number of grade results this level produces.
    pub fn arity(self) -> usize {
        self.specs().len()
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Single => "1 level",
            Self::Dual => "2 levels",
            Self::Triple => "3 levels",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Single => "Standard linear mapping (0-10).",
            Self::Dual => "Basic (max 8) and Advanced (max 10).",
            Self::Triple => "Basic (7.5), Intermediate (8.5), Advanced (10).",
        }
    }
}

impl From<ComplexityLevel> for u8 {
    fn from(level: ComplexityLevel) -> u8 {
        match level {
            ComplexityLevel::Single => 1,
            ComplexityLevel::Dual => 2,
            ComplexityLevel::Triple => 3,
        }
    }
}

impl TryFrom<u8> for ComplexityLevel {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Single),
            2 => Ok(Self::Dual),
            3 => Ok(Self::Triple),
            other => Err(format!("complexity level must be 1, 2 or 3, got {other}")),
        }
    }
}

impl FromStr for ComplexityLevel {
    type Err = anyhow::Error;

    /// Accepts `1`/`2`/`3` or `single`/`dual`/`triple` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "single" => Ok(Self::Single),
            "2" | "dual" => Ok(Self::Dual),
            "3" | "triple" => Ok(Self::Triple),
            other => bail!("unknown complexity level '{other}' (expected 1, 2, 3, single, dual or triple)"),
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Single => "single",
            Self::Dual => "dual",
            Self::Triple => "triple",
        };
        f.write_str(name)
    }
}
