//! Strip specifications: fan dies with per-UPS side widths and the bottom size catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SlitError};

/// Units-per-set tier selecting which configured die width applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum UpsTier {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

impl UpsTier {
    /// Numeric tier value.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for UpsTier {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(UpsTier::One),
            2 => Ok(UpsTier::Two),
            3 => Ok(UpsTier::Three),
            4 => Ok(UpsTier::Four),
            other => Err(format!("UPS tier must be 1-4, got {}", other)),
        }
    }
}

impl From<UpsTier> for u8 {
    fn from(tier: UpsTier) -> u8 {
        tier.number()
    }
}

impl FromStr for UpsTier {
    type Err = String;

    /// Accepts `2`, `2UPS` or `2ups`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("UPS")
            .or_else(|| trimmed.strip_suffix("ups"))
            .unwrap_or(trimmed)
            .trim();
        let value: u8 = digits
            .parse()
            .map_err(|_| format!("Invalid UPS tier '{}'", s))?;
        UpsTier::try_from(value)
    }
}

impl fmt::Display for UpsTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}UPS", self.number())
    }
}

/// Fan size (print/cut die) with a strip width per UPS tier.
///
/// A tier width of zero means the tier is not configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FanSize {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub die_width: f64,
    #[serde(default)]
    pub die_height: f64,
    #[serde(default)]
    pub print_width: f64,
    #[serde(default)]
    pub print_height: f64,
    #[serde(default)]
    pub rows: u32,
    #[serde(default)]
    pub ups1_width: f64,
    #[serde(default)]
    pub ups2_width: f64,
    #[serde(default)]
    pub ups3_width: f64,
    #[serde(default)]
    pub ups4_width: f64,
}

impl FanSize {
    /// Create a fan size with only its identity set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Configured strip width for a tier (0 when unset).
    pub fn ups_width(&self, tier: UpsTier) -> f64 {
        match tier {
            UpsTier::One => self.ups1_width,
            UpsTier::Two => self.ups2_width,
            UpsTier::Three => self.ups3_width,
            UpsTier::Four => self.ups4_width,
        }
    }

    /// Set the strip width for a tier.
    pub fn set_ups_width(&mut self, tier: UpsTier, width: f64) {
        match tier {
            UpsTier::One => self.ups1_width = width,
            UpsTier::Two => self.ups2_width = width,
            UpsTier::Three => self.ups3_width = width,
            UpsTier::Four => self.ups4_width = width,
        }
    }

    /// Resolve the side strip for a tier.
    ///
    /// Fails with a configuration error when the tier width is zero or unset.
    pub fn side_strip(&self, tier: UpsTier) -> Result<SideStrip> {
        let width = self.ups_width(tier);
        if width <= 0.0 || !width.is_finite() {
            return Err(SlitError::Configuration {
                fan: self.name.clone(),
                ups: tier,
            });
        }
        Ok(SideStrip {
            name: self.name.clone(),
            ups: tier,
            width,
        })
    }
}

/// Side strip selected from a fan size at a given tier.
#[derive(Debug, Clone, PartialEq)]
pub struct SideStrip {
    /// Fan size name.
    pub name: String,
    /// Tier the width was taken from.
    pub ups: UpsTier,
    /// Strip width in cm.
    pub width: f64,
}

/// Catalog entry for bottom-cut strips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BottomSize {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub width: f64,
}

impl BottomSize {
    /// Create a bottom size.
    pub fn new(id: impl Into<String>, name: impl Into<String>, width: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
        }
    }

    /// Whether this entry can take part in generation.
    pub fn is_usable(&self) -> bool {
        self.width > 0.0 && self.width.is_finite()
    }
}

/// One physical strip in an arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strip {
    pub name: String,
    pub width: f64,
}

impl Strip {
    pub fn new(name: impl Into<String>, width: f64) -> Self {
        Self {
            name: name.into(),
            width,
        }
    }
}

/// Where a strip comes from when expanded for materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StripKind {
    Side,
    Bottom,
}
