use std::collections::BTreeSet;

use crate::error::{PodiumError, PodiumResult};

/// Ranked winner group. Serialized as the integer rank (1..=4) the roster
/// data uses.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Tier {
    Excellence,
    Strategic,
    Research,
    Rising,
}

impl Tier {
    /// All tiers in ascending rank order (the page order).
    pub const ALL: [Tier; 4] = [Tier::Excellence, Tier::Strategic, Tier::Research, Tier::Rising];

    pub fn rank(self) -> u8 {
        match self {
            Self::Excellence => 1,
            Self::Strategic => 2,
            Self::Research => 3,
            Self::Rising => 4,
        }
    }
}

impl TryFrom<u8> for Tier {
    type Error = PodiumError;

    fn try_from(value: u8) -> PodiumResult<Self> {
        match value {
            1 => Ok(Self::Excellence),
            2 => Ok(Self::Strategic),
            3 => Ok(Self::Research),
            4 => Ok(Self::Rising),
            other => Err(PodiumError::data(format!(
                "tier must be 1..=4, got {other}"
            ))),
        }
    }
}

impl From<Tier> for u8 {
    fn from(value: Tier) -> Self {
        value.rank()
    }
}

/// Title/tagline pair shown in a scene header.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneCopy {
    pub title: String,
    pub tagline: String,
}

impl SceneCopy {
    pub fn new(title: impl Into<String>, tagline: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: tagline.into(),
        }
    }
}

/// Textual metadata for the summary page and the four tier pages.
///
/// Host configuration; the defaults are the season-three campaign copy.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ShowcaseCopy {
    pub summary: SceneCopy,
    pub tiers: [SceneCopy; 4],
}

impl ShowcaseCopy {
    pub fn for_tier(&self, tier: Tier) -> &SceneCopy {
        &self.tiers[usize::from(tier.rank()) - 1]
    }
}

impl Default for ShowcaseCopy {
    fn default() -> Self {
        Self {
            summary: SceneCopy::new(
                "Season III Summary",
                "Redefining crypto intelligence through data",
            ),
            tiers: [
                SceneCopy::new(
                    "Excellence Tier",
                    "Setting the new standard of crypto intelligence",
                ),
                SceneCopy::new("Strategic Insights", "Mastering market dynamics with precision"),
                SceneCopy::new(
                    "Research Contributors",
                    "Exceptional depth and consistent quality",
                ),
                SceneCopy::new("Rising Stars", "Emerging voices shaping the future of Web3"),
            ],
        }
    }
}

/// One award winner. Immutable input supplied by the data-loading collaborator.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Winner {
    pub id: u64,
    pub handle: String,
    pub tier: Tier,
    /// Display string, e.g. `"$1,500"`.
    pub prize: String,
    /// Avatar reference, resolved by the rendering collaborator.
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub awards: Vec<String>,
}

/// Parse the numeric USD amount out of a prize display string.
///
/// Strips `$` and `,`, then reads leading digits; a string with no leading
/// digits counts as zero.
pub fn prize_usd(display: &str) -> u64 {
    let cleaned: String = display.chars().filter(|c| *c != '$' && *c != ',').collect();
    let digits: String = cleaned
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// Compact prize-pool figure for the summary scene: `"$42k"` from 1000 up,
/// `"$950"` below.
pub fn prize_pool_display(usd: u64) -> String {
    if usd >= 1000 {
        format!("${}k", ((usd as f64) / 1000.0).round() as u64)
    } else {
        format!("${usd}")
    }
}

/// The full winner list, in broadcast order.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    pub winners: Vec<Winner>,
}

impl Roster {
    pub fn new(winners: Vec<Winner>) -> Self {
        Self { winners }
    }

    pub fn from_json_str(s: &str) -> PodiumResult<Self> {
        let roster: Roster =
            serde_json::from_str(s).map_err(|e| PodiumError::serde(format!("parse roster: {e}")))?;
        roster.validate()?;
        Ok(roster)
    }

    pub fn validate(&self) -> PodiumResult<()> {
        let mut seen = BTreeSet::new();
        for winner in &self.winners {
            if winner.handle.trim().is_empty() {
                return Err(PodiumError::data(format!(
                    "winner {} has an empty handle",
                    winner.id
                )));
            }
            if !seen.insert(winner.id) {
                return Err(PodiumError::data(format!(
                    "duplicate winner id {}",
                    winner.id
                )));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    pub fn tier_count(&self, tier: Tier) -> usize {
        self.winners.iter().filter(|w| w.tier == tier).count()
    }

    pub fn total_prize_usd(&self) -> u64 {
        self.winners.iter().map(|w| prize_usd(&w.prize)).sum()
    }
}
