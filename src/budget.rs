//! Budget tiers
//!
//! Maps a raw budget amount to a named tier. The tier picks the tone and
//! guidance text used by prompts and by the local catchphrase fallback, so
//! every task classifies with the same thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const ULTRA_HIGH_THRESHOLD: i64 = 15_000_000;
pub const HIGH_THRESHOLD: i64 = 8_000_000;
pub const MID_THRESHOLD: i64 = 3_000_000;
pub const LOW_THRESHOLD: i64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetTier {
    UltraLow,
    Low,
    Mid,
    High,
    UltraHigh,
}

/// Classify a budget. Total over `i64`; zero and negative amounts are `UltraLow`.
pub fn classify(amount: i64) -> BudgetTier {
    if amount >= ULTRA_HIGH_THRESHOLD {
        BudgetTier::UltraHigh
    } else if amount >= HIGH_THRESHOLD {
        BudgetTier::High
    } else if amount >= MID_THRESHOLD {
        BudgetTier::Mid
    } else if amount >= LOW_THRESHOLD {
        BudgetTier::Low
    } else {
        BudgetTier::UltraLow
    }
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 5] = [
        BudgetTier::UltraLow,
        BudgetTier::Low,
        BudgetTier::Mid,
        BudgetTier::High,
        BudgetTier::UltraHigh,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetTier::UltraLow => "ultra-low",
            BudgetTier::Low => "low",
            BudgetTier::Mid => "mid",
            BudgetTier::High => "high",
            BudgetTier::UltraHigh => "ultra-high",
        }
    }

    /// Prompt guidance for what a trip at this tier should look like.
    pub fn guidance(&self) -> &'static str {
        match self {
            BudgetTier::UltraHigh => {
                "Ultra high budget (15M+ IDR): luxury resorts, private villas, 5-star hotels, \
                 private transport, Michelin dining, VIP tours, premium spas, yacht charters."
            }
            BudgetTier::High => {
                "High budget (8-15M IDR): 4-5 star hotels, boutique resorts, business class or \
                 premium transport, fine dining, exclusive activities, guided tours."
            }
            BudgetTier::Mid => {
                "Mid budget (3-8M IDR): 3-4 star hotels, nice guesthouses, economy flights, \
                 a mix of restaurants and local dining, popular attractions."
            }
            BudgetTier::Low => {
                "Low budget (1-3M IDR): budget hotels, hostels, homestays, public transport, \
                 warungs and street food, free attractions and cheap activities."
            }
            BudgetTier::UltraLow => {
                "Ultra low budget (under 1M IDR): stay local or at home, free activities only, \
                 walking or cycling, home cooking, street food, parks, beaches, free events."
            }
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
