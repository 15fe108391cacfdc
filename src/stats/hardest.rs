//! Hardest-card report.
//!
//! Ties are listed in tracker order, which is ascending term order.

use std::fmt;

use crate::core::MissTracker;

/// Message shown after the miss counts are cleared.
pub const RESET_MESSAGE: &str = "Card statistics have been reset.";

/// The card or cards with the most misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HardestCards {
    /// Nothing tracked, or every count is zero.
    NoErrors,
    /// A single card holds the highest count.
    Single { term: String, count: u32 },
    /// Several cards share the highest count.
    Tied { terms: Vec<String> },
}

impl fmt::Display for HardestCards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoErrors => write!(f, "There are no cards with errors."),
            Self::Single { term, count } => write!(
                f,
                "The hardest card is \"{}\". You have {} errors answering it.",
                term, count
            ),
            Self::Tied { terms } => {
                let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
                write!(f, "The hardest cards are {}.", quoted.join(", "))
            }
        }
    }
}

/// Find the hardest card(s) in `tracker`.
pub fn hardest_card(tracker: &MissTracker) -> HardestCards {
    let max = tracker.iter().map(|(_, count)| count).max().unwrap_or(0);
    if max == 0 {
        return HardestCards::NoErrors;
    }

    let mut terms: Vec<String> = tracker
        .iter()
        .filter(|(_, count)| *count == max)
        .map(|(term, _)| term.to_string())
        .collect();

    if terms.len() == 1 {
        HardestCards::Single {
            term: terms.remove(0),
            count: max,
        }
    } else {
        HardestCards::Tied { terms }
    }
}

/// Clear every miss count and return the confirmation message.
pub fn reset_stats(tracker: &mut MissTracker) -> &'static str {
    tracker.reset_all();
    tracing::debug!(tracked = tracker.len(), "card statistics reset");
    RESET_MESSAGE
}
