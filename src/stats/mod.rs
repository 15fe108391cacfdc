//! Miss statistics for the flashcard trainer.
//!
//! Reports which cards were missed most often since the last quiz started
//! or the last explicit reset.

pub mod hardest;

pub use hardest::{hardest_card, reset_stats, HardestCards, RESET_MESSAGE};
