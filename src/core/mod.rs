//! Core types and logic for the flashcard trainer.
//!
//! This module contains the card store, the per-term miss tracker and the
//! quiz engine that ties them together.

pub mod cards;
pub mod misses;
pub mod quiz;

pub use cards::{Card, CardStore};
pub use misses::MissTracker;
pub use quiz::{
    parse_question_count, score_answer, QuizEngine, QuizIo, QuizOutcome, SessionSummary,
    NO_CARDS_MESSAGE,
};
