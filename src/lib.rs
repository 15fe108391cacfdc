//! Flashcards - an interactive command-line flashcard trainer.
//!
//! Cards are term/definition pairs. The trainer quizzes the user on random
//! cards, counts misses per term, reports the hardest cards, and reads and
//! writes decks as plain `term,definition` text files.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod stats;
pub mod storage;
pub mod util;

pub use cli::{Command, Console, ScriptedConsole, Session, StdConsole};
pub use config::Config;
pub use core::{
    parse_question_count, score_answer, Card, CardStore, MissTracker, QuizEngine, QuizIo,
    QuizOutcome, SessionSummary,
};
pub use error::{FlashcardError, Result};
pub use stats::{hardest_card, reset_stats, HardestCards};
pub use storage::{export_to, import_from, ImportReport, Transcript};
