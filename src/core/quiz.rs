//! Quiz engine: asks random cards and scores the answers.
//!
//! The engine never touches the console. Prompts and feedback go through a
//! [`QuizIo`] implementation supplied by the caller.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::cards::CardStore;
use super::misses::MissTracker;
use crate::error::{FlashcardError, Result};

/// Message shown when a quiz is requested with no cards.
pub const NO_CARDS_MESSAGE: &str =
    "There are currently no cards! Choose either 'add' or 'import' to add some cards.";

/// Boundary the engine uses to ask questions and narrate results.
pub trait QuizIo {
    /// Show `prompt` and return the user's answer.
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Show a line of feedback.
    fn say(&mut self, message: &str) -> Result<()>;
}

/// Result of scoring a single answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// The answer matched the definition exactly.
    Correct,
    /// The answer is the definition of another card.
    WrongButValidElsewhere {
        /// The card whose definition was given.
        other_term: String,
    },
    /// The answer matches no card.
    WrongNoMatch,
}

impl QuizOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }

    /// Feedback line for this outcome, given the expected definition.
    pub fn feedback(&self, definition: &str) -> String {
        match self {
            Self::Correct => "Correct!".to_string(),
            Self::WrongButValidElsewhere { other_term } => format!(
                "Wrong. The right answer is \"{}\", but your definition is correct for \"{}\".",
                definition, other_term
            ),
            Self::WrongNoMatch => format!("Wrong. The right answer is \"{}\".", definition),
        }
    }
}

/// Tally of one quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Questions asked.
    pub asked: usize,
    /// Questions answered correctly.
    pub correct: usize,
    /// Questions answered wrongly.
    pub wrong: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &QuizOutcome) {
        self.asked += 1;
        if outcome.is_correct() {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }
}

/// Score `candidate` against the card `term` → `definition`.
///
/// Any wrong answer is counted as a miss for `term`, even when the answer is
/// the valid definition of some other card.
pub fn score_answer(
    candidate: &str,
    term: &str,
    definition: &str,
    store: &CardStore,
    tracker: &mut MissTracker,
) -> QuizOutcome {
    if candidate == definition {
        return QuizOutcome::Correct;
    }

    tracker.record_miss(term);

    match store.term_for_definition(candidate, term) {
        Some(other) => QuizOutcome::WrongButValidElsewhere {
            other_term: other.to_string(),
        },
        None => QuizOutcome::WrongNoMatch,
    }
}

/// Parse the number of questions typed by the user.
///
/// Only plain ASCII digits are accepted; signs, spaces inside the number and
/// values that overflow `usize` are rejected.
pub fn parse_question_count(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FlashcardError::invalid_integer(input));
    }
    trimmed
        .parse()
        .map_err(|_| FlashcardError::invalid_integer(input))
}

/// Runs quiz sessions against a card store.
#[derive(Debug)]
pub struct QuizEngine {
    rng: StdRng,
}

impl QuizEngine {
    /// Create an engine seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an engine with a fixed seed, for reproducible question order.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Ask `question_count` random cards from `store`.
    ///
    /// The tracker is reset for the store before the first question. With an
    /// empty store nothing is asked and the tracker is left alone.
    pub fn run_session(
        &mut self,
        store: &CardStore,
        tracker: &mut MissTracker,
        question_count: usize,
        io: &mut impl QuizIo,
    ) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        if store.is_empty() {
            io.say(NO_CARDS_MESSAGE)?;
            return Ok(summary);
        }

        tracker.reset_for(store);
        let terms = store.terms();

        for _ in 0..question_count {
            let Some(&term) = terms.choose(&mut self.rng) else {
                break;
            };
            let definition = store.lookup(term)?;

            let answer = io.ask(&format!("Print the definition of \"{}\":", term))?;
            let outcome = score_answer(&answer, term, definition, store, tracker);
            io.say(&outcome.feedback(definition))?;

            summary.record(&outcome);
        }

        tracing::debug!(
            asked = summary.asked,
            correct = summary.correct,
            wrong = summary.wrong,
            "quiz session finished"
        );
        Ok(summary)
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed answers and records everything shown.
    #[derive(Default)]
    struct ScriptedIo {
        answers: VecDeque<String>,
        prompts: Vec<String>,
        said: Vec<String>,
    }

    impl ScriptedIo {
        fn with_answers(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.to_string()).collect(),
                ..Default::default()
            }
        }
    }

    impl QuizIo for ScriptedIo {
        fn ask(&mut self, prompt: &str) -> Result<String> {
            self.prompts.push(prompt.to_string());
            self.answers.pop_front().ok_or(FlashcardError::InputClosed)
        }

        fn say(&mut self, message: &str) -> Result<()> {
            self.said.push(message.to_string());
            Ok(())
        }
    }

    fn geography() -> CardStore {
        [("France", "Paris"), ("Italy", "Rome")].into_iter().collect()
    }

    fn tracked(store: &CardStore) -> MissTracker {
        let mut tracker = MissTracker::new();
        tracker.reset_for(store);
        tracker
    }

    #[test]
    fn test_score_exact_match() {
        let store = geography();
        let mut tracker = tracked(&store);

        let outcome = score_answer("Paris", "France", "Paris", &store, &mut tracker);

        assert_eq!(outcome, QuizOutcome::Correct);
        assert_eq!(tracker, tracked(&store));
    }

    #[test]
    fn test_score_is_case_sensitive() {
        let store = geography();
        let mut tracker = tracked(&store);

        let outcome = score_answer("paris", "France", "Paris", &store, &mut tracker);

        assert_eq!(outcome, QuizOutcome::WrongNoMatch);
        assert_eq!(tracker.count("France"), Some(1));
    }

    #[test]
    fn test_score_cross_match() {
        let store = geography();
        let mut tracker = tracked(&store);

        let outcome = score_answer("Rome", "France", "Paris", &store, &mut tracker);

        assert_eq!(
            outcome,
            QuizOutcome::WrongButValidElsewhere {
                other_term: "Italy".to_string()
            }
        );
        assert_eq!(tracker.count("France"), Some(1));
        assert_eq!(tracker.count("Italy"), Some(0));
    }

    #[test]
    fn test_score_no_match() {
        let store = geography();
        let mut tracker = tracked(&store);

        let outcome = score_answer("Berlin", "France", "Paris", &store, &mut tracker);

        assert_eq!(outcome, QuizOutcome::WrongNoMatch);
        assert_eq!(tracker.count("France"), Some(1));
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(QuizOutcome::Correct.feedback("Paris"), "Correct!");
        assert_eq!(
            QuizOutcome::WrongNoMatch.feedback("Paris"),
            "Wrong. The right answer is \"Paris\"."
        );
        assert_eq!(
            QuizOutcome::WrongButValidElsewhere {
                other_term: "Italy".to_string()
            }
            .feedback("Paris"),
            "Wrong. The right answer is \"Paris\", but your definition is correct for \"Italy\"."
        );
    }

    #[test]
    fn test_parse_question_count() {
        assert_eq!(parse_question_count("3").unwrap(), 3);
        assert_eq!(parse_question_count("0").unwrap(), 0);
        assert_eq!(parse_question_count(" 12\n").unwrap(), 12);
    }

    #[test]
    fn test_parse_question_count_rejects_non_digits() {
        for input in ["", "  ", "three", "-1", "+2", "1.5", "1 2"] {
            assert!(
                matches!(
                    parse_question_count(input),
                    Err(FlashcardError::InvalidInteger { .. })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_question_count_rejects_overflow() {
        let huge = "9".repeat(40);
        assert!(parse_question_count(&huge).is_err());
    }

    #[test]
    fn test_empty_store_asks_nothing() {
        let store = CardStore::new();
        let mut tracker: MissTracker = [("Stale", 2)].into_iter().collect();
        let before = tracker.clone();
        let mut io = ScriptedIo::default();

        let summary = QuizEngine::seeded(1)
            .run_session(&store, &mut tracker, 5, &mut io)
            .unwrap();

        assert_eq!(summary, SessionSummary::default());
        assert!(io.prompts.is_empty());
        assert_eq!(io.said, vec![NO_CARDS_MESSAGE.to_string()]);
        assert_eq!(tracker, before);
    }

    #[test]
    fn test_zero_questions() {
        let store = geography();
        let mut tracker = MissTracker::new();
        let mut io = ScriptedIo::default();

        let summary = QuizEngine::seeded(1)
            .run_session(&store, &mut tracker, 0, &mut io)
            .unwrap();

        assert_eq!(summary.asked, 0);
        assert!(io.prompts.is_empty());
        // The tracker is still reset for the store.
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_session_resets_tracker_and_counts_misses() {
        let store: CardStore = [("France", "Paris")].into_iter().collect();
        let mut tracker: MissTracker = [("France", 9), ("Gone", 1)].into_iter().collect();
        let mut io = ScriptedIo::with_answers(&["Paris", "Lyon", "Nice"]);

        let summary = QuizEngine::seeded(7)
            .run_session(&store, &mut tracker, 3, &mut io)
            .unwrap();

        assert_eq!(
            summary,
            SessionSummary {
                asked: 3,
                correct: 1,
                wrong: 2
            }
        );
        assert_eq!(tracker.count("France"), Some(2));
        assert_eq!(tracker.count("Gone"), None);
        assert_eq!(io.prompts, vec!["Print the definition of \"France\":"; 3]);
        assert_eq!(io.said[0], "Correct!");
        assert_eq!(io.said[1], "Wrong. The right answer is \"Paris\".");
    }

    #[test]
    fn test_single_card_repeats_with_replacement() {
        let store: CardStore = [("France", "Paris")].into_iter().collect();
        let mut tracker = MissTracker::new();
        let mut io = ScriptedIo::with_answers(&["Paris"; 4]);

        let summary = QuizEngine::seeded(3)
            .run_session(&store, &mut tracker, 4, &mut io)
            .unwrap();

        assert_eq!(summary.correct, 4);
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let store: CardStore = [
            ("France", "Paris"),
            ("Italy", "Rome"),
            ("Spain", "Madrid"),
            ("Japan", "Tokyo"),
        ]
        .into_iter()
        .collect();

        let run = |seed| {
            let mut tracker = MissTracker::new();
            let mut io = ScriptedIo::with_answers(&["?"; 10]);
            QuizEngine::seeded(seed)
                .run_session(&store, &mut tracker, 10, &mut io)
                .unwrap();
            io.prompts
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_input_closed_mid_session_propagates() {
        let store = geography();
        let mut tracker = MissTracker::new();
        let mut io = ScriptedIo::with_answers(&["Paris"]);

        let result = QuizEngine::seeded(5).run_session(&store, &mut tracker, 3, &mut io);
        assert!(matches!(result, Err(FlashcardError::InputClosed)));
    }
}
