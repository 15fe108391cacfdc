//! Interactive command session.
//!
//! A [`Session`] owns the card store, the miss tracker, the quiz engine and
//! the transcript for one run of the program. Each command maps to one
//! handler; recoverable errors become messages and the loop prompts again.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::command::Command;
use super::console::Console;
use crate::config::Config;
use crate::core::{
    parse_question_count, CardStore, MissTracker, QuizEngine, QuizIo, NO_CARDS_MESSAGE,
};
use crate::error::{FlashcardError, Result};
use crate::stats::{hardest_card, reset_stats};
use crate::storage::{export_to, import_from, Transcript};

const INVALID_COMMAND: &str = "Invalid command.";
const FILE_NAME_PROMPT: &str = "File name:";
const FILE_NOT_FOUND: &str = "File not found.";
const CARD_PROMPT: &str = "The card:";
const DEFINITION_PROMPT: &str = "The definition of the card:";
const REMOVE_PROMPT: &str = "Which card?";
const CARD_REMOVED: &str = "The card has been removed.";
const COUNT_PROMPT: &str = "How many times to ask?";
const COUNT_INVALID: &str = "Please enter a non-negative integer.";
const LOG_SAVED: &str = "The log has been saved.";
const GOODBYE: &str = "Bye bye!";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Console plus transcript: everything shown or typed is recorded.
#[derive(Debug)]
struct Terminal<C> {
    console: C,
    transcript: Transcript,
}

impl<C: Console> QuizIo for Terminal<C> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        let reply = self.console.read_line()?.ok_or(FlashcardError::InputClosed)?;
        self.transcript.append(&reply);
        Ok(reply)
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.transcript.append(message);
        self.console.write_line(message)
    }
}

/// One interactive run of the program.
#[derive(Debug)]
pub struct Session<C> {
    io: Terminal<C>,
    store: CardStore,
    tracker: MissTracker,
    engine: QuizEngine,
    import_on_start: Option<PathBuf>,
    export_on_exit: Option<PathBuf>,
}

impl<C: Console> Session<C> {
    /// Create a session with an empty store.
    pub fn new(console: C, config: &Config) -> Self {
        let engine = match config.quiz.seed {
            Some(seed) => QuizEngine::seeded(seed),
            None => QuizEngine::new(),
        };

        Self {
            io: Terminal {
                console,
                transcript: Transcript::new(),
            },
            store: CardStore::new(),
            tracker: MissTracker::new(),
            engine,
            import_on_start: config.files.import_from.clone(),
            export_on_exit: config.files.export_to.clone(),
        }
    }

    /// Run the command loop until `exit` or end of input.
    ///
    /// Only console failures end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        if let Some(path) = self.import_on_start.take() {
            let result = self.import_file(&path);
            self.report(result)?;
        }

        loop {
            let input = match self.io.ask(&Command::prompt()) {
                Ok(input) => input,
                Err(FlashcardError::InputClosed) => {
                    self.exit()?;
                    return Ok(());
                }
                Err(err) => return Err(err),
            };

            let Ok(command) = input.parse::<Command>() else {
                self.io.say(INVALID_COMMAND)?;
                continue;
            };
            debug!(%command, "dispatching command");

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(FlashcardError::InputClosed) => {
                    self.exit()?;
                    return Ok(());
                }
                Err(err) => self.report(Err(err))?,
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Add => self.add_card(),
            Command::Remove => self.remove_card(),
            Command::Import => self.import_cards(),
            Command::Export => self.export_cards(),
            Command::Ask => self.ask_cards(),
            Command::Exit => self.exit(),
            Command::Log => self.save_log(),
            Command::HardestCard => self.show_hardest_card(),
            Command::ResetStats => self.reset_card_stats(),
        }
    }

    /// Show a failed file operation without ending the session.
    fn report(&mut self, result: Result<Flow>) -> Result<()> {
        match result {
            Ok(_) => Ok(()),
            Err(FlashcardError::InputClosed) => Err(FlashcardError::InputClosed),
            Err(err) => {
                warn!(error = %err, "command failed");
                self.io.say(&format!("Error: {}", err))
            }
        }
    }

    fn add_card(&mut self) -> Result<Flow> {
        let mut term = self.io.ask(CARD_PROMPT)?;
        while self.store.validate_term(&term).is_err() {
            term = self
                .io
                .ask(&format!("The term \"{}\" already exists. Try again:", term))?;
        }

        let mut definition = self.io.ask(DEFINITION_PROMPT)?;
        while self.store.validate_definition(&definition).is_err() {
            definition = self.io.ask(&format!(
                "The definition \"{}\" already exists. Try again:",
                definition
            ))?;
        }

        let card = self.store.add(term, definition)?;
        self.io.say(&format!(
            "The pair (\"{}\":\"{}\") has been added.",
            card.term, card.definition
        ))?;
        Ok(Flow::Continue)
    }

    fn remove_card(&mut self) -> Result<Flow> {
        let term = self.io.ask(REMOVE_PROMPT)?;
        match self.store.remove(&term) {
            Ok(()) => self.io.say(CARD_REMOVED)?,
            Err(FlashcardError::CardNotFound { .. }) => self.io.say(&format!(
                "Can't remove \"{}\": there is no such card.",
                term
            ))?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn import_cards(&mut self) -> Result<Flow> {
        let name = self.io.ask(FILE_NAME_PROMPT)?;
        self.import_file(Path::new(&name))
    }

    fn import_file(&mut self, path: &Path) -> Result<Flow> {
        match import_from(path, &self.store) {
            Ok((merged, report)) => {
                self.store = merged;
                self.io
                    .say(&format!("{} cards have been loaded.", report.lines_read))?;
            }
            Err(FlashcardError::FileNotFound { .. }) => self.io.say(FILE_NOT_FOUND)?,
            Err(err) => return Err(err),
        }
        Ok(Flow::Continue)
    }

    fn export_cards(&mut self) -> Result<Flow> {
        let name = self.io.ask(FILE_NAME_PROMPT)?;
        self.export_file(Path::new(&name))
    }

    fn export_file(&mut self, path: &Path) -> Result<Flow> {
        let count = export_to(path, &self.store)?;
        self.io.say(&format!("{} cards have been saved.", count))?;
        Ok(Flow::Continue)
    }

    fn ask_cards(&mut self) -> Result<Flow> {
        // Checked before the count prompt; the engine repeats it for library callers.
        if self.store.is_empty() {
            self.io.say(NO_CARDS_MESSAGE)?;
            return Ok(Flow::Continue);
        }

        let count = loop {
            let input = self.io.ask(COUNT_PROMPT)?;
            match parse_question_count(&input) {
                Ok(count) => break count,
                Err(_) => self.io.say(COUNT_INVALID)?,
            }
        };

        self.engine
            .run_session(&self.store, &mut self.tracker, count, &mut self.io)?;
        Ok(Flow::Continue)
    }

    fn save_log(&mut self) -> Result<Flow> {
        let name = self.io.ask(FILE_NAME_PROMPT)?;

        // The confirmation ends the saved log but is only recorded once the
        // write went through.
        self.io.transcript.save_to(Path::new(&name), LOG_SAVED)?;
        self.io.say(LOG_SAVED)?;
        Ok(Flow::Continue)
    }

    fn show_hardest_card(&mut self) -> Result<Flow> {
        let report = hardest_card(&self.tracker);
        self.io.say(&report.to_string())?;
        Ok(Flow::Continue)
    }

    fn reset_card_stats(&mut self) -> Result<Flow> {
        let message = reset_stats(&mut self.tracker);
        self.io.say(message)?;
        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<Flow> {
        self.io.say(GOODBYE)?;

        if let Some(path) = self.export_on_exit.take() {
            let result = self.export_file(&path);
            self.report(result)?;
        }

        self.io.transcript.close();
        Ok(Flow::Exit)
    }

    /// Cards currently held.
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Miss counts since the last quiz or reset.
    pub fn tracker(&self) -> &MissTracker {
        &self.tracker
    }

    pub fn transcript(&self) -> &Transcript {
        &self.io.transcript
    }

    pub fn console(&self) -> &C {
        &self.io.console
    }
}
