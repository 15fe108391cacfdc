//! Unified error type for the flashcard trainer.
//!
//! Most errors are recoverable: the command loop turns them into a message
//! and prompts again. Only file I/O failures abort the single operation that
//! hit them, and even those never end the session.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for flashcard operations.
#[derive(Error, Debug)]
pub enum FlashcardError {
    /// A card with this term already exists.
    #[error("the term \"{term}\" already exists")]
    DuplicateTerm { term: String },

    /// A card with this definition already exists.
    #[error("the definition \"{definition}\" already exists")]
    DuplicateDefinition { definition: String },

    /// No card with this term.
    #[error("there is no card for \"{term}\"")]
    CardNotFound { term: String },

    /// An import source does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The user typed something that is not a non-negative integer.
    #[error("not a non-negative integer: {input:?}")]
    InvalidInteger { input: String },

    /// I/O errors while reading or writing card, log or config files.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// The console reached end of input.
    #[error("input closed")]
    InputClosed,
}

/// A specialized Result type for flashcard operations.
pub type Result<T> = std::result::Result<T, FlashcardError>;

impl FlashcardError {
    /// Create a duplicate term error.
    pub fn duplicate_term(term: impl Into<String>) -> Self {
        Self::DuplicateTerm { term: term.into() }
    }

    /// Create a duplicate definition error.
    pub fn duplicate_definition(definition: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            definition: definition.into(),
        }
    }

    /// Create a card not found error.
    pub fn card_not_found(term: impl Into<String>) -> Self {
        Self::CardNotFound { term: term.into() }
    }

    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create an invalid integer error.
    pub fn invalid_integer(input: impl Into<String>) -> Self {
        Self::InvalidInteger {
            input: input.into(),
        }
    }

    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }
}

impl From<io::Error> for FlashcardError {
    fn from(err: io::Error) -> Self {
        Self::Storage {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for FlashcardError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}

/// Fail-open handling: log a warning and fall back instead of failing.
pub trait FailOpen<T> {
    /// Handle an error by logging a warning and returning the default value.
    fn fail_open_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T> FailOpen<T> for Result<T> {
    fn fail_open_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-open: using default)", context, err);
                T::default()
            }
        }
    }
}

/// Process exit codes.
///
/// Errors are reported as messages, so a normal run always ends with
/// `SUCCESS`. `CRASH` is reserved for the panic hook.
pub mod exit_codes {
    /// Normal termination.
    pub const SUCCESS: i32 = 0;

    /// The process panicked.
    pub const CRASH: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_term_display() {
        let err = FlashcardError::duplicate_term("France");
        assert_eq!(err.to_string(), "the term \"France\" already exists");
    }

    #[test]
    fn test_duplicate_definition_display() {
        let err = FlashcardError::duplicate_definition("Paris");
        assert_eq!(err.to_string(), "the definition \"Paris\" already exists");
    }

    #[test]
    fn test_card_not_found_display() {
        let err = FlashcardError::card_not_found("Spain");
        assert_eq!(err.to_string(), "there is no card for \"Spain\"");
    }

    #[test]
    fn test_file_not_found_display() {
        let err = FlashcardError::file_not_found("/tmp/missing.txt");
        assert!(err.to_string().contains("/tmp/missing.txt"));
    }

    #[test]
    fn test_invalid_integer_display() {
        let err = FlashcardError::invalid_integer("three");
        assert_eq!(err.to_string(), "not a non-negative integer: \"three\"");
    }

    #[test]
    fn test_storage_error_display() {
        let err = FlashcardError::storage(
            "/tmp/cards.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "access denied"),
        );
        assert!(err.to_string().contains("storage error"));
        assert!(err.to_string().contains("/tmp/cards.txt"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: FlashcardError = io_err.into();
        assert!(matches!(err, FlashcardError::Storage { .. }));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Table>("not [[[ toml").unwrap_err();
        let err: FlashcardError = toml_err.into();
        assert!(matches!(err, FlashcardError::Config { .. }));
    }

    #[test]
    fn test_fail_open_default() {
        let result: Result<Vec<String>> = Err(FlashcardError::file_not_found("cfg.toml"));
        let value = result.fail_open_default("test context");
        assert!(value.is_empty());
    }

    #[test]
    fn test_fail_open_success() {
        let result: Result<u64> = Ok(7);
        assert_eq!(result.fail_open_default("test context"), 7);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CRASH, 3);
    }
}
