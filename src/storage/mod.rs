//! File storage for the flashcard trainer.
//!
//! Card files are plain `term,definition` text; the session transcript is
//! buffered in memory and written out on request.

pub mod codec;
pub mod transcript;

pub use codec::{export_to, import_from, parse_cards, serialize_cards, ImportReport};
pub use transcript::Transcript;
