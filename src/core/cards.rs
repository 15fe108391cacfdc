//! Card store for the flashcard trainer.
//!
//! The store maps each term to its definition. Terms and definitions are
//! unique at the moment a card is added; imports overlay the store without
//! re-checking definitions, so a store built from files may hold the same
//! definition under several terms.
//!
//! Iteration is in ascending term order. Export, hardest-card ties and
//! cross-card answer matching all rely on that order being stable.

use std::collections::BTreeMap;

use crate::error::{FlashcardError, Result};

/// A single flashcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// The prompt shown to the user.
    pub term: String,
    /// The expected answer.
    pub definition: String,
}

impl Card {
    /// Create a new card.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }
}

/// Term to definition mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: BTreeMap<String, String>,
}

impl CardStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that `term` is not already used by a card.
    pub fn validate_term(&self, term: &str) -> Result<()> {
        if self.cards.contains_key(term) {
            return Err(FlashcardError::duplicate_term(term));
        }
        Ok(())
    }

    /// Check that `definition` is not already used by a card.
    pub fn validate_definition(&self, definition: &str) -> Result<()> {
        if self.cards.values().any(|d| d == definition) {
            return Err(FlashcardError::duplicate_definition(definition));
        }
        Ok(())
    }

    /// Add a card, rejecting a term or definition that is already taken.
    ///
    /// The store is unchanged when an error is returned. Callers that talk to
    /// a user are expected to run [`validate_term`](Self::validate_term) and
    /// [`validate_definition`](Self::validate_definition) in a prompt loop
    /// first, so that this call only fails on a programming error.
    pub fn add(&mut self, term: impl Into<String>, definition: impl Into<String>) -> Result<Card> {
        let card = Card::new(term, definition);
        self.validate_term(&card.term)?;
        self.validate_definition(&card.definition)?;

        self.cards.insert(card.term.clone(), card.definition.clone());
        tracing::debug!(term = %card.term, "card added");
        Ok(card)
    }

    /// Insert or replace a card without uniqueness checks.
    ///
    /// Used by imports, where the incoming definition wins over the current one.
    pub(crate) fn upsert(&mut self, term: impl Into<String>, definition: impl Into<String>) {
        self.cards.insert(term.into(), definition.into());
    }

    /// Remove the card for `term`.
    pub fn remove(&mut self, term: &str) -> Result<()> {
        match self.cards.remove(term) {
            Some(_) => {
                tracing::debug!(term, "card removed");
                Ok(())
            }
            None => Err(FlashcardError::card_not_found(term)),
        }
    }

    /// Look up the definition for `term`.
    pub fn lookup(&self, term: &str) -> Result<&str> {
        self.cards
            .get(term)
            .map(String::as_str)
            .ok_or_else(|| FlashcardError::card_not_found(term))
    }

    /// Find the first term, other than `excluding`, whose definition is `definition`.
    pub fn term_for_definition(&self, definition: &str, excluding: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|(term, def)| term.as_str() != excluding && def.as_str() == definition)
            .map(|(term, _)| term.as_str())
    }

    /// Whether a card exists for `term`.
    pub fn contains(&self, term: &str) -> bool {
        self.cards.contains_key(term)
    }

    /// All terms in iteration order.
    pub fn terms(&self) -> Vec<&str> {
        self.cards.keys().map(String::as_str).collect()
    }

    /// Iterate over `(term, definition)` pairs in term order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cards.iter().map(|(t, d)| (t.as_str(), d.as_str()))
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the store has no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl<T, D> FromIterator<(T, D)> for CardStore
where
    T: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (T, D)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (term, definition) in iter {
            store.upsert(term, definition);
        }
        store
    }
}
