//! Flashcard deck and the single-card viewer.
//!
//! The viewer only tracks position and face; the deck itself is immutable
//! once generated.

#[cfg(test)]
#[path = "flashcards_test.rs"]
mod flashcards_test;

use crate::net::types::FlashcardResponse;

pub const ANKI_PREPARING: &str = "Preparing Anki deck...";
pub const ANKI_DOWNLOADED: &str = "Anki deck downloaded successfully!";
pub const ANKI_MISSING_SOURCE: &str = "Missing file ID or language for Anki download.";

pub fn anki_failure_message(reason: &str) -> String {
    format!("Failed to download Anki deck: {reason}")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    pub title: String,
    pub file_id: String,
    pub language: String,
    pub cards: Vec<Flashcard>,
}

impl Deck {
    /// Build a deck from the generator response. Cards get fresh ids since
    /// the backend supplies none.
    pub fn from_response(response: &FlashcardResponse, file_name: Option<&str>) -> Self {
        Self {
            title: deck_title(file_name),
            file_id: response.file_id.clone(),
            language: response.language.clone(),
            cards: response
                .flashcards
                .iter()
                .map(|card| Flashcard {
                    id: uuid::Uuid::new_v4().to_string(),
                    question: card.question.clone(),
                    answer: card.answer.clone(),
                })
                .collect(),
        }
    }
}

pub fn deck_title(file_name: Option<&str>) -> String {
    match file_name {
        Some(name) if !name.is_empty() => format!("Flashcards from {name}"),
        _ => "Generated Flashcards".to_owned(),
    }
}

/// Download name for an exported deck: spaces become underscores.
pub fn anki_file_name(title: &str) -> String {
    format!("{}_anki.apkg", title.replace(' ', "_"))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckKey {
    Next,
    Prev,
    Flip,
}

/// Keyboard mapping for the viewer: arrows navigate, space or enter flips.
pub fn deck_key(key: &str) -> Option<DeckKey> {
    match key {
        "ArrowRight" => Some(DeckKey::Next),
        "ArrowLeft" => Some(DeckKey::Prev),
        " " | "Enter" => Some(DeckKey::Flip),
        _ => None,
    }
}

/// Position within a deck of `len` cards, plus which face is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeckViewer {
    index: usize,
    len: usize,
    show_answer: bool,
}

impl DeckViewer {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, show_answer: false }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_answer(&self) -> bool {
        self.show_answer
    }

    pub fn can_navigate(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
        self.show_answer = false;
    }

    pub fn prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
        self.show_answer = false;
    }

    pub fn flip(&mut self) {
        self.show_answer = !self.show_answer;
    }

    /// Apply a key press. Returns `true` when the key was consumed; keys are
    /// ignored entirely for decks of one card or fewer.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.can_navigate() {
            return false;
        }
        match deck_key(key) {
            Some(DeckKey::Next) => self.next(),
            Some(DeckKey::Prev) => self.prev(),
            Some(DeckKey::Flip) => self.flip(),
            None => return false,
        }
        true
    }

    pub fn position_label(&self) -> String {
        if self.len == 0 {
            return "No cards".to_owned();
        }
        format!("Card {} of {}", self.index + 1, self.len)
    }
}
