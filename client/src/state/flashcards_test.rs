use super::*;
use crate::net::types::{BackendFlashcard, FlashcardResponse};

fn make_response(n: usize) -> FlashcardResponse {
    FlashcardResponse {
        file_id: "f1".to_owned(),
        language: "en".to_owned(),
        total_flashcards: u32::try_from(n).unwrap_or(0),
        flashcards: (0..n)
            .map(|i| BackendFlashcard { question: format!("Q{i}"), answer: format!("A{i}") })
            .collect(),
    }
}

// =============================================================
// Deck
// =============================================================

#[test]
fn deck_from_response_assigns_unique_ids() {
    let deck = Deck::from_response(&make_response(3), Some("bio.pdf"));
    assert_eq!(deck.title, "Flashcards from bio.pdf");
    assert_eq!(deck.cards.len(), 3);
    assert_ne!(deck.cards[0].id, deck.cards[1].id);
    assert_eq!(deck.cards[2].answer, "A2");
}

#[test]
fn deck_title_falls_back_without_file_name() {
    assert_eq!(deck_title(None), "Generated Flashcards");
}

#[test]
fn anki_file_name_replaces_spaces() {
    assert_eq!(anki_file_name("Flashcards from my notes.pdf"), "Flashcards_from_my_notes.pdf_anki.apkg");
}

// =============================================================
// Viewer
// =============================================================

#[test]
fn next_and_prev_wrap() {
    let mut viewer = DeckViewer::new(3);
    viewer.prev();
    assert_eq!(viewer.index(), 2);
    viewer.next();
    assert_eq!(viewer.index(), 0);
}

#[test]
fn navigation_resets_to_question_face() {
    let mut viewer = DeckViewer::new(2);
    viewer.flip();
    assert!(viewer.show_answer());
    viewer.next();
    assert!(!viewer.show_answer());
}

#[test]
fn keys_drive_viewer() {
    let mut viewer = DeckViewer::new(3);
    assert!(viewer.handle_key("ArrowRight"));
    assert_eq!(viewer.index(), 1);
    assert!(viewer.handle_key(" "));
    assert!(viewer.show_answer());
    assert!(viewer.handle_key("ArrowLeft"));
    assert_eq!(viewer.index(), 0);
    assert!(!viewer.handle_key("x"));
}

#[test]
fn keys_ignored_for_single_card() {
    let mut viewer = DeckViewer::new(1);
    assert!(!viewer.handle_key("Enter"));
    assert!(!viewer.show_answer());
}

#[test]
fn empty_deck_is_safe() {
    let mut viewer = DeckViewer::new(0);
    viewer.next();
    viewer.prev();
    assert_eq!(viewer.index(), 0);
    assert_eq!(viewer.position_label(), "No cards");
}

#[test]
fn position_label_is_one_based() {
    let mut viewer = DeckViewer::new(4);
    viewer.next();
    assert_eq!(viewer.position_label(), "Card 2 of 4");
}

#[test]
fn anki_failure_message_includes_reason() {
    assert_eq!(anki_failure_message("Not found"), "Failed to download Anki deck: Not found");
}
