use super::*;
use crate::state::quiz::Quiz;

fn source() -> StudySource {
    StudySource { file_id: "f1".to_owned(), file_name: "notes.pdf".to_owned() }
}

fn empty_quiz() -> Quiz {
    Quiz { title: "Generated Quiz".to_owned(), questions: Vec::new() }
}

// =============================================================
// Stage transitions
// =============================================================

#[test]
fn quiz_path_walks_forward_and_back() {
    let mut flow = StudyFlow::default();
    assert_eq!(flow.stage(), StudyStage::Library);

    flow.select_source(source());
    assert_eq!(flow.stage(), StudyStage::ChooseTool);
    flow.choose_quiz();
    assert_eq!(flow.stage(), StudyStage::QuizSettings);
    flow.quiz_ready(empty_quiz());
    assert_eq!(flow.stage(), StudyStage::TimeLimit);
    flow.start_quiz(120);
    assert_eq!(flow.stage(), StudyStage::TakingQuiz);
    assert_eq!(flow.time_limit_secs(), 120);

    flow.back();
    assert_eq!(flow.stage(), StudyStage::TimeLimit);
    flow.back();
    assert_eq!(flow.stage(), StudyStage::QuizSettings);
    flow.back();
    assert_eq!(flow.stage(), StudyStage::ChooseTool);
    flow.back();
    assert_eq!(flow.stage(), StudyStage::Library);
    assert!(flow.source().is_none());
}

#[test]
fn flashcard_path_backs_to_settings() {
    let mut flow = StudyFlow::default();
    flow.select_source(source());
    flow.choose_flashcards();
    assert_eq!(flow.stage(), StudyStage::FlashcardSettings);
    flow.deck_ready(Deck {
        title: "t".to_owned(),
        file_id: "f1".to_owned(),
        language: "en".to_owned(),
        cards: Vec::new(),
    });
    assert_eq!(flow.stage(), StudyStage::ViewingFlashcards);
    flow.back();
    assert_eq!(flow.stage(), StudyStage::FlashcardSettings);
}

#[test]
fn tool_choice_requires_choose_tool_stage() {
    let mut flow = StudyFlow::default();
    flow.choose_quiz();
    flow.choose_flashcards();
    assert_eq!(flow.stage(), StudyStage::Library);
}

#[test]
fn start_quiz_requires_generated_quiz() {
    let mut flow = StudyFlow::default();
    flow.select_source(source());
    flow.start_quiz(60);
    assert_eq!(flow.stage(), StudyStage::ChooseTool);
}

#[test]
fn back_to_library_resets_everything() {
    let mut flow = StudyFlow::default();
    flow.select_source(source());
    flow.quiz_ready(empty_quiz());
    flow.back_to_library();
    assert_eq!(flow, StudyFlow::default());
}

// =============================================================
// Settings
// =============================================================

#[test]
fn quiz_settings_defaults_build_mixed_request() {
    let request = QuizSettings::default().to_request(Some("f1")).unwrap();
    assert_eq!(request.total_questions, 10);
    assert_eq!(request.num_single_correct, 5);
    assert_eq!(request.num_multiple_correct, 3);
    assert_eq!(request.num_yes_no, 2);
    assert_eq!(request.quizzes_type, "mixed");
    assert_eq!(request.language, "en");
}

#[test]
fn quiz_settings_require_file_id_first() {
    let settings = QuizSettings { single_correct: 0, multiple_correct: 0, yes_no: 0, ..QuizSettings::default() };
    assert_eq!(settings.to_request(None), Err(MISSING_FILE_ID));
    assert_eq!(settings.to_request(Some("")), Err(MISSING_FILE_ID));
    assert_eq!(settings.to_request(Some("f1")), Err(QUIZ_COUNT_REQUIRED));
}

#[test]
fn flashcard_settings_validate_count() {
    let settings = FlashcardSettings { count: 0, ..FlashcardSettings::default() };
    assert_eq!(settings.to_request(Some("f1")), Err(FLASHCARD_COUNT_REQUIRED));
    let request = FlashcardSettings::default().to_request(Some("f1")).unwrap();
    assert_eq!(request.total_flashcards, 10);
}

#[test]
fn parse_count_treats_junk_as_zero() {
    assert_eq!(parse_count(" 7 "), 7);
    assert_eq!(parse_count(""), 0);
    assert_eq!(parse_count("-3"), 0);
    assert_eq!(parse_count("abc"), 0);
}

#[test]
fn language_tables_have_expected_sizes() {
    assert_eq!(QUIZ_LANGUAGES.len(), 5);
    assert_eq!(FLASHCARD_LANGUAGES.len(), 12);
}
